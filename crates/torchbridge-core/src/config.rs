//! Plugin configuration types

use serde::{Deserialize, Serialize};

/// Plugin configuration handed over by the host when the plugin is loaded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Plugin-specific configuration data
    ///
    /// Each plugin defines its own shape for this object and reads it with
    /// [`PluginConfig::data_as`].
    #[serde(default)]
    pub data: serde_json::Value,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            data: serde_json::Value::Null,
            log_level: default_log_level(),
        }
    }
}

impl PluginConfig {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }

    /// Create configuration with the given plugin data
    pub fn with_data(data: serde_json::Value) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    /// Deserialize the whole data object into a plugin-defined type
    ///
    /// A `null` data object deserializes as an empty object, so types whose
    /// fields all carry `#[serde(default)]` come back with their defaults.
    pub fn data_as<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        if self.data.is_null() {
            return serde_json::from_value(serde_json::Value::Object(serde_json::Map::new()));
        }
        serde_json::from_value(self.data.clone())
    }
}

/// Plugin metadata reported to the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginMetadata {
    /// Name the host registers the plugin under
    pub name: String,

    /// Plugin version (semver)
    pub version: String,

    /// Plugin description
    #[serde(default)]
    pub description: Option<String>,
}

impl PluginMetadata {
    /// Create new plugin metadata
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: None,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
