//! Device profile parsing and validation

use anyhow::{Context, Result};
use flash_plugin::SimulatedUnit;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// API level of the built-in device
pub const BUILTIN_API_LEVEL: u32 = 34;

/// Strength maximum of the built-in device's rear flash
pub const BUILTIN_MAX_STRENGTH_LEVEL: i32 = 10;

/// torchctl.toml device profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default = "default_api_level")]
    pub api_level: u32,

    /// Fail plugin startup when no camera has a flash
    #[serde(default)]
    pub require_flash_unit: bool,

    #[serde(default, rename = "camera")]
    pub cameras: Vec<SimulatedUnit>,

    #[serde(default = "default_presets", rename = "preset")]
    pub presets: Vec<Preset>,
}

/// A named brightness level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub label: String,
    pub value: i32,
}

impl Preset {
    pub fn new(label: impl Into<String>, value: i32) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

fn default_api_level() -> u32 {
    BUILTIN_API_LEVEL
}

fn default_presets() -> Vec<Preset> {
    vec![
        Preset::new("Reading", 20),
        Preset::new("Night", 5),
        Preset::new("Max", 100),
    ]
}

impl Profile {
    /// A phone with one rear flash supporting graduated strength
    pub fn builtin() -> Self {
        Self {
            api_level: BUILTIN_API_LEVEL,
            require_flash_unit: false,
            cameras: vec![SimulatedUnit::with_flash("0", Some(BUILTIN_MAX_STRENGTH_LEVEL))],
            presets: default_presets(),
        }
    }

    /// Load a profile from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read profile: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse a profile from a string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse profile")
    }

    /// Validate the profile
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for camera in &self.cameras {
            if camera.id.is_empty() {
                anyhow::bail!("Camera id cannot be empty");
            }
            if !ids.insert(camera.id.as_str()) {
                anyhow::bail!("Duplicate camera id: {}", camera.id);
            }
            if let Some(max) = camera.strength_max_level
                && max < 1
            {
                anyhow::bail!(
                    "Camera {}: max_strength_level must be at least 1, got {}",
                    camera.id,
                    max
                );
            }
        }

        let mut labels = HashSet::new();
        for preset in &self.presets {
            if preset.label.trim().is_empty() {
                anyhow::bail!("Preset label cannot be empty");
            }
            if !labels.insert(preset.label.to_lowercase()) {
                anyhow::bail!("Duplicate preset label: {}", preset.label);
            }
        }

        Ok(())
    }

    /// Find a preset by label, ignoring case
    pub fn preset(&self, label: &str) -> Option<&Preset> {
        self.presets
            .iter()
            .find(|preset| preset.label.eq_ignore_ascii_case(label))
    }
}
