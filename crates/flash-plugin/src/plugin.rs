//! The `Flash` plugin exposed to the host shell

use crate::camera::{CameraManager, PlatformCapabilities};
use crate::controller::{TorchController, TorchError};
use crate::strength::DEFAULT_BRIGHTNESS;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use torchbridge_core::{
    Plugin, PluginCall, PluginContext, PluginError, PluginMetadata, PluginResult,
};

/// Name the host registers this plugin under
pub const PLUGIN_NAME: &str = "Flash";

pub const METHOD_TOGGLE: &str = "toggle";
pub const METHOD_SET_BRIGHTNESS: &str = "setBrightness";
pub const METHOD_GET_CAPABILITIES: &str = "getCapabilities";

/// Plugin settings read from [`torchbridge_core::PluginConfig::data`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashConfig {
    /// Fail plugin startup when no flash unit can be bound
    ///
    /// Off by default: the plugin loads unbound and rejects every torch call
    /// with "Flash not available".
    #[serde(default)]
    pub require_flash_unit: bool,
}

/// Response of `getCapabilities`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub available: bool,
    pub camera_id: Option<String>,
    pub max_strength_level: Option<i32>,
    pub graduated_control: bool,
}

/// Camera flash plugin
///
/// Binds the torch controller in `on_start` and answers `toggle`,
/// `setBrightness` and `getCapabilities`.
pub struct FlashPlugin {
    manager: Arc<dyn CameraManager>,
    platform: PlatformCapabilities,
    controller: OnceCell<TorchController>,
}

impl FlashPlugin {
    pub fn new(manager: Arc<dyn CameraManager>, platform: PlatformCapabilities) -> Self {
        Self {
            manager,
            platform,
            controller: OnceCell::new(),
        }
    }

    /// The controller, once `on_start` has run
    pub fn controller(&self) -> Option<&TorchController> {
        self.controller.get()
    }

    fn bind(&self, config: &FlashConfig) -> PluginResult<TorchController> {
        let manager = Arc::clone(&self.manager);
        if config.require_flash_unit {
            TorchController::try_initialize(manager, self.platform)
                .map_err(|err| PluginError::InitializationFailed(err.to_string()))
        } else {
            Ok(TorchController::initialize(manager, self.platform))
        }
    }

    fn handle_toggle(&self, call: &PluginCall) -> PluginResult<serde_json::Value> {
        let state = call.get_bool("state", false);
        tracing::debug!(call_id = call.call_id(), state, "Handling toggle");
        self.bound_controller()?.toggle(state)?;
        Ok(empty_ack())
    }

    fn handle_set_brightness(&self, call: &PluginCall) -> PluginResult<serde_json::Value> {
        let level = call.get_int("level", DEFAULT_BRIGHTNESS);
        tracing::debug!(call_id = call.call_id(), level, "Handling setBrightness");
        self.bound_controller()?.set_brightness(level)?;
        Ok(empty_ack())
    }

    fn handle_get_capabilities(&self) -> PluginResult<serde_json::Value> {
        let capabilities = match self.controller.get() {
            Some(controller) => {
                let unit = controller.flash_unit();
                Capabilities {
                    available: unit.is_some(),
                    camera_id: unit.map(|u| u.id.clone()),
                    max_strength_level: unit.and_then(|u| u.max_strength_level),
                    graduated_control: controller.graduated_control(),
                }
            }
            None => Capabilities {
                available: false,
                camera_id: None,
                max_strength_level: None,
                graduated_control: false,
            },
        };
        Ok(serde_json::to_value(capabilities)?)
    }

    // A call that reaches the plugin before `on_start` sees no unit.
    fn bound_controller(&self) -> Result<&TorchController, TorchError> {
        self.controller.get().ok_or(TorchError::Unavailable)
    }
}

fn empty_ack() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Plugin for FlashPlugin {
    fn on_start(&self, ctx: &PluginContext) -> PluginResult<()> {
        let config: FlashConfig = ctx
            .config
            .data_as()
            .map_err(|err| PluginError::ConfigError(err.to_string()))?;

        // A restart keeps the unit bound by the first start.
        self.controller.get_or_try_init(|| self.bind(&config))?;
        Ok(())
    }

    fn handle_call(
        &self,
        _ctx: &PluginContext,
        call: &PluginCall,
    ) -> PluginResult<serde_json::Value> {
        match call.method() {
            METHOD_TOGGLE => self.handle_toggle(call),
            METHOD_SET_BRIGHTNESS => self.handle_set_brightness(call),
            METHOD_GET_CAPABILITIES => self.handle_get_capabilities(),
            other => Err(PluginError::UnknownMethod(other.to_string())),
        }
    }

    fn on_stop(&self, _ctx: &PluginContext) -> PluginResult<()> {
        tracing::info!("Flash plugin stopped");
        Ok(())
    }

    fn metadata(&self) -> Option<PluginMetadata> {
        Some(
            PluginMetadata::new(PLUGIN_NAME, env!("CARGO_PKG_VERSION"))
                .with_description("Camera flash (torch) control"),
        )
    }

    fn supported_methods(&self) -> Vec<&'static str> {
        vec![METHOD_TOGGLE, METHOD_SET_BRIGHTNESS, METHOD_GET_CAPABILITIES]
    }
}
