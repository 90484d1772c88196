//! One plugin session against simulated hardware

use crate::profile::{Preset, Profile};
use anyhow::{Context, Result};
use flash_plugin::{
    CameraManager, FlashPlugin, METHOD_GET_CAPABILITIES, METHOD_SET_BRIGHTNESS, METHOD_TOGGLE,
    PlatformCapabilities, SimulatedCameraManager, SimulatedTorch, TorchWrite,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use torchbridge_core::LogLevel;
use torchbridge_host::{CallOutcome, PluginConfig, PluginHandle};

/// What torchctl prints after a command
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub outcome: CallOutcome,
    pub writes: Vec<TorchWrite>,
    pub torch: SimulatedTorch,
}

/// A started flash plugin wired to the profile's simulated cameras
pub struct Shell {
    manager: Arc<SimulatedCameraManager>,
    handle: PluginHandle,
}

impl Shell {
    /// Build the simulated device and start the plugin on it
    pub fn open(profile: &Profile, log_level: LogLevel) -> Result<Self> {
        let manager = Arc::new(SimulatedCameraManager::new(profile.cameras.clone()));
        let plugin = FlashPlugin::new(
            Arc::clone(&manager) as Arc<dyn CameraManager>,
            PlatformCapabilities::from_api_level(profile.api_level),
        );

        let mut config = PluginConfig::with_data(json!({
            "requireFlashUnit": profile.require_flash_unit,
        }));
        config.log_level = log_level.to_string().to_ascii_lowercase();

        let handle = PluginHandle::new(Box::new(plugin), config)
            .context("Failed to create plugin handle")?;
        handle.start().context("Failed to start the Flash plugin")?;
        tracing::debug!(api_level = profile.api_level, cameras = profile.cameras.len(), "Shell ready");

        Ok(Self { manager, handle })
    }

    pub fn probe(&self) -> Report {
        self.call(METHOD_GET_CAPABILITIES, json!({}))
    }

    /// Toggle the torch; `None` leaves `state` out of the call
    pub fn toggle(&self, state: Option<bool>) -> Report {
        let options = match state {
            Some(state) => json!({ "state": state }),
            None => json!({}),
        };
        self.call(METHOD_TOGGLE, options)
    }

    pub fn brightness(&self, level: i32) -> Report {
        self.call(METHOD_SET_BRIGHTNESS, json!({ "level": level }))
    }

    /// Apply the preset's value through `setBrightness`
    pub fn preset(&self, preset: &Preset) -> Report {
        tracing::info!(preset = %preset.label, value = preset.value, "Applying preset");
        self.brightness(preset.value)
    }

    /// Unload the plugin
    pub fn close(&self) -> Result<()> {
        self.handle
            .shutdown()
            .context("Failed to shut down the Flash plugin")
    }

    fn call(&self, method: &str, options: serde_json::Value) -> Report {
        let outcome = self.handle.call_value(method, options);
        Report {
            outcome,
            writes: self.manager.writes(),
            torch: self.manager.torch(),
        }
    }
}

#[cfg(test)]
#[path = "shell/shell_tests.rs"]
mod shell_tests;
