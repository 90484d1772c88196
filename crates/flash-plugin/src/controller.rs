//! Torch controller bound to at most one flash unit

use crate::camera::{CameraError, CameraManager, PlatformCapabilities};
use crate::discovery::{DiscoveryError, FlashUnit, discover_flash_unit};
use crate::strength::{TorchCommand, resolve_brightness};
use std::sync::Arc;
use thiserror::Error;
use torchbridge_core::PluginError;

/// Message the host receives when no flash unit is bound
pub const FLASH_NOT_AVAILABLE: &str = "Flash not available";

/// Failure of a single torch call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TorchError {
    /// No flash-capable unit was discovered
    #[error("{}", FLASH_NOT_AVAILABLE)]
    Unavailable,

    /// The platform rejected the write; displays the platform message
    #[error(transparent)]
    Platform(#[from] CameraError),
}

impl From<TorchError> for PluginError {
    fn from(err: TorchError) -> Self {
        PluginError::Rejected(err.to_string())
    }
}

/// Issues torch writes to the discovered flash unit
///
/// The unit is chosen once, at construction, and never changes. The controller
/// keeps no copy of the torch state; each call is one write.
pub struct TorchController {
    manager: Arc<dyn CameraManager>,
    platform: PlatformCapabilities,
    unit: Option<FlashUnit>,
}

impl TorchController {
    /// Discover the flash unit, staying unbound if discovery fails
    ///
    /// The discovery error is logged and every later call reports
    /// [`TorchError::Unavailable`].
    pub fn initialize(manager: Arc<dyn CameraManager>, platform: PlatformCapabilities) -> Self {
        let unit = match discover_flash_unit(manager.as_ref()) {
            Ok(unit) => {
                tracing::info!(camera_id = %unit.id, max_strength_level = ?unit.max_strength_level, "Flash unit bound");
                Some(unit)
            }
            Err(err) => {
                tracing::warn!("Flash unit discovery failed: {}", err);
                None
            }
        };
        Self {
            manager,
            platform,
            unit,
        }
    }

    /// Discover the flash unit and surface the discovery error to the caller
    pub fn try_initialize(
        manager: Arc<dyn CameraManager>,
        platform: PlatformCapabilities,
    ) -> Result<Self, DiscoveryError> {
        let unit = discover_flash_unit(manager.as_ref())?;
        tracing::info!(camera_id = %unit.id, max_strength_level = ?unit.max_strength_level, "Flash unit bound");
        Ok(Self {
            manager,
            platform,
            unit: Some(unit),
        })
    }

    pub fn flash_unit(&self) -> Option<&FlashUnit> {
        self.unit.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.unit.is_some()
    }

    pub fn platform(&self) -> PlatformCapabilities {
        self.platform
    }

    /// Whether brightness requests reach the unit as graduated strength writes
    pub fn graduated_control(&self) -> bool {
        self.unit.as_ref().is_some_and(|unit| {
            matches!(
                resolve_brightness(0, unit.max_strength_level, self.platform),
                TorchCommand::Strength(_)
            )
        })
    }

    /// Turn the torch on or off
    pub fn toggle(&self, enabled: bool) -> Result<(), TorchError> {
        let unit = self.bound_unit()?;
        self.apply(unit, TorchCommand::Binary(enabled))
    }

    /// Set the torch to a brightness percentage
    ///
    /// Returns the write that was issued.
    pub fn set_brightness(&self, level: i32) -> Result<TorchCommand, TorchError> {
        let unit = self.bound_unit()?;
        let command = resolve_brightness(level, unit.max_strength_level, self.platform);
        self.apply(unit, command)?;
        Ok(command)
    }

    fn bound_unit(&self) -> Result<&FlashUnit, TorchError> {
        self.unit.as_ref().ok_or(TorchError::Unavailable)
    }

    fn apply(&self, unit: &FlashUnit, command: TorchCommand) -> Result<(), TorchError> {
        tracing::debug!(camera_id = %unit.id, ?command, "Writing torch state");
        match command {
            TorchCommand::Binary(enabled) => self.manager.set_torch_mode(&unit.id, enabled)?,
            TorchCommand::Strength(level) => {
                self.manager.set_torch_strength_level(&unit.id, level)?
            }
        }
        Ok(())
    }
}
