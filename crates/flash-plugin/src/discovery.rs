//! Flash unit discovery

use crate::camera::{CameraError, CameraManager};
use serde::Serialize;
use thiserror::Error;

/// The camera unit whose torch this plugin drives
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashUnit {
    pub id: String,
    pub max_strength_level: Option<i32>,
}

/// Why no flash unit could be bound
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    /// Listing or querying cameras failed; the scan stopped at the error
    #[error("camera enumeration failed: {0}")]
    Enumeration(#[from] CameraError),

    /// Every unit was queried and none reported a flash
    #[error("no flash-capable camera among {scanned} unit(s)")]
    NoFlashUnit { scanned: usize },
}

/// Find the first camera unit that reports a flash
///
/// Units are visited in the order the platform lists them and the scan stops
/// at the first match. Any platform error ends the scan immediately.
pub fn discover_flash_unit(manager: &dyn CameraManager) -> Result<FlashUnit, DiscoveryError> {
    let ids = manager.camera_id_list()?;
    let scanned = ids.len();

    for id in ids {
        let characteristics = manager.camera_characteristics(&id)?;
        if characteristics.has_flash() {
            tracing::debug!(camera_id = %id, "Found flash-capable camera");
            return Ok(FlashUnit {
                id,
                max_strength_level: characteristics.strength_max_level,
            });
        }
    }

    Err(DiscoveryError::NoFlashUnit { scanned })
}

#[cfg(test)]
#[path = "discovery/discovery_tests.rs"]
mod discovery_tests;
