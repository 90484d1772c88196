//! Camera manager seam and platform capability descriptor

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// First platform API level with graduated torch strength control
pub const GRADUATED_CONTROL_MIN_API_LEVEL: u32 = 33;

/// Classification of a platform camera failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraErrorKind {
    /// The app lacks permission or the camera is disabled by policy
    AccessDenied,
    /// The camera device is no longer connected
    Disconnected,
    /// Another client holds the camera
    InUse,
    /// The platform rejected an argument (unknown id, strength out of range)
    InvalidArgument,
    Other,
}

/// Error raised by a [`CameraManager`] call
///
/// Displays as the platform's message and nothing else, because that text is
/// what the host receives when a call is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct CameraError {
    pub kind: CameraErrorKind,
    pub message: String,
}

impl CameraError {
    pub fn new(kind: CameraErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn access_denied(message: impl Into<String>) -> Self {
        Self::new(CameraErrorKind::AccessDenied, message)
    }

    pub fn disconnected(message: impl Into<String>) -> Self {
        Self::new(CameraErrorKind::Disconnected, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(CameraErrorKind::InvalidArgument, message)
    }
}

/// Characteristics of one camera unit that matter for torch control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraCharacteristics {
    /// Flash capability flag; `None` when the platform does not report it
    pub flash_available: Option<bool>,
    /// Maximum graduated torch strength; `None` when not reported
    pub strength_max_level: Option<i32>,
}

impl CameraCharacteristics {
    pub fn has_flash(&self) -> bool {
        self.flash_available == Some(true)
    }
}

/// Hardware manager for the device's camera units
///
/// Implemented over the platform camera service. Every method is a single
/// synchronous platform call; ordering between concurrent callers is left to
/// the platform.
pub trait CameraManager: Send + Sync {
    /// Identifiers of every camera unit, in platform enumeration order
    fn camera_id_list(&self) -> Result<Vec<String>, CameraError>;

    /// Characteristics of one unit
    fn camera_characteristics(&self, camera_id: &str) -> Result<CameraCharacteristics, CameraError>;

    /// Binary torch write
    fn set_torch_mode(&self, camera_id: &str, enabled: bool) -> Result<(), CameraError>;

    /// Graduated torch write; `level` must be at least 1
    fn set_torch_strength_level(&self, camera_id: &str, level: i32) -> Result<(), CameraError>;
}

/// What the running platform supports, fixed when the plugin is constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformCapabilities {
    pub supports_graduated_control: bool,
}

impl PlatformCapabilities {
    /// Derive capabilities from the platform API level
    pub fn from_api_level(api_level: u32) -> Self {
        Self {
            supports_graduated_control: api_level >= GRADUATED_CONTROL_MIN_API_LEVEL,
        }
    }

    /// Binary torch control only
    pub fn legacy() -> Self {
        Self {
            supports_graduated_control: false,
        }
    }

    /// Graduated torch control available
    pub fn graduated() -> Self {
        Self {
            supports_graduated_control: true,
        }
    }
}
