//! flash-plugin - Camera flash (torch) control for torchbridge hosts
//!
//! On load the plugin scans the device's cameras for the first one with a
//! flash and binds to it for the rest of the process. After that it answers:
//!
//! - `toggle { state: bool = false }`: binary on/off
//! - `setBrightness { level: int = 100 }`: graduated strength when the
//!   platform and the unit support it, plain "on" otherwise
//! - `getCapabilities`: what discovery found
//!
//! Torch calls made while no unit is bound are rejected with
//! `"Flash not available"`; platform failures are rejected with the platform's
//! own message.
//!
//! The platform camera service is reached through the [`CameraManager`]
//! trait. [`SimulatedCameraManager`] implements it in memory.

mod camera;
mod controller;
mod discovery;
mod plugin;
mod simulated;
mod strength;

pub use camera::{
    CameraCharacteristics, CameraError, CameraErrorKind, CameraManager,
    GRADUATED_CONTROL_MIN_API_LEVEL, PlatformCapabilities,
};
pub use controller::{FLASH_NOT_AVAILABLE, TorchController, TorchError};
pub use discovery::{DiscoveryError, FlashUnit, discover_flash_unit};
pub use plugin::{
    Capabilities, FlashConfig, FlashPlugin, METHOD_GET_CAPABILITIES, METHOD_SET_BRIGHTNESS,
    METHOD_TOGGLE, PLUGIN_NAME,
};
pub use simulated::{SimulatedCameraManager, SimulatedTorch, SimulatedUnit, TorchWrite};
pub use strength::{DEFAULT_BRIGHTNESS, TorchCommand, resolve_brightness};
