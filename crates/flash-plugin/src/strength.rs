//! Brightness to torch strength mapping

use crate::camera::PlatformCapabilities;
use serde::Serialize;

/// Brightness used when the caller omits `level`
pub const DEFAULT_BRIGHTNESS: i32 = 100;

/// The single torch write a brightness request turns into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TorchCommand {
    /// Binary on/off write
    Binary(bool),
    /// Graduated write, always at least 1
    Strength(i32),
}

/// Map a 0..=100 brightness request onto the unit's strength range
///
/// With graduated control and a maximum above 1 the result is
/// `max(1, floor(level / 100 * max_level))`. Requests outside 0..=100 are not
/// clamped here: 150% of a 10-step unit asks for 15 and the platform decides.
/// Without graduated control the request degrades to plain "on".
pub fn resolve_brightness(
    level: i32,
    max_level: Option<i32>,
    platform: PlatformCapabilities,
) -> TorchCommand {
    match max_level {
        Some(max) if platform.supports_graduated_control && max > 1 => {
            TorchCommand::Strength(scale_to_strength(level, max))
        }
        _ => TorchCommand::Binary(true),
    }
}

fn scale_to_strength(level: i32, max_level: i32) -> i32 {
    let scaled = (f64::from(level) / 100.0) * f64::from(max_level);
    // Float-to-int `as` saturates, so huge requests pin at i32::MAX.
    scaled.floor().max(1.0) as i32
}

#[cfg(test)]
#[path = "strength/strength_tests.rs"]
mod strength_tests;
