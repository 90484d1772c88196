#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// Graduated control
// ============================================================================

#[test_case(50, 10, 5 ; "half of ten")]
#[test_case(5, 10, 1 ; "rounds down to zero then floors up to one")]
#[test_case(100, 10, 10 ; "full range")]
#[test_case(150, 10, 15 ; "above range is not clamped")]
#[test_case(0, 10, 1 ; "zero never turns the torch off")]
#[test_case(-40, 10, 1 ; "negative floors to one")]
#[test_case(33, 3, 1 ; "just under one step")]
#[test_case(99, 7, 6 ; "truncates toward floor")]
#[test_case(1, 250, 2 ; "fine grained unit")]
#[test_case(100, 2, 2 ; "smallest graduated unit")]
fn resolve_brightness___graduated_unit___scales_into_range(level: i32, max: i32, expected: i32) {
    let command = resolve_brightness(level, Some(max), PlatformCapabilities::graduated());

    assert_eq!(command, TorchCommand::Strength(expected));
}

#[test]
fn resolve_brightness___huge_request___saturates() {
    let command = resolve_brightness(i32::MAX, Some(i32::MAX), PlatformCapabilities::graduated());

    assert_eq!(command, TorchCommand::Strength(i32::MAX));
}

// ============================================================================
// Binary fallback
// ============================================================================

#[test_case(Some(1) ; "single step unit")]
#[test_case(Some(0) ; "zero max")]
#[test_case(Some(-3) ; "negative max")]
#[test_case(None ; "max not reported")]
fn resolve_brightness___no_usable_range___falls_back_to_on(max: Option<i32>) {
    let command = resolve_brightness(50, max, PlatformCapabilities::graduated());

    assert_eq!(command, TorchCommand::Binary(true));
}

#[test_case(0)]
#[test_case(50)]
#[test_case(100)]
#[test_case(150)]
fn resolve_brightness___legacy_platform___always_on(level: i32) {
    let command = resolve_brightness(level, Some(10), PlatformCapabilities::legacy());

    assert_eq!(command, TorchCommand::Binary(true));
}

#[test]
fn TorchCommand___serialize___tags_kind_and_value() {
    let json = serde_json::to_value(TorchCommand::Strength(5)).unwrap();

    assert_eq!(json, serde_json::json!({"kind": "strength", "value": 5}));
}

#[test]
fn DEFAULT_BRIGHTNESS___is_full_power() {
    assert_eq!(DEFAULT_BRIGHTNESS, 100);
}
