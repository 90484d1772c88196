#![allow(non_snake_case)]

use super::*;
use flash_plugin::FLASH_NOT_AVAILABLE;

fn rear_strength(level: i32) -> TorchWrite {
    TorchWrite::Strength {
        camera_id: "0".to_string(),
        level,
    }
}

#[test]
fn Shell___probe___builtin_profile___reports_graduated_unit() {
    let shell = Shell::open(&Profile::builtin(), LogLevel::Warn).unwrap();

    let report = shell.probe();

    let data = report.outcome.data().unwrap();
    assert_eq!(data["available"], true);
    assert_eq!(data["cameraId"], "0");
    assert_eq!(data["maxStrengthLevel"], 10);
    assert_eq!(data["graduatedControl"], true);
    assert!(report.writes.is_empty());
    assert_eq!(report.torch, SimulatedTorch::Off);
}

#[test]
fn Shell___toggle___on___reports_write_and_torch_state() {
    let shell = Shell::open(&Profile::builtin(), LogLevel::Warn).unwrap();

    let report = shell.toggle(Some(true));

    assert!(report.outcome.is_resolved());
    assert_eq!(
        report.writes,
        vec![TorchWrite::Mode {
            camera_id: "0".to_string(),
            enabled: true
        }]
    );
    assert_eq!(report.torch, SimulatedTorch::On);
}

#[test]
fn Shell___toggle___no_state___turns_torch_off() {
    let shell = Shell::open(&Profile::builtin(), LogLevel::Warn).unwrap();

    let report = shell.toggle(None);

    assert!(report.outcome.is_resolved());
    assert_eq!(report.torch, SimulatedTorch::Off);
}

#[test]
fn Shell___brightness___scales_to_unit_range() {
    let shell = Shell::open(&Profile::builtin(), LogLevel::Warn).unwrap();

    let report = shell.brightness(50);

    assert_eq!(report.writes, vec![rear_strength(5)]);
    assert_eq!(report.torch, SimulatedTorch::Strength(5));
}

#[test]
fn Shell___preset___night___applies_preset_value() {
    let profile = Profile::builtin();
    let shell = Shell::open(&profile, LogLevel::Warn).unwrap();

    let report = shell.preset(profile.preset("Night").unwrap());

    // 5% of 10 floors to 0 and clamps to the minimum step
    assert_eq!(report.writes, vec![rear_strength(1)]);
}

#[test]
fn Shell___brightness___no_flash_unit___rejects() {
    let profile = Profile::from_str("[[camera]]\nid = \"0\"\nflash = false\n").unwrap();
    let shell = Shell::open(&profile, LogLevel::Warn).unwrap();

    let report = shell.brightness(80);

    assert_eq!(report.outcome.rejection_message(), Some(FLASH_NOT_AVAILABLE));
    assert!(report.writes.is_empty());
}

#[test]
fn Shell___open___require_flash_unit_without_unit___fails() {
    let profile = Profile::from_str("require_flash_unit = true\n").unwrap();

    let result = Shell::open(&profile, LogLevel::Warn);

    assert!(result.is_err());
}

#[test]
fn Shell___close___shuts_down_plugin() {
    let shell = Shell::open(&Profile::builtin(), LogLevel::Warn).unwrap();

    shell.close().unwrap();

    assert!(!shell.brightness(50).outcome.is_resolved());
}

#[test]
fn Report___serialize___renders_outcome_and_writes() {
    let shell = Shell::open(&Profile::builtin(), LogLevel::Warn).unwrap();
    let report = shell.brightness(100);

    let rendered = serde_json::to_value(&report).unwrap();

    assert_eq!(rendered["outcome"]["status"], "resolved");
    assert_eq!(rendered["writes"][0]["write"], "strength");
    assert_eq!(rendered["writes"][0]["level"], 10);
    assert_eq!(rendered["torch"]["state"], "strength");
    assert_eq!(rendered["torch"]["level"], 10);
}
