#![allow(non_snake_case)]

use super::*;
use crate::camera::CameraCharacteristics;
use crate::simulated::{SimulatedCameraManager, SimulatedUnit};
use parking_lot::Mutex;

/// Manager that counts characteristics queries and can fail one id
struct CountingManager {
    ids: Vec<&'static str>,
    flash_ids: Vec<&'static str>,
    failing_id: Option<&'static str>,
    queried: Mutex<Vec<String>>,
}

impl CountingManager {
    fn new(ids: Vec<&'static str>, flash_ids: Vec<&'static str>) -> Self {
        Self {
            ids,
            flash_ids,
            failing_id: None,
            queried: Mutex::new(Vec::new()),
        }
    }
}

impl CameraManager for CountingManager {
    fn camera_id_list(&self) -> Result<Vec<String>, CameraError> {
        Ok(self.ids.iter().map(|id| id.to_string()).collect())
    }

    fn camera_characteristics(&self, camera_id: &str) -> Result<CameraCharacteristics, CameraError> {
        self.queried.lock().push(camera_id.to_string());
        if self.failing_id == Some(camera_id) {
            return Err(CameraError::disconnected("Camera device disconnected"));
        }
        Ok(CameraCharacteristics {
            flash_available: Some(self.flash_ids.iter().any(|id| *id == camera_id)),
            strength_max_level: Some(5),
        })
    }

    fn set_torch_mode(&self, _camera_id: &str, _enabled: bool) -> Result<(), CameraError> {
        Ok(())
    }

    fn set_torch_strength_level(&self, _camera_id: &str, _level: i32) -> Result<(), CameraError> {
        Ok(())
    }
}

#[test]
fn discover_flash_unit___first_flagged_unit___is_selected() {
    let manager = SimulatedCameraManager::new(vec![
        SimulatedUnit::plain("front"),
        SimulatedUnit::with_flash("rear", Some(10)),
        SimulatedUnit::with_flash("wide", Some(4)),
    ]);

    let unit = discover_flash_unit(&manager).unwrap();

    assert_eq!(
        unit,
        FlashUnit {
            id: "rear".to_string(),
            max_strength_level: Some(10)
        }
    );
}

#[test]
fn discover_flash_unit___stops_scanning_at_first_match() {
    let manager = CountingManager::new(vec!["0", "1", "2", "3"], vec!["1", "3"]);

    let unit = discover_flash_unit(&manager).unwrap();

    assert_eq!(unit.id, "1");
    assert_eq!(*manager.queried.lock(), vec!["0".to_string(), "1".to_string()]);
}

#[test]
fn discover_flash_unit___no_flagged_units___reports_scanned_count() {
    let manager = SimulatedCameraManager::new(vec![
        SimulatedUnit::plain("0"),
        SimulatedUnit::plain("1"),
    ]);

    let result = discover_flash_unit(&manager);

    assert_eq!(result, Err(DiscoveryError::NoFlashUnit { scanned: 2 }));
}

#[test]
fn discover_flash_unit___zero_units___is_no_flash_unit() {
    let manager = SimulatedCameraManager::new(Vec::new());

    let result = discover_flash_unit(&manager);

    assert_eq!(result, Err(DiscoveryError::NoFlashUnit { scanned: 0 }));
}

#[test]
fn discover_flash_unit___unreported_flag___is_skipped() {
    let manager = SimulatedCameraManager::new(vec![
        SimulatedUnit {
            id: "0".to_string(),
            flash_available: None,
            strength_max_level: Some(10),
        },
        SimulatedUnit::with_flash("1", None),
    ]);

    let unit = discover_flash_unit(&manager).unwrap();

    assert_eq!(unit.id, "1");
    assert_eq!(unit.max_strength_level, None);
}

#[test]
fn discover_flash_unit___enumeration_error___is_surfaced() {
    let manager = SimulatedCameraManager::new(vec![SimulatedUnit::with_flash("0", Some(10))])
        .with_enumeration_error(CameraError::access_denied("Camera service unavailable"));

    let result = discover_flash_unit(&manager);

    assert_eq!(
        result,
        Err(DiscoveryError::Enumeration(CameraError::access_denied(
            "Camera service unavailable"
        )))
    );
}

#[test]
fn discover_flash_unit___characteristics_error___aborts_scan() {
    let mut manager = CountingManager::new(vec!["0", "1", "2"], vec!["2"]);
    manager.failing_id = Some("1");

    let result = discover_flash_unit(&manager);

    assert!(matches!(result, Err(DiscoveryError::Enumeration(_))));
    assert_eq!(manager.queried.lock().len(), 2);
}

#[test]
fn DiscoveryError___display___describes_cause() {
    let err = DiscoveryError::NoFlashUnit { scanned: 3 };

    assert_eq!(err.to_string(), "no flash-capable camera among 3 unit(s)");
}
