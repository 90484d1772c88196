//! In-memory camera manager
//!
//! Stands in for the platform camera service on desktops, in the `torchctl`
//! shell, and in tests. It records every torch write and can be told to fail
//! enumeration or writes with a given [`CameraError`].

use crate::camera::{CameraCharacteristics, CameraError, CameraManager};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// One simulated camera unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatedUnit {
    pub id: String,
    #[serde(default, rename = "flash")]
    pub flash_available: Option<bool>,
    #[serde(default, rename = "max_strength_level")]
    pub strength_max_level: Option<i32>,
}

impl SimulatedUnit {
    /// A unit without a flash
    pub fn plain(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            flash_available: Some(false),
            strength_max_level: None,
        }
    }

    /// A unit with a flash and an optional graduated maximum
    pub fn with_flash(id: impl Into<String>, strength_max_level: Option<i32>) -> Self {
        Self {
            id: id.into(),
            flash_available: Some(true),
            strength_max_level,
        }
    }

    fn characteristics(&self) -> CameraCharacteristics {
        CameraCharacteristics {
            flash_available: self.flash_available,
            strength_max_level: self.strength_max_level,
        }
    }
}

/// A torch write received by the simulated manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "write", rename_all = "snake_case")]
pub enum TorchWrite {
    Mode { camera_id: String, enabled: bool },
    Strength { camera_id: String, level: i32 },
}

/// Torch state of the simulated hardware after the last accepted write
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "level", rename_all = "snake_case")]
pub enum SimulatedTorch {
    #[default]
    Off,
    On,
    Strength(i32),
}

#[derive(Default)]
struct SimulatedState {
    writes: Vec<TorchWrite>,
    torch: SimulatedTorch,
}

/// Camera manager backed by a fixed list of simulated units
#[derive(Default)]
pub struct SimulatedCameraManager {
    units: Vec<SimulatedUnit>,
    enumeration_error: Option<CameraError>,
    write_error: Option<CameraError>,
    state: Mutex<SimulatedState>,
}

impl SimulatedCameraManager {
    pub fn new(units: Vec<SimulatedUnit>) -> Self {
        Self {
            units,
            ..Self::default()
        }
    }

    /// Fail `camera_id_list` with this error
    pub fn with_enumeration_error(mut self, err: CameraError) -> Self {
        self.enumeration_error = Some(err);
        self
    }

    /// Fail every torch write with this error
    pub fn with_write_error(mut self, err: CameraError) -> Self {
        self.write_error = Some(err);
        self
    }

    pub fn units(&self) -> &[SimulatedUnit] {
        &self.units
    }

    /// Every accepted write, oldest first
    pub fn writes(&self) -> Vec<TorchWrite> {
        self.state.lock().writes.clone()
    }

    pub fn torch(&self) -> SimulatedTorch {
        self.state.lock().torch
    }

    fn unit(&self, camera_id: &str) -> Result<&SimulatedUnit, CameraError> {
        self.units
            .iter()
            .find(|unit| unit.id == camera_id)
            .ok_or_else(|| CameraError::invalid_argument(format!("Unknown camera id {}", camera_id)))
    }

    fn check_write(&self) -> Result<(), CameraError> {
        match &self.write_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl CameraManager for SimulatedCameraManager {
    fn camera_id_list(&self) -> Result<Vec<String>, CameraError> {
        if let Some(err) = &self.enumeration_error {
            return Err(err.clone());
        }
        Ok(self.units.iter().map(|unit| unit.id.clone()).collect())
    }

    fn camera_characteristics(&self, camera_id: &str) -> Result<CameraCharacteristics, CameraError> {
        Ok(self.unit(camera_id)?.characteristics())
    }

    fn set_torch_mode(&self, camera_id: &str, enabled: bool) -> Result<(), CameraError> {
        self.check_write()?;
        let unit = self.unit(camera_id)?;
        if !unit.characteristics().has_flash() {
            return Err(CameraError::invalid_argument(format!(
                "Camera {} has no flash unit",
                camera_id
            )));
        }

        let mut state = self.state.lock();
        state.writes.push(TorchWrite::Mode {
            camera_id: camera_id.to_string(),
            enabled,
        });
        state.torch = if enabled {
            SimulatedTorch::On
        } else {
            SimulatedTorch::Off
        };
        Ok(())
    }

    fn set_torch_strength_level(&self, camera_id: &str, level: i32) -> Result<(), CameraError> {
        self.check_write()?;
        let unit = self.unit(camera_id)?;
        let max = unit.strength_max_level.unwrap_or(1);
        if !unit.characteristics().has_flash() || max <= 1 {
            return Err(CameraError::invalid_argument(format!(
                "Camera {} does not support torch strength control",
                camera_id
            )));
        }
        if !(1..=max).contains(&level) {
            return Err(CameraError::invalid_argument(format!(
                "Torch strength level {} is out of range [1, {}]",
                level, max
            )));
        }

        let mut state = self.state.lock();
        state.writes.push(TorchWrite::Strength {
            camera_id: camera_id.to_string(),
            level,
        });
        state.torch = SimulatedTorch::Strength(level);
        Ok(())
    }
}
