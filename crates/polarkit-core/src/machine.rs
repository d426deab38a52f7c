//! Machine configuration and work-envelope checking.
//!
//! Holds the plotter's physical envelope and persists it as JSON. The
//! envelope check is consulted before every interpolated move; with limits
//! disabled (the default) every target is accepted, which matches the
//! behavior of the embedded firmware's stubbed-out check.

use crate::error::{DeviceError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default horizontal envelope: millimetres right of the home position.
pub const DEFAULT_MAX_X: f64 = 600.0;

/// Default vertical envelope: millimetres below the home position.
/// The gondola hangs below the motors, so Y grows downward and is negative.
pub const DEFAULT_MAX_Y: f64 = -800.0;

/// Plotter machine configuration
///
/// Loaded from and saved to a JSON file. All fields have defaults so a
/// missing config file never blocks a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Enforce the work envelope on interpolated moves
    #[serde(default)]
    pub limits_enabled: bool,
    /// Maximum X distance from home (positive, to the right)
    #[serde(default = "default_max_x")]
    pub max_x: f64,
    /// Maximum Y distance from home (negative, downward)
    #[serde(default = "default_max_y")]
    pub max_y: f64,
}

fn default_max_x() -> f64 {
    DEFAULT_MAX_X
}

fn default_max_y() -> f64 {
    DEFAULT_MAX_Y
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            limits_enabled: false,
            max_x: DEFAULT_MAX_X,
            max_y: DEFAULT_MAX_Y,
        }
    }
}

impl MachineConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_x <= 0.0 {
            return Err(DeviceError::ConfigInvalid {
                reason: format!("max_x must be positive, got {}", self.max_x),
            }
            .into());
        }
        if self.max_y >= 0.0 {
            return Err(DeviceError::ConfigInvalid {
                reason: format!("max_y must be negative (Y grows downward), got {}", self.max_y),
            }
            .into());
        }
        Ok(())
    }

    /// Check whether an absolute target position lies inside the envelope.
    ///
    /// Always true when limits are disabled.
    pub fn is_position_valid(&self, x: f64, y: f64) -> bool {
        if !self.limits_enabled {
            return true;
        }
        if !(0.0..=self.max_x).contains(&x) {
            tracing::debug!(x, "target X outside work envelope");
            return false;
        }
        if !(self.max_y..=0.0).contains(&y) {
            tracing::debug!(y, "target Y outside work envelope");
            return false;
        }
        true
    }
}
