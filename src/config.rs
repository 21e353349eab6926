//! Drag and wheel sensitivities.
//!
//! Hosts may hand the controller a JSON object; missing fields fall back to
//! the defaults in [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{ORBIT_DEGREES_PER_PIXEL, WHEEL_ZOOM_PER_PIXEL};

/// Error returned by [`ControllerConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The input is not a valid config object.
    #[error("failed to parse controller config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A sensitivity is NaN or infinite.
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Degrees of roll/pitch per pixel of orbit drag.
    pub orbit_degrees_per_pixel: f64,
    /// Zoom levels per pixel of vertical wheel delta.
    pub wheel_zoom_per_pixel: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self { orbit_degrees_per_pixel: ORBIT_DEGREES_PER_PIXEL, wheel_zoom_per_pixel: WHEEL_ZOOM_PER_PIXEL }
    }
}

impl ControllerConfig {
    /// Parse and validate a config object such as `{"wheel_zoom_per_pixel": 0.02}`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `raw` is not a config object and
    /// [`ConfigError::NotFinite`] if a sensitivity is NaN or infinite.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would poison the camera with NaN.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFinite`] naming the first non-finite field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_finite("orbit_degrees_per_pixel", self.orbit_degrees_per_pixel)?;
        check_finite("wheel_zoom_per_pixel", self.wheel_zoom_per_pixel)
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() { Ok(()) } else { Err(ConfigError::NotFinite { field, value }) }
}
