//! Slider configuration — bounds, colors, dimensions, continuous mode.
//!
//! Loaded from TOML; every key is optional and falls back to the control's
//! built-in defaults:
//!
//! ```toml
//! minimum_value = 0.0
//! maximum_value = 10.0
//! min_color = "#0000ff"
//! max_color = "#ff8000"
//! track_color = "#ffffff"
//! gradient_locations = [0.0, 1.0]
//! thickness = 2.0
//! thumb_size = 20.0
//! is_continuous = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Rgba;
use crate::range::ValueRange;

pub const DEFAULT_THICKNESS: f64 = 2.0;
pub const DEFAULT_THUMB_SIZE: f64 = 20.0;

/// Smallest domain width the model accepts. Assigning a maximum at or below
/// the minimum pushes it to [`range_floor`] of the minimum.
pub const RANGE_EPSILON: f64 = 1e-6;

/// Lowest maximum allowed for `min`: `min + RANGE_EPSILON`, widened at large
/// magnitudes so the sum always lands strictly above `min`.
pub fn range_floor(min: f64) -> f64 {
    min + RANGE_EPSILON.max(min.abs() * f64::EPSILON)
}

/// Configuration of one gradient slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub minimum_value: f64,
    pub maximum_value: f64,
    /// Gradient start, and the thumb color at `minimum_value`.
    pub min_color: Rgba,
    /// Gradient end, and the thumb color at `maximum_value`.
    pub max_color: Rgba,
    /// Background of the non-gradient track.
    pub track_color: Rgba,
    /// Stop locations paired with `[min_color, max_color]`.
    pub gradient_locations: Vec<f64>,
    /// Track thickness (rendering only).
    pub thickness: f64,
    /// Thumb diameter, used for rendering and hit testing.
    pub thumb_size: f64,
    /// Emit value-changed notifications during a drag, not only on release.
    pub is_continuous: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            minimum_value: 0.0,
            maximum_value: 1.0,
            min_color: Rgba::BLUE,
            max_color: Rgba::ORANGE,
            track_color: Rgba::WHITE,
            gradient_locations: vec![0.0, 1.0],
            thickness: DEFAULT_THICKNESS,
            thumb_size: DEFAULT_THUMB_SIZE,
            is_continuous: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("maximum_value {max} must be greater than minimum_value {min}")]
    InvalidRange { min: f64, max: f64 },

    #[error("gradient_locations must be two ordered stops in [0, 1], got {0:?}")]
    InvalidGradientLocations(Vec<f64>),

    #[error("{field} must be a finite, non-negative number, got {value}")]
    InvalidDimension { field: &'static str, value: f64 },

    #[error("{0} must be finite")]
    NonFinite(&'static str),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl SliderConfig {
    pub fn range(&self) -> ValueRange {
        ValueRange::new(self.minimum_value, self.maximum_value)
    }

    /// Check every invariant the model relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.minimum_value.is_finite() {
            return Err(ConfigError::NonFinite("minimum_value"));
        }
        if !self.maximum_value.is_finite() {
            return Err(ConfigError::NonFinite("maximum_value"));
        }
        if self.maximum_value <= self.minimum_value {
            return Err(ConfigError::InvalidRange {
                min: self.minimum_value,
                max: self.maximum_value,
            });
        }
        for (name, color) in [
            ("min_color", &self.min_color),
            ("max_color", &self.max_color),
            ("track_color", &self.track_color),
        ] {
            if !color.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
        }
        validate_gradient_locations(&self.gradient_locations)?;
        validate_dimension("thickness", self.thickness)?;
        validate_dimension("thumb_size", self.thumb_size)?;
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SliderConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// Two ordered stops in `[0, 1]`, one per gradient endpoint color.
pub fn validate_gradient_locations(locations: &[f64]) -> Result<(), ConfigError> {
    let ok = match locations {
        [start, end] => {
            (0.0..=1.0).contains(start) && (0.0..=1.0).contains(end) && start <= end
        }
        _ => false,
    };
    if ok {
        Ok(())
    } else {
        Err(ConfigError::InvalidGradientLocations(locations.to_vec()))
    }
}

fn validate_dimension(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDimension { field, value })
    }
}
