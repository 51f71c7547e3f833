//! Archive snapshot — the subset of slider state a host may persist.
//!
//! Every field is optional on the wire. Missing fields restore to the archive
//! defaults, which differ from [`SliderConfig::default`] for the colors:
//! light gray → dark gray. Colors are written at full precision so a
//! restored slider interpolates exactly as the archived one did.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Rgba;
use crate::config::{ConfigError, SliderConfig, DEFAULT_THICKNESS};
use crate::geometry::Rect;
use crate::model::SliderModel;
use crate::render::RenderAdapter;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderArchive {
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::color::lossless")]
    pub min_color: Option<Rgba>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "crate::color::lossless")]
    pub max_color: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
}

/// An archive with every default applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedArchive {
    pub min_color: Rgba,
    pub max_color: Rgba,
    pub value: f64,
    pub minimum_value: f64,
    pub maximum_value: f64,
    pub thickness: f64,
}

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("malformed archive: {0}")]
    Json(#[from] serde_json::Error),

    #[error("archived configuration is invalid: {0}")]
    Config(#[from] ConfigError),
}

impl SliderArchive {
    pub fn resolve(&self) -> ResolvedArchive {
        ResolvedArchive {
            min_color: self.min_color.unwrap_or(Rgba::LIGHT_GRAY),
            max_color: self.max_color.unwrap_or(Rgba::DARK_GRAY),
            value: self.value.unwrap_or(0.0),
            minimum_value: self.minimum_value.unwrap_or(0.0),
            maximum_value: self.maximum_value.unwrap_or(1.0),
            thickness: self.thickness.unwrap_or(DEFAULT_THICKNESS),
        }
    }

    pub fn to_json(&self) -> Result<String, ArchiveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ArchiveError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl ResolvedArchive {
    /// Overlay the archived fields on `base`.
    pub fn apply_to(&self, base: &SliderConfig) -> SliderConfig {
        SliderConfig {
            minimum_value: self.minimum_value,
            maximum_value: self.maximum_value,
            min_color: self.min_color,
            max_color: self.max_color,
            thickness: self.thickness,
            ..base.clone()
        }
    }
}

impl<R: RenderAdapter> SliderModel<R> {
    /// Capture the archivable fields.
    pub fn archive(&self) -> SliderArchive {
        let config = self.config();
        SliderArchive {
            min_color: Some(config.min_color),
            max_color: Some(config.max_color),
            value: Some(self.value()),
            minimum_value: Some(config.minimum_value),
            maximum_value: Some(config.maximum_value),
            thickness: Some(config.thickness),
        }
    }

    /// Rebuild a slider from `archive`, taking every non-archived property
    /// from `base`. The range is applied before the value, so the value clamps
    /// against the restored range.
    pub fn restore(
        archive: &SliderArchive,
        base: &SliderConfig,
        renderer: R,
        bounds: Rect,
    ) -> Result<Self, ArchiveError> {
        let resolved = archive.resolve();
        let mut model = SliderModel::new(resolved.apply_to(base), renderer)?.with_bounds(bounds);
        model.set_value(resolved.value, false);
        Ok(model)
    }
}
