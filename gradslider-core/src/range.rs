//! Range mapper — converts between a 1-D track coordinate and a domain value.
//!
//! Both directions are affine and pure. Degenerate inputs (an empty domain or
//! a track with no width) resolve to boundary values instead of dividing by zero.

use serde::{Deserialize, Serialize};

/// Closed value domain `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// True when the domain has no usable width.
    pub fn is_empty(&self) -> bool {
        let span = self.span();
        span.is_nan() || span <= 0.0
    }

    /// Clamp into `[min, max]`. An inverted range collapses to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if self.is_empty() {
            return self.min;
        }
        value.max(self.min).min(self.max)
    }

    /// Fractional position of `value` inside the domain, unclamped.
    /// Returns 0 for an empty domain.
    pub fn fraction(&self, value: f64) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        (value - self.min) / self.span()
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

/// Map a track coordinate to a value.
///
/// The position is clamped to the track, so anything left of the track maps
/// to `range.min` and anything right of it to `range.max`. A track with
/// `track_width <= 0` always yields `range.min`.
pub fn value_for_location(x: f64, track_left: f64, track_width: f64, range: ValueRange) -> f64 {
    if track_width.is_nan() || track_width <= 0.0 {
        return range.min;
    }
    let fraction = ((x - track_left) / track_width).clamp(0.0, 1.0);
    if fraction >= 1.0 {
        return range.max;
    }
    (range.min + fraction * range.span()).min(range.max)
}

/// Map a value to a track coordinate. Inverse of [`value_for_location`]
/// for values inside the domain. An empty domain yields `track_left`.
pub fn location_for_value(value: f64, track_left: f64, track_width: f64, range: ValueRange) -> f64 {
    if range.is_empty() {
        return track_left;
    }
    track_left + (value - range.min) * (track_width / range.span())
}
