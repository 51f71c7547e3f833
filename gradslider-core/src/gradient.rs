//! Color interpolator — value → color along the configured gradient.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::config::SliderConfig;

/// One color stop of the gradient layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: Rgba,
    pub location: f64,
}

/// Ordered stop list handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStops(pub Vec<GradientStop>);

impl GradientStops {
    /// `min_color` and `max_color` paired with `gradient_locations`.
    ///
    /// Locations are expected to be validated; a malformed list falls back to
    /// `[0, 1]` so the renderer always receives one stop per color.
    pub fn from_config(config: &SliderConfig) -> Self {
        let (start, end) = match config.gradient_locations.as_slice() {
            [start, end] => (*start, *end),
            _ => (0.0, 1.0),
        };
        Self(vec![
            GradientStop { color: config.min_color, location: start },
            GradientStop { color: config.max_color, location: end },
        ])
    }

    /// A single stop at `1.0`: the whole gradient paints one flat color.
    pub fn flat(color: Rgba) -> Self {
        Self(vec![GradientStop { color, location: 1.0 }])
    }

    pub fn as_slice(&self) -> &[GradientStop] {
        &self.0
    }

    pub fn is_flat(&self) -> bool {
        self.0.len() == 1
    }
}

/// Per-channel interpolation between `min_color` and `max_color` at the
/// fractional position of `value` in the configured range.
///
/// Exact at both bounds; an empty domain yields `min_color`.
pub fn color_for_value(value: f64, config: &SliderConfig) -> Rgba {
    let range = config.range();
    if range.is_empty() {
        return config.min_color;
    }
    if value == range.max {
        return config.max_color;
    }
    Rgba::lerp(config.min_color, config.max_color, range.fraction(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(min: f64, max: f64) -> SliderConfig {
        SliderConfig { minimum_value: min, maximum_value: max, ..SliderConfig::default() }
    }

    #[test]
    fn endpoints_are_exact() {
        let c = config(-3.0, 7.3);
        assert_eq!(color_for_value(-3.0, &c), c.min_color);
        assert_eq!(color_for_value(7.3, &c), c.max_color);
    }

    #[test]
    fn midpoint_between_blue_and_orange() {
        let c = config(0.0, 10.0);
        let mid = color_for_value(5.0, &c);
        assert_eq!(mid, Rgba::new(0.5, 0.25, 0.5, 1.0));
    }

    #[test]
    fn alpha_is_interpolated_too() {
        let c = SliderConfig { min_color: Rgba::CLEAR, max_color: Rgba::BLACK, ..SliderConfig::default() };
        assert_eq!(color_for_value(0.25, &c).a, 0.25);
    }

    #[test]
    fn empty_domain_returns_min_color() {
        let c = config(4.0, 4.0);
        assert_eq!(color_for_value(4.0, &c), c.min_color);
        assert_eq!(color_for_value(100.0, &c), c.min_color);
    }

    #[test]
    fn stops_follow_config() {
        let c = SliderConfig { gradient_locations: vec![0.2, 0.8], ..SliderConfig::default() };
        let stops = GradientStops::from_config(&c);
        assert_eq!(stops.as_slice().len(), 2);
        assert_eq!(stops.as_slice()[0], GradientStop { color: Rgba::BLUE, location: 0.2 });
        assert_eq!(stops.as_slice()[1], GradientStop { color: Rgba::ORANGE, location: 0.8 });
    }

    #[test]
    fn flat_stops_collapse_to_one() {
        let stops = GradientStops::flat(Rgba::GRAY);
        assert!(stops.is_flat());
        assert_eq!(stops.as_slice()[0].location, 1.0);
    }
}
