//! Geometry computer — layout of track, gradient, center mark, thumb and mask.
//!
//! All coordinates are control-local: the origin is the top-left of the
//! control's bounds, x grows right, y grows down.

use serde::{Deserialize, Serialize};

use crate::config::SliderConfig;
use crate::range::location_for_value;

/// Horizontal offset of the track from the control's left edge.
pub const TRACK_LEFT_INSET: f64 = 2.0;

/// Center-mark size used when no center image resolves.
pub const FALLBACK_CENTER_MARK: Size = Size { width: 9.0, height: 9.0 };

/// Insets between the control's frame and its visual alignment rect.
pub const ALIGNMENT_INSETS: EdgeInsets = EdgeInsets { top: 4.0, left: 2.0, bottom: 4.0, right: 2.0 };

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { origin: Point::new(x, y), size: Size::new(width, height) }
    }

    /// Rectangle of `size` whose center is `center`.
    pub fn centered_at(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn mid_x(&self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    pub fn mid_y(&self) -> f64 {
        self.origin.y + self.size.height / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// Half-open: the min edges are inside, the max edges are not.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x() && p.x < self.max_x() && p.y >= self.min_y() && p.y < self.max_y()
    }
}

/// Closed polygon; the last point connects back to the first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Shoelace area, always non-negative.
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice.abs() / 2.0
    }

    /// Horizontal extent `(min_x, max_x)`, `None` when empty.
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        Some(self.points.iter().fold((first.x, first.x), |(lo, hi), p| (lo.min(p.x), hi.max(p.x))))
    }
}

/// Everything the layout pass places, derived from bounds and config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderLayout {
    pub bounds: Rect,
    /// Background track; the gradient layer shares this frame.
    pub track: Rect,
    pub track_corner_radius: f64,
    pub center_mark: Rect,
    pub thumb_size: f64,
    pub thumb_corner_radius: f64,
}

impl SliderLayout {
    pub fn compute(bounds: Rect, config: &SliderConfig, center_mark_size: Size) -> Self {
        let w = bounds.width();
        let anchor = Point::new(bounds.min_x() + w / 2.0 + TRACK_LEFT_INSET, bounds.mid_y());
        Self {
            bounds,
            track: Rect::centered_at(anchor, Size::new(w, config.thickness)),
            track_corner_radius: config.thickness / 2.0,
            center_mark: Rect::centered_at(anchor, center_mark_size),
            thumb_size: config.thumb_size,
            thumb_corner_radius: config.thumb_size / 2.0,
        }
    }

    /// Track span the thumb center travels along: the track shortened by one
    /// thumb diameter so the thumb stays inside the track at both ends.
    pub fn thumb_travel(&self) -> (f64, f64) {
        let width = (self.track.width() - self.thumb_size).max(0.0);
        (self.track.mid_x() - width / 2.0, width)
    }

    pub fn thumb_rect(&self, center: Point) -> Rect {
        Rect::centered_at(center, Size::new(self.thumb_size, self.thumb_size))
    }
}

/// Thumb center for `value`: along the inset track, vertically centered.
pub fn thumb_position(bounds: Rect, config: &SliderConfig, value: f64) -> Point {
    let layout = SliderLayout::compute(bounds, config, FALLBACK_CENTER_MARK);
    thumb_position_in(&layout, config, value)
}

pub(crate) fn thumb_position_in(layout: &SliderLayout, config: &SliderConfig, value: f64) -> Point {
    let (left, width) = layout.thumb_travel();
    Point::new(
        location_for_value(value, left, width, config.range()),
        layout.bounds.mid_y(),
    )
}

/// Visible part of the gradient: the track band between its center and the
/// position of `value`. Filling grows outward from the center in either
/// direction; a value at the center gives a zero-area quad.
pub fn mask_path(bounds: Rect, config: &SliderConfig, value: f64) -> Polygon {
    let layout = SliderLayout::compute(bounds, config, FALLBACK_CENTER_MARK);
    mask_path_in(&layout, config, value)
}

pub(crate) fn mask_path_in(layout: &SliderLayout, config: &SliderConfig, value: f64) -> Polygon {
    let track = layout.track;
    let center_x = track.mid_x();
    let value_x = location_for_value(value, track.min_x(), track.width(), config.range());
    Polygon::new(vec![
        Point::new(center_x, track.min_y()),
        Point::new(center_x, track.max_y()),
        Point::new(value_x, track.max_y()),
        Point::new(value_x, track.min_y()),
    ])
}

/// Preferred control height; width is unconstrained.
pub fn intrinsic_height(config: &SliderConfig) -> f64 {
    config.thumb_size
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SliderConfig {
        SliderConfig::default()
    }

    #[test]
    fn rect_accessors() {
        let r = Rect::new(10.0, 20.0, 100.0, 40.0);
        assert_eq!(r.max_x(), 110.0);
        assert_eq!(r.mid_x(), 60.0);
        assert_eq!(r.mid_y(), 40.0);
        assert!(r.contains(Point::new(10.0, 20.0)));
        assert!(r.contains(Point::new(109.9, 59.9)));
        assert!(!r.contains(Point::new(110.0, 40.0)));
        assert!(!r.contains(Point::new(60.0, 60.0)));
    }

    #[test]
    fn layout_insets_track_from_left_edge() {
        let layout = SliderLayout::compute(Rect::new(0.0, 0.0, 200.0, 30.0), &config(), FALLBACK_CENTER_MARK);
        assert_eq!(layout.track, Rect::new(2.0, 14.0, 200.0, 2.0));
        assert_eq!(layout.track_corner_radius, 1.0);
        assert_eq!(layout.center_mark.center(), Point::new(102.0, 15.0));
        assert_eq!(layout.thumb_corner_radius, 10.0);
    }

    #[test]
    fn thumb_travels_inside_the_track() {
        let bounds = Rect::new(0.0, 0.0, 200.0, 30.0);
        let start = thumb_position(bounds, &config(), 0.0);
        let end = thumb_position(bounds, &config(), 1.0);
        assert_eq!(start, Point::new(12.0, 15.0));
        assert_eq!(end, Point::new(192.0, 15.0));
    }

    #[test]
    fn thumb_travel_never_negative() {
        let layout = SliderLayout::compute(Rect::new(0.0, 0.0, 10.0, 30.0), &config(), FALLBACK_CENTER_MARK);
        assert_eq!(layout.thumb_travel(), (7.0, 0.0));
    }

    #[test]
    fn mask_grows_from_center() {
        let bounds = Rect::new(0.0, 0.0, 200.0, 30.0);
        let right = mask_path(bounds, &config(), 1.0);
        assert_eq!(right.x_extent(), Some((102.0, 202.0)));
        assert_eq!(right.area(), 100.0 * 2.0);

        let left = mask_path(bounds, &config(), 0.0);
        assert_eq!(left.x_extent(), Some((2.0, 102.0)));
    }

    #[test]
    fn mask_is_empty_at_center_value() {
        let mask = mask_path(Rect::new(0.0, 0.0, 200.0, 30.0), &config(), 0.5);
        assert_eq!(mask.area(), 0.0);
        assert_eq!(mask.points.len(), 4);
    }

    #[test]
    fn intrinsic_height_is_thumb_size() {
        assert_eq!(intrinsic_height(&config()), 20.0);
    }
}
