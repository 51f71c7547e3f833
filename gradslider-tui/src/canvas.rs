//! Terminal canvas — the slider's render adapter for a character grid.
//!
//! The model pushes geometry in control units; the canvas keeps the latest
//! state and rasterizes it into one row of cells at draw time. One cell is
//! `CELL_WIDTH × CELL_HEIGHT` units and a cell's sample point is its center.

use gradslider_core::{
    CenterImage, GradientStop, Point, Polygon, RenderAdapter, Rgba, SliderLayout,
};

pub const CELL_WIDTH: f64 = 8.0;
pub const CELL_HEIGHT: f64 = 16.0;

/// Frames an animated thumb move takes (50ms ticks).
pub const ANIMATION_FRAMES: u8 = 4;

/// One rasterized column of the slider row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellKind {
    Track,
    Fill,
    CenterMark,
    Thumb,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderCell {
    pub kind: CellKind,
    pub color: Rgba,
}

#[derive(Debug, Clone, Default)]
pub struct TerminalCanvas {
    layout: Option<SliderLayout>,
    track_color: Rgba,
    stops: Vec<GradientStop>,
    mask: Option<Polygon>,
    thumb_target: Point,
    thumb_shown: Point,
    frames_left: u8,
    thumb_color: Rgba,
    center_image: Option<CenterImage>,
}

impl TerminalCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance a running thumb animation by one frame.
    pub fn tick(&mut self) {
        match self.frames_left {
            0 => return,
            1 => {
                self.thumb_shown = self.thumb_target;
                self.frames_left = 0;
                return;
            }
            _ => {}
        }
        let t = 1.0 / f64::from(self.frames_left);
        self.thumb_shown = Point::new(
            self.thumb_shown.x + (self.thumb_target.x - self.thumb_shown.x) * t,
            self.thumb_shown.y + (self.thumb_target.y - self.thumb_shown.y) * t,
        );
        self.frames_left -= 1;
    }

    /// Thumb center as currently displayed, mid-animation included.
    pub fn thumb_shown(&self) -> Point {
        self.thumb_shown
    }

    pub fn thumb_color(&self) -> Rgba {
        self.thumb_color
    }

    /// Gradient color at control x, resolved against the current stops.
    pub fn gradient_color_at(&self, x: f64) -> Rgba {
        let Some(layout) = self.layout else {
            return self.track_color;
        };
        match self.stops.as_slice() {
            [] => self.track_color,
            [only] => only.color,
            [first, .., last] => {
                let track = layout.track;
                if track.width() <= 0.0 {
                    return first.color;
                }
                let t = (x - track.min_x()) / track.width();
                if t <= first.location {
                    first.color
                } else if t >= last.location {
                    last.color
                } else {
                    let span = last.location - first.location;
                    Rgba::lerp(first.color, last.color, (t - first.location) / span)
                }
            }
        }
    }

    /// Rasterize the slider row into `columns` cells.
    pub fn row(&self, columns: u16) -> Vec<SliderCell> {
        let fill = self.mask.as_ref().and_then(Polygon::x_extent);
        let thumb_col = unit_to_column(self.thumb_shown.x);
        let mark_col = match (&self.center_image, self.layout) {
            (Some(_), Some(layout)) => unit_to_column(layout.center_mark.mid_x()),
            _ => None,
        };

        (0..columns)
            .map(|col| {
                let x = column_center(col);
                if Some(col) == thumb_col {
                    SliderCell { kind: CellKind::Thumb, color: self.thumb_color }
                } else if Some(col) == mark_col {
                    SliderCell { kind: CellKind::CenterMark, color: self.track_color }
                } else if fill.is_some_and(|(lo, hi)| x >= lo && x <= hi && hi > lo) {
                    SliderCell { kind: CellKind::Fill, color: self.gradient_color_at(x) }
                } else {
                    SliderCell { kind: CellKind::Track, color: self.track_color }
                }
            })
            .collect()
    }
}

impl RenderAdapter for TerminalCanvas {
    fn set_track_geometry(&mut self, layout: &SliderLayout) {
        self.layout = Some(*layout);
    }

    fn set_track_color(&mut self, color: Rgba) {
        self.track_color = color;
    }

    fn set_gradient_stops(&mut self, stops: &[GradientStop]) {
        self.stops = stops.to_vec();
    }

    fn set_mask_path(&mut self, mask: &Polygon) {
        self.mask = Some(mask.clone());
    }

    /// The thumb is always one cell wide.
    fn set_thumb_geometry(&mut self, _diameter: f64, _corner_radius: f64) {}

    fn set_thumb_position(&mut self, center: Point, animated: bool) {
        self.thumb_target = center;
        if animated {
            self.frames_left = ANIMATION_FRAMES;
        } else {
            self.thumb_shown = center;
            self.frames_left = 0;
        }
    }

    fn set_thumb_color(&mut self, color: Rgba) {
        self.thumb_color = color;
    }

    fn set_center_image(&mut self, image: Option<&CenterImage>) {
        self.center_image = image.cloned();
    }
}

/// Center of cell column `col` in control units.
pub fn column_center(col: u16) -> f64 {
    f64::from(col) * CELL_WIDTH + CELL_WIDTH / 2.0
}

/// Center of cell row `row` in control units.
pub fn row_center(row: u16) -> f64 {
    f64::from(row) * CELL_HEIGHT + CELL_HEIGHT / 2.0
}

fn unit_to_column(x: f64) -> Option<u16> {
    if !x.is_finite() || x < 0.0 {
        return None;
    }
    let col = (x / CELL_WIDTH).floor();
    (col <= f64::from(u16::MAX)).then_some(col as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradslider_core::{Rect, SliderConfig, SliderModel, Size, StaticImages};

    fn model(columns: u16) -> SliderModel<TerminalCanvas> {
        SliderModel::new(SliderConfig::default(), TerminalCanvas::new())
            .unwrap()
            .with_images(StaticImages::center_marks(Size::new(CELL_WIDTH, CELL_HEIGHT)))
            .with_bounds(Rect::new(0.0, 0.0, f64::from(columns) * CELL_WIDTH, CELL_HEIGHT * 3.0))
    }

    #[test]
    fn thumb_sits_in_first_column_at_minimum() {
        let m = model(40);
        let row = m.renderer().row(40);
        assert_eq!(row.len(), 40);
        assert_eq!(row[1].kind, CellKind::Thumb);
        assert_eq!(row[1].color, Rgba::BLUE);
    }

    #[test]
    fn fill_grows_from_center_toward_value() {
        let mut m = model(40);
        m.set_value(1.0, false);
        let row = m.renderer().row(40);
        let fills: Vec<usize> = row
            .iter()
            .enumerate()
            .filter(|(_, c)| c.kind == CellKind::Fill)
            .map(|(i, _)| i)
            .collect();
        assert!(!fills.is_empty());
        assert!(fills.iter().all(|&i| i >= 20));
        assert!(row[fills[fills.len() - 1]].color.r > 0.9);
    }

    #[test]
    fn center_mark_drawn_when_image_present() {
        let mut m = model(40);
        m.set_center_image_for_state(true);
        let row = m.renderer().row(40);
        // Track center sits at x = 2 + 320 / 2 = 162, inside column 20.
        let marks: Vec<usize> = row
            .iter()
            .enumerate()
            .filter(|(_, c)| c.kind == CellKind::CenterMark)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(marks, vec![20]);
    }

    #[test]
    fn no_center_mark_without_image() {
        let m = model(40);
        assert!(m.renderer().row(40).iter().all(|c| c.kind != CellKind::CenterMark));
    }

    #[test]
    fn animated_move_settles_after_frames() {
        let mut m = model(40);
        m.set_value(1.0, true);
        let target = m.thumb_position();
        let canvas = m.renderer_mut();
        assert_ne!(canvas.thumb_shown(), target);
        for _ in 0..ANIMATION_FRAMES - 1 {
            canvas.tick();
        }
        assert_ne!(canvas.thumb_shown(), target);
        canvas.tick();
        assert_eq!(canvas.thumb_shown(), target);
        canvas.tick();
        assert_eq!(canvas.thumb_shown(), target);
    }

    #[test]
    fn flat_gradient_uses_single_stop() {
        let mut m = model(40);
        m.set_disabled_gradient_color(Rgba::GRAY);
        assert_eq!(m.renderer().gradient_color_at(300.0), Rgba::GRAY);
    }

    #[test]
    fn cell_centers() {
        assert_eq!(column_center(0), 4.0);
        assert_eq!(row_center(2), 40.0);
        assert_eq!(unit_to_column(15.9), Some(1));
        assert_eq!(unit_to_column(-1.0), None);
    }
}
