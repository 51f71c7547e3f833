//! Rendering and asset seams.
//!
//! The model never paints. It pushes derived state through [`RenderAdapter`],
//! which any retained scene graph or immediate-mode canvas can implement, and
//! resolves center-mark images through [`ImageSource`].

use std::collections::HashMap;

use crate::color::Rgba;
use crate::geometry::{Point, Polygon, Size, SliderLayout};
use crate::gradient::GradientStop;

pub const CENTER_MARK_ENABLED: &str = "centre_line_slider_on";
pub const CENTER_MARK_DISABLED: &str = "centre_line_slider_disable";

/// Resolved center-mark asset.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterImage {
    pub name: String,
    pub size: Size,
}

/// Receiver of everything the slider draws.
pub trait RenderAdapter {
    /// Track, gradient and center-mark frames after a layout pass.
    fn set_track_geometry(&mut self, layout: &SliderLayout);
    fn set_track_color(&mut self, color: Rgba);
    fn set_gradient_stops(&mut self, stops: &[GradientStop]);
    fn set_mask_path(&mut self, mask: &Polygon);
    fn set_thumb_geometry(&mut self, diameter: f64, corner_radius: f64);
    /// `animated` asks the renderer to transition rather than jump.
    fn set_thumb_position(&mut self, center: Point, animated: bool);
    fn set_thumb_color(&mut self, color: Rgba);
    /// `None` hides the center mark.
    fn set_center_image(&mut self, image: Option<&CenterImage>);
}

impl<T: RenderAdapter + ?Sized> RenderAdapter for Box<T> {
    fn set_track_geometry(&mut self, layout: &SliderLayout) {
        (**self).set_track_geometry(layout)
    }
    fn set_track_color(&mut self, color: Rgba) {
        (**self).set_track_color(color)
    }
    fn set_gradient_stops(&mut self, stops: &[GradientStop]) {
        (**self).set_gradient_stops(stops)
    }
    fn set_mask_path(&mut self, mask: &Polygon) {
        (**self).set_mask_path(mask)
    }
    fn set_thumb_geometry(&mut self, diameter: f64, corner_radius: f64) {
        (**self).set_thumb_geometry(diameter, corner_radius)
    }
    fn set_thumb_position(&mut self, center: Point, animated: bool) {
        (**self).set_thumb_position(center, animated)
    }
    fn set_thumb_color(&mut self, color: Rgba) {
        (**self).set_thumb_color(color)
    }
    fn set_center_image(&mut self, image: Option<&CenterImage>) {
        (**self).set_center_image(image)
    }
}

/// Image lookup for center-mark assets.
pub trait ImageSource {
    fn image_size(&self, name: &str) -> Option<Size>;
}

/// Resolves nothing; the center mark never renders.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImages;

impl ImageSource for NoImages {
    fn image_size(&self, _name: &str) -> Option<Size> {
        None
    }
}

/// Fixed name → size table.
#[derive(Debug, Clone, Default)]
pub struct StaticImages {
    sizes: HashMap<String, Size>,
}

impl StaticImages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, size: Size) -> Self {
        self.sizes.insert(name.into(), size);
        self
    }

    /// Both center-mark assets at the same size.
    pub fn center_marks(size: Size) -> Self {
        Self::new().with(CENTER_MARK_ENABLED, size).with(CENTER_MARK_DISABLED, size)
    }
}

impl ImageSource for StaticImages {
    fn image_size(&self, name: &str) -> Option<Size> {
        self.sizes.get(name).copied()
    }
}

/// Drops every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl RenderAdapter for NullRenderer {
    fn set_track_geometry(&mut self, _layout: &SliderLayout) {}
    fn set_track_color(&mut self, _color: Rgba) {}
    fn set_gradient_stops(&mut self, _stops: &[GradientStop]) {}
    fn set_mask_path(&mut self, _mask: &Polygon) {}
    fn set_thumb_geometry(&mut self, _diameter: f64, _corner_radius: f64) {}
    fn set_thumb_position(&mut self, _center: Point, _animated: bool) {}
    fn set_thumb_color(&mut self, _color: Rgba) {}
    fn set_center_image(&mut self, _image: Option<&CenterImage>) {}
}

/// One call received by [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    TrackGeometry(SliderLayout),
    TrackColor(Rgba),
    GradientStops(Vec<GradientStop>),
    MaskPath(Polygon),
    ThumbGeometry { diameter: f64, corner_radius: f64 },
    ThumbPosition { center: Point, animated: bool },
    ThumbColor(Rgba),
    CenterImage(Option<CenterImage>),
}

/// Keeps the latest value of every channel plus the full command log.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub layout: Option<SliderLayout>,
    pub track_color: Option<Rgba>,
    pub gradient_stops: Vec<GradientStop>,
    pub mask: Option<Polygon>,
    pub thumb_diameter: Option<f64>,
    pub thumb_position: Option<Point>,
    pub thumb_animated: bool,
    pub thumb_color: Option<Rgba>,
    pub center_image: Option<CenterImage>,
    pub commands: Vec<RenderCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_log(&mut self) {
        self.commands.clear();
    }
}

impl RenderAdapter for RecordingRenderer {
    fn set_track_geometry(&mut self, layout: &SliderLayout) {
        self.layout = Some(*layout);
        self.commands.push(RenderCommand::TrackGeometry(*layout));
    }

    fn set_track_color(&mut self, color: Rgba) {
        self.track_color = Some(color);
        self.commands.push(RenderCommand::TrackColor(color));
    }

    fn set_gradient_stops(&mut self, stops: &[GradientStop]) {
        self.gradient_stops = stops.to_vec();
        self.commands.push(RenderCommand::GradientStops(stops.to_vec()));
    }

    fn set_mask_path(&mut self, mask: &Polygon) {
        self.mask = Some(mask.clone());
        self.commands.push(RenderCommand::MaskPath(mask.clone()));
    }

    fn set_thumb_geometry(&mut self, diameter: f64, corner_radius: f64) {
        self.thumb_diameter = Some(diameter);
        self.commands.push(RenderCommand::ThumbGeometry { diameter, corner_radius });
    }

    fn set_thumb_position(&mut self, center: Point, animated: bool) {
        self.thumb_position = Some(center);
        self.thumb_animated = animated;
        self.commands.push(RenderCommand::ThumbPosition { center, animated });
    }

    fn set_thumb_color(&mut self, color: Rgba) {
        self.thumb_color = Some(color);
        self.commands.push(RenderCommand::ThumbColor(color));
    }

    fn set_center_image(&mut self, image: Option<&CenterImage>) {
        self.center_image = image.cloned();
        self.commands.push(RenderCommand::CenterImage(image.cloned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_images_resolve_registered_names() {
        let images = StaticImages::center_marks(Size::new(1.0, 9.0));
        assert_eq!(images.image_size(CENTER_MARK_ENABLED), Some(Size::new(1.0, 9.0)));
        assert_eq!(images.image_size("missing"), None);
        assert_eq!(NoImages.image_size(CENTER_MARK_ENABLED), None);
    }

    #[test]
    fn recorder_keeps_latest_and_log() {
        let mut r = RecordingRenderer::new();
        r.set_thumb_color(Rgba::RED);
        r.set_thumb_color(Rgba::BLUE);
        assert_eq!(r.thumb_color, Some(Rgba::BLUE));
        assert_eq!(r.commands.len(), 2);
        r.clear_log();
        assert!(r.commands.is_empty());
    }
}
