//! gradslider core — a horizontal gradient slider, independent of any UI toolkit.
//!
//! This crate holds everything the control computes:
//! - Range mapping between track coordinates and values
//! - Layout of track, gradient, center mark and thumb, and the gradient mask
//! - Value → color interpolation along the gradient
//! - The touch-tracking state machine and host notifications
//! - Render and image seams the host implements
//! - Archive snapshots and TOML configuration
//!
//! Painting and pointer delivery belong to the host: implement
//! [`RenderAdapter`] and feed [`PointerEvent`]s into [`SliderModel::handle_pointer`].

pub mod color;
pub mod config;
pub mod events;
pub mod geometry;
pub mod gradient;
pub mod model;
pub mod range;
pub mod render;
pub mod snapshot;
pub mod tracking;

pub use color::{ColorError, Rgba};
pub use config::{range_floor, ConfigError, SliderConfig, RANGE_EPSILON};
pub use events::{ListenerId, SliderEvent};
pub use geometry::{mask_path, thumb_position, Point, Polygon, Rect, Size, SliderLayout};
pub use gradient::{color_for_value, GradientStop, GradientStops};
pub use model::SliderModel;
pub use range::{location_for_value, value_for_location, ValueRange};
pub use render::{
    CenterImage, ImageSource, NoImages, NullRenderer, RecordingRenderer, RenderAdapter,
    RenderCommand, StaticImages,
};
pub use snapshot::{ArchiveError, ResolvedArchive, SliderArchive};
pub use tracking::{hit_region, Disposition, PointerEvent, TrackingState, MIN_HIT_TARGET};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: value types can cross threads even though the
    /// model itself is single-threaded.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<Rgba>();
        require_sync::<Rgba>();
        require_send::<SliderConfig>();
        require_sync::<SliderConfig>();
        require_send::<SliderLayout>();
        require_sync::<SliderLayout>();
        require_send::<Polygon>();
        require_sync::<Polygon>();
        require_send::<SliderEvent>();
        require_sync::<SliderEvent>();
        require_send::<PointerEvent>();
        require_sync::<PointerEvent>();
        require_send::<SliderArchive>();
        require_sync::<SliderArchive>();
        require_send::<RecordingRenderer>();
        require_sync::<RecordingRenderer>();
    }

    /// Architecture contract: the render seam is object safe, so hosts can
    /// swap renderers behind a trait object.
    #[test]
    fn render_adapter_is_object_safe() {
        fn _accepts_dyn(renderer: &mut dyn RenderAdapter, layout: &SliderLayout) {
            renderer.set_track_geometry(layout);
        }
        let model = SliderModel::new(SliderConfig::default(), Box::new(NullRenderer) as Box<dyn RenderAdapter>);
        assert!(model.is_ok());
    }
}
