//! SliderModel — configuration, value, tracking and derived render state.
//!
//! The model owns its renderer and pushes every change through it
//! synchronously. All mutation is expected on one thread, one event at a time;
//! nothing here blocks or spawns work.
//!
//! Coordinate conventions:
//! - pointer locations map to values across the control's full bounds;
//! - the thumb travels along the track shortened by one thumb diameter;
//! - the gradient mask spans from the track center to the value's position on
//!   the full track.

use tracing::{debug, trace, warn};

use crate::color::Rgba;
use crate::config::{range_floor, validate_gradient_locations, ConfigError, SliderConfig};
use crate::events::{ListenerId, Listeners, SliderEvent};
use crate::geometry::{
    mask_path_in, thumb_position_in, Point, Polygon, Rect, SliderLayout, FALLBACK_CENTER_MARK,
};
use crate::gradient::{color_for_value, GradientStops};
use crate::range::value_for_location;
use crate::render::{
    CenterImage, ImageSource, NoImages, NullRenderer, RenderAdapter, CENTER_MARK_DISABLED,
    CENTER_MARK_ENABLED,
};
use crate::tracking::{Disposition, PointerEvent, Tracker, TrackingState, Transition};

type ValueObserver<R> = Box<dyn FnMut(&SliderModel<R>, f64)>;

/// A horizontal gradient slider, independent of any UI toolkit.
pub struct SliderModel<R: RenderAdapter = NullRenderer> {
    config: SliderConfig,
    value: f64,
    layout: SliderLayout,
    tracker: Tracker,
    thumb_override: Option<Rgba>,
    gradient_override: Option<Rgba>,
    center_image: Option<CenterImage>,
    images: Box<dyn ImageSource>,
    renderer: R,
    listeners: Listeners,
    observer: Option<ValueObserver<R>>,
}

impl<R: RenderAdapter> SliderModel<R> {
    /// Build a slider from an explicit configuration. The value starts at 0,
    /// clamped into the configured range; bounds start empty until the first
    /// [`set_bounds`](Self::set_bounds).
    pub fn new(config: SliderConfig, renderer: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let value = config.range().clamp(0.0);
        let layout = SliderLayout::compute(Rect::default(), &config, FALLBACK_CENTER_MARK);
        let mut model = Self {
            config,
            value,
            layout,
            tracker: Tracker::new(),
            thumb_override: None,
            gradient_override: None,
            center_image: None,
            images: Box::new(NoImages),
            renderer,
            listeners: Listeners::new(),
            observer: None,
        };
        model.sync_all();
        Ok(model)
    }

    /// Use `images` to resolve center-mark assets.
    pub fn with_images(mut self, images: impl ImageSource + 'static) -> Self {
        self.images = Box::new(images);
        self.relayout();
        self
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.set_bounds(bounds);
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn bounds(&self) -> Rect {
        self.layout.bounds
    }

    pub fn layout(&self) -> &SliderLayout {
        &self.layout
    }

    pub fn tracking_state(&self) -> TrackingState {
        self.tracker.state()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracker.is_tracking()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn center_image(&self) -> Option<&CenterImage> {
        self.center_image.as_ref()
    }

    pub fn thumb_position(&self) -> Point {
        thumb_position_in(&self.layout, &self.config, self.value)
    }

    pub fn mask_path(&self) -> Polygon {
        mask_path_in(&self.layout, &self.config, self.value)
    }

    /// Value-driven color at `value`, ignoring any disabled override.
    pub fn color_for_value(&self, value: f64) -> Rgba {
        color_for_value(value, &self.config)
    }

    pub fn color_for_current_value(&self) -> Rgba {
        self.color_for_value(self.value)
    }

    /// Color the thumb currently shows: the disabled override when set,
    /// otherwise the value-driven color.
    pub fn thumb_color(&self) -> Rgba {
        self.thumb_override.unwrap_or_else(|| self.color_for_current_value())
    }

    pub fn gradient_stops(&self) -> GradientStops {
        match self.gradient_override {
            Some(color) => GradientStops::flat(color),
            None => GradientStops::from_config(&self.config),
        }
    }

    /// Value under horizontal location `x`, mapped across the control's bounds.
    pub fn value_for_location(&self, x: f64) -> f64 {
        let bounds = self.layout.bounds;
        value_for_location(x, bounds.min_x(), bounds.width(), self.config.range())
    }

    // ── Value and layout ──────────────────────────────────────────────

    /// Clamp `value` into the range and update thumb, mask and thumb color.
    pub fn set_value(&mut self, value: f64, animated: bool) {
        self.value = self.config.range().clamp(value);
        trace!(value = self.value, animated, "slider value set");
        self.push_value_state(animated);
    }

    /// Layout pass for new bounds.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.layout.bounds = bounds;
        self.relayout();
    }

    // ── Configuration properties ──────────────────────────────────────

    /// Replace the whole configuration. The value is re-clamped; overrides
    /// and the center mark are kept.
    pub fn set_config(&mut self, config: SliderConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.value = self.config.range().clamp(self.value);
        self.sync_all();
        Ok(())
    }

    /// Keeps `maximum_value >= range_floor(minimum_value)` by moving the
    /// maximum up when needed. A minimum with no finite value above it is
    /// rejected.
    pub fn set_minimum_value(&mut self, min: f64) -> Result<(), ConfigError> {
        if !min.is_finite() {
            return Err(ConfigError::NonFinite("minimum_value"));
        }
        if !range_floor(min).is_finite() {
            return Err(ConfigError::InvalidRange { min, max: self.config.maximum_value });
        }
        self.config.minimum_value = min;
        self.enforce_range();
        Ok(())
    }

    /// A maximum at or below the minimum becomes `range_floor(minimum)`.
    pub fn set_maximum_value(&mut self, max: f64) -> Result<(), ConfigError> {
        if !max.is_finite() {
            return Err(ConfigError::NonFinite("maximum_value"));
        }
        self.config.maximum_value = max;
        self.enforce_range();
        Ok(())
    }

    pub fn set_min_color(&mut self, color: Rgba) {
        self.config.min_color = color;
        self.push_colors();
    }

    pub fn set_max_color(&mut self, color: Rgba) {
        self.config.max_color = color;
        self.push_colors();
    }

    pub fn set_track_color(&mut self, color: Rgba) {
        self.config.track_color = color;
        self.renderer.set_track_color(color);
    }

    /// Rejected input leaves the previous locations in place.
    pub fn set_gradient_locations(&mut self, locations: Vec<f64>) -> Result<(), ConfigError> {
        validate_gradient_locations(&locations)?;
        self.config.gradient_locations = locations;
        self.push_gradient();
        Ok(())
    }

    pub fn set_thickness(&mut self, thickness: f64) -> Result<(), ConfigError> {
        let candidate = SliderConfig { thickness, ..self.config.clone() };
        candidate.validate()?;
        self.config = candidate;
        self.relayout();
        Ok(())
    }

    pub fn set_thumb_size(&mut self, thumb_size: f64) -> Result<(), ConfigError> {
        let candidate = SliderConfig { thumb_size, ..self.config.clone() };
        candidate.validate()?;
        self.config = candidate;
        self.relayout();
        Ok(())
    }

    pub fn set_continuous(&mut self, continuous: bool) {
        self.config.is_continuous = continuous;
    }

    // ── Disabled appearance ───────────────────────────────────────────

    /// Paint the thumb `color` regardless of value until
    /// [`enable_thumb_color`](Self::enable_thumb_color).
    pub fn set_disabled_thumb_color(&mut self, color: Rgba) {
        self.thumb_override = Some(color);
        self.renderer.set_thumb_color(color);
    }

    /// Collapse the gradient to a single flat stop of `color`.
    pub fn set_disabled_gradient_color(&mut self, color: Rgba) {
        self.gradient_override = Some(color);
        self.push_gradient();
    }

    /// Back to value-driven thumb coloring.
    pub fn enable_thumb_color(&mut self) {
        self.thumb_override = None;
        self.renderer.set_thumb_color(self.thumb_color());
    }

    /// Back to the configured two-stop gradient.
    pub fn enable_gradient_color(&mut self) {
        self.gradient_override = None;
        self.push_gradient();
    }

    pub fn is_thumb_color_overridden(&self) -> bool {
        self.thumb_override.is_some()
    }

    /// Show the enabled or disabled center-mark asset. A missing asset hides
    /// the mark.
    pub fn set_center_image_for_state(&mut self, enabled: bool) {
        let name = if enabled { CENTER_MARK_ENABLED } else { CENTER_MARK_DISABLED };
        self.center_image = self
            .images
            .image_size(name)
            .map(|size| CenterImage { name: name.to_string(), size });
        if self.center_image.is_none() {
            debug!(asset = name, "center mark asset not found");
        }
        self.renderer.set_center_image(self.center_image.as_ref());
    }

    // ── Notifications ─────────────────────────────────────────────────

    /// Append a listener for every [`SliderEvent`].
    pub fn add_listener(&mut self, listener: impl FnMut(&SliderEvent) + 'static) -> ListenerId {
        self.listeners.add(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Install the value observer, replacing any previous one.
    /// Returns true when an observer was replaced.
    pub fn set_value_observer(&mut self, observer: impl FnMut(&SliderModel<R>, f64) + 'static) -> bool {
        self.observer.replace(Box::new(observer)).is_some()
    }

    pub fn clear_value_observer(&mut self) {
        self.observer = None;
    }

    // ── Pointer tracking ──────────────────────────────────────────────

    pub fn handle_pointer(&mut self, event: PointerEvent) -> Disposition {
        let thumb = self.thumb_position();
        let transition = self.tracker.advance(event, thumb, self.config.thumb_size);
        match transition {
            Transition::Begin => {
                debug!(value = self.value, "tracking started");
                self.listeners.dispatch(&SliderEvent::InteractionStarted);
            }
            Transition::Drag(p) => {
                let new_value = self.value_for_location(p.x);
                self.set_value(new_value, false);
                if self.config.is_continuous {
                    self.notify_value_changed();
                }
            }
            Transition::End(location) => {
                if let Some(p) = location {
                    let new_value = self.value_for_location(p.x);
                    self.set_value(new_value, false);
                }
                debug!(value = self.value, "tracking ended");
                self.notify_value_changed();
                self.listeners.dispatch(&SliderEvent::InteractionEnded);
            }
            Transition::Cancel => {
                debug!(value = self.value, "tracking cancelled");
                self.listeners.dispatch(&SliderEvent::InteractionEnded);
            }
            Transition::Reject => {
                trace!(?event, "pointer-down outside thumb hit region");
            }
            Transition::None => {}
        }
        transition.disposition()
    }

    pub fn pointer_down(&mut self, location: Point) -> Disposition {
        self.handle_pointer(PointerEvent::Down(location))
    }

    pub fn pointer_moved(&mut self, location: Point) -> Disposition {
        self.handle_pointer(PointerEvent::Moved(location))
    }

    pub fn pointer_up(&mut self, location: Option<Point>) -> Disposition {
        self.handle_pointer(PointerEvent::Up(location))
    }

    pub fn pointer_cancelled(&mut self) -> Disposition {
        self.handle_pointer(PointerEvent::Cancelled)
    }

    // ── Internals ─────────────────────────────────────────────────────

    fn notify_value_changed(&mut self) {
        let value = self.value;
        self.listeners.dispatch(&SliderEvent::ValueChanged(value));
        if let Some(mut observer) = self.observer.take() {
            observer(&*self, value);
            self.observer = Some(observer);
        }
    }

    fn enforce_range(&mut self) {
        let floor = range_floor(self.config.minimum_value);
        if self.config.maximum_value < floor {
            warn!(
                min = self.config.minimum_value,
                max = self.config.maximum_value,
                "maximum_value raised to keep the range non-empty"
            );
            self.config.maximum_value = floor;
        }
        self.value = self.config.range().clamp(self.value);
        self.push_value_state(false);
    }

    fn relayout(&mut self) {
        let mark = self
            .images
            .image_size(CENTER_MARK_ENABLED)
            .unwrap_or(FALLBACK_CENTER_MARK);
        self.layout = SliderLayout::compute(self.layout.bounds, &self.config, mark);
        self.renderer.set_track_geometry(&self.layout);
        self.renderer
            .set_thumb_geometry(self.layout.thumb_size, self.layout.thumb_corner_radius);
        self.push_value_state(false);
    }

    fn push_value_state(&mut self, animated: bool) {
        self.renderer.set_mask_path(&self.mask_path());
        self.renderer.set_thumb_position(self.thumb_position(), animated);
        if self.thumb_override.is_none() {
            self.renderer.set_thumb_color(self.thumb_color());
        }
    }

    fn push_gradient(&mut self) {
        self.renderer.set_gradient_stops(self.gradient_stops().as_slice());
    }

    fn push_colors(&mut self) {
        self.push_gradient();
        if self.thumb_override.is_none() {
            self.renderer.set_thumb_color(self.thumb_color());
        }
    }

    fn sync_all(&mut self) {
        self.renderer.set_track_color(self.config.track_color);
        self.push_gradient();
        self.renderer.set_center_image(self.center_image.as_ref());
        self.relayout();
    }
}

impl<R: RenderAdapter + std::fmt::Debug> std::fmt::Debug for SliderModel<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliderModel")
            .field("config", &self.config)
            .field("value", &self.value)
            .field("layout", &self.layout)
            .field("tracking", &self.tracker.state())
            .field("thumb_override", &self.thumb_override)
            .field("gradient_override", &self.gradient_override)
            .field("center_image", &self.center_image)
            .field("renderer", &self.renderer)
            .field("listeners", &self.listeners)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RANGE_EPSILON;
    use crate::geometry::Size;
    use crate::render::{RecordingRenderer, RenderCommand, StaticImages};

    fn model() -> SliderModel<RecordingRenderer> {
        SliderModel::new(SliderConfig::default(), RecordingRenderer::new())
            .unwrap()
            .with_bounds(Rect::new(0.0, 0.0, 200.0, 30.0))
    }

    #[test]
    fn construction_rejects_invalid_config() {
        let config = SliderConfig { minimum_value: 1.0, maximum_value: 0.0, ..SliderConfig::default() };
        assert!(SliderModel::new(config, NullRenderer).is_err());
    }

    #[test]
    fn initial_value_is_clamped_zero() {
        let config = SliderConfig { minimum_value: 5.0, maximum_value: 10.0, ..SliderConfig::default() };
        let m = SliderModel::new(config, NullRenderer).unwrap();
        assert_eq!(m.value(), 5.0);
    }

    #[test]
    fn construction_pushes_full_state() {
        let m = model();
        let r = m.renderer();
        assert_eq!(r.track_color, Some(Rgba::WHITE));
        assert_eq!(r.gradient_stops.len(), 2);
        assert_eq!(r.thumb_diameter, Some(20.0));
        assert_eq!(r.thumb_position, Some(Point::new(12.0, 15.0)));
        assert_eq!(r.thumb_color, Some(Rgba::BLUE));
        assert!(r.layout.is_some());
    }

    #[test]
    fn set_value_clamps_and_pushes() {
        let mut m = model();
        m.renderer_mut().clear_log();
        m.set_value(3.0, true);
        assert_eq!(m.value(), 1.0);
        let r = m.renderer();
        assert_eq!(r.thumb_position, Some(Point::new(192.0, 15.0)));
        assert!(r.thumb_animated);
        assert_eq!(r.thumb_color, Some(Rgba::ORANGE));
        assert!(matches!(r.commands[0], RenderCommand::MaskPath(_)));
    }

    #[test]
    fn maximum_below_minimum_is_raised() {
        let mut m = model();
        m.set_value(0.8, false);
        m.set_maximum_value(-1.0).unwrap();
        assert_eq!(m.config().maximum_value, RANGE_EPSILON);
        assert_eq!(m.value(), RANGE_EPSILON);
    }

    #[test]
    fn raising_minimum_drags_value_and_maximum() {
        let mut m = model();
        m.set_minimum_value(4.0).unwrap();
        assert_eq!(m.config().maximum_value, 4.0 + RANGE_EPSILON);
        assert_eq!(m.value(), 4.0);
    }

    #[test]
    fn range_stays_non_empty_at_large_magnitudes() {
        let mut m = model();
        for min in [1e12, -1e12, 1e300, -1e300] {
            m.set_minimum_value(min).unwrap();
            m.set_maximum_value(min).unwrap();
            assert!(m.config().maximum_value > m.config().minimum_value, "min {min}");
            assert!(m.config().validate().is_ok(), "min {min}");
        }

        let archive = m.archive();
        assert!(SliderModel::restore(&archive, m.config(), NullRenderer, Rect::default()).is_ok());
    }

    #[test]
    fn minimum_at_float_limit_is_rejected() {
        let mut m = model();
        assert!(matches!(m.set_minimum_value(f64::MAX), Err(ConfigError::InvalidRange { .. })));
        assert_eq!(m.config().minimum_value, 0.0);
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        let mut m = model();
        assert!(m.set_maximum_value(f64::INFINITY).is_err());
        assert!(m.set_minimum_value(f64::NAN).is_err());
        assert_eq!(m.config().range(), crate::range::ValueRange::new(0.0, 1.0));
    }

    #[test]
    fn bad_gradient_locations_keep_previous() {
        let mut m = model();
        assert!(m.set_gradient_locations(vec![0.5]).is_err());
        assert_eq!(m.config().gradient_locations, vec![0.0, 1.0]);
        m.set_gradient_locations(vec![0.1, 0.9]).unwrap();
        assert_eq!(m.renderer().gradient_stops[0].location, 0.1);
    }

    #[test]
    fn disabled_gradient_is_flat_until_enabled() {
        let mut m = model();
        m.set_disabled_gradient_color(Rgba::GRAY);
        assert_eq!(m.renderer().gradient_stops.len(), 1);
        assert_eq!(m.renderer().gradient_stops[0].location, 1.0);

        m.set_max_color(Rgba::RED);
        assert_eq!(m.renderer().gradient_stops.len(), 1);

        m.enable_gradient_color();
        assert_eq!(m.renderer().gradient_stops[1].color, Rgba::RED);
    }

    #[test]
    fn thumb_size_changes_relayout() {
        let mut m = model();
        m.set_thumb_size(40.0).unwrap();
        assert_eq!(m.renderer().thumb_diameter, Some(40.0));
        assert_eq!(m.thumb_position(), Point::new(22.0, 15.0));
        assert!(m.set_thumb_size(-3.0).is_err());
        assert_eq!(m.config().thumb_size, 40.0);
    }

    #[test]
    fn center_image_uses_resolved_asset() {
        let mut m = model().with_images(StaticImages::center_marks(Size::new(1.0, 9.0)));
        m.set_center_image_for_state(false);
        let image = m.renderer().center_image.clone().unwrap();
        assert_eq!(image.name, CENTER_MARK_DISABLED);
        assert_eq!(m.layout().center_mark.size, Size::new(1.0, 9.0));
    }

    #[test]
    fn missing_center_image_hides_mark() {
        let mut m = model();
        m.set_center_image_for_state(true);
        assert!(m.center_image().is_none());
        assert_eq!(m.renderer().commands.last(), Some(&RenderCommand::CenterImage(None)));
    }

    #[test]
    fn set_config_reclamps_value() {
        let mut m = model();
        m.set_value(1.0, false);
        let config = SliderConfig { maximum_value: 0.5, ..SliderConfig::default() };
        m.set_config(config).unwrap();
        assert_eq!(m.value(), 0.5);
    }

    #[test]
    fn observer_replaces_previous() {
        let mut m = model();
        assert!(!m.set_value_observer(|_, _| {}));
        assert!(m.set_value_observer(|_, _| {}));
        m.clear_value_observer();
        assert!(!m.set_value_observer(|_, _| {}));
    }
}
