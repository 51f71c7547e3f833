//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here. The slider model owns the terminal canvas; the
//! event log is shared with the model's listener through `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use chrono::NaiveDateTime;
use ratatui::layout::Rect as CellRect;
use tracing::{info, warn};

use gradslider_core::{
    Point, Rect, Rgba, SliderArchive, SliderConfig, SliderEvent, SliderModel, Size, StaticImages,
};

use crate::canvas::{column_center, row_center, TerminalCanvas, CELL_HEIGHT, CELL_WIDTH};

/// Entries kept in the event log panel.
pub const EVENT_LOG_CAPACITY: usize = 8;

/// Keyboard step as a fraction of the value span.
pub const KEY_STEP: f64 = 0.05;

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// A slider notification with the wall-clock time it arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: NaiveDateTime,
    pub event: SliderEvent,
}

pub type EventLog = Rc<RefCell<VecDeque<LogEntry>>>;

/// Top-level application state.
pub struct AppState {
    pub slider: SliderModel<TerminalCanvas>,
    pub events: EventLog,
    /// Terminal cells the slider occupies, in screen coordinates.
    pub slider_area: CellRect,
    pub disabled: bool,
    pub running: bool,
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    /// Build the slider from `base`, restoring `archive` on top when a saved
    /// state exists. An archive that no longer validates is dropped in favor
    /// of `base` alone.
    pub fn new(base: SliderConfig, archive: Option<&SliderArchive>) -> anyhow::Result<Self> {
        let mut status = None;
        let slider = match archive {
            None => SliderModel::new(base, TerminalCanvas::new())?,
            Some(archive) => match SliderModel::restore(archive, &base, TerminalCanvas::new(), Rect::default()) {
                Ok(model) => model,
                Err(e) => {
                    warn!(error = %e, "discarding saved slider state");
                    status = Some((format!("Saved state ignored: {e}"), StatusLevel::Warning));
                    SliderModel::new(base, TerminalCanvas::new())?
                }
            },
        };
        let slider = slider.with_images(StaticImages::center_marks(Size::new(CELL_WIDTH, CELL_HEIGHT)));

        let mut app = Self {
            slider,
            events: Rc::new(RefCell::new(VecDeque::with_capacity(EVENT_LOG_CAPACITY))),
            slider_area: CellRect::default(),
            disabled: false,
            running: true,
            status_message: status,
        };
        app.attach_event_log();
        app.slider.set_center_image_for_state(true);
        Ok(app)
    }

    fn attach_event_log(&mut self) {
        let log = self.events.clone();
        self.slider.add_listener(move |event| {
            let mut log = log.borrow_mut();
            log.push_front(LogEntry { timestamp: chrono::Local::now().naive_local(), event: *event });
            if log.len() > EVENT_LOG_CAPACITY {
                log.pop_back();
            }
        });
    }

    /// Lay the slider out over `area`. No-op when the area is unchanged.
    pub fn resize(&mut self, area: CellRect) {
        if area == self.slider_area {
            return;
        }
        self.slider_area = area;
        self.slider.set_bounds(Rect::new(
            0.0,
            0.0,
            f64::from(area.width) * CELL_WIDTH,
            f64::from(area.height) * CELL_HEIGHT,
        ));
    }

    /// Control-local point at the center of screen cell (`column`, `row`).
    /// Cells outside the slider map to points outside its bounds.
    pub fn to_local(&self, column: u16, row: u16) -> Point {
        let dx = f64::from(column) - f64::from(self.slider_area.x);
        let dy = f64::from(row) - f64::from(self.slider_area.y);
        Point::new(dx * CELL_WIDTH + column_center(0), dy * CELL_HEIGHT + row_center(0))
    }

    /// Move the value by `fraction` of the span, animated.
    pub fn step(&mut self, fraction: f64) {
        if self.disabled {
            return;
        }
        let range = self.slider.config().range();
        let target = self.slider.value() + fraction * range.span();
        self.slider.set_value(target, true);
        self.set_status(format!("Value {:.3}", self.slider.value()));
    }

    pub fn jump_to_minimum(&mut self) {
        if self.disabled {
            return;
        }
        let min = self.slider.config().minimum_value;
        self.slider.set_value(min, true);
        self.set_status(format!("Value {:.3}", self.slider.value()));
    }

    pub fn jump_to_maximum(&mut self) {
        if self.disabled {
            return;
        }
        let max = self.slider.config().maximum_value;
        self.slider.set_value(max, true);
        self.set_status(format!("Value {:.3}", self.slider.value()));
    }

    /// Disabled: gray thumb, flat gray gradient, disabled center mark, no input.
    pub fn toggle_disabled(&mut self) {
        self.disabled = !self.disabled;
        if self.disabled {
            if self.slider.is_tracking() {
                self.slider.pointer_cancelled();
            }
            self.slider.set_disabled_thumb_color(Rgba::GRAY);
            self.slider.set_disabled_gradient_color(Rgba::GRAY);
            self.slider.set_center_image_for_state(false);
            self.set_status("Slider disabled");
        } else {
            self.slider.enable_thumb_color();
            self.slider.enable_gradient_color();
            self.slider.set_center_image_for_state(true);
            self.set_status("Slider enabled");
        }
        info!(disabled = self.disabled, "slider enablement toggled");
    }

    pub fn toggle_continuous(&mut self) {
        let continuous = !self.slider.config().is_continuous;
        self.slider.set_continuous(continuous);
        self.set_status(if continuous { "Continuous updates on" } else { "Continuous updates off" });
    }

    /// Advance animations by one frame.
    pub fn tick(&mut self) {
        self.slider.renderer_mut().tick();
    }

    pub fn archive(&self) -> SliderArchive {
        self.slider.archive()
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
