//! Touch-tracking state machine.
//!
//! ```text
//!            Down (inside hit region)
//!   Idle ───────────────────────────────▶ Tracking ──┐ Moved
//!    ▲                                      │  ▲     │
//!    │            Up / Cancelled            │  └─────┘
//!    └──────────────────────────────────────┘
//! ```
//!
//! The machine decides transitions only; value updates and notifications are
//! applied by `SliderModel`, which owns the state.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect, Size};

/// Minimum side of the thumb's hit square, independent of the visual size.
pub const MIN_HIT_TARGET: f64 = 44.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TrackingState {
    #[default]
    Idle,
    Tracking,
}

/// Pointer input in control-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down(Point),
    Moved(Point),
    /// Release, with the final location when the host knows it.
    Up(Option<Point>),
    /// The host interrupted the gesture.
    Cancelled,
}

/// How the control handled a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disposition {
    /// The event drove a transition.
    Accepted,
    /// A pointer-down outside the hit region; the host should not start a gesture.
    Rejected,
    /// The event does not apply in the current state.
    Ignored,
}

/// What the model must do in response to an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Begin,
    Drag(Point),
    End(Option<Point>),
    Cancel,
    Reject,
    None,
}

/// Square of side `max(thumb_size, MIN_HIT_TARGET)` centered on the thumb.
pub fn hit_region(thumb_center: Point, thumb_size: f64) -> Rect {
    let side = thumb_size.max(MIN_HIT_TARGET);
    Rect::centered_at(thumb_center, Size::new(side, side))
}

/// Tracking state plus transition rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tracker {
    state: TrackingState,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TrackingState {
        self.state
    }

    pub fn is_tracking(&self) -> bool {
        self.state == TrackingState::Tracking
    }

    /// Advance on `event`. `thumb_center` and `thumb_size` locate the hit region
    /// for pointer-down.
    pub fn advance(&mut self, event: PointerEvent, thumb_center: Point, thumb_size: f64) -> Transition {
        match (self.state, event) {
            (TrackingState::Idle, PointerEvent::Down(p)) => {
                if hit_region(thumb_center, thumb_size).contains(p) {
                    self.state = TrackingState::Tracking;
                    Transition::Begin
                } else {
                    Transition::Reject
                }
            }
            (TrackingState::Tracking, PointerEvent::Moved(p)) => Transition::Drag(p),
            (TrackingState::Tracking, PointerEvent::Up(p)) => {
                self.state = TrackingState::Idle;
                Transition::End(p)
            }
            (TrackingState::Tracking, PointerEvent::Cancelled) => {
                self.state = TrackingState::Idle;
                Transition::Cancel
            }
            _ => Transition::None,
        }
    }
}

impl Transition {
    pub fn disposition(&self) -> Disposition {
        match self {
            Transition::Reject => Disposition::Rejected,
            Transition::None => Disposition::Ignored,
            _ => Disposition::Accepted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THUMB: Point = Point::new(0.0, 10.0);

    #[test]
    fn hit_region_has_minimum_size() {
        let small = hit_region(THUMB, 20.0);
        assert_eq!(small, Rect::new(-22.0, -12.0, 44.0, 44.0));

        let large = hit_region(THUMB, 60.0);
        assert_eq!(large.width(), 60.0);
    }

    #[test]
    fn down_outside_hit_region_is_rejected() {
        let mut tracker = Tracker::new();
        let t = tracker.advance(PointerEvent::Down(Point::new(50.0, 10.0)), THUMB, 20.0);
        assert_eq!(t, Transition::Reject);
        assert_eq!(t.disposition(), Disposition::Rejected);
        assert_eq!(tracker.state(), TrackingState::Idle);
    }

    #[test]
    fn full_gesture() {
        let mut tracker = Tracker::new();
        assert_eq!(tracker.advance(PointerEvent::Down(Point::new(5.0, 10.0)), THUMB, 20.0), Transition::Begin);
        assert!(tracker.is_tracking());

        let p = Point::new(30.0, 10.0);
        assert_eq!(tracker.advance(PointerEvent::Moved(p), THUMB, 20.0), Transition::Drag(p));
        assert_eq!(tracker.advance(PointerEvent::Up(Some(p)), THUMB, 20.0), Transition::End(Some(p)));
        assert_eq!(tracker.state(), TrackingState::Idle);
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut tracker = Tracker::new();
        tracker.advance(PointerEvent::Down(THUMB), THUMB, 20.0);
        assert_eq!(tracker.advance(PointerEvent::Cancelled, THUMB, 20.0), Transition::Cancel);
        assert_eq!(tracker.state(), TrackingState::Idle);
    }

    #[test]
    fn out_of_state_events_are_ignored() {
        let mut tracker = Tracker::new();
        for event in [PointerEvent::Moved(THUMB), PointerEvent::Up(None), PointerEvent::Cancelled] {
            let t = tracker.advance(event, THUMB, 20.0);
            assert_eq!(t.disposition(), Disposition::Ignored);
        }

        tracker.advance(PointerEvent::Down(THUMB), THUMB, 20.0);
        let again = tracker.advance(PointerEvent::Down(THUMB), THUMB, 20.0);
        assert_eq!(again, Transition::None);
        assert!(tracker.is_tracking());
    }
}
