//! Input dispatch — keys drive the app, mouse and focus drive the slider.
//!
//! Mouse cells are converted to control-local points through
//! [`AppState::to_local`]; only the left button takes part in tracking.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tracing::trace;

use gradslider_core::{Disposition, PointerEvent};

use crate::app::{AppState, KEY_STEP};

pub fn handle_event(app: &mut AppState, event: Event) {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::FocusLost => handle_focus_lost(app),
        _ => {}
    }
}

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        KeyCode::Left | KeyCode::Char('h') => app.step(-KEY_STEP),
        KeyCode::Right | KeyCode::Char('l') => app.step(KEY_STEP),
        KeyCode::Home => app.jump_to_minimum(),
        KeyCode::End => app.jump_to_maximum(),
        KeyCode::Char('d') => app.toggle_disabled(),
        KeyCode::Char('c') => app.toggle_continuous(),
        _ => {}
    }
}

/// Translate a crossterm mouse event into the slider's pointer stream.
pub fn pointer_event(app: &AppState, mouse: MouseEvent) -> Option<PointerEvent> {
    let at = app.to_local(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(PointerEvent::Down(at)),
        MouseEventKind::Drag(MouseButton::Left) => Some(PointerEvent::Moved(at)),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerEvent::Up(Some(at))),
        _ => None,
    }
}

pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    if app.disabled {
        return;
    }
    let Some(event) = pointer_event(app, mouse) else {
        return;
    };
    match app.slider.handle_pointer(event) {
        Disposition::Rejected => app.set_warning("Grab the thumb to drag"),
        Disposition::Accepted if matches!(event, PointerEvent::Up(_)) => {
            app.set_status(format!("Value {:.3}", app.slider.value()));
        }
        disposition => trace!(?event, ?disposition, "pointer event"),
    }
}

/// Losing focus mid-drag cancels the gesture.
pub fn handle_focus_lost(app: &mut AppState) {
    if app.slider.pointer_cancelled() == Disposition::Accepted {
        app.set_warning("Drag cancelled");
    }
}
