//! Top-level UI layout — slider, readout and event log stacked over a status bar.

pub mod event_log;
pub mod readout_panel;
pub mod slider_panel;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

/// Screen regions, outer (bordered) rects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panes {
    pub slider: Rect,
    pub readout: Rect,
    pub events: Rect,
    pub status: Rect,
}

pub fn panes(area: Rect) -> Panes {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(7),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    Panes { slider: chunks[0], readout: chunks[1], events: chunks[2], status: chunks[3] }
}

/// Cells the slider itself occupies for a frame of size `area`.
pub fn slider_area(area: Rect) -> Rect {
    panel_block("Slider", true).inner(panes(area).slider)
}

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let panes = panes(f.area());

    draw_panel(f, panes.slider, "Slider", !app.disabled, |f, inner| {
        slider_panel::render(f, inner, app)
    });
    draw_panel(f, panes.readout, "Readout", false, |f, inner| {
        readout_panel::render(f, inner, app)
    });
    draw_panel(f, panes.events, "Events", false, |f, inner| event_log::render(f, inner, app));
    status_bar::render(f, panes.status, app);
}

fn panel_block(title: &str, active: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(active))
        .title(format!(" {title} "))
        .title_style(theme::panel_title(active))
}

/// Draw a single panel with its border.
fn draw_panel(f: &mut Frame, area: Rect, title: &str, active: bool, body: impl FnOnce(&mut Frame, Rect)) {
    let block = panel_block(title, active);
    let inner = block.inner(area);
    f.render_widget(block, area);
    body(f, inner);
}
