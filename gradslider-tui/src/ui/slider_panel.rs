//! Slider panel — the rasterized track row.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::canvas::CellKind;
use crate::theme;

pub const THUMB: &str = "●";
pub const FILL: &str = "━";
pub const TRACK: &str = "─";
pub const CENTER_MARK: &str = "┃";

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let spans: Vec<Span> = app
        .slider
        .renderer()
        .row(area.width)
        .into_iter()
        .map(|cell| {
            let symbol = match cell.kind {
                CellKind::Thumb => THUMB,
                CellKind::Fill => FILL,
                CellKind::Track => TRACK,
                CellKind::CenterMark => CENTER_MARK,
            };
            Span::styled(symbol, Style::default().fg(theme::to_color(cell.color)))
        })
        .collect();

    // The track runs through the vertical middle of the control.
    let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    f.render_widget(Paragraph::new(Line::from(spans)), row);
}
