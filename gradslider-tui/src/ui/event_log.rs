//! Event log panel — newest slider notifications first.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use gradslider_core::SliderEvent;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let log = app.events.borrow();
    if log.is_empty() {
        let hint = Line::from(Span::styled("Drag the thumb to see notifications.", theme::muted()));
        f.render_widget(Paragraph::new(hint), area);
        return;
    }

    let lines: Vec<Line> = log
        .iter()
        .map(|entry| {
            let (name, style, detail) = match entry.event {
                SliderEvent::InteractionStarted => ("InteractionStarted", theme::neutral(), String::new()),
                SliderEvent::ValueChanged(v) => ("ValueChanged", theme::accent(), format!(" {v:.4}")),
                SliderEvent::InteractionEnded => ("InteractionEnded", theme::neutral(), String::new()),
            };
            Line::from(vec![
                Span::styled(entry.timestamp.format("%H:%M:%S%.3f  ").to_string(), theme::muted()),
                Span::styled(name, style),
                Span::raw(detail),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), area);
}
