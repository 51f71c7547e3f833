//! Readout panel — value, color and tracking state.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use gradslider_core::TrackingState;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let slider = &app.slider;
    let config = slider.config();
    let thumb = slider.thumb_color();

    let tracking = match slider.tracking_state() {
        TrackingState::Idle => Span::styled("idle", theme::muted()),
        TrackingState::Tracking => Span::styled("tracking", theme::positive()),
    };
    let continuous = if config.is_continuous {
        Span::styled("on", theme::positive())
    } else {
        Span::styled("off", theme::warning())
    };
    let enabled = if app.disabled {
        Span::styled("disabled", theme::warning())
    } else {
        Span::styled("enabled", theme::positive())
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Value       ", theme::label()),
            Span::styled(format!("{:.4}", slider.value()), theme::accent().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  [{} … {}]", config.minimum_value, config.maximum_value),
                theme::muted(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Color       ", theme::label()),
            Span::styled("██ ", Style::default().fg(theme::to_color(thumb))),
            Span::raw(thumb.to_hex()),
        ]),
        Line::from(vec![Span::styled("Tracking    ", theme::label()), tracking]),
        Line::from(vec![Span::styled("Continuous  ", theme::label()), continuous]),
        Line::from(vec![Span::styled("State       ", theme::label()), enabled]),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
