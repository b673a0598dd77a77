//! Overlay rendering (status notification, help popup)

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::UiState;
use super::utils::centered_rect;

pub fn render_status_notification(frame: &mut Frame, ui_state: &UiState) {
    if let Some(ref message) = ui_state.status_message {
        let area = frame.area();

        // Fixed width, height grows with the wrapped message
        let popup_width = 52.min(area.width.saturating_sub(4));
        let inner_width = popup_width.saturating_sub(4).max(1) as usize;

        let line_count = message.chars().count().div_ceil(inner_width) as u16;
        let popup_height = (2 + line_count.max(1)).min(area.height.saturating_sub(4));

        let popup_area = centered_rect(area, popup_width, popup_height);

        // Clear the area behind the popup first
        frame.render_widget(Clear, popup_area);

        let widget = Paragraph::new(message.to_string())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" Notice (Esc to dismiss) ")
                    .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                    .style(Style::default().bg(Color::Black)),
            );

        frame.render_widget(widget, popup_area);
    }
}

pub fn render_help_popup(frame: &mut Frame) {
    let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let bindings = [
        ("Space", "Play / pause"),
        ("← / →", "Previous / next track"),
        ("↑ / ↓", "Previous / next lyric line"),
        ("1-9, click", "Jump to track"),
        (", / .", "Seek back / forward"),
        ("Click bar", "Seek"),
        ("- / +", "Volume down / up"),
        ("Wheel, drag", "Scroll lyrics"),
        ("h", "Toggle this help"),
        ("q", "Quit"),
    ];

    let lines: Vec<Line> = bindings
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("{key:>12}  "), key_style),
                Span::raw(*action),
            ])
        })
        .collect();

    // One row per binding plus the border
    let popup_area = centered_rect(frame.area(), 46, lines.len() as u16 + 2);
    frame.render_widget(Clear, popup_area);

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help (Esc to close) ")
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(help, popup_area);
}
