//! Progress bar rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::model::UiState;

pub fn render_progress_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let transport_style = if ui_state.controls_enabled {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let status_text = match &ui_state.now_playing {
        Some(track) => format!(" {} {} ", ui_state.play_icon(), track.name),
        None => " No track playing ".to_string(),
    };

    let volume_text = format!(
        " {} {}% ",
        ui_state.volume_level.icon(),
        (ui_state.volume * 100.0).round() as u16
    );

    let time_str = format!("{} / {}", ui_state.time_current, ui_state.time_duration);

    let inner_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([Constraint::Length(3)])
        .split(area);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(transport_style)
                .title(status_text)
                .title_bottom(Line::from(volume_text).right_aligned()),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(ui_state.progress.clamp(0.0, 1.0))
        .label(time_str);

    frame.render_widget(gauge, inner_chunks[0]);
}
