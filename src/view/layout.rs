//! Layout rendering (now-playing header, track list)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph},
    Frame,
};

use crate::model::UiState;
use super::list_offset;
use super::utils::{calculate_num_width, truncate_string, vinyl_glyph};

pub fn render_now_playing(frame: &mut Frame, area: Rect, ui_state: &UiState, tick: u64) {
    let vinyl_style = if ui_state.is_playing {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = ui_state
        .now_playing
        .as_ref()
        .map(|track| track.name.as_str())
        .unwrap_or("No track loaded");

    let line = Line::from(vec![
        Span::styled(format!("{} ", vinyl_glyph(ui_state.is_playing, tick)), vinyl_style),
        Span::styled(
            title.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Now Playing ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(header, area);
}

pub fn render_track_list(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let num_width = calculate_num_width(ui_state.playlist.len());
    let title_width = (area.width as usize).saturating_sub(num_width + 6);

    let items: Vec<ListItem> = ui_state
        .playlist
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let is_active = ui_state.active_track == Some(i);
            let style = if is_active {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            // Note marker on the active track only
            let marker = if is_active { "♪" } else { " " };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>width$} ", label.number, width = num_width),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format!("{marker} "), style),
                Span::styled(truncate_string(&label.title, title_width), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Tracks "));

    // Same offset the mouse hit-test uses
    let visible_rows = area.height.saturating_sub(2);
    let mut list_state = ListState::default()
        .with_offset(list_offset(ui_state.active_track, visible_rows))
        .with_selected(ui_state.active_track);

    frame.render_stateful_widget(list, area, &mut list_state);
}
