//! Lyrics window rendering

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::model::{LyricsView, UiState};

const PLACEHOLDER: &str = "No lyrics available. Place a .txt file with the same name as the \
                           audio file in the music folder.";

pub fn render_lyrics(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let pane = &ui_state.lyrics;

    let mut lines: Vec<Line> = Vec::new();
    if pane.visible {
        match &pane.view {
            LyricsView::Unavailable => {
                lines.push(Line::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)));
            }
            LyricsView::Lines(window) => {
                for entry in window {
                    let style = if entry.active {
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Gray)
                    };
                    lines.push(Line::styled(entry.text.clone(), style));
                    lines.push(Line::raw(""));
                }
                lines.pop();
            }
        }
    }

    // Vertically center the window inside the pane
    let inner_height = area.height.saturating_sub(2) as usize;
    let pad = inner_height.saturating_sub(lines.len()) / 2;
    let mut padded: Vec<Line> = std::iter::repeat_with(|| Line::raw("")).take(pad).collect();
    padded.extend(lines);

    let widget = Paragraph::new(padded)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Lyrics ")
                .title_bottom(Line::from(" ↑/↓ ").right_aligned()),
        );
    frame.render_widget(widget, area);
}
