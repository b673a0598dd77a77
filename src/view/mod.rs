//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It only reads [`UiState`]; nothing here touches the session.
//!
//! - `utils`: Shared helpers (truncation, popup placement)
//! - `layout`: Now-playing header and track list
//! - `lyrics`: The 3-line lyrics window
//! - `progress`: Transport, time and volume bar
//! - `overlays`: Status notification and help popup

mod utils;
mod layout;
mod lyrics;
mod progress;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Position, Rect},
    Frame,
};

use crate::model::UiState;

/// Screen regions of one frame. Mouse events are hit-tested against the
/// regions of the last drawn frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewAreas {
    pub header: Rect,
    pub tracks: Rect,
    pub lyrics: Rect,
    pub progress: Rect,
}

impl ViewAreas {
    pub fn compute(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Now playing
                Constraint::Min(0),    // Track list + lyrics
                Constraint::Length(3), // Transport and progress
            ])
            .split(area);

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(35), // Track list
                Constraint::Percentage(65), // Lyrics
            ])
            .split(chunks[1]);

        Self {
            header: chunks[0],
            tracks: main_chunks[0],
            lyrics: main_chunks[1],
            progress: chunks[2],
        }
    }

    /// Index of the track drawn at `(column, row)`, if there is one.
    pub fn track_at(&self, column: u16, row: u16, len: usize, active: Option<usize>) -> Option<usize> {
        // Rows inside the list border
        let inner = self.tracks.inner(Margin::new(1, 1));
        if !inner.contains(Position::new(column, row)) {
            return None;
        }
        let index = list_offset(active, inner.height) + usize::from(row - inner.y);
        (index < len).then_some(index)
    }

    pub fn in_lyrics(&self, column: u16, row: u16) -> bool {
        self.lyrics.contains(Position::new(column, row))
    }

    /// Fraction of the progress gauge left of `(column, row)`.
    pub fn seek_ratio_at(&self, column: u16, row: u16) -> Option<f64> {
        let inner = self.progress.inner(Margin::new(1, 1));
        if inner.width == 0 || !inner.contains(Position::new(column, row)) {
            return None;
        }
        Some(f64::from(column - inner.x) / f64::from(inner.width))
    }
}

/// First track shown when `visible_rows` fit, keeping the active one in view.
pub(crate) fn list_offset(active: Option<usize>, visible_rows: u16) -> usize {
    let visible = usize::from(visible_rows.max(1));
    active.map_or(0, |index| (index + 1).saturating_sub(visible))
}

pub struct AppView;

impl AppView {
    /// `tick` advances a few times per second and drives the vinyl animation.
    /// Returns the regions that were drawn.
    pub fn render(frame: &mut Frame, ui_state: &UiState, tick: u64) -> ViewAreas {
        let areas = ViewAreas::compute(frame.area());

        layout::render_now_playing(frame, areas.header, ui_state, tick);
        layout::render_track_list(frame, areas.tracks, ui_state);
        lyrics::render_lyrics(frame, areas.lyrics, ui_state);
        progress::render_progress_bar(frame, areas.progress, ui_state);

        // Overlays last so they sit on top
        if ui_state.status_message.is_some() {
            overlays::render_status_notification(frame, ui_state);
        }

        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }

        areas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn areas() -> ViewAreas {
        ViewAreas::compute(Rect::new(0, 0, 100, 30))
    }

    #[test]
    fn panes_split_the_middle_row() {
        let areas = areas();
        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.progress.height, 3);
        assert_eq!(areas.tracks.y, areas.lyrics.y);
        assert_eq!(areas.tracks.right(), areas.lyrics.x);
    }

    #[test]
    fn click_maps_to_list_row() {
        let areas = areas();
        let x = areas.tracks.x + 2;
        let top = areas.tracks.y + 1;

        assert_eq!(areas.track_at(x, top, 5, None), Some(0));
        assert_eq!(areas.track_at(x, top + 3, 5, Some(1)), Some(3));
        // Border, past the last track, other panes
        assert_eq!(areas.track_at(x, areas.tracks.y, 5, None), None);
        assert_eq!(areas.track_at(x, top + 5, 5, None), None);
        assert_eq!(areas.track_at(areas.lyrics.x + 2, top, 5, None), None);
    }

    #[test]
    fn click_follows_scrolled_list() {
        let areas = areas();
        let visible = areas.tracks.height - 2;
        let x = areas.tracks.x + 2;
        let top = areas.tracks.y + 1;
        let active = usize::from(visible) + 4;

        assert_eq!(list_offset(Some(active), visible), 5);
        assert_eq!(areas.track_at(x, top, 40, Some(active)), Some(5));
        assert_eq!(
            areas.track_at(x, top + visible - 1, 40, Some(active)),
            Some(active)
        );
    }

    #[test]
    fn lyrics_pane_hit_test() {
        let areas = areas();
        assert!(areas.in_lyrics(areas.lyrics.x + 1, areas.lyrics.y + 1));
        assert!(!areas.in_lyrics(areas.tracks.x + 1, areas.tracks.y + 1));
        assert!(!areas.in_lyrics(areas.lyrics.x + 1, areas.header.y));
    }

    #[test]
    fn progress_click_gives_ratio() {
        let areas = areas();
        let row = areas.progress.y + 1;
        let left = areas.progress.x + 1;
        let width = areas.progress.width - 2;

        assert_eq!(areas.seek_ratio_at(left, row), Some(0.0));
        assert_eq!(areas.seek_ratio_at(left + width / 2, row), Some(0.5));
        assert_eq!(areas.seek_ratio_at(left, areas.progress.y), None);
    }
}
