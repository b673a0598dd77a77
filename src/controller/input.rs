//! Key and mouse event handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::model::{classify_swipe, Event, Swipe};

use super::AppController;

/// Map a key press to a session event. Keys that only affect the shell
/// (quit, help, dismiss) are handled by the controller instead.
pub fn key_to_event(code: KeyCode, seek_step: f64, volume_step: f32) -> Option<Event> {
    let event = match code {
        KeyCode::Char(' ') => Event::TogglePlayPause,
        KeyCode::Left => Event::Previous,
        KeyCode::Right => Event::Next,
        KeyCode::Up => Event::LyricsUp,
        KeyCode::Down => Event::LyricsDown,
        KeyCode::Char(c @ '1'..='9') => Event::Select(c as usize - '1' as usize),
        KeyCode::Char('+') | KeyCode::Char('=') => Event::AdjustVolume(volume_step),
        KeyCode::Char('-') => Event::AdjustVolume(-volume_step),
        KeyCode::Char(',') => Event::SeekBy(-seek_step),
        KeyCode::Char('.') => Event::SeekBy(seek_step),
        _ => return None,
    };
    Some(event)
}

fn swipe_to_event(swipe: Swipe) -> Event {
    match swipe {
        Swipe::Up => Event::LyricsUp,
        Swipe::Down => Event::LyricsDown,
    }
}

impl AppController {
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Handle help popup
        if self.model.is_help_popup_open() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H')) {
                self.model.hide_help_popup();
            }
            return;
        }

        // Shell keys first, everything else goes to the session
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.model.set_should_quit(true),
            KeyCode::Char('h') | KeyCode::Char('H') => self.model.toggle_help_popup(),
            KeyCode::Esc if self.model.has_status() => self.model.clear_status(),
            code => {
                if let Some(event) =
                    key_to_event(code, self.config.seek_step_secs, self.config.volume_step)
                {
                    self.dispatch(event);
                }
            }
        }
    }

    /// Wheel scrolls the lyrics one line. A left click on the track list selects
    /// that track and one on the progress gauge seeks. A vertical left-button drag
    /// on the lyrics pane acts as a swipe.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if self.model.is_help_popup_open() {
            return;
        }

        match mouse.kind {
            MouseEventKind::ScrollUp => self.dispatch(Event::LyricsUp),
            MouseEventKind::ScrollDown => self.dispatch(Event::LyricsDown),
            MouseEventKind::Down(MouseButton::Left) => {
                let ui = self.model.get_ui_state();
                let clicked = self.view_areas.track_at(
                    mouse.column,
                    mouse.row,
                    ui.playlist.len(),
                    ui.active_track,
                );
                let seek = self.view_areas.seek_ratio_at(mouse.column, mouse.row);
                if let Some(index) = clicked {
                    self.drag_start = None;
                    self.dispatch(Event::Select(index));
                } else if let Some(ratio) = seek {
                    self.drag_start = None;
                    self.dispatch(Event::SeekToRatio(ratio));
                } else if self.view_areas.in_lyrics(mouse.column, mouse.row) {
                    self.drag_start = Some(mouse.row);
                } else {
                    self.drag_start = None;
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                // Only drags that started on the lyrics pane count
                if let Some(start) = self.drag_start.take() {
                    let min = f32::from(self.config.swipe_rows);
                    if let Some(swipe) = classify_swipe(f32::from(start), f32::from(mouse.row), min) {
                        self.dispatch(swipe_to_event(swipe));
                    }
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_space() {
        assert_eq!(key_to_event(KeyCode::Char(' '), 5.0, 0.05), Some(Event::TogglePlayPause));
        assert_eq!(key_to_event(KeyCode::Left, 5.0, 0.05), Some(Event::Previous));
        assert_eq!(key_to_event(KeyCode::Right, 5.0, 0.05), Some(Event::Next));
        assert_eq!(key_to_event(KeyCode::Up, 5.0, 0.05), Some(Event::LyricsUp));
        assert_eq!(key_to_event(KeyCode::Down, 5.0, 0.05), Some(Event::LyricsDown));
    }

    #[test]
    fn digits_select_tracks() {
        assert_eq!(key_to_event(KeyCode::Char('1'), 5.0, 0.05), Some(Event::Select(0)));
        assert_eq!(key_to_event(KeyCode::Char('9'), 5.0, 0.05), Some(Event::Select(8)));
        assert_eq!(key_to_event(KeyCode::Char('0'), 5.0, 0.05), None);
    }

    #[test]
    fn volume_and_seek_steps() {
        assert_eq!(key_to_event(KeyCode::Char('-'), 5.0, 0.05), Some(Event::AdjustVolume(-0.05)));
        assert_eq!(key_to_event(KeyCode::Char('.'), 5.0, 0.05), Some(Event::SeekBy(5.0)));
        assert_eq!(key_to_event(KeyCode::Char(','), 5.0, 0.05), Some(Event::SeekBy(-5.0)));
    }
}
