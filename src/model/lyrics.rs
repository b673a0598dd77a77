//! Lyrics window engine
//!
//! Holds the tokenized lines of the current track and a manually driven cursor.
//! The cursor never follows playback time; it only moves on up/down requests.

use super::types::WindowLine;

/// Lines visible on either side of the cursor
const WINDOW_RADIUS: usize = 1;

#[derive(Clone, Debug, Default)]
pub struct LyricsEngine {
    lines: Vec<String>,
    cursor: Option<usize>,
}

/// Split on line breaks, trim each line and drop the blank ones.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

impl LyricsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the buffer. `None` or text without any non-blank line leaves
    /// the engine in the unavailable state.
    pub fn set_document(&mut self, text: Option<&str>) {
        self.lines = text.map(tokenize).unwrap_or_default();
        self.cursor = if self.lines.is_empty() { None } else { Some(0) };
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.cursor = None;
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_available(&self) -> bool {
        self.cursor.is_some()
    }

    /// Returns true when the cursor moved.
    pub fn move_up(&mut self) -> bool {
        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                true
            }
            _ => false,
        }
    }

    /// Returns true when the cursor moved.
    pub fn move_down(&mut self) -> bool {
        match self.cursor {
            Some(i) if i + 1 < self.lines.len() => {
                self.cursor = Some(i + 1);
                true
            }
            _ => false,
        }
    }

    /// Previous, current and next line around the cursor, clipped to the buffer.
    pub fn current_window(&self) -> Vec<WindowLine> {
        let Some(cursor) = self.cursor else {
            return Vec::new();
        };
        let start = cursor.saturating_sub(WINDOW_RADIUS);
        let end = (cursor + WINDOW_RADIUS + 1).min(self.lines.len());
        (start..end)
            .map(|index| WindowLine {
                index,
                text: self.lines[index].clone(),
                active: index == cursor,
            })
            .collect()
    }
}
