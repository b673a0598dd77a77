//! Playlist controller: ordered tracks, current-track cursor and play/pause flag

use super::types::{Track, TrackLabel};

/// Observable controller state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaylistState {
    Empty,
    Paused,
    Playing,
}

#[derive(Clone, Debug, Default)]
pub struct Playlist {
    tracks: Vec<Track>,
    current: Option<usize>,
    is_playing: bool,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the track list. Nothing is selected afterwards.
    pub fn load(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
        self.current = None;
        self.is_playing = false;
    }

    pub fn clear(&mut self) {
        self.load(Vec::new());
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current.and_then(|i| self.tracks.get(i))
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn state(&self) -> PlaylistState {
        match (self.current, self.is_playing) {
            (None, _) => PlaylistState::Empty,
            (Some(_), false) => PlaylistState::Paused,
            (Some(_), true) => PlaylistState::Playing,
        }
    }

    pub fn labels(&self) -> Vec<TrackLabel> {
        self.tracks
            .iter()
            .enumerate()
            .map(|(i, track)| track.label(i))
            .collect()
    }

    /// Move the cursor to `index`. Out-of-range requests are ignored.
    /// Play/pause status carries over to the new track.
    pub fn select(&mut self, index: usize) -> Option<&Track> {
        if index >= self.tracks.len() {
            return None;
        }
        self.current = Some(index);
        self.tracks.get(index)
    }

    /// Circular step forward. With nothing selected the first track is chosen.
    pub fn next(&mut self) -> Option<&Track> {
        let len = self.tracks.len();
        if len == 0 {
            return None;
        }
        let index = match self.current {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.select(index)
    }

    /// Circular step backward. With nothing selected the last track is chosen.
    pub fn previous(&mut self) -> Option<&Track> {
        let len = self.tracks.len();
        if len == 0 {
            return None;
        }
        let index = match self.current {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        };
        self.select(index)
    }

    /// Flip play/pause. Returns the new flag, or `None` when no track is loaded.
    pub fn toggle_play_pause(&mut self) -> Option<bool> {
        self.current?;
        self.is_playing = !self.is_playing;
        Some(self.is_playing)
    }

    /// End of the current track: step forward and keep playing.
    pub fn advance_on_end(&mut self) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }
        self.is_playing = true;
        self.next()
    }
}
