//! Renderer-side state, changed only by applying render commands

use std::time::{Duration, Instant};

use super::events::RenderCommand;
use super::types::{LyricsView, Track, TrackLabel, VolumeLevel};
use super::session::DEFAULT_VOLUME;

/// Lyrics pane contents plus its transition state
#[derive(Clone, Debug, Default)]
pub struct LyricsPane {
    pub view: LyricsView,
    pub visible: bool,
}

#[derive(Clone, Debug)]
pub struct UiState {
    pub playlist: Vec<TrackLabel>,
    pub active_track: Option<usize>,
    pub now_playing: Option<Track>,
    pub lyrics: LyricsPane,
    pub is_playing: bool,
    pub time_current: String,
    pub time_duration: String,
    pub progress: f64,
    pub volume_level: VolumeLevel,
    pub volume: f32,
    pub controls_enabled: bool,
    pub status_message: Option<String>,
    pub status_timestamp: Option<Instant>,
    pub show_help_popup: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            playlist: Vec::new(),
            active_track: None,
            now_playing: None,
            lyrics: LyricsPane::default(),
            is_playing: false,
            time_current: "0:00".to_string(),
            time_duration: "0:00".to_string(),
            progress: 0.0,
            volume_level: VolumeLevel::from_ratio(DEFAULT_VOLUME),
            volume: DEFAULT_VOLUME,
            controls_enabled: false,
            status_message: None,
            status_timestamp: None,
            show_help_popup: false,
        }
    }
}

impl UiState {
    pub fn apply(&mut self, command: RenderCommand) {
        match command {
            RenderCommand::Playlist { labels, active } => {
                self.playlist = labels;
                self.active_track = active;
            }
            RenderCommand::NowPlaying(track) => self.now_playing = track,
            RenderCommand::LyricsHidden => self.lyrics.visible = false,
            RenderCommand::LyricsWindow(view) => self.lyrics.view = view,
            RenderCommand::LyricsShown => self.lyrics.visible = true,
            RenderCommand::PlaybackState { is_playing } => self.is_playing = is_playing,
            RenderCommand::Time { current, duration, progress } => {
                self.time_current = current;
                self.time_duration = duration;
                self.progress = progress;
            }
            RenderCommand::VolumeIcon { level, ratio } => {
                self.volume_level = level;
                self.volume = ratio;
            }
            RenderCommand::Controls { enabled } => self.controls_enabled = enabled,
            RenderCommand::Status(message) => self.set_status(message),
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_timestamp = Some(Instant::now());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_timestamp = None;
    }

    pub fn auto_clear_status(&mut self, max_age: Duration) {
        if self
            .status_timestamp
            .is_some_and(|at| at.elapsed() >= max_age)
        {
            self.clear_status();
        }
    }

    /// Play/pause glyph for the transport
    pub fn play_icon(&self) -> &'static str {
        if self.is_playing { "⏸" } else { "▶" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::WindowLine;

    #[test]
    fn lyrics_transition_commands() {
        let mut ui = UiState::default();
        ui.apply(RenderCommand::LyricsShown);
        ui.apply(RenderCommand::LyricsHidden);
        assert!(!ui.lyrics.visible);

        let lines = vec![WindowLine { index: 0, text: "a".into(), active: true }];
        ui.apply(RenderCommand::LyricsWindow(LyricsView::Lines(lines.clone())));
        assert!(!ui.lyrics.visible);
        ui.apply(RenderCommand::LyricsShown);
        assert!(ui.lyrics.visible);
        assert_eq!(ui.lyrics.view, LyricsView::Lines(lines));
    }

    #[test]
    fn status_expires() {
        let mut ui = UiState::default();
        ui.apply(RenderCommand::Status("boom".into()));
        ui.auto_clear_status(Duration::from_secs(60));
        assert!(ui.status_message.is_some());
        ui.auto_clear_status(Duration::ZERO);
        assert!(ui.status_message.is_none());
    }

    #[test]
    fn play_icon_follows_state() {
        let mut ui = UiState::default();
        assert_eq!(ui.play_icon(), "▶");
        ui.apply(RenderCommand::PlaybackState { is_playing: true });
        assert_eq!(ui.play_icon(), "⏸");
    }
}
