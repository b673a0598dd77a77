//! Events consumed by the session and the effects it asks the adapters to perform

use super::types::{LyricsView, Track, TrackLabel, VolumeLevel};

/// Commands understood by the audio driver
#[derive(Clone, Debug, PartialEq)]
pub enum AudioCommand {
    /// Replace the current source. Events about it carry `load_id` back.
    Load { load_id: u64, url: String },
    Play,
    Pause,
    Seek(f64),
    SetVolume(f32),
    Shutdown,
}

/// Notifications emitted by the audio driver
#[derive(Clone, Debug, PartialEq)]
pub enum AudioEvent {
    PositionChanged { load_id: u64, seconds: f64 },
    MetadataLoaded { load_id: u64, duration: f64 },
    Ended { load_id: u64 },
    Failed(String),
}

impl AudioEvent {
    /// The load this event is about, if it belongs to one.
    pub fn load_id(&self) -> Option<u64> {
        match self {
            AudioEvent::PositionChanged { load_id, .. }
            | AudioEvent::MetadataLoaded { load_id, .. }
            | AudioEvent::Ended { load_id } => Some(*load_id),
            AudioEvent::Failed(_) => None,
        }
    }
}

/// Step of the lyrics transition after the pane was hidden
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeStage {
    /// Swap in the new window while still hidden
    Reveal,
    /// Make the pane visible again
    FadeIn,
}

/// Everything that can happen to a session
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Load(Vec<Track>),
    Select(usize),
    Next,
    Previous,
    TogglePlayPause,
    LyricsUp,
    LyricsDown,
    LyricsLoaded { track: String, load_id: u64, text: Option<String> },
    SeekToRatio(f64),
    SeekBy(f64),
    SetVolume(f32),
    AdjustVolume(f32),
    Audio(AudioEvent),
    FadeDue { generation: u64, stage: FadeStage },
    Teardown,
}

/// Instructions for the renderer
#[derive(Clone, Debug, PartialEq)]
pub enum RenderCommand {
    Playlist { labels: Vec<TrackLabel>, active: Option<usize> },
    NowPlaying(Option<Track>),
    LyricsHidden,
    LyricsWindow(LyricsView),
    LyricsShown,
    PlaybackState { is_playing: bool },
    Time { current: String, duration: String, progress: f64 },
    VolumeIcon { level: VolumeLevel, ratio: f32 },
    Controls { enabled: bool },
    Status(String),
}

/// Side effects requested by a state transition
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Audio(AudioCommand),
    Render(RenderCommand),
    FetchLyrics { track: String, load_id: u64 },
    ScheduleFade { generation: u64, stage: FadeStage },
}
