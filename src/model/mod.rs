//! Model module - Player state and data types
//!
//! This module holds the pure core of the player. Nothing here performs I/O:
//!
//! - `types`: Track, labels, lyrics window entries, volume levels
//! - `playlist`: Playlist controller (cursor, circular navigation, play/pause)
//! - `lyrics`: Lyrics window engine (tokenizing, clamped cursor, 3-line viewport)
//! - `playback`: Position/duration bookkeeping and time formatting
//! - `gesture`: Swipe classification
//! - `events`: Events in, effects out
//! - `session`: The owned session state and its event dispatcher
//! - `ui`: Renderer-side state
//! - `app_model`: Session plus UI state

mod types;
mod playlist;
mod lyrics;
mod playback;
mod gesture;
mod events;
mod session;
mod ui;
mod app_model;

pub use types::{LyricsView, Track, TrackLabel, VolumeLevel, WindowLine};

pub use playlist::{Playlist, PlaylistState};

pub use lyrics::{tokenize, LyricsEngine};

pub use playback::{clamp_volume, format_time, PlaybackStatus};

pub use gesture::{classify_swipe, Swipe};

pub use events::{AudioCommand, AudioEvent, Effect, Event, FadeStage, RenderCommand};

pub use session::{Session, DEFAULT_VOLUME};

pub use ui::{LyricsPane, UiState};

pub use app_model::AppModel;
