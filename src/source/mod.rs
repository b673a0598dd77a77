//! External collaborators feeding the player core
//!
//! - `tracks`: the static track list read at startup
//! - `lyrics`: file-backed lyrics lookup with an in-memory cache

mod tracks;
mod lyrics;

pub use tracks::{list_tracks, read_manifest, tracks_from_files};

pub use lyrics::LyricsStore;
