//! Collaborator error types

use thiserror::Error;

/// Failure to obtain lyrics for a track. The player treats both kinds the
/// same way and falls back to the "no lyrics" state.
#[derive(Error, Debug)]
pub enum LyricsError {
    #[error("No lyrics file for {0}")]
    NotFound(String),
    #[error("Lyrics for {name} unavailable: {source}")]
    Unavailable {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

impl LyricsError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LyricsError::NotFound(_))
    }
}

/// Failure to read the static track list
#[derive(Error, Debug)]
pub enum TrackSourceError {
    #[error("Cannot read track manifest {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid track manifest {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
