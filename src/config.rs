//! Command line options and runtime settings

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::model::{clamp_volume, FadeStage, DEFAULT_VOLUME};

pub const MANIFEST_FILE: &str = "playlist.json";

#[derive(Parser, Debug)]
#[command(name = "vinyl-player")]
#[command(about = "Terminal audio player with a manually navigated lyrics window", long_about = None)]
pub struct Cli {
    /// Folder holding the audio files and their `.txt` lyrics
    #[arg(short = 'm', long, default_value = "music")]
    pub music_dir: PathBuf,

    /// JSON array of audio file names (default: <music-dir>/playlist.json)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Audio file names inside the music folder; overrides the manifest
    pub tracks: Vec<String>,

    /// Initial volume between 0 and 1
    #[arg(long, default_value_t = DEFAULT_VOLUME)]
    pub volume: f32,

    /// Rows a mouse drag must cover to count as a lyrics swipe
    #[arg(long, default_value_t = 1)]
    pub swipe_rows: u16,

    /// Directory for the rolling log files
    #[arg(long, default_value = ".logs")]
    pub log_dir: PathBuf,
}

/// Resolved runtime settings
#[derive(Clone, Debug)]
pub struct Config {
    pub music_dir: PathBuf,
    pub manifest: PathBuf,
    pub tracks: Vec<String>,
    pub volume: f32,
    pub swipe_rows: u16,
    pub log_dir: PathBuf,
    /// Pause between hiding the lyrics and swapping in the new window
    pub reveal_delay: Duration,
    /// Pause between swapping the window and showing it again
    pub fade_in_delay: Duration,
    pub seek_step_secs: f64,
    pub volume_step: f32,
    pub status_lifetime: Duration,
    pub input_poll: Duration,
}

impl Default for Config {
    fn default() -> Self {
        let music_dir = PathBuf::from("music");
        Self {
            manifest: music_dir.join(MANIFEST_FILE),
            music_dir,
            tracks: Vec::new(),
            volume: DEFAULT_VOLUME,
            swipe_rows: 1,
            log_dir: PathBuf::from(".logs"),
            reveal_delay: Duration::from_millis(150),
            fade_in_delay: Duration::from_millis(10),
            seek_step_secs: 5.0,
            volume_step: 0.05,
            status_lifetime: Duration::from_secs(5),
            input_poll: Duration::from_millis(50),
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let manifest = cli
            .manifest
            .unwrap_or_else(|| cli.music_dir.join(MANIFEST_FILE));
        Self {
            music_dir: cli.music_dir,
            manifest,
            tracks: cli.tracks,
            volume: clamp_volume(cli.volume),
            swipe_rows: cli.swipe_rows,
            log_dir: cli.log_dir,
            ..Self::default()
        }
    }
}

impl Config {
    pub fn fade_delay(&self, stage: FadeStage) -> Duration {
        match stage {
            FadeStage::Reveal => self.reveal_delay,
            FadeStage::FadeIn => self.fade_in_delay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_defaults_to_music_dir() {
        let cli = Cli::parse_from(["vinyl-player", "--music-dir", "songs", "--volume", "3"]);
        let config = Config::from(cli);
        assert_eq!(config.manifest, PathBuf::from("songs").join(MANIFEST_FILE));
        assert_eq!(config.volume, 1.0);
        assert!(config.tracks.is_empty());
    }

    #[test]
    fn positional_tracks_are_kept() {
        let cli = Cli::parse_from(["vinyl-player", "a.mp3", "b.mp3"]);
        let config = Config::from(cli);
        assert_eq!(config.tracks, vec!["a.mp3", "b.mp3"]);
        assert_eq!(config.fade_delay(FadeStage::Reveal), Duration::from_millis(150));
    }
}
