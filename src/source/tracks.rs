//! Static track list

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::Config;
use crate::error::TrackSourceError;
use crate::model::Track;

/// A manifest entry is either a bare audio file name or an explicit track
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum ManifestEntry {
    File(String),
    Track { name: String, url: String },
}

/// Tracks named on the command line win over the manifest.
pub fn list_tracks(config: &Config) -> Result<Vec<Track>, TrackSourceError> {
    if !config.tracks.is_empty() {
        return Ok(tracks_from_files(&config.music_dir, &config.tracks));
    }
    read_manifest(&config.manifest, &config.music_dir)
}

pub fn tracks_from_files(music_dir: &Path, files: &[String]) -> Vec<Track> {
    let base = music_dir.to_string_lossy();
    files
        .iter()
        .map(|file| Track::from_file_name(file, &base))
        .collect()
}

pub fn read_manifest(path: &Path, music_dir: &Path) -> Result<Vec<Track>, TrackSourceError> {
    let display = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|source| TrackSourceError::Io {
        path: display.clone(),
        source,
    })?;
    let entries: Vec<ManifestEntry> =
        serde_json::from_str(&content).map_err(|source| TrackSourceError::Parse {
            path: display,
            source,
        })?;

    let base = music_dir.to_string_lossy();
    let tracks: Vec<Track> = entries
        .into_iter()
        .map(|entry| match entry {
            ManifestEntry::File(file) => Track::from_file_name(&file, &base),
            ManifestEntry::Track { name, url } => Track::new(name, url),
        })
        .collect();

    tracing::debug!(manifest = %path.display(), tracks = tracks.len(), "Track manifest read");
    Ok(tracks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn file_names_become_tracks() {
        let tracks = tracks_from_files(
            &PathBuf::from("music"),
            &["track1_Intro.mp3".to_string(), "outro.ogg".to_string()],
        );
        assert_eq!(tracks[0], Track::new("track1_Intro", "music/track1_Intro.mp3"));
        assert_eq!(tracks[1], Track::new("outro.ogg", "music/outro.ogg"));
    }

    #[test]
    fn manifest_accepts_names_and_tracks() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = dir.path().join("playlist.json");
        fs::write(
            &manifest,
            r#"["track1_A.mp3", {"name": "B", "url": "/srv/b.flac"}]"#,
        )
        .unwrap();

        let tracks = read_manifest(&manifest, Path::new("music")).unwrap();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].name, "track1_A");
        assert_eq!(tracks[1], Track::new("B", "/srv/b.flac"));
    }

    #[test]
    fn missing_and_malformed_manifests_fail() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            read_manifest(&missing, dir.path()),
            Err(TrackSourceError::Io { .. })
        ));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{not json").unwrap();
        assert!(matches!(
            read_manifest(&broken, dir.path()),
            Err(TrackSourceError::Parse { .. })
        ));
    }
}
