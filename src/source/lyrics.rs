//! File-backed lyrics lookup with an in-memory cache
//!
//! Lyrics for a track named `X` live next to the audio in `<music_dir>/X.txt`.
//! Successful reads are cached by track name; failures are not, so a file
//! dropped into the folder later is picked up on the next selection.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::LyricsError;

#[derive(Clone)]
pub struct LyricsStore {
    music_dir: PathBuf,
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl LyricsStore {
    pub fn new(music_dir: impl Into<PathBuf>) -> Self {
        Self {
            music_dir: music_dir.into(),
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn path_for(&self, track_name: &str) -> PathBuf {
        self.music_dir.join(format!("{track_name}.txt"))
    }

    pub async fn fetch(&self, track_name: &str) -> Result<String, LyricsError> {
        if let Some(text) = self.cached(track_name).await {
            return Ok(text);
        }

        let path = self.path_for(track_name);
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => {
                tracing::debug!(track = track_name, bytes = text.len(), "Lyrics file read");
                self.insert(track_name.to_string(), text.clone()).await;
                Ok(text)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(LyricsError::NotFound(track_name.to_string()))
            }
            Err(source) => Err(LyricsError::Unavailable {
                name: track_name.to_string(),
                source,
            }),
        }
    }

    /// Warm the cache for every track. Failures are ignored.
    pub async fn prefetch<I>(&self, track_names: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut found = 0usize;
        for name in track_names {
            if self.fetch(&name).await.is_ok() {
                found += 1;
            }
        }
        tracing::info!(found, "Lyrics prefetch finished");
    }

    pub async fn cached(&self, track_name: &str) -> Option<String> {
        self.cache.read().await.get(track_name).cloned()
    }

    pub async fn insert(&self, track_name: String, text: String) {
        self.cache.write().await.insert(track_name, text);
    }

    pub async fn is_cached(&self, track_name: &str) -> bool {
        self.cache.read().await.contains_key(track_name)
    }
}
