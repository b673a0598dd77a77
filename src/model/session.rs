//! Player session: the single owned state object of a running player
//!
//! Every external event goes through [`Session::handle`], which performs one
//! synchronous state transition and returns the effects the adapters must carry
//! out (audio commands, render instructions, lyrics fetches, delayed fade steps).

use super::events::{AudioCommand, AudioEvent, Effect, Event, FadeStage, RenderCommand};
use super::lyrics::LyricsEngine;
use super::playback::{clamp_volume, PlaybackStatus};
use super::playlist::{Playlist, PlaylistState};
use super::types::{LyricsView, Track, VolumeLevel};

pub const DEFAULT_VOLUME: f32 = 0.7;

#[derive(Debug)]
pub struct Session {
    playlist: Playlist,
    lyrics: LyricsEngine,
    status: PlaybackStatus,
    volume: f32,
    /// Bumped on every lyrics cursor or document change; pending fade steps
    /// carrying an older value are dropped.
    generation: u64,
    /// Bumped on every track change; audio events and lyrics lookups for an
    /// older load are dropped.
    load_id: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::create(DEFAULT_VOLUME)
    }
}

impl Session {
    pub fn create(volume: f32) -> Self {
        Self {
            playlist: Playlist::new(),
            lyrics: LyricsEngine::new(),
            status: PlaybackStatus::default(),
            volume: clamp_volume(volume),
            generation: 0,
            load_id: 0,
        }
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn lyrics(&self) -> &LyricsEngine {
        &self.lyrics
    }

    pub fn status(&self) -> &PlaybackStatus {
        &self.status
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn load_id(&self) -> u64 {
        self.load_id
    }

    pub fn state(&self) -> PlaylistState {
        self.playlist.state()
    }

    /// Effects that bring a fresh renderer and driver in line with this session.
    pub fn initial_effects(&self) -> Vec<Effect> {
        let mut effects = vec![
            Effect::Audio(AudioCommand::SetVolume(self.volume)),
            self.volume_icon(),
            Effect::Render(RenderCommand::Controls {
                enabled: !self.playlist.is_empty(),
            }),
            self.playlist_render(),
            Effect::Render(RenderCommand::NowPlaying(self.playlist.current_track().cloned())),
            self.playback_render(),
            self.time_render(),
        ];
        effects.push(Effect::Render(RenderCommand::LyricsWindow(self.lyrics_view())));
        effects.push(Effect::Render(RenderCommand::LyricsShown));
        effects
    }

    /// Replace the track list. Nothing is selected until a `Select` follows.
    pub fn load(&mut self, tracks: Vec<Track>) -> Vec<Effect> {
        tracing::info!(tracks = tracks.len(), "Loading playlist");
        let was_playing = self.playlist.is_playing();
        self.playlist.load(tracks);
        self.lyrics.clear();
        self.status.reset();
        self.generation += 1;
        self.load_id += 1;

        let mut effects = Vec::new();
        if was_playing {
            effects.push(Effect::Audio(AudioCommand::Pause));
        }
        effects.extend([
            Effect::Render(RenderCommand::Controls {
                enabled: !self.playlist.is_empty(),
            }),
            self.playlist_render(),
            Effect::Render(RenderCommand::NowPlaying(None)),
            self.playback_render(),
            self.time_render(),
            Effect::Render(RenderCommand::LyricsWindow(LyricsView::default())),
        ]);
        effects
    }

    /// Drop the playlist and lyrics and stop audio.
    pub fn teardown(&mut self) -> Vec<Effect> {
        tracing::info!("Tearing down session");
        let mut effects = self.load(Vec::new());
        effects.insert(0, Effect::Audio(AudioCommand::Pause));
        effects.dedup();
        effects
    }

    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Load(tracks) => self.load(tracks),
            Event::Teardown => self.teardown(),
            Event::Select(index) => self.select(index),
            Event::Next => {
                let changed = self.playlist.next().is_some();
                self.after_track_move(changed)
            }
            Event::Previous => {
                let changed = self.playlist.previous().is_some();
                self.after_track_move(changed)
            }
            Event::TogglePlayPause => self.toggle_play_pause(),
            Event::LyricsUp => {
                let moved = self.lyrics.move_up();
                self.after_cursor_move(moved)
            }
            Event::LyricsDown => {
                let moved = self.lyrics.move_down();
                self.after_cursor_move(moved)
            }
            Event::LyricsLoaded { track, load_id, text } => {
                self.lyrics_loaded(&track, load_id, text.as_deref())
            }
            Event::SeekToRatio(ratio) => self.seek(self.status.seek_target(ratio)),
            Event::SeekBy(delta) => self.seek(self.status.seek_offset(delta)),
            Event::SetVolume(ratio) => self.set_volume(ratio),
            Event::AdjustVolume(delta) => self.set_volume(self.volume + delta),
            Event::Audio(audio) => self.audio_event(audio),
            Event::FadeDue { generation, stage } => self.fade_due(generation, stage),
        }
    }

    // ========================================================================
    // Playlist transitions
    // ========================================================================

    fn select(&mut self, index: usize) -> Vec<Effect> {
        if self.playlist.select(index).is_none() {
            tracing::debug!(index, len = self.playlist.len(), "Ignoring out-of-range selection");
            return Vec::new();
        }
        self.track_changed()
    }

    fn after_track_move(&mut self, changed: bool) -> Vec<Effect> {
        if changed {
            self.track_changed()
        } else {
            Vec::new()
        }
    }

    fn track_changed(&mut self) -> Vec<Effect> {
        let Some(track) = self.playlist.current_track().cloned() else {
            return Vec::new();
        };
        let is_playing = self.playlist.is_playing();
        tracing::info!(
            track = %track.name,
            index = ?self.playlist.current_index(),
            is_playing,
            "Track changed"
        );

        self.status.reset();
        self.lyrics.clear();
        self.generation += 1;
        self.load_id += 1;

        let mut effects = vec![Effect::Audio(AudioCommand::Load {
            load_id: self.load_id,
            url: track.url.clone(),
        })];
        if is_playing {
            effects.push(Effect::Audio(AudioCommand::Play));
        }
        effects.extend([
            self.playlist_render(),
            Effect::Render(RenderCommand::NowPlaying(Some(track.clone()))),
            self.playback_render(),
            self.time_render(),
            Effect::Render(RenderCommand::LyricsHidden),
            Effect::FetchLyrics {
                track: track.name,
                load_id: self.load_id,
            },
        ]);
        effects
    }

    fn toggle_play_pause(&mut self) -> Vec<Effect> {
        match self.playlist.toggle_play_pause() {
            Some(is_playing) => {
                tracing::debug!(is_playing, "Playback toggled");
                let command = if is_playing {
                    AudioCommand::Play
                } else {
                    AudioCommand::Pause
                };
                vec![Effect::Audio(command), self.playback_render()]
            }
            None => {
                tracing::debug!("Toggle ignored: no track loaded");
                Vec::new()
            }
        }
    }

    // ========================================================================
    // Lyrics transitions
    // ========================================================================

    fn lyrics_loaded(&mut self, track: &str, load_id: u64, text: Option<&str>) -> Vec<Effect> {
        // A reselected track gets a new load id, so an earlier lookup for the
        // same name cannot reset the cursor
        let is_current = load_id == self.load_id
            && self
                .playlist
                .current_track()
                .is_some_and(|current| current.name == track);
        if !is_current {
            tracing::debug!(track, load_id, "Discarding lyrics for a load that is no longer current");
            return Vec::new();
        }

        self.lyrics.set_document(text);
        self.generation += 1;

        if self.lyrics.is_available() {
            tracing::debug!(track, lines = self.lyrics.lines().len(), "Lyrics ready");
            self.schedule_reveal()
        } else {
            tracing::debug!(track, "No lyrics available");
            vec![
                Effect::Render(RenderCommand::LyricsWindow(LyricsView::Unavailable)),
                Effect::Render(RenderCommand::LyricsShown),
            ]
        }
    }

    fn after_cursor_move(&mut self, moved: bool) -> Vec<Effect> {
        if !moved {
            return Vec::new();
        }
        self.generation += 1;
        self.schedule_reveal()
    }

    fn schedule_reveal(&self) -> Vec<Effect> {
        vec![
            Effect::Render(RenderCommand::LyricsHidden),
            Effect::ScheduleFade {
                generation: self.generation,
                stage: FadeStage::Reveal,
            },
        ]
    }

    fn fade_due(&mut self, generation: u64, stage: FadeStage) -> Vec<Effect> {
        if generation != self.generation {
            tracing::trace!(generation, current = self.generation, "Dropping stale fade step");
            return Vec::new();
        }
        match stage {
            FadeStage::Reveal => vec![
                Effect::Render(RenderCommand::LyricsWindow(self.lyrics_view())),
                Effect::ScheduleFade {
                    generation,
                    stage: FadeStage::FadeIn,
                },
            ],
            FadeStage::FadeIn => vec![Effect::Render(RenderCommand::LyricsShown)],
        }
    }

    fn lyrics_view(&self) -> LyricsView {
        LyricsView::Lines(self.lyrics.current_window())
    }

    // ========================================================================
    // Audio driver feedback, seeking and volume
    // ========================================================================

    fn audio_event(&mut self, event: AudioEvent) -> Vec<Effect> {
        if event.load_id().is_some_and(|id| id != self.load_id) {
            tracing::trace!(?event, current = self.load_id, "Dropping audio event for an old load");
            return Vec::new();
        }
        match event {
            AudioEvent::PositionChanged { seconds, .. } => {
                self.status.position_secs = seconds;
                vec![self.time_render()]
            }
            AudioEvent::MetadataLoaded { duration, .. } => {
                tracing::debug!(duration, "Track metadata loaded");
                self.status.duration_secs = duration;
                vec![self.time_render()]
            }
            AudioEvent::Ended { .. } => {
                tracing::debug!("Track ended, advancing");
                if self.playlist.advance_on_end().is_some() {
                    self.track_changed()
                } else {
                    Vec::new()
                }
            }
            AudioEvent::Failed(message) => {
                tracing::warn!(error = %message, "Audio driver reported a failure");
                vec![Effect::Render(RenderCommand::Status(message))]
            }
        }
    }

    fn seek(&mut self, target: Option<f64>) -> Vec<Effect> {
        let Some(seconds) = target else {
            return Vec::new();
        };
        if self.playlist.current_index().is_none() {
            return Vec::new();
        }
        self.status.position_secs = seconds;
        vec![Effect::Audio(AudioCommand::Seek(seconds)), self.time_render()]
    }

    fn set_volume(&mut self, ratio: f32) -> Vec<Effect> {
        // Rounded to whole percents so repeated steps land on exact values
        self.volume = (clamp_volume(ratio) * 100.0).round() / 100.0;
        vec![
            Effect::Audio(AudioCommand::SetVolume(self.volume)),
            self.volume_icon(),
        ]
    }

    // ========================================================================
    // Render helpers
    // ========================================================================

    fn playlist_render(&self) -> Effect {
        Effect::Render(RenderCommand::Playlist {
            labels: self.playlist.labels(),
            active: self.playlist.current_index(),
        })
    }

    fn playback_render(&self) -> Effect {
        Effect::Render(RenderCommand::PlaybackState {
            is_playing: self.playlist.is_playing(),
        })
    }

    fn time_render(&self) -> Effect {
        let (current, duration) = self.status.formatted();
        Effect::Render(RenderCommand::Time {
            current,
            duration,
            progress: self.status.progress(),
        })
    }

    fn volume_icon(&self) -> Effect {
        Effect::Render(RenderCommand::VolumeIcon {
            level: VolumeLevel::from_ratio(self.volume),
            ratio: self.volume,
        })
    }
}
