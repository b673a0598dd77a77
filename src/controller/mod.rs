//! Controller module - Event loop side of the player
//!
//! The controller owns the application model and the collaborators, turns input
//! into session events and carries out the effects each transition returns.
//! It is organized into submodules by responsibility:
//!
//! - `input`: Key and mouse handling
//! - `effects`: Carrying out audio, lyrics and fade effects
//! - `player_events`: Draining the application event channel

mod input;
mod effects;
mod player_events;

use tokio::sync::mpsc::UnboundedSender;

use crate::audio::AudioBackend;
use crate::config::Config;
use crate::model::{AppModel, Event, Track};
use crate::source::LyricsStore;
use crate::view::ViewAreas;

pub struct AppController {
    pub(crate) model: AppModel,
    pub(crate) audio: Option<AudioBackend>,
    pub(crate) lyrics: LyricsStore,
    pub(crate) events: UnboundedSender<Event>,
    pub(crate) config: Config,
    view_areas: ViewAreas,
    drag_start: Option<u16>,
}

impl AppController {
    pub fn new(
        model: AppModel,
        audio: Option<AudioBackend>,
        lyrics: LyricsStore,
        events: UnboundedSender<Event>,
        config: Config,
    ) -> Self {
        Self {
            model,
            audio,
            lyrics,
            events,
            config,
            view_areas: ViewAreas::default(),
            drag_start: None,
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Record where the last frame drew each pane, for mouse hit-testing.
    pub fn set_view_areas(&mut self, areas: ViewAreas) {
        self.view_areas = areas;
    }

    /// Bring the renderer up to date, load the playlist and cue the first track.
    pub fn start(&mut self, tracks: Vec<Track>) {
        // Sync the renderer and driver with the fresh session first
        let initial = self.model.session.initial_effects();
        self.perform_all(initial);

        let names: Vec<String> = tracks.iter().map(|t| t.name.clone()).collect();
        let is_empty = tracks.is_empty();
        self.dispatch(Event::Load(tracks));

        if is_empty {
            tracing::warn!("No tracks to play");
            self.model.ui.set_status("No tracks found. Add audio files to the playlist manifest.".to_string());
            return;
        }

        // Warm the lyrics cache in the background
        let store = self.lyrics.clone();
        tokio::spawn(async move {
            store.prefetch(names).await;
        });

        if self.model.session.playlist().current_index().is_none() {
            self.dispatch(Event::Select(0));
        }
    }

    /// Run one session transition and carry out its effects.
    pub fn dispatch(&mut self, event: Event) {
        tracing::trace!(?event, "Dispatching");
        let pending = self.model.dispatch(event);
        self.perform_all(pending);
    }

    pub fn tick(&mut self) {
        let lifetime = self.config.status_lifetime;
        self.model.auto_clear_old_status(lifetime);
    }

    /// Stop audio and clear the session before exit.
    pub fn shutdown(&mut self) {
        self.dispatch(Event::Teardown);
        // Dropping the backend joins the audio thread
        self.audio = None;
    }
}
