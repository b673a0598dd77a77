//! Carrying out the effects returned by session transitions

use crate::model::{Effect, Event, FadeStage};

use super::AppController;

impl AppController {
    pub(crate) fn perform_all(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            self.perform(effect);
        }
    }

    fn perform(&mut self, effect: Effect) {
        match effect {
            Effect::Render(command) => self.model.render(command),
            Effect::Audio(command) => match &self.audio {
                Some(backend) => backend.send(command),
                None => tracing::trace!(?command, "No audio output, command skipped"),
            },
            Effect::FetchLyrics { track, load_id } => self.fetch_lyrics(track, load_id),
            Effect::ScheduleFade { generation, stage } => self.schedule_fade(generation, stage),
        }
    }

    /// Look the lyrics up off the event loop and post the result back.
    /// Any failure degrades to "no lyrics".
    fn fetch_lyrics(&self, track: String, load_id: u64) {
        let store = self.lyrics.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            // Not found is the common case for instrumentals
            let text = match store.fetch(&track).await {
                Ok(text) => Some(text),
                Err(e) if e.is_not_found() => {
                    tracing::debug!(error = %e, "Lyrics not found");
                    None
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Lyrics unavailable");
                    None
                }
            };
            // The receiver is gone only during shutdown
            let _ = events.send(Event::LyricsLoaded { track, load_id, text });
        });
    }

    /// The session drops the step if another transition started meanwhile.
    fn schedule_fade(&self, generation: u64, stage: FadeStage) {
        let delay = self.config.fade_delay(stage);
        let events = self.events.clone();
        tokio::spawn(async move {
            // Stale steps are filtered by generation on arrival, not cancelled here
            tokio::time::sleep(delay).await;
            let _ = events.send(Event::FadeDue { generation, stage });
        });
    }
}
