//! Draining the application event channel
//!
//! Audio thread notifications, finished lyrics lookups and due fade steps all
//! arrive here and are dispatched one at a time on the event loop.

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::error::TryRecvError;

use crate::model::{AudioEvent, Event};

use super::AppController;

impl AppController {
    /// Dispatch every event already queued.
    pub fn drain_events(&mut self, events: &mut UnboundedReceiver<Event>) {
        loop {
            match events.try_recv() {
                Ok(event) => {
                    log_event(&event);
                    self.dispatch(event);
                }
                Err(TryRecvError::Empty) => return,
                // The controller holds a sender, so this only happens while tearing down
                Err(TryRecvError::Disconnected) => {
                    tracing::debug!("Event channel closed");
                    return;
                }
            }
        }
    }
}

fn log_event(event: &Event) {
    match event {
        // Position updates arrive four times a second, keep them out of debug logs
        Event::Audio(AudioEvent::PositionChanged { load_id, seconds }) => {
            tracing::trace!(load_id, seconds, "AudioEvent::PositionChanged");
        }
        Event::Audio(AudioEvent::MetadataLoaded { load_id, duration }) => {
            tracing::debug!(load_id, duration, "AudioEvent::MetadataLoaded");
        }
        Event::Audio(AudioEvent::Ended { load_id }) => {
            tracing::debug!(load_id, "AudioEvent::Ended");
        }
        Event::Audio(AudioEvent::Failed(message)) => {
            tracing::debug!(message = %message, "AudioEvent::Failed");
        }
        Event::LyricsLoaded { track, load_id, text } => {
            tracing::debug!(track = %track, load_id, found = text.is_some(), "Lyrics lookup finished");
        }
        _ => tracing::trace!(?event, "Queued event"),
    }
}
