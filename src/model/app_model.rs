//! Main application model: the player session plus what the view shows

use std::time::Duration;

use super::events::{Effect, Event, RenderCommand};
use super::session::Session;
use super::ui::UiState;

/// Main application model containing all state
pub struct AppModel {
    pub session: Session,
    pub ui: UiState,
    should_quit: bool,
}

impl AppModel {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            ui: UiState::default(),
            should_quit: false,
        }
    }

    /// Run one transition and fold its render commands into the UI state.
    /// Everything that is not a render instruction is handed back.
    pub fn dispatch(&mut self, event: Event) -> Vec<Effect> {
        let effects = self.session.handle(event);
        self.absorb(effects)
    }

    pub fn absorb(&mut self, effects: Vec<Effect>) -> Vec<Effect> {
        let mut pending = Vec::new();
        for effect in effects {
            match effect {
                Effect::Render(command) => self.render(command),
                other => pending.push(other),
            }
        }
        pending
    }

    pub fn render(&mut self, command: RenderCommand) {
        self.ui.apply(command);
    }

    pub fn get_ui_state(&self) -> &UiState {
        &self.ui
    }

    pub fn auto_clear_old_status(&mut self, max_age: Duration) {
        self.ui.auto_clear_status(max_age);
    }

    pub fn has_status(&self) -> bool {
        self.ui.status_message.is_some()
    }

    pub fn clear_status(&mut self) {
        self.ui.clear_status();
    }

    pub fn toggle_help_popup(&mut self) {
        self.ui.show_help_popup = !self.ui.show_help_popup;
    }

    pub fn is_help_popup_open(&self) -> bool {
        self.ui.show_help_popup
    }

    pub fn hide_help_popup(&mut self) {
        self.ui.show_help_popup = false;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_should_quit(&mut self, quit: bool) {
        self.should_quit = quit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::Track;

    #[test]
    fn dispatch_keeps_non_render_effects() {
        let mut model = AppModel::new(Session::default());
        model.dispatch(Event::Load(vec![Track::new("a", "music/a.mp3")]));
        let pending = model.dispatch(Event::Select(0));

        assert!(pending.iter().all(|e| !matches!(e, Effect::Render(_))));
        assert!(pending.contains(&Effect::FetchLyrics {
            track: "a".into(),
            load_id: model.session.load_id(),
        }));
        assert_eq!(model.ui.active_track, Some(0));
        assert_eq!(model.ui.now_playing.as_ref().map(|t| t.name.as_str()), Some("a"));
        assert!(model.ui.controls_enabled);
    }
}
