//! Wizard store bound to Dioxus signals

use dioxus::prelude::*;

use crate::application::store::{AppAction, AppState};

/// Shared handle to the wizard state.
///
/// Cheap to copy; all copies see the same signal. Every write goes through
/// `dispatch`.
#[derive(Clone, Copy, PartialEq)]
pub struct StoryStore {
    state: Signal<AppState>,
}

impl StoryStore {
    /// Must be called inside the Dioxus runtime (e.g. `use_context_provider`)
    pub fn new(initial: AppState) -> Self {
        Self {
            state: Signal::new(initial),
        }
    }

    /// Read the state, subscribing the current scope to changes
    pub fn read_with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.state.read())
    }

    /// Clone of the current state without subscribing
    pub fn snapshot(&self) -> AppState {
        self.state.peek().clone()
    }

    pub fn dispatch(&self, action: AppAction) {
        tracing::debug!("dispatch {:?}", action_name(&action));
        let mut state = self.state;
        state.write().apply(action);
    }
}

fn action_name(action: &AppAction) -> &'static str {
    match action {
        AppAction::SetChildProfile(_) => "SET_CHILD_PROFILE",
        AppAction::SetSelectedTheme(_) => "SET_SELECTED_THEME",
        AppAction::SetCurrentStory(_) => "SET_CURRENT_STORY",
        AppAction::SetCurrentScene(_) => "SET_CURRENT_SCENE",
        AppAction::SetLoading(_) => "SET_LOADING",
        AppAction::SetError(_) => "SET_ERROR",
        AppAction::ClearError => "CLEAR_ERROR",
        AppAction::ResetState => "RESET_STATE",
    }
}

/// Hook to access the wizard store from context
pub fn use_story_store() -> StoryStore {
    use_context::<StoryStore>()
}
