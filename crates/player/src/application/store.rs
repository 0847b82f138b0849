//! Wizard state store
//!
//! `AppState` is an accumulating record mutated only through `AppAction`s.
//! Gates such as `can_proceed_to_story` are derived on every read; the
//! wizard's position is exposed as a `WizardPhase`.

use storybook_domain::{ChildProfile, CompleteStory, ThemeValue, WizardPhase};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub child_profile: Option<ChildProfile>,
    pub selected_theme: Option<ThemeValue>,
    pub current_story: Option<CompleteStory>,
    /// 0-based index into the current story's scenes
    pub current_scene: usize,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    SetChildProfile(ChildProfile),
    SetSelectedTheme(ThemeValue),
    SetCurrentStory(CompleteStory),
    SetCurrentScene(usize),
    SetLoading(bool),
    SetError(String),
    ClearError,
    ResetState,
}

impl AppState {
    /// Rebuild a state from a stored session
    pub fn hydrated(profile: Option<ChildProfile>, theme: Option<ThemeValue>) -> Self {
        let mut state = Self::default();
        if let Some(profile) = profile {
            state.apply(AppAction::SetChildProfile(profile));
        }
        if let Some(theme) = theme {
            state.apply(AppAction::SetSelectedTheme(theme));
        }
        state
    }

    /// Apply one action in place
    pub fn apply(&mut self, action: AppAction) {
        match action {
            AppAction::SetChildProfile(profile) => {
                tracing::info!("Child profile set for {}", profile.name);
                self.child_profile = Some(profile);
                self.error = None;
            }
            AppAction::SetSelectedTheme(theme) => {
                if !self.has_profile() {
                    tracing::warn!("Ignoring theme {} selected without a child profile", theme);
                    return;
                }
                tracing::info!("Theme selected: {}", theme);
                self.selected_theme = Some(theme);
                self.error = None;
            }
            AppAction::SetCurrentStory(story) => {
                tracing::info!(
                    "Story ready: {} ({} scenes)",
                    story.title(),
                    story.scene_count()
                );
                self.current_story = Some(story);
                self.current_scene = 0;
                self.is_loading = false;
                self.error = None;
            }
            AppAction::SetCurrentScene(scene) => {
                self.current_scene = scene;
            }
            AppAction::SetLoading(loading) => {
                self.is_loading = loading;
                if loading {
                    self.error = None;
                }
            }
            AppAction::SetError(message) => {
                self.error = Some(message);
                self.is_loading = false;
            }
            AppAction::ClearError => {
                self.error = None;
            }
            AppAction::ResetState => {
                tracing::info!("Wizard state reset");
                *self = Self::default();
            }
        }
    }

    /// Pure form of `apply`
    pub fn reduce(mut self, action: AppAction) -> Self {
        self.apply(action);
        self
    }

    pub fn has_profile(&self) -> bool {
        self.child_profile
            .as_ref()
            .is_some_and(|p| !p.name.as_str().trim().is_empty())
    }

    pub fn has_theme(&self) -> bool {
        self.selected_theme.is_some()
    }

    pub fn has_story(&self) -> bool {
        self.current_story.is_some()
    }

    pub fn can_proceed_to_theme(&self) -> bool {
        self.has_profile()
    }

    pub fn can_proceed_to_story(&self) -> bool {
        self.has_profile() && self.has_theme()
    }

    pub fn phase(&self) -> WizardPhase {
        let viewing = self.current_story.as_ref().map(|_| self.current_scene);
        WizardPhase::from_progress(self.has_profile(), self.has_theme(), viewing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storybook_domain::{Gender, ProfileDraft, ProfileField, StoryScene};

    fn draft(name: &str, age: u8, gender: Gender) -> ProfileDraft {
        ProfileDraft {
            name: name.to_string(),
            age: Some(age),
            gender: Some(gender),
            photo: None,
        }
    }

    fn story(scenes: u32) -> CompleteStory {
        let scenes = (1..=scenes)
            .map(|n| StoryScene {
                scene_number: n,
                content: format!("장면 {}", n),
                image_description: String::new(),
                image_url: None,
                audio_url: None,
                narration: String::new(),
            })
            .collect();
        CompleteStory::new("이야기", "교훈", scenes, None).unwrap()
    }

    fn with_profile() -> AppState {
        AppState::default().reduce(AppAction::SetChildProfile(
            draft("지우", 5, Gender::Boy).validate(false).unwrap(),
        ))
    }

    #[test]
    fn test_every_valid_profile_unlocks_theme() {
        for name in ["지", "지우", "0123456789", "  Mina  "] {
            for age in [3, 4, 5, 6, 7] {
                for gender in Gender::ALL {
                    let profile = draft(name, age, gender).validate(false).unwrap();
                    let state = AppState::default().reduce(AppAction::SetChildProfile(profile));
                    assert!(state.can_proceed_to_theme(), "{} {} {:?}", name, age, gender);
                    assert_eq!(state.phase(), WizardPhase::AwaitingTheme);
                }
            }
        }
    }

    #[test]
    fn test_blank_names_never_reach_the_store() {
        for name in ["", " ", "\t\n", "   　"] {
            let errors = draft(name, 5, Gender::Girl).validate(false).unwrap_err();
            assert!(errors.get(ProfileField::Name).is_some());
        }
        assert!(!AppState::default().has_profile());
    }

    #[test]
    fn test_set_current_story_resets_scene_every_time() {
        let mut state = with_profile().reduce(AppAction::SetSelectedTheme(ThemeValue::SafetyHabits));
        let story = story(3);

        state.apply(AppAction::SetCurrentStory(story.clone()));
        state.apply(AppAction::SetCurrentScene(2));
        state.apply(AppAction::SetCurrentStory(story.clone()));
        assert_eq!(state.current_scene, 0);

        state.apply(AppAction::SetCurrentScene(1));
        state.apply(AppAction::SetCurrentStory(story));
        assert_eq!(state.current_scene, 0);
        assert_eq!(state.phase(), WizardPhase::Viewing { scene: 0 });
    }

    #[test]
    fn test_set_current_story_clears_loading_and_error() {
        let state = with_profile()
            .reduce(AppAction::SetLoading(true))
            .reduce(AppAction::SetError("실패".into()))
            .reduce(AppAction::SetLoading(true))
            .reduce(AppAction::SetCurrentStory(story(1)));

        assert!(!state.is_loading);
        assert_eq!(state.error, None);
        assert!(state.has_story());
    }

    #[test]
    fn test_loading_and_error_interplay() {
        let state = AppState::default().reduce(AppAction::SetError("oops".into()));
        assert_eq!(state.error.as_deref(), Some("oops"));

        let stopped = state.clone().reduce(AppAction::SetLoading(false));
        assert_eq!(stopped.error.as_deref(), Some("oops"));

        let started = state.reduce(AppAction::SetLoading(true));
        assert!(started.is_loading);
        assert_eq!(started.error, None);

        let failed = started.reduce(AppAction::SetError("again".into()));
        assert!(!failed.is_loading);
        assert_eq!(
            failed.reduce(AppAction::ClearError).error,
            None
        );
    }

    #[test]
    fn test_theme_requires_profile() {
        let state = AppState::default().reduce(AppAction::SetSelectedTheme(ThemeValue::HealthyEating));
        assert!(!state.has_theme());
        assert_eq!(state.phase(), WizardPhase::AwaitingProfile);

        let state = with_profile().reduce(AppAction::SetSelectedTheme(ThemeValue::HealthyEating));
        assert!(state.can_proceed_to_story());
        assert_eq!(state.phase(), WizardPhase::AwaitingStory);
    }

    #[test]
    fn test_reset_returns_to_initial_state() {
        let state = with_profile()
            .reduce(AppAction::SetSelectedTheme(ThemeValue::EmotionalIntelligence))
            .reduce(AppAction::SetCurrentStory(story(2)))
            .reduce(AppAction::ResetState);

        assert_eq!(state, AppState::default());
    }

    #[test]
    fn test_hydrated_state_matches_dispatch_order() {
        let profile = draft("하린", 6, Gender::Girl).validate(false).unwrap();
        let state = AppState::hydrated(Some(profile.clone()), Some(ThemeValue::SafetyHabits));
        assert_eq!(state.child_profile, Some(profile));
        assert!(state.can_proceed_to_story());

        let orphan = AppState::hydrated(None, Some(ThemeValue::SafetyHabits));
        assert_eq!(orphan, AppState::default());
    }
}
