//! Whole-wizard flows driven through the services, the store and the
//! playback controller, with the backend mocked at the `RawApiPort` seam.

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use storybook_domain::{Gender, ProfileDraft, ThemeValue, WizardPhase};
use storybook_shared::StoryRequest;

use crate::application::api::Api;
use crate::application::playback::{PlaybackController, PlaybackEffect};
use crate::application::services::{SessionRepository, StoryService};
use crate::application::store::{AppAction, AppState};
use crate::infrastructure::platform::mock::MockStorageProvider;
use crate::ports::outbound::api_port::SERVICE_UNAVAILABLE_MESSAGE;
use crate::ports::outbound::{ApiError, MockRawApiPort};

fn submit_profile_and_theme(state: &mut AppState, repository: &SessionRepository<MockStorageProvider>) {
    let profile = ProfileDraft {
        name: "지우".to_string(),
        age: Some(5),
        gender: Some(Gender::Boy),
        photo: Some(String::new()),
    }
    .validate(false)
    .unwrap();
    repository.save_profile(&profile);
    state.apply(AppAction::SetChildProfile(profile));
    assert!(state.can_proceed_to_theme());

    repository.save_theme(ThemeValue::FriendshipSkills);
    state.apply(AppAction::SetSelectedTheme(ThemeValue::FriendshipSkills));
    assert!(state.can_proceed_to_story());
}

fn story_request(state: &AppState) -> StoryRequest {
    let profile = state.child_profile.as_ref().unwrap();
    StoryRequest::new(profile, state.selected_theme.unwrap())
}

/// Applies controller effects to the store the way the story page does
fn mirror(state: &mut AppState, effects: &[PlaybackEffect]) {
    for effect in effects {
        if let PlaybackEffect::SceneChanged(scene) = effect {
            state.apply(AppAction::SetCurrentScene(*scene));
        }
    }
}

fn scene_label(state: &AppState) -> String {
    let total = state.current_story.as_ref().map_or(0, |s| s.scene_count());
    format!("{} / {}", state.current_scene + 1, total)
}

#[tokio::test]
async fn test_two_scene_story_navigated_with_arrow_keys() {
    let mut mock = MockRawApiPort::new();
    mock.expect_post_json()
        .withf(|path, body| {
            path == "/generate_complete_story"
                && *body
                    == json!({
                        "child_profile": { "name": "지우", "age": 5, "gender": "boy", "photo": "" },
                        "theme": "friendship_skills"
                    })
        })
        .times(1)
        .returning(|_, _| {
            Ok(json!({
                "story": {
                    "title": "지우와 새 친구",
                    "moral": "먼저 다가가면 친구가 생겨요",
                    "scenes": [
                        { "scene_number": 1, "content": "지우는 놀이터에 갔어요." },
                        { "scene_number": 2, "content": "지우가 먼저 인사했어요." }
                    ]
                },
                "character_image_url": null
            }))
        });
    let service = StoryService::new(Api::new(Arc::new(mock)));
    let storage = MockStorageProvider::new();
    let repository = SessionRepository::new(storage.clone());
    let mut state = AppState::default();

    submit_profile_and_theme(&mut state, &repository);

    let token = service.begin_request();
    state.apply(AppAction::SetLoading(true));
    let response = service.generate_complete_story(&story_request(&state)).await;
    assert!(service.is_current(token));
    state.apply(AppAction::SetCurrentStory(response.data.unwrap()));

    assert_eq!(state.phase(), WizardPhase::Viewing { scene: 0 });
    assert_eq!(scene_label(&state), "1 / 2");

    let story = state.current_story.clone().unwrap();
    let mut controller = PlaybackController::new(&story, state.current_scene, 1_500);

    let outcome = controller.handle_key("ArrowRight");
    mirror(&mut state, &outcome.effects);
    assert_eq!(scene_label(&state), "2 / 2");

    let outcome = controller.handle_key("ArrowRight");
    assert!(outcome.effects.is_empty());
    mirror(&mut state, &outcome.effects);
    assert_eq!(scene_label(&state), "2 / 2");

    // The session survives a reload
    let reloaded = SessionRepository::new(storage).load();
    assert_eq!(reloaded.profile, state.child_profile);
    assert_eq!(reloaded.theme, Some(ThemeValue::FriendshipSkills));
}

#[tokio::test]
async fn test_service_unavailable_then_retry_sends_same_request() {
    let bodies: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
    let recorded = bodies.clone();

    let mut mock = MockRawApiPort::new();
    mock.expect_post_json()
        .times(2)
        .returning(move |_, body| {
            recorded.lock().unwrap().push(body.clone());
            Err(ApiError::Status {
                status: 503,
                message: "Service Unavailable".into(),
            })
        });
    let service = StoryService::new(Api::new(Arc::new(mock)));
    let repository = SessionRepository::new(MockStorageProvider::new());
    let mut state = AppState::default();
    submit_profile_and_theme(&mut state, &repository);

    for _attempt in 0..2 {
        state.apply(AppAction::SetLoading(true));
        let response = service.generate_complete_story(&story_request(&state)).await;
        state.apply(AppAction::SetError(response.error.unwrap()));

        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some(SERVICE_UNAVAILABLE_MESSAGE));
        assert_eq!(state.phase(), WizardPhase::AwaitingStory);
    }

    let bodies = bodies.lock().unwrap();
    assert_eq!(bodies.len(), 2);
    assert_eq!(bodies[0], bodies[1]);
}

#[tokio::test]
async fn test_older_response_arriving_last_keeps_newer_story() {
    let mut mock = MockRawApiPort::new();
    mock.expect_post_json().times(2).returning(|_, body| {
        let title = match body["theme"].as_str() {
            Some("friendship_skills") => "친구 이야기",
            _ => "안전 이야기",
        };
        Ok(json!({
            "story": { "title": title, "scenes": [ { "scene_number": 1, "content": "c" } ] }
        }))
    });
    let service = StoryService::new(Api::new(Arc::new(mock)));
    let repository = SessionRepository::new(MockStorageProvider::new());
    let mut state = AppState::default();
    submit_profile_and_theme(&mut state, &repository);

    // First attempt goes out, then the theme changes and a second one starts
    let older_request = story_request(&state);
    let older_token = service.begin_request();
    state.apply(AppAction::SetLoading(true));
    let older = service.generate_complete_story(&older_request);

    state.apply(AppAction::SetSelectedTheme(ThemeValue::SafetyHabits));
    let newer_request = story_request(&state);
    let newer_token = service.begin_request();
    state.apply(AppAction::SetLoading(true));
    let newer = service.generate_complete_story(&newer_request);

    // The newer attempt answers first
    let action = service.settle(newer_token, newer.await).unwrap();
    state.apply(action);
    assert_eq!(state.current_story.as_ref().unwrap().title(), "안전 이야기");
    assert!(!state.is_loading);

    // The older answer comes in late and changes nothing
    assert_eq!(service.settle(older_token, older.await), None);
    assert_eq!(state.current_story.as_ref().unwrap().title(), "안전 이야기");
    assert_eq!(state.phase(), WizardPhase::Viewing { scene: 0 });
}
