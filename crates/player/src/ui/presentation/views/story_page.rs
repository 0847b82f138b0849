//! Story page - generation, then playback
//!
//! Every visit requests a fresh story for the stored profile and theme. Only
//! the newest request may write its outcome to the store; answers to
//! superseded requests are dropped. Until the newest request settles the page
//! shows the loading screen, even if the store still holds an older story.

use dioxus::prelude::*;
use storybook_shared::StoryRequest;

use crate::application::store::{AppAction, AppState};
use crate::presentation::services::use_story_service;
use crate::presentation::state::use_story_store;
use crate::presentation::views::story_error::StoryError;
use crate::presentation::views::story_loading::StoryLoading;
use crate::presentation::views::story_viewer::StoryViewer;
use crate::routes::Route;
use crate::use_platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StoryScreen {
    Loading,
    Error,
    Viewer,
}

fn screen_for(settled: bool, state: &AppState) -> StoryScreen {
    if !settled || state.is_loading {
        StoryScreen::Loading
    } else if state.error.is_some() {
        StoryScreen::Error
    } else if state.current_story.is_some() {
        StoryScreen::Viewer
    } else {
        StoryScreen::Loading
    }
}

#[component]
pub fn StoryPage() -> Element {
    let store = use_story_store();
    let story_service = use_story_service();
    let platform = use_platform();
    let navigator = use_navigator();

    let mut started_at = use_signal(|| platform.now_millis());
    // Bumped per applied story so the viewer restarts from a clean controller
    let mut generation = use_signal(|| 0u64);
    // False until the request started by this page has been applied
    let mut settled = use_signal(|| false);

    let clock = platform.clone();
    let generate = use_callback(move |_: ()| {
        let state = store.snapshot();
        let (Some(profile), Some(theme)) = (state.child_profile.as_ref(), state.selected_theme)
        else {
            tracing::warn!("Story requested without profile and theme");
            settled.set(true);
            return;
        };

        let request = StoryRequest::new(profile, theme);
        let service = story_service.clone();
        let token = service.begin_request();
        started_at.set(clock.now_millis());
        settled.set(false);
        store.dispatch(AppAction::SetLoading(true));

        spawn(async move {
            let response = service.generate_complete_story(&request).await;
            let Some(action) = service.settle(token, response) else {
                return;
            };
            if matches!(action, AppAction::SetCurrentStory(_)) {
                generation += 1;
            }
            store.dispatch(action);
            settled.set(true);
        });
    });

    use_effect(move || generate.call(()));

    let on_reload = move |_: ()| {
        if !platform.reload_page() {
            generate.call(());
        }
    };

    let on_back = move |_: ()| {
        store.dispatch(AppAction::ClearError);
        navigator.push(Route::ThemeRoute {});
    };

    let (screen, error, story) = store.read_with(|state| {
        (
            screen_for(*settled.read(), state),
            state.error.clone(),
            state.current_story.clone(),
        )
    });

    rsx! {
        match (screen, error, story) {
            (StoryScreen::Error, Some(message), _) => rsx! {
                StoryError {
                    message,
                    on_retry: move |_| generate.call(()),
                    on_reload,
                    on_back,
                }
            },
            (StoryScreen::Viewer, _, Some(story)) => rsx! {
                StoryViewer { key: "{generation}", story }
            },
            _ => rsx! {
                StoryLoading { started_at: *started_at.read() }
            },
        }
    }
}
