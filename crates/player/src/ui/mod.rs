use crate::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use std::sync::Arc;

pub mod presentation;
pub mod routes;

pub use routes::Route;

use crate::application::store::AppState;
use presentation::services::use_services;
use presentation::state::StoryStore;

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/main.rs`).
    let services = use_services();

    // The store is hydrated from storage exactly once, here.
    let session = services.session.clone();
    use_context_provider(move || {
        let stored = session.load();
        let state = AppState::hydrated(stored.profile, stored.theme);
        let phase = state.phase();
        tracing::info!("Session resumed at {:?} (step {})", phase, phase.step());
        StoryStore::new(state)
    });

    let story_service = services.story.clone();
    use_hook(move || {
        spawn(async move {
            if !story_service.health_check().await {
                tracing::warn!("Story backend is not reachable; generation will fail until it is");
            }
        });
    });

    rsx! {
        div {
            class: "min-h-screen w-full bg-amber-50 text-slate-800",
            Router::<routes::Route> {}
        }
    }
}
