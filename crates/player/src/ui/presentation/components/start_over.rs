//! Start the wizard from scratch

use dioxus::prelude::*;

use crate::application::store::AppAction;
use crate::presentation::services::{use_audio, use_session_repository};
use crate::presentation::state::use_story_store;
use crate::routes::Route;

/// Returns a callback that forgets the whole session and goes to the first step
pub fn use_start_over() -> Callback<()> {
    let store = use_story_store();
    let session = use_session_repository();
    let audio = use_audio();
    let navigator = use_navigator();

    use_callback(move |_: ()| {
        tracing::info!("Starting over");
        audio.stop();
        store.dispatch(AppAction::ResetState);
        session.clear();
        navigator.push(Route::ProfileRoute {});
    })
}

#[component]
pub fn StartOverButton(#[props(default = "처음부터 다시 만들기".to_string())] label: String) -> Element {
    let start_over = use_start_over();

    rsx! {
        button {
            class: "rounded-xl border border-amber-400 px-4 py-2 text-amber-700 hover:bg-amber-100",
            onclick: move |_| start_over.call(()),
            "{label}"
        }
    }
}
