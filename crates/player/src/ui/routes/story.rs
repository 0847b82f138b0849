//! Story route handler

use crate::use_platform;
use dioxus::prelude::*;

use crate::presentation::views::story_page::StoryPage;
use crate::routes::RouteGuard;

/// Last wizard step. Needs both a profile and a theme.
#[component]
pub fn StoryRoute() -> Element {
    let platform = use_platform();

    use_effect(move || {
        platform.set_page_title("동화 보기 - 나만의 동화책");
    });

    rsx! {
        RouteGuard {
            require_profile: true,
            require_theme: true,
            StoryPage {}
        }
    }
}
