//! Theme route handler

use crate::use_platform;
use dioxus::prelude::*;

use crate::presentation::views::theme_picker::ThemePicker;
use crate::routes::RouteGuard;

/// Second wizard step. Needs a child profile.
#[component]
pub fn ThemeRoute() -> Element {
    let platform = use_platform();

    use_effect(move || {
        platform.set_page_title("주제 선택 - 나만의 동화책");
    });

    rsx! {
        RouteGuard {
            require_profile: true,
            ThemePicker {}
        }
    }
}
