//! Profile route handler

use crate::use_platform;
use dioxus::prelude::*;

use crate::presentation::views::profile_form::ProfileForm;

/// First wizard step. Always open.
#[component]
pub fn ProfileRoute() -> Element {
    let platform = use_platform();

    use_effect(move || {
        platform.set_page_title("아이 정보 입력 - 나만의 동화책");
    });

    rsx! {
        ProfileForm {}
    }
}
