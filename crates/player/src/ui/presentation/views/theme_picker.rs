//! Theme picker - second wizard step

use dioxus::prelude::*;
use storybook_domain::{Theme, ThemeValue};

use crate::application::services::Fetched;
use crate::application::store::AppAction;
use crate::presentation::services::{use_session_repository, use_theme_service};
use crate::presentation::state::use_story_store;
use crate::routes::Route;

#[component]
pub fn ThemePicker() -> Element {
    let store = use_story_store();
    let session = use_session_repository();
    let theme_service = use_theme_service();
    let navigator = use_navigator();

    let mut catalog: Signal<Option<Fetched<Vec<Theme>>>> = use_signal(|| None);
    let mut selected: Signal<Option<ThemeValue>> = use_signal(|| store.snapshot().selected_theme);

    use_effect(move || {
        let service = theme_service.clone();
        spawn(async move {
            catalog.set(Some(service.fetch_catalog().await));
        });
    });

    let child_name = store.read_with(|state| {
        state
            .child_profile
            .as_ref()
            .map(|p| p.name.to_string())
            .unwrap_or_default()
    });

    let confirm = move |_: MouseEvent| {
        let Some(theme) = *selected.read() else {
            return;
        };
        session.save_theme(theme);
        store.dispatch(AppAction::SetSelectedTheme(theme));
        navigator.push(Route::StoryRoute {});
    };

    let themes = catalog.read().as_ref().map(|c| c.value().clone());
    let is_degraded = catalog.read().as_ref().is_some_and(Fetched::is_degraded);

    rsx! {
        div {
            class: "mx-auto flex max-w-3xl flex-col gap-6",

            h2 { class: "text-2xl font-bold text-amber-700", "{child_name}에게 들려줄 이야기를 골라 주세요" }

            if is_degraded {
                p {
                    class: "rounded-xl bg-amber-100 px-4 py-2 text-sm text-amber-800",
                    "서버에서 주제를 불러오지 못해 기본 주제를 보여드려요."
                }
            }

            match themes {
                None => rsx! {
                    p { class: "text-slate-500", "주제를 불러오는 중이에요..." }
                },
                Some(themes) => rsx! {
                    div {
                        class: "grid grid-cols-1 gap-4 sm:grid-cols-2",
                        for theme in themes {
                            ThemeCard {
                                key: "{theme.value}",
                                is_selected: *selected.read() == Some(theme.value),
                                on_select: move |value| selected.set(Some(value)),
                                theme,
                            }
                        }
                    }
                },
            }

            div {
                class: "flex justify-between",
                Link {
                    class: "rounded-xl px-4 py-2 text-slate-600 hover:bg-slate-100",
                    to: Route::ProfileRoute {},
                    "이전으로"
                }
                button {
                    class: "rounded-2xl bg-amber-500 px-6 py-3 font-bold text-white hover:bg-amber-600 disabled:opacity-50",
                    disabled: selected.read().is_none(),
                    onclick: confirm,
                    "동화 만들기"
                }
            }
        }
    }
}

#[component]
fn ThemeCard(theme: Theme, is_selected: bool, on_select: EventHandler<ThemeValue>) -> Element {
    let value = theme.value;

    rsx! {
        button {
            r#type: "button",
            class: if is_selected {
                "flex flex-col items-start gap-1 rounded-2xl border-2 border-amber-500 bg-amber-50 p-4 text-left"
            } else {
                "flex flex-col items-start gap-1 rounded-2xl border-2 border-transparent bg-white p-4 text-left shadow hover:border-amber-200"
            },
            onclick: move |_| on_select.call(value),
            span { class: "text-3xl", "{theme.emoji}" }
            span { class: "text-lg font-semibold", "{theme.name}" }
            if !theme.description.is_empty() {
                span { class: "text-sm text-slate-500", "{theme.description}" }
            }
        }
    }
}
