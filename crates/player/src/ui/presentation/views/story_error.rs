//! Generation failure screen

use dioxus::prelude::*;

#[component]
pub fn StoryError(
    message: String,
    on_retry: EventHandler<()>,
    on_reload: EventHandler<()>,
    on_back: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "mx-auto flex max-w-xl flex-col items-center gap-4 rounded-3xl bg-white p-10 text-center shadow-lg",
            p { class: "text-4xl", "😢" }
            h2 { class: "text-xl font-bold text-rose-600", "동화를 만들지 못했어요" }
            p { class: "text-slate-600", "{message}" }
            div {
                class: "flex flex-wrap justify-center gap-2",
                button {
                    class: "rounded-xl bg-amber-500 px-4 py-2 font-semibold text-white hover:bg-amber-600",
                    onclick: move |_| on_retry.call(()),
                    "다시 시도하기"
                }
                button {
                    class: "rounded-xl border border-slate-300 px-4 py-2 text-slate-700 hover:bg-slate-100",
                    onclick: move |_| on_reload.call(()),
                    "새로고침"
                }
                button {
                    class: "rounded-xl px-4 py-2 text-slate-500 underline",
                    onclick: move |_| on_back.call(()),
                    "주제 다시 고르기"
                }
            }
        }
    }
}
