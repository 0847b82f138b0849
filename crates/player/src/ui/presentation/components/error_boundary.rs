//! Last-resort error screen for render failures

use dioxus::prelude::*;

use super::start_over::use_start_over;

#[component]
pub fn AppErrorBoundary(children: Element) -> Element {
    let start_over = use_start_over();

    rsx! {
        ErrorBoundary {
            handle_error: move |errors: ErrorContext| {
                tracing::error!("Render error caught by boundary: {:?}", errors);
                let retry_errors = errors.clone();
                rsx! {
                    div {
                        class: "flex flex-col items-center gap-4 rounded-2xl bg-white p-8 text-center shadow",
                        p { class: "text-5xl", "😢" }
                        h2 { class: "text-xl font-bold", "앗, 문제가 생겼어요" }
                        p { class: "text-slate-600", "화면을 그리는 중에 오류가 발생했어요." }
                        div {
                            class: "flex gap-3",
                            button {
                                class: "rounded-xl bg-amber-500 px-4 py-2 font-semibold text-white",
                                onclick: move |_| retry_errors.clear_errors(),
                                "다시 시도"
                            }
                            button {
                                class: "rounded-xl border border-amber-400 px-4 py-2 text-amber-700",
                                onclick: move |_| {
                                    errors.clear_errors();
                                    start_over.call(());
                                },
                                "처음으로"
                            }
                        }
                    }
                }
            },
            {children}
        }
    }
}
