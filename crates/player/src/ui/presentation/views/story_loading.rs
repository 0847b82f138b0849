//! Waiting screen while the story is generated

use dioxus::prelude::*;

use crate::use_platform;

const MESSAGES: [&str; 5] = [
    "이야기를 구상하고 있어요...",
    "주인공을 그리고 있어요...",
    "장면마다 그림을 그리고 있어요...",
    "목소리를 녹음하고 있어요...",
    "동화책을 엮고 있어요...",
];

const MESSAGE_INTERVAL_SECS: u64 = 4;

fn message_for(elapsed_secs: u64) -> &'static str {
    let index = (elapsed_secs / MESSAGE_INTERVAL_SECS) as usize % MESSAGES.len();
    MESSAGES[index]
}

#[component]
pub fn StoryLoading(started_at: u64) -> Element {
    let platform = use_platform();
    let mut elapsed_secs = use_signal(|| 0u64);

    use_future(move || {
        let platform = platform.clone();
        async move {
            loop {
                platform.sleep_ms(1000).await;
                let now = platform.now_millis();
                elapsed_secs.set(now.saturating_sub(started_at) / 1000);
            }
        }
    });

    let elapsed = *elapsed_secs.read();
    let message = message_for(elapsed);

    rsx! {
        div {
            class: "mx-auto flex max-w-xl flex-col items-center gap-4 rounded-3xl bg-white p-10 text-center shadow-lg",
            div { class: "h-16 w-16 animate-spin rounded-full border-4 border-amber-200 border-t-amber-500" }
            p { class: "text-lg font-semibold text-amber-700", "{message}" }
            p { class: "text-sm text-slate-500", "동화를 만드는 데 몇 분 정도 걸릴 수 있어요. ({elapsed}초)" }
        }
    }
}
