//! Scene-by-scene story viewer with narration
//!
//! All navigation and audio decisions live in `PlaybackController`. This
//! component only feeds it user input and performs the effects it returns:
//! audio commands go to the `AudioPort`, scene changes are mirrored into the
//! store, and auto-advance timers are slept on the platform clock.

use std::sync::Arc;

use dioxus::prelude::*;
use storybook_domain::CompleteStory;

use crate::application::playback::{run_audio_effects, AudioState, PlaybackController, PlaybackEffect};
use crate::application::store::AppAction;
use crate::ports::outbound::AudioPort;
use crate::presentation::components::StartOverButton;
use crate::presentation::services::{use_app_config, use_audio};
use crate::presentation::state::{use_story_store, StoryStore};
use crate::{use_platform, Platform};

/// Everything needed to carry out playback effects outside of render
#[derive(Clone)]
struct PlaybackContext {
    controller: Signal<PlaybackController>,
    store: StoryStore,
    audio: Arc<dyn AudioPort>,
    platform: Platform,
}

impl PlaybackContext {
    /// Apply a command to the controller and perform what it asks for
    fn run(&self, command: impl FnOnce(&mut PlaybackController) -> Vec<PlaybackEffect>) {
        let mut controller = self.controller;
        let effects = command(&mut *controller.write());
        perform(effects, self.clone());
    }
}

fn perform(effects: Vec<PlaybackEffect>, ctx: PlaybackContext) {
    if let Some(track) = run_audio_effects(&effects, ctx.audio.as_ref()) {
        let ctx = ctx.clone();
        spawn(async move {
            let outcome = track.finished.await;
            ctx.run(|controller| controller.on_audio_finished(track.ticket, outcome));
        });
    }

    for effect in effects {
        match effect {
            PlaybackEffect::SceneChanged(index) => {
                ctx.store.dispatch(AppAction::SetCurrentScene(index));
            }
            PlaybackEffect::ScheduleAdvance { after_ms, ticket } => {
                let ctx = ctx.clone();
                spawn(async move {
                    ctx.platform.sleep_ms(after_ms).await;
                    ctx.run(|controller| controller.auto_advance(ticket));
                });
            }
            _ => {}
        }
    }
}

fn audio_button_label(state: AudioState) -> &'static str {
    match state {
        AudioState::NotStarted => "▶ 들려주기",
        AudioState::Playing => "⏸ 잠깐 멈추기",
        AudioState::Paused => "▶ 이어 듣기",
    }
}

#[component]
pub fn StoryViewer(story: CompleteStory) -> Element {
    let store = use_story_store();
    let audio = use_audio();
    let platform = use_platform();
    let config = use_app_config();

    let controller = use_signal(|| {
        let start_scene = store.snapshot().current_scene;
        PlaybackController::new(&story, start_scene, config.autoplay_delay_ms)
    });

    let ctx = PlaybackContext {
        controller,
        store,
        audio: audio.clone(),
        platform,
    };

    use_drop(move || audio.stop());

    let (index, total, audio_state, has_audio, auto_play, is_first, is_last) = {
        let view = controller.read();
        (
            view.current_scene(),
            view.scene_count(),
            view.audio_state(),
            view.current_has_audio(),
            view.auto_play(),
            view.is_first(),
            view.is_last(),
        )
    };

    let Some(scene) = story.scene(index).cloned() else {
        return rsx! {
            p { class: "text-center text-slate-500", "장면을 찾을 수 없어요." }
        };
    };

    let on_key = {
        let ctx = ctx.clone();
        move |evt: KeyboardEvent| {
            let key = evt.key().to_string();
            let mut controller = ctx.controller;
            let outcome = controller.write().handle_key(&key);
            if outcome.prevent_default {
                evt.prevent_default();
            }
            perform(outcome.effects, ctx.clone());
        }
    };
    let on_previous = {
        let ctx = ctx.clone();
        move |_: MouseEvent| ctx.run(PlaybackController::previous)
    };
    let on_next = {
        let ctx = ctx.clone();
        move |_: MouseEvent| ctx.run(PlaybackController::next)
    };
    let on_toggle_audio = {
        let ctx = ctx.clone();
        move |_: MouseEvent| ctx.run(PlaybackController::toggle_audio)
    };
    let on_auto_play = {
        let ctx = ctx.clone();
        move |evt: FormEvent| {
            let enabled = evt.checked();
            ctx.run(|controller| {
                controller.set_auto_play(enabled);
                Vec::new()
            });
        }
    };

    rsx! {
        div {
            class: "mx-auto flex max-w-3xl flex-col gap-4 rounded-3xl bg-white p-6 shadow-lg outline-none",
            tabindex: "0",
            onmounted: move |evt| async move {
                let _ = evt.set_focus(true).await;
            },
            onkeydown: on_key,

            div {
                class: "flex items-center gap-3",
                if let Some(url) = story.character_image_url() {
                    img {
                        class: "h-12 w-12 rounded-full object-cover",
                        src: "{url}",
                        alt: "주인공",
                    }
                }
                h2 { class: "text-2xl font-bold text-amber-700", "{story.title()}" }
            }

            if let Some(url) = scene.image_url.as_ref().filter(|u| !u.is_empty()) {
                img {
                    class: "aspect-video w-full rounded-2xl object-cover",
                    src: "{url}",
                    alt: "{scene.image_description}",
                }
            } else {
                div {
                    class: "flex aspect-video w-full items-center justify-center rounded-2xl bg-amber-50 p-6 text-center text-amber-700",
                    "{scene.image_description}"
                }
            }

            p { class: "whitespace-pre-line text-lg leading-relaxed", "{scene.display_text()}" }

            div {
                class: "flex flex-wrap items-center justify-between gap-2",
                button {
                    class: "rounded-xl bg-amber-100 px-4 py-2 text-amber-800 disabled:opacity-40",
                    disabled: is_first,
                    onclick: on_previous,
                    "◀ 이전"
                }
                button {
                    class: "rounded-xl bg-amber-500 px-4 py-2 font-semibold text-white disabled:opacity-40",
                    disabled: !has_audio,
                    onclick: on_toggle_audio,
                    if has_audio { "{audio_button_label(audio_state)}" } else { "소리 없음" }
                }
                span { class: "text-sm text-slate-500", "{index + 1} / {total}" }
                button {
                    class: "rounded-xl bg-amber-100 px-4 py-2 text-amber-800 disabled:opacity-40",
                    disabled: is_last,
                    onclick: on_next,
                    "다음 ▶"
                }
            }

            label {
                class: "flex items-center gap-2 text-sm text-slate-600",
                input {
                    r#type: "checkbox",
                    checked: auto_play,
                    onchange: on_auto_play,
                }
                "자동으로 넘기기"
            }

            if is_last {
                div {
                    class: "flex flex-col items-center gap-3 rounded-2xl bg-amber-50 p-4 text-center",
                    if !story.moral().is_empty() {
                        p { class: "font-semibold text-amber-800", "오늘의 교훈: {story.moral()}" }
                    }
                    StartOverButton {}
                }
            }
        }
    }
}
