//! Narration player backed by a single `<audio>` element
//!
//! The element lives on `window` and is driven through `document::eval`, which
//! works the same in the desktop webview and the browser. Each `play` call
//! waits in JS for the track to settle and reports `ended`, `interrupted` or
//! `error` back over the eval channel.

use dioxus::document;

use crate::ports::outbound::{AudioFuture, AudioOutcome, AudioPort};

const PLAY_SCRIPT: &str = r#"
const url = await dioxus.recv();
let audio = window.__storybookAudio;
if (!audio) {
    audio = new Audio();
    window.__storybookAudio = audio;
}
if (window.__storybookAudioSettle) {
    window.__storybookAudioSettle("interrupted");
}
audio.pause();
const outcome = await new Promise((resolve) => {
    let settled = false;
    const settle = (value) => {
        if (settled) return;
        settled = true;
        audio.onended = null;
        audio.onerror = null;
        if (window.__storybookAudioSettle === settle) {
            window.__storybookAudioSettle = null;
        }
        resolve(value);
    };
    window.__storybookAudioSettle = settle;
    audio.onended = () => settle("ended");
    audio.onerror = () => settle("error");
    audio.src = url;
    audio.currentTime = 0;
    audio.play().catch(() => settle("error"));
});
dioxus.send(outcome);
"#;

const PAUSE_SCRIPT: &str = r#"
if (window.__storybookAudio) { window.__storybookAudio.pause(); }
"#;

const RESUME_SCRIPT: &str = r#"
const audio = window.__storybookAudio;
if (audio) {
    audio.play().catch(() => {
        if (window.__storybookAudioSettle) { window.__storybookAudioSettle("error"); }
    });
}
"#;

const STOP_SCRIPT: &str = r#"
if (window.__storybookAudioSettle) { window.__storybookAudioSettle("interrupted"); }
const audio = window.__storybookAudio;
if (audio) {
    audio.pause();
    audio.currentTime = 0;
}
"#;

/// `AudioPort` implementation using Dioxus' JS bridge
#[derive(Clone, Copy, Debug, Default)]
pub struct EvalAudioAdapter;

fn outcome_from(message: &str) -> AudioOutcome {
    match message {
        "ended" => AudioOutcome::Ended,
        "interrupted" => AudioOutcome::Interrupted,
        _ => AudioOutcome::Failed,
    }
}

impl AudioPort for EvalAudioAdapter {
    fn play(&self, url: &str) -> AudioFuture {
        tracing::debug!("Playing narration {}", url);
        let mut eval = document::eval(PLAY_SCRIPT);
        if let Err(e) = eval.send(url.to_string()) {
            tracing::error!("Failed to start narration: {:?}", e);
            return Box::pin(std::future::ready(AudioOutcome::Failed));
        }

        Box::pin(async move {
            match eval.recv::<String>().await {
                Ok(message) => outcome_from(&message),
                Err(e) => {
                    // The eval channel closes when the webview tears the script down
                    tracing::debug!("Narration channel closed: {:?}", e);
                    AudioOutcome::Interrupted
                }
            }
        })
    }

    fn pause(&self) {
        let _ = document::eval(PAUSE_SCRIPT);
    }

    fn resume(&self) {
        let _ = document::eval(RESUME_SCRIPT);
    }

    fn stop(&self) {
        let _ = document::eval(STOP_SCRIPT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_messages() {
        assert_eq!(outcome_from("ended"), AudioOutcome::Ended);
        assert_eq!(outcome_from("interrupted"), AudioOutcome::Interrupted);
        assert_eq!(outcome_from("error"), AudioOutcome::Failed);
        assert_eq!(outcome_from(""), AudioOutcome::Failed);
    }
}
