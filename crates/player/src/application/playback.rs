//! Story playback controller
//!
//! Pure state machine for scene navigation and narration. Methods return the
//! effects to perform instead of performing them, so the UI decides how to
//! run audio and timers and tests can drive the controller directly.
//!
//! Every started track and every scheduled auto-advance carries a ticket.
//! Changing scene or starting a new track bumps the ticket, so completions
//! that arrive late are recognised and ignored.

use storybook_domain::CompleteStory;

use crate::ports::outbound::{AudioFuture, AudioOutcome, AudioPort};

/// Narration state of the current scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioState {
    #[default]
    NotStarted,
    Playing,
    Paused,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEffect {
    StopAudio,
    PlayAudio { url: String, ticket: u64 },
    PauseAudio,
    ResumeAudio,
    /// The visible scene changed; mirror it into the store
    SceneChanged(usize),
    /// Call `auto_advance(ticket)` after the delay
    ScheduleAdvance { after_ms: u64, ticket: u64 },
}

/// Result of a key press
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    pub effects: Vec<PlaybackEffect>,
    /// The browser's default action (scrolling) must be suppressed
    pub prevent_default: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackController {
    audio_urls: Vec<Option<String>>,
    current: usize,
    audio: AudioState,
    auto_play: bool,
    autoplay_delay_ms: u64,
    ticket: u64,
}

impl PlaybackController {
    /// Controller positioned on `start_scene` (clamped to the story)
    pub fn new(story: &CompleteStory, start_scene: usize, autoplay_delay_ms: u64) -> Self {
        let audio_urls: Vec<Option<String>> = story
            .scenes()
            .iter()
            .map(|scene| scene.audio_url.clone().filter(|u| !u.is_empty()))
            .collect();
        let current = start_scene.min(audio_urls.len().saturating_sub(1));

        Self {
            audio_urls,
            current,
            audio: AudioState::NotStarted,
            auto_play: false,
            autoplay_delay_ms,
            ticket: 0,
        }
    }

    pub fn current_scene(&self) -> usize {
        self.current
    }

    pub fn scene_count(&self) -> usize {
        self.audio_urls.len()
    }

    pub fn audio_state(&self) -> AudioState {
        self.audio
    }

    pub fn auto_play(&self) -> bool {
        self.auto_play
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.scene_count()
    }

    pub fn current_has_audio(&self) -> bool {
        self.current_audio_url().is_some()
    }

    fn current_audio_url(&self) -> Option<&str> {
        self.audio_urls.get(self.current).and_then(|u| u.as_deref())
    }

    pub fn set_auto_play(&mut self, enabled: bool) {
        self.auto_play = enabled;
    }

    pub fn previous(&mut self) -> Vec<PlaybackEffect> {
        if self.is_first() {
            return Vec::new();
        }
        self.go_to(self.current - 1)
    }

    pub fn next(&mut self) -> Vec<PlaybackEffect> {
        if self.is_last() {
            return Vec::new();
        }
        self.go_to(self.current + 1)
    }

    fn go_to(&mut self, index: usize) -> Vec<PlaybackEffect> {
        let mut effects = Vec::with_capacity(2);
        if self.audio != AudioState::NotStarted {
            effects.push(PlaybackEffect::StopAudio);
        }
        self.ticket += 1;
        self.audio = AudioState::NotStarted;
        self.current = index;
        effects.push(PlaybackEffect::SceneChanged(index));
        effects
    }

    /// NotStarted -> Playing -> Paused -> Playing
    pub fn toggle_audio(&mut self) -> Vec<PlaybackEffect> {
        match self.audio {
            AudioState::NotStarted => {
                let Some(url) = self.current_audio_url().map(str::to_string) else {
                    return Vec::new();
                };
                self.ticket += 1;
                self.audio = AudioState::Playing;
                vec![PlaybackEffect::PlayAudio {
                    url,
                    ticket: self.ticket,
                }]
            }
            AudioState::Playing => {
                self.audio = AudioState::Paused;
                vec![PlaybackEffect::PauseAudio]
            }
            AudioState::Paused => {
                self.audio = AudioState::Playing;
                vec![PlaybackEffect::ResumeAudio]
            }
        }
    }

    /// A track started with `ticket` has settled
    pub fn on_audio_finished(&mut self, ticket: u64, outcome: AudioOutcome) -> Vec<PlaybackEffect> {
        if ticket != self.ticket {
            return Vec::new();
        }
        match outcome {
            AudioOutcome::Ended => {
                self.audio = AudioState::NotStarted;
                self.schedule_advance()
            }
            AudioOutcome::Failed => {
                tracing::warn!("Narration for scene {} failed to play", self.current + 1);
                self.audio = AudioState::NotStarted;
                Vec::new()
            }
            AudioOutcome::Interrupted => {
                tracing::debug!("Narration for scene {} was interrupted", self.current + 1);
                self.audio = AudioState::NotStarted;
                Vec::new()
            }
        }
    }

    fn schedule_advance(&self) -> Vec<PlaybackEffect> {
        if !self.auto_play || self.is_last() {
            return Vec::new();
        }
        vec![PlaybackEffect::ScheduleAdvance {
            after_ms: self.autoplay_delay_ms,
            ticket: self.ticket,
        }]
    }

    /// Auto-play step: move to the next scene and start its narration.
    ///
    /// A scene without narration schedules the following step directly.
    pub fn auto_advance(&mut self, ticket: u64) -> Vec<PlaybackEffect> {
        if ticket != self.ticket || !self.auto_play || self.is_last() {
            return Vec::new();
        }
        let mut effects = self.go_to(self.current + 1);
        if self.current_has_audio() {
            effects.extend(self.toggle_audio());
        } else {
            effects.extend(self.schedule_advance());
        }
        effects
    }

    /// Map a `KeyboardEvent.key` value to playback commands
    pub fn handle_key(&mut self, key: &str) -> KeyOutcome {
        match key {
            "ArrowLeft" => KeyOutcome {
                effects: self.previous(),
                prevent_default: false,
            },
            "ArrowRight" => KeyOutcome {
                effects: self.next(),
                prevent_default: false,
            },
            " " | "Spacebar" => KeyOutcome {
                effects: self.toggle_audio(),
                prevent_default: true,
            },
            _ => KeyOutcome::default(),
        }
    }
}

/// A started narration track
pub struct PlayingTrack {
    pub ticket: u64,
    pub finished: AudioFuture,
}

/// Perform the audio effects on `audio`.
///
/// Scene and timer effects are left to the caller. Returns the track that was
/// started, if any.
pub fn run_audio_effects(effects: &[PlaybackEffect], audio: &dyn AudioPort) -> Option<PlayingTrack> {
    let mut playing = None;
    for effect in effects {
        match effect {
            PlaybackEffect::StopAudio => audio.stop(),
            PlaybackEffect::PauseAudio => audio.pause(),
            PlaybackEffect::ResumeAudio => audio.resume(),
            PlaybackEffect::PlayAudio { url, ticket } => {
                playing = Some(PlayingTrack {
                    ticket: *ticket,
                    finished: audio.play(url),
                });
            }
            PlaybackEffect::SceneChanged(_) | PlaybackEffect::ScheduleAdvance { .. } => {}
        }
    }
    playing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockAudioPort;
    use storybook_domain::StoryScene;

    fn story(audio: &[Option<&str>]) -> CompleteStory {
        let scenes = audio
            .iter()
            .enumerate()
            .map(|(i, url)| StoryScene {
                scene_number: i as u32 + 1,
                content: format!("장면 {}", i + 1),
                image_description: String::new(),
                image_url: None,
                audio_url: url.map(str::to_string),
                narration: String::new(),
            })
            .collect();
        CompleteStory::new("이야기", "", scenes, None).unwrap()
    }

    fn played_ticket(effects: &[PlaybackEffect]) -> u64 {
        effects
            .iter()
            .find_map(|e| match e {
                PlaybackEffect::PlayAudio { ticket, .. } => Some(*ticket),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_navigation_is_bounded() {
        let mut controller = PlaybackController::new(&story(&[None, None, None]), 0, 1_500);

        assert!(controller.previous().is_empty());
        assert_eq!(controller.current_scene(), 0);

        assert_eq!(controller.next(), vec![PlaybackEffect::SceneChanged(1)]);
        assert_eq!(controller.next(), vec![PlaybackEffect::SceneChanged(2)]);
        assert!(controller.next().is_empty());
        assert_eq!(controller.current_scene(), 2);
        assert!(controller.is_last());
    }

    #[test]
    fn test_start_scene_is_clamped() {
        let controller = PlaybackController::new(&story(&[None, None]), 9, 1_500);
        assert_eq!(controller.current_scene(), 1);
    }

    #[test]
    fn test_toggle_cycles_audio_states() {
        let mut controller = PlaybackController::new(&story(&[Some("a.mp3")]), 0, 1_500);

        let effects = controller.toggle_audio();
        assert!(matches!(&effects[..], [PlaybackEffect::PlayAudio { url, .. }] if url == "a.mp3"));
        assert_eq!(controller.audio_state(), AudioState::Playing);

        assert_eq!(controller.toggle_audio(), vec![PlaybackEffect::PauseAudio]);
        assert_eq!(controller.audio_state(), AudioState::Paused);

        assert_eq!(controller.toggle_audio(), vec![PlaybackEffect::ResumeAudio]);
        assert_eq!(controller.audio_state(), AudioState::Playing);
    }

    #[test]
    fn test_scene_without_audio_cannot_play() {
        let mut controller = PlaybackController::new(&story(&[None]), 0, 1_500);
        assert!(controller.toggle_audio().is_empty());
        assert_eq!(controller.audio_state(), AudioState::NotStarted);
    }

    #[test]
    fn test_changing_scene_stops_audio_and_discards_completion() {
        let mut controller =
            PlaybackController::new(&story(&[Some("a.mp3"), Some("b.mp3")]), 0, 1_500);
        controller.set_auto_play(true);
        let ticket = played_ticket(&controller.toggle_audio());

        assert_eq!(
            controller.next(),
            vec![PlaybackEffect::StopAudio, PlaybackEffect::SceneChanged(1)]
        );
        assert_eq!(controller.audio_state(), AudioState::NotStarted);
        assert!(controller
            .on_audio_finished(ticket, AudioOutcome::Ended)
            .is_empty());
    }

    #[test]
    fn test_auto_play_chain_ends_at_last_scene() {
        let mut controller = PlaybackController::new(
            &story(&[Some("a.mp3"), None, Some("c.mp3")]),
            0,
            1_500,
        );
        controller.set_auto_play(true);

        let ticket = played_ticket(&controller.toggle_audio());
        let effects = controller.on_audio_finished(ticket, AudioOutcome::Ended);
        let PlaybackEffect::ScheduleAdvance { after_ms, ticket } = effects[0] else {
            panic!("expected an advance, got {:?}", effects);
        };
        assert_eq!(after_ms, 1_500);

        // Scene 2 has no narration, so the next step is scheduled straight away
        let effects = controller.auto_advance(ticket);
        assert_eq!(effects[0], PlaybackEffect::SceneChanged(1));
        let PlaybackEffect::ScheduleAdvance { ticket, .. } = effects[1] else {
            panic!("expected an advance, got {:?}", effects);
        };

        let effects = controller.auto_advance(ticket);
        assert_eq!(effects[0], PlaybackEffect::SceneChanged(2));
        let ticket = played_ticket(&effects);

        assert!(controller
            .on_audio_finished(ticket, AudioOutcome::Ended)
            .is_empty());
        assert_eq!(controller.current_scene(), 2);
    }

    #[test]
    fn test_manual_navigation_cancels_scheduled_advance() {
        let mut controller =
            PlaybackController::new(&story(&[Some("a.mp3"), Some("b.mp3"), None]), 0, 1_500);
        controller.set_auto_play(true);
        let ticket = played_ticket(&controller.toggle_audio());
        let effects = controller.on_audio_finished(ticket, AudioOutcome::Ended);
        assert_eq!(effects.len(), 1);

        controller.next();
        assert!(controller.auto_advance(ticket).is_empty());
        assert_eq!(controller.current_scene(), 1);
    }

    #[test]
    fn test_failed_audio_resets_to_not_started() {
        let mut controller = PlaybackController::new(&story(&[Some("a.mp3"), None]), 0, 1_500);
        controller.set_auto_play(true);
        let ticket = played_ticket(&controller.toggle_audio());

        assert!(controller
            .on_audio_finished(ticket, AudioOutcome::Failed)
            .is_empty());
        assert_eq!(controller.audio_state(), AudioState::NotStarted);
    }

    #[test]
    fn test_interrupted_audio_resets_without_advancing() {
        let mut controller = PlaybackController::new(&story(&[Some("a.mp3"), None]), 0, 1_500);
        controller.set_auto_play(true);
        let ticket = played_ticket(&controller.toggle_audio());
        assert_eq!(controller.audio_state(), AudioState::Playing);

        assert!(controller
            .on_audio_finished(ticket, AudioOutcome::Interrupted)
            .is_empty());
        assert_eq!(controller.audio_state(), AudioState::NotStarted);
        assert_eq!(controller.current_scene(), 0);

        // Play again picks the narration up from the start
        let effects = controller.toggle_audio();
        assert!(matches!(&effects[..], [PlaybackEffect::PlayAudio { .. }]));
    }

    #[test]
    fn test_keyboard_bindings() {
        let mut controller = PlaybackController::new(&story(&[Some("a.mp3"), None]), 0, 1_500);

        let outcome = controller.handle_key(" ");
        assert!(outcome.prevent_default);
        assert_eq!(controller.audio_state(), AudioState::Playing);

        let outcome = controller.handle_key("ArrowRight");
        assert!(!outcome.prevent_default);
        assert_eq!(controller.current_scene(), 1);

        assert_eq!(controller.handle_key("Enter"), KeyOutcome::default());

        controller.handle_key("ArrowLeft");
        assert_eq!(controller.current_scene(), 0);
    }

    #[tokio::test]
    async fn test_run_audio_effects_drives_the_port() {
        let mut audio = MockAudioPort::new();
        audio.expect_stop().times(1).return_const(());
        audio
            .expect_play()
            .withf(|url| url == "b.mp3")
            .times(1)
            .returning(|_| Box::pin(std::future::ready(AudioOutcome::Ended)));

        let effects = vec![
            PlaybackEffect::StopAudio,
            PlaybackEffect::SceneChanged(1),
            PlaybackEffect::PlayAudio {
                url: "b.mp3".to_string(),
                ticket: 4,
            },
        ];

        let track = run_audio_effects(&effects, &audio).unwrap();
        assert_eq!(track.ticket, 4);
        assert_eq!(track.finished.await, AudioOutcome::Ended);
    }
}
