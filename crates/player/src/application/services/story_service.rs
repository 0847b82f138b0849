//! Story generation service
//!
//! Generation is a single slow POST with no fallback. Every attempt takes a
//! `RequestToken`; only the result of the latest attempt should be applied,
//! which keeps a double submission from overwriting a newer story with an
//! older one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use storybook_domain::{CompleteStory, StoryScene};
use storybook_shared::{endpoints, CompleteStoryResponse, StoryPayload, StoryRequest};

use crate::application::api::{Api, ApiResponse};
use crate::application::store::AppAction;
use crate::ports::outbound::ApiError;

/// Identifies one generation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

#[derive(Clone)]
pub struct StoryService {
    api: Api,
    latest: Arc<AtomicU64>,
}

impl StoryService {
    pub fn new(api: Api) -> Self {
        Self {
            api,
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Start a new attempt, superseding every earlier token
    pub fn begin_request(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }

    /// Generate a story, keeping the typed error
    pub async fn generate(&self, request: &StoryRequest) -> Result<CompleteStory, ApiError> {
        tracing::info!(
            "Generating story for theme {} (age {})",
            request.theme,
            request.child_profile.age
        );
        let payload: StoryPayload = self
            .api
            .post_with_error(endpoints::GENERATE_COMPLETE_STORY, request)
            .await?;
        story_from_response(payload.into())
    }

    /// Generate a story as a non-throwing response
    pub async fn generate_complete_story(&self, request: &StoryRequest) -> ApiResponse<CompleteStory> {
        let result = self.generate(request).await;
        if let Err(e) = &result {
            tracing::error!(
                class = ?e.class(),
                timed_out = e.is_timeout(),
                "Story generation failed: {}",
                e
            );
        }
        ApiResponse::from_result(result)
    }

    /// Turn the response to attempt `token` into the action to dispatch.
    ///
    /// Returns `None` once a newer attempt has started; the response is dropped.
    pub fn settle(&self, token: RequestToken, response: ApiResponse<CompleteStory>) -> Option<AppAction> {
        if !self.is_current(token) {
            tracing::debug!("Discarding story response for superseded request {:?}", token);
            return None;
        }
        match response.into_result() {
            Ok(story) => Some(AppAction::SetCurrentStory(story)),
            Err(message) => Some(AppAction::SetError(message)),
        }
    }

    pub async fn health_check(&self) -> bool {
        self.api.health_check().await
    }
}

fn story_from_response(response: CompleteStoryResponse) -> Result<CompleteStory, ApiError> {
    let scenes = response
        .story
        .scenes
        .into_iter()
        .map(|scene| StoryScene {
            scene_number: scene.scene_number,
            content: scene.content,
            image_description: scene.image_description,
            image_url: scene.image_url.filter(|u| !u.is_empty()),
            audio_url: scene.audio_url.filter(|u| !u.is_empty()),
            narration: scene.narration,
        })
        .collect();

    CompleteStory::new(
        response.story.title,
        response.story.moral,
        scenes,
        response.character_image_url,
    )
    .map_err(|e| ApiError::ParseError(e.to_string()))
}
