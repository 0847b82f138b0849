//! Service providers for the presentation layer
//!
//! This module provides Dioxus context providers for application services.
//! Components can use the hooks below to access services without depending
//! on infrastructure implementations.

use dioxus::prelude::*;
use std::sync::Arc;

use crate::application::api::Api;
use crate::application::services::{PhotoService, SessionRepository, StoryService, ThemeService};
use crate::config::AppConfig;
use crate::ports::outbound::AudioPort;
use crate::state::PlatformStorageAdapter;

/// Session repository as wired by the composition root
pub type UiSessionRepository = SessionRepository<PlatformStorageAdapter>;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub theme: Arc<ThemeService>,
    pub story: Arc<StoryService>,
    pub photo: Arc<PhotoService>,
    pub session: Arc<UiSessionRepository>,
    pub audio: Arc<dyn AudioPort>,
    pub config: AppConfig,
}

impl Services {
    /// Create all services with the given ports
    ///
    /// # Arguments
    /// * `api` - Typed wrapper over the HTTP adapter
    /// * `session` - Repository over platform storage
    /// * `audio` - The shared narration player
    /// * `config` - Runtime configuration
    pub fn new(
        api: Api,
        session: Arc<UiSessionRepository>,
        audio: Arc<dyn AudioPort>,
        config: AppConfig,
    ) -> Self {
        Self {
            theme: Arc::new(ThemeService::new(api.clone())),
            story: Arc::new(StoryService::new(api.clone())),
            photo: Arc::new(PhotoService::new(api)),
            session,
            audio,
            config,
        }
    }
}

/// Hook to access the whole service bundle from context
pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Hook to access the ThemeService from context
pub fn use_theme_service() -> Arc<ThemeService> {
    let services = use_context::<Services>();
    services.theme.clone()
}

/// Hook to access the StoryService from context
pub fn use_story_service() -> Arc<StoryService> {
    let services = use_context::<Services>();
    services.story.clone()
}

/// Hook to access the PhotoService from context
pub fn use_photo_service() -> Arc<PhotoService> {
    let services = use_context::<Services>();
    services.photo.clone()
}

/// Hook to access the SessionRepository from context
pub fn use_session_repository() -> Arc<UiSessionRepository> {
    let services = use_context::<Services>();
    services.session.clone()
}

/// Hook to access the narration player from context
pub fn use_audio() -> Arc<dyn AudioPort> {
    let services = use_context::<Services>();
    services.audio.clone()
}

/// Hook to access the runtime configuration from context
pub fn use_app_config() -> AppConfig {
    let services = use_context::<Services>();
    services.config.clone()
}
