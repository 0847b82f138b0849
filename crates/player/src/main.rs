//! Storybook Player - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storybook_player::application::api::Api;
use storybook_player::application::services::SessionRepository;
use storybook_player::config::AppConfig;
use storybook_player::infrastructure::audio::EvalAudioAdapter;
use storybook_player::infrastructure::http_client::ApiAdapter;
use storybook_player::ports::outbound::{AudioPort, PlatformPort};
use storybook_player::presentation::Services;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "storybook_player=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    let config = AppConfig::from_env();
    tracing::info!("Starting Storybook Player (api: {})", config.api_url);

    // Platform
    let platform = storybook_player::infrastructure::platform::create_platform();
    let session = Arc::new(SessionRepository::new(platform.storage_adapter()));
    let platform: Arc<dyn PlatformPort> = Arc::new(platform);

    // HTTP
    let raw_api = Arc::new(ApiAdapter::new(&config));
    let api = Api::new(raw_api);

    // Narration
    let audio: Arc<dyn AudioPort> = Arc::new(EvalAudioAdapter);

    let services = Services::new(api, session, audio, config);

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let window = dioxus::desktop::WindowBuilder::new().with_title("나만의 동화책");
        let cfg = dioxus::desktop::Config::new().with_window(window);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(services)
        .launch(storybook_player::ui::app);
}
