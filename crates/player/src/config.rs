//! Runtime configuration
//!
//! Read once at start-up. Desktop reads the process environment (after
//! `dotenvy` has loaded `.env`); the web build bakes the same variables in at
//! compile time. Invalid values are logged and replaced by defaults.

/// Default backend base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default per-request timeout. Story generation is slow, so this is generous.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10 * 60 * 1000;

/// Default pause between a narration ending and the auto-play advance.
pub const DEFAULT_AUTOPLAY_DELAY_MS: u64 = 1_500;

pub const ENV_API_URL: &str = "STORYBOOK_API_URL";
pub const ENV_REQUEST_TIMEOUT_MS: &str = "STORYBOOK_REQUEST_TIMEOUT_MS";
pub const ENV_REQUIRE_PHOTO: &str = "STORYBOOK_REQUIRE_PHOTO";
pub const ENV_AUTOPLAY_DELAY_MS: &str = "STORYBOOK_AUTOPLAY_DELAY_MS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL every endpoint path is joined onto
    pub api_url: String,
    pub request_timeout_ms: u64,
    /// Whether the profile form insists on a photo
    pub require_photo: bool,
    pub autoplay_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            require_photo: false,
            autoplay_delay_ms: DEFAULT_AUTOPLAY_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// Load configuration for the current target.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration for the current target.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                ENV_API_URL => option_env!("STORYBOOK_API_URL"),
                ENV_REQUEST_TIMEOUT_MS => option_env!("STORYBOOK_REQUEST_TIMEOUT_MS"),
                ENV_REQUIRE_PHOTO => option_env!("STORYBOOK_REQUIRE_PHOTO"),
                ENV_AUTOPLAY_DELAY_MS => option_env!("STORYBOOK_AUTOPLAY_DELAY_MS"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_url = match lookup(ENV_API_URL).map(|v| v.trim().to_string()) {
            Some(raw) if raw.is_empty() => defaults.api_url,
            Some(raw) => match url::Url::parse(&raw) {
                Ok(_) => raw.trim_end_matches('/').to_string(),
                Err(e) => {
                    tracing::warn!("Invalid {}={:?} ({}), using {}", ENV_API_URL, raw, e, DEFAULT_API_URL);
                    defaults.api_url
                }
            },
            None => defaults.api_url,
        };

        Self {
            api_url,
            request_timeout_ms: parse_millis(
                &lookup,
                ENV_REQUEST_TIMEOUT_MS,
                defaults.request_timeout_ms,
            ),
            require_photo: parse_flag(&lookup, ENV_REQUIRE_PHOTO, defaults.require_photo),
            autoplay_delay_ms: parse_millis(&lookup, ENV_AUTOPLAY_DELAY_MS, defaults.autoplay_delay_ms),
        }
    }
}

fn parse_millis(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u64) -> u64 {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<u64>() {
        Ok(0) => {
            tracing::warn!("{} must be positive, using {}", key, default);
            default
        }
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Invalid {}={:?} ({}), using {}", key, raw, e, default);
            default
        }
    }
}

fn parse_flag(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> bool {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" | "" => false,
        other => {
            tracing::warn!("Invalid {}={:?}, using {}", key, other, default);
            default
        }
    }
}
