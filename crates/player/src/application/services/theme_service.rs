//! Theme catalog service
//!
//! The catalog never blocks the wizard: when the backend cannot provide it,
//! the built-in catalog is used instead. The substitution is reported as
//! `Fetched::Degraded` so callers (and tests) can tell the two apart.

use storybook_domain::{fallback_catalog, Theme};
use storybook_shared::{endpoints, ThemesResponse};

use crate::application::api::{Api, ApiResponse};
use crate::ports::outbound::ApiError;

/// A value fetched remotely, or a local stand-in when the fetch failed
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Live(T),
    Degraded { fallback: T, error: ApiError },
}

impl<T> Fetched<T> {
    pub fn value(&self) -> &T {
        match self {
            Fetched::Live(value) => value,
            Fetched::Degraded { fallback, .. } => fallback,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Fetched::Live(value) => value,
            Fetched::Degraded { fallback, .. } => fallback,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Fetched::Degraded { .. })
    }

    /// The failure that caused the fallback, if any
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Fetched::Live(_) => None,
            Fetched::Degraded { error, .. } => Some(error),
        }
    }
}

#[derive(Clone)]
pub struct ThemeService {
    api: Api,
}

impl ThemeService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Fetch the catalog, falling back to the built-in list on any failure.
    ///
    /// An empty remote catalog counts as a failure.
    pub async fn fetch_catalog(&self) -> Fetched<Vec<Theme>> {
        let error = match self
            .api
            .get_with_error::<ThemesResponse>(endpoints::THEMES)
            .await
        {
            Ok(response) if !response.themes.is_empty() => {
                tracing::debug!("Loaded {} themes from backend", response.themes.len());
                return Fetched::Live(response.themes);
            }
            Ok(_) => ApiError::ParseError("theme catalog is empty".to_string()),
            Err(e) => e,
        };

        tracing::warn!("Theme catalog unavailable, using built-in catalog: {}", error);
        Fetched::Degraded {
            fallback: fallback_catalog(),
            error,
        }
    }

    /// Catalog as a non-throwing response. Always successful.
    pub async fn get_themes(&self) -> ApiResponse<ThemesResponse> {
        let themes = self.fetch_catalog().await.into_value();
        ApiResponse::ok(ThemesResponse { themes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockRawApiPort;
    use serde_json::json;
    use std::sync::Arc;
    use storybook_domain::ThemeValue;

    fn service(mock: MockRawApiPort) -> ThemeService {
        ThemeService::new(Api::new(Arc::new(mock)))
    }

    #[tokio::test]
    async fn test_live_catalog() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .withf(|path| path == "/themes")
            .returning(|_| {
                Ok(json!({
                    "themes": [
                        { "value": "safety_habits", "name": "안전 습관", "description": "길을 건널 때", "emoji": "🚦" }
                    ]
                }))
            });

        let fetched = service(mock).fetch_catalog().await;

        assert!(!fetched.is_degraded());
        assert_eq!(fetched.value().len(), 1);
        assert_eq!(fetched.value()[0].value, ThemeValue::SafetyHabits);
    }

    #[tokio::test]
    async fn test_network_failure_degrades_to_fallback() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .returning(|_| Err(ApiError::Unreachable("connection refused".into())));

        let fetched = service(mock).fetch_catalog().await;

        assert!(fetched.is_degraded());
        assert_eq!(
            fetched.error(),
            Some(&ApiError::Unreachable("connection refused".into()))
        );
        assert_eq!(fetched.into_value(), fallback_catalog());
    }

    #[tokio::test]
    async fn test_get_themes_succeeds_even_when_backend_fails() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json().returning(|_| {
            Err(ApiError::Status {
                status: 500,
                message: "boom".into(),
            })
        });

        let response = service(mock).get_themes().await;

        assert!(response.success);
        assert_eq!(response.error, None);
        assert_eq!(
            response.data,
            Some(ThemesResponse {
                themes: fallback_catalog()
            })
        );
    }

    #[tokio::test]
    async fn test_empty_catalog_is_degraded() {
        let mut mock = MockRawApiPort::new();
        mock.expect_get_json()
            .returning(|_| Ok(json!({ "themes": [] })));

        let fetched = service(mock).fetch_catalog().await;
        assert!(fetched.is_degraded());
        assert_eq!(fetched.value().len(), ThemeValue::ALL.len());
    }
}
