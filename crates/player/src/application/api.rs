//! Typed API wrapper for application services.
//!
//! `Api` wraps an `Arc<dyn RawApiPort>` and layers serde_json conversions on
//! top, so services deal in request/response types while adapters stay
//! object-safe.
//!
//! Two surfaces are offered:
//! - `*_with_error` methods return `Result<T, ApiError>` for callers that
//!   branch on the failure;
//! - `get` / `post` / `put` / `delete` never fail and fold the outcome into an
//!   `ApiResponse`, with the error already turned into its user message.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;

use storybook_shared::endpoints;

use crate::ports::outbound::{ApiError, RawApiPort, UploadFile};

/// Uniform outcome of a non-throwing API call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Fold a typed result, replacing the error with its user message
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::failure(e.user_message()),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self.error.unwrap_or_default()),
        }
    }
}

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }

    pub async fn get_with_error<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.raw.get_json(path).await?;
        decode(value)
    }

    pub async fn post_with_error<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body_value = encode(body)?;
        let value = self.raw.post_json(path, &body_value).await?;
        decode(value)
    }

    pub async fn put_with_error<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body_value = encode(body)?;
        let value = self.raw.put_json(path, &body_value).await?;
        decode(value)
    }

    pub async fn delete_with_error<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.raw.delete_json(path).await?;
        decode(value)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        logged(path, self.get_with_error(path).await)
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResponse<T> {
        logged(path, self.post_with_error(path, body).await)
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResponse<T> {
        logged(path, self.put_with_error(path, body).await)
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResponse<T> {
        logged(path, self.delete_with_error(path).await)
    }

    /// Multipart upload of a single file field
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        field: &str,
        file: UploadFile,
    ) -> Result<T, ApiError> {
        let value = self.raw.post_multipart(path, field, file).await?;
        decode(value)
    }

    /// Whether the backend answers at all. Never fails.
    pub async fn health_check(&self) -> bool {
        match self.raw.ping(endpoints::HEALTH).await {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("Health check failed: {}", e);
                false
            }
        }
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::SerializeError(e.to_string()))
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))
}

fn logged<T>(path: &str, result: Result<T, ApiError>) -> ApiResponse<T> {
    if let Err(e) = &result {
        tracing::error!("API call {} failed: {}", path, e);
    }
    ApiResponse::from_result(result)
}
