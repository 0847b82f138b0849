//! HTTP adapters for `RawApiPort`
//!
//! Desktop uses reqwest, the browser uses gloo-net. Both share URL joining and
//! error-body handling from this module so the two targets classify failures
//! identically.

#[cfg(not(target_arch = "wasm32"))]
mod desktop;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::ApiAdapter;
#[cfg(target_arch = "wasm32")]
pub use wasm::ApiAdapter;

#[cfg(any(target_arch = "wasm32", test))]
use std::{future::Future, pin::pin};

#[cfg(any(target_arch = "wasm32", test))]
use futures_util::future::{select, Either};
use serde_json::Value;
use storybook_shared::ErrorBody;
use url::Url;

use crate::ports::outbound::ApiError;

/// Join an endpoint path onto the base URL.
///
/// The base URL's own path is kept, so `https://host/api` + `/themes` gives
/// `https://host/api/themes`.
pub(crate) fn join_url(base_url: &str, path: &str) -> Result<Url, ApiError> {
    let base = format!("{}/", base_url.trim_end_matches('/'));
    let base = Url::parse(&base)
        .map_err(|e| ApiError::Request(format!("invalid base URL {:?}: {}", base_url, e)))?;
    base.join(path.trim_start_matches('/'))
        .map_err(|e| ApiError::Request(format!("invalid path {:?}: {}", path, e)))
}

/// Build the error for a non-2xx response from its raw body.
///
/// The message comes from the JSON error body when there is one, otherwise
/// from the body text itself.
pub(crate) fn status_error(status: u16, body: &str) -> ApiError {
    let message = ErrorBody::parse(body)
        .and_then(|b| b.message())
        .unwrap_or_else(|| {
            let text = body.trim();
            if text.is_empty() {
                format!("HTTP {}", status)
            } else {
                text.to_string()
            }
        });
    ApiError::Status { status, message }
}

/// Decode a 2xx body. An empty body is `Value::Null`.
pub(crate) fn parse_body(body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| ApiError::ParseError(e.to_string()))
}

/// Run `exchange` unless `timer` fires first. The loser is dropped.
///
/// `exchange` must cover the whole request, body read included.
#[cfg(any(target_arch = "wasm32", test))]
pub(crate) async fn race_timeout<T>(
    exchange: impl Future<Output = Result<T, ApiError>>,
    timer: impl Future<Output = ()>,
    timeout_ms: u64,
) -> Result<T, ApiError> {
    match select(pin!(exchange), pin!(timer)).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(ApiError::Timeout { timeout_ms }),
    }
}
