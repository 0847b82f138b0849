//! API error taxonomy shared by every HTTP-facing port
//!
//! Failures fall into three classes:
//! 1. the server answered with an error status,
//! 2. the request went out but no answer came back (network down, timeout),
//! 3. the request could not be built at all.
//!
//! `user_message` turns any of them into the Korean text shown to the user.

use thiserror::Error;

pub const BAD_REQUEST_MESSAGE: &str = "잘못된 요청입니다. 입력한 정보를 확인해 주세요.";
pub const UNAUTHORIZED_MESSAGE: &str = "인증이 필요합니다. 다시 시도해 주세요.";
pub const FORBIDDEN_MESSAGE: &str = "접근 권한이 없습니다.";
pub const NOT_FOUND_MESSAGE: &str = "요청한 정보를 찾을 수 없습니다.";
pub const REQUEST_TIMEOUT_MESSAGE: &str = "요청 시간이 초과되었습니다. 잠시 후 다시 시도해 주세요.";
pub const RATE_LIMITED_MESSAGE: &str = "요청이 너무 많습니다. 잠시 후 다시 시도해 주세요.";
pub const SERVER_ERROR_MESSAGE: &str = "서버 내부 오류가 발생했습니다. 잠시 후 다시 시도해 주세요.";
pub const GATEWAY_ERROR_MESSAGE: &str = "서버 게이트웨이 오류가 발생했습니다. 잠시 후 다시 시도해 주세요.";
pub const SERVICE_UNAVAILABLE_MESSAGE: &str =
    "서비스를 일시적으로 사용할 수 없습니다. 잠시 후 다시 시도해 주세요.";
pub const TIMEOUT_MESSAGE: &str =
    "서버 응답 시간이 초과되었습니다. 서버가 바쁘거나 불안정할 수 있으니 잠시 후 다시 시도해 주세요.";
pub const UNREACHABLE_MESSAGE: &str =
    "서버에 연결할 수 없습니다. 인터넷 연결이나 서버 상태를 확인해 주세요.";

/// Which side of the wire a failure happened on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// A response arrived, but it was an error or unreadable
    ServerResponded,
    /// The request was sent and nothing came back
    NoResponse,
    /// The request was never sent
    NotSent,
}

/// Errors from HTTP calls to the story backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Server responded with a non-2xx status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// No response within the configured timeout
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Request was sent but the server could not be reached
    #[error("No response from server: {0}")]
    Unreachable(String),

    /// Request could not be constructed
    #[error("Failed to build request: {0}")]
    Request(String),

    /// Response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Request body could not be serialized
    #[error("Failed to serialize request: {0}")]
    SerializeError(String),
}

impl ApiError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn class(&self) -> FailureClass {
        match self {
            ApiError::Status { .. } | ApiError::ParseError(_) => FailureClass::ServerResponded,
            ApiError::Timeout { .. } | ApiError::Unreachable(_) => FailureClass::NoResponse,
            ApiError::Request(_) | ApiError::SerializeError(_) => FailureClass::NotSent,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Timeout { .. })
            || matches!(self, ApiError::Status { status: 408, .. })
    }

    /// Human-readable message for the error screen
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { status, message } => status_message(*status, message),
            ApiError::Timeout { .. } => TIMEOUT_MESSAGE.to_string(),
            ApiError::Unreachable(_) => UNREACHABLE_MESSAGE.to_string(),
            ApiError::Request(msg) | ApiError::ParseError(msg) | ApiError::SerializeError(msg) => {
                msg.clone()
            }
        }
    }
}

/// Map a status code to its user-facing message.
///
/// `detail` is the message extracted from the error body; it only appears for
/// codes without a dedicated message.
pub fn status_message(status: u16, detail: &str) -> String {
    match status {
        400 => BAD_REQUEST_MESSAGE.to_string(),
        401 => UNAUTHORIZED_MESSAGE.to_string(),
        403 => FORBIDDEN_MESSAGE.to_string(),
        404 => NOT_FOUND_MESSAGE.to_string(),
        408 => REQUEST_TIMEOUT_MESSAGE.to_string(),
        429 => RATE_LIMITED_MESSAGE.to_string(),
        500 => SERVER_ERROR_MESSAGE.to_string(),
        502 | 504 => GATEWAY_ERROR_MESSAGE.to_string(),
        503 => SERVICE_UNAVAILABLE_MESSAGE.to_string(),
        _ => format!("서버 오류 ({}): {}", status, detail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: u16) -> ApiError {
        ApiError::Status {
            status,
            message: "backend detail".to_string(),
        }
    }

    #[test]
    fn test_known_status_codes_have_dedicated_messages() {
        assert_eq!(status(400).user_message(), BAD_REQUEST_MESSAGE);
        assert_eq!(status(401).user_message(), UNAUTHORIZED_MESSAGE);
        assert_eq!(status(403).user_message(), FORBIDDEN_MESSAGE);
        assert_eq!(status(404).user_message(), NOT_FOUND_MESSAGE);
        assert_eq!(status(408).user_message(), REQUEST_TIMEOUT_MESSAGE);
        assert_eq!(status(429).user_message(), RATE_LIMITED_MESSAGE);
        assert_eq!(status(500).user_message(), SERVER_ERROR_MESSAGE);
        assert_eq!(status(502).user_message(), GATEWAY_ERROR_MESSAGE);
        assert_eq!(status(503).user_message(), SERVICE_UNAVAILABLE_MESSAGE);
        assert_eq!(status(504).user_message(), GATEWAY_ERROR_MESSAGE);
    }

    #[test]
    fn test_unknown_status_uses_generic_template() {
        assert_eq!(status(418).user_message(), "서버 오류 (418): backend detail");
        assert_eq!(status(507).user_message(), "서버 오류 (507): backend detail");
    }

    #[test]
    fn test_failure_classes() {
        assert_eq!(status(503).class(), FailureClass::ServerResponded);
        assert_eq!(
            ApiError::Timeout { timeout_ms: 10 }.class(),
            FailureClass::NoResponse
        );
        assert_eq!(
            ApiError::Unreachable("connection refused".into()).class(),
            FailureClass::NoResponse
        );
        assert_eq!(
            ApiError::Request("relative URL without a base".into()).class(),
            FailureClass::NotSent
        );
    }

    #[test]
    fn test_timeout_and_unreachable_messages_are_distinct() {
        let timeout = ApiError::Timeout { timeout_ms: 600_000 };
        let unreachable = ApiError::Unreachable("dns error".into());

        assert!(timeout.is_timeout());
        assert_eq!(timeout.user_message(), TIMEOUT_MESSAGE);
        assert_eq!(unreachable.user_message(), UNREACHABLE_MESSAGE);
        assert_ne!(timeout.user_message(), unreachable.user_message());
    }

    #[test]
    fn test_unexpected_errors_surface_raw_text() {
        let err = ApiError::ParseError("missing field `story`".into());
        assert_eq!(err.user_message(), "missing field `story`");
        assert_eq!(err.status_code(), None);
    }
}
