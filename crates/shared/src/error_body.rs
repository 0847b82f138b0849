//! Error bodies returned by the backend on non-2xx responses

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error payload. Backends put the message in `detail`, `message` or `error`.
///
/// `detail` may be a plain string or a list of validation errors
/// (`[{ "loc": [...], "msg": "..." }]`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub detail: Option<Value>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ErrorBody {
    /// Best human-readable message, checking `detail`, then `message`, then `error`
    pub fn message(&self) -> Option<String> {
        self.detail
            .as_ref()
            .and_then(detail_message)
            .or_else(|| self.message.clone().filter(|m| !m.is_empty()))
            .or_else(|| self.error.clone().filter(|m| !m.is_empty()))
    }

    /// Parse a raw response body, returning `None` if it isn't an error object
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str::<ErrorBody>(body).ok()
    }
}

fn detail_message(detail: &Value) -> Option<String> {
    match detail {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_takes_precedence() {
        let body = ErrorBody::parse(r#"{"detail":"Story generation failed","error":"x"}"#)
            .expect("error body");
        assert_eq!(body.message().as_deref(), Some("Story generation failed"));
    }

    #[test]
    fn test_validation_detail_list_is_joined() {
        let body = ErrorBody::parse(
            r#"{"detail":[{"loc":["body","theme"],"msg":"field required"},{"msg":"bad age"}]}"#,
        )
        .expect("error body");
        assert_eq!(body.message().as_deref(), Some("field required; bad age"));
    }

    #[test]
    fn test_message_then_error_fields() {
        let body = ErrorBody::parse(r#"{"message":"Too large"}"#).expect("error body");
        assert_eq!(body.message().as_deref(), Some("Too large"));

        let body = ErrorBody::parse(r#"{"error":"Unsupported type"}"#).expect("error body");
        assert_eq!(body.message().as_deref(), Some("Unsupported type"));
    }

    #[test]
    fn test_non_json_body_is_not_an_error_body() {
        assert!(ErrorBody::parse("<html>Bad Gateway</html>").is_none());
        assert_eq!(
            ErrorBody::parse("{}").and_then(|b| b.message()),
            None
        );
    }
}
