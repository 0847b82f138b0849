//! Raw API Port - Object-safe HTTP boundary
//!
//! The typed `Api` wrapper in the application layer is generic over request and
//! response types, which makes it unusable behind `Arc<dyn ...>`. Adapters
//! implement this object-safe port instead, speaking `serde_json::Value`.
//!
//! Note: The async methods use `async_trait` instead of returning
//! `Pin<Box<dyn Future>>` for better mockall compatibility.

use serde_json::Value;

use super::ApiError;

/// A file to send as a multipart form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    /// DELETE; an empty response body comes back as `Value::Null`
    async fn delete_json(&self, path: &str) -> Result<Value, ApiError>;

    /// Multipart POST with a single file field.
    ///
    /// Non-2xx responses are detected manually and their JSON error body is
    /// turned into `ApiError::Status`.
    async fn post_multipart(
        &self,
        path: &str,
        field: &str,
        file: UploadFile,
    ) -> Result<Value, ApiError>;

    /// GET that only checks for a 2xx status; the body is ignored
    async fn ping(&self, path: &str) -> Result<(), ApiError>;
}
