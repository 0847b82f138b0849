//! reqwest-backed `RawApiPort` for desktop builds

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde_json::Value;

use super::{join_url, parse_body, status_error};
use crate::config::AppConfig;
use crate::ports::outbound::{ApiError, RawApiPort, UploadFile};

/// HTTP adapter for the story backend
#[derive(Clone)]
pub struct ApiAdapter {
    client: Client,
    base_url: String,
    timeout_ms: u64,
}

impl ApiAdapter {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder().build().unwrap_or_else(|e| {
            tracing::error!("Failed to build HTTP client, falling back to defaults: {}", e);
            Client::new()
        });

        Self::with_client(client, &config.api_url, config.request_timeout_ms)
    }

    fn with_client(client: Client, base_url: &str, timeout_ms: u64) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_ms,
        }
    }

    fn transport_error(&self, e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::Timeout {
                timeout_ms: self.timeout_ms,
            }
        } else if e.is_builder() {
            ApiError::Request(e.to_string())
        } else {
            ApiError::Unreachable(e.to_string())
        }
    }

    /// Send and return the raw 2xx body.
    ///
    /// The timeout is set per request and covers connecting, the headers and
    /// the whole body, whatever client the adapter was built with.
    async fn send_text(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request
            .timeout(Duration::from_millis(self.timeout_ms))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            tracing::debug!("Backend responded {}: {}", status, body);
            return Err(status_error(status.as_u16(), &body));
        }
        Ok(body)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, ApiError> {
        let body = self.send_text(request).await?;
        parse_body(&body)
    }
}

#[async_trait::async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = join_url(&self.base_url, path)?;
        tracing::debug!("GET {}", url);
        self.send(self.client.get(url)).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = join_url(&self.base_url, path)?;
        tracing::debug!("POST {}", url);
        self.send(self.client.post(url).json(body)).await
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = join_url(&self.base_url, path)?;
        tracing::debug!("PUT {}", url);
        self.send(self.client.put(url).json(body)).await
    }

    async fn delete_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = join_url(&self.base_url, path)?;
        tracing::debug!("DELETE {}", url);
        self.send(self.client.delete(url)).await
    }

    async fn post_multipart(
        &self,
        path: &str,
        field: &str,
        file: UploadFile,
    ) -> Result<Value, ApiError> {
        let url = join_url(&self.base_url, path)?;
        tracing::debug!("POST multipart {} ({} bytes)", url, file.bytes.len());

        let part = reqwest::multipart::Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part(field.to_string(), part);

        self.send(self.client.post(url).multipart(form)).await
    }

    async fn ping(&self, path: &str) -> Result<(), ApiError> {
        let url = join_url(&self.base_url, path)?;
        self.send_text(self.client.get(url)).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response on a local port
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        format!("http://{}", addr)
    }

    fn adapter(base_url: &str, timeout_ms: u64) -> ApiAdapter {
        let client = Client::builder()
            .no_proxy()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .unwrap();
        ApiAdapter::with_client(client, base_url, timeout_ms)
    }

    #[tokio::test]
    async fn test_get_json_success() {
        let base = serve_once("200 OK", r#"{"themes":[]}"#).await;
        let value = adapter(&base, 5_000).get_json("/themes").await.unwrap();
        assert_eq!(value, serde_json::json!({"themes": []}));
    }

    #[tokio::test]
    async fn test_error_status_carries_detail() {
        let base = serve_once(
            "503 Service Unavailable",
            r#"{"detail":"generation queue full"}"#,
        )
        .await;

        let err = adapter(&base, 5_000)
            .post_json("/generate_complete_story", &serde_json::json!({}))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ApiError::Status {
                status: 503,
                message: "generation queue full".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_ping_ignores_body() {
        let base = serve_once("200 OK", "Storybook API is running").await;
        assert!(adapter(&base, 5_000).ping("/").await.is_ok());
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let err = adapter(&base, 200).get_json("/themes").await.unwrap_err();
        assert_eq!(err, ApiError::Timeout { timeout_ms: 200 });
    }

    #[tokio::test]
    async fn test_stalled_body_times_out_without_client_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{\"themes\"")
                .await
                .unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        // A client with no timeout of its own, like the fallback in `new`
        let client = Client::builder().no_proxy().build().unwrap();
        let adapter = ApiAdapter::with_client(client, &base, 200);

        let err = adapter.get_json("/themes").await.unwrap_err();
        assert_eq!(err, ApiError::Timeout { timeout_ms: 200 });
    }
}
