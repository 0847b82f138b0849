//! gloo-net backed `RawApiPort` for the browser
//!
//! `fetch` has no timeout of its own, so every exchange (send and body read)
//! races a `TimeoutFuture`. An exchange that loses the race is abandoned.

use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;

use super::{join_url, parse_body, race_timeout, status_error};
use crate::config::AppConfig;
use crate::ports::outbound::{ApiError, RawApiPort, UploadFile};

/// HTTP adapter for the story backend
#[derive(Clone)]
pub struct ApiAdapter {
    base_url: String,
    timeout_ms: u64,
}

impl ApiAdapter {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            timeout_ms: config.request_timeout_ms,
        }
    }

    fn url(&self, path: &str) -> Result<String, ApiError> {
        join_url(&self.base_url, path).map(|u| u.to_string())
    }

    async fn send_text(&self, request: Request) -> Result<String, ApiError> {
        let timer = TimeoutFuture::new(self.timeout_ms.min(u32::MAX as u64) as u32);
        let exchange = async {
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Unreachable(e.to_string()))?;
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Unreachable(e.to_string()))?;
            Ok((response.ok(), response.status(), body))
        };
        let (ok, status, body) = race_timeout(exchange, timer, self.timeout_ms).await?;

        if !ok {
            tracing::debug!("Backend responded {}: {}", status, body);
            return Err(status_error(status, &body));
        }
        Ok(body)
    }

    async fn send(&self, request: Request) -> Result<Value, ApiError> {
        let body = self.send_text(request).await?;
        parse_body(&body)
    }

    fn build(builder: RequestBuilder) -> Result<Request, ApiError> {
        builder.build().map_err(|e| ApiError::Request(e.to_string()))
    }

    fn build_json(builder: RequestBuilder, body: &Value) -> Result<Request, ApiError> {
        builder
            .json(body)
            .map_err(|e| ApiError::SerializeError(e.to_string()))
    }
}

fn form_data(field: &str, file: &UploadFile) -> Result<web_sys::FormData, ApiError> {
    let js_error = |e: wasm_bindgen::JsValue| ApiError::Request(format!("{:?}", e));

    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::new();
    parts.push(&bytes);

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&file.content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_error)?;

    let form = web_sys::FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(field, &blob, &file.file_name)
        .map_err(js_error)?;
    Ok(form)
}

#[async_trait::async_trait(?Send)]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url(path)?;
        tracing::debug!("GET {}", url);
        self.send(Self::build(Request::get(&url))?).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = self.url(path)?;
        tracing::debug!("POST {}", url);
        self.send(Self::build_json(Request::post(&url), body)?).await
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = self.url(path)?;
        tracing::debug!("PUT {}", url);
        self.send(Self::build_json(Request::put(&url), body)?).await
    }

    async fn delete_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url(path)?;
        tracing::debug!("DELETE {}", url);
        self.send(Self::build(Request::delete(&url))?).await
    }

    async fn post_multipart(
        &self,
        path: &str,
        field: &str,
        file: UploadFile,
    ) -> Result<Value, ApiError> {
        let url = self.url(path)?;
        tracing::debug!("POST multipart {} ({} bytes)", url, file.bytes.len());

        let form = form_data(field, &file)?;
        let request = Request::post(&url)
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        self.send(request).await
    }

    async fn ping(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path)?;
        self.send_text(Self::build(Request::get(&url))?).await.map(|_| ())
    }
}
