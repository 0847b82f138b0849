//! Photo upload service

use storybook_shared::{endpoints, UploadPhotoResponse};

use crate::application::api::{Api, ApiResponse};
use crate::ports::outbound::{ApiError, UploadFile};

/// Largest photo accepted for upload
pub const MAX_PHOTO_BYTES: usize = 10 * 1024 * 1024;

pub const PHOTO_TOO_LARGE_MESSAGE: &str = "사진 파일은 10MB 이하만 올릴 수 있어요.";
pub const PHOTO_NOT_IMAGE_MESSAGE: &str = "이미지 파일만 올릴 수 있어요.";
pub const PHOTO_EMPTY_MESSAGE: &str = "빈 파일은 올릴 수 없어요.";

#[derive(Clone)]
pub struct PhotoService {
    api: Api,
}

impl PhotoService {
    pub fn new(api: Api) -> Self {
        Self { api }
    }

    /// Reject files the backend would refuse anyway, before sending them
    pub fn check(file: &UploadFile) -> Result<(), ApiError> {
        if file.bytes.is_empty() {
            return Err(ApiError::Request(PHOTO_EMPTY_MESSAGE.to_string()));
        }
        if file.bytes.len() > MAX_PHOTO_BYTES {
            return Err(ApiError::Request(PHOTO_TOO_LARGE_MESSAGE.to_string()));
        }
        if !file.content_type.starts_with("image/") {
            return Err(ApiError::Request(PHOTO_NOT_IMAGE_MESSAGE.to_string()));
        }
        Ok(())
    }

    pub async fn upload(&self, file: UploadFile) -> Result<UploadPhotoResponse, ApiError> {
        Self::check(&file)?;
        tracing::info!("Uploading photo {} ({} bytes)", file.file_name, file.bytes.len());
        self.api
            .upload(endpoints::UPLOAD_PHOTO, endpoints::UPLOAD_FIELD, file)
            .await
    }

    /// Upload as a non-throwing response
    pub async fn upload_photo(&self, file: UploadFile) -> ApiResponse<UploadPhotoResponse> {
        let result = self.upload(file).await;
        if let Err(e) = &result {
            tracing::warn!("Photo upload failed: {}", e);
        }
        ApiResponse::from_result(result)
    }
}

/// Guess an image content type from the file extension
pub fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        _ => "application/octet-stream",
    }
}
