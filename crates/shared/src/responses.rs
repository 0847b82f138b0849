//! Response bodies returned by the backend

use serde::{Deserialize, Serialize};
use storybook_domain::Theme;

/// `GET /themes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemesResponse {
    pub themes: Vec<Theme>,
}

/// One scene as generated by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneData {
    pub scene_number: u32,
    /// Older backends call this field `text`
    #[serde(default, alias = "text")]
    pub content: String,
    #[serde(default)]
    pub image_description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub narration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryData {
    pub title: String,
    #[serde(default)]
    pub moral: String,
    pub scenes: Vec<SceneData>,
}

/// `POST /generate_complete_story` (current nested shape)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompleteStoryResponse {
    pub story: StoryData,
    #[serde(default)]
    pub character_image_url: Option<String>,
}

/// Legacy flat shape `{ title, moral, scenes, character_image_url }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatStoryResponse {
    pub title: String,
    #[serde(default)]
    pub moral: String,
    pub scenes: Vec<SceneData>,
    #[serde(default)]
    pub character_image_url: Option<String>,
}

/// Either response shape of the generation endpoint.
///
/// The nested shape is tried first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoryPayload {
    Nested(CompleteStoryResponse),
    Flat(FlatStoryResponse),
}

impl From<StoryPayload> for CompleteStoryResponse {
    fn from(payload: StoryPayload) -> Self {
        match payload {
            StoryPayload::Nested(response) => response,
            StoryPayload::Flat(flat) => CompleteStoryResponse {
                story: StoryData {
                    title: flat.title,
                    moral: flat.moral,
                    scenes: flat.scenes,
                },
                character_image_url: flat.character_image_url,
            },
        }
    }
}

/// Metadata echoed back after a photo upload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInfo {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub size: Option<u64>,
}

/// `POST /upload_photo`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadPhotoResponse {
    pub image_url: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub file_info: FileInfo,
}
