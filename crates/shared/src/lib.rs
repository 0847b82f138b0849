//! Storybook Protocol - Wire types for the story-generation backend
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and the domain vocabulary
//! 2. **No business logic** - Pure data types and serialization
//! 3. **WASM compatible** - Must compile for both native and wasm32 targets
//! 4. **Lenient decoding** - Optional backend fields default instead of failing

pub mod endpoints;
pub mod error_body;
pub mod requests;
pub mod responses;

pub use error_body::ErrorBody;
pub use requests::{ChildProfileData, StoryRequest};
pub use responses::{
    CompleteStoryResponse, FileInfo, FlatStoryResponse, SceneData, StoryData, StoryPayload,
    ThemesResponse, UploadPhotoResponse,
};
