//! Backend endpoint paths, relative to the configured base URL

/// `GET` - reachability check
pub const HEALTH: &str = "/";

/// `GET` - theme catalog
pub const THEMES: &str = "/themes";

/// `POST` - generate a story with images and narration
pub const GENERATE_COMPLETE_STORY: &str = "/generate_complete_story";

/// `POST` multipart - upload the child's photo
pub const UPLOAD_PHOTO: &str = "/upload_photo";

/// Multipart field name carrying the uploaded photo
pub const UPLOAD_FIELD: &str = "file";
