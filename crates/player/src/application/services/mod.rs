//! Application services
//!
//! Services translate wizard operations into backend calls. They never write
//! to the store; callers dispatch the results.

pub mod photo_service;
pub mod session_repository;
pub mod story_service;
pub mod theme_service;

pub use photo_service::{PhotoService, MAX_PHOTO_BYTES};
pub use session_repository::{SessionRepository, StoredSession};
pub use story_service::{RequestToken, StoryService};
pub use theme_service::{Fetched, ThemeService};
