//! Page-level views, one per wizard step

pub mod profile_form;
pub mod story_error;
pub mod story_loading;
pub mod story_page;
pub mod story_viewer;
pub mod theme_picker;
