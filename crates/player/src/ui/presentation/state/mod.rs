//! State management for the UI
//!
//! The wizard store is a Dioxus signal around the plain `AppState` reducer.

pub mod story_store;

pub use story_store::{use_story_store, StoryStore};
