//! Storybook domain vocabulary.
//!
//! Types in this crate are valid by construction: a `ChildProfile` always has a
//! usable name and a supported age, a `CompleteStory` always has contiguous scenes.
//! Transport shapes live in `storybook-shared`; conversions happen in the player.

pub mod error;
pub mod profile;
pub mod story;
pub mod theme;
pub mod wizard;

pub use error::DomainError;
pub use profile::{
    ChildAge, ChildName, ChildProfile, Gender, ProfileDraft, ProfileField, ProfileFormErrors,
    MAX_NAME_CHARS,
};
pub use story::{CompleteStory, StoryScene};
pub use theme::{fallback_catalog, Theme, ThemeValue};
pub use wizard::{WizardPhase, WizardStep};
