//! Audio Port - single shared narration player
//!
//! There is exactly one audio element. Starting a new track or stopping
//! settles the previous track's future with `Interrupted`.

use std::{future::Future, pin::Pin};

/// How a started track finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioOutcome {
    /// Played to the end
    Ended,
    /// Replaced by another track or stopped
    Interrupted,
    /// Could not be loaded or played
    Failed,
}

/// Resolves when the started track stops playing for good
pub type AudioFuture = Pin<Box<dyn Future<Output = AudioOutcome> + 'static>>;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait AudioPort: Send + Sync {
    /// Load `url` into the shared element and start playing it
    fn play(&self, url: &str) -> AudioFuture;

    fn pause(&self);

    fn resume(&self);

    /// Stop and rewind; settles any pending `play` future
    fn stop(&self);
}
