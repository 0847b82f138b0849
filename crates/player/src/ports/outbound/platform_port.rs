//! PlatformPort - Unified platform services interface
//!
//! Object-safe view of the `Platform` container so the UI can hold it as
//! `Arc<dyn PlatformPort>` without naming adapter types.
//!
//! Storage is not part of this port; persisted state goes through
//! `SessionRepository` over `Platform::storage_adapter()`.

use std::{future::Future, pin::Pin};

/// Unified platform services port
///
/// Use via Dioxus context: `use_context::<Arc<dyn PlatformPort>>()`
pub trait PlatformPort: Send + Sync {
    /// Get current time in milliseconds since epoch
    fn now_millis(&self) -> u64;

    /// Sleep for the given number of milliseconds
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;

    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);

    /// Reload the page; false if the platform cannot
    fn reload_page(&self) -> bool;
}
