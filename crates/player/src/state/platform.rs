//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates all platform-specific service implementations behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` in infrastructure/platform/desktop.rs or wasm.rs
//! - Injected into Dioxus context by `main.rs` as `Arc<dyn PlatformPort>`
//! - Accessed in UI via `use_platform()`

use std::{future::Future, pin::Pin, sync::Arc};

use crate::ports::outbound::{
    DocumentProvider, PlatformPort, SleepProvider, StorageProvider, TimeProvider,
};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    time: Arc<dyn TimeProviderDyn>,
    sleep: Arc<dyn SleepProviderDyn>,
    storage: Arc<dyn StorageProviderDyn>,
    document: Arc<dyn DocumentProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait TimeProviderDyn: Send + Sync {
    fn now_millis(&self) -> u64;
}

trait SleepProviderDyn: Send + Sync {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

trait StorageProviderDyn: Send + Sync {
    fn save(&self, key: &str, value: &str);
    fn load(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

trait DocumentProviderDyn: Send + Sync {
    fn set_page_title(&self, title: &str);
    fn reload(&self) -> bool;
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: TimeProvider + Send + Sync> TimeProviderDyn for T {
    fn now_millis(&self) -> u64 {
        TimeProvider::now_millis(self)
    }
}

impl<T: SleepProvider + Send + Sync> SleepProviderDyn for T {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        SleepProvider::sleep_ms(self, ms)
    }
}

impl<T: StorageProvider + Send + Sync> StorageProviderDyn for T {
    fn save(&self, key: &str, value: &str) {
        StorageProvider::save(self, key, value)
    }
    fn load(&self, key: &str) -> Option<String> {
        StorageProvider::load(self, key)
    }
    fn remove(&self, key: &str) {
        StorageProvider::remove(self, key)
    }
}

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
    fn reload(&self) -> bool {
        DocumentProvider::reload(self)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<Tm, Sl, S, D>(time: Tm, sleep: Sl, storage: S, document: D) -> Self
    where
        Tm: TimeProvider + Send + Sync,
        Sl: SleepProvider + Send + Sync,
        S: StorageProvider + Send + Sync,
        D: DocumentProvider + Send + Sync,
    {
        Self {
            time: Arc::new(time),
            sleep: Arc::new(sleep),
            storage: Arc::new(storage),
            document: Arc::new(document),
        }
    }

    /// Get a StorageProvider adapter for use with application services
    ///
    /// This allows `SessionRepository` to use Platform's storage without
    /// exposing internal implementation details.
    ///
    /// # Example
    /// ```ignore
    /// let repository = SessionRepository::new(platform.storage_adapter());
    /// let session = repository.load();
    /// ```
    pub fn storage_adapter(&self) -> PlatformStorageAdapter {
        PlatformStorageAdapter {
            storage: self.storage.clone(),
        }
    }
}

// =============================================================================
// Storage adapter for application services
// =============================================================================

/// Adapter that allows application services to use Platform's storage
///
/// This implements the StorageProvider port trait, delegating to Platform's
/// internal storage.
#[derive(Clone)]
pub struct PlatformStorageAdapter {
    storage: Arc<dyn StorageProviderDyn>,
}

impl StorageProvider for PlatformStorageAdapter {
    fn save(&self, key: &str, value: &str) {
        self.storage.save(key, value)
    }

    fn load(&self, key: &str) -> Option<String> {
        self.storage.load(key)
    }

    fn remove(&self, key: &str) {
        self.storage.remove(key)
    }
}

// =============================================================================
// PlatformPort implementation - lets the UI hold `Arc<dyn PlatformPort>`
// =============================================================================

impl PlatformPort for Platform {
    fn now_millis(&self) -> u64 {
        self.time.now_millis()
    }

    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        self.sleep.sleep_ms(ms)
    }

    fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }

    fn reload_page(&self) -> bool {
        self.document.reload()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::MockPlatformBuilder;
    use crate::ports::outbound::storage_keys;

    #[test]
    fn test_storage_adapters_share_platform_storage() {
        let platform = MockPlatformBuilder::new().build();
        let writer = platform.storage_adapter();
        let reader = platform.clone().storage_adapter();

        StorageProvider::save(&writer, storage_keys::SELECTED_THEME, "safety_habits");
        assert_eq!(
            StorageProvider::load(&reader, storage_keys::SELECTED_THEME).as_deref(),
            Some("safety_habits")
        );

        StorageProvider::remove(&reader, storage_keys::SELECTED_THEME);
        assert_eq!(StorageProvider::load(&writer, storage_keys::SELECTED_THEME), None);
    }

    #[test]
    fn test_mock_time_is_fixed() {
        let platform = MockPlatformBuilder::new().with_time_millis(42_000).build();
        assert_eq!(platform.now_millis(), 42_000);
        assert!(!platform.reload_page());
    }
}
