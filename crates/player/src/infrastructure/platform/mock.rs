//! In-memory platform for tests
//!
//! Storage lives in a shared map so a test can keep a handle to it and
//! inspect what the code under test persisted.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::{future::Future, pin::Pin};

use crate::ports::outbound::platform::{
    DocumentProvider, SleepProvider, StorageProvider, TimeProvider,
};
use crate::state::Platform;

/// Fixed clock
#[derive(Clone, Default)]
pub struct MockTimeProvider {
    millis: u64,
}

impl TimeProvider for MockTimeProvider {
    fn now_millis(&self) -> u64 {
        self.millis
    }
}

/// Sleep that completes immediately
#[derive(Clone, Default)]
pub struct MockSleepProvider;

impl SleepProvider for MockSleepProvider {
    fn sleep_ms(&self, _ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(std::future::ready(()))
    }
}

/// Map-backed storage
#[derive(Clone, Default)]
pub struct MockStorageProvider {
    data: Arc<RwLock<HashMap<String, String>>>,
}

impl MockStorageProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.data.read().map(|d| d.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageProvider for MockStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut data) = self.data.write() {
            data.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.data.read().ok().and_then(|d| d.get(key).cloned())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut data) = self.data.write() {
            data.remove(key);
        }
    }
}

/// Document that records the last title and never reloads
#[derive(Clone, Default)]
pub struct MockDocumentProvider {
    title: Arc<RwLock<Option<String>>>,
}

impl MockDocumentProvider {
    pub fn title(&self) -> Option<String> {
        self.title.read().ok().and_then(|t| t.clone())
    }
}

impl DocumentProvider for MockDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Ok(mut slot) = self.title.write() {
            *slot = Some(title.to_string());
        }
    }

    fn reload(&self) -> bool {
        false
    }
}

/// Builder for a `Platform` made of mock providers
#[derive(Default)]
pub struct MockPlatformBuilder {
    time: MockTimeProvider,
    storage: MockStorageProvider,
    document: MockDocumentProvider,
}

impl MockPlatformBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_time_millis(mut self, millis: u64) -> Self {
        self.time = MockTimeProvider { millis };
        self
    }

    /// Share an existing storage handle with the built platform
    pub fn with_storage(mut self, storage: MockStorageProvider) -> Self {
        self.storage = storage;
        self
    }

    pub fn with_document(mut self, document: MockDocumentProvider) -> Self {
        self.document = document;
        self
    }

    pub fn build(self) -> Platform {
        Platform::new(self.time, MockSleepProvider, self.storage, self.document)
    }
}
