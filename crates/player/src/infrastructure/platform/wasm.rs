//! WASM platform implementations
//!
//! Provides platform-specific implementations for the browser using
//! web-sys, js-sys and gloo-timers.

use crate::ports::outbound::platform::{
    DocumentProvider, SleepProvider, StorageProvider, TimeProvider,
};
use crate::state::Platform;
use std::{future::Future, pin::Pin};

/// WASM time provider using `Date.now()`
#[derive(Clone, Default)]
pub struct WasmTimeProvider;

impl TimeProvider for WasmTimeProvider {
    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// WASM storage provider using `window.localStorage`
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl WasmStorageProvider {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match Self::local_storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    tracing::error!("Failed to write localStorage key {}: {:?}", key, e);
                }
            }
            None => tracing::warn!("localStorage unavailable; {} not saved", key),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        Self::local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::error!("Failed to remove localStorage key {}: {:?}", key, e);
            }
        }
    }
}

/// WASM document provider
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }

    fn reload(&self) -> bool {
        match web_sys::window().map(|w| w.location().reload()) {
            Some(Ok(())) => true,
            Some(Err(e)) => {
                tracing::error!("Failed to reload page: {:?}", e);
                false
            }
            None => false,
        }
    }
}

/// WASM sleep provider using gloo-timers
#[derive(Clone, Default)]
pub struct WasmSleepProvider;

impl SleepProvider for WasmSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        let ms = ms.min(u32::MAX as u64) as u32;
        Box::pin(gloo_timers::future::TimeoutFuture::new(ms))
    }
}

/// Create platform services for the browser
pub fn create_platform() -> Platform {
    Platform::new(
        WasmTimeProvider,
        WasmSleepProvider,
        WasmStorageProvider,
        WasmDocumentProvider,
    )
}
