//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with external systems without
//! depending on concrete implementations.

pub mod api_port;
pub mod audio_port;
pub mod platform;
pub mod platform_port;
pub mod raw_api_port;

pub use api_port::{ApiError, FailureClass};
pub use audio_port::{AudioFuture, AudioOutcome, AudioPort};
pub use platform::{storage_keys, DocumentProvider, SleepProvider, StorageProvider, TimeProvider};
pub use platform_port::PlatformPort;
pub use raw_api_port::{RawApiPort, UploadFile};

#[cfg(any(test, feature = "testing"))]
pub use audio_port::MockAudioPort;
#[cfg(any(test, feature = "testing"))]
pub use raw_api_port::MockRawApiPort;
