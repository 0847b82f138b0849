//! Infrastructure layer - External adapters

pub mod audio;
pub mod http_client;
pub mod platform;
