//! Application layer - services, the wizard store and playback control
//!
//! Nothing here touches Dioxus or a concrete adapter; everything external is
//! reached through `crate::ports`.

pub mod api;
pub mod playback;
pub mod services;
pub mod store;

#[cfg(test)]
mod scenarios;
