//! DIP Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod persistence;

pub use adapters::{ReqwestHttpClient, USER_AGENT};
pub use persistence::{SettingsError, SettingsRepository};
