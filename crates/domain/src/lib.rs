//! DIP Domain - Core business types
//!
//! This crate defines the domain model for the DIP API client.
//! All types here are pure Rust with no I/O dependencies.

pub mod credential;
pub mod error;
pub mod request;
pub mod resource;
pub mod response;
pub mod settings;

pub use credential::{ApiKey, DEFAULT_API_KEY};
pub use error::{DomainError, DomainResult};
pub use request::{QueryParam, QueryParams, RequestDescriptor};
pub use resource::{FilterKind, FilterSpec, ResourceType, SelectOption};
pub use response::{ResponseOutcome, ResponseSpec, render_json};
pub use settings::{ApiSettings, DEFAULT_BASE_URL};
