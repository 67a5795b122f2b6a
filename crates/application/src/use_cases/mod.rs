//! Application use cases (business logic orchestration).

mod fetch_document;

pub use fetch_document::{FetchDocument, FetchInput, FetchOutput};
