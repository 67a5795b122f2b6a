//! HTTP Response domain types

mod outcome;
mod spec;

pub use outcome::{ResponseOutcome, render_json};
pub use spec::ResponseSpec;
