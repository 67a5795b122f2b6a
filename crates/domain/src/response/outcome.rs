//! Classification and rendering of response bodies.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// What a successful fetch yields for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// The body was valid JSON; holds the re-rendered text.
    Structured(String),
    /// The body was not JSON; holds it unchanged.
    Text(String),
}

impl ResponseOutcome {
    /// Classifies a response body.
    ///
    /// JSON bodies are rendered with 2-space indentation, literal non-ASCII
    /// characters and object keys in received order. Anything else is kept
    /// verbatim.
    #[must_use]
    pub fn classify(body: &str) -> Self {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| render_json(&value).ok())
            .map_or_else(|| Self::Text(body.to_string()), Self::Structured)
    }

    /// Returns the text to display.
    #[must_use]
    pub fn display_text(&self) -> &str {
        match self {
            Self::Structured(text) | Self::Text(text) => text,
        }
    }
}

/// Serializes a value as pretty JSON with 2-space indentation.
///
/// No trailing newline is written. Non-ASCII characters are emitted as-is.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn render_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    // serde_json only writes valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
