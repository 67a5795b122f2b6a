//! HTTP response model
//!
//! Contains the status line, body, and timing of a received response.

use std::time::Duration;

/// HTTP response as received from the DIP API.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseSpec {
    /// HTTP status code.
    pub status: u16,
    /// Reason phrase reported for the status (e.g., "OK", "Not Found").
    pub status_text: String,
    /// Response body as string (lossy UTF-8).
    pub body: String,
    /// Response time.
    pub duration: Duration,
    /// Response size in bytes.
    pub size: usize,
}

impl ResponseSpec {
    /// Creates a new `ResponseSpec` from raw response data.
    #[must_use]
    pub fn new(
        status: u16,
        status_text: impl Into<String>,
        body: &[u8],
        duration: Duration,
    ) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: String::from_utf8_lossy(body).into_owned(),
            duration,
            size: body.len(),
        }
    }

    /// Returns true if the status code indicates a failure (4xx or 5xx).
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.status >= 400 && self.status < 600
    }

    /// Returns the `message` field of a JSON error body, if any.
    ///
    /// The DIP API reports errors as `{"code": 401, "message": "..."}`.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(&self.body).ok()?;
        value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(ToString::to_string)
    }

    /// Returns a human-readable duration string (e.g., "124 ms").
    #[must_use]
    pub fn duration_display(&self) -> String {
        let millis = self.duration.as_millis();
        if millis < 1000 {
            format!("{millis} ms")
        } else {
            format!("{:.2} s", self.duration.as_secs_f64())
        }
    }
}
