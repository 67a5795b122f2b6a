//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! It handles all HTTP communication with the DIP API.

use std::error::Error as _;
use std::future::Future;
use std::time::Instant;

use dip_application::ports::{HttpClient, HttpClientError};
use dip_domain::{request::RequestDescriptor, response::ResponseSpec};
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use tracing::debug;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("dip-client/", env!("CARGO_PKG_VERSION"));

/// HTTP client implementation using reqwest.
///
/// Wraps `reqwest::Client` and implements the `HttpClient` port from the
/// application layer.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client with default settings.
    ///
    /// Default configuration:
    /// - No request timeout (transport default)
    /// - Follow redirects: reqwest default policy
    /// - TLS verification: enabled
    /// - User-Agent: `dip-client/<version>`
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Maps reqwest errors to the port's `HttpClientError`.
    fn map_error(error: &reqwest::Error) -> HttpClientError {
        let message = describe(error);

        if error.is_timeout() {
            return HttpClientError::Timeout(message);
        }

        if error.is_connect() {
            let lowered = message.to_lowercase();
            let host = error
                .url()
                .and_then(|u| u.host_str())
                .unwrap_or("unknown")
                .to_string();
            if lowered.contains("dns") || lowered.contains("resolve") || lowered.contains("lookup")
            {
                return HttpClientError::DnsError { host, message };
            }
            if lowered.contains("refused") {
                return HttpClientError::ConnectionRefused {
                    host,
                    port: error
                        .url()
                        .and_then(reqwest::Url::port_or_known_default)
                        .unwrap_or(80),
                };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_builder() {
            return HttpClientError::InvalidUrl(message);
        }

        HttpClientError::Other(message)
    }
}

/// Renders an error together with its sources.
///
/// reqwest keeps the interesting part ("Connection refused", "failed to
/// lookup address") in the source chain, not in its own message.
fn describe(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

impl HttpClient for ReqwestHttpClient {
    fn execute(
        &self,
        request: &RequestDescriptor,
    ) -> impl Future<Output = Result<ResponseSpec, HttpClientError>> + Send {
        // Build what we need before moving into the async block
        let url = request.to_url();
        let authorization = request.authorization();

        async move {
            let url = url?;
            debug!(%url, "sending GET");

            let start = Instant::now();

            let response = self
                .client
                .get(url)
                .header(AUTHORIZATION, authorization)
                .send()
                .await
                .map_err(|e| Self::map_error(&e))?;

            let status = response.status();
            let reason = status.canonical_reason().unwrap_or("Unknown");

            let body = response
                .bytes()
                .await
                .map_err(|e| HttpClientError::Body(describe(&e)))?;

            let duration = start.elapsed();
            debug!(status = status.as_u16(), bytes = body.len(), "response received");

            Ok::<_, HttpClientError>(ResponseSpec::new(status.as_u16(), reason, &body, duration))
        }
    }
}
