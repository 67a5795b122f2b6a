//! Fetch document use case.
//!
//! Turns the user's form input into one authenticated GET request and
//! classifies the answer for display.

use std::sync::Arc;

use dip_domain::{
    ApiKey, ApiSettings, QueryParam, QueryParams, RequestDescriptor, ResourceType,
    ResponseOutcome, ResponseSpec,
};
use tracing::{debug, info, warn};

use crate::error::{FetchError, FetchResult};
use crate::ports::HttpClient;

/// Input for a fetch, as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchInput {
    /// API key; blank means "use the configured default".
    pub api_key: String,
    /// Resource to query.
    pub resource: ResourceType,
    /// Optional document identifier.
    pub identifier: String,
    /// Raw `key=value&key=value` query string.
    pub query: String,
    /// Extra parameters appended after the raw query, duplicates allowed.
    pub filters: Vec<QueryParam>,
}

impl FetchInput {
    /// Creates an input for the given resource with everything else empty.
    #[must_use]
    pub fn new(resource: ResourceType) -> Self {
        Self {
            resource,
            ..Self::default()
        }
    }

    /// Sets the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Sets the document identifier.
    #[must_use]
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    /// Sets the raw query string.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Appends a filter parameter.
    #[must_use]
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push(QueryParam::new(key, value));
        self
    }
}

/// Output of a successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    /// The requested URL including the query string.
    pub url: String,
    /// HTTP status of the response.
    pub status: u16,
    /// Classified body.
    pub outcome: ResponseOutcome,
}

impl FetchOutput {
    /// Returns the text to display.
    #[must_use]
    pub fn display_text(&self) -> &str {
        self.outcome.display_text()
    }
}

/// Use case for fetching one DIP resource.
///
/// Each call is independent: nothing is cached or retained between fetches.
///
/// # Example
///
/// ```ignore
/// let client = Arc::new(ReqwestHttpClient::new()?);
/// let use_case = FetchDocument::new(client, ApiSettings::default());
///
/// let input = FetchInput::new(ResourceType::Person).with_identifier("1234");
/// let output = use_case.execute(&input).await?;
/// println!("{}", output.display_text());
/// ```
pub struct FetchDocument<C: HttpClient> {
    client: Arc<C>,
    settings: ApiSettings,
}

impl<C: HttpClient> FetchDocument<C> {
    /// Creates a new `FetchDocument` use case.
    #[must_use]
    pub const fn new(client: Arc<C>, settings: ApiSettings) -> Self {
        Self { client, settings }
    }

    /// Builds the request descriptor without sending anything.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Validation`] if no API key is available or the
    /// query string cannot be decoded.
    pub fn prepare(&self, input: &FetchInput) -> FetchResult<RequestDescriptor> {
        let api_key = ApiKey::resolve(&input.api_key, &self.settings.default_api_key)?;

        let mut query = QueryParams::parse(&input.query)?;
        query.extend(input.filters.iter().cloned());

        Ok(
            RequestDescriptor::new(self.settings.base_url.clone(), input.resource, api_key)
                .with_identifier(&input.identifier)
                .with_query(query),
        )
    }

    /// Sends the request and classifies the response.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Validation`] when the input is unusable and
    /// [`FetchError::Request`] when the transport fails or the API answers
    /// with a 4xx/5xx status.
    pub async fn execute(&self, input: &FetchInput) -> FetchResult<FetchOutput> {
        let descriptor = self.prepare(input)?;
        let url = descriptor.to_url()?.to_string();

        debug!(%url, path = %descriptor.endpoint_path(), "fetch started");

        let response = self.client.execute(&descriptor).await.map_err(|e| {
            warn!(%url, error = %e, "fetch failed");
            FetchError::from(e)
        })?;

        if response.is_error() {
            warn!(%url, status = response.status, "fetch failed");
            return Err(FetchError::Request(status_failure_message(&response, &url)));
        }

        info!(
            status = response.status,
            size = response.size,
            elapsed = %response.duration_display(),
            "fetch finished"
        );

        Ok(FetchOutput {
            url,
            status: response.status,
            outcome: ResponseOutcome::classify(&response.body),
        })
    }
}

/// Describes an HTTP error status, e.g.
/// `404 Client Error: Not Found for url: https://...`.
///
/// The API's own `message` is appended when the body carries one.
fn status_failure_message(response: &ResponseSpec, url: &str) -> String {
    let class = if response.status < 500 {
        "Client Error"
    } else {
        "Server Error"
    };
    let base = format!(
        "{} {class}: {} for url: {url}",
        response.status, response.status_text
    );
    match response.error_message() {
        Some(detail) => format!("{base} ({detail})"),
        None => base,
    }
}
