//! Request descriptor for a single DIP API call

use url::Url;

use crate::credential::ApiKey;
use crate::error::{DomainError, DomainResult};
use crate::resource::ResourceType;

use super::QueryParams;

/// Everything needed to issue one GET request against the DIP API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// API root, e.g. `https://search.dip.bundestag.de/api/v1`
    pub base_url: String,
    /// Resource selector
    pub resource: ResourceType,
    /// Optional document identifier, already trimmed and non-empty
    pub identifier: Option<String>,
    /// Query parameters in send order
    pub query: QueryParams,
    /// Resolved credential
    pub api_key: ApiKey,
}

impl RequestDescriptor {
    /// Creates a descriptor for a resource listing without parameters.
    #[must_use]
    pub fn new(base_url: impl Into<String>, resource: ResourceType, api_key: ApiKey) -> Self {
        Self {
            base_url: base_url.into(),
            resource,
            identifier: None,
            query: QueryParams::new(),
            api_key,
        }
    }

    /// Sets the identifier; blank input clears it.
    #[must_use]
    pub fn with_identifier(mut self, identifier: &str) -> Self {
        let trimmed = identifier.trim();
        self.identifier = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    /// Sets the query parameters.
    #[must_use]
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Returns `/<resource>` or `/<resource>/<identifier>`, unencoded.
    ///
    /// A `/` inside the identifier separates path segments here and in
    /// [`Self::to_url`].
    #[must_use]
    pub fn endpoint_path(&self) -> String {
        match &self.identifier {
            Some(id) => format!("/{}/{id}", self.resource.as_str()),
            None => format!("/{}", self.resource.as_str()),
        }
    }

    /// Returns the value of the `Authorization` header.
    #[must_use]
    pub fn authorization(&self) -> String {
        self.api_key.authorization_value()
    }

    /// Builds the complete request URL including the query string.
    ///
    /// The path matches [`Self::endpoint_path`]; characters that are not
    /// allowed in a path segment are percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if the base URL is not an
    /// absolute http(s) URL.
    pub fn to_url(&self) -> DomainResult<Url> {
        let base = self.base_url.trim();
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(DomainError::InvalidUrl(format!(
                "URL must start with http:// or https://: {base}"
            )));
        }

        let mut url =
            Url::parse(base).map_err(|e| DomainError::InvalidUrl(format!("{e}: {base}")))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| DomainError::InvalidUrl(format!("cannot be a base: {base}")))?;
            segments.pop_if_empty().push(self.resource.as_str());
            if let Some(id) = &self.identifier {
                segments.extend(id.split('/'));
            }
        }

        url.set_query(None);
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.pairs());
        }
        Ok(url)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::request::QueryParam;
    use pretty_assertions::assert_eq;

    const BASE: &str = "https://search.dip.bundestag.de/api/v1";

    fn descriptor(resource: ResourceType) -> RequestDescriptor {
        RequestDescriptor::new(BASE, resource, ApiKey::default())
    }

    #[test]
    fn test_endpoint_path_without_identifier() {
        for resource in ResourceType::all() {
            let d = descriptor(*resource);
            assert_eq!(d.endpoint_path(), format!("/{resource}"));
            assert!(!d.endpoint_path().contains("//"));
        }
    }

    #[test]
    fn test_endpoint_path_with_identifier() {
        for resource in ResourceType::all() {
            let d = descriptor(*resource).with_identifier(" 12345 ");
            assert_eq!(d.endpoint_path(), format!("/{resource}/12345"));
        }
    }

    #[test]
    fn test_blank_identifier_is_ignored() {
        let d = descriptor(ResourceType::Person).with_identifier("   ");
        assert_eq!(d.identifier, None);
        assert_eq!(d.endpoint_path(), "/person");
    }

    #[test]
    fn test_url_concatenates_base_and_path() {
        let d = descriptor(ResourceType::DrucksacheText).with_identifier("68852");
        let url = d.to_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://search.dip.bundestag.de/api/v1/drucksache-text/68852"
        );
    }

    #[test]
    fn test_slash_in_identifier_matches_endpoint_path() {
        let d = descriptor(ResourceType::Vorgang).with_identifier("12/34");
        let url = d.to_url().unwrap();
        assert_eq!(d.endpoint_path(), "/vorgang/12/34");
        assert_eq!(url.path(), format!("/api/v1{}", d.endpoint_path()));
    }

    #[test]
    fn test_identifier_is_percent_encoded_in_url() {
        let d = descriptor(ResourceType::Person).with_identifier("a b");
        assert_eq!(d.endpoint_path(), "/person/a b");
        assert_eq!(d.to_url().unwrap().path(), "/api/v1/person/a%20b");
    }

    #[test]
    fn test_trailing_slash_in_base() {
        let d = RequestDescriptor::new(
            format!("{BASE}/"),
            ResourceType::Vorgang,
            ApiKey::default(),
        );
        assert_eq!(d.to_url().unwrap().path(), "/api/v1/vorgang");
    }

    #[test]
    fn test_query_blank_values_preserved() {
        let query = QueryParams::parse("f.wahlperiode=20&f.titel=").unwrap();
        let d = descriptor(ResourceType::Vorgang).with_query(query);
        let url = d.to_url().unwrap();
        assert_eq!(url.query(), Some("f.wahlperiode=20&f.titel="));
    }

    #[test]
    fn test_query_is_encoded() {
        let mut query = QueryParams::new();
        query.extend([
            QueryParam::new("f.titel", "Klima schutz"),
            QueryParam::new("f.urheber", "Bündnis 90/Die Grünen"),
        ]);
        let d = descriptor(ResourceType::Drucksache).with_query(query);
        let url = d.to_url().unwrap();
        let decoded: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            decoded,
            vec![
                ("f.titel".to_string(), "Klima schutz".to_string()),
                ("f.urheber".to_string(), "Bündnis 90/Die Grünen".to_string()),
            ]
        );
    }

    #[test]
    fn test_no_query_means_no_question_mark() {
        let url = descriptor(ResourceType::Person).to_url().unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_invalid_base_url() {
        let d = RequestDescriptor::new("not a url", ResourceType::Vorgang, ApiKey::default());
        assert!(matches!(d.to_url(), Err(DomainError::InvalidUrl(_))));

        let d = RequestDescriptor::new("https://", ResourceType::Vorgang, ApiKey::default());
        assert!(matches!(d.to_url(), Err(DomainError::InvalidUrl(_))));
    }

    #[test]
    fn test_authorization_header() {
        let d = RequestDescriptor::new(BASE, ResourceType::Vorgang, ApiKey::new("abc"));
        assert_eq!(d.authorization(), "ApiKey abc");
    }
}
