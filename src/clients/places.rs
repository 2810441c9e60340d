use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::{Error, Result};
use crate::models::{DetailsResponse, SearchResponse};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Client for the places web API. One outbound request per call, no retry,
/// no caching. Use [`PlacesClient::new`] for production or
/// [`PlacesClient::with_base_url`] to point at a mock server in tests.
#[derive(Clone)]
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl PlacesClient {
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("places-etl/", env!("CARGO_PKG_VERSION")))
            .build()?;

        // Ensure exactly one trailing slash so join() appends the endpoint
        // path instead of replacing the last segment.
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized)
            .map_err(|e| Error::Config(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Nearby-search for restaurants matching `keyword` around `location`
    /// within `radius` meters. Returns the response envelope with results in
    /// the order the service sent them.
    pub async fn search(
        &self,
        keyword: &str,
        location: &str,
        radius: &str,
    ) -> Result<SearchResponse> {
        let url = self.build_url(
            "place/nearbysearch/json",
            &[
                ("location", location),
                ("radius", radius),
                ("type", "restaurant"),
                ("keyword", keyword),
            ],
        )?;

        self.get_json(url).await
    }

    /// Details lookup for a single place identifier.
    pub async fn details(&self, place_id: &str) -> Result<DetailsResponse> {
        let url = self.build_url("place/details/json", &[("placeid", place_id)])?;
        self.get_json(url).await
    }

    /// Builds the endpoint URL with percent-encoded query parameters. The
    /// key is always appended last and never logged.
    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| Error::Config(format!("invalid endpoint '{endpoint}': {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let endpoint = url.path().to_string();
        debug!(endpoint = %endpoint, "sending request");

        let response = self.client.get(url).send().await?;
        debug!(
            endpoint = %endpoint,
            status = response.status().as_u16(),
            "response received"
        );

        let response = response.error_for_status()?;
        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|e| {
            let body_str = String::from_utf8_lossy(&body);
            error!(
                error = %e,
                endpoint = %endpoint,
                body = %body_str,
                "Failed to parse response"
            );
            Error::Json(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> PlacesClient {
        PlacesClient::with_base_url("test-key", base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn build_url_appends_endpoint_and_key() {
        let client = test_client("https://maps.example.com/maps/api");
        let url = client
            .build_url("place/details/json", &[("placeid", "abc")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://maps.example.com/maps/api/place/details/json?placeid=abc&key=test-key"
        );
    }

    #[test]
    fn build_url_tolerates_trailing_slash() {
        let client = test_client("https://maps.example.com/maps/api/");
        let url = client
            .build_url("place/details/json", &[("placeid", "abc")])
            .unwrap();
        assert!(url.as_str().starts_with("https://maps.example.com/maps/api/place/details/json"));
    }

    #[test]
    fn build_url_percent_encodes_parameters() {
        let client = test_client("https://maps.example.com/maps/api");
        let url = client
            .build_url("place/nearbysearch/json", &[("keyword", "fish & chips")])
            .unwrap();
        assert!(
            url.as_str().contains("fish+%26+chips") || url.as_str().contains("fish%20%26%20chips"),
            "keyword should be percent-encoded: {url}"
        );
    }
}
