//! HTTP-based `PlaceSearchProvider` using Nominatim's search API.
//!
//! [`NominatimPlaceSearch`] sends the query text together with the bounds of
//! the query's viewport as a non-binding `viewbox` hint, so nearby places
//! rank higher without excluding distant matches.
//!
//! # Example
//!
//! ```no_run
//! use geo::Coord;
//! use placefinder_core::{PlaceSearchProvider, SearchQuery, Viewport};
//! use placefinder_data::search::{NominatimConfig, NominatimPlaceSearch};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = NominatimConfig::new("https://nominatim.openstreetmap.org")
//!     .with_user_agent("my-app/1.0")
//!     .with_limit(5);
//! let provider = NominatimPlaceSearch::with_config(config)?;
//! let region = Viewport::focused_on(Coord { x: -0.12, y: 51.5 });
//! let places = provider.search(&SearchQuery::new("coffee", region)).await?;
//! # let _ = places;
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use placefinder_core::{Place, PlaceSearchProvider, SearchError, SearchQuery};
use reqwest::Client;
use thiserror::Error;
use url::Url;

use super::nominatim::{SearchResponse, SearchResult};

/// Error type for [`NominatimPlaceSearch`] construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// The configured base URL is not an absolute URL.
    #[error("invalid search service URL {base_url:?}: {source}")]
    InvalidBaseUrl {
        /// Configured base URL.
        base_url: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Default user agent for search requests.
pub const DEFAULT_USER_AGENT: &str = "placefinder/0.1";

/// Default public Nominatim instance.
pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Default maximum number of results per query.
const DEFAULT_LIMIT: u8 = 10;

/// Configuration for [`NominatimPlaceSearch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NominatimConfig {
    /// Base URL of the Nominatim service.
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
    /// Maximum number of results per query.
    pub limit: u8,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl NominatimConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the maximum number of results per query.
    #[must_use]
    pub const fn with_limit(mut self, limit: u8) -> Self {
        self.limit = limit;
        self
    }
}

/// Place search backed by a Nominatim server.
#[derive(Debug, Clone)]
pub struct NominatimPlaceSearch {
    client: Client,
    config: NominatimConfig,
    endpoint: Url,
}

impl NominatimPlaceSearch {
    /// Create a provider with default configuration for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client fails to
    /// build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(NominatimConfig::new(base_url))
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client fails to
    /// build.
    pub fn with_config(config: NominatimConfig) -> Result<Self, ProviderBuildError> {
        let endpoint = Url::parse(&format!(
            "{}/search",
            config.base_url.trim_end_matches('/')
        ))
        .map_err(|source| ProviderBuildError::InvalidBaseUrl {
            base_url: config.base_url.clone(),
            source,
        })?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        Ok(Self {
            client,
            config,
            endpoint,
        })
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &NominatimConfig {
        &self.config
    }

    /// Build the search URL for `query`.
    ///
    /// The viewbox is `min_lon,min_lat,max_lon,max_lat` of the query region.
    fn build_search_url(&self, query: &SearchQuery) -> Url {
        let bounds = query.region.bounds();
        let viewbox = format!(
            "{},{},{},{}",
            bounds.min().x,
            bounds.min().y,
            bounds.max().x,
            bounds.max().y
        );
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", query.text.trim())
            .append_pair("format", "jsonv2")
            .append_pair("addressdetails", "1")
            .append_pair("limit", &self.config.limit.to_string())
            .append_pair("viewbox", &viewbox);
        url
    }

    /// Convert a reqwest error to a `SearchError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &Url) -> SearchError {
        if error.is_timeout() {
            return SearchError::Timeout {
                url: url.to_string(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return SearchError::HttpError {
                url: url.to_string(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        SearchError::NetworkError {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

/// Convert a decoded response into places, skipping unusable results.
fn convert_response(response: SearchResponse) -> Result<Vec<Place>, SearchError> {
    match response {
        SearchResponse::Failure { error } => {
            let (code, message) = error.into_parts();
            Err(SearchError::ServiceError { code, message })
        }
        SearchResponse::Results(results) => Ok(results
            .into_iter()
            .filter_map(convert_result)
            .collect()),
    }
}

fn convert_result(result: SearchResult) -> Option<Place> {
    let display_name = result.display_name.clone();
    result
        .into_place()
        .map_err(|err| log::warn!("skipping search result {display_name:?}: {err}"))
        .ok()
}

#[async_trait]
impl PlaceSearchProvider for NominatimPlaceSearch {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Place>, SearchError> {
        let url = self.build_search_url(query);
        log::debug!("searching places: {url}");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        let body: SearchResponse =
            response
                .json()
                .await
                .map_err(|err| SearchError::ParseError {
                    message: err.to_string(),
                })?;

        convert_response(body)
    }
}
