use thiserror::Error;

/// Errors from [`crate::search::PlaceSearchProvider::search`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The request did not complete within the configured timeout.
    #[error("search request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Timeout that elapsed, in seconds.
        timeout_secs: u64,
    },
    /// The service answered with a non-success HTTP status.
    #[error("search request to {url} failed with status {status}: {message}")]
    HttpError {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Description from the HTTP client.
        message: String,
    },
    /// The request could not be sent or the connection failed.
    #[error("network error while requesting {url}: {message}")]
    NetworkError {
        /// Requested URL.
        url: String,
        /// Description from the HTTP client.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("failed to parse search response: {message}")]
    ParseError {
        /// Decoder error description.
        message: String,
    },
    /// The service reported an error in an otherwise well-formed response.
    #[error("search service returned error {code}: {message}")]
    ServiceError {
        /// Service error code.
        code: String,
        /// Service error message.
        message: String,
    },
}
