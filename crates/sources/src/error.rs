//! Error types for talking to the upstream film-data service.

use thiserror::Error;

/// Errors that can occur while fetching films from the upstream provider.
///
/// A missing film is NOT an error: providers report it as `Ok(None)`.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The HTTP request itself failed (connection refused, DNS, timeout...)
    #[error("Request to upstream failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream returned {status} for {url}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    /// Upstream answered, but the body is not a film payload
    #[error("Failed to decode upstream response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Provider-specific failure that does not fit the HTTP variants
    #[error("Upstream unavailable: {0}")]
    Unavailable(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, FetchError>;
