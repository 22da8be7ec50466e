// Error types for the resolution core

use thiserror::Error;

/// Failure at the catalog fetch boundary. Timeouts and transport failures
/// look the same to the resolver; nothing here is retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {url} ({status})")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Everything a resolution call can fail with. Raised once, propagated
/// unchanged to the caller; no error kind is silently recovered.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Malformed user input, detected before any network call
    #[error("invalid version spec '{0}'")]
    InvalidVersionSpec(String),

    /// The catalog fetched fine but nothing matched the requested spec
    #[error("could not find satisfying version for '{0}'")]
    NoSatisfyingVersion(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
