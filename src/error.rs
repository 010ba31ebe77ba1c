use thiserror::Error;

/// Errors raised while talking to the MLB Stats API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Scripted failure from `MockClient`
    #[cfg(any(test, feature = "development"))]
    #[error("Mock failure: {0}")]
    Mock(String),
}

/// Errors raised while normalizing a raw game feed into a snapshot
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnapshotError {
    #[error("Malformed game feed: {0}")]
    Malformed(String),
}

/// Failure of one refresh tick, either transport or payload shape
#[derive(Error, Debug)]
pub enum RefreshError {
    #[error(transparent)]
    Fetch(#[from] ApiError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}
