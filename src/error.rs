#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed response from {endpoint}: {source}")]
    MalformedResponse {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No internet connection and no cached data available")]
    NoConnectivity,

    #[error("Dapp with ID {0} not found")]
    NotFound(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DirectoryError {
    /// Whether this failure came from the remote source and may be answered
    /// from a local fallback instead.
    ///
    /// Storage, lookup and argument errors are never transient.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            DirectoryError::Network(_) | DirectoryError::MalformedResponse { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
