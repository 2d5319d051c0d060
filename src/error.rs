use thiserror::Error;

/// Main error type for contact center API operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request parameters could not be serialized into a JSON body
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[source] serde_json::Error),

    /// The request target is not a valid absolute URL
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The server URL uses a scheme other than http or https
    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    /// The server answered but the payload could not be decoded
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// HTTP transport error (connectivity, DNS, TLS, body read)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A required configuration value is missing
    #[error("missing configuration value: {0}")]
    MissingConfig(&'static str),
}

impl ApiError {
    /// Create a new invalid response error
    pub fn invalid_response(reason: impl Into<String>) -> Self {
        ApiError::InvalidResponse(reason.into())
    }

    /// Check if this error belongs to the "invalid response" umbrella.
    ///
    /// Transport failures count as well: from the caller's point of view no
    /// usable payload came back.
    pub fn is_invalid_response(&self) -> bool {
        matches!(self, ApiError::InvalidResponse(_) | ApiError::Transport(_))
    }

    /// Check if this error was raised before any network activity
    pub fn is_pre_send(&self) -> bool {
        matches!(
            self,
            ApiError::InvalidParameters(_)
                | ApiError::InvalidUrl { .. }
                | ApiError::UnsupportedScheme(_)
                | ApiError::MissingConfig(_)
        )
    }
}

/// Result type for contact center API operations
pub type Result<T> = std::result::Result<T, ApiError>;
