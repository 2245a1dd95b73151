use thiserror::Error;

/// Errors returned by the analysis API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Low-level connection failure; the server was never reached.
    #[error("network error: cannot connect to the server")]
    Network(#[source] reqwest::Error),

    /// The per-request bound expired before a response arrived.
    #[error("request timed out")]
    Timeout(#[source] reqwest::Error),

    /// Non-2xx HTTP response. `message` is extracted from the structured
    /// error body when possible, falling back to the raw body text.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// A 2xx response body did not match the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Any other failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),
}

impl ApiError {
    /// Classifies a `reqwest::Error` into the taxonomy above.
    pub(crate) fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ApiError::Timeout(error)
        } else if error.is_connect() {
            ApiError::Network(error)
        } else {
            ApiError::Http(error)
        }
    }

    /// Reduces the error to a single human-readable string for display.
    ///
    /// Common failure statuses get friendlier copy; everything else falls
    /// back to the extracted server message or a generic statement. Never
    /// exposes a raw error chain to the UI.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Timeout(_) => {
                "The request took too long to complete. Please try again.".to_string()
            }
            ApiError::Network(_) => {
                "Cannot connect to the server. Please check your internet connection and try again."
                    .to_string()
            }
            ApiError::Status { status: 422, .. } => {
                "The server could not process the request. Please check the product information and try again."
                    .to_string()
            }
            ApiError::Status { status: 404, .. } => {
                "Nothing was found for this request. Please check the barcode and try again."
                    .to_string()
            }
            ApiError::Status { status: 500, .. } => {
                "The server encountered an error. Please try again later.".to_string()
            }
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Deserialize { .. } | ApiError::InvalidBaseUrl { .. } | ApiError::Http(_) => {
                "An unexpected error occurred. Please try again.".to_string()
            }
        }
    }
}
