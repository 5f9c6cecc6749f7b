//! Request-path error definitions.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors that can occur while building a routing payload response.
#[derive(Debug, Error)]
pub enum EndpointError {
    /// The `callback` parameter failed JSONP grammar validation.
    #[error("Invalid JSONP callback value")]
    InvalidCallback,

    /// A present config section has the wrong shape. Operator mistake,
    /// never silently defaulted.
    #[error("Malformed exposure config: {0}")]
    ConfigMalformed(String),

    /// Exposure config file could not be read.
    #[error("Exposure config read failed: {0}")]
    ExposureIo(#[from] std::io::Error),

    /// Exposure config file could not be parsed.
    #[error("Exposure config parse failed: {0}")]
    ExposureParse(#[from] toml::de::Error),

    /// Payload serialization failed.
    #[error("Payload serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl EndpointError {
    /// HTTP status this error surfaces as.
    pub fn status(&self) -> StatusCode {
        match self {
            EndpointError::InvalidCallback => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for EndpointError {
    fn into_response(self) -> Response {
        match &self {
            // Client errors carry their short diagnostic.
            EndpointError::InvalidCallback => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            // Server errors are logged in full but answered generically.
            _ => {
                tracing::error!(error = %self, "Failed to build routing response");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
