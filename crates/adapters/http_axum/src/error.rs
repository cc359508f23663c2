//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use foohub_domain::error::FooHubError;

/// Failure surfaced by an API handler.
///
/// Every variant is answered with an empty body; only the status differs.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Error from the application layer.
    #[error(transparent)]
    Domain(#[from] FooHubError),

    /// The create payload was not valid JSON for the expected shape.
    #[error("malformed request body")]
    Decode(#[source] serde_json::Error),

    /// The create payload held no JSON value at all.
    #[error("empty request body")]
    EmptyBody,
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Domain(FooHubError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Domain(FooHubError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            // FIXME: a malformed payload is a client error and should be a 400.
            Self::Decode(_) | Self::EmptyBody => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Domain(FooHubError::NotFound(err)) => {
                tracing::debug!(error = %err, "lookup miss");
            }
            Self::Domain(FooHubError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
            }
            Self::Decode(err) => {
                tracing::debug!(error = %err, "rejected request body");
            }
            Self::EmptyBody => {
                tracing::debug!("rejected empty request body");
            }
        }

        self.status().into_response()
    }
}
