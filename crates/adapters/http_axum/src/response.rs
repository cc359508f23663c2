//! Newline-terminated JSON response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Serializes `T` as compact JSON followed by a single `\n`.
///
/// Unlike [`axum::Json`], the trailing newline lets line-oriented clients
/// (curl, shell pipelines) read one document per line. The media type is
/// stamped by the router, not here.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLine<T>(pub T);

impl<T: Serialize> IntoResponse for JsonLine<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(mut buf) => {
                buf.push(b'\n');
                buf.into_response()
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to encode response body");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[derive(Serialize)]
    struct Sample {
        id: &'static str,
    }

    #[tokio::test]
    async fn should_terminate_body_with_newline() {
        let response = JsonLine(Sample { id: "123" }).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"{\"id\":\"123\"}\n");
    }
}
