//! Axum router assembly.

use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::routing::get;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use foohub_app::ports::FooRepository;

use crate::state::AppState;

/// Media type stamped on every response.
pub const APPLICATION_JSON: &str = "application/json";

/// Body served on `GET /`.
pub const GREETING: &str = "Hello, Rakuten!\n";

/// Build the top-level axum [`Router`].
///
/// Registers the root greeting and the foo API as distinct routes, stamps
/// `Content-Type: application/json` on every response, and includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG` level
/// using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: FooRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(greeting))
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .fallback(not_found)
        .layer(SetResponseHeaderLayer::overriding(
            CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_JSON),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn greeting() -> &'static str {
    GREETING
}

async fn health_check() -> &'static str {
    "OK"
}

pub(crate) async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
