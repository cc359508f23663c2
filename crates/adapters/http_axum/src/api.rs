//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod foos;

use axum::Router;
use axum::routing::{get, post};

use foohub_app::ports::FooRepository;

use crate::router::not_found;
use crate::state::AppState;

/// Build the foo sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: FooRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/foo", post(foos::create::<R>).get(not_found))
        .route("/foo/{id}", get(foos::show::<R>).delete(foos::delete::<R>))
}
