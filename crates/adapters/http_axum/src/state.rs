//! Shared application state for axum handlers.

use std::sync::Arc;

use foohub_app::ports::FooRepository;
use foohub_app::services::foo_service::FooService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Foo create/read/delete service.
    pub foo_service: Arc<FooService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            foo_service: Arc::clone(&self.foo_service),
        }
    }
}

impl<R> AppState<R>
where
    R: FooRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(foo_service: FooService<R>) -> Self {
        Self {
            foo_service: Arc::new(foo_service),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    pub fn from_arc(foo_service: Arc<FooService<R>>) -> Self {
        Self { foo_service }
    }
}
