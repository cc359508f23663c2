//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`FooHubError`] via `From`.

/// Top-level error returned by ports and services.
#[derive(Debug, thiserror::Error)]
pub enum FooHubError {
    /// The requested item does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The backing store failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Lookup miss for a given entity kind and identifier.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
