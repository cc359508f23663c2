//! Storage-specific error type.

use foohub_domain::error::FooHubError;

/// Errors originating from the in-memory storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A thread panicked while holding the store lock.
    #[error("store lock poisoned")]
    Poisoned,
}

impl From<StorageError> for FooHubError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
