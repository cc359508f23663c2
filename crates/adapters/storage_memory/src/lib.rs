//! # foohub-adapter-storage-memory
//!
//! Process-local persistence adapter.
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `foohub-app::ports::storage`
//! - Keep foos in a map guarded by a read/write lock so concurrent requests
//!   never race on the shared state
//! - Nothing survives a restart
//!
//! ## Dependency rule
//! Depends on `foohub-app` (for port traits) and `foohub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod foo_repo;

pub use error::StorageError;
pub use foo_repo::InMemoryFooRepository;
