//! Storage port — the capability set every foo store provides.

use std::future::Future;

use foohub_domain::error::FooHubError;
use foohub_domain::foo::Foo;
use foohub_domain::id::FooId;

/// Repository holding [`Foo`]s keyed by their identifier.
///
/// Implementations own identifier generation: callers hand over a name and
/// receive the stored entity back, never choosing the id themselves.
pub trait FooRepository {
    /// Look up a foo by id.
    ///
    /// Fails with [`FooHubError::NotFound`] when the id was never created or
    /// has since been deleted.
    fn find(&self, id: FooId) -> impl Future<Output = Result<Foo, FooHubError>> + Send;

    /// Store a new foo under a freshly generated id and return it.
    fn save(&self, name: String) -> impl Future<Output = Result<Foo, FooHubError>> + Send;

    /// Remove a foo. Deleting an unknown id is a no-op.
    fn delete(&self, id: FooId) -> impl Future<Output = Result<(), FooHubError>> + Send;
}
