//! In-memory implementation of [`FooRepository`].

use std::collections::HashMap;
use std::future::Future;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use foohub_app::ports::FooRepository;
use foohub_domain::error::{FooHubError, NotFoundError};
use foohub_domain::foo::Foo;
use foohub_domain::id::FooId;

use crate::error::StorageError;

/// Map-backed foo repository, safe to share across request tasks.
///
/// Only the name is stored per id; the entity is rebuilt on lookup.
#[derive(Debug, Default)]
pub struct InMemoryFooRepository {
    items: RwLock<HashMap<FooId, String>>,
}

impl InMemoryFooRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with the given `(id, name)` pairs.
    ///
    /// Intended for fixtures; regular writes always go through
    /// [`FooRepository::save`] so the store picks the id.
    #[must_use]
    pub fn seeded<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<FooId>,
        V: Into<String>,
    {
        let items = entries
            .into_iter()
            .map(|(id, name)| (id.into(), name.into()))
            .collect();
        Self {
            items: RwLock::new(items),
        }
    }

    /// Number of stored foos.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Poisoned`] if a writer panicked.
    pub fn len(&self) -> Result<usize, StorageError> {
        Ok(self.read()?.len())
    }

    /// Whether the store holds no foos.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Poisoned`] if a writer panicked.
    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<FooId, String>>, StorageError> {
        self.items.read().map_err(|_| StorageError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<FooId, String>>, StorageError> {
        self.items.write().map_err(|_| StorageError::Poisoned)
    }

    fn find_sync(&self, id: FooId) -> Result<Foo, FooHubError> {
        let items = self.read()?;
        match items.get(&id) {
            Some(name) => Ok(Foo::with_id(id, name.clone())),
            None => Err(NotFoundError {
                entity: "Foo",
                id: id.into_inner(),
            }
            .into()),
        }
    }

    fn save_sync(&self, name: String) -> Result<Foo, FooHubError> {
        let foo = Foo::new(name);
        self.write()?.insert(foo.id.clone(), foo.name.clone());
        Ok(foo)
    }

    fn delete_sync(&self, id: &FooId) -> Result<(), FooHubError> {
        if self.write()?.remove(id).is_none() {
            tracing::trace!(%id, "delete of unknown foo ignored");
        }
        Ok(())
    }
}

// The lock is released before the returned future is created, so it is never
// held across an await point.
impl FooRepository for InMemoryFooRepository {
    fn find(&self, id: FooId) -> impl Future<Output = Result<Foo, FooHubError>> + Send {
        let result = self.find_sync(id);
        async { result }
    }

    fn save(&self, name: String) -> impl Future<Output = Result<Foo, FooHubError>> + Send {
        let result = self.save_sync(name);
        async { result }
    }

    fn delete(&self, id: FooId) -> impl Future<Output = Result<(), FooHubError>> + Send {
        let result = self.delete_sync(&id);
        async { result }
    }
}
