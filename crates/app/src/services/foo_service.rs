//! Foo service — use-cases for managing foos.

use foohub_domain::error::FooHubError;
use foohub_domain::foo::Foo;
use foohub_domain::id::FooId;

use crate::ports::FooRepository;

/// Application service for foo create/read/delete operations.
pub struct FooService<R> {
    repo: R,
}

impl<R: FooRepository> FooService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Look up a foo by id.
    ///
    /// # Errors
    ///
    /// Returns [`FooHubError::NotFound`] when no foo with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_foo(&self, id: FooId) -> Result<Foo, FooHubError> {
        self.repo.find(id).await
    }

    /// Store a new foo with the given name. The id is always assigned by
    /// the repository.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_foo(&self, name: String) -> Result<Foo, FooHubError> {
        let foo = self.repo.save(name).await?;
        tracing::info!(id = %foo.id, "foo created");
        Ok(foo)
    }

    /// Delete a foo by id. Unknown ids are ignored.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_foo(&self, id: FooId) -> Result<(), FooHubError> {
        tracing::debug!(%id, "deleting foo");
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foohub_domain::error::NotFoundError;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryFooRepo {
        store: Mutex<HashMap<FooId, String>>,
    }

    impl FooRepository for InMemoryFooRepo {
        fn find(&self, id: FooId) -> impl Future<Output = Result<Foo, FooHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result: Result<Foo, FooHubError> = match store.get(&id) {
                Some(name) => Ok(Foo::with_id(id, name.clone())),
                None => Err(NotFoundError {
                    entity: "Foo",
                    id: id.into_inner(),
                }
                .into()),
            };
            async { result }
        }

        fn save(&self, name: String) -> impl Future<Output = Result<Foo, FooHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            let foo = Foo::new(name);
            store.insert(foo.id.clone(), foo.name.clone());
            async { Ok(foo) }
        }

        fn delete(&self, id: FooId) -> impl Future<Output = Result<(), FooHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.remove(&id);
            async { Ok(()) }
        }
    }

    fn make_service() -> FooService<InMemoryFooRepo> {
        FooService::new(InMemoryFooRepo::default())
    }

    #[tokio::test]
    async fn should_create_foo_with_generated_id() {
        let svc = make_service();

        let created = svc.create_foo("Mike".to_string()).await.unwrap();
        assert_eq!(created.name, "Mike");
        assert!(!created.id.as_str().is_empty());

        let fetched = svc.get_foo(created.id.clone()).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn should_return_not_found_when_foo_missing() {
        let svc = make_service();
        let result = svc.get_foo(FooId::from("000")).await;
        assert!(matches!(result, Err(FooHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_foo() {
        let svc = make_service();
        let created = svc.create_foo("Jack".to_string()).await.unwrap();

        svc.delete_foo(created.id.clone()).await.unwrap();

        let result = svc.get_foo(created.id).await;
        assert!(matches!(result, Err(FooHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_ignore_delete_when_foo_missing() {
        let svc = make_service();
        svc.delete_foo(FooId::from("unknown")).await.unwrap();
    }
}
