//! Foo — the single entity managed by the service.

use serde::{Deserialize, Serialize};

use crate::id::FooId;

/// A named item with a server-assigned identifier.
///
/// The name carries no invariants: it may be empty and need not be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Foo {
    pub id: FooId,
    pub name: String,
}

impl Foo {
    /// Create a foo with a freshly generated identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: FooId::generate(),
            name: name.into(),
        }
    }

    /// Rebuild a foo from an existing identifier, e.g. when reading storage.
    #[must_use]
    pub fn with_id(id: impl Into<FooId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
