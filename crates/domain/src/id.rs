//! Identifier newtype for [`Foo`](crate::foo::Foo).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Foo`](crate::foo::Foo).
///
/// Freshly generated ids are hyphenated UUID v4 strings, but any string is a
/// valid key for lookups so ids coming from request paths are never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FooId(String);

impl FooId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for FooId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for FooId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for FooId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
