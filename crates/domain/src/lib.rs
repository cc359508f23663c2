//! # foohub-domain
//!
//! Pure domain model for the foohub service.
//!
//! ## Responsibilities
//! - Foundational types: the [`FooId`](id::FooId) identifier and error conventions
//! - Define the **Foo** entity (an identifier paired with a free-form name)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod foo;
pub mod id;
