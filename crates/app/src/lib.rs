//! # foohub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement:
//!   - `FooRepository` — find, save, delete foos
//! - Define the **driving/inbound** use-case struct:
//!   - `FooService` — get, create, delete
//! - Orchestrate domain objects without knowing *how* storage or IO works
//!
//! ## Dependency rule
//! Depends on `foohub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
