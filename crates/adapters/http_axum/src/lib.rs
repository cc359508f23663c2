//! # foohub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API (`POST /foo`, `GET /foo/{id}`, `DELETE /foo/{id}`)
//!   plus the root greeting and a health probe
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! Every response is labelled `application/json`, and JSON bodies are
//! terminated by a newline.
//!
//! ## Dependency rule
//! Depends on `foohub-app` (for port traits and services) and `foohub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod response;
pub mod router;
pub mod state;
