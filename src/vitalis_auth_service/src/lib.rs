//! HTTP surface for the credential flows.
//!
//! Wires the use cases from `vitalis_application` to Axum routes, with the
//! concrete adapters injected through a single shared state. The binary in
//! `main.rs` assembles the Postgres-backed production service; tests spawn
//! the same router over in-memory stores.

pub mod auth_service;
pub mod routes;
pub mod tracing;

pub use auth_service::{AppState, AuthService};
pub use tracing::init_tracing;
