//! HTTP API layer for Achtung Core.
//!
//! Provides the analyze, rewrite and guide endpoints.

pub mod handlers;
mod routes;
mod types;

pub use routes::build_router;
