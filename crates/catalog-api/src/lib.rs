//! Catalog HTTP API.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;

use catalog_core::storage::Storage;

pub use config::Config;
pub use error::ApiError;
pub use server::{create_router, start_server};

/// Shared application state injected into every request handler.
///
/// Cloning is cheap; the storage layer holds the pool behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Storage layer over the shared connection pool.
    pub storage: Storage,
    /// Upper bound on product name length, in characters.
    pub max_name_length: usize,
}
