//! Database access layer implementing the repository pattern for the
//! product catalog.
//!
//! All database operations MUST go through these repositories. Direct SQL
//! queries outside this module are forbidden to maintain consistency.

use std::sync::Arc;

use sqlx::PgPool;

pub mod products;

use crate::error::Result;

/// Container for repository instances providing unified database access.
///
/// Manages a shared connection pool and provides type-safe access to the
/// product repository. Constructed once at startup and cloned into request
/// handlers.
#[derive(Clone)]
pub struct Storage {
    /// Repository for product operations.
    pub products: Arc<products::Repository>,
}

impl Storage {
    /// Creates a new storage instance with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        let pool = Arc::new(pool);

        Self { products: Arc::new(products::Repository::new(pool)) }
    }

    /// Performs a health check on the database connection.
    ///
    /// Executes a trivial query to verify connectivity. Used by the
    /// `/health` endpoint.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Database` if the connection is unhealthy.
    pub async fn health_check(&self) -> Result<()> {
        let _: (i32,) = sqlx::query_as("SELECT 1").fetch_one(&*self.products.pool()).await?;

        Ok(())
    }
}
