//! Catalog service entry point.
//!
//! Initializes logging, loads configuration, builds the shared connection
//! pool, ensures the products table exists, and runs the HTTP server until
//! shutdown. A pool that cannot be established at boot is fatal: the error
//! propagates out of `main` and the process exits nonzero.

use std::time::Duration;

use anyhow::{Context, Result};
use catalog_api::{AppState, Config};
use catalog_core::storage::Storage;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    info!("Starting catalog service");

    let config = Config::load()?;
    info!(
        database_url = %config.database_url_masked(),
        host = %config.host,
        port = config.port,
        max_connections = config.database_max_connections,
        "Configuration loaded"
    );

    let db_pool = create_database_pool(&config).await?;
    info!("Database connection pool established");

    ensure_schema(&db_pool).await?;

    let state = AppState {
        storage: Storage::new(db_pool.clone()),
        max_name_length: config.max_product_name_length,
    };

    let addr = config.parse_server_addr()?;
    catalog_api::start_server(state, addr, Duration::from_secs(config.request_timeout))
        .await
        .context("HTTP server failed")?;

    db_pool.close().await;
    info!("Database connections closed, shutdown complete");

    Ok(())
}

/// Initializes tracing with environment-based configuration.
fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,catalog=debug,tower_http=debug"))
        .expect("Invalid RUST_LOG environment variable");

    let fmt_layer = fmt::layer().with_target(true);

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}

/// Creates the database connection pool.
///
/// Boot-time connection failure is unrecoverable: the error is returned to
/// `main` and the process terminates. There is no retry.
async fn create_database_pool(config: &Config) -> Result<sqlx::PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(Duration::from_secs(config.database_connection_timeout))
        .connect(&config.database_url)
        .await
        .context("Failed to create database connection pool")?;

    sqlx::query("SELECT 1")
        .fetch_one(&pool)
        .await
        .context("Failed to verify database connection")?;

    Ok(pool)
}

/// Ensures the products table exists.
///
/// The name column carries no UNIQUE constraint; uniqueness is checked at
/// the application layer before every write.
async fn ensure_schema(pool: &sqlx::PgPool) -> Result<()> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS products (
            productid SERIAL PRIMARY KEY,
            productname VARCHAR(100) NOT NULL,
            price NUMERIC(10, 2) NOT NULL,
            stock INTEGER NOT NULL
        )
        ",
    )
    .execute(pool)
    .await
    .context("Failed to create products table")?;

    Ok(())
}
