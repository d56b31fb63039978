//! Store selection and connection pools
//!
//! `DATABASE_URL` selects PostgreSQL. If it is unset, or the server cannot
//! be reached, the catalog falls back to the embedded SQLite file.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{PgPool, SqlitePool};

use super::postgres::PgStore;
use super::sqlite::SqliteStore;
use super::store::{Catalog, DbError};
use crate::config::CatalogConfig;

/// Default maximum connections for each pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long to wait for the primary store before falling back.
const PRIMARY_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Resolve the catalog for this process.
///
/// # Errors
///
/// Only fails if the embedded store itself cannot be opened. A primary
/// store failure is logged and replaced by the embedded store.
pub async fn connect(config: &CatalogConfig) -> Result<Catalog, DbError> {
    if let Some(url) = config.database_url.as_deref() {
        match create_pg_pool(url).await {
            Ok(pool) => {
                tracing::info!("Connected to PostgreSQL primary store");
                return Ok(Arc::new(PgStore::new(pool)));
            }
            Err(e) => {
                tracing::warn!(error = %e, "PostgreSQL connection failed, falling back to SQLite");
            }
        }
    }

    let pool = create_sqlite_pool(&config.sqlite_path).await?;
    tracing::info!(path = %config.sqlite_path.display(), "Using SQLite embedded store");
    Ok(Arc::new(SqliteStore::new(pool)))
}

/// Create the catalog tables at startup.
///
/// A failure is logged and reported as `false`; the caller keeps serving and
/// requests surface the store error themselves.
pub async fn ensure_schema(catalog: &Catalog) -> bool {
    match catalog.init_schema().await {
        Ok(()) => {
            tracing::info!(dialect = %catalog.dialect(), "Database initialized");
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "Error initializing database");
            false
        }
    }
}

/// Create a PostgreSQL connection pool.
///
/// Connects eagerly so an unreachable server is reported here rather than
/// on the first request.
pub async fn create_pg_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .acquire_timeout(PRIMARY_CONNECT_TIMEOUT)
        .connect(database_url)
        .await
}

/// Create a SQLite connection pool, creating the file if missing.
pub async fn create_sqlite_pool(path: &Path) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_with(options)
        .await
}
