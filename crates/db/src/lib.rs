//! SQLite storage layer for the stockroom inventory service.
//!
//! Provides pool construction, idempotent schema bootstrap, sample-data
//! seeding, row models, and repository structs with parameterized queries.

pub mod models;
pub mod repositories;
mod schema;
mod seed;

pub use schema::init_schema;
pub use seed::seed_sample_products;

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool for the given database file.
///
/// The file is created on first use. Foreign key enforcement is enabled on
/// every connection so review rows follow their product on delete.
pub async fn create_pool(database_path: impl AsRef<Path>) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
