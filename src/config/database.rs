//! Cache database configuration module for `LedgerDesk`.
//!
//! This module handles `SQLite` connection and table creation for the local
//! cache store using `SeaORM`. The schema is generated from the entity
//! definitions with `Schema::create_table_from_entity`, so the cache tables
//! always match the Rust struct definitions without manual SQL.

use crate::entities::CachedRecord;
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the cache database URL from the environment or returns the default
/// local `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("CACHE_DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://data/ledgerdesk_cache.sqlite?mode=rwc".to_string())
}

/// Establishes a connection to the cache database.
///
/// Falls back to a default local `SQLite` file if no environment variable
/// is set. Callers treat a failure here as "persistence unavailable" and
/// run without the cache fallback rather than aborting.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url())
        .await
        .map_err(Into::into)
}

/// Creates the cache tables from the entity definitions.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let cached_record_table = schema
        .create_table_from_entity(CachedRecord)
        .if_not_exists()
        .to_owned();
    db.execute(builder.build(&cached_record_table)).await?;

    Ok(())
}
