//! PostgreSQL persistence for the video catalog.
//!
//! Connection pooling, embedded migrations, row models and the repository
//! layer live here. Nothing above this crate writes SQL.

use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Migrations embedded from `db/migrations`.
static MIGRATOR: Migrator = sqlx::migrate!("../../db/migrations");

/// How far the connected schema is behind the embedded migrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationStatus {
    /// Successfully applied migrations recorded in `_sqlx_migrations`.
    pub applied: i64,
    /// Migrations embedded in this binary.
    pub known: usize,
}

impl MigrationStatus {
    pub fn is_current(&self) -> bool {
        usize::try_from(self.applied).is_ok_and(|applied| applied >= self.known)
    }
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Compare the applied migrations against the embedded set.
pub async fn migration_status(pool: &DbPool) -> Result<MigrationStatus, sqlx::Error> {
    let (applied,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM _sqlx_migrations WHERE success")
            .fetch_one(pool)
            .await?;
    Ok(MigrationStatus {
        applied,
        known: MIGRATOR.iter().count(),
    })
}
