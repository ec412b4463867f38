use crate::{DbError, Result};

use jc_core::ErrorLocation;

use std::panic::Location;
use std::path::PathBuf;

use jc_config::Config;
use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Handle to one SQLite database: opens or creates the file, applies the
/// embedded migrations, and hands out the connection pool the repositories
/// are built over.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (or create) the database file at `path` and run migrations.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let db_path: PathBuf = path.into();

        // Create parent directory if it doesn't exist
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| DbError::Initialization {
                        message: format!("Failed to create database directory: {}", e),
                        location: ErrorLocation::from(Location::caller()),
                    })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let db = Self::initialize(pool).await?;
        info!("database ready at {}", db_path.display());

        Ok(db)
    }

    /// Open the database at the path resolved from configuration.
    pub async fn open_with(config: &Config) -> Result<Self> {
        let db_path = config.database_path().map_err(|e| DbError::Initialization {
            message: format!("Cannot resolve database path: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Self::open(db_path).await
    }

    /// In-memory database for tests and tooling.
    /// In-memory needs a single connection; a second one would see an
    /// unrelated empty database.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(":memory:")
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        Self::initialize(pool).await
    }

    async fn initialize(pool: SqlitePool) -> Result<Self> {
        Self::run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        debug!("applying pending migrations");

        sqlx::migrate!("./migrations")
            .run(pool)
            .await
            .map_err(|e| DbError::Migration {
                message: format!("Migration failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
