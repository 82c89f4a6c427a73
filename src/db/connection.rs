/// Database connection management
///
/// Wraps a SQLite connection pool. The pool hands a connection to each
/// statement and takes it back on every exit path, success or failure.

use crate::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::ConnectOptions;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

/// Both applications are single-user; one connection is all they need.
const MAX_CONNECTIONS: u32 = 1;

/// Handle to one application's database file
#[derive(Clone)]
pub struct Database {
    pool: Arc<SqlitePool>,
    db_path: PathBuf,
}

impl Database {
    /// Open (creating if missing) the database file at `db_path`.
    ///
    /// The path is supplied by the caller; no process-wide configuration is
    /// consulted. Parent directories are created as needed.
    pub async fn open<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path.display()))?
            .create_if_missing(true)
            .foreign_keys(true)
            .disable_statement_logging();

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        Ok(Self {
            pool: Arc::new(pool),
            db_path,
        })
    }

    /// Create a test database in memory
    ///
    /// Used for testing. Creates a fresh database for each test.
    #[cfg(test)]
    pub async fn new_test() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        Ok(Self {
            pool: Arc::new(pool),
            db_path: PathBuf::from(":memory:"),
        })
    }

    /// Get reference to the connection pool
    ///
    /// Used internally by the query module.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get the database file path
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Close all connections in the pool
    ///
    /// Should be called on application shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::ProductInput;

    #[tokio::test]
    async fn test_database_creation() {
        let db = Database::new_test().await;
        assert!(db.is_ok());
    }

    #[tokio::test]
    async fn test_open_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("inventory.db");

        let db = Database::open(&path).await.unwrap();
        assert_eq!(db.path(), path.as_path());
        assert!(path.parent().unwrap().exists());
        db.close().await;
    }

    #[tokio::test]
    async fn test_schema_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.db");

        {
            let db = Database::open(&path).await.unwrap();
            db.ensure_product_table().await.unwrap();
            db.insert_product(&ProductInput {
                name: "Widget".to_string(),
                price: 9.99,
                quantity: 10,
            })
            .await
            .unwrap();
            db.close().await;
        }

        // Second run of the initializer must neither fail nor drop data.
        let db = Database::open(&path).await.unwrap();
        db.ensure_product_table().await.unwrap();
        let products = db.list_products().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Widget");
        db.close().await;
    }
}
