/// Error types for recordkeeper
///
/// The storage layer returns these instead of printing; the console layer
/// decides how to render each outcome. Uses thiserror for ergonomic error
/// handling.

use thiserror::Error;

/// Main error type for storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Update or delete targeted an id that does not exist
    #[error("no matching record with id {0}")]
    NotFound(i64),

    /// The statement violated a table constraint
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// The database could not be reached or the pool is unusable
    #[error("connection failure: {0}")]
    Connection(String),

    /// Any other database-layer error
    #[error("database error: {0}")]
    Database(sqlx::Error),

    /// I/O errors (console reads, data directory creation)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for recordkeeper operations
pub type Result<T> = std::result::Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) => match db.kind() {
                sqlx::error::ErrorKind::UniqueViolation
                | sqlx::error::ErrorKind::ForeignKeyViolation
                | sqlx::error::ErrorKind::NotNullViolation
                | sqlx::error::ErrorKind::CheckViolation => {
                    StoreError::Constraint(db.message().to_string())
                }
                _ => StoreError::Database(err),
            },
            sqlx::Error::Io(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Configuration(_) => StoreError::Connection(err.to_string()),
            _ => StoreError::Database(err),
        }
    }
}

/// Convert StoreError to a user-friendly console message
impl StoreError {
    pub fn user_message(&self) -> String {
        match self {
            StoreError::NotFound(id) => {
                format!("No record found with ID {}", id)
            }
            StoreError::Constraint(msg) => {
                format!("The change was rejected by a table constraint: {}", msg)
            }
            StoreError::Connection(msg) => {
                format!("Could not reach the database: {}", msg)
            }
            StoreError::Database(e) => {
                format!("Database error occurred. Details: {}", e)
            }
            StoreError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
        }
    }
}
