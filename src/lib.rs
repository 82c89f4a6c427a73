/// recordkeeper library
///
/// Storage and presentation layers shared by the inventory and students
/// console applications.

pub mod console;
pub mod db;
pub mod error;

// Re-exports for convenience
pub use db::Database;
pub use error::{Result, StoreError};
