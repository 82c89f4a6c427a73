/// Database module for recordkeeper
///
/// Handles all storage operations using SQLite and sqlx. Operations are
/// pure functions of their inputs: nothing in here touches the console.

pub mod connection;
pub mod models;
pub mod queries;

pub use connection::Database;
pub use models::*;
