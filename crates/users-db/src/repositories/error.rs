//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use users_core::StoreError;

/// Convert SQLx error to StoreError
///
/// Errors reported by the server keep the server's own message; everything
/// else (pool, I/O, TLS, decode) uses the driver's description.
pub fn map_db_error(e: SqlxError) -> StoreError {
    match e.as_database_error() {
        Some(db_err) => StoreError::Database(db_err.message().to_string()),
        None => StoreError::database(e),
    }
}
