//! Store errors - failures raised while talking to the database

use thiserror::Error;

/// The single failure category of a store operation
///
/// Covers connectivity loss, malformed SQL, constraint violations and
/// type conversion failures alike. The message is the driver's own text.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Database(String),
}

impl StoreError {
    /// Get an error code string for logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Wrap any displayable driver error
    pub fn database(err: impl std::fmt::Display) -> Self {
        Self::Database(err.to_string())
    }
}
