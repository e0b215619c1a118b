//! Application error types
//!
//! Errors raised while bootstrapping and running the server process.

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Listener / serve errors
    #[error("Server error: {0}")]
    Server(String),
}

impl AppError {
    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Server(_) => "SERVER_ERROR",
        }
    }

    /// Create a database error
    #[must_use]
    pub fn database(msg: impl std::fmt::Display) -> Self {
        Self::Database(msg.to_string())
    }

    /// Create a server error
    #[must_use]
    pub fn server(msg: impl std::fmt::Display) -> Self {
        Self::Server(msg.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
