//! Application state
//!
//! Holds the shared state for the Axum application: the injected user
//! repository and the general application settings.

use std::sync::Arc;

use users_common::AppSettings;
use users_core::UserRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Store access; owns the connection pool
    users: Arc<dyn UserRepository>,
    /// Application settings
    settings: Arc<AppSettings>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(users: Arc<dyn UserRepository>, settings: AppSettings) -> Self {
        Self {
            users,
            settings: Arc::new(settings),
        }
    }

    /// Get the user repository
    pub fn users(&self) -> &dyn UserRepository {
        self.users.as_ref()
    }

    /// Get the application settings
    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("users", &"UserRepository")
            .field("settings", &self.settings)
            .finish()
    }
}
