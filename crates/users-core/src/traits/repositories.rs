//! Repository traits (ports) - define the interface for data access
//!
//! The HTTP layer depends only on this trait; the PostgreSQL implementation
//! lives in `users-db`.

use async_trait::async_trait;

use crate::entities::{User, UserPayload};
use crate::error::StoreError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, StoreError>;

// ============================================================================
// User Repository
// ============================================================================

/// Each method runs exactly one statement against the store.
///
/// Ids arrive as the raw path segment; conversion to the column type is the
/// store's job, so a malformed id fails like any other store error.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user in store order
    async fn list(&self) -> RepoResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>>;

    /// Insert a user and return the stored row
    async fn create(&self, payload: &UserPayload) -> RepoResult<User>;

    /// Replace both fields of a user, returning the new row if it exists
    async fn update(&self, id: &str, payload: &UserPayload) -> RepoResult<Option<User>>;

    /// Delete a user; succeeds whether or not a row matched
    async fn delete(&self, id: &str) -> RepoResult<()>;

    /// Round-trip to the store for readiness checks
    async fn ping(&self) -> RepoResult<()>;
}
