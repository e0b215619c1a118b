//! # users-core
//!
//! Domain layer containing the user record, request payloads, the store error
//! type and the repository trait.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{User, UserPayload};
pub use error::StoreError;
pub use traits::{RepoResult, UserRepository};
