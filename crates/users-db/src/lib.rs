//! # users-db
//!
//! Database layer implementing [`UserRepository`](users_core::UserRepository)
//! with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - The `users` row model, read whole as JSON
//! - Model → entity mapping
//! - The repository implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use users_common::AppConfig;
//! use users_core::UserRepository;
//! use users_db::{create_pool, PgUserRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&config.database)?;
//!     let repo = PgUserRepository::new(pool);
//!
//!     let users = repo.list().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{connect_options, create_pool, PgPool};
pub use repositories::PgUserRepository;

/// DDL for the `users` table, for test and local setups
pub const USERS_SCHEMA: &str = include_str!("../schema.sql");
