//! Domain entities

mod user;

pub use user::{User, UserPayload};
