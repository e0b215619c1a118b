//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};
use users_core::UserPayload;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Payload with a unique name and email
pub fn unique_payload() -> UserPayload {
    let suffix = unique_suffix();
    UserPayload::new(
        format!("Usuario {suffix}"),
        format!("usuario{suffix}@example.com"),
    )
}

/// Delete confirmation body
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
