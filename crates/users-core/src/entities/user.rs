//! User entity - one row of the `users` table

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user record as stored in the `users` table
///
/// The table may carry columns beyond the three the service writes; they are
/// kept in `extra` and serialized alongside the known fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier
    pub id: i64,
    pub nombre: Option<String>,
    pub correo: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Build the record that results from writing `payload` under `id`
    pub fn from_payload(id: i64, payload: UserPayload) -> Self {
        Self {
            id,
            nombre: payload.nombre,
            correo: payload.correo,
            extra: Map::new(),
        }
    }
}

/// Body of create and update requests
///
/// Both fields are optional; an absent field binds as `NULL`.
/// Serde rejects non-string, non-null values before anything reaches the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPayload {
    pub nombre: Option<String>,
    pub correo: Option<String>,
}

impl UserPayload {
    pub fn new(nombre: impl Into<String>, correo: impl Into<String>) -> Self {
        Self {
            nombre: Some(nombre.into()),
            correo: Some(correo.into()),
        }
    }
}
