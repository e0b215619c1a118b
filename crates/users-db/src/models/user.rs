//! User database model

use serde::Deserialize;
use serde_json::{Map, Value};

/// Database model for the users table
///
/// Rows are read whole as `to_jsonb(users.*)`, so columns other than the
/// three the service writes land in `extra`. Both `SERIAL` and `BIGSERIAL`
/// keys decode as `i64`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserModel {
    pub id: i64,
    pub nombre: Option<String>,
    pub correo: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
