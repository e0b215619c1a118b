//! User model -> entity mapper

use users_core::entities::User;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            nombre: model.nombre,
            correo: model.correo,
            extra: model.extra,
        }
    }
}
