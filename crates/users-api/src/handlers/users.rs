//! User handlers
//!
//! One handler per endpoint, each running a single repository call.
//! Missing records are reported as JSON `null`, never as 404.

use axum::{
    extract::{Path, State},
    Json,
};
use users_core::{User, UserPayload};

use crate::extractors::JsonBody;
use crate::response::{ApiResult, Created, MessageResponse};
use crate::state::AppState;

/// List all users
///
/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = state.users().list().await?;
    Ok(Json(users))
}

/// Get user by ID
///
/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Option<User>>> {
    let user = state.users().find_by_id(&id).await?;
    Ok(Json(user))
}

/// Create user
///
/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> ApiResult<Created<Json<User>>> {
    let user = state.users().create(&payload).await?;
    Ok(Created(Json(user)))
}

/// Replace both fields of a user
///
/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<UserPayload>,
) -> ApiResult<Json<Option<User>>> {
    let user = state.users().update(&id, &payload).await?;
    Ok(Json(user))
}

/// Delete user
///
/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    state.users().delete(&id).await?;
    Ok(Json(MessageResponse::user_deleted()))
}
