//! User CRUD handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};

use stockroom_core::record::{NewUser, UserPatch, UserPublic};
use stockroom_core::response::StandardResponse;
use stockroom_core::storage::RepositoryError;

use crate::state::AppState;

use super::{AppError, ListQuery};

/// Create a user (POST /users).
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> Result<Json<StandardResponse<UserPublic>>, AppError> {
    let Json(payload) = payload?;

    let user = state.users.create(payload).await?;

    Ok(Json(StandardResponse::success(
        UserPublic::from(user),
        "User created successfully",
    )))
}

/// List users (GET /users?offset=&limit=).
pub async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<StandardResponse<Vec<UserPublic>>>, AppError> {
    let Query(query) = query?;
    let (offset, limit) = query.validated()?;

    let users = state.users.list(offset, limit).await?;
    let users = users.into_iter().map(UserPublic::from).collect();

    Ok(Json(StandardResponse::success(
        users,
        "Users retrieved successfully",
    )))
}

/// Get a user by id (GET /users/{id}).
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<StandardResponse<UserPublic>>, AppError> {
    let Path(id) = id?;

    match state.users.get(id).await? {
        Some(user) => Ok(Json(StandardResponse::success(
            UserPublic::from(user),
            "User retrieved successfully",
        ))),
        None => Err(RepositoryError::NotFound { entity: "User", id }.into()),
    }
}

/// Partially update a user (PATCH /users/{id}).
pub async fn update_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UserPatch>, JsonRejection>,
) -> Result<Json<StandardResponse<UserPublic>>, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    let user = state.users.update(id, payload).await?;

    Ok(Json(StandardResponse::success(
        UserPublic::from(user),
        "User updated successfully",
    )))
}

/// Delete a user and all its items (DELETE /users/{id}).
pub async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<StandardResponse<serde_json::Value>>, AppError> {
    let Path(id) = id?;

    state.users.delete(id).await?;

    Ok(Json(StandardResponse::success(
        serde_json::json!({"ok": true}),
        "User deleted successfully",
    )))
}
