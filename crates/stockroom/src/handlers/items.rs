//! Item CRUD handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;

use stockroom_core::record::{Item, ItemPatch, NewItem};
use stockroom_core::response::StandardResponse;
use stockroom_core::storage::RepositoryError;

use crate::state::AppState;

use super::{AppError, ListQuery};

/// Query parameters for creating an item. The owner travels as a query
/// parameter, not in the body.
#[derive(Debug, Deserialize)]
pub struct CreateItemQuery {
    pub owner_id: i64,
}

/// Create an item for an existing owner (POST /items?owner_id=).
pub async fn create_item(
    State(state): State<AppState>,
    query: Result<Query<CreateItemQuery>, QueryRejection>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> Result<Json<StandardResponse<Item>>, AppError> {
    let Query(query) = query?;
    let Json(payload) = payload?;

    let item = state.items.create(payload, query.owner_id).await?;

    Ok(Json(StandardResponse::success(
        item,
        "Item created successfully",
    )))
}

/// List items (GET /items?offset=&limit=).
pub async fn list_items(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<StandardResponse<Vec<Item>>>, AppError> {
    let Query(query) = query?;
    let (offset, limit) = query.validated()?;

    let items = state.items.list(offset, limit).await?;

    Ok(Json(StandardResponse::success(
        items,
        "Items retrieved successfully",
    )))
}

/// Get an item by id (GET /items/{id}).
pub async fn get_item(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<StandardResponse<Item>>, AppError> {
    let Path(id) = id?;

    match state.items.get(id).await? {
        Some(item) => Ok(Json(StandardResponse::success(
            item,
            "Item retrieved successfully",
        ))),
        None => Err(RepositoryError::NotFound { entity: "Item", id }.into()),
    }
}

/// Partially update an item (PATCH /items/{id}). The owner is never
/// reassigned.
pub async fn update_item(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ItemPatch>, JsonRejection>,
) -> Result<Json<StandardResponse<Item>>, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    let item = state.items.update(id, payload).await?;

    Ok(Json(StandardResponse::success(
        item,
        "Item updated successfully",
    )))
}

/// Delete an item (DELETE /items/{id}).
pub async fn delete_item(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<StandardResponse<serde_json::Value>>, AppError> {
    let Path(id) = id?;

    state.items.delete(id).await?;

    Ok(Json(StandardResponse::success(
        serde_json::json!({"ok": true}),
        "Item deleted successfully",
    )))
}
