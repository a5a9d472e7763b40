//! Item endpoints.
//!
//! - `GET /items` - List every stored item
//! - `POST /items` - Store a new item, filling in placeholders for missing fields

use axum::{Extension, Json, body::Bytes, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::AppResources;
use crate::entity::item::NewItem;
use crate::error::ApiError;
use crate::response::{ErrorResponse, ItemListResponse, MessageResponse};

/// Tag for OpenAPI documentation.
pub const ITEMS_TAG: &str = "Items";

/// Request body for creating an item. Both fields are optional.
#[derive(Deserialize, ToSchema)]
pub struct CreateItemRequest {
    /// Defaults to "Sample Item"
    #[schema(max_length = 50)]
    pub name: Option<String>,
    /// Defaults to "This is a sample item."
    pub description: Option<String>,
}

#[tracing::instrument(skip(resources))]
#[utoipa::path(
    get,
    path = "/items",
    tag = ITEMS_TAG,
    operation_id = "List Items",
    summary = "List all items",
    responses(
        (status = 200, description = "All stored items", body = ItemListResponse),
        (status = 500, description = "Database is unreachable", body = ErrorResponse)
    )
)]
pub async fn list_items(
    Extension(resources): Extension<AppResources>,
) -> Result<Json<ItemListResponse>, ApiError> {
    let items = resources.gateway.list_items().await?;
    Ok(Json(ItemListResponse::ok(items)))
}

#[tracing::instrument(skip(resources, body), fields(body_len = body.len()))]
#[utoipa::path(
    post,
    path = "/items",
    tag = ITEMS_TAG,
    operation_id = "Create Item",
    summary = "Create an item",
    description = "Stores a new item. The id is assigned by the database.\n\n\
                   A missing or unreadable body is not an error: absent fields are replaced by \
                   placeholder values.",
    request_body(content = CreateItemRequest, description = "Item fields"),
    responses(
        (status = 201, description = "Item stored", body = MessageResponse, example = json!({"status": "ok", "message": "Item created"})),
        (status = 500, description = "Database is unreachable", body = ErrorResponse)
    )
)]
pub async fn create_item(
    Extension(resources): Extension<AppResources>,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let stored = resources
        .gateway
        .insert_item(NewItem::from_body(&body))
        .await?;
    tracing::info!(item_id = stored.id, "Created item");

    Ok((StatusCode::CREATED, Json(MessageResponse::ok("Item created"))))
}
