use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use axum_helpers::{
    IdPath, JsonBody,
    errors::responses::{BadRequestIdResponse, UnprocessableEntityResponse},
};
use utoipa::OpenApi;

use crate::error::{ItemResult, NotFoundDetail};
use crate::models::{Item, ItemCreated, ItemDeleted, ItemDetail, ItemQuery, ItemUpdated};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for the items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, update_item, delete_item),
    components(
        schemas(Item, ItemCreated, ItemDetail, ItemUpdated, ItemDeleted, NotFoundDetail),
        responses(BadRequestIdResponse, UnprocessableEntityResponse)
    ),
    tags(
        (name = "Items", description = "Item management endpoints (in-memory)")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route(
            "/{item_id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(shared_service)
}

/// List every stored item, keyed by id
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    responses(
        (status = 200, description = "Mapping of id to item", body = BTreeMap<String, Item>)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<BTreeMap<i64, Item>>> {
    let records = service.list_items().await?;
    let items = records.into_iter().map(|r| (r.id, r.item)).collect();
    Ok(Json(items))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = Item,
    responses(
        (status = 200, description = "Item created with its assigned id", body = ItemCreated),
        (status = 422, response = UnprocessableEntityResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    JsonBody(item): JsonBody<Item>,
) -> ItemResult<Json<ItemCreated>> {
    let record = service.create_item(item).await?;
    Ok(Json(ItemCreated {
        id: record.id,
        data: record.item,
    }))
}

/// Get an item by id, echoing the optional `q` query parameter
#[utoipa::path(
    get,
    path = "/{item_id}",
    tag = "Items",
    params(
        ("item_id" = i64, Path, description = "Item identifier"),
        ItemQuery
    ),
    responses(
        (status = 200, description = "Item found", body = ItemDetail),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, description = "No item under this id", body = NotFoundDetail)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(item_id): IdPath,
    Query(query): Query<ItemQuery>,
) -> ItemResult<Json<ItemDetail>> {
    let record = service.get_item(item_id).await?;
    Ok(Json(ItemDetail {
        item_id: record.id,
        q: query.q,
        data: record.item,
    }))
}

/// Replace an existing item in full
#[utoipa::path(
    put,
    path = "/{item_id}",
    tag = "Items",
    params(
        ("item_id" = i64, Path, description = "Item identifier")
    ),
    request_body = Item,
    responses(
        (status = 200, description = "Item replaced", body = ItemUpdated),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, description = "No item under this id", body = NotFoundDetail),
        (status = 422, response = UnprocessableEntityResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(item_id): IdPath,
    JsonBody(item): JsonBody<Item>,
) -> ItemResult<Json<ItemUpdated>> {
    let record = service.update_item(item_id, item).await?;
    Ok(Json(ItemUpdated {
        message: "Item updated successfully".to_string(),
        id: record.id,
        data: record.item,
    }))
}

/// Delete an item; its id is permanently retired
#[utoipa::path(
    delete,
    path = "/{item_id}",
    tag = "Items",
    params(
        ("item_id" = i64, Path, description = "Item identifier")
    ),
    responses(
        (status = 200, description = "Item deleted", body = ItemDeleted),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, description = "No item under this id", body = NotFoundDetail)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(item_id): IdPath,
) -> ItemResult<Json<ItemDeleted>> {
    service.delete_item(item_id).await?;
    Ok(Json(ItemDeleted {
        message: "Item deleted successfully".to_string(),
        id: item_id,
    }))
}
