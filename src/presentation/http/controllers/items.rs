// src/presentation/http/controllers/items.rs
use crate::application::{
    commands::items::{CreateMenuItemCommand, DeleteMenuItemCommand, UpdateMenuItemCommand},
    dto::MenuItemDto,
    queries::menus::{GetMenuItemQuery, GetMenuQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

/// Item fields as edited under a menu. Leave both `url` and `named_url`
/// empty to have the url derived from the tree.
#[derive(Debug, Deserialize, ToSchema)]
pub struct MenuItemRequest {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub named_url: Option<String>,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

/// Standalone item form: the owning menu is chosen by id.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMenuItemRequest {
    pub menu_id: i64,
    #[serde(flatten)]
    pub item: MenuItemRequest,
}

#[utoipa::path(
    get,
    path = "/api/v1/menus/{slug}/items",
    params(("slug" = String, Path, description = "Menu slug")),
    responses(
        (status = 200, description = "Items of the menu in creation order.", body = Vec<MenuItemDto>),
        (status = 404, description = "Unknown menu.", body = ErrorResponse)
    ),
    tag = "Items"
)]
pub async fn list_menu_items(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<Vec<MenuItemDto>>> {
    state
        .services
        .menu_queries
        .list_items(GetMenuQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/menus/{slug}/items",
    params(("slug" = String, Path, description = "Menu slug")),
    request_body = MenuItemRequest,
    responses(
        (status = 201, description = "Item created.", body = MenuItemDto),
        (status = 400, description = "Item rejected; `kind` names the rule.", body = ErrorResponse),
        (status = 404, description = "Unknown menu.", body = ErrorResponse)
    ),
    tag = "Items"
)]
pub async fn create_menu_item(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Json(payload): Json<MenuItemRequest>,
) -> HttpResult<(StatusCode, Json<MenuItemDto>)> {
    let menu = state
        .services
        .menu_queries
        .find_menu(GetMenuQuery { slug })
        .await
        .into_http()?;

    create(&state, menu.id, payload).await
}

#[utoipa::path(
    post,
    path = "/api/v1/items",
    request_body = CreateMenuItemRequest,
    responses(
        (status = 201, description = "Item created.", body = MenuItemDto),
        (status = 400, description = "Item rejected; `kind` names the rule.", body = ErrorResponse)
    ),
    tag = "Items"
)]
pub async fn create_item(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateMenuItemRequest>,
) -> HttpResult<(StatusCode, Json<MenuItemDto>)> {
    create(&state, payload.menu_id, payload.item).await
}

async fn create(
    state: &HttpState,
    menu_id: i64,
    item: MenuItemRequest,
) -> HttpResult<(StatusCode, Json<MenuItemDto>)> {
    let command = CreateMenuItemCommand {
        menu_id,
        name: item.name,
        url: item.url,
        named_url: item.named_url,
        parent_id: item.parent_id,
    };

    state
        .services
        .item_commands
        .create_item(command)
        .await
        .into_http()
        .map(|created| (StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/api/v1/items/{id}",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item with level, full path and url preview.", body = MenuItemDto),
        (status = 404, description = "Unknown item.", body = ErrorResponse)
    ),
    tag = "Items"
)]
pub async fn get_item(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<MenuItemDto>> {
    state
        .services
        .menu_queries
        .get_item(GetMenuItemQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/items/{id}",
    params(("id" = i64, Path, description = "Item id")),
    request_body = MenuItemRequest,
    responses(
        (status = 200, description = "Item replaced.", body = MenuItemDto),
        (status = 400, description = "Item rejected; `kind` names the rule.", body = ErrorResponse),
        (status = 404, description = "Unknown item.", body = ErrorResponse)
    ),
    tag = "Items"
)]
pub async fn update_item(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<MenuItemRequest>,
) -> HttpResult<Json<MenuItemDto>> {
    let command = UpdateMenuItemCommand {
        id,
        name: payload.name,
        url: payload.url,
        named_url: payload.named_url,
        parent_id: payload.parent_id,
    };

    state
        .services
        .item_commands
        .update_item(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/items/{id}",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item and its descendants deleted.", body = StatusResponse),
        (status = 404, description = "Unknown item.", body = ErrorResponse)
    ),
    tag = "Items"
)]
pub async fn delete_item(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .item_commands
        .delete_item(DeleteMenuItemCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}
