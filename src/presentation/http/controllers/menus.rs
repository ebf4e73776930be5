// src/presentation/http/controllers/menus.rs
use crate::application::{
    commands::menus::{CreateMenuCommand, DeleteMenuCommand, RenameMenuCommand},
    dto::{MenuDetailDto, MenuDto},
    queries::menus::GetMenuQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMenuRequest {
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RenameMenuRequest {
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/menus",
    responses(
        (status = 200, description = "All menus in creation order.", body = Vec<MenuDto>)
    ),
    tag = "Menus"
)]
pub async fn list_menus(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<MenuDto>>> {
    state
        .services
        .menu_queries
        .list_menus()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/menus",
    request_body = CreateMenuRequest,
    responses(
        (status = 201, description = "Menu created; the slug is derived from the name.", body = MenuDto),
        (status = 400, description = "Name has no letters or digits.", body = ErrorResponse),
        (status = 409, description = "Name or slug already taken.", body = ErrorResponse)
    ),
    tag = "Menus"
)]
pub async fn create_menu(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateMenuRequest>,
) -> HttpResult<(StatusCode, Json<MenuDto>)> {
    state
        .services
        .menu_commands
        .create_menu(CreateMenuCommand { name: payload.name })
        .await
        .into_http()
        .map(|menu| (StatusCode::CREATED, Json(menu)))
}

#[utoipa::path(
    get,
    path = "/api/v1/menus/{slug}",
    params(("slug" = String, Path, description = "Menu slug")),
    responses(
        (status = 200, description = "Menu with its items in creation order.", body = MenuDetailDto),
        (status = 404, description = "Unknown menu.", body = ErrorResponse)
    ),
    tag = "Menus"
)]
pub async fn get_menu(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<MenuDetailDto>> {
    state
        .services
        .menu_queries
        .get_menu(GetMenuQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/menus/{slug}",
    params(("slug" = String, Path, description = "Menu slug")),
    request_body = RenameMenuRequest,
    responses(
        (status = 200, description = "Menu renamed; the slug is unchanged.", body = MenuDto),
        (status = 404, description = "Unknown menu.", body = ErrorResponse),
        (status = 409, description = "Name already taken.", body = ErrorResponse)
    ),
    tag = "Menus"
)]
pub async fn rename_menu(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Json(payload): Json<RenameMenuRequest>,
) -> HttpResult<Json<MenuDto>> {
    state
        .services
        .menu_commands
        .rename_menu(RenameMenuCommand {
            slug,
            name: payload.name,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/menus/{slug}",
    params(("slug" = String, Path, description = "Menu slug")),
    responses(
        (status = 200, description = "Menu and all of its items deleted.", body = StatusResponse),
        (status = 404, description = "Unknown menu.", body = ErrorResponse)
    ),
    tag = "Menus"
)]
pub async fn delete_menu(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .menu_commands
        .delete_menu(DeleteMenuCommand { slug })
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}
