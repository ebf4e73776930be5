// src/presentation/http/controllers/render.rs
use crate::application::{
    dto::{CurrentPageDto, MenuRenderDto},
    queries::{pages::FindPageQuery, render::RenderMenuQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

fn default_path() -> String {
    "/".into()
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RenderParams {
    /// Request path of the page being rendered.
    #[serde(default = "default_path")]
    pub path: String,
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    #[serde(default = "default_path")]
    pub path: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/menus/{slug}/render",
    params(
        ("slug" = String, Path, description = "Menu slug"),
        RenderParams
    ),
    responses(
        (status = 200, description = "Nested menu with the active item and its expanded ancestors.", body = MenuRenderDto),
        (status = 404, description = "Unknown menu.", body = ErrorResponse)
    ),
    tag = "Render"
)]
pub async fn render_menu(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<RenderParams>,
) -> HttpResult<Json<MenuRenderDto>> {
    state
        .services
        .render_queries
        .render_menu(RenderMenuQuery {
            slug,
            current_path: params.path,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/pages",
    params(PageParams),
    responses(
        (status = 200, description = "Menu item the page belongs to, if any, and all menus.", body = CurrentPageDto)
    ),
    tag = "Render"
)]
pub async fn current_page(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<CurrentPageDto>> {
    state
        .services
        .page_queries
        .find_current_item(FindPageQuery { path: params.path })
        .await
        .into_http()
        .map(Json)
}
