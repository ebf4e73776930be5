// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::menus::list_menus,
        crate::presentation::http::controllers::menus::create_menu,
        crate::presentation::http::controllers::menus::get_menu,
        crate::presentation::http::controllers::menus::rename_menu,
        crate::presentation::http::controllers::menus::delete_menu,
        crate::presentation::http::controllers::items::list_menu_items,
        crate::presentation::http::controllers::items::create_menu_item,
        crate::presentation::http::controllers::items::create_item,
        crate::presentation::http::controllers::items::get_item,
        crate::presentation::http::controllers::items::update_item,
        crate::presentation::http::controllers::items::delete_item,
        crate::presentation::http::controllers::render::render_menu,
        crate::presentation::http::controllers::render::current_page,
        crate::presentation::http::controllers::admin::get_form_fields,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::menus::CreateMenuRequest,
            crate::presentation::http::controllers::menus::RenameMenuRequest,
            crate::presentation::http::controllers::items::MenuItemRequest,
            crate::presentation::http::controllers::items::CreateMenuItemRequest,
            crate::presentation::http::controllers::render::RenderParams,
            crate::presentation::http::controllers::render::PageParams,
            crate::presentation::http::controllers::admin::FormParams,
            crate::application::dto::MenuDto,
            crate::application::dto::MenuItemDto,
            crate::application::dto::MenuDetailDto,
            crate::application::dto::MenuRenderDto,
            crate::application::dto::RenderNodeDto,
            crate::application::dto::CurrentPageDto,
            crate::application::dto::FormFieldsDto
        )
    ),
    tags(
        (name = "Menus", description = "Menu management endpoints"),
        (name = "Items", description = "Menu item management endpoints"),
        (name = "Render", description = "Active path resolution for rendered pages"),
        (name = "Admin", description = "Admin form metadata"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Tree Menu API",
        description = "Hierarchical navigation menus with derived urls",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/openapi.json", get(serve_openapi))
}
