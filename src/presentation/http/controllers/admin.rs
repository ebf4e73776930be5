// src/presentation/http/controllers/admin.rs
use crate::application::{
    dto::FormFieldsDto,
    queries::forms::{FormFieldsQuery, form_fields},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use axum::{
    Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FormParams {
    /// True while the object is being created.
    #[serde(default)]
    pub is_new: bool,
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/forms/{form}",
    params(
        ("form" = String, Path, description = "`menu` or `menu-item`"),
        FormParams
    ),
    responses(
        (status = 200, description = "Editable fields of the form.", body = FormFieldsDto),
        (status = 404, description = "Unknown form.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn get_form_fields(
    Path(form): Path<String>,
    Query(params): Query<FormParams>,
) -> HttpResult<Json<FormFieldsDto>> {
    form_fields(FormFieldsQuery {
        form,
        is_new: params.is_new,
    })
    .into_http()
    .map(Json)
}
