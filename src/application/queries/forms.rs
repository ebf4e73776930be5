// src/application/queries/forms.rs
use crate::{
    application::{
        dto::FormFieldsDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::menu::forms::AdminForm,
};

pub struct FormFieldsQuery {
    pub form: String,
    pub is_new: bool,
}

pub fn form_fields(query: FormFieldsQuery) -> ApplicationResult<FormFieldsDto> {
    let form = AdminForm::parse(&query.form)
        .ok_or_else(|| ApplicationError::not_found(format!("unknown form '{}'", query.form)))?;
    Ok(FormFieldsDto::new(
        form.as_str(),
        query.is_new,
        form.fields(query.is_new),
    ))
}
