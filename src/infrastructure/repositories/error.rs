// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

// SQLite reports the failing column instead of a constraint name.
const CNT_MENU_NAME: &str = "menus.name";
const CNT_MENU_SLUG: &str = "menus.slug";
const CNT_ITEM_SINGLE_LINK: &str = "menu_items_single_link_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            match db_err.kind() {
                ErrorKind::UniqueViolation if message.contains(CNT_MENU_NAME) => {
                    DomainError::Conflict("menu name already exists".into())
                }
                ErrorKind::UniqueViolation if message.contains(CNT_MENU_SLUG) => {
                    DomainError::Conflict("menu slug already exists".into())
                }
                ErrorKind::UniqueViolation => {
                    DomainError::Conflict("unique constraint violated".into())
                }
                ErrorKind::ForeignKeyViolation => {
                    DomainError::NotFound("referenced record not found".into())
                }
                ErrorKind::CheckViolation if message.contains(CNT_ITEM_SINGLE_LINK) => {
                    DomainError::Validation("item needs exactly one of url or named_url".into())
                }
                ErrorKind::CheckViolation => {
                    DomainError::Validation("check constraint violated".into())
                }
                ErrorKind::NotNullViolation => {
                    DomainError::Validation("required column is missing".into())
                }
                _ => DomainError::Persistence(message.to_string()),
            }
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
