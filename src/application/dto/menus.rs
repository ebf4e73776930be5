use crate::domain::menu::{Menu, MenuItem, MenuTree, services::MenuUrlService};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

impl From<Menu> for MenuDto {
    fn from(menu: Menu) -> Self {
        Self {
            id: menu.id.into(),
            name: menu.name.into_inner(),
            slug: menu.slug.into_inner(),
            created_at: menu.created_at,
        }
    }
}

impl From<&Menu> for MenuDto {
    fn from(menu: &Menu) -> Self {
        menu.clone().into()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuItemDto {
    pub id: i64,
    pub menu_id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named_url: Option<String>,
    pub parent_id: Option<i64>,
    pub level: usize,
    /// `Menu: Root > ... > Item`
    pub full_path: String,
    /// Url auto-generation would assign at the item's current position.
    pub preview_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MenuItemDto {
    pub fn build(item: &MenuItem, menu: &Menu, tree: &MenuTree, urls: &MenuUrlService) -> Self {
        Self {
            id: item.id.into(),
            menu_id: item.menu_id.into(),
            name: item.name.as_str().to_string(),
            url: item.url().map(str::to_string),
            named_url: item.named_url().map(str::to_string),
            parent_id: item.parent_id.map(Into::into),
            level: tree.level(item.id),
            full_path: tree.full_path(item.id, menu.name.as_str()),
            preview_url: urls.preview_url(item, menu, tree),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuDetailDto {
    pub menu: MenuDto,
    pub items: Vec<MenuItemDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CurrentPageDto {
    pub current_path: String,
    pub current_item: Option<MenuItemDto>,
    pub menus: Vec<MenuDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FormFieldsDto {
    pub form: String,
    pub is_new: bool,
    pub fields: Vec<String>,
}

impl FormFieldsDto {
    pub fn new(form: &str, is_new: bool, fields: BTreeSet<&'static str>) -> Self {
        Self {
            form: form.to_string(),
            is_new,
            fields: fields.into_iter().map(str::to_string).collect(),
        }
    }
}
