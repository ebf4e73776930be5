use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::MenuDto;

/// Render model for one menu: the item forest with display flags.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuRenderDto {
    pub menu: MenuDto,
    /// Request path with trailing slashes removed.
    pub current_path: String,
    pub active_item_id: Option<i64>,
    pub expanded_item_ids: Vec<i64>,
    pub items: Vec<RenderNodeDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RenderNodeDto {
    pub id: i64,
    pub name: String,
    /// Absent when a named route no longer resolves.
    pub href: Option<String>,
    pub level: usize,
    pub active: bool,
    pub expanded: bool,
    #[schema(no_recursion)]
    pub children: Vec<RenderNodeDto>,
}
