// src/application/queries/render.rs
use crate::{
    application::{
        commands::menus::load_menu,
        dto::{MenuRenderDto, RenderNodeDto},
        error::ApplicationResult,
    },
    domain::menu::{
        MenuItemId, MenuItemRepository, MenuRepository, MenuTree,
        services::{ActivePath, ActivePathResolver},
        url::trim_trailing_slash,
    },
};
use std::sync::Arc;

pub struct RenderMenuQuery {
    pub slug: String,
    pub current_path: String,
}

/// Builds the render model of a menu for one request path. Holds no state
/// between calls.
pub struct MenuRenderService {
    menu_repo: Arc<dyn MenuRepository>,
    item_repo: Arc<dyn MenuItemRepository>,
    resolver: Arc<ActivePathResolver>,
}

impl MenuRenderService {
    pub fn new(
        menu_repo: Arc<dyn MenuRepository>,
        item_repo: Arc<dyn MenuItemRepository>,
        resolver: Arc<ActivePathResolver>,
    ) -> Self {
        Self {
            menu_repo,
            item_repo,
            resolver,
        }
    }

    pub async fn render_menu(&self, query: RenderMenuQuery) -> ApplicationResult<MenuRenderDto> {
        let menu = load_menu(self.menu_repo.as_ref(), &query.slug).await?;
        let tree = MenuTree::new(self.item_repo.list_by_menu(menu.id).await?);
        let active = self.resolver.resolve(&tree, &query.current_path);

        let mut expanded: Vec<i64> = active.expanded.iter().copied().map(Into::into).collect();
        expanded.sort_unstable();

        tracing::debug!(
            menu = %menu.slug,
            path = %query.current_path,
            active = ?active.active,
            "menu rendered"
        );

        Ok(MenuRenderDto {
            items: self.nodes(&tree, None, 0, &active),
            menu: menu.into(),
            current_path: trim_trailing_slash(&query.current_path).to_string(),
            active_item_id: active.active.map(Into::into),
            expanded_item_ids: expanded,
        })
    }

    /// Children of `parent` in tree order. Descending from the roots cannot
    /// revisit an item, since each item has a single parent.
    fn nodes(
        &self,
        tree: &MenuTree,
        parent: Option<MenuItemId>,
        level: usize,
        active: &ActivePath,
    ) -> Vec<RenderNodeDto> {
        tree.children(parent)
            .into_iter()
            .map(|item| RenderNodeDto {
                id: item.id.into(),
                name: item.name.as_str().to_string(),
                href: self.resolver.href(item),
                level,
                active: active.is_active(item.id),
                expanded: active.is_expanded(item.id),
                children: self.nodes(tree, Some(item.id), level + 1, active),
            })
            .collect()
    }
}
