// src/application/queries/pages.rs
use crate::{
    application::{
        dto::{CurrentPageDto, MenuDto, MenuItemDto},
        error::ApplicationResult,
        ports::routes::RouteResolver,
    },
    domain::menu::{
        MenuItem, MenuItemRepository, MenuRepository, MenuTree, services::MenuUrlService,
        url::trim_trailing_slash,
    },
};
use std::sync::Arc;

pub struct FindPageQuery {
    pub path: String,
}

/// Finds which menu item, across all menus, a content page belongs to.
pub struct PageQueryService {
    menu_repo: Arc<dyn MenuRepository>,
    item_repo: Arc<dyn MenuItemRepository>,
    routes: Arc<dyn RouteResolver>,
    urls: Arc<MenuUrlService>,
}

impl PageQueryService {
    pub fn new(
        menu_repo: Arc<dyn MenuRepository>,
        item_repo: Arc<dyn MenuItemRepository>,
        routes: Arc<dyn RouteResolver>,
        urls: Arc<MenuUrlService>,
    ) -> Self {
        Self {
            menu_repo,
            item_repo,
            routes,
            urls,
        }
    }

    pub async fn find_current_item(&self, query: FindPageQuery) -> ApplicationResult<CurrentPageDto> {
        let current_path = trim_trailing_slash(&query.path).to_string();
        let menus = self.menu_repo.list().await?;
        let items = self.item_repo.list_all().await?;

        let route_name = self.routes.resolve(&current_path);
        let current_item = match_page(&items, &current_path, route_name.as_deref()).and_then(|item| {
            let menu = menus.iter().find(|menu| menu.id == item.menu_id)?;
            let tree = MenuTree::new(
                items
                    .iter()
                    .filter(|entry| entry.menu_id == menu.id)
                    .cloned()
                    .collect(),
            );
            Some(MenuItemDto::build(item, menu, &tree, &self.urls))
        });

        Ok(CurrentPageDto {
            current_path,
            current_item,
            menus: menus.into_iter().map(MenuDto::from).collect(),
        })
    }
}

/// Stored url first, then the route registered at the path, then a named
/// route spelled like the bare path.
fn match_page<'a>(
    items: &'a [MenuItem],
    path: &str,
    route_name: Option<&str>,
) -> Option<&'a MenuItem> {
    let by_name = |name: &str| items.iter().find(|item| item.named_url() == Some(name));

    items
        .iter()
        .find(|item| item.url().is_some_and(|url| trim_trailing_slash(url) == path))
        .or_else(|| route_name.and_then(by_name))
        .or_else(|| by_name(path.trim_matches('/')))
}
