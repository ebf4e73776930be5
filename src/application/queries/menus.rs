// src/application/queries/menus.rs
use crate::{
    application::{
        commands::menus::load_menu,
        dto::{MenuDetailDto, MenuDto, MenuItemDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::menu::{
        Menu, MenuItemId, MenuItemRepository, MenuRepository, MenuTree,
        services::MenuUrlService,
    },
};
use std::sync::Arc;

pub struct GetMenuQuery {
    pub slug: String,
}

pub struct GetMenuItemQuery {
    pub id: i64,
}

pub struct MenuQueryService {
    menu_repo: Arc<dyn MenuRepository>,
    item_repo: Arc<dyn MenuItemRepository>,
    urls: Arc<MenuUrlService>,
}

impl MenuQueryService {
    pub fn new(
        menu_repo: Arc<dyn MenuRepository>,
        item_repo: Arc<dyn MenuItemRepository>,
        urls: Arc<MenuUrlService>,
    ) -> Self {
        Self {
            menu_repo,
            item_repo,
            urls,
        }
    }

    pub async fn list_menus(&self) -> ApplicationResult<Vec<MenuDto>> {
        let menus = self.menu_repo.list().await?;
        Ok(menus.into_iter().map(Into::into).collect())
    }

    pub async fn find_menu(&self, query: GetMenuQuery) -> ApplicationResult<MenuDto> {
        load_menu(self.menu_repo.as_ref(), &query.slug)
            .await
            .map(Into::into)
    }

    pub async fn get_menu(&self, query: GetMenuQuery) -> ApplicationResult<MenuDetailDto> {
        let menu = load_menu(self.menu_repo.as_ref(), &query.slug).await?;
        let tree = MenuTree::new(self.item_repo.list_by_menu(menu.id).await?);
        let items = self.item_dtos(&menu, &tree);
        Ok(MenuDetailDto {
            menu: menu.into(),
            items,
        })
    }

    pub async fn list_items(&self, query: GetMenuQuery) -> ApplicationResult<Vec<MenuItemDto>> {
        self.get_menu(query).await.map(|detail| detail.items)
    }

    pub async fn get_item(&self, query: GetMenuItemQuery) -> ApplicationResult<MenuItemDto> {
        let id = MenuItemId::new(query.id)?;
        let item = self
            .item_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("menu item not found"))?;
        let menu = self
            .menu_repo
            .find_by_id(item.menu_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("menu not found"))?;
        let tree = MenuTree::new(self.item_repo.list_by_menu(menu.id).await?);
        Ok(MenuItemDto::build(&item, &menu, &tree, &self.urls))
    }

    fn item_dtos(&self, menu: &Menu, tree: &MenuTree) -> Vec<MenuItemDto> {
        tree.iter()
            .map(|item| MenuItemDto::build(item, menu, tree, &self.urls))
            .collect()
    }
}
