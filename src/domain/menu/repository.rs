use crate::domain::errors::DomainResult;
use crate::domain::menu::entity::{Menu, MenuItem, MenuItemUpdate, NewMenu, NewMenuItem};
use crate::domain::menu::value_objects::{MenuId, MenuItemId, MenuName, MenuSlug};
use async_trait::async_trait;

#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn insert(&self, menu: NewMenu) -> DomainResult<Menu>;
    async fn rename(&self, id: MenuId, name: MenuName) -> DomainResult<Menu>;
    /// Removes the menu together with every item it owns.
    async fn delete(&self, id: MenuId) -> DomainResult<()>;
    async fn find_by_id(&self, id: MenuId) -> DomainResult<Option<Menu>>;
    async fn find_by_slug(&self, slug: &MenuSlug) -> DomainResult<Option<Menu>>;
    async fn list(&self) -> DomainResult<Vec<Menu>>;
}

#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    async fn insert(&self, item: NewMenuItem) -> DomainResult<MenuItem>;
    /// Applies every update or none of them. Rows come back in input order.
    async fn update_all(&self, updates: Vec<MenuItemUpdate>) -> DomainResult<Vec<MenuItem>>;
    /// Removes the item and its whole descendant subtree.
    async fn delete(&self, id: MenuItemId) -> DomainResult<()>;
    async fn find_by_id(&self, id: MenuItemId) -> DomainResult<Option<MenuItem>>;
    /// Items of one menu in creation (id) order.
    async fn list_by_menu(&self, menu_id: MenuId) -> DomainResult<Vec<MenuItem>>;
    /// Items of every menu in id order.
    async fn list_all(&self) -> DomainResult<Vec<MenuItem>>;
}
