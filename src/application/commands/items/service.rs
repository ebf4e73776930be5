// src/application/commands/items/service.rs
use std::sync::Arc;

use crate::{
    application::{error::ApplicationResult, ports::time::Clock},
    domain::menu::{
        Menu, MenuId, MenuItemDraft, MenuItemError, MenuItemRepository, MenuLink, MenuRepository,
        MenuTree,
        services::{ItemContext, MenuUrlService},
    },
};

pub struct MenuItemCommandService {
    pub(super) menu_repo: Arc<dyn MenuRepository>,
    pub(super) item_repo: Arc<dyn MenuItemRepository>,
    pub(super) urls: Arc<MenuUrlService>,
    pub(super) clock: Arc<dyn Clock>,
}

/// A draft that passed validation, with the relations it was checked against.
pub(super) struct ValidatedItem {
    pub menu: Menu,
    pub tree: MenuTree,
    pub link: MenuLink,
}

impl MenuItemCommandService {
    pub fn new(
        menu_repo: Arc<dyn MenuRepository>,
        item_repo: Arc<dyn MenuItemRepository>,
        urls: Arc<MenuUrlService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            menu_repo,
            item_repo,
            urls,
            clock,
        }
    }

    /// Loads the menu, its items and the referenced parent, then runs the url
    /// rules. Nothing is written here.
    pub(super) async fn validate(
        &self,
        draft: &MenuItemDraft,
        menu_id: MenuId,
    ) -> ApplicationResult<ValidatedItem> {
        let menu = self.menu_repo.find_by_id(menu_id).await?;
        let tree = match &menu {
            Some(menu) => MenuTree::new(self.item_repo.list_by_menu(menu.id).await?),
            None => MenuTree::default(),
        };

        let parent = match draft.parent_id {
            Some(parent_id) => match tree.get(parent_id) {
                Some(parent) => Some(parent.clone()),
                None => self.item_repo.find_by_id(parent_id).await?,
            },
            None => None,
        };

        let link = self
            .urls
            .validate_and_derive(
                draft,
                ItemContext {
                    menu: menu.as_ref(),
                    parent: parent.as_ref(),
                    tree: &tree,
                },
            )
            .inspect_err(|err| {
                tracing::debug!(kind = err.kind(), error = %err, "menu item rejected");
            })?;

        let menu = menu.ok_or(MenuItemError::UnsavedDependency("menu"))?;
        Ok(ValidatedItem { menu, tree, link })
    }
}
