// src/application/commands/items/delete.rs
use super::MenuItemCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::menu::MenuItemId,
};

pub struct DeleteMenuItemCommand {
    pub id: i64,
}

impl MenuItemCommandService {
    /// Deletes the item and, with it, its whole subtree.
    pub async fn delete_item(&self, command: DeleteMenuItemCommand) -> ApplicationResult<()> {
        let id = MenuItemId::new(command.id)?;
        let item = self
            .item_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("menu item not found"))?;

        self.item_repo.delete(id).await?;
        tracing::info!(item_id = %id, menu_id = %item.menu_id, "menu item deleted with its subtree");
        Ok(())
    }
}
