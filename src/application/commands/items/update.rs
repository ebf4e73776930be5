// src/application/commands/items/update.rs
use super::MenuItemCommandService;
use crate::{
    application::{
        dto::MenuItemDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::menu::{ItemName, MenuItem, MenuItemDraft, MenuItemId, MenuItemUpdate},
};

/// Replaces every editable field, like submitting the admin form. Blank
/// `url` and `named_url` clear the field; an item left with neither gets its
/// url derived again.
pub struct UpdateMenuItemCommand {
    pub id: i64,
    pub name: String,
    pub url: Option<String>,
    pub named_url: Option<String>,
    pub parent_id: Option<i64>,
}

impl MenuItemCommandService {
    /// Saves the item and, in the same write, moves the stored urls of its
    /// descendants under its new canonical path.
    pub async fn update_item(&self, command: UpdateMenuItemCommand) -> ApplicationResult<MenuItemDto> {
        let id = MenuItemId::new(command.id)?;
        let existing = self
            .item_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("menu item not found"))?;
        let parent_id = command.parent_id.map(MenuItemId::new).transpose()?;

        let draft = MenuItemDraft {
            id: Some(id),
            name: command.name,
            url: command.url,
            named_url: command.named_url,
            parent_id,
        };

        let validated = self.validate(&draft, existing.menu_id).await?;
        let now = self.clock.now();
        let pending = MenuItem {
            name: ItemName::new(draft.name)?,
            link: validated.link,
            parent_id,
            updated_at: now,
            ..existing.clone()
        };

        let mut tree = validated.tree;
        tree.upsert(pending.clone());
        let rebased = self.urls.rebase_descendants(id, &validated.menu, &tree)?;
        let rebased_count = rebased.len();

        let updates: Vec<_> = std::iter::once(pending)
            .chain(rebased)
            .map(|item| MenuItemUpdate {
                id: item.id,
                name: item.name,
                link: item.link,
                parent_id: item.parent_id,
                updated_at: now,
            })
            .collect();
        let saved = self.item_repo.update_all(updates).await?;
        for item in &saved {
            tree.upsert(item.clone());
        }

        let updated = saved
            .into_iter()
            .next()
            .ok_or_else(|| ApplicationError::not_found("menu item not found"))?;

        if existing.parent_id != updated.parent_id || rebased_count > 0 {
            tracing::info!(
                item_id = %updated.id,
                rebased = rebased_count,
                "menu item moved"
            );
        }

        Ok(MenuItemDto::build(&updated, &validated.menu, &tree, &self.urls))
    }
}
