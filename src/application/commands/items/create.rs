// src/application/commands/items/create.rs
use super::MenuItemCommandService;
use crate::{
    application::{dto::MenuItemDto, error::ApplicationResult},
    domain::menu::{ItemName, MenuId, MenuItemDraft, MenuItemId, NewMenuItem},
};

pub struct CreateMenuItemCommand {
    pub menu_id: i64,
    pub name: String,
    pub url: Option<String>,
    pub named_url: Option<String>,
    pub parent_id: Option<i64>,
}

impl CreateMenuItemCommand {
    pub fn builder() -> CreateMenuItemCommandBuilder {
        CreateMenuItemCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateMenuItemCommandBuilder {
    menu_id: Option<i64>,
    name: Option<String>,
    url: Option<String>,
    named_url: Option<String>,
    parent_id: Option<i64>,
}

impl CreateMenuItemCommandBuilder {
    pub fn menu_id(mut self, menu_id: i64) -> Self {
        self.menu_id = Some(menu_id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn named_url(mut self, named_url: impl Into<String>) -> Self {
        self.named_url = Some(named_url.into());
        self
    }

    pub fn parent_id(mut self, parent_id: i64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn build(self) -> Result<CreateMenuItemCommand, &'static str> {
        Ok(CreateMenuItemCommand {
            menu_id: self.menu_id.ok_or("menu_id is required")?,
            name: self.name.ok_or("name is required")?,
            url: self.url,
            named_url: self.named_url,
            parent_id: self.parent_id,
        })
    }
}

impl MenuItemCommandService {
    pub async fn create_item(&self, command: CreateMenuItemCommand) -> ApplicationResult<MenuItemDto> {
        let menu_id = MenuId::new(command.menu_id)?;
        let parent_id = command.parent_id.map(MenuItemId::new).transpose()?;

        let draft = MenuItemDraft {
            id: None,
            name: command.name,
            url: command.url,
            named_url: command.named_url,
            parent_id,
        };

        let validated = self.validate(&draft, menu_id).await?;
        let created = self
            .item_repo
            .insert(NewMenuItem {
                menu_id: validated.menu.id,
                name: ItemName::new(draft.name)?,
                link: validated.link,
                parent_id,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(
            item_id = %created.id,
            menu_id = %created.menu_id,
            url = created.url().unwrap_or_default(),
            "menu item created"
        );

        let mut tree = validated.tree;
        tree.upsert(created.clone());
        Ok(MenuItemDto::build(&created, &validated.menu, &tree, &self.urls))
    }
}
