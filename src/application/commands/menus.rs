// src/application/commands/menus.rs
use crate::{
    application::{
        dto::MenuDto,
        error::{ApplicationError, ApplicationResult},
        ports::{time::Clock, util::SlugGenerator},
    },
    domain::menu::{Menu, MenuName, MenuRepository, MenuSlug, NewMenu},
};
use std::sync::Arc;

pub struct CreateMenuCommand {
    pub name: String,
}

pub struct RenameMenuCommand {
    pub slug: String,
    pub name: String,
}

pub struct DeleteMenuCommand {
    pub slug: String,
}

pub struct MenuCommandService {
    menu_repo: Arc<dyn MenuRepository>,
    slugger: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl MenuCommandService {
    pub fn new(
        menu_repo: Arc<dyn MenuRepository>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            menu_repo,
            slugger,
            clock,
        }
    }

    /// Creates a menu. The slug is derived from the name here and never
    /// changes afterwards.
    pub async fn create_menu(&self, command: CreateMenuCommand) -> ApplicationResult<MenuDto> {
        let name = MenuName::new(command.name)?;
        let raw_slug = self.slugger.slugify(name.as_str());
        if raw_slug.is_empty() {
            return Err(ApplicationError::validation(
                "menu name must contain letters or digits",
            ));
        }
        let slug = MenuSlug::new(raw_slug)?;

        let created = self
            .menu_repo
            .insert(NewMenu {
                name,
                slug,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(menu_id = %created.id, slug = %created.slug, "menu created");
        Ok(created.into())
    }

    pub async fn rename_menu(&self, command: RenameMenuCommand) -> ApplicationResult<MenuDto> {
        let menu = load_menu(self.menu_repo.as_ref(), &command.slug).await?;
        let name = MenuName::new(command.name)?;
        if menu.name == name {
            return Ok(menu.into());
        }

        let renamed = self.menu_repo.rename(menu.id, name).await?;
        tracing::info!(menu_id = %renamed.id, name = %renamed.name, "menu renamed");
        Ok(renamed.into())
    }

    pub async fn delete_menu(&self, command: DeleteMenuCommand) -> ApplicationResult<()> {
        let menu = load_menu(self.menu_repo.as_ref(), &command.slug).await?;
        self.menu_repo.delete(menu.id).await?;
        tracing::info!(menu_id = %menu.id, slug = %menu.slug, "menu deleted with its items");
        Ok(())
    }
}

/// Looks a menu up by its slug; malformed slugs are simply not found.
pub(crate) async fn load_menu(
    repo: &dyn MenuRepository,
    slug: &str,
) -> ApplicationResult<Menu> {
    let slug = MenuSlug::new(slug).map_err(|_| ApplicationError::not_found("menu not found"))?;
    repo.find_by_slug(&slug)
        .await?
        .ok_or_else(|| ApplicationError::not_found("menu not found"))
}
