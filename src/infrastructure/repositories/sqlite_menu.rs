// src/infrastructure/repositories/sqlite_menu.rs
use super::error::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::menu::{Menu, MenuId, MenuName, MenuRepository, MenuSlug, NewMenu};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const MENU_COLUMNS: &str = "id, name, slug, created_at";

#[derive(Clone)]
pub struct SqliteMenuRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteMenuRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MenuRow {
    id: i64,
    name: String,
    slug: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<MenuRow> for Menu {
    type Error = DomainError;

    fn try_from(row: MenuRow) -> Result<Self, Self::Error> {
        Ok(Menu {
            id: MenuId::new(row.id)?,
            name: MenuName::new(row.name)?,
            slug: MenuSlug::new(row.slug)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl MenuRepository for SqliteMenuRepository {
    async fn insert(&self, menu: NewMenu) -> DomainResult<Menu> {
        let NewMenu {
            name,
            slug,
            created_at,
        } = menu;

        let row = sqlx::query_as::<_, MenuRow>(&format!(
            "INSERT INTO menus (name, slug, created_at) VALUES (?, ?, ?) RETURNING {MENU_COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Menu::try_from(row)
    }

    async fn rename(&self, id: MenuId, name: MenuName) -> DomainResult<Menu> {
        let row = sqlx::query_as::<_, MenuRow>(&format!(
            "UPDATE menus SET name = ? WHERE id = ? RETURNING {MENU_COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("menu not found".into()))?;

        Menu::try_from(row)
    }

    async fn delete(&self, id: MenuId) -> DomainResult<()> {
        sqlx::query("DELETE FROM menus WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn find_by_id(&self, id: MenuId) -> DomainResult<Option<Menu>> {
        let row = sqlx::query_as::<_, MenuRow>(&format!(
            "SELECT {MENU_COLUMNS} FROM menus WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Menu::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &MenuSlug) -> DomainResult<Option<Menu>> {
        let row = sqlx::query_as::<_, MenuRow>(&format!(
            "SELECT {MENU_COLUMNS} FROM menus WHERE slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Menu::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Menu>> {
        let rows = sqlx::query_as::<_, MenuRow>(&format!(
            "SELECT {MENU_COLUMNS} FROM menus ORDER BY id"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Menu::try_from).collect()
    }
}
