// src/infrastructure/repositories/sqlite_menu_item.rs
use super::error::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::menu::{
    ItemName, MenuId, MenuItem, MenuItemId, MenuItemRepository, MenuItemUpdate, MenuLink,
    NewMenuItem,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const ITEM_COLUMNS: &str = "id, menu_id, name, url, named_url, parent_id, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteMenuItemRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteMenuItemRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MenuItemRow {
    id: i64,
    menu_id: i64,
    name: String,
    url: Option<String>,
    named_url: Option<String>,
    parent_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<MenuItemRow> for MenuItem {
    type Error = DomainError;

    fn try_from(row: MenuItemRow) -> Result<Self, Self::Error> {
        let link = match (row.url, row.named_url) {
            (Some(url), None) => MenuLink::Url(url),
            (None, Some(name)) => MenuLink::Named(name),
            _ => {
                return Err(DomainError::Persistence(format!(
                    "menu item {} must store exactly one of url or named_url",
                    row.id
                )));
            }
        };

        Ok(MenuItem {
            id: MenuItemId::new(row.id)?,
            menu_id: MenuId::new(row.menu_id)?,
            name: ItemName::new(row.name)?,
            link,
            parent_id: row.parent_id.map(MenuItemId::new).transpose()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl MenuItemRepository for SqliteMenuItemRepository {
    async fn insert(&self, item: NewMenuItem) -> DomainResult<MenuItem> {
        let NewMenuItem {
            menu_id,
            name,
            link,
            parent_id,
            created_at,
        } = item;

        let row = sqlx::query_as::<_, MenuItemRow>(&format!(
            "INSERT INTO menu_items (menu_id, name, url, named_url, parent_id, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING {ITEM_COLUMNS}"
        ))
        .bind(i64::from(menu_id))
        .bind(name.as_str())
        .bind(link.url())
        .bind(link.named_url())
        .bind(parent_id.map(i64::from))
        .bind(created_at)
        .bind(created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        MenuItem::try_from(row)
    }

    async fn update_all(&self, updates: Vec<MenuItemUpdate>) -> DomainResult<Vec<MenuItem>> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let mut saved = Vec::with_capacity(updates.len());

        for MenuItemUpdate {
            id,
            name,
            link,
            parent_id,
            updated_at,
        } in updates
        {
            let row = sqlx::query_as::<_, MenuItemRow>(&format!(
                "UPDATE menu_items SET name = ?, url = ?, named_url = ?, parent_id = ?, updated_at = ? WHERE id = ? RETURNING {ITEM_COLUMNS}"
            ))
            .bind(name.as_str())
            .bind(link.url())
            .bind(link.named_url())
            .bind(parent_id.map(i64::from))
            .bind(updated_at)
            .bind(i64::from(id))
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("menu item not found".into()))?;

            saved.push(MenuItem::try_from(row)?);
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(saved)
    }

    async fn delete(&self, id: MenuItemId) -> DomainResult<()> {
        sqlx::query("DELETE FROM menu_items WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn find_by_id(&self, id: MenuItemId) -> DomainResult<Option<MenuItem>> {
        let row = sqlx::query_as::<_, MenuItemRow>(&format!(
            "SELECT {ITEM_COLUMNS} FROM menu_items WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(MenuItem::try_from).transpose()
    }

    async fn list_by_menu(&self, menu_id: MenuId) -> DomainResult<Vec<MenuItem>> {
        let rows = sqlx::query_as::<_, MenuItemRow>(&format!(
            "SELECT {ITEM_COLUMNS} FROM menu_items WHERE menu_id = ? ORDER BY id"
        ))
        .bind(i64::from(menu_id))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(MenuItem::try_from).collect()
    }

    async fn list_all(&self) -> DomainResult<Vec<MenuItem>> {
        let rows = sqlx::query_as::<_, MenuItemRow>(&format!(
            "SELECT {ITEM_COLUMNS} FROM menu_items ORDER BY id"
        ))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(MenuItem::try_from).collect()
    }
}
