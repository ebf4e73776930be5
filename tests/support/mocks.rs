// tests/support/mocks.rs
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tree_menu::application::ports::time::Clock;
use tree_menu::domain::errors::{DomainError, DomainResult};
use tree_menu::domain::menu::{
    Menu, MenuId, MenuItem, MenuItemId, MenuItemRepository, MenuItemUpdate, MenuName,
    MenuRepository, MenuSlug, MenuTree, NewMenu, NewMenuItem,
};

#[derive(Default)]
struct Tables {
    menus: BTreeMap<i64, Menu>,
    items: BTreeMap<i64, MenuItem>,
    next_menu: i64,
    next_item: i64,
}

/// Both repositories over one shared map, with the same uniqueness and
/// cascade behaviour as the SQLite schema.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item_count(&self) -> usize {
        self.tables.lock().unwrap().items.len()
    }
}

#[async_trait]
impl MenuRepository for InMemoryStore {
    async fn insert(&self, menu: NewMenu) -> DomainResult<Menu> {
        let mut tables = self.tables.lock().unwrap();
        if tables
            .menus
            .values()
            .any(|m| m.name == menu.name || m.slug == menu.slug)
        {
            return Err(DomainError::Conflict("menu name or slug already exists".into()));
        }
        tables.next_menu += 1;
        let id = tables.next_menu;
        let created = Menu {
            id: MenuId::new(id).unwrap(),
            name: menu.name,
            slug: menu.slug,
            created_at: menu.created_at,
        };
        tables.menus.insert(id, created.clone());
        Ok(created)
    }

    async fn rename(&self, id: MenuId, name: MenuName) -> DomainResult<Menu> {
        let mut tables = self.tables.lock().unwrap();
        if tables.menus.values().any(|m| m.id != id && m.name == name) {
            return Err(DomainError::Conflict("menu name already exists".into()));
        }
        let menu = tables
            .menus
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("menu".into()))?;
        menu.rename(name);
        Ok(menu.clone())
    }

    async fn delete(&self, id: MenuId) -> DomainResult<()> {
        let mut tables = self.tables.lock().unwrap();
        if tables.menus.remove(&i64::from(id)).is_none() {
            return Err(DomainError::NotFound("menu".into()));
        }
        tables.items.retain(|_, item| item.menu_id != id);
        Ok(())
    }

    async fn find_by_id(&self, id: MenuId) -> DomainResult<Option<Menu>> {
        Ok(self.tables.lock().unwrap().menus.get(&i64::from(id)).cloned())
    }

    async fn find_by_slug(&self, slug: &MenuSlug) -> DomainResult<Option<Menu>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.menus.values().find(|m| &m.slug == slug).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Menu>> {
        Ok(self.tables.lock().unwrap().menus.values().cloned().collect())
    }
}

#[async_trait]
impl MenuItemRepository for InMemoryStore {
    async fn insert(&self, item: NewMenuItem) -> DomainResult<MenuItem> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.menus.contains_key(&i64::from(item.menu_id)) {
            return Err(DomainError::NotFound("menu".into()));
        }
        if let Some(parent) = item.parent_id {
            if !tables.items.contains_key(&i64::from(parent)) {
                return Err(DomainError::NotFound("parent item".into()));
            }
        }
        tables.next_item += 1;
        let id = tables.next_item;
        let created = MenuItem {
            id: MenuItemId::new(id).unwrap(),
            menu_id: item.menu_id,
            name: item.name,
            link: item.link,
            parent_id: item.parent_id,
            created_at: item.created_at,
            updated_at: item.created_at,
        };
        tables.items.insert(id, created.clone());
        Ok(created)
    }

    async fn update_all(&self, updates: Vec<MenuItemUpdate>) -> DomainResult<Vec<MenuItem>> {
        let mut tables = self.tables.lock().unwrap();
        if updates
            .iter()
            .any(|update| !tables.items.contains_key(&i64::from(update.id)))
        {
            return Err(DomainError::NotFound("menu item".into()));
        }

        let mut saved = Vec::with_capacity(updates.len());
        for update in updates {
            if let Some(item) = tables.items.get_mut(&i64::from(update.id)) {
                item.name = update.name;
                item.link = update.link;
                item.parent_id = update.parent_id;
                item.updated_at = update.updated_at;
                saved.push(item.clone());
            }
        }
        Ok(saved)
    }

    async fn delete(&self, id: MenuItemId) -> DomainResult<()> {
        let mut tables = self.tables.lock().unwrap();
        let Some(item) = tables.items.get(&i64::from(id)) else {
            return Err(DomainError::NotFound("menu item".into()));
        };
        let menu_id = item.menu_id;
        let tree = MenuTree::new(
            tables
                .items
                .values()
                .filter(|i| i.menu_id == menu_id)
                .cloned()
                .collect(),
        );
        for removed in tree.subtree(id) {
            tables.items.remove(&i64::from(removed));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: MenuItemId) -> DomainResult<Option<MenuItem>> {
        Ok(self.tables.lock().unwrap().items.get(&i64::from(id)).cloned())
    }

    async fn list_by_menu(&self, menu_id: MenuId) -> DomainResult<Vec<MenuItem>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .items
            .values()
            .filter(|item| item.menu_id == menu_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> DomainResult<Vec<MenuItem>> {
        Ok(self.tables.lock().unwrap().items.values().cloned().collect())
    }
}

pub struct FixedClock;

impl FixedClock {
    pub fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Self::instant()
    }
}
