// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_menu;
mod sqlite_menu_item;

pub use sqlite_menu::SqliteMenuRepository;
pub use sqlite_menu_item::SqliteMenuItemRepository;
