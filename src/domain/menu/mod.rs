pub mod entity;
pub mod errors;
pub mod forms;
pub mod repository;
pub mod services;
pub mod tree;
pub mod url;
pub mod value_objects;

pub use entity::{Menu, MenuItem, MenuItemDraft, MenuItemUpdate, NewMenu, NewMenuItem};
pub use errors::MenuItemError;
pub use repository::{MenuItemRepository, MenuRepository};
pub use tree::MenuTree;
pub use value_objects::{ItemName, MenuId, MenuItemId, MenuLink, MenuName, MenuSlug};
