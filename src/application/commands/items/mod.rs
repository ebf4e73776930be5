// src/application/commands/items/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::{CreateMenuItemCommand, CreateMenuItemCommandBuilder};
pub use delete::DeleteMenuItemCommand;
pub use service::MenuItemCommandService;
pub use update::UpdateMenuItemCommand;
