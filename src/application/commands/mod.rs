pub mod items;
pub mod menus;
