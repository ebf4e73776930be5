pub mod forms;
pub mod menus;
pub mod pages;
pub mod render;
