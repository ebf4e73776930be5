// src/presentation/http/controllers/mod.rs
pub mod admin;
pub mod items;
pub mod menus;
pub mod render;
