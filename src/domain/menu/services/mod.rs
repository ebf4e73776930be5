// src/domain/menu/services/mod.rs
mod active_path;
mod url_deriver;

pub use active_path::{ActivePath, ActivePathResolver};
pub use url_deriver::{ItemContext, MenuUrlService};
