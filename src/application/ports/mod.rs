// src/application/ports/mod.rs
pub mod routes;
pub mod time;
pub mod util;
