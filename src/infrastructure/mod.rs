pub mod database;
pub mod repositories;
pub mod routes;
pub mod time;
pub mod util;
