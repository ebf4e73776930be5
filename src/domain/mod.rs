pub mod errors;
pub mod menu;
