pub mod menus;
pub mod render;

pub use menus::{CurrentPageDto, FormFieldsDto, MenuDetailDto, MenuDto, MenuItemDto};
pub use render::{MenuRenderDto, RenderNodeDto};
