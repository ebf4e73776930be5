// src/domain/menu/forms.rs
//! Which admin form fields an operator gets to edit.
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminForm {
    Menu,
    MenuItem,
}

impl AdminForm {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "menu" => Some(Self::Menu),
            "menu-item" | "item" => Some(Self::MenuItem),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::MenuItem => "menu-item",
        }
    }

    pub fn fields(&self, is_new: bool) -> BTreeSet<&'static str> {
        match self {
            Self::Menu => visible_fields(is_new),
            Self::MenuItem => ["menu", "name", "parent", "url", "named_url", "preview_url"]
                .into_iter()
                .collect(),
        }
    }
}

/// Menu form fields. The slug is only shown while the menu is being created;
/// afterwards it is immutable.
pub fn visible_fields(is_new: bool) -> BTreeSet<&'static str> {
    let mut fields = BTreeSet::from(["name"]);
    if is_new {
        fields.insert("slug");
    }
    fields
}
