// src/domain/menu/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuId(i64);

impl MenuId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("menu id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<MenuId> for i64 {
    fn from(value: MenuId) -> Self {
        value.0
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuItemId(i64);

impl MenuItemId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "menu item id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<MenuItemId> for i64 {
    fn from(value: MenuItemId) -> Self {
        value.0
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuName(String);

impl MenuName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("menu name cannot be empty".into()));
        }
        if trimmed.chars().count() > 100 {
            return Err(DomainError::Validation(
                "menu name cannot exceed 100 characters".into(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MenuName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercase kebab-case identifier derived from a menu name at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MenuSlug(String);

impl MenuSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let is_valid = !value.is_empty()
            && !value.starts_with('-')
            && !value.ends_with('-')
            && value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

        if is_valid {
            Ok(Self(value))
        } else {
            Err(DomainError::Validation(format!(
                "'{value}' is not a valid menu slug"
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `/<slug>/` prefix every url in this menu starts with.
    pub fn url_prefix(&self) -> String {
        format!("/{}/", self.0)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MenuSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemName(String);

impl ItemName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("item name cannot be empty".into()));
        }
        if trimmed.chars().count() > 100 {
            return Err(DomainError::Validation(
                "item name cannot exceed 100 characters".into(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a menu item points. An item carries exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuLink {
    /// Hierarchical path inside the menu, e.g. `/help/docs/`.
    Url(String),
    /// Symbolic route name resolved at render time.
    Named(String),
}

impl MenuLink {
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::Named(_) => None,
        }
    }

    pub fn named_url(&self) -> Option<&str> {
        match self {
            Self::Url(_) => None,
            Self::Named(name) => Some(name),
        }
    }
}
