// src/domain/menu/errors.rs
use thiserror::Error;

/// Rule violations raised while validating a menu item before it is stored.
///
/// Every variant is a local, user-facing failure; nothing here is retryable.
/// The messages name the offending field and, where it helps, the expected
/// and actual values so an operator can fix the input directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuItemError {
    #[error("name must contain letters or digits")]
    EmptyName,

    #[error("url and named_url are mutually exclusive; set only one of them")]
    ConflictingFields,

    #[error("named_url '{0}' is not a registered route")]
    UnknownNamedRoute(String),

    #[error("url '{url}' {reason}")]
    BadFormat { url: String, reason: &'static str },

    #[error("url must start with '{expected}', got '{actual}'")]
    WrongMenuPrefix { expected: String, actual: String },

    #[error(
        "url depth does not match item level {level}: expected {expected} segment(s) after '{prefix}', got {actual}"
    )]
    WrongDepth {
        level: usize,
        prefix: String,
        expected: usize,
        actual: usize,
    },

    #[error("url must start with the parent path '{parent}', e.g. '{suggested}'")]
    WrongParentPrefix { parent: String, suggested: String },

    #[error("the {0} must be saved before items can reference it")]
    UnsavedDependency(&'static str),

    #[error("parent {parent} belongs to a different menu")]
    ForeignParent { parent: i64 },

    #[error("parent {parent} is item {item} or one of its descendants")]
    CycleDetected { item: i64, parent: i64 },
}

impl MenuItemError {
    /// Stable identifier surfaced to API clients next to the message.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyName => "EmptyName",
            Self::ConflictingFields => "ConflictingFields",
            Self::UnknownNamedRoute(_) => "UnknownNamedRoute",
            Self::BadFormat { .. } => "BadFormat",
            Self::WrongMenuPrefix { .. } => "WrongMenuPrefix",
            Self::WrongDepth { .. } => "WrongDepth",
            Self::WrongParentPrefix { .. } => "WrongParentPrefix",
            Self::UnsavedDependency(_) => "UnsavedDependency",
            Self::ForeignParent { .. } => "ForeignParent",
            Self::CycleDetected { .. } => "CycleDetected",
        }
    }
}
