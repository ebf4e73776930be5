// src/domain/menu/url.rs
//! Path rules shared by url derivation, validation and active-path matching.
use crate::domain::menu::errors::MenuItemError;
use crate::domain::menu::value_objects::{MenuItemId, MenuSlug};

/// Longest url a menu item may store.
pub const MAX_URL_LEN: usize = 200;

/// Drops trailing slashes so `/help/docs/` and `/help/docs` compare equal.
pub fn trim_trailing_slash(path: &str) -> &str {
    path.trim_end_matches('/')
}

/// True when the name keeps at least one letter or digit once punctuation and
/// whitespace are stripped. Letters of any script count.
pub fn has_name_content(name: &str) -> bool {
    name.chars().any(char::is_alphanumeric)
}

/// Segment used when the slugger cannot produce anything for a name.
pub fn fallback_segment(id: Option<MenuItemId>) -> String {
    match id {
        Some(id) => format!("item-{id}"),
        None => "item".to_string(),
    }
}

/// `<base without trailing slash>/<segment>/`
pub fn child_url(base: &str, segment: &str) -> String {
    format!("{}/{}/", trim_trailing_slash(base), segment)
}

/// Final path segment, `docs` for `/help/docs/`.
pub fn last_segment(url: &str) -> &str {
    trim_trailing_slash(url).rsplit('/').next().unwrap_or_default()
}

pub fn check_length(url: &str) -> Result<(), MenuItemError> {
    if url.chars().count() > MAX_URL_LEN {
        return Err(MenuItemError::BadFormat {
            url: url.to_string(),
            reason: "must be at most 200 characters long",
        });
    }
    Ok(())
}

/// Number of segments after the first one, i.e. after the menu prefix.
pub fn segment_depth(url: &str) -> usize {
    url.trim_matches('/').matches('/').count()
}

/// Structural context an explicit url is checked against.
#[derive(Debug, Clone, Copy)]
pub struct PathRules<'a> {
    pub menu_slug: &'a MenuSlug,
    pub level: usize,
    pub parent_path: Option<&'a str>,
    /// Slug of the item's own name, used to suggest a fix.
    pub segment: &'a str,
}

impl PathRules<'_> {
    /// Checks run in a fixed order and stop at the first violation.
    pub fn check(&self, url: &str) -> Result<(), MenuItemError> {
        check_length(url)?;

        if !(url.starts_with('/') && url.ends_with('/')) {
            return Err(MenuItemError::BadFormat {
                url: url.to_string(),
                reason: "must start and end with '/'",
            });
        }

        if url.contains("//") {
            return Err(MenuItemError::BadFormat {
                url: url.to_string(),
                reason: "must not contain repeated slashes",
            });
        }

        let prefix = self.menu_slug.url_prefix();
        if !url.starts_with(&prefix) {
            return Err(MenuItemError::WrongMenuPrefix {
                expected: prefix,
                actual: url.to_string(),
            });
        }

        let expected = self.level + 1;
        let actual = segment_depth(url);
        if actual != expected {
            return Err(MenuItemError::WrongDepth {
                level: self.level,
                prefix,
                expected,
                actual,
            });
        }

        if let Some(parent) = self.parent_path {
            let parent_prefix = format!("{}/", trim_trailing_slash(parent));
            if !url.starts_with(&parent_prefix) {
                return Err(MenuItemError::WrongParentPrefix {
                    parent: parent.to_string(),
                    suggested: child_url(parent, self.segment),
                });
            }
        }

        Ok(())
    }
}
