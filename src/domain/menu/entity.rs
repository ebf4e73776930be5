// src/domain/menu/entity.rs
use crate::domain::menu::value_objects::{
    ItemName, MenuId, MenuItemId, MenuLink, MenuName, MenuSlug,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Menu {
    pub id: MenuId,
    pub name: MenuName,
    pub slug: MenuSlug,
    pub created_at: DateTime<Utc>,
}

impl Menu {
    /// Renaming never touches the slug; it is fixed when the menu is created.
    pub fn rename(&mut self, name: MenuName) {
        self.name = name;
    }
}

#[derive(Debug, Clone)]
pub struct NewMenu {
    pub name: MenuName,
    pub slug: MenuSlug,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub menu_id: MenuId,
    pub name: ItemName,
    pub link: MenuLink,
    pub parent_id: Option<MenuItemId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MenuItem {
    pub fn url(&self) -> Option<&str> {
        self.link.url()
    }

    pub fn named_url(&self) -> Option<&str> {
        self.link.named_url()
    }
}

#[derive(Debug, Clone)]
pub struct NewMenuItem {
    pub menu_id: MenuId,
    pub name: ItemName,
    pub link: MenuLink,
    pub parent_id: Option<MenuItemId>,
    pub created_at: DateTime<Utc>,
}

/// Full replacement of the editable fields of an item. The owning menu is
/// fixed once the item exists.
#[derive(Debug, Clone)]
pub struct MenuItemUpdate {
    pub id: MenuItemId,
    pub name: ItemName,
    pub link: MenuLink,
    pub parent_id: Option<MenuItemId>,
    pub updated_at: DateTime<Utc>,
}

/// Unvalidated item as submitted by an operator. `url` and `named_url` are
/// raw inputs: blank strings count as absent.
#[derive(Debug, Clone, Default)]
pub struct MenuItemDraft {
    pub id: Option<MenuItemId>,
    pub name: String,
    pub url: Option<String>,
    pub named_url: Option<String>,
    pub parent_id: Option<MenuItemId>,
}

impl MenuItemDraft {
    pub fn explicit_url(&self) -> Option<&str> {
        non_blank(self.url.as_deref())
    }

    pub fn explicit_named_url(&self) -> Option<&str> {
        non_blank(self.named_url.as_deref())
    }
}

impl From<&MenuItem> for MenuItemDraft {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: Some(item.id),
            name: item.name.as_str().to_string(),
            url: item.url().map(str::to_string),
            named_url: item.named_url().map(str::to_string),
            parent_id: item.parent_id,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_count_as_absent() {
        let draft = MenuItemDraft {
            name: "Docs".into(),
            url: Some("   ".into()),
            named_url: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(draft.explicit_url(), None);
        assert_eq!(draft.explicit_named_url(), None);
    }

    #[test]
    fn explicit_values_are_trimmed() {
        let draft = MenuItemDraft {
            name: "Docs".into(),
            url: Some(" /help/docs/ ".into()),
            ..Default::default()
        };
        assert_eq!(draft.explicit_url(), Some("/help/docs/"));
    }

    #[test]
    fn rename_keeps_slug() {
        let mut menu = Menu {
            id: MenuId::new(1).unwrap(),
            name: MenuName::new("Help").unwrap(),
            slug: MenuSlug::new("help").unwrap(),
            created_at: Utc::now(),
        };
        menu.rename(MenuName::new("Support").unwrap());
        assert_eq!(menu.name.as_str(), "Support");
        assert_eq!(menu.slug.as_str(), "help");
    }
}
