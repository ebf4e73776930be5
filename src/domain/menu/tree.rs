// src/domain/menu/tree.rs
use crate::domain::menu::entity::MenuItem;
use crate::domain::menu::value_objects::MenuItemId;
use std::collections::HashMap;

/// Arena of one menu's items keyed by id.
///
/// Iteration follows the order the items were handed in, which callers keep
/// as creation (id) order so that first-match lookups are reproducible.
/// Parent walks are bounded by the number of items, so a corrupt parent
/// chain in stored data ends the walk instead of looping.
#[derive(Debug, Clone, Default)]
pub struct MenuTree {
    order: Vec<MenuItemId>,
    items: HashMap<MenuItemId, MenuItem>,
}

impl MenuTree {
    pub fn new(items: Vec<MenuItem>) -> Self {
        let mut order = Vec::with_capacity(items.len());
        let mut map = HashMap::with_capacity(items.len());
        for item in items {
            let id = item.id;
            if map.insert(id, item).is_none() {
                order.push(id);
            }
        }
        Self { order, items: map }
    }

    /// Replaces the item with the same id, or appends it.
    pub fn upsert(&mut self, item: MenuItem) {
        let id = item.id;
        if self.items.insert(id, item).is_none() {
            self.order.push(id);
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn get(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.get(&id)
    }

    pub fn contains(&self, id: MenuItemId) -> bool {
        self.items.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.order.iter().filter_map(|id| self.items.get(id))
    }

    /// Ancestors of `id`, nearest parent first. The item itself is excluded.
    pub fn ancestors(&self, id: MenuItemId) -> Vec<MenuItemId> {
        let mut chain = Vec::new();
        let mut current = self.get(id).and_then(|item| item.parent_id);
        while let Some(parent_id) = current {
            if chain.len() >= self.len() || parent_id == id {
                break;
            }
            let Some(parent) = self.get(parent_id) else {
                break;
            };
            chain.push(parent_id);
            current = parent.parent_id;
        }
        chain
    }

    /// Depth from the root of the item's tree; roots are level 0.
    pub fn level(&self, id: MenuItemId) -> usize {
        self.ancestors(id).len()
    }

    /// True when following parent links from `from` (inclusive) reaches
    /// `target`. Assigning `from` as the parent of `target` would then close
    /// a cycle.
    pub fn reaches(&self, from: MenuItemId, target: MenuItemId) -> bool {
        from == target || self.ancestors(from).contains(&target)
    }

    /// Items whose parent is `parent`; `None` selects the roots.
    pub fn children(&self, parent: Option<MenuItemId>) -> Vec<&MenuItem> {
        self.iter().filter(|item| item.parent_id == parent).collect()
    }

    /// `id` followed by all of its descendants.
    pub fn subtree(&self, id: MenuItemId) -> Vec<MenuItemId> {
        if !self.contains(id) {
            return Vec::new();
        }
        let mut collected = vec![id];
        let mut cursor = 0;
        while cursor < collected.len() {
            let current = collected[cursor];
            for child in self.children(Some(current)) {
                if !collected.contains(&child.id) {
                    collected.push(child.id);
                }
            }
            cursor += 1;
        }
        collected
    }

    /// Display form used in admin listings: `Menu: Root > Child > Item`.
    pub fn full_path(&self, id: MenuItemId, menu_name: &str) -> String {
        let Some(item) = self.get(id) else {
            return menu_name.to_string();
        };
        let mut names: Vec<&str> = self
            .ancestors(id)
            .iter()
            .filter_map(|ancestor| self.get(*ancestor))
            .map(|ancestor| ancestor.name.as_str())
            .collect();
        names.reverse();
        names.push(item.name.as_str());
        format!("{menu_name}: {}", names.join(" > "))
    }
}
