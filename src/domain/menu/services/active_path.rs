// src/domain/menu/services/active_path.rs
use std::collections::HashSet;
use std::sync::Arc;

use crate::application::ports::routes::RouteResolver;
use crate::domain::menu::entity::MenuItem;
use crate::domain::menu::tree::MenuTree;
use crate::domain::menu::url::trim_trailing_slash;
use crate::domain::menu::value_objects::MenuItemId;

/// Outcome of matching a request path against a menu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivePath {
    pub active: Option<MenuItemId>,
    /// Ancestors of the active item. The active item itself is not included.
    pub expanded: HashSet<MenuItemId>,
}

impl ActivePath {
    pub fn is_active(&self, id: MenuItemId) -> bool {
        self.active == Some(id)
    }

    pub fn is_expanded(&self, id: MenuItemId) -> bool {
        self.expanded.contains(&id)
    }
}

pub struct ActivePathResolver {
    routes: Arc<dyn RouteResolver>,
}

impl ActivePathResolver {
    pub fn new(routes: Arc<dyn RouteResolver>) -> Self {
        Self { routes }
    }

    /// Finds the item matching `current_path` and the ancestors to expand.
    ///
    /// Items are scanned in tree order and the first match wins. Stored urls
    /// are tried before named routes; a named route that fails to resolve is
    /// simply not a match. This never fails.
    pub fn resolve(&self, tree: &MenuTree, current_path: &str) -> ActivePath {
        let path = trim_trailing_slash(current_path);

        let active = tree
            .iter()
            .find(|item| {
                item.url()
                    .is_some_and(|url| trim_trailing_slash(url) == path)
            })
            .or_else(|| {
                tree.iter().find(|item| {
                    item.named_url()
                        .is_some_and(|name| self.named_route_matches(name, path))
                })
            });

        match active {
            Some(item) => ActivePath {
                active: Some(item.id),
                expanded: tree.ancestors(item.id).into_iter().collect(),
            },
            None => ActivePath::default(),
        }
    }

    /// Link target shown for an item: its url, or the resolved named route.
    pub fn href(&self, item: &MenuItem) -> Option<String> {
        if let Some(url) = item.url() {
            return Some(url.to_string());
        }
        let name = item.named_url()?;
        self.routes.reverse(name).ok()
    }

    fn named_route_matches(&self, name: &str, path: &str) -> bool {
        match self.routes.reverse(name) {
            Ok(resolved) => trim_trailing_slash(&resolved) == path,
            Err(err) => {
                tracing::debug!(route = name, error = %err, "skipping unresolvable named route");
                false
            }
        }
    }
}
