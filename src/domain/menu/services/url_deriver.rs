// src/domain/menu/services/url_deriver.rs
use std::sync::Arc;

use crate::application::ports::routes::RouteResolver;
use crate::application::ports::util::SlugGenerator;
use crate::domain::menu::entity::{Menu, MenuItem, MenuItemDraft};
use crate::domain::menu::errors::MenuItemError;
use crate::domain::menu::tree::MenuTree;
use crate::domain::menu::url::{self, PathRules};
use crate::domain::menu::value_objects::{MenuItemId, MenuLink};

/// Persisted relations a draft is validated against. `menu` and `parent` are
/// `None` when the referenced rows do not exist yet.
#[derive(Debug, Clone, Copy)]
pub struct ItemContext<'a> {
    pub menu: Option<&'a Menu>,
    pub parent: Option<&'a MenuItem>,
    /// Items of the draft's menu, the draft itself included when it exists.
    pub tree: &'a MenuTree,
}

/// Domain service that derives hierarchical item urls and validates the
/// explicit ones against the menu tree.
pub struct MenuUrlService {
    routes: Arc<dyn RouteResolver>,
    slugger: Arc<dyn SlugGenerator>,
}

impl MenuUrlService {
    pub fn new(routes: Arc<dyn RouteResolver>, slugger: Arc<dyn SlugGenerator>) -> Self {
        Self { routes, slugger }
    }

    /// Url segment for an item name, falling back to an id-based token when
    /// the slugger yields nothing.
    pub fn segment(&self, name: &str, id: Option<MenuItemId>) -> String {
        let slug = self.slugger.slugify(name);
        if slug.is_empty() {
            url::fallback_segment(id)
        } else {
            slug
        }
    }

    /// Path an item occupies in the hierarchy. Items with a stored url use it
    /// as is; named-route items sit where auto-generation would place them.
    pub fn canonical_path(&self, item: &MenuItem, menu: &Menu, tree: &MenuTree) -> String {
        let lineage = lineage(item, tree);
        let anchor = lineage.iter().position(|entry| entry.url().is_some());

        let (mut path, below) = match anchor {
            Some(index) => (
                lineage[index].url().unwrap_or_default().to_string(),
                &lineage[..index],
            ),
            None => (menu.slug.url_prefix(), &lineage[..]),
        };

        for entry in below.iter().rev() {
            path = url::child_url(&path, &self.segment(entry.name.as_str(), Some(entry.id)));
        }
        path
    }

    /// Url that auto-generation would assign to `item` in its current spot.
    pub fn preview_url(&self, item: &MenuItem, menu: &Menu, tree: &MenuTree) -> String {
        let base = item
            .parent_id
            .and_then(|parent_id| tree.get(parent_id))
            .map(|parent| self.canonical_path(parent, menu, tree))
            .unwrap_or_else(|| menu.slug.url_prefix());
        url::child_url(&base, &self.segment(item.name.as_str(), Some(item.id)))
    }

    /// Moves the stored urls below `root` under the paths their ancestors
    /// now occupy, keeping each item's last segment. `tree` must already hold
    /// `root` as it will be saved. Returns the items whose url changed,
    /// parents before children.
    pub fn rebase_descendants(
        &self,
        root: MenuItemId,
        menu: &Menu,
        tree: &MenuTree,
    ) -> Result<Vec<MenuItem>, MenuItemError> {
        let mut working = tree.clone();
        let mut rebased = Vec::new();

        for id in tree.subtree(root).into_iter().skip(1) {
            let Some(item) = working.get(id) else {
                continue;
            };
            let Some(stored) = item.url() else {
                continue;
            };
            let Some(parent) = item.parent_id.and_then(|parent_id| working.get(parent_id)) else {
                continue;
            };

            let segment = match url::last_segment(stored) {
                "" => self.segment(item.name.as_str(), Some(item.id)),
                kept => kept.to_string(),
            };
            let target = url::child_url(&self.canonical_path(parent, menu, &working), &segment);
            if target == stored {
                continue;
            }
            url::check_length(&target)?;

            let mut moved = item.clone();
            moved.link = MenuLink::Url(target);
            working.upsert(moved.clone());
            rebased.push(moved);
        }

        Ok(rebased)
    }

    /// Validates `draft` and returns the link to store: the named route, the
    /// explicit url, or a url derived from the tree when neither is given.
    pub fn validate_and_derive(
        &self,
        draft: &MenuItemDraft,
        ctx: ItemContext<'_>,
    ) -> Result<MenuLink, MenuItemError> {
        if !url::has_name_content(&draft.name) {
            return Err(MenuItemError::EmptyName);
        }

        let menu = ctx.menu.ok_or(MenuItemError::UnsavedDependency("menu"))?;
        let parent = self.check_parent(draft, menu, ctx)?;

        let explicit_url = draft.explicit_url();
        let named_url = draft.explicit_named_url();

        if explicit_url.is_some() && named_url.is_some() {
            return Err(MenuItemError::ConflictingFields);
        }

        if let Some(name) = named_url {
            self.routes
                .reverse(name)
                .map_err(|_| MenuItemError::UnknownNamedRoute(name.to_string()))?;
            return Ok(MenuLink::Named(name.to_string()));
        }

        let level = parent
            .map(|parent| ctx.tree.level(parent.id) + 1)
            .unwrap_or(0);
        let parent_path = parent.map(|parent| self.canonical_path(parent, menu, ctx.tree));
        let segment = self.segment(&draft.name, draft.id);

        let url = match explicit_url {
            Some(explicit) => explicit.to_string(),
            None => {
                let base = parent_path
                    .clone()
                    .unwrap_or_else(|| menu.slug.url_prefix());
                url::child_url(&base, &segment)
            }
        };

        PathRules {
            menu_slug: &menu.slug,
            level,
            parent_path: parent_path.as_deref(),
            segment: &segment,
        }
        .check(&url)?;

        Ok(MenuLink::Url(url))
    }

    fn check_parent<'a>(
        &self,
        draft: &MenuItemDraft,
        menu: &Menu,
        ctx: ItemContext<'a>,
    ) -> Result<Option<&'a MenuItem>, MenuItemError> {
        let Some(parent_id) = draft.parent_id else {
            return Ok(None);
        };

        let parent = ctx
            .parent
            .filter(|parent| parent.id == parent_id)
            .ok_or(MenuItemError::UnsavedDependency("parent item"))?;

        if parent.menu_id != menu.id {
            return Err(MenuItemError::ForeignParent {
                parent: parent_id.into(),
            });
        }

        if let Some(id) = draft.id {
            if ctx.tree.reaches(parent_id, id) {
                return Err(MenuItemError::CycleDetected {
                    item: id.into(),
                    parent: parent_id.into(),
                });
            }
        }

        Ok(Some(parent))
    }
}

/// `item` followed by its ancestors, nearest first.
fn lineage<'a>(item: &'a MenuItem, tree: &'a MenuTree) -> Vec<&'a MenuItem> {
    let mut chain = vec![item];
    let mut current = item.parent_id;
    while let Some(parent_id) = current {
        if chain.len() > tree.len() || chain.iter().any(|entry| entry.id == parent_id) {
            break;
        }
        let Some(parent) = tree.get(parent_id) else {
            break;
        };
        chain.push(parent);
        current = parent.parent_id;
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::routes::RouteError;
    use crate::domain::menu::tree::tests::item;
    use crate::domain::menu::value_objects::{MenuId, MenuName, MenuSlug};
    use chrono::Utc;

    struct Routes;

    impl RouteResolver for Routes {
        fn reverse(&self, name: &str) -> Result<String, RouteError> {
            match name {
                "home" => Ok("/".into()),
                "about" => Ok("/about/".into()),
                other => Err(RouteError::Unknown(other.into())),
            }
        }

        fn resolve(&self, path: &str) -> Option<String> {
            match path {
                "/" => Some("home".into()),
                "/about/" => Some("about".into()),
                _ => None,
            }
        }
    }

    /// ASCII-only slugger: anything outside `[a-z0-9]` becomes a separator.
    struct AsciiSlug;

    impl SlugGenerator for AsciiSlug {
        fn slugify(&self, input: &str) -> String {
            input
                .to_lowercase()
                .split(|c: char| !c.is_ascii_alphanumeric())
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join("-")
        }
    }

    fn service() -> MenuUrlService {
        MenuUrlService::new(Arc::new(Routes), Arc::new(AsciiSlug))
    }

    fn help_menu() -> Menu {
        Menu {
            id: MenuId::new(1).unwrap(),
            name: MenuName::new("Help").unwrap(),
            slug: MenuSlug::new("help").unwrap(),
            created_at: Utc::now(),
        }
    }

    fn docs() -> MenuItem {
        item(1, "Docs", MenuLink::Url("/help/docs/".into()), None)
    }

    fn draft(name: &str) -> MenuItemDraft {
        MenuItemDraft {
            name: name.into(),
            ..Default::default()
        }
    }

    fn child_draft(name: &str, parent: &MenuItem) -> MenuItemDraft {
        MenuItemDraft {
            parent_id: Some(parent.id),
            ..draft(name)
        }
    }

    fn derive(draft: &MenuItemDraft, parent: Option<&MenuItem>, tree: &MenuTree) -> Result<MenuLink, MenuItemError> {
        let menu = help_menu();
        service().validate_and_derive(
            draft,
            ItemContext {
                menu: Some(&menu),
                parent,
                tree,
            },
        )
    }

    #[test]
    fn root_url_is_derived_from_menu_slug() {
        let tree = MenuTree::default();
        let link = derive(&draft("Docs"), None, &tree).unwrap();
        assert_eq!(link, MenuLink::Url("/help/docs/".into()));
    }

    #[test]
    fn child_url_extends_parent_url() {
        let parent = docs();
        let tree = MenuTree::new(vec![parent.clone()]);
        let link = derive(&child_draft("Guides", &parent), Some(&parent), &tree).unwrap();
        assert_eq!(link, MenuLink::Url("/help/docs/guides/".into()));
    }

    #[test]
    fn derived_urls_satisfy_structural_rules_at_every_level() {
        let menu = help_menu();
        let svc = service();
        let mut items = Vec::new();
        let mut parent: Option<MenuItem> = None;

        for (index, name) in ["Docs", "Guides", "Install Steps", "Linux & BSD"].iter().enumerate() {
            let tree = MenuTree::new(items.clone());
            let draft = MenuItemDraft {
                parent_id: parent.as_ref().map(|p| p.id),
                ..draft(name)
            };
            let link = svc
                .validate_and_derive(
                    &draft,
                    ItemContext {
                        menu: Some(&menu),
                        parent: parent.as_ref(),
                        tree: &tree,
                    },
                )
                .unwrap();
            let derived = link.url().unwrap().to_string();
            assert!(derived.starts_with('/') && derived.ends_with('/'));
            assert!(!derived.contains("//"));
            assert_eq!(url::segment_depth(&derived), index + 1);

            let stored = item(
                index as i64 + 1,
                name,
                link,
                parent.as_ref().map(|p| i64::from(p.id)),
            );
            items.push(stored.clone());
            parent = Some(stored);
        }

        assert_eq!(
            parent.unwrap().url(),
            Some("/help/docs/guides/install-steps/linux-bsd/")
        );
    }

    #[test]
    fn punctuation_only_name_is_rejected() {
        let tree = MenuTree::default();
        assert_eq!(
            derive(&draft("?!  --"), None, &tree),
            Err(MenuItemError::EmptyName)
        );
    }

    #[test]
    fn unsluggable_name_falls_back_to_placeholder() {
        let tree = MenuTree::default();
        let link = derive(&draft("Главная"), None, &tree).unwrap();
        assert_eq!(link, MenuLink::Url("/help/item/".into()));

        let existing = MenuItemDraft {
            id: Some(MenuItemId::new(12).unwrap()),
            ..draft("Главная")
        };
        let link = derive(&existing, None, &tree).unwrap();
        assert_eq!(link, MenuLink::Url("/help/item-12/".into()));
    }

    #[test]
    fn url_and_named_url_conflict() {
        let tree = MenuTree::default();
        let conflicting = MenuItemDraft {
            url: Some("/help/docs/".into()),
            named_url: Some("home".into()),
            ..draft("Docs")
        };
        assert_eq!(
            derive(&conflicting, None, &tree),
            Err(MenuItemError::ConflictingFields)
        );
    }

    #[test]
    fn named_url_must_be_registered() {
        let tree = MenuTree::default();
        let known = MenuItemDraft {
            named_url: Some("about".into()),
            ..draft("About")
        };
        assert_eq!(
            derive(&known, None, &tree),
            Ok(MenuLink::Named("about".into()))
        );

        let unknown = MenuItemDraft {
            named_url: Some("missing".into()),
            ..draft("About")
        };
        assert_eq!(
            derive(&unknown, None, &tree),
            Err(MenuItemError::UnknownNamedRoute("missing".into()))
        );
    }

    #[test]
    fn explicit_url_without_trailing_slash_is_bad_format() {
        let tree = MenuTree::default();
        let explicit = MenuItemDraft {
            url: Some("/help/docs".into()),
            ..draft("Docs")
        };
        assert_eq!(derive(&explicit, None, &tree).unwrap_err().kind(), "BadFormat");
    }

    #[test]
    fn explicit_url_outside_parent_is_rejected() {
        let parent = docs();
        let tree = MenuTree::new(vec![parent.clone()]);
        let explicit = MenuItemDraft {
            url: Some("/help/other/guides/".into()),
            ..child_draft("Guides", &parent)
        };
        assert_eq!(
            derive(&explicit, Some(&parent), &tree).unwrap_err().kind(),
            "WrongParentPrefix"
        );
    }

    #[test]
    fn explicit_url_with_wrong_depth_is_rejected() {
        let parent = docs();
        let tree = MenuTree::new(vec![parent.clone()]);
        let explicit = MenuItemDraft {
            url: Some("/help/docs/".into()),
            ..child_draft("Guides", &parent)
        };
        assert_eq!(
            derive(&explicit, Some(&parent), &tree),
            Err(MenuItemError::WrongDepth {
                level: 1,
                prefix: "/help/".into(),
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn missing_menu_or_parent_is_unsaved_dependency() {
        let tree = MenuTree::default();
        let result = service().validate_and_derive(
            &draft("Docs"),
            ItemContext {
                menu: None,
                parent: None,
                tree: &tree,
            },
        );
        assert_eq!(result, Err(MenuItemError::UnsavedDependency("menu")));

        let orphan = MenuItemDraft {
            parent_id: Some(MenuItemId::new(5).unwrap()),
            ..draft("Guides")
        };
        assert_eq!(
            derive(&orphan, None, &tree),
            Err(MenuItemError::UnsavedDependency("parent item"))
        );
    }

    #[test]
    fn parent_from_another_menu_is_rejected() {
        let mut foreign = item(7, "Elsewhere", MenuLink::Url("/main/elsewhere/".into()), None);
        foreign.menu_id = MenuId::new(2).unwrap();
        let tree = MenuTree::default();
        assert_eq!(
            derive(&child_draft("Guides", &foreign), Some(&foreign), &tree),
            Err(MenuItemError::ForeignParent { parent: 7 })
        );
    }

    #[test]
    fn reparenting_under_own_descendant_is_a_cycle() {
        let root = docs();
        let child = item(2, "Guides", MenuLink::Url("/help/docs/guides/".into()), Some(1));
        let tree = MenuTree::new(vec![root.clone(), child.clone()]);

        let moved = MenuItemDraft {
            id: Some(root.id),
            parent_id: Some(child.id),
            ..draft("Docs")
        };
        assert_eq!(
            derive(&moved, Some(&child), &tree),
            Err(MenuItemError::CycleDetected { item: 1, parent: 2 })
        );

        let self_parent = MenuItemDraft {
            id: Some(root.id),
            parent_id: Some(root.id),
            ..draft("Docs")
        };
        assert_eq!(
            derive(&self_parent, Some(&root), &tree).unwrap_err().kind(),
            "CycleDetected"
        );
    }

    #[test]
    fn revalidating_a_valid_item_is_idempotent() {
        let parent = docs();
        let child = item(2, "Guides", MenuLink::Url("/help/docs/guides/".into()), Some(1));
        let tree = MenuTree::new(vec![parent.clone(), child.clone()]);

        let first = derive(&MenuItemDraft::from(&child), Some(&parent), &tree).unwrap();
        let second = derive(&MenuItemDraft::from(&child), Some(&parent), &tree).unwrap();
        assert_eq!(first, MenuLink::Url("/help/docs/guides/".into()));
        assert_eq!(first, second);
    }

    #[test]
    fn children_of_named_items_nest_under_their_canonical_path() {
        let about = item(1, "About", MenuLink::Named("about".into()), None);
        let tree = MenuTree::new(vec![about.clone()]);
        let link = derive(&child_draft("Team", &about), Some(&about), &tree).unwrap();
        assert_eq!(link, MenuLink::Url("/help/about/team/".into()));
    }

    #[test]
    fn preview_reflects_current_position() {
        let menu = help_menu();
        let parent = docs();
        let child = item(2, "How To", MenuLink::Url("/help/docs/custom/".into()), Some(1));
        let tree = MenuTree::new(vec![parent, child.clone()]);
        assert_eq!(
            service().preview_url(&child, &menu, &tree),
            "/help/docs/how-to/"
        );
    }

    #[test]
    fn moving_a_branch_rebases_stored_descendant_urls() {
        let menu = help_menu();
        let a = item(1, "A", MenuLink::Url("/help/c/a/".into()), Some(3));
        let b = item(2, "B", MenuLink::Url("/help/a/b/".into()), Some(1));
        let custom = item(4, "Deep", MenuLink::Url("/help/a/b/custom/".into()), Some(2));
        let c = item(3, "C", MenuLink::Url("/help/c/".into()), None);
        let tree = MenuTree::new(vec![a, b, c, custom]);

        let rebased = service().rebase_descendants(MenuItemId::new(1).unwrap(), &menu, &tree).unwrap();
        let urls: Vec<_> = rebased.iter().map(|item| item.url().unwrap()).collect();
        assert_eq!(urls, ["/help/c/a/b/", "/help/c/a/b/custom/"]);
    }

    #[test]
    fn renaming_a_named_parent_rebases_its_children() {
        let menu = help_menu();
        let about = item(1, "About Us", MenuLink::Named("about".into()), None);
        let team = item(2, "Team", MenuLink::Url("/help/about/team/".into()), Some(1));
        let tree = MenuTree::new(vec![about, team]);

        let rebased = service().rebase_descendants(MenuItemId::new(1).unwrap(), &menu, &tree).unwrap();
        assert_eq!(rebased.len(), 1);
        assert_eq!(rebased[0].url(), Some("/help/about-us/team/"));
    }

    #[test]
    fn unchanged_branch_is_left_alone() {
        let menu = help_menu();
        let parent = docs();
        let child = item(2, "Guides", MenuLink::Url("/help/docs/guides/".into()), Some(1));
        let named = item(3, "Home", MenuLink::Named("home".into()), Some(1));
        let tree = MenuTree::new(vec![parent, child, named]);

        let rebased = service().rebase_descendants(MenuItemId::new(1).unwrap(), &menu, &tree).unwrap();
        assert!(rebased.is_empty());
    }

    #[test]
    fn rebasing_past_the_url_limit_is_rejected() {
        let menu = help_menu();
        let long = "a".repeat(url::MAX_URL_LEN - "/help//x/".len());
        let parent = item(1, "Parent", MenuLink::Url(format!("/help/{long}/")), None);
        let child = item(2, "Child", MenuLink::Url("/help/old/child/".into()), Some(1));
        let tree = MenuTree::new(vec![parent, child]);

        let err = service().rebase_descendants(MenuItemId::new(1).unwrap(), &menu, &tree).unwrap_err();
        assert_eq!(err.kind(), "BadFormat");
    }
}
