// src/infrastructure/routes.rs
use crate::application::ports::routes::{RouteError, RouteResolver};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("route entry '{0}' must look like name=/path/")]
    Malformed(String),
    #[error("route '{0}' is declared twice")]
    Duplicate(String),
    #[error("route '{name}' has path '{path}' which does not start with '/'")]
    RelativePath { name: String, path: String },
}

/// Named routes known to the site, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct StaticRouteTable {
    routes: BTreeMap<String, String>,
}

impl StaticRouteTable {
    pub fn new<I, N, P>(entries: I) -> Result<Self, RouteTableError>
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: Into<String>,
    {
        let mut routes = BTreeMap::new();
        for (name, path) in entries {
            let name = name.into();
            let path = path.into();
            if !path.starts_with('/') {
                return Err(RouteTableError::RelativePath { name, path });
            }
            if routes.contains_key(&name) {
                return Err(RouteTableError::Duplicate(name));
            }
            routes.insert(name, path);
        }
        Ok(Self { routes })
    }

    /// Parses `home=/,about=/about/`. Blank entries are ignored.
    pub fn parse(raw: &str) -> Result<Self, RouteTableError> {
        let mut entries = Vec::new();
        for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, path) = entry
                .split_once('=')
                .map(|(name, path)| (name.trim(), path.trim()))
                .filter(|(name, path)| !name.is_empty() && !path.is_empty())
                .ok_or_else(|| RouteTableError::Malformed(entry.to_string()))?;
            entries.push((name.to_string(), path.to_string()));
        }
        Self::new(entries)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl RouteResolver for StaticRouteTable {
    fn reverse(&self, name: &str) -> Result<String, RouteError> {
        self.routes
            .get(name)
            .cloned()
            .ok_or_else(|| RouteError::Unknown(name.to_string()))
    }

    fn resolve(&self, path: &str) -> Option<String> {
        let wanted = path.trim_end_matches('/');
        self.routes
            .iter()
            .find(|(_, route)| route.trim_end_matches('/') == wanted)
            .map(|(name, _)| name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_name_path_pairs() {
        let table = StaticRouteTable::parse("home=/, about = /about/ ,").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.reverse("about").unwrap(), "/about/");
        assert_eq!(table.reverse("home").unwrap(), "/");
    }

    #[test]
    fn unknown_route_is_an_error() {
        let table = StaticRouteTable::parse("home=/").unwrap();
        assert_eq!(
            table.reverse("missing"),
            Err(RouteError::Unknown("missing".into()))
        );
    }

    #[test]
    fn resolve_maps_paths_back_to_names() {
        let table = StaticRouteTable::parse("home=/,about=/about/").unwrap();
        assert_eq!(table.resolve("/about"), Some("about".into()));
        assert_eq!(table.resolve("/"), Some("home".into()));
        assert_eq!(table.resolve("/nope/"), None);
    }

    #[test]
    fn malformed_entries_are_rejected() {
        assert_eq!(
            StaticRouteTable::parse("home").unwrap_err(),
            RouteTableError::Malformed("home".into())
        );
        assert!(matches!(
            StaticRouteTable::parse("home=about/"),
            Err(RouteTableError::RelativePath { .. })
        ));
        assert_eq!(
            StaticRouteTable::parse("a=/x/,a=/y/").unwrap_err(),
            RouteTableError::Duplicate("a".into())
        );
    }
}
