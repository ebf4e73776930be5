// src/application/ports/routes.rs
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no route named '{0}'")]
    Unknown(String),
}

/// Maps symbolic route names to concrete paths and back.
pub trait RouteResolver: Send + Sync {
    /// Concrete path registered under `name`.
    fn reverse(&self, name: &str) -> Result<String, RouteError>;

    /// Route name whose path equals `path`, if any.
    fn resolve(&self, path: &str) -> Option<String>;
}
