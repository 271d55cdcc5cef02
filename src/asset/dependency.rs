//! Client dependency identifiers.

use std::fmt;

/// Prefix marking the engine's own runtime modules.
pub const ENGINE_MODULE_PREFIX: &str = "@@page-assets/";

/// Logical id of a client-side module.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DependencyId {
    /// A file of the user's app, e.g. `/pages/index.page.js`.
    Local(String),
    /// One of the engine's runtime modules. Holds the path after
    /// [`ENGINE_MODULE_PREFIX`], relative to the engine's package root.
    Engine(String),
}

impl DependencyId {
    /// Parse a raw id, splitting off the engine prefix.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix(ENGINE_MODULE_PREFIX) {
            Some(rest) => Self::Engine(rest.to_string()),
            None => Self::Local(raw.to_string()),
        }
    }

    /// The raw id, as written in manifests and key maps.
    pub fn raw(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DependencyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(path) => f.write_str(path),
            Self::Engine(path) => write!(f, "{ENGINE_MODULE_PREFIX}{path}"),
        }
    }
}

impl From<&str> for DependencyId {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// A client module a page depends on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientDependency {
    pub id: DependencyId,
    /// Only collect the module's static assets (CSS, images, fonts), not the
    /// module itself. Set for modules imported by server-only code.
    pub only_assets: bool,
}

impl ClientDependency {
    pub fn new(id: impl Into<DependencyId>) -> Self {
        Self {
            id: id.into(),
            only_assets: false,
        }
    }

    pub fn assets_only(id: impl Into<DependencyId>) -> Self {
        Self {
            id: id.into(),
            only_assets: true,
        }
    }
}
