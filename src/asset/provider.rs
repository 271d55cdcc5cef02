//! External collaborators of the asset engine.
//!
//! The dev server's module graph and the host's module resolution live
//! outside this crate; they are reached through these traits.

use std::path::{Path, PathBuf};

use super::ClientDependency;
use crate::core::{AssetError, Result};

/// A running dev server.
pub trait DevServer: Send + Sync {
    /// Project root the dev server serves from (host path form).
    fn root(&self) -> &str;

    /// Stylesheets and other static assets imported by `dependencies`,
    /// found by walking the live module graph.
    fn style_assets(&self, dependencies: &[ClientDependency]) -> Result<Vec<String>>;
}

/// Resolves the engine's own runtime modules to files on disk.
pub trait ModuleResolver: Send + Sync {
    /// Absolute path of `request`, a path relative to the engine's package root.
    fn resolve(&self, request: &str) -> Result<PathBuf>;
}

/// Resolve engine modules inside an installed package directory.
#[derive(Debug, Clone)]
pub struct PackageResolver {
    package_root: PathBuf,
}

impl PackageResolver {
    pub fn new(package_root: impl Into<PathBuf>) -> Self {
        Self {
            package_root: package_root.into(),
        }
    }

    pub fn package_root(&self) -> &Path {
        &self.package_root
    }
}

impl ModuleResolver for PackageResolver {
    fn resolve(&self, request: &str) -> Result<PathBuf> {
        let path = self.package_root.join(request);
        let resolved = path
            .canonicalize()
            .map_err(|err| AssetError::assertion(format!("cannot resolve engine module: {err}"), &path))?;
        strip_verbatim_prefix(resolved)
    }
}

/// Drop the `\\?\` prefix Windows puts on canonicalized paths.
///
/// Network shares (`\\?\UNC\...`) have no `/@fs` form the dev server can read.
fn strip_verbatim_prefix(path: PathBuf) -> Result<PathBuf> {
    match path.to_str().and_then(|s| s.strip_prefix(r"\\?\")) {
        Some(stripped) if stripped.starts_with(r"UNC\") => Err(AssetError::assertion(
            "engine package on a network share is not supported",
            &path,
        )),
        Some(stripped) => Ok(PathBuf::from(stripped)),
        None => Ok(path),
    }
}

/// Dev server with a fixed root and a fixed list of stylesheets.
///
/// Stands in for a live dev server when its module graph is already known,
/// e.g. from the CLI or in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticDevServer {
    pub root: String,
    pub styles: Vec<String>,
}

impl StaticDevServer {
    pub fn new(root: impl Into<String>, styles: Vec<String>) -> Self {
        Self {
            root: root.into(),
            styles,
        }
    }
}

impl DevServer for StaticDevServer {
    fn root(&self) -> &str {
        &self.root
    }

    fn style_assets(&self, _dependencies: &[ClientDependency]) -> Result<Vec<String>> {
        Ok(self.styles.clone())
    }
}
