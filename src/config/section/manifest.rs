//! `[manifest]` section configuration.
//!
//! Locations of the two build outputs consumed in production.
//!
//! # Example
//!
//! ```toml
//! [manifest]
//! plugin = "dist/server/plugin-manifest.json"   # Written by the build plugin
//! client = "dist/client/manifest.json"          # Client bundler manifest
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Build manifest locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Plugin (runtime) manifest.
    pub plugin: PathBuf,

    /// Client build manifest.
    pub client: PathBuf,
}

impl ManifestConfig {
    pub const PLUGIN: FieldPath = FieldPath::new("manifest.plugin");
    pub const CLIENT: FieldPath = FieldPath::new("manifest.client");

    pub fn normalize(&mut self, base: &Path) {
        self.plugin = base.join(&self.plugin);
        self.client = base.join(&self.client);
    }

    /// Both files must exist before a production render.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, path) in [(Self::PLUGIN, &self.plugin), (Self::CLIENT, &self.client)] {
            if !path.is_file() {
                diag.error_with_hint(
                    field,
                    format!("`{}` not found", path.display()),
                    "build the app first, or fix the path under [manifest]",
                );
            }
        }
    }
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            plugin: PathBuf::from("dist/server/plugin-manifest.json"),
            client: PathBuf::from("dist/client/manifest.json"),
        }
    }
}
