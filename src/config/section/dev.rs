//! `[dev]` section configuration.
//!
//! Dev server inputs, used when rendering in development mode.
//!
//! # Example
//!
//! ```toml
//! [dev]
//! root = "."                                  # Dev server root (relative to config file)
//! package_root = "node_modules/page-assets"   # Where engine runtime modules live
//! styles = ["/src/main.css"]                  # Stylesheets served by the dev server
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Default location of the engine's runtime modules, relative to the dev root.
pub const DEFAULT_PACKAGE_DIR: &str = "node_modules/page-assets";

/// Dev server settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevConfig {
    /// Dev server root directory.
    pub root: Option<PathBuf>,

    /// Installed engine package. Default: `<root>/node_modules/page-assets`.
    pub package_root: Option<PathBuf>,

    /// Stylesheet and asset URLs the dev server reports for the page.
    pub styles: Vec<String>,
}

impl DevConfig {
    pub const ROOT: FieldPath = FieldPath::new("dev.root");
    pub const STYLES: FieldPath = FieldPath::new("dev.styles");

    /// Resolve relative paths against the config file's directory.
    pub fn normalize(&mut self, base: &Path) {
        if let Some(root) = self.root.take() {
            self.root = Some(base.join(root));
        }
        if let Some(package_root) = self.package_root.take() {
            self.package_root = Some(base.join(package_root));
        }
    }

    /// Engine package directory, falling back to the default under `root`.
    pub fn package_root(&self) -> Option<PathBuf> {
        self.package_root
            .clone()
            .or_else(|| self.root.as_ref().map(|root| root.join(DEFAULT_PACKAGE_DIR)))
    }

    /// Validate for a development render.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match &self.root {
            None => diag.error_with_hint(
                Self::ROOT,
                "dev server root is required in development mode",
                "set `root` under [dev], or pass --production",
            ),
            Some(root) if !root.is_dir() => {
                diag.error(Self::ROOT, format!("`{}` is not a directory", root.display()));
            }
            Some(_) => {}
        }
        if let Some(style) = self.styles.iter().find(|s| !s.starts_with('/')) {
            diag.error(Self::STYLES, format!("`{style}` must be an absolute URL path"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_dev_config() {
        let config = test_parse_config("[dev]\nroot = \"app\"\nstyles = [\"/src/main.css\"]");
        assert_eq!(config.dev.root, Some(PathBuf::from("app")));
        assert_eq!(config.dev.styles, ["/src/main.css"]);
        assert_eq!(config.dev.package_root, None);
    }

    #[test]
    fn test_normalize_and_package_root() {
        let mut dev = DevConfig {
            root: Some(PathBuf::from("app")),
            ..Default::default()
        };
        dev.normalize(Path::new("/site"));
        assert_eq!(dev.root, Some(PathBuf::from("/site/app")));
        assert_eq!(
            dev.package_root(),
            Some(PathBuf::from("/site/app/node_modules/page-assets"))
        );

        dev.package_root = Some(PathBuf::from("vendor/engine"));
        dev.normalize(Path::new("/site"));
        assert_eq!(dev.package_root(), Some(PathBuf::from("/site/vendor/engine")));
    }

    #[test]
    fn test_validate_requires_root() {
        let mut diag = ConfigDiagnostics::new();
        DevConfig::default().validate(&mut diag);
        assert_eq!(diag.errors()[0].field, DevConfig::ROOT);
    }

    #[test]
    fn test_validate_styles() {
        let dir = TempDir::new().unwrap();
        let dev = DevConfig {
            root: Some(dir.path().to_path_buf()),
            package_root: None,
            styles: vec!["/ok.css".to_string(), "relative.css".to_string()],
        };
        let mut diag = ConfigDiagnostics::new();
        dev.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, DevConfig::STYLES);
    }
}
