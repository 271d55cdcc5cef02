//! Engine configuration for `page-assets.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── dev        # [dev]
//! │   ├── manifest   # [manifest]
//! │   └── page       # [page]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # Config file lookup, base URL checks
//! └── mod.rs         # EngineConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section      | Purpose                                          |
//! |--------------|--------------------------------------------------|
//! | `[page]`     | Base URLs, production / pre-rendering switches   |
//! | `[dev]`      | Dev server root, engine package, served styles   |
//! | `[manifest]` | Plugin and client manifest locations             |
//!
//! The config file is optional: without one, defaults apply and paths are
//! resolved against the current directory.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{DEFAULT_PACKAGE_DIR, DevConfig, ManifestConfig, PageConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands, ResolveArgs},
    core::Mode,
    debug, log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `page-assets.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Path to the config file, whether or not it exists (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory relative paths are resolved against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Page render settings
    #[serde(default)]
    pub page: PageConfig,

    /// Dev server settings
    #[serde(default)]
    pub dev: DevConfig,

    /// Build manifest locations
    #[serde(default)]
    pub manifest: ManifestConfig,
}

impl EngineConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file. CLI flags are applied on
    /// top, and the result is validated for `resolve`.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "no {} found, using defaults", cli.config.display());
                Self {
                    config_path: cwd.join(&cli.config),
                    ..Self::default()
                }
            }
        };

        config.finalize(cli, &cwd);

        // Only a render needs a usable dev root or build manifests.
        if cli.is_resolve() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve paths and apply CLI options.
    fn finalize(&mut self, cli: &Cli, cwd: &Path) {
        let root = self
            .config_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);

        self.set_root(&root);
        self.dev.normalize(&root);
        self.manifest.normalize(&root);

        if let Commands::Resolve { args } = &cli.command {
            self.apply_resolve_args(args);
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Resolution mode for this render.
    pub const fn mode(&self) -> Mode {
        Mode::for_render(self.page.production, self.page.pre_rendering)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply resolve arguments from CLI.
    fn apply_resolve_args(&mut self, args: &ResolveArgs) {
        Self::update_option(&mut self.page.production, args.production.as_ref());
        if args.development {
            self.page.production = false;
        }
        Self::update_option(&mut self.page.pre_rendering, args.pre_render.as_ref());

        if let Some(url) = &args.base_url {
            self.page.base_url = url.clone();
        }
        if let Some(base) = &args.base_assets {
            self.page.base_assets = Some(base.clone());
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Collect diagnostics for the current mode.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.page.validate(&mut diag);

        match self.mode() {
            Mode::Development => self.dev.validate(&mut diag),
            Mode::Production => {
                self.manifest.validate(&mut diag);
                if !self.dev.styles.is_empty() {
                    diag.warn(DevConfig::STYLES, "ignored outside development mode");
                }
            }
        }

        diag
    }

    /// Validate configuration for a render.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> EngineConfig {
    let (parsed, ignored) = EngineConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Order;
    use clap::Parser;
    use tempfile::TempDir;

    fn resolve_args() -> ResolveArgs {
        ResolveArgs {
            entries: vec![],
            deps: vec![],
            only_assets: vec![],
            production: None,
            development: false,
            pre_render: None,
            base_url: None,
            base_assets: None,
            order: Order::None,
            pretty: false,
        }
    }

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(EngineConfig::from_str("[page\nbase_url = \"/\"").is_err());
    }

    #[test]
    fn test_engine_config_default() {
        let config = EngineConfig::default();
        assert_eq!(config.get_root(), Path::new(""));
        assert_eq!(config.page.base_url, "/");
        assert_eq!(config.mode(), Mode::Development);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[page]\nbase_url = \"/\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = EngineConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.page.base_url, "/");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[page]\nproduction = true\n[dev]\nstyles = []\n[manifest]\nplugin = \"p.json\"";
        let (_, ignored) = EngineConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_mode_from_page() {
        let config = test_parse_config("[page]\npre_rendering = true");
        assert_eq!(config.mode(), Mode::Production);
    }

    #[test]
    fn test_apply_resolve_args() {
        let mut config = test_parse_config("[page]\nproduction = true\nbase_url = \"/app/\"");

        let args = ResolveArgs {
            development: true,
            base_assets: Some("https://cdn.example.com/".to_string()),
            ..resolve_args()
        };
        config.apply_resolve_args(&args);
        assert!(!config.page.production);
        assert_eq!(config.page.base_url, "/app/");
        assert_eq!(
            config.page.base_assets.as_deref(),
            Some("https://cdn.example.com/")
        );

        let args = ResolveArgs {
            production: Some(true),
            ..resolve_args()
        };
        config.apply_resolve_args(&args);
        assert!(config.page.production);
    }

    #[test]
    fn test_finalize_resolves_paths() {
        let cli = Cli::parse_from(["page-assets", "-C", "/site/page-assets.toml", "check"]);
        let mut config = test_parse_config("[dev]\nroot = \"app\"");
        config.config_path = PathBuf::from("/site/page-assets.toml");
        config.finalize(&cli, Path::new("/elsewhere"));

        assert_eq!(config.get_root(), Path::new("/site"));
        assert_eq!(config.dev.root, Some(PathBuf::from("/site/app")));
        assert_eq!(
            config.manifest.client,
            PathBuf::from("/site/dist/client/manifest.json")
        );
    }

    #[test]
    fn test_diagnostics_by_mode() {
        let dir = TempDir::new().unwrap();

        let mut config = EngineConfig::default();
        config.manifest.normalize(dir.path());
        let diag = config.diagnostics();
        assert_eq!(diag.errors()[0].field, DevConfig::ROOT);

        config.page.production = true;
        config.dev.styles = vec!["/main.css".to_string()];
        let diag = config.diagnostics();
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[0].field, ManifestConfig::PLUGIN);
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page-assets.toml");
        fs::write(&path, "[page]\nbase_url = \"/blog/\"").unwrap();

        let config = EngineConfig::from_path(&path).unwrap();
        assert_eq!(config.page.base_url, "/blog/");

        let missing = EngineConfig::from_path(&dir.path().join("missing.toml"));
        assert!(missing.unwrap_err().to_string().contains("cannot read config file"));
    }
}
