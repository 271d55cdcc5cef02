//! `[page]` section configuration.
//!
//! Render inputs that are not part of a build.
//!
//! # Example
//!
//! ```toml
//! [page]
//! base_url = "/"                              # Base path of the app
//! base_assets = "https://cdn.example.com/"    # Base for asset URLs (default: base_url)
//! production = false                          # Resolve against the build manifest
//! pre_rendering = false                       # Pre-rendering always uses the build manifest
//! ```
//!
//! In production mode the bases from the plugin manifest win.

use serde::{Deserialize, Serialize};

use crate::config::util::is_valid_base;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Page render settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Base path of the app.
    pub base_url: String,

    /// Base for asset URLs, e.g. a CDN host. Falls back to `base_url`.
    pub base_assets: Option<String>,

    /// Resolve assets against the client build manifest.
    pub production: bool,

    /// Rendering ahead of time. Forces manifest resolution.
    pub pre_rendering: bool,
}

impl PageConfig {
    pub const BASE_URL: FieldPath = FieldPath::new("page.base_url");
    pub const BASE_ASSETS: FieldPath = FieldPath::new("page.base_assets");

    /// Validate base paths.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !is_valid_base(&self.base_url) {
            diag.error_with_hint(
                Self::BASE_URL,
                format!("invalid base url `{}`", self.base_url),
                "use an absolute path like `/` or `/blog/`",
            );
        }
        if let Some(base) = &self.base_assets
            && !is_valid_base(base)
        {
            diag.error_with_hint(
                Self::BASE_ASSETS,
                format!("invalid assets base `{base}`"),
                "use an absolute path or an http(s) URL like `https://cdn.example.com/`",
            );
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            base_url: "/".to_string(),
            base_assets: None,
            production: false,
            pre_rendering: false,
        }
    }
}
