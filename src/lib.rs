//! Page asset resolution for server-rendered pages.
//!
//! Given a page's client entries and dependencies, produces the ordered list
//! of scripts, stylesheets and preloads the page needs, resolved against a
//! live dev server or a production build manifest.
//!
//! ```text
//! asset/      # Resolution, typing, ordering
//! manifest/   # Plugin and client build manifests
//! core/       # Errors, mode, ranks, URL helpers
//! config/     # page-assets.toml
//! cli/        # resolve / check commands
//! logger.rs   # Colored stderr logging
//! ```

pub mod asset;
pub mod cli;
pub mod config;
pub mod core;
pub mod logger;
pub mod manifest;

pub use asset::{
    ClientDependency, DependencyId, PageAsset, PageContext, assemble, get_page_assets,
    sort_for_early_hints, sort_for_push,
};
pub use crate::core::{AssetError, Mode};
pub use manifest::{ENGINE_VERSION, validate_plugin_manifest};
