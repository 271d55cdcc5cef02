//! Configuration sections of `page-assets.toml`.

mod dev;
mod manifest;
mod page;

pub use dev::{DEFAULT_PACKAGE_DIR, DevConfig};
pub use manifest::ManifestConfig;
pub use page::PageConfig;
