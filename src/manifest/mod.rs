//! Build manifests.
//!
//! | Module   | Purpose                                          |
//! |----------|--------------------------------------------------|
//! | `plugin` | Plugin manifest shape and version validation     |
//! | `client` | Client build manifest and logical-id lookup      |
//! | `load`   | Reading both from disk                           |

mod client;
mod load;
pub(crate) mod plugin;

pub use client::{BuildManifest, ClientManifest, KeyMap, ManifestHit, OutputRecord, lookup};
pub use load::{load_client_manifest, load_plugin_manifest};
pub use plugin::{ENGINE_VERSION, PluginManifest, validate_plugin_manifest};

#[cfg(test)]
pub(crate) use client::sample_build_manifest;
