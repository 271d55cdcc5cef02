//! Check command implementation.
//!
//! Validates a plugin manifest the same way a production render would.

use std::path::Path;

use anyhow::Result;

use crate::config::EngineConfig;
use crate::log;
use crate::manifest::{PluginManifest, load_plugin_manifest};

/// Execute check command
pub fn run_check(path: Option<&Path>, config: &EngineConfig) -> Result<()> {
    let path = path.unwrap_or(config.manifest.plugin.as_path());
    let manifest = load_plugin_manifest(path)?;
    print_summary(&manifest);
    crate::logger::status_success(&format!("{} is valid", path.display()));
    Ok(())
}

fn print_summary(manifest: &PluginManifest) {
    log!("manifest"; "version {}", manifest.version);
    log!("manifest"; "base {} (assets: {})", manifest.base_server, manifest.assets_base());
    log!(
        "manifest";
        "client router: {}, server-imported assets: {}, {} renamed keys",
        manifest.uses_client_router,
        manifest.include_assets_imported_by_server,
        manifest.manifest_key_map.len()
    );
}
