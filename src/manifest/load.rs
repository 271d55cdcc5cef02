//! Read manifests from the build output directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::{BuildManifest, PluginManifest, validate_plugin_manifest};
use crate::debug;

/// Read and validate a plugin manifest file.
///
/// # Errors
///
/// IO and JSON errors, plus everything [`validate_plugin_manifest`] rejects.
/// A version mismatch surfaces as the engine's usage error, unwrapped.
pub fn load_plugin_manifest(path: &Path) -> Result<PluginManifest> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read plugin manifest at {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse plugin manifest at {}", path.display()))?;

    let manifest = validate_plugin_manifest(value)?;
    debug!("manifest"; "validated plugin manifest {} (version {})", path.display(), manifest.version);
    Ok(manifest)
}

/// Read a client build manifest file.
pub fn load_client_manifest(path: &Path) -> Result<BuildManifest> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read client manifest at {}", path.display()))?;
    let manifest: BuildManifest = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse client manifest at {}", path.display()))?;

    debug!("manifest"; "loaded {} client manifest entries", manifest.len());
    Ok(manifest)
}
