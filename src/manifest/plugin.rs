//! Plugin manifest validation.
//!
//! The plugin manifest is written next to a production build and read once per
//! process. Nothing in it is trusted before [`validate_plugin_manifest`] returns.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::{AssetError, Result};
use crate::ensure;

/// Version of this engine. A build must have been produced by the same version.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Validated plugin manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginManifest {
    pub version: String,
    pub base_server: String,
    pub base_assets: Option<String>,
    pub uses_client_router: bool,
    pub include_assets_imported_by_server: bool,
    /// Build-time manifest key → runtime manifest key.
    pub manifest_key_map: FxHashMap<String, String>,
}

impl PluginManifest {
    /// Base path for asset URLs: `baseAssets`, falling back to `baseServer`.
    pub fn assets_base(&self) -> &str {
        self.base_assets.as_deref().unwrap_or(&self.base_server)
    }
}

/// Validate an untrusted manifest value against this engine.
///
/// # Errors
///
/// - [`AssetError::Usage`] when the build was produced by another engine version
/// - [`AssetError::Assertion`] when the manifest is malformed
pub fn validate_plugin_manifest(candidate: Value) -> Result<PluginManifest> {
    let Value::Object(object) = candidate else {
        return Err(AssetError::assertion(
            "plugin manifest is not an object",
            candidate,
        ));
    };

    check_version(&object)?;
    check_runtime_fields(&object)?;
    ensure!(
        matches!(object.get("usesClientRouter"), Some(Value::Bool(_))),
        "plugin manifest `usesClientRouter` must be a boolean",
        object.get("usesClientRouter")
    );
    check_key_map(&object)?;

    serde_json::from_value(Value::Object(object))
        .map_err(|err| AssetError::assertion("plugin manifest has an unexpected shape", err))
}

fn check_version(object: &Map<String, Value>) -> Result<()> {
    match object.get("version") {
        Some(Value::String(version)) if version == ENGINE_VERSION => Ok(()),
        other => {
            let found = match other {
                Some(Value::String(version)) => version.clone(),
                Some(value) => value.to_string(),
                None => "unknown".to_string(),
            };
            Err(AssetError::Usage(format!(
                "You need to re-build your app. (Because you are using \
                 `page-assets@{ENGINE_VERSION}` while your build has been generated \
                 with a different version `page-assets@{found}`.)"
            )))
        }
    }
}

/// Fields shared with the runtime manifest.
fn check_runtime_fields(object: &Map<String, Value>) -> Result<()> {
    ensure!(
        matches!(object.get("baseServer"), Some(Value::String(_))),
        "plugin manifest `baseServer` must be a string",
        object.get("baseServer")
    );
    ensure!(
        matches!(object.get("baseAssets"), Some(Value::String(_) | Value::Null)),
        "plugin manifest `baseAssets` must be a string or null",
        object.get("baseAssets")
    );
    ensure!(
        matches!(
            object.get("includeAssetsImportedByServer"),
            Some(Value::Bool(_))
        ),
        "plugin manifest `includeAssetsImportedByServer` must be a boolean",
        object.get("includeAssetsImportedByServer")
    );
    Ok(())
}

fn check_key_map(object: &Map<String, Value>) -> Result<()> {
    let Some(Value::Object(key_map)) = object.get("manifestKeyMap") else {
        return Err(AssetError::assertion(
            "plugin manifest `manifestKeyMap` must be an object",
            object.get("manifestKeyMap"),
        ));
    };
    if let Some((key, value)) = key_map.iter().find(|(_, v)| !v.is_string()) {
        return Err(AssetError::assertion(
            format!("plugin manifest `manifestKeyMap.{key}` must be a string"),
            value,
        ));
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn sample_manifest() -> Value {
    serde_json::json!({
        "version": ENGINE_VERSION,
        "baseServer": "/",
        "baseAssets": null,
        "usesClientRouter": false,
        "includeAssetsImportedByServer": true,
        "manifestKeyMap": {
            "@@page-assets/dist/client/router.js": "node_modules/page-assets/dist/client/router.js"
        }
    })
}
