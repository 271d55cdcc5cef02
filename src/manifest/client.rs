//! Client build manifest (Vite manifest format) and key lookup.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Build-time manifest key → runtime manifest key.
pub type KeyMap = FxHashMap<String, String>;

/// One bundled output file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputRecord {
    /// Output path relative to the client output directory (no leading `/`).
    /// Required: a record without it is rejected at load time.
    pub file: String,
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub is_entry: bool,
    #[serde(default)]
    pub is_dynamic_entry: bool,
    /// Manifest keys of statically imported chunks.
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default)]
    pub dynamic_imports: Vec<String>,
    /// Emitted stylesheets.
    #[serde(default)]
    pub css: Vec<String>,
    /// Emitted static assets (images, fonts, ...).
    #[serde(default)]
    pub assets: Vec<String>,
}

impl OutputRecord {
    /// Whether the record may be used as a page's client entry.
    #[inline]
    pub const fn is_any_entry(&self) -> bool {
        self.is_entry || self.is_dynamic_entry
    }
}

/// Logical module id → output record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildManifest(FxHashMap<String, OutputRecord>);

impl BuildManifest {
    pub fn get(&self, key: &str) -> Option<&OutputRecord> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, OutputRecord)> for BuildManifest {
    fn from_iter<I: IntoIterator<Item = (String, OutputRecord)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A build manifest paired with the key renames from the plugin manifest.
#[derive(Debug, Clone, Default)]
pub struct ClientManifest {
    pub manifest: BuildManifest,
    pub key_map: KeyMap,
}

impl ClientManifest {
    pub fn new(manifest: BuildManifest, key_map: KeyMap) -> Self {
        Self { manifest, key_map }
    }

    /// Look up a logical module id. See [`lookup`].
    pub fn lookup(&self, id: &str) -> Option<ManifestHit<'_>> {
        lookup(id, &self.manifest, &self.key_map)
    }
}

/// Successful lookup: the key that matched and its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestHit<'a> {
    pub key: &'a str,
    pub record: &'a OutputRecord,
}

/// Find the output record for a logical module id.
///
/// Tries in order:
/// 1. The renamed key from `key_map`
/// 2. The id verbatim
/// 3. The id without its leading `/` (dev-style absolute ids)
///
/// Absence is not an error here; callers decide.
pub fn lookup<'a>(id: &str, manifest: &'a BuildManifest, key_map: &KeyMap) -> Option<ManifestHit<'a>> {
    let renamed = key_map.get(id).map(String::as_str);
    let stripped = id.strip_prefix('/');

    [renamed, Some(id), stripped]
        .into_iter()
        .flatten()
        .find_map(|key| {
            manifest
                .0
                .get_key_value(key)
                .map(|(key, record)| ManifestHit { key, record })
        })
}

#[cfg(test)]
pub(crate) fn sample_build_manifest() -> BuildManifest {
    serde_json::from_value(serde_json::json!({
        "pages/index.js": {
            "file": "assets/index.ab12.js",
            "src": "pages/index.js",
            "isEntry": true,
            "imports": ["_vendor.cd34.js"],
            "css": ["assets/index.ef56.css"],
            "assets": ["assets/logo.1234.png"]
        },
        "pages/about.js": {
            "file": "assets/about.9f9f.js",
            "isDynamicEntry": true,
            "imports": ["_vendor.cd34.js"]
        },
        "_vendor.cd34.js": {
            "file": "assets/vendor.cd34.js",
            "css": ["assets/vendor.7777.css"],
            "assets": ["assets/inter.5555.woff2"]
        },
        "node_modules/page-assets/dist/client/router.js": {
            "file": "assets/router.0a0a.js",
            "isEntry": true
        }
    }))
    .unwrap()
}
