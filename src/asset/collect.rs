//! Style and preload asset collection.

use rustc_hash::FxHashSet;

use super::ClientDependency;
use super::entry::{DevResolver, ProdResolver};
use crate::core::{AssetError, Result};
use crate::{debug, ensure};
use crate::manifest::BuildManifest;

/// Manifest key of the single stylesheet emitted when CSS code splitting is off.
const SINGLE_STYLE_KEY: &str = "style.css";

/// Collects raw stylesheet and preload URLs for a set of client dependencies.
pub trait AssetCollector {
    fn collect_assets(&self, dependencies: &[ClientDependency]) -> Result<Vec<String>>;
}

impl AssetCollector for DevResolver<'_> {
    fn collect_assets(&self, dependencies: &[ClientDependency]) -> Result<Vec<String>> {
        self.server.style_assets(dependencies)
    }
}

impl AssetCollector for ProdResolver<'_> {
    fn collect_assets(&self, dependencies: &[ClientDependency]) -> Result<Vec<String>> {
        let client = self.manifest;
        let manifest = &client.manifest;
        let mut walker = AssetWalker::new(manifest);

        for dependency in dependencies {
            let id = dependency.id.raw();
            let hit = client
                .lookup(&id)
                .ok_or_else(|| AssetError::assertion("client dependency missing from build manifest", &id))?;
            walker.visit(hit.key, dependency.only_assets)?;
        }

        if let Some(record) = manifest.get(SINGLE_STYLE_KEY) {
            walker.push(&record.file);
        }

        debug!("prod"; "collected {} assets for {} dependencies", walker.urls.len(), dependencies.len());
        Ok(walker.urls)
    }
}

/// Depth-first walk over static imports. First occurrence of a URL wins.
struct AssetWalker<'a> {
    manifest: &'a BuildManifest,
    visited: FxHashSet<&'a str>,
    seen_urls: FxHashSet<String>,
    urls: Vec<String>,
}

impl<'a> AssetWalker<'a> {
    fn new(manifest: &'a BuildManifest) -> Self {
        Self {
            manifest,
            visited: FxHashSet::default(),
            seen_urls: FxHashSet::default(),
            urls: Vec::new(),
        }
    }

    fn visit(&mut self, key: &'a str, only_assets: bool) -> Result<()> {
        if !self.visited.insert(key) {
            return Ok(());
        }
        let manifest = self.manifest;
        let record = manifest
            .get(key)
            .ok_or_else(|| AssetError::assertion("imported chunk missing from build manifest", key))?;
        ensure!(!record.file.is_empty(), "manifest output file is empty", key);

        if !only_assets {
            self.push(&record.file);
        }
        for import in &record.imports {
            self.visit(import, only_assets)?;
        }
        for file in record.css.iter().chain(&record.assets) {
            self.push(file);
        }
        Ok(())
    }

    fn push(&mut self, file: &str) {
        let url = format!("/{}", file.trim_start_matches('/'));
        if self.seen_urls.insert(url.clone()) {
            self.urls.push(url);
        }
    }
}
