//! Client entry resolution.
//!
//! Turns a page's client entries into the script URLs the browser loads:
//! - development: raw filesystem URLs served by the dev server (`/@fs/...`)
//! - production: hashed output files from the client build manifest

use rayon::prelude::*;

use super::DependencyId;
use super::provider::{DevServer, ModuleResolver};
use crate::core::url::{posix_join, to_posix_path};
use crate::core::{AssetError, Result};
use crate::manifest::ClientManifest;
use crate::{debug, ensure};

/// Marker that makes the dev server read a file from disk instead of going
/// through its module graph.
pub const FS_PREFIX: &str = "/@fs";

/// Resolves client entries to URLs.
pub trait EntryResolver {
    fn resolve_entries(&self, entries: &[DependencyId]) -> Result<Vec<String>>;
}

// ============================================================================
// Development
// ============================================================================

/// Resolution against a running dev server.
pub struct DevResolver<'a> {
    pub(super) server: &'a dyn DevServer,
    modules: &'a dyn ModuleResolver,
    windows_host: bool,
}

impl<'a> DevResolver<'a> {
    pub fn new(server: &'a dyn DevServer, modules: &'a dyn ModuleResolver) -> Self {
        Self {
            server,
            modules,
            windows_host: cfg!(windows),
        }
    }

    /// Override host detection (paths without a leading `/` are only legal on Windows).
    pub fn with_windows_host(mut self, windows_host: bool) -> Self {
        self.windows_host = windows_host;
        self
    }

    fn resolve_entry(&self, root: &str, entry: &DependencyId) -> Result<String> {
        let file_path = match entry {
            DependencyId::Local(path) => {
                ensure!(!path.contains('\\'), "client entry is not a POSIX path", path);
                ensure!(path.starts_with('/'), "client entry is not an absolute path", path);
                posix_join(root, path)
            }
            DependencyId::Engine(request) => {
                let resolved = self.modules.resolve(request)?;
                to_posix_path(&resolved.to_string_lossy())
            }
        };

        // Windows drive paths (`C:/...`) have no leading separator.
        let file_path = if file_path.starts_with('/') {
            file_path
        } else {
            ensure!(
                self.windows_host,
                "resolved client entry has no leading separator",
                file_path
            );
            format!("/{file_path}")
        };

        // `?` and `#` would be read back as query and fragment.
        ensure!(
            !file_path.contains(['?', '#']),
            "resolved client entry is not URL-safe",
            file_path
        );

        let src = format!("{FS_PREFIX}{file_path}");
        debug!("dev"; "client entry {} -> {}", entry, src);
        Ok(src)
    }
}

impl EntryResolver for DevResolver<'_> {
    fn resolve_entries(&self, entries: &[DependencyId]) -> Result<Vec<String>> {
        let root = to_posix_path(self.server.root());
        ensure!(!root.is_empty(), "dev server has no root", root);

        // Indexed collect keeps input order.
        entries
            .par_iter()
            .map(|entry| self.resolve_entry(&root, entry))
            .collect()
    }
}

// ============================================================================
// Production
// ============================================================================

/// Resolution against the client build manifest.
pub struct ProdResolver<'a> {
    pub(super) manifest: &'a ClientManifest,
}

impl<'a> ProdResolver<'a> {
    pub fn new(manifest: &'a ClientManifest) -> Self {
        Self { manifest }
    }

    fn resolve_entry(&self, entry: &DependencyId) -> Result<String> {
        let id = entry.raw();
        let hit = self
            .manifest
            .lookup(&id)
            .ok_or_else(|| AssetError::assertion("client entry missing from build manifest", &id))?;

        ensure!(
            hit.record.is_any_entry(),
            "client entry is not an entry in the build manifest",
            hit.key
        );
        ensure!(
            !hit.record.file.is_empty(),
            "manifest output file is empty",
            hit.key
        );
        ensure!(
            !hit.record.file.starts_with('/'),
            "manifest output file must be relative",
            hit.record.file
        );

        Ok(format!("/{}", hit.record.file))
    }
}

impl EntryResolver for ProdResolver<'_> {
    fn resolve_entries(&self, entries: &[DependencyId]) -> Result<Vec<String>> {
        entries.iter().map(|entry| self.resolve_entry(entry)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::StaticDevServer;
    use crate::manifest::{BuildManifest, KeyMap, OutputRecord, sample_build_manifest};
    use std::path::PathBuf;

    /// Resolves every engine module into a fixed directory.
    struct FixedModules(&'static str);

    impl ModuleResolver for FixedModules {
        fn resolve(&self, request: &str) -> Result<PathBuf> {
            Ok(PathBuf::from(format!("{}/{}", self.0, request)))
        }
    }

    fn ids(raw: &[&str]) -> Vec<DependencyId> {
        raw.iter().map(|r| DependencyId::parse(r)).collect()
    }

    // ------------------------------------------------------------------------
    // dev
    // ------------------------------------------------------------------------

    #[test]
    fn test_dev_local_entry() {
        let server = StaticDevServer::new("/home/me/app", vec![]);
        let modules = FixedModules("/unused");
        let resolver = DevResolver::new(&server, &modules);

        let urls = resolver
            .resolve_entries(&ids(&["/pages/index.page.client.js", "/renderer/_default.page.client.js"]))
            .unwrap();
        assert_eq!(
            urls,
            [
                "/@fs/home/me/app/pages/index.page.client.js",
                "/@fs/home/me/app/renderer/_default.page.client.js"
            ]
        );
    }

    #[test]
    fn test_dev_engine_entry() {
        let server = StaticDevServer::new("/home/me/app", vec![]);
        let modules = FixedModules("/home/me/app/node_modules/page-assets");
        let resolver = DevResolver::new(&server, &modules);

        let urls = resolver
            .resolve_entries(&ids(&["@@page-assets/dist/client/router.js"]))
            .unwrap();
        assert_eq!(
            urls,
            ["/@fs/home/me/app/node_modules/page-assets/dist/client/router.js"]
        );
    }

    #[test]
    fn test_dev_windows_root() {
        let server = StaticDevServer::new(r"C:\Users\me\app", vec![]);
        let modules = FixedModules("/unused");

        let resolver = DevResolver::new(&server, &modules).with_windows_host(true);
        let urls = resolver.resolve_entries(&ids(&["/pages/index.js"])).unwrap();
        assert_eq!(urls, ["/@fs/C:/Users/me/app/pages/index.js"]);

        let resolver = DevResolver::new(&server, &modules).with_windows_host(false);
        let err = resolver.resolve_entries(&ids(&["/pages/index.js"])).unwrap_err();
        assert!(matches!(err, AssetError::Assertion { .. }));
    }

    #[test]
    fn test_dev_rejects_relative_and_backslash_entries() {
        let server = StaticDevServer::new("/app", vec![]);
        let modules = FixedModules("/unused");
        let resolver = DevResolver::new(&server, &modules);

        assert!(resolver.resolve_entries(&ids(&["pages/index.js"])).is_err());
        assert!(resolver.resolve_entries(&ids(&[r"\pages\index.js"])).is_err());
    }

    #[test]
    fn test_dev_preserves_order() {
        let server = StaticDevServer::new("/app", vec![]);
        let modules = FixedModules("/unused");
        let resolver = DevResolver::new(&server, &modules);

        let raw: Vec<String> = (0..64).map(|i| format!("/pages/p{i}.js")).collect();
        let entries: Vec<_> = raw.iter().map(|r| DependencyId::parse(r)).collect();
        let urls = resolver.resolve_entries(&entries).unwrap();
        for (i, url) in urls.iter().enumerate() {
            assert_eq!(url, &format!("/@fs/app/pages/p{i}.js"));
        }
    }

    // ------------------------------------------------------------------------
    // prod
    // ------------------------------------------------------------------------

    #[test]
    fn test_prod_entry() {
        let manifest: BuildManifest = [(
            "pages/index.js".to_string(),
            OutputRecord {
                file: "assets/index.ab12.js".to_string(),
                is_entry: true,
                ..Default::default()
            },
        )]
        .into_iter()
        .collect();
        let client = ClientManifest::new(manifest, KeyMap::default());

        let urls = ProdResolver::new(&client)
            .resolve_entries(&ids(&["pages/index.js"]))
            .unwrap();
        assert_eq!(urls, ["/assets/index.ab12.js"]);
    }

    #[test]
    fn test_prod_dynamic_entry_and_key_map() {
        let mut key_map = KeyMap::default();
        key_map.insert(
            "@@page-assets/dist/client/router.js".to_string(),
            "node_modules/page-assets/dist/client/router.js".to_string(),
        );
        let client = ClientManifest::new(sample_build_manifest(), key_map);

        let urls = ProdResolver::new(&client)
            .resolve_entries(&ids(&["/pages/about.js", "@@page-assets/dist/client/router.js"]))
            .unwrap();
        assert_eq!(urls, ["/assets/about.9f9f.js", "/assets/router.0a0a.js"]);
    }

    #[test]
    fn test_prod_missing_entry() {
        let client = ClientManifest::new(sample_build_manifest(), KeyMap::default());
        let err = ProdResolver::new(&client)
            .resolve_entries(&ids(&["/pages/missing.js"]))
            .unwrap_err();
        assert!(err.to_string().contains("missing from build manifest"));
    }

    #[test]
    fn test_prod_non_entry_rejected() {
        let client = ClientManifest::new(sample_build_manifest(), KeyMap::default());
        let err = ProdResolver::new(&client)
            .resolve_entries(&ids(&["_vendor.cd34.js"]))
            .unwrap_err();
        assert!(err.to_string().contains("not an entry"));
    }

    #[test]
    fn test_prod_absolute_file_rejected() {
        let manifest: BuildManifest = [(
            "pages/index.js".to_string(),
            OutputRecord {
                file: "/assets/index.js".to_string(),
                is_entry: true,
                ..Default::default()
            },
        )]
        .into_iter()
        .collect();
        let client = ClientManifest::new(manifest, KeyMap::default());

        let err = ProdResolver::new(&client)
            .resolve_entries(&ids(&["pages/index.js"]))
            .unwrap_err();
        assert!(err.to_string().contains("must be relative"));
    }

    #[test]
    fn test_prod_empty_file_rejected() {
        let manifest: BuildManifest = [(
            "pages/index.js".to_string(),
            OutputRecord {
                file: String::new(),
                is_entry: true,
                ..Default::default()
            },
        )]
        .into_iter()
        .collect();
        let client = ClientManifest::new(manifest, KeyMap::default());

        let err = ProdResolver::new(&client)
            .resolve_entries(&ids(&["pages/index.js"]))
            .unwrap_err();
        assert!(err.to_string().contains("output file is empty"));
    }

    #[test]
    fn test_dev_rejects_verbatim_unc_module() {
        let server = StaticDevServer::new("/app", vec![]);
        let modules = FixedModules(r"\\?\UNC\server\share\pkg");
        let resolver = DevResolver::new(&server, &modules).with_windows_host(true);

        let err = resolver
            .resolve_entries(&ids(&["@@page-assets/dist/client/router.js"]))
            .unwrap_err();
        assert!(err.to_string().contains("not URL-safe"));
    }
}
