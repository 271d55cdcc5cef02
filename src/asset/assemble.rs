//! Page asset list assembly.
//!
//! Glues the mode-specific resolvers together, types every URL and applies
//! the base path. Ordering is left to the caller: HTML injection wants push
//! order, the early-hints header wants its own.

use super::collect::AssetCollector;
use super::entry::{DevResolver, EntryResolver, ProdResolver};
use super::provider::{DevServer, ModuleResolver};
use super::{ClientDependency, DependencyId, PageAsset, infer_media_type, sort_for_push};
use crate::core::url::{normalize_url, prepend_base, with_direct_query};
use crate::core::{AssetError, Mode, Result};
use crate::debug;
use crate::manifest::ClientManifest;

/// Everything a render knows about where assets come from.
pub struct PageContext<'a> {
    pub base_url: String,
    pub base_assets: Option<String>,
    pub is_production: bool,
    pub dev_server: Option<&'a dyn DevServer>,
    pub module_resolver: Option<&'a dyn ModuleResolver>,
    pub client_manifest: Option<&'a ClientManifest>,
}

impl<'a> PageContext<'a> {
    /// Context backed by a client build manifest.
    pub fn production(base_url: impl Into<String>, client_manifest: &'a ClientManifest) -> Self {
        Self {
            base_url: base_url.into(),
            base_assets: None,
            is_production: true,
            dev_server: None,
            module_resolver: None,
            client_manifest: Some(client_manifest),
        }
    }

    /// Context backed by a running dev server.
    pub fn development(
        base_url: impl Into<String>,
        dev_server: &'a dyn DevServer,
        module_resolver: &'a dyn ModuleResolver,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            base_assets: None,
            is_production: false,
            dev_server: Some(dev_server),
            module_resolver: Some(module_resolver),
            client_manifest: None,
        }
    }

    pub fn with_base_assets(mut self, base_assets: Option<String>) -> Self {
        self.base_assets = base_assets;
        self
    }

    /// Also attach a client manifest, used when pre-rendering next to a dev server.
    pub fn with_client_manifest(mut self, client_manifest: &'a ClientManifest) -> Self {
        self.client_manifest = Some(client_manifest);
        self
    }

    /// Base path for asset URLs: `base_assets`, falling back to `base_url`.
    pub fn assets_base(&self) -> &str {
        self.base_assets.as_deref().unwrap_or(&self.base_url)
    }
}

/// Resolve a page's entries and dependencies into typed, base-prefixed assets.
///
/// The list is returned unsorted: entries first, then collected assets.
///
/// # Errors
///
/// [`AssetError::Assertion`] if the context lacks what the mode needs, or if
/// resolution hits a broken invariant.
pub fn assemble(
    ctx: &PageContext<'_>,
    client_dependencies: &[ClientDependency],
    client_entries: &[DependencyId],
    is_pre_rendering: bool,
) -> Result<Vec<PageAsset>> {
    let mode = Mode::for_render(ctx.is_production, is_pre_rendering);

    let (entry_urls, asset_urls) = match mode {
        Mode::Development => {
            let server = ctx
                .dev_server
                .ok_or_else(|| AssetError::assertion("development render without dev server", mode))?;
            let modules = ctx
                .module_resolver
                .ok_or_else(|| AssetError::assertion("development render without module resolver", mode))?;
            resolve(&DevResolver::new(server, modules), client_dependencies, client_entries)?
        }
        Mode::Production => {
            let manifest = ctx
                .client_manifest
                .ok_or_else(|| AssetError::assertion("production render without client manifest", mode))?;
            resolve(&ProdResolver::new(manifest), client_dependencies, client_entries)?
        }
    };

    let mut assets = Vec::with_capacity(entry_urls.len() + asset_urls.len());
    assets.extend(entry_urls.into_iter().map(PageAsset::script));
    assets.extend(asset_urls.iter().map(|url| typed_asset(url, mode)));

    let base = ctx.assets_base();
    for asset in &mut assets {
        asset.src = prepend_base(&normalize_url(&asset.src), base);
    }

    debug!("assets"; "{} assets ({:?})", assets.len(), mode);
    Ok(assets)
}

/// [`assemble`], then [`sort_for_push`].
pub fn get_page_assets(
    ctx: &PageContext<'_>,
    client_dependencies: &[ClientDependency],
    client_entries: &[DependencyId],
    is_pre_rendering: bool,
) -> Result<Vec<PageAsset>> {
    let mut assets = assemble(ctx, client_dependencies, client_entries, is_pre_rendering)?;
    sort_for_push(&mut assets);
    Ok(assets)
}

fn resolve<R>(
    resolver: &R,
    client_dependencies: &[ClientDependency],
    client_entries: &[DependencyId],
) -> Result<(Vec<String>, Vec<String>)>
where
    R: EntryResolver + AssetCollector,
{
    let entries = resolver.resolve_entries(client_entries)?;
    let assets = resolver.collect_assets(client_dependencies)?;
    Ok((entries, assets))
}

/// Type a collected URL. Stylesheets in development get the `direct` marker.
fn typed_asset(url: &str, mode: Mode) -> PageAsset {
    match infer_media_type(url) {
        Some(info) if info.is_css() => {
            let src = if mode.is_dev() {
                with_direct_query(&normalize_url(url))
            } else {
                url.to_string()
            };
            PageAsset::style(src)
        }
        Some(info) => PageAsset::preload(url, Some(info.media_type), info.preload_type),
        None => PageAsset::preload(url, None, None),
    }
}
