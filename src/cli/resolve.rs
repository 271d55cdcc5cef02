//! Resolve command implementation.
//!
//! Builds a page context for the configured mode, resolves the page's assets
//! and prints them to stdout as JSON.

use anyhow::{Context, Result};

use crate::asset::{
    ClientDependency, DependencyId, PackageResolver, PageAsset, PageContext, StaticDevServer,
    assemble, sort_for_early_hints, sort_for_push,
};
use crate::cli::{Order, ResolveArgs};
use crate::config::EngineConfig;
use crate::core::Mode;
use crate::core::url::to_posix_path;
use crate::manifest::{ClientManifest, load_client_manifest, load_plugin_manifest};
use crate::{debug, log};

/// Execute resolve command
pub fn run_resolve(args: &ResolveArgs, config: &EngineConfig) -> Result<()> {
    let assets = resolve_assets(args, config)?;

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&assets)?
    } else {
        serde_json::to_string(&assets)?
    };
    println!("{formatted}");

    Ok(())
}

/// Resolve and order the page assets described by `args`.
pub fn resolve_assets(args: &ResolveArgs, config: &EngineConfig) -> Result<Vec<PageAsset>> {
    let entries: Vec<DependencyId> = args.entries.iter().map(|id| DependencyId::parse(id)).collect();
    let mut dependencies = client_dependencies(args);
    let mode = config.mode();
    let is_pre_rendering = config.page.pre_rendering;

    let mut assets = match mode {
        Mode::Development => {
            let root = config
                .dev
                .root
                .as_ref()
                .context("dev server root is not configured")?;
            let package_root = config
                .dev
                .package_root()
                .context("engine package root is not configured")?;

            let server = StaticDevServer::new(
                to_posix_path(&root.to_string_lossy()),
                config.dev.styles.clone(),
            );
            let modules = PackageResolver::new(package_root);
            let ctx = PageContext::development(config.page.base_url.clone(), &server, &modules)
                .with_base_assets(config.page.base_assets.clone());

            assemble(&ctx, &dependencies, &entries, is_pre_rendering)?
        }
        Mode::Production => {
            let plugin = load_plugin_manifest(&config.manifest.plugin)?;
            let build = load_client_manifest(&config.manifest.client)?;
            log!("prod"; "{} manifest entries (build {})", build.len(), plugin.version);

            if !plugin.include_assets_imported_by_server {
                let before = dependencies.len();
                dependencies.retain(|dep| !dep.only_assets);
                debug!("prod"; "skipped {} server-only dependencies", before - dependencies.len());
            }

            let manifest = ClientManifest::new(build, plugin.manifest_key_map.clone());
            let ctx = PageContext::production(plugin.base_server.clone(), &manifest)
                .with_base_assets(plugin.base_assets.clone());

            assemble(&ctx, &dependencies, &entries, is_pre_rendering)?
        }
    };

    match args.order {
        Order::Push => sort_for_push(&mut assets),
        Order::EarlyHints => sort_for_early_hints(&mut assets, mode),
        Order::None => {}
    }

    Ok(assets)
}

/// Regular dependencies first, then the assets-only ones, each in CLI order.
fn client_dependencies(args: &ResolveArgs) -> Vec<ClientDependency> {
    let deps = args.deps.iter().map(|id| ClientDependency::new(id.as_str()));
    let only_assets = args
        .only_assets
        .iter()
        .map(|id| ClientDependency::assets_only(id.as_str()));
    deps.chain(only_assets).collect()
}
