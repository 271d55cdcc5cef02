//! Priority ordering of page assets.
//!
//! Both sorts are stable: assets of equal rank keep their relative order.

use std::cmp::Reverse;

use super::{AssetType, PageAsset, PreloadType};
use crate::core::{HintRank, Mode, PushRank};

/// Rank for push-style delivery. First match wins.
pub fn push_rank(asset: &PageAsset) -> PushRank {
    match (asset.asset_type, asset.preload_type) {
        (AssetType::Style, _) => PushRank::Style,
        (_, Some(PreloadType::Style)) => PushRank::StylePreload,
        (_, Some(PreloadType::Font)) => PushRank::Font,
        (_, Some(PreloadType::Image)) => PushRank::Image,
        (AssetType::Script, _) => PushRank::Script,
        (_, Some(PreloadType::Script)) => PushRank::ScriptPreload,
        _ => PushRank::Other,
    }
}

/// Rank for early-hint delivery. Keyed on the asset type only.
pub fn hint_rank(asset: &PageAsset, mode: Mode) -> HintRank {
    match asset.asset_type {
        AssetType::Script if mode.is_dev() => HintRank::DevScript,
        AssetType::Style => HintRank::Style,
        AssetType::Preload => HintRank::Other,
        AssetType::Script => HintRank::Script,
    }
}

/// Order assets for eager (push) delivery: styles, visual preloads, then scripts.
pub fn sort_for_push(assets: &mut [PageAsset]) {
    assets.sort_by_key(|asset| Reverse(push_rank(asset)));
}

/// Order assets for an early-hints response.
///
/// In development, scripts come first so the dev server starts compiling
/// them while the other assets are being fetched.
pub fn sort_for_early_hints(assets: &mut [PageAsset], mode: Mode) {
    assets.sort_by_key(|asset| Reverse(hint_rank(asset, mode)));
}
