//! Page asset definitions.

use serde::Serialize;

/// How an asset is delivered to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    /// Client entry, loaded as `<script type="module">`.
    Script,
    /// Stylesheet, loaded as `<link rel="stylesheet">`.
    Style,
    /// Anything else, hinted as `<link rel="preload">` or `modulepreload`.
    Preload,
}

/// Preload category, used for ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreloadType {
    Style,
    Font,
    Image,
    Script,
}

/// One resolved asset of a page.
///
/// Invariants (upheld by the constructors):
/// - `asset_type == Style` iff `media_type == Some("text/css")`
/// - `preload_type.is_some()` implies `asset_type == Preload`; the converse
///   holds for every file type [`super::infer_media_type`] recognizes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageAsset {
    /// Final URL, normalized and base-prefixed once assembled.
    pub src: String,
    pub asset_type: AssetType,
    pub media_type: Option<&'static str>,
    pub preload_type: Option<PreloadType>,
}

impl PageAsset {
    /// Client entry script.
    pub fn script(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            asset_type: AssetType::Script,
            media_type: Some(super::media::JAVASCRIPT),
            preload_type: None,
        }
    }

    /// Stylesheet.
    pub fn style(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            asset_type: AssetType::Style,
            media_type: Some(super::media::CSS),
            preload_type: None,
        }
    }

    /// Preloaded resource. Both fields are `None` for unknown file types.
    pub fn preload(
        src: impl Into<String>,
        media_type: Option<&'static str>,
        preload_type: Option<PreloadType>,
    ) -> Self {
        Self {
            src: src.into(),
            asset_type: AssetType::Preload,
            media_type,
            preload_type,
        }
    }

    #[inline]
    pub fn is_style(&self) -> bool {
        self.asset_type == AssetType::Style
    }

    #[inline]
    pub fn is_script(&self) -> bool {
        self.asset_type == AssetType::Script
    }
}
