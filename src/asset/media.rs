//! Media type inference for page assets.
//!
//! Pure function of the URL's file extension. Query string and fragment are
//! ignored, extensions are matched case-insensitively.

use super::PreloadType;

// Media types. Bare types only: these end up in `type=` attributes and
// `Link` headers, not `Content-Type`.
pub const CSS: &str = "text/css";
pub const JAVASCRIPT: &str = "text/javascript";

pub const PNG: &str = "image/png";
pub const JPEG: &str = "image/jpeg";
pub const GIF: &str = "image/gif";
pub const SVG: &str = "image/svg+xml";
pub const WEBP: &str = "image/webp";
pub const AVIF: &str = "image/avif";
pub const ICO: &str = "image/x-icon";

pub const TTF: &str = "font/ttf";
pub const OTF: &str = "font/otf";
pub const WOFF: &str = "font/woff";
pub const WOFF2: &str = "font/woff2";
pub const EOT: &str = "application/vnd.ms-fontobject";

/// Inferred media type of an asset URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaInfo {
    pub media_type: &'static str,
    /// `None` for stylesheets, which are delivered as styles rather than preloads.
    pub preload_type: Option<PreloadType>,
}

impl MediaInfo {
    const fn new(media_type: &'static str, preload_type: PreloadType) -> Self {
        Self {
            media_type,
            preload_type: Some(preload_type),
        }
    }

    #[inline]
    pub fn is_css(&self) -> bool {
        self.media_type == CSS
    }
}

/// Extract the lowercase extension of a URL's last path segment.
fn extension(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let file = path.rsplit('/').next().unwrap_or(path);
    let (stem, ext) = file.rsplit_once('.')?;
    if stem.is_empty() && ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Infer media type and preload category from a URL.
///
/// Returns `None` for unrecognized extensions.
pub fn infer_media_type(url: &str) -> Option<MediaInfo> {
    let info = match extension(url)?.as_str() {
        // Stylesheets, including preprocessor sources served by the dev server
        "css" | "less" | "sass" | "scss" | "styl" | "stylus" | "pcss" | "postcss" => MediaInfo {
            media_type: CSS,
            preload_type: None,
        },

        // Scripts
        "js" | "mjs" | "cjs" | "jsx" | "ts" | "mts" | "cts" | "tsx" => {
            MediaInfo::new(JAVASCRIPT, PreloadType::Script)
        }

        // Images
        "png" => MediaInfo::new(PNG, PreloadType::Image),
        "jpg" | "jpeg" => MediaInfo::new(JPEG, PreloadType::Image),
        "gif" => MediaInfo::new(GIF, PreloadType::Image),
        "svg" => MediaInfo::new(SVG, PreloadType::Image),
        "webp" => MediaInfo::new(WEBP, PreloadType::Image),
        "avif" => MediaInfo::new(AVIF, PreloadType::Image),
        "ico" => MediaInfo::new(ICO, PreloadType::Image),

        // Fonts
        "ttf" => MediaInfo::new(TTF, PreloadType::Font),
        "otf" => MediaInfo::new(OTF, PreloadType::Font),
        "woff" => MediaInfo::new(WOFF, PreloadType::Font),
        "woff2" => MediaInfo::new(WOFF2, PreloadType::Font),
        "eot" => MediaInfo::new(EOT, PreloadType::Font),

        _ => return None,
    };
    Some(info)
}
