//! Resolution mode for a single page render.

use serde::Serialize;

/// Which resolution path a render uses.
///
/// Passed explicitly through every call that depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Live dev server, dependencies resolved against its module graph.
    Development,
    /// Precomputed build manifest.
    Production,
}

impl Mode {
    /// Mode for a render.
    ///
    /// Pre-rendering always resolves against the build manifest, even when a
    /// dev server happens to be running.
    #[inline]
    pub const fn for_render(is_production: bool, is_pre_rendering: bool) -> Self {
        if !is_pre_rendering && !is_production {
            Self::Development
        } else {
            Self::Production
        }
    }

    /// Check if this is development mode.
    #[inline]
    pub const fn is_dev(self) -> bool {
        matches!(self, Self::Development)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_render() {
        assert_eq!(Mode::for_render(false, false), Mode::Development);
        assert_eq!(Mode::for_render(true, false), Mode::Production);
        assert_eq!(Mode::for_render(true, true), Mode::Production);
    }

    #[test]
    fn test_pre_rendering_forces_production() {
        let mode = Mode::for_render(false, true);
        assert_eq!(mode, Mode::Production);
        assert!(!mode.is_dev());
    }
}
