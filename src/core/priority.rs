//! Delivery ranks for page asset ordering.
//!
//! Higher value = delivered earlier. Variants are declared lowest first so the
//! derived `Ord` is the ranking.

/// Rank for push-style (eager) delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PushRank {
    /// Preloaded script chunk - lowest
    ScriptPreload = 0,
    /// Client entry script
    Script = 1,
    /// Preload with no known category
    Other = 2,
    Image = 3,
    Font = 4,
    StylePreload = 5,
    /// Stylesheet - highest
    Style = 6,
}

/// Rank for early-hint (advisory) delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HintRank {
    /// Scripts outside development mode - lowest
    Script = 0,
    Other = 1,
    /// Stylesheet
    Style = 2,
    /// Scripts in development mode: they start on-demand compilation on the
    /// dev server, so they go out before anything else.
    DevScript = 3,
}
