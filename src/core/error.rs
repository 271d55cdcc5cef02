//! Engine error types.
//!
//! Two kinds only: a [`AssetError::Usage`] message the user can act on, and an
//! [`AssetError::Assertion`] for broken invariants in the build pipeline or in
//! this crate.

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, AssetError>;

/// Errors produced while validating manifests or resolving page assets.
#[derive(Debug, Error)]
pub enum AssetError {
    /// User-facing, fixed by user action (e.g. rebuilding the app).
    #[error("{0}")]
    Usage(String),

    /// Internal invariant violation. Carries the offending value.
    #[error("internal error: {message} (value: {value})")]
    Assertion { message: String, value: String },
}

impl AssetError {
    /// Build an assertion error from a message and the failing value.
    pub fn assertion(message: impl Into<String>, value: impl fmt::Debug) -> Self {
        Self::Assertion {
            message: message.into(),
            value: format!("{value:?}"),
        }
    }

    /// Whether the message is meant to be shown to the user verbatim.
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

/// Fail with [`AssetError::Assertion`] unless `cond` holds.
///
/// ```ignore
/// ensure!(record.is_entry || record.is_dynamic_entry, "not an entry", key);
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $message:expr, $value:expr) => {
        if !$cond {
            return Err($crate::core::AssetError::assertion($message, &$value));
        }
    };
}
