//! Core types - pure abstractions shared across the engine.

mod error;
mod mode;
mod priority;
pub mod url;

pub use error::{AssetError, Result};
pub use mode::Mode;
pub use priority::{HintRank, PushRank};
