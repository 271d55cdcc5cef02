//! Command-line interface module.

mod args;
pub mod check;
pub mod resolve;

pub use args::{Cli, Commands, Order, ResolveArgs};
