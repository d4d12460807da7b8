//! Presentation Layer
//!
//! Command-line surface of the `menutree` binary.

pub mod cli;

pub use cli::{Cli, ColorWhen, Commands};
