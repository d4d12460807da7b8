//! Common test utilities for menutree CLI tests.
//!
//! - `TestEnv`: isolated working and home directories plus a runner for the binary
//! - Fixtures: reusable store and config content

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
