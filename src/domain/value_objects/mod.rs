//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod fetch_mode;
mod ids;

pub use config_warning::ConfigWarning;
pub use fetch_mode::FetchMode;
pub use ids::{ItemId, MenuId};
