//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Menu store implementations (in-memory, TOML file)

pub mod repositories;

// Re-export for convenience
pub use repositories::{parse_store, InMemoryMenuStore, TomlMenuRepository};
