//! Repository Implementations
//!
//! Concrete implementations of the `MenuStore` port.

mod memory;
mod toml_store;

pub use memory::InMemoryMenuStore;
pub use toml_store::{parse_store, TomlMenuRepository};
