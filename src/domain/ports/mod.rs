//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod menu_store;

pub use menu_store::{MenuStore, StoreError};
