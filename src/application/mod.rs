//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Receives its store from the caller
//!
//! ## Use Cases
//!
//! - `MenuRenderer` - Resolve, fetch and build a menu for the current selection

pub mod render;

pub use render::{MenuRenderer, MenuView};
