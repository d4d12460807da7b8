//! menutree - branch-expanding navigation menus
//!
//! Rebuilds a menu tree from flat, parent-referencing rows. With nothing
//! selected only the top level of a menu is returned; with a selected item
//! the branch leading to it is expanded, with siblings at every level.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{MenuRenderer, MenuView};
pub use config::Config;
pub use domain::entities::{Menu, MenuItem, MenuRecord, TreeNode, HAS_CHILDREN_DEFAULT};
pub use domain::ports::{MenuStore, StoreError};
pub use domain::services::{build_tree, FetchError, RowFetcher, TreeBuilder};
pub use domain::value_objects::{FetchMode, ItemId, MenuId};
pub use error::{MenuError, MenuResult};
pub use infrastructure::{InMemoryMenuStore, TomlMenuRepository};
