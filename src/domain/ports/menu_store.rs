//! MenuStore port
//!
//! Primitive relational queries over the `menus` and `items` tables.
//! The fetch strategy built on top of them lives in the domain services.

use std::path::PathBuf;

use crate::domain::entities::{Menu, MenuItem};
use crate::domain::value_objects::{ItemId, MenuId};

pub trait MenuStore: Send + Sync {
    /// Every menu whose name equals `name` exactly.
    fn menus_named(&self, name: &str) -> Result<Vec<Menu>, StoreError>;

    /// All menus, ordered by id.
    fn list_menus(&self) -> Result<Vec<Menu>, StoreError>;

    fn item(&self, id: ItemId) -> Result<Option<MenuItem>, StoreError>;

    /// Items of `menu` whose parent is `parent` (`None` for roots), ordered by id.
    fn items_with_parent(
        &self,
        menu: MenuId,
        parent: Option<ItemId>,
    ) -> Result<Vec<MenuItem>, StoreError>;

    /// Whether any item in the store, in any menu, has `id` as its parent.
    fn has_children(&self, id: ItemId) -> Result<bool, StoreError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("menu store unavailable: {message}")]
    Unavailable { message: String },

    #[error("invalid menu data: {message}")]
    Invalid { message: String },

    #[error(
        "menu store corrupted: {path}\n  → Fix: correct the store file and retry\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },
}
