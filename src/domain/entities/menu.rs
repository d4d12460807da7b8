//! Menu and MenuItem entities - rows of the backing store
//!
//! A menu is a named, independent forest. Every item belongs to exactly one
//! menu and has at most one parent.

use std::fmt;

use crate::domain::value_objects::{ItemId, MenuId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub id: MenuId,
    pub name: String,
}

impl Menu {
    pub fn new(id: impl Into<MenuId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Menu({}): {}", self.id, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub menu_id: MenuId,
    /// `None` marks a top-level item
    pub parent_id: Option<ItemId>,
}

impl MenuItem {
    pub fn root(id: impl Into<ItemId>, name: impl Into<String>, menu_id: impl Into<MenuId>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            menu_id: menu_id.into(),
            parent_id: None,
        }
    }

    pub fn child(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        menu_id: impl Into<MenuId>,
        parent_id: impl Into<ItemId>,
    ) -> Self {
        Self {
            parent_id: Some(parent_id.into()),
            ..Self::root(id, name, menu_id)
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MenuItem({}): {}", self.id, self.name)
    }
}
