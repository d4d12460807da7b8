//! MenuRecord - one flat row of a fetch result

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ItemId, MenuId};

use super::MenuItem;

/// Value used when a record does not say whether it has children.
///
/// `true` reads as "may have more": the renderer offers to expand the node
/// and the next fetch settles it.
pub const HAS_CHILDREN_DEFAULT: bool = true;

/// A flat, parent-referencing row as produced by the fetch step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuRecord {
    pub id: ItemId,
    pub name: String,
    pub menu_id: MenuId,
    #[serde(default)]
    pub parent_id: Option<ItemId>,
    /// Supplied by the fetcher; `None` when the producer did not compute it.
    #[serde(default)]
    pub has_children: Option<bool>,
}

impl MenuRecord {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, menu_id: impl Into<MenuId>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            menu_id: menu_id.into(),
            parent_id: None,
            has_children: None,
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<ItemId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_has_children(mut self, has_children: bool) -> Self {
        self.has_children = Some(has_children);
        self
    }

    /// Build a record from a store row plus the store's children check.
    pub fn from_item(item: &MenuItem, has_children: bool) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            menu_id: item.menu_id,
            parent_id: item.parent_id,
            has_children: Some(has_children),
        }
    }

    pub fn has_children_or(&self, default: bool) -> bool {
        self.has_children.unwrap_or(default)
    }
}
