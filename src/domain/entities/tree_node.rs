//! TreeNode - a menu item with its materialized children
//!
//! Nodes are produced by the tree builder and are read-only afterwards.
//! Each node owns its children; the root list is the only entry point.

use serde::Serialize;

use crate::domain::value_objects::{ItemId, MenuId};

use super::MenuRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    id: ItemId,
    name: String,
    menu_id: MenuId,
    parent_id: Option<ItemId>,
    has_children: bool,
    children: Vec<TreeNode>,
}

impl TreeNode {
    pub(crate) fn from_record(record: MenuRecord, has_children_default: bool) -> Self {
        let has_children = record.has_children_or(has_children_default);
        Self {
            id: record.id,
            name: record.name,
            menu_id: record.menu_id,
            parent_id: record.parent_id,
            has_children,
            children: Vec::new(),
        }
    }

    pub(crate) fn push_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn menu_id(&self) -> MenuId {
        self.menu_id
    }

    /// Parent as stored; may point outside the fetched window.
    pub fn parent_id(&self) -> Option<ItemId> {
        self.parent_id
    }

    /// Rendering hint carried over from the record, not recomputed from `children`.
    pub fn has_children(&self) -> bool {
        self.has_children
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Has children in the store, none of which were fetched.
    pub fn has_more(&self) -> bool {
        self.has_children && self.children.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn total_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::total_count).sum::<usize>()
    }

    pub fn find(&self, id: ItemId) -> Option<&TreeNode> {
        self.walk().map(|(_, node)| node).find(|node| node.id == id)
    }

    /// Ids from this node down to `id`, both inclusive.
    pub fn path_to(&self, id: ItemId) -> Option<Vec<ItemId>> {
        if self.id == id {
            return Some(vec![self.id]);
        }
        self.children.iter().find_map(|child| {
            child.path_to(id).map(|mut path| {
                path.insert(0, self.id);
                path
            })
        })
    }

    /// Pre-order traversal yielding `(depth, node)`, depth 0 for `self`.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, self)],
        }
    }
}

/// Pre-order iterator over a subtree, see [`TreeNode::walk`].
pub struct Walk<'a> {
    stack: Vec<(usize, &'a TreeNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Reverse so the first child is popped next.
        for child in node.children.iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, node))
    }
}
