use crate::domain::entities::{Menu, TreeNode};
use crate::domain::value_objects::ItemId;

/// A built menu ready for a rendering collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    menu: Menu,
    selected: Option<ItemId>,
    roots: Vec<TreeNode>,
}

impl MenuView {
    pub fn new(menu: Menu, selected: Option<ItemId>, roots: Vec<TreeNode>) -> Self {
        Self {
            menu,
            selected,
            roots,
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// The requested selection, whether or not it ended up in the window.
    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    pub fn node_count(&self) -> usize {
        self.roots.iter().map(TreeNode::total_count).sum()
    }

    pub fn find(&self, id: ItemId) -> Option<&TreeNode> {
        self.roots.iter().find_map(|root| root.find(id))
    }

    pub fn selected_node(&self) -> Option<&TreeNode> {
        self.selected.and_then(|id| self.find(id))
    }

    /// Present with at least one child in this view.
    pub fn is_expanded(&self, id: ItemId) -> bool {
        self.find(id).is_some_and(|node| !node.is_leaf())
    }

    /// Ids from the containing root down to `id`.
    pub fn path_to(&self, id: ItemId) -> Option<Vec<ItemId>> {
        self.roots.iter().find_map(|root| root.path_to(id))
    }
}
