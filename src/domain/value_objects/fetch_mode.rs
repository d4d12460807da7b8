//! Fetch mode value object
//!
//! - `Roots`: nothing selected, only the top level of the menu is shown
//! - `AncestorPath`: a selected item, its ancestors and their siblings

use std::fmt;

use super::ItemId;

/// Which row set the fetcher has to produce for a render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FetchMode {
    #[default]
    Roots,
    AncestorPath(ItemId),
}

impl FetchMode {
    pub fn from_selection(selected: Option<ItemId>) -> Self {
        match selected {
            Some(id) => FetchMode::AncestorPath(id),
            None => FetchMode::Roots,
        }
    }

    pub fn selected(&self) -> Option<ItemId> {
        match self {
            FetchMode::Roots => None,
            FetchMode::AncestorPath(id) => Some(*id),
        }
    }
}

impl fmt::Display for FetchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchMode::Roots => write!(f, "roots"),
            FetchMode::AncestorPath(id) => write!(f, "ancestor-path({})", id),
        }
    }
}
