//! Domain Entities
//!
//! - `Menu` / `MenuItem` - rows of the backing store
//! - `MenuRecord` - a flat row of a fetch result
//! - `TreeNode` - a built node owning its children

mod menu;
mod record;
mod tree_node;

pub use menu::{Menu, MenuItem};
pub use record::{MenuRecord, HAS_CHILDREN_DEFAULT};
pub use tree_node::{TreeNode, Walk};
