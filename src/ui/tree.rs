//! Text rendering of a built menu
//!
//! One line per node in pre-order: indentation by depth, an expansion
//! marker, the item name and a pointer after the selected item.

use crossterm::style::Stylize;
use menutree::{MenuView, TreeNode};

use crate::ui::context::UiContext;
use crate::ui::theme::colors;

pub fn render_tree(view: &MenuView, ui: &UiContext) -> String {
    let icons = ui.icons();
    let mut out = String::new();

    for (depth, node) in view.roots().iter().flat_map(TreeNode::walk) {
        let marker = if !node.is_leaf() {
            icons.expand
        } else if node.has_more() {
            icons.collapse
        } else {
            icons.leaf
        };
        let selected = view.selected() == Some(node.id());

        out.push_str(&" ".repeat(depth * ui.indent));
        if ui.color {
            out.push_str(&marker.with(colors::DIM).to_string());
        } else {
            out.push_str(marker);
        }
        out.push(' ');

        if selected && ui.color {
            out.push_str(&node.name().with(colors::SELECTED).bold().to_string());
        } else {
            out.push_str(node.name());
        }
        if selected {
            out.push(' ');
            out.push_str(icons.pointer);
        }
        out.push('\n');
    }

    out
}
