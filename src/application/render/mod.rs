//! Render use case
//!
//! The render entry point: resolve the menu, fetch its rows for the current
//! selection, build the forest. Each call is independent.

mod use_case;
mod view;


pub use use_case::MenuRenderer;
pub use view::MenuView;
