pub mod context;
pub mod json;
pub mod terminal;
pub mod theme;
pub mod tree;
