//! Domain Services
//!
//! Stateless operations over domain entities.
//!
//! - `RowFetcher` - picks and collects the flat row set for a render
//! - `TreeBuilder` - turns flat rows into an ordered forest

mod row_fetcher;
mod tree_builder;

pub use row_fetcher::{FetchError, RowFetcher};
pub use tree_builder::{build_tree, TreeBuilder};
