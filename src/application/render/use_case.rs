use tracing::debug;

use crate::domain::ports::MenuStore;
use crate::domain::services::{RowFetcher, TreeBuilder};
use crate::domain::value_objects::{FetchMode, ItemId};
use crate::error::MenuResult;

use super::MenuView;

/// Renders menus from an injected store.
pub struct MenuRenderer<'a, S: MenuStore + ?Sized> {
    store: &'a S,
    builder: TreeBuilder,
}

impl<'a, S: MenuStore + ?Sized> MenuRenderer<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            builder: TreeBuilder::new(),
        }
    }

    pub fn with_builder(mut self, builder: TreeBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Roots of `menu_name` when nothing is selected, otherwise the branch
    /// leading to `selected` with siblings at every level.
    pub fn render(&self, menu_name: &str, selected: Option<ItemId>) -> MenuResult<MenuView> {
        let fetcher = RowFetcher::new(self.store);
        let menu = fetcher.resolve_menu(menu_name)?;
        let records = fetcher.fetch_for(&menu, FetchMode::from_selection(selected))?;
        let roots = self.builder.build(records);

        debug!(menu = %menu, roots = roots.len(), "rendered menu");
        Ok(MenuView::new(menu, selected, roots))
    }
}
