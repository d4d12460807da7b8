//! Row fetcher
//!
//! Chooses the row set for a render and collects it from a [`MenuStore`]:
//! - nothing selected: the roots of the menu
//! - an item selected: its ancestor chain, every sibling at each level of
//!   the chain, and the selected item's own children
//!
//! The ancestor walk is an iterative replacement for a recursive CTE and
//! yields the same `DISTINCT` row set.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::domain::entities::{Menu, MenuItem, MenuRecord};
use crate::domain::ports::{MenuStore, StoreError};
use crate::domain::value_objects::{FetchMode, ItemId};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("menu name '{name}' must match exactly one menu, found {matches}")]
    AmbiguousOrMissingMenu { name: String, matches: usize },

    #[error(transparent)]
    StoreUnavailable(#[from] StoreError),
}

pub struct RowFetcher<'a, S: MenuStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: MenuStore + ?Sized> RowFetcher<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Flat records for `menu_name`, deduplicated by id, top level first.
    pub fn fetch(
        &self,
        menu_name: &str,
        selected: Option<ItemId>,
    ) -> Result<Vec<MenuRecord>, FetchError> {
        let menu = self.resolve_menu(menu_name)?;
        self.fetch_for(&menu, FetchMode::from_selection(selected))
    }

    /// Same as [`fetch`](Self::fetch) for an already resolved menu.
    pub fn fetch_for(&self, menu: &Menu, mode: FetchMode) -> Result<Vec<MenuRecord>, FetchError> {
        let records = match self.selected_item(menu, mode)? {
            Some(selected) => self.ancestor_path(menu, selected)?,
            None => self.roots(menu)?,
        };

        debug!(menu = %menu.name, %mode, rows = records.len(), "fetched menu rows");
        Ok(records)
    }

    pub fn resolve_menu(&self, name: &str) -> Result<Menu, FetchError> {
        let menus = self.store.menus_named(name)?;
        match <[Menu; 1]>::try_from(menus) {
            Ok([menu]) => Ok(menu),
            Err(menus) => Err(FetchError::AmbiguousOrMissingMenu {
                name: name.to_string(),
                matches: menus.len(),
            }),
        }
    }

    /// The selected item, if the selection exists and belongs to `menu`.
    fn selected_item(&self, menu: &Menu, mode: FetchMode) -> Result<Option<MenuItem>, FetchError> {
        let Some(id) = mode.selected() else {
            return Ok(None);
        };

        match self.store.item(id)? {
            Some(item) if item.menu_id == menu.id => Ok(Some(item)),
            Some(item) => {
                warn!(selected = %id, menu = %menu.name, owner = %item.menu_id, "selected item belongs to another menu, showing roots");
                Ok(None)
            }
            None => {
                warn!(selected = %id, menu = %menu.name, "selected item not found, showing roots");
                Ok(None)
            }
        }
    }

    fn roots(&self, menu: &Menu) -> Result<Vec<MenuRecord>, FetchError> {
        let mut rows = RowSet::default();
        for item in self.store.items_with_parent(menu.id, None)? {
            rows.push(self.store, item)?;
        }
        Ok(rows.into_records())
    }

    fn ancestor_path(&self, menu: &Menu, selected: MenuItem) -> Result<Vec<MenuRecord>, FetchError> {
        let selected_id = selected.id;
        let chain = self.ancestor_chain(menu, selected)?;

        let mut rows = RowSet::default();
        // A walk cut short at the menu boundary or a cycle still shows the roots.
        if chain.last().is_some_and(|top| top.parent_id.is_some()) {
            for root in self.store.items_with_parent(menu.id, None)? {
                rows.push(self.store, root)?;
            }
        }
        for level in chain.iter().rev() {
            for sibling in self.store.items_with_parent(menu.id, level.parent_id)? {
                rows.push(self.store, sibling)?;
            }
        }
        for child in self.store.items_with_parent(menu.id, Some(selected_id))? {
            rows.push(self.store, child)?;
        }

        Ok(rows.into_records())
    }

    /// `selected` followed by its ancestors, nearest first.
    ///
    /// Stops at the menu boundary, at a dangling parent, or when an id repeats.
    fn ancestor_chain(&self, menu: &Menu, selected: MenuItem) -> Result<Vec<MenuItem>, FetchError> {
        let mut visited = HashSet::from([selected.id]);
        let mut chain = vec![selected];

        while let Some(parent_id) = chain.last().and_then(|item| item.parent_id) {
            if !visited.insert(parent_id) {
                warn!(item = %parent_id, "parent cycle in menu items, stopping ancestor walk");
                break;
            }
            match self.store.item(parent_id)? {
                Some(parent) if parent.menu_id == menu.id => chain.push(parent),
                Some(_) => {
                    debug!(item = %parent_id, "ancestor belongs to another menu");
                    break;
                }
                None => {
                    warn!(item = %parent_id, "dangling parent reference in menu items");
                    break;
                }
            }
        }

        Ok(chain)
    }
}

/// Records in insertion order, first copy of each id wins.
#[derive(Default)]
struct RowSet {
    seen: HashSet<ItemId>,
    records: Vec<MenuRecord>,
}

impl RowSet {
    fn push<S: MenuStore + ?Sized>(&mut self, store: &S, item: MenuItem) -> Result<(), StoreError> {
        if !self.seen.insert(item.id) {
            return Ok(());
        }
        let has_children = store.has_children(item.id)?;
        self.records.push(MenuRecord::from_item(&item, has_children));
        Ok(())
    }

    fn into_records(self) -> Vec<MenuRecord> {
        self.records
    }
}
