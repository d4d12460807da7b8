//! In-memory menu store
//!
//! Holds both tables in memory with an index by parent. Immutable once
//! built, so it can be shared across concurrent renders without locking.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::domain::entities::{Menu, MenuItem};
use crate::domain::ports::{MenuStore, StoreError};
use crate::domain::value_objects::{ItemId, MenuId};

#[derive(Debug, Clone, Default)]
pub struct InMemoryMenuStore {
    menus: BTreeMap<MenuId, Menu>,
    items: BTreeMap<ItemId, MenuItem>,
    /// Child ids per parent (`None` = roots), ascending.
    by_parent: HashMap<Option<ItemId>, Vec<ItemId>>,
}

impl InMemoryMenuStore {
    /// Build a store, enforcing the constraints a relational schema would:
    /// unique keys, and foreign keys to existing menus and parent items.
    pub fn new(menus: Vec<Menu>, items: Vec<MenuItem>) -> Result<Self, StoreError> {
        let mut menu_table = BTreeMap::new();
        for menu in menus {
            if let Some(previous) = menu_table.insert(menu.id, menu) {
                return Err(invalid(format!("duplicate menu id {}", previous.id)));
            }
        }

        let mut item_table = BTreeMap::new();
        for item in items {
            if !menu_table.contains_key(&item.menu_id) {
                return Err(invalid(format!(
                    "{} references unknown menu {}",
                    item, item.menu_id
                )));
            }
            if let Some(previous) = item_table.insert(item.id, item) {
                return Err(invalid(format!("duplicate item id {}", previous.id)));
            }
        }

        let ids: HashSet<ItemId> = item_table.keys().copied().collect();
        let mut by_parent: HashMap<Option<ItemId>, Vec<ItemId>> = HashMap::new();
        for item in item_table.values() {
            if let Some(parent) = item.parent_id {
                if !ids.contains(&parent) {
                    return Err(invalid(format!(
                        "{} references unknown parent {}",
                        item, parent
                    )));
                }
            }
            by_parent.entry(item.parent_id).or_default().push(item.id);
        }

        Ok(Self {
            menus: menu_table,
            items: item_table,
            by_parent,
        })
    }

    pub fn menu_count(&self) -> usize {
        self.menus.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.values()
    }
}

impl MenuStore for InMemoryMenuStore {
    fn menus_named(&self, name: &str) -> Result<Vec<Menu>, StoreError> {
        Ok(self
            .menus
            .values()
            .filter(|menu| menu.name == name)
            .cloned()
            .collect())
    }

    fn list_menus(&self) -> Result<Vec<Menu>, StoreError> {
        Ok(self.menus.values().cloned().collect())
    }

    fn item(&self, id: ItemId) -> Result<Option<MenuItem>, StoreError> {
        Ok(self.items.get(&id).cloned())
    }

    fn items_with_parent(
        &self,
        menu: MenuId,
        parent: Option<ItemId>,
    ) -> Result<Vec<MenuItem>, StoreError> {
        let Some(ids) = self.by_parent.get(&parent) else {
            return Ok(Vec::new());
        };
        Ok(ids
            .iter()
            .filter_map(|id| self.items.get(id))
            .filter(|item| item.menu_id == menu)
            .cloned()
            .collect())
    }

    fn has_children(&self, id: ItemId) -> Result<bool, StoreError> {
        Ok(self
            .by_parent
            .get(&Some(id))
            .is_some_and(|children| !children.is_empty()))
    }
}

fn invalid(message: String) -> StoreError {
    StoreError::Invalid { message }
}
