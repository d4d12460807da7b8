//! TOML Menu Repository
//!
//! Loads a menu store file into an [`InMemoryMenuStore`]:
//!
//! ```toml
//! [[menus]]
//! id = 1
//! name = "main"
//!
//! [[items]]
//! id = 1
//! name = "Home"
//! menu = 1
//! parent = 2   # optional
//! ```

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::debug;

use crate::domain::entities::{Menu, MenuItem};
use crate::domain::ports::StoreError;
use crate::domain::value_objects::{ItemId, MenuId};

use super::InMemoryMenuStore;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlMenu {
    id: MenuId,
    name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlItem {
    id: ItemId,
    name: String,
    menu: MenuId,
    #[serde(default)]
    parent: Option<ItemId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlStore {
    #[serde(default)]
    menus: Vec<TomlMenu>,
    #[serde(default)]
    items: Vec<TomlItem>,
}

pub struct TomlMenuRepository {
    path: PathBuf,
}

impl TomlMenuRepository {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<InMemoryMenuStore, StoreError> {
        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::Unavailable {
            message: format!("{}: {}", self.path.display(), e),
        })?;

        let store = parse_store(&content).map_err(|e| StoreError::Corrupted {
            path: self.path.clone(),
            message: match e {
                StoreError::Invalid { message } => message,
                other => other.to_string(),
            },
        })?;

        debug!(
            path = %self.path.display(),
            menus = store.menu_count(),
            items = store.item_count(),
            "loaded menu store"
        );
        Ok(store)
    }
}

/// Parse store file content without touching the file system.
pub fn parse_store(content: &str) -> Result<InMemoryMenuStore, StoreError> {
    let toml_store: TomlStore = toml::from_str(content).map_err(|e| StoreError::Invalid {
        message: e.to_string(),
    })?;
    from_toml(toml_store)
}

fn from_toml(toml_store: TomlStore) -> Result<InMemoryMenuStore, StoreError> {
    let menus = toml_store
        .menus
        .into_iter()
        .map(|m| Menu {
            id: m.id,
            name: m.name,
        })
        .collect();
    let items = toml_store
        .items
        .into_iter()
        .map(|i| MenuItem {
            id: i.id,
            name: i.name,
            menu_id: i.menu,
            parent_id: i.parent,
        })
        .collect();
    InMemoryMenuStore::new(menus, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MenuStore;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
[[menus]]
id = 1
name = "main"

[[items]]
id = 1
name = "Home"
menu = 1

[[items]]
id = 2
name = "About"
menu = 1

[[items]]
id = 3
name = "Team"
menu = 1
parent = 2
"#;

    #[test]
    fn load_reads_tables() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("menu.toml");
        fs::write(&path, SAMPLE).unwrap();

        let store = TomlMenuRepository::with_path(&path).load().unwrap();
        assert_eq!(store.menu_count(), 1);
        assert_eq!(store.item_count(), 3);
        assert!(store.has_children(ItemId::new(2)).unwrap());
        assert_eq!(
            store.item(ItemId::new(3)).unwrap().unwrap().parent_id,
            Some(ItemId::new(2))
        );
    }

    #[test]
    fn load_missing_is_unavailable() {
        let dir = tempdir().unwrap();
        let repo = TomlMenuRepository::with_path(dir.path().join("missing.toml"));
        let err = repo.load().unwrap_err();
        assert!(matches!(err, StoreError::Unavailable { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn load_invalid_toml_is_corrupted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("menu.toml");
        fs::write(&path, "this is not toml = = =").unwrap();

        let err = TomlMenuRepository::with_path(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::Corrupted { .. }));
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn load_dangling_parent_is_corrupted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("menu.toml");
        fs::write(
            &path,
            r#"
[[menus]]
id = 1
name = "main"

[[items]]
id = 1
name = "Home"
menu = 1
parent = 9
"#,
        )
        .unwrap();

        let err = TomlMenuRepository::with_path(&path).load().unwrap_err();
        match err {
            StoreError::Corrupted { message, .. } => {
                assert_eq!(message, "MenuItem(1): Home references unknown parent 9")
            }
            other => panic!("expected Corrupted, got {other:?}"),
        }
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = parse_store(
            r#"
[[menus]]
id = 1
name = "main"
colour = "red"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::Invalid { .. }));
    }

    #[test]
    fn empty_file_is_an_empty_store() {
        let store = parse_store("").unwrap();
        assert_eq!(store.menu_count(), 0);
        assert!(store.list_menus().unwrap().is_empty());
    }
}
