pub mod menus;
pub mod show;

use std::path::Path;

use anyhow::{Context, Result};

use menutree::config::Config;
use menutree::{InMemoryMenuStore, TomlMenuRepository};

/// Load the store named by the resolved configuration.
pub(crate) fn open_store(config: &Config) -> Result<InMemoryMenuStore> {
    let path: &Path = &config.store.path;
    TomlMenuRepository::with_path(path)
        .load()
        .with_context(|| format!("failed to open menu store {}", path.display()))
}
