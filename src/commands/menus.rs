//! Menus command handler

use anyhow::Result;

use menutree::config::Config;
use menutree::MenuStore;

use crate::ui::context::UiContext;
use crate::ui::json;

pub fn cmd_menus(config: &Config, ui: &UiContext) -> Result<()> {
    let store = super::open_store(config)?;
    let menus = store.list_menus()?;

    if ui.json {
        let menus: Vec<_> = menus
            .iter()
            .map(|menu| serde_json::json!({ "id": menu.id, "name": menu.name }))
            .collect();
        json::emit(serde_json::json!({ "menus": menus }))?;
    } else {
        for menu in &menus {
            println!("{menu}");
        }
    }

    Ok(())
}
