//! Show command handler

use anyhow::{bail, Result};

use menutree::config::Config;
use menutree::{ItemId, MenuRenderer};

use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::tree::render_tree;

pub fn cmd_show(
    menu: Option<String>,
    selected: Option<ItemId>,
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    let Some(menu) = menu.or_else(|| config.store.default_menu.clone()) else {
        bail!("no menu given; pass a menu name or set store.default_menu");
    };

    let store = super::open_store(config)?;
    let view = MenuRenderer::new(&store).render(&menu, selected)?;

    if ui.json {
        json::emit(serde_json::json!({
            "menu": view.menu().name,
            "selected": view.selected(),
            "items": view.roots(),
        }))?;
    } else {
        print!("{}", render_tree(&view, ui));
    }

    Ok(())
}
