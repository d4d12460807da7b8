#![no_main]

use libfuzzer_sys::fuzz_target;
use menutree::{MenuRenderer, MenuStore};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Store parsing and validation should never panic
        if let Ok(store) = menutree::infrastructure::parse_store(content) {
            // Neither should rendering whatever was accepted
            let renderer = MenuRenderer::new(&store);
            for menu in store.list_menus().unwrap_or_default() {
                let _ = renderer.render(&menu.name, None);
                for item in store.items().take(8) {
                    let _ = renderer.render(&menu.name, Some(item.id));
                }
            }
        }
    }
});
