//! Property tests for the row fetcher against an in-memory store.

use std::collections::HashSet;

use proptest::prelude::*;

use menutree::{
    InMemoryMenuStore, ItemId, Menu, MenuId, MenuItem, MenuRenderer, MenuStore, RowFetcher,
};

/// Two menus; every item's parent, if any, is an earlier item of either menu.
fn store() -> impl Strategy<Value = InMemoryMenuStore> {
    proptest::collection::vec((1i64..=2, proptest::option::of(any::<prop::sample::Index>())), 0..40)
        .prop_map(|spec| {
            let items = spec
                .into_iter()
                .enumerate()
                .map(|(i, (menu, parent))| {
                    let id = i as i64 + 1;
                    match parent {
                        Some(index) if i > 0 => {
                            let parent = index.index(i) as i64 + 1;
                            MenuItem::child(id, format!("item-{id}"), menu, parent)
                        }
                        _ => MenuItem::root(id, format!("item-{id}"), menu),
                    }
                })
                .collect();
            InMemoryMenuStore::new(vec![Menu::new(1, "main"), Menu::new(2, "footer")], items)
                .unwrap()
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: fetched rows belong to the requested menu and are unique.
    #[test]
    fn property_rows_scoped_and_distinct(store in store(), selected in proptest::option::of(1i64..45)) {
        let fetcher = RowFetcher::new(&store);
        for menu in ["main", "footer"] {
            let records = fetcher.fetch(menu, selected.map(ItemId::new)).unwrap();
            let menu_id = if menu == "main" { MenuId::new(1) } else { MenuId::new(2) };

            let mut seen = HashSet::new();
            for record in &records {
                prop_assert_eq!(record.menu_id, menu_id);
                prop_assert!(seen.insert(record.id), "duplicate row {}", record.id);
            }
        }
    }

    /// PROPERTY: without a selection the rows are exactly the menu's roots.
    #[test]
    fn property_roots_complete(store in store()) {
        let records = RowFetcher::new(&store).fetch("main", None).unwrap();
        let expected: Vec<ItemId> = store
            .items()
            .filter(|item| item.menu_id == MenuId::new(1) && item.is_root())
            .map(|item| item.id)
            .collect();

        let fetched: Vec<ItemId> = records.iter().map(|r| r.id).collect();
        prop_assert_eq!(fetched, expected);
        for record in &records {
            prop_assert_eq!(record.has_children, Some(store.has_children(record.id).unwrap()));
        }
    }

    /// PROPERTY: every root of the menu is fetched, whatever is selected.
    #[test]
    fn property_roots_always_present(store in store(), selected in proptest::option::of(1i64..45)) {
        let records = RowFetcher::new(&store).fetch("footer", selected.map(ItemId::new)).unwrap();
        let fetched: HashSet<ItemId> = records.iter().map(|r| r.id).collect();
        for root in store.items().filter(|item| item.menu_id == MenuId::new(2) && item.is_root()) {
            prop_assert!(fetched.contains(&root.id), "root {} missing", root.id);
        }
    }

    /// PROPERTY: a selection in the menu is always part of the rendered tree.
    #[test]
    fn property_selection_is_rendered(store in store(), pick in any::<prop::sample::Index>()) {
        let in_main: Vec<ItemId> = store
            .items()
            .filter(|item| item.menu_id == MenuId::new(1))
            .map(|item| item.id)
            .collect();
        prop_assume!(!in_main.is_empty());
        let selected = in_main[pick.index(in_main.len())];

        let view = MenuRenderer::new(&store).render("main", Some(selected)).unwrap();
        prop_assert!(view.find(selected).is_some());
    }

    /// PROPERTY: rendering is idempotent.
    #[test]
    fn property_render_idempotent(store in store(), selected in proptest::option::of(1i64..45)) {
        let renderer = MenuRenderer::new(&store);
        let selected = selected.map(ItemId::new);
        prop_assert_eq!(
            renderer.render("main", selected).unwrap(),
            renderer.render("main", selected).unwrap()
        );
    }
}
