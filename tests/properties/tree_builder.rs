//! Property tests for the tree builder.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use menutree::{build_tree, ItemId, MenuRecord, TreeNode};

/// Parent reference for the record at some index: none, another record
/// (possibly itself, possibly forming a cycle), or an id outside the set.
#[derive(Debug, Clone)]
enum ParentRef {
    Root,
    Index(usize),
    Outside(i64),
}

fn parent_ref() -> impl Strategy<Value = ParentRef> {
    prop_oneof![
        2 => Just(ParentRef::Root),
        5 => (0usize..64).prop_map(ParentRef::Index),
        1 => (1000i64..1010).prop_map(ParentRef::Outside),
    ]
}

/// Unique ids in shuffled order with arbitrary parent references.
fn records() -> impl Strategy<Value = Vec<MenuRecord>> {
    proptest::collection::vec((parent_ref(), proptest::option::of(any::<bool>())), 0..40)
        .prop_flat_map(|spec| {
            let n = spec.len();
            let ids: Vec<i64> = (1..=n as i64).collect();
            (Just(spec), Just(ids).prop_shuffle())
        })
        .prop_map(|(spec, ids)| {
            let n = ids.len();
            spec.into_iter()
                .zip(&ids)
                .map(|((parent, flag), &id)| {
                    let mut record = MenuRecord::new(id, format!("item-{id}"), 1);
                    match parent {
                        ParentRef::Root => {}
                        ParentRef::Index(i) => record = record.with_parent(ids[i % n]),
                        ParentRef::Outside(p) => record = record.with_parent(p),
                    }
                    if let Some(flag) = flag {
                        record = record.with_has_children(flag);
                    }
                    record
                })
                .collect()
        })
}

fn all_nodes(roots: &[TreeNode]) -> Vec<&TreeNode> {
    roots.iter().flat_map(TreeNode::walk).map(|(_, node)| node).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every record is placed exactly once.
    #[test]
    fn property_every_record_placed_once(records in records()) {
        let expected: HashSet<ItemId> = records.iter().map(|r| r.id).collect();
        let roots = build_tree(records.clone());
        let nodes = all_nodes(&roots);

        prop_assert_eq!(nodes.len(), records.len());
        let placed: HashSet<ItemId> = nodes.iter().map(|n| n.id()).collect();
        prop_assert_eq!(placed, expected);
    }

    /// PROPERTY: children sit under the node whose id they reference.
    #[test]
    fn property_children_under_their_parent(records in records()) {
        let roots = build_tree(records);
        for node in all_nodes(&roots) {
            for child in node.children() {
                prop_assert_eq!(child.parent_id(), Some(node.id()));
            }
        }
    }

    /// PROPERTY: a record without a parent in the set is a root.
    #[test]
    fn property_orphans_are_roots(records in records()) {
        let ids: HashSet<ItemId> = records.iter().map(|r| r.id).collect();
        let orphans: Vec<ItemId> = records
            .iter()
            .filter(|r| r.parent_id.map_or(true, |p| !ids.contains(&p)))
            .map(|r| r.id)
            .collect();

        let roots = build_tree(records);
        let root_ids: HashSet<ItemId> = roots.iter().map(|r| r.id()).collect();
        for orphan in orphans {
            prop_assert!(root_ids.contains(&orphan), "orphan {} is not a root", orphan);
        }
    }

    /// PROPERTY: building is deterministic.
    #[test]
    fn property_build_is_deterministic(records in records()) {
        prop_assert_eq!(build_tree(records.clone()), build_tree(records));
    }

    /// PROPERTY: has_children is copied from the record, absent means true.
    #[test]
    fn property_has_children_passthrough(records in records()) {
        let flags: HashMap<ItemId, Option<bool>> =
            records.iter().map(|r| (r.id, r.has_children)).collect();
        let roots = build_tree(records);
        for node in all_nodes(&roots) {
            prop_assert_eq!(node.has_children(), flags[&node.id()].unwrap_or(true));
        }
    }
}
