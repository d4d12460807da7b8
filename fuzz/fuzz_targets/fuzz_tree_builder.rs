#![no_main]

use libfuzzer_sys::fuzz_target;
use menutree::{build_tree, MenuRecord, TreeNode};

fuzz_target!(|data: &[u8]| {
    // Two bytes per record: id, parent (0 = none). Small ids force
    // duplicates, dangling parents and cycles.
    let records: Vec<MenuRecord> = data
        .chunks_exact(2)
        .map(|pair| {
            let record = MenuRecord::new(i64::from(pair[0]), "item", 1);
            match pair[1] {
                0 => record,
                parent => record.with_parent(i64::from(parent)),
            }
        })
        .collect();

    let count = records.len();
    let roots = build_tree(records);
    let placed: usize = roots.iter().map(TreeNode::total_count).sum();
    assert_eq!(placed, count);
});
