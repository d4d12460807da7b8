//! Tree builder
//!
//! Turns a flat, parent-referencing record set into an ordered forest.
//!
//! Placement rules, applied to records in input order:
//! - no parent, or a parent id not present in the set → root list
//! - otherwise → children of the record carrying that id
//!
//! A parent outside the set is the normal case for a partial window, so such
//! records become pseudo-roots instead of being dropped. Duplicate ids are
//! not corrected: lookups resolve to the last record with that id, and every
//! record is still placed exactly once.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::domain::entities::{MenuRecord, TreeNode, HAS_CHILDREN_DEFAULT};
use crate::domain::value_objects::ItemId;

/// Build the forest with the default `has_children` policy.
pub fn build_tree(records: impl IntoIterator<Item = MenuRecord>) -> Vec<TreeNode> {
    TreeBuilder::new().build(records)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeBuilder {
    has_children_default: bool,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            has_children_default: HAS_CHILDREN_DEFAULT,
        }
    }

    /// Value used for records that carry no `has_children` flag.
    pub fn with_has_children_default(mut self, has_children_default: bool) -> Self {
        self.has_children_default = has_children_default;
        self
    }

    /// Returns root-level nodes in encounter order; children keep encounter order too.
    pub fn build(&self, records: impl IntoIterator<Item = MenuRecord>) -> Vec<TreeNode> {
        let records: Vec<MenuRecord> = records.into_iter().collect();
        let record_count = records.len();

        let mut slot_by_id: HashMap<ItemId, usize> = HashMap::with_capacity(record_count);
        for (slot, record) in records.iter().enumerate() {
            slot_by_id.insert(record.id, slot);
        }

        let mut root_slots = Vec::new();
        let mut child_slots: Vec<Vec<usize>> = vec![Vec::new(); record_count];
        let mut parent_slots: Vec<Option<usize>> = vec![None; record_count];
        for (slot, record) in records.iter().enumerate() {
            match record.parent_id.and_then(|parent| slot_by_id.get(&parent)) {
                Some(&parent_slot) => {
                    child_slots[parent_slot].push(slot);
                    parent_slots[slot] = Some(parent_slot);
                }
                None => root_slots.push(slot),
            }
        }

        let mut nodes: Vec<Option<TreeNode>> = records
            .into_iter()
            .map(|record| Some(TreeNode::from_record(record, self.has_children_default)))
            .collect();

        let mut roots = Vec::with_capacity(root_slots.len());
        for slot in root_slots {
            if let Some(node) = assemble(slot, &mut nodes, &child_slots) {
                roots.push(node);
            }
        }

        // Whatever is left hangs off a parent cycle that no root reaches.
        // One member per cycle is promoted; the rest stays under its parent.
        for slot in 0..record_count {
            if nodes[slot].is_none() {
                continue;
            }
            let entry = cycle_entry(slot, &parent_slots);
            if let Some(node) = assemble(entry, &mut nodes, &child_slots) {
                warn!(id = %node.id(), "menu record is part of a parent cycle, promoted to root");
                roots.push(node);
            }
        }

        debug!(records = record_count, roots = roots.len(), "built menu tree");
        roots
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// First slot met twice when following parents up from `slot`.
fn cycle_entry(slot: usize, parent_slots: &[Option<usize>]) -> usize {
    let mut seen = HashSet::new();
    let mut current = slot;
    while seen.insert(current) {
        match parent_slots[current] {
            Some(parent) => current = parent,
            None => break,
        }
    }
    current
}

/// Move the node at `slot` and everything below it out of `nodes`.
///
/// Iterative so deep chains cannot exhaust the stack; a slot already taken
/// (cycle, or claimed earlier) is skipped.
fn assemble(
    slot: usize,
    nodes: &mut [Option<TreeNode>],
    child_slots: &[Vec<usize>],
) -> Option<TreeNode> {
    let top = nodes[slot].take()?;
    let mut stack: Vec<(TreeNode, usize, usize)> = vec![(top, slot, 0)];

    while let Some((_, slot, next)) = stack.last_mut() {
        if let Some(&child_slot) = child_slots[*slot].get(*next) {
            *next += 1;
            if let Some(child) = nodes[child_slot].take() {
                stack.push((child, child_slot, 0));
            }
            continue;
        }

        let (done, _, _) = stack.pop()?;
        match stack.last_mut() {
            Some((parent, _, _)) => parent.push_child(done),
            None => return Some(done),
        }
    }

    None
}
