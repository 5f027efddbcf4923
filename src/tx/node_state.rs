//! `NodeState` — per-node property, label, and relationship-add diffs (§4.3).

use std::collections::HashMap;

use crate::model::{Direction, LabelId, PropertyKeyId, RelId, RelTypeId, Value};
use super::diff_set::DiffSet;
use super::index_updates::DiffSetHandle;
use super::property_container::PropertyContainerState;

/// Per-node transaction-local state.
///
/// Composes `PropertyContainerState` (Rust favors composition over the
/// teacher's class-hierarchy shape) with a label diff and three
/// direction-keyed relationship-add indices, plus the arena handles that
/// let `nodeDoDelete` purge this node from every index-update `DiffSet`
/// that references it (§4.5, Design Notes §9 — replaces the source's
/// cyclic back-references with integer handles into a shared arena).
#[derive(Debug, Clone, Default)]
pub struct NodeState {
    properties: PropertyContainerState,
    label_diffs: DiffSet<LabelId>,
    /// Keyed by `(direction, relationship type)`; only relationships
    /// created or deleted *this transaction* live here — committed
    /// adjacency is the augmenting cursor's job, not this map's.
    relationship_slots: HashMap<(Direction, RelTypeId), DiffSet<RelId>>,
    index_diff_handles: Vec<DiffSetHandle>,
}

impl NodeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
            && self.label_diffs.is_empty()
            && self.relationship_slots.values().all(DiffSet::is_empty)
            && self.index_diff_handles.is_empty()
    }

    // ---- properties ----------------------------------------------------

    pub fn properties(&self) -> &PropertyContainerState {
        &self.properties
    }

    pub fn add_property(&mut self, key: PropertyKeyId, value: Value) {
        self.properties.add_property(key, value);
    }

    pub fn change_property(&mut self, key: PropertyKeyId, value: Value) {
        self.properties.change_property(key, value);
    }

    pub fn remove_property(&mut self, key: PropertyKeyId) {
        self.properties.remove_property(key);
    }

    // ---- labels ----------------------------------------------------------

    pub fn label_diffs(&self) -> &DiffSet<LabelId> {
        &self.label_diffs
    }

    pub fn add_label(&mut self, label: LabelId) {
        self.label_diffs.add(label);
    }

    pub fn remove_label(&mut self, label: LabelId) {
        self.label_diffs.remove(label);
    }

    // ---- relationships ---------------------------------------------------

    pub fn add_relationship(&mut self, rel: RelId, rel_type: RelTypeId, dir: Direction) {
        self.relationship_slots
            .entry((dir, rel_type))
            .or_default()
            .add(rel);
    }

    pub fn remove_relationship(&mut self, rel: RelId, rel_type: RelTypeId, dir: Direction) {
        self.relationship_slots
            .entry((dir, rel_type))
            .or_default()
            .remove(rel);
    }

    fn slot_contributes(slot_dir: Direction, query_dir: Direction) -> bool {
        match query_dir {
            Direction::Both => true,
            Direction::Outgoing => matches!(slot_dir, Direction::Outgoing | Direction::Both),
            Direction::Incoming => matches!(slot_dir, Direction::Incoming | Direction::Both),
        }
    }

    /// `committedDegree + addedCount(dir,[typeId]) - removedCountFromCommitted(dir,[typeId])`.
    /// A `Direction::Both` slot (self-loop) contributes to both outgoing
    /// and incoming queries symmetrically.
    pub fn augment_degree(
        &self,
        dir: Direction,
        committed_degree: u64,
        type_filter: Option<RelTypeId>,
    ) -> u64 {
        let mut added: i64 = 0;
        let mut removed: i64 = 0;
        for ((slot_dir, slot_type), diff) in &self.relationship_slots {
            if !Self::slot_contributes(*slot_dir, dir) {
                continue;
            }
            if let Some(t) = type_filter {
                if *slot_type != t {
                    continue;
                }
            }
            added += diff.added_len() as i64;
            removed += diff.removed_len() as i64;
        }
        (committed_degree as i64 + added - removed).max(0) as u64
    }

    /// Lazy iterator over relationship ids added this tx matching the
    /// direction/type filter.
    pub fn added_relationships(
        &self,
        dir: Direction,
        type_filter: Option<RelTypeId>,
    ) -> impl Iterator<Item = RelId> + '_ {
        self.relationship_slots
            .iter()
            .filter(move |((slot_dir, slot_type), _)| {
                Self::slot_contributes(*slot_dir, dir)
                    && type_filter.is_none_or(|t| *slot_type == t)
            })
            .flat_map(|(_, diff)| diff.added().copied())
    }

    /// Merges every matching slot's `DiffSet<RelId>` into one, for
    /// augmenting a node-relationship cursor: unlike `added_relationships`
    /// (added side only), this carries the removed side too so a
    /// committed relationship deleted this tx is correctly hidden.
    pub fn relationship_diff_for(&self, dir: Direction, type_filter: Option<RelTypeId>) -> DiffSet<RelId> {
        let mut merged = DiffSet::new();
        for ((slot_dir, slot_type), diff) in &self.relationship_slots {
            if !Self::slot_contributes(*slot_dir, dir) {
                continue;
            }
            if let Some(t) = type_filter {
                if *slot_type != t {
                    continue;
                }
            }
            for rel in diff.added() {
                merged.add(*rel);
            }
            for rel in diff.removed() {
                merged.remove(*rel);
            }
        }
        merged
    }

    pub fn relationship_types(&self) -> impl Iterator<Item = RelTypeId> + '_ {
        let mut seen = std::collections::HashSet::new();
        self.relationship_slots
            .keys()
            .map(|(_, t)| *t)
            .filter(move |t| seen.insert(*t))
    }

    // ---- index-diff back-links (arena handles, Design Notes §9) ----------

    pub fn register_index_diff(&mut self, handle: DiffSetHandle) {
        if !self.index_diff_handles.contains(&handle) {
            self.index_diff_handles.push(handle);
        }
    }

    pub fn deregister_index_diff(&mut self, handle: DiffSetHandle) {
        self.index_diff_handles.retain(|h| *h != handle);
    }

    pub fn index_diff_handles(&self) -> &[DiffSetHandle] {
        &self.index_diff_handles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn augment_degree_counts_both_as_symmetric() {
        let mut n = NodeState::new();
        n.add_relationship(RelId(1), RelTypeId(1), Direction::Both);
        assert_eq!(n.augment_degree(Direction::Outgoing, 0, None), 1);
        assert_eq!(n.augment_degree(Direction::Incoming, 0, None), 1);
    }

    #[test]
    fn remove_of_added_relationship_cancels() {
        let mut n = NodeState::new();
        n.add_relationship(RelId(1), RelTypeId(1), Direction::Outgoing);
        n.remove_relationship(RelId(1), RelTypeId(1), Direction::Outgoing);
        assert_eq!(n.augment_degree(Direction::Outgoing, 5, None), 5);
        assert_eq!(n.added_relationships(Direction::Outgoing, None).count(), 0);
    }

    #[test]
    fn augment_degree_subtracts_removed_committed_relationship() {
        let mut n = NodeState::new();
        n.remove_relationship(RelId(99), RelTypeId(1), Direction::Outgoing);
        assert_eq!(n.augment_degree(Direction::Outgoing, 3, None), 2);
    }
}
