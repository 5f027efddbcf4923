//! Index-update tracking — the per-schema, per-value-tuple `DiffSet<NodeId>`
//! table, its lazy hashed→sorted promotion, and the arena that replaces
//! `NodeState`'s back-references with integer handles (§4.5, Design Notes §9).

use std::collections::{BTreeMap, HashMap};

use crate::index::LabelSchemaDescriptor;
use crate::model::{NodeId, Value, ValueTuple};
use super::diff_set::DiffSet;

/// A handle into `IndexUpdates`'s arena, stored on `NodeState` in place of
/// a direct reference to the `DiffSet` it tracks. Cheap to copy, cheap to
/// compare, and doesn't create a cycle between `NodeState` and the index
/// table the way a shared mutable reference would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiffSetHandle(usize);

/// The inner per-descriptor map. Starts `Hashed` (cheap inserts, no
/// ordering); the first range/prefix query promotes it to `Sorted` in
/// place, and every later write for that descriptor goes through the
/// sorted form from then on (§4.5 "Map promoted lazily").
#[derive(Debug, Clone)]
enum ValueIndexUpdates {
    Hashed(HashMap<ValueTuple, DiffSet<NodeId>>),
    Sorted(BTreeMap<ValueTuple, DiffSet<NodeId>>),
}

impl Default for ValueIndexUpdates {
    fn default() -> Self {
        ValueIndexUpdates::Hashed(HashMap::new())
    }
}

impl ValueIndexUpdates {
    fn entry(&mut self, key: &ValueTuple) -> &mut DiffSet<NodeId> {
        match self {
            ValueIndexUpdates::Hashed(m) => m.entry(key.clone()).or_default(),
            ValueIndexUpdates::Sorted(m) => m.entry(key.clone()).or_default(),
        }
    }

    fn get(&self, key: &ValueTuple) -> Option<&DiffSet<NodeId>> {
        match self {
            ValueIndexUpdates::Hashed(m) => m.get(key),
            ValueIndexUpdates::Sorted(m) => m.get(key),
        }
    }

    fn get_mut(&mut self, key: &ValueTuple) -> Option<&mut DiffSet<NodeId>> {
        match self {
            ValueIndexUpdates::Hashed(m) => m.get_mut(key),
            ValueIndexUpdates::Sorted(m) => m.get_mut(key),
        }
    }

    fn all(&self) -> Box<dyn Iterator<Item = &DiffSet<NodeId>> + '_> {
        match self {
            ValueIndexUpdates::Hashed(m) => Box::new(m.values()),
            ValueIndexUpdates::Sorted(m) => Box::new(m.values()),
        }
    }

    fn promote(&mut self) {
        if let ValueIndexUpdates::Hashed(m) = self {
            tracing::debug!(entries = m.len(), "txstate.index.promote_sorted");
            let sorted: BTreeMap<_, _> = m.drain().collect();
            *self = ValueIndexUpdates::Sorted(sorted);
        }
    }

    fn as_sorted(&self) -> &BTreeMap<ValueTuple, DiffSet<NodeId>> {
        match self {
            ValueIndexUpdates::Sorted(m) => m,
            ValueIndexUpdates::Hashed(_) => unreachable!("caller must promote() first"),
        }
    }
}

/// Register/deregister instructions produced by `index_do_update_entry`,
/// applied by the façade to the relevant `NodeState`'s back-link list.
#[derive(Debug, Clone, Default)]
pub struct IndexLinkChanges {
    pub register: Vec<DiffSetHandle>,
    pub deregister: Vec<DiffSetHandle>,
}

/// Range and prefix queries only support single-column schemas. A
/// composite descriptor is a distinct, explicit failure rather than
/// silently wrong results — the one read-path method on this buffer
/// that is allowed to fail, since it has a documented structural
/// precondition the others don't.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RangeSeekError {
    #[error("composite index range queries are not supported: {0:?}")]
    Composite(LabelSchemaDescriptor),
}

#[derive(Debug, Clone, Default)]
pub struct IndexUpdates {
    tables: HashMap<LabelSchemaDescriptor, ValueIndexUpdates>,
    arena: Vec<Option<(LabelSchemaDescriptor, ValueTuple)>>,
    free_list: Vec<usize>,
}

impl IndexUpdates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.values().all(|t| t.all().all(DiffSet::is_empty))
    }

    fn allocate_handle(&mut self, descriptor: LabelSchemaDescriptor, key: ValueTuple) -> DiffSetHandle {
        if let Some(slot) = self.free_list.pop() {
            self.arena[slot] = Some((descriptor, key));
            DiffSetHandle(slot)
        } else {
            self.arena.push(Some((descriptor, key)));
            DiffSetHandle(self.arena.len() - 1)
        }
    }

    /// Clears the arena slot but does not return it to `free_list`. Used
    /// from `index_do_update_entry`, which defers the actual free-list push
    /// until both the `before` and `after` side have been allocated — a
    /// slot freed by the `before` side must not be handed straight back out
    /// to the `after` side's `allocate_handle` call within the same update,
    /// or the two sides end up holding numerically-equal handles pointing
    /// at different (descriptor, key) pairs.
    fn clear_slot(&mut self, handle: DiffSetHandle) {
        if let Some(slot) = self.arena.get_mut(handle.0) {
            *slot = None;
        }
    }

    fn release_handle(&mut self, handle: DiffSetHandle) {
        self.clear_slot(handle);
        self.free_list.push(handle.0);
    }

    /// §4.5 step 1/2: fetch-or-create the `DiffSet` for `(schema, before)`
    /// and `remove(node)`; fetch-or-create for `(schema, after)` and
    /// `add(node)`. After each mutation, the node's presence in that
    /// `DiffSet` (either side) determines whether the back-link is kept —
    /// this is a deliberate strengthening of the spec's literal "register
    /// if removed, else deregister" (documented in DESIGN.md): an `after`
    /// diffset holding the node in its `added` side must still be purged
    /// on node delete, or a deleted node could keep surfacing in range
    /// scans.
    pub fn index_do_update_entry(
        &mut self,
        descriptor: &LabelSchemaDescriptor,
        node: NodeId,
        before: Option<ValueTuple>,
        after: Option<ValueTuple>,
    ) -> IndexLinkChanges {
        let mut changes = IndexLinkChanges::default();
        let mut freed_slots = Vec::new();

        if let Some(before_key) = before {
            let handle = self.allocate_handle(descriptor.clone(), before_key.clone());
            let table = self.tables.entry(descriptor.clone()).or_default();
            let diff = table.entry(&before_key);
            diff.remove(node);
            let present = diff.is_added(&node) || diff.is_removed(&node);
            if present {
                changes.register.push(handle);
            } else {
                self.clear_slot(handle);
                freed_slots.push(handle.0);
                changes.deregister.push(handle);
            }
        }

        if let Some(after_key) = after {
            let handle = self.allocate_handle(descriptor.clone(), after_key.clone());
            let table = self.tables.entry(descriptor.clone()).or_default();
            let diff = table.entry(&after_key);
            diff.add(node);
            let present = diff.is_added(&node) || diff.is_removed(&node);
            if present {
                changes.register.push(handle);
            } else {
                self.clear_slot(handle);
                freed_slots.push(handle.0);
                changes.deregister.push(handle);
            }
        }

        self.free_list.extend(freed_slots);
        changes
    }

    /// Purge `node` from every `DiffSet` the given handles point at — the
    /// arena-addressed replacement for the source's cyclic back-references
    /// (Design Notes §9), invoked from `nodeDoDelete`.
    pub fn purge_node(&mut self, node: NodeId, handles: &[DiffSetHandle]) {
        for handle in handles {
            if let Some((descriptor, key)) = self.arena.get(handle.0).and_then(|o| o.clone()) {
                if let Some(table) = self.tables.get_mut(&descriptor) {
                    if let Some(diff) = table.get_mut(&key) {
                        diff.purge(&node);
                    }
                }
            }
            self.release_handle(*handle);
        }
    }

    /// §4.5 `indexUpdatesForScan` — union of all per-value `DiffSet`s for
    /// this schema.
    pub fn updates_for_scan(&self, descriptor: &LabelSchemaDescriptor) -> DiffSet<NodeId> {
        let mut union = DiffSet::new();
        if let Some(table) = self.tables.get(descriptor) {
            for diff in table.all() {
                for n in diff.added() {
                    union.add(*n);
                }
                for n in diff.removed() {
                    union.remove(*n);
                }
            }
        }
        union
    }

    /// §4.5 `indexUpdatesForSeek` — the `DiffSet` at exactly this key, or
    /// an empty one.
    pub fn updates_for_seek(&self, descriptor: &LabelSchemaDescriptor, key: &ValueTuple) -> DiffSet<NodeId> {
        self.tables
            .get(descriptor)
            .and_then(|t| t.get(key))
            .cloned()
            .unwrap_or_default()
    }

    fn ensure_sorted(&mut self, descriptor: &LabelSchemaDescriptor) -> &BTreeMap<ValueTuple, DiffSet<NodeId>> {
        let table = self.tables.entry(descriptor.clone()).or_default();
        table.promote();
        table.as_sorted()
    }

    /// §4.5 `indexUpdatesForRangeSeekByNumber`/`ByString`, unified: single
    /// API over a `Value` bound pair rather than two near-identical
    /// methods. The spec's source has the two split with an asymmetric
    /// unbounded-upper convention (`MAX_STRING` exclusive vs `MAX_NUMBER`
    /// inclusive) — resolved here (Design Notes §9 / DESIGN.md) by using
    /// `Option<&Value>` for both bounds, `None` meaning unbounded on
    /// either side, with no sentinel max value and no asymmetry.
    pub fn updates_for_range(
        &mut self,
        descriptor: &LabelSchemaDescriptor,
        lower: Option<(&Value, bool)>,
        upper: Option<(&Value, bool)>,
    ) -> Result<DiffSet<NodeId>, RangeSeekError> {
        if descriptor.is_composite() {
            return Err(RangeSeekError::Composite(descriptor.clone()));
        }

        let sorted = self.ensure_sorted(descriptor);
        let mut union = DiffSet::new();
        for (key, diff) in sorted.range::<ValueTuple, _>(..) {
            let v = &key.0[0];
            if let Some((lo, inclusive)) = lower {
                match v.neo4j_cmp(lo) {
                    Some(std::cmp::Ordering::Less) => continue,
                    Some(std::cmp::Ordering::Equal) if !inclusive => continue,
                    None => continue,
                    _ => {}
                }
            }
            if let Some((hi, inclusive)) = upper {
                match v.neo4j_cmp(hi) {
                    Some(std::cmp::Ordering::Greater) => continue,
                    Some(std::cmp::Ordering::Equal) if !inclusive => continue,
                    None => continue,
                    _ => {}
                }
            }
            for n in diff.added() {
                union.add(*n);
            }
            for n in diff.removed() {
                union.remove(*n);
            }
        }
        Ok(union)
    }

    /// §4.5 `indexUpdatesForRangeSeekByPrefix` — seek to the first key
    /// `>= prefix` and stream forward, stopping at the first key whose
    /// string does not start with `prefix`.
    pub fn updates_for_prefix(
        &mut self,
        descriptor: &LabelSchemaDescriptor,
        prefix: &str,
    ) -> Result<DiffSet<NodeId>, RangeSeekError> {
        if descriptor.is_composite() {
            return Err(RangeSeekError::Composite(descriptor.clone()));
        }

        let seek_key = ValueTuple::single(Value::String(prefix.to_string()));
        let sorted = self.ensure_sorted(descriptor);
        let mut union = DiffSet::new();
        for (key, diff) in sorted.range(seek_key..) {
            let matches = match key.0[0].as_str() {
                Some(s) => s.starts_with(prefix),
                None => false,
            };
            if !matches {
                break;
            }
            for n in diff.added() {
                union.add(*n);
            }
            for n in diff.removed() {
                union.remove(*n);
            }
        }
        Ok(union)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LabelId, PropertyKeyId};

    fn descriptor() -> LabelSchemaDescriptor {
        LabelSchemaDescriptor::new(LabelId(1), vec![PropertyKeyId(1)])
    }

    #[test]
    fn range_seek_by_string_excludes_lower_includes_nothing_past_upper() {
        let d = descriptor();
        let mut idx = IndexUpdates::new();
        idx.index_do_update_entry(&d, NodeId(1), None, Some(ValueTuple::single(Value::from("apple"))));
        idx.index_do_update_entry(&d, NodeId(2), None, Some(ValueTuple::single(Value::from("banana"))));
        idx.index_do_update_entry(&d, NodeId(3), None, Some(ValueTuple::single(Value::from("cherry"))));

        let apricot = Value::from("apricot");
        let cherry = Value::from("cherry");
        let result = idx
            .updates_for_range(&d, Some((&apricot, true)), Some((&cherry, false)))
            .unwrap();

        let added: Vec<NodeId> = result.added().copied().collect();
        assert_eq!(added, vec![NodeId(2)]);
    }

    #[test]
    fn prefix_scan_stops_at_first_non_matching_key() {
        let d = descriptor();
        let mut idx = IndexUpdates::new();
        idx.index_do_update_entry(&d, NodeId(1), None, Some(ValueTuple::single(Value::from("apple"))));
        idx.index_do_update_entry(&d, NodeId(2), None, Some(ValueTuple::single(Value::from("appliance"))));
        idx.index_do_update_entry(&d, NodeId(3), None, Some(ValueTuple::single(Value::from("banana"))));

        let result = idx.updates_for_prefix(&d, "app").unwrap();
        let mut added: Vec<u64> = result.added().map(|n| n.0).collect();
        added.sort();
        assert_eq!(added, vec![1, 2]);
    }

    #[test]
    fn composite_descriptor_range_query_is_rejected() {
        let d = LabelSchemaDescriptor::new(LabelId(1), vec![PropertyKeyId(1), PropertyKeyId(2)]);
        let mut idx = IndexUpdates::new();
        let v = Value::from(1);
        assert!(idx.updates_for_range(&d, Some((&v, true)), None).is_err());
    }

    #[test]
    fn purge_node_removes_from_every_registered_diffset() {
        let d = descriptor();
        let mut idx = IndexUpdates::new();
        let changes = idx.index_do_update_entry(&d, NodeId(1), None, Some(ValueTuple::single(Value::from("apple"))));
        assert_eq!(changes.register.len(), 1);

        idx.purge_node(NodeId(1), &changes.register);
        let seek = idx.updates_for_seek(&d, &ValueTuple::single(Value::from("apple")));
        assert!(seek.is_empty());
    }

    #[test]
    fn update_entry_moving_value_registers_after_and_deregisters_before() {
        let d = descriptor();
        let mut idx = IndexUpdates::new();
        idx.index_do_update_entry(&d, NodeId(1), None, Some(ValueTuple::single(Value::from("apple"))));

        // The node moves from "apple" to "banana": before=apple's diff had
        // the node on its added side (same-tx add, no committed membership),
        // so `remove` cancels against `added` rather than populating
        // `removed` — the apple bucket goes empty and gets deregistered.
        // after=banana gets added, so it gets registered.
        let changes = idx.index_do_update_entry(
            &d,
            NodeId(1),
            Some(ValueTuple::single(Value::from("apple"))),
            Some(ValueTuple::single(Value::from("banana"))),
        );
        assert_eq!(changes.register.len(), 1);
        assert_eq!(changes.deregister.len(), 1);
    }

    #[test]
    fn update_entry_moving_committed_value_registers_both_sides() {
        // Here "apple" isn't a same-tx add — simulate committed membership by
        // seeding the table directly, so `remove` actually populates the
        // removed side instead of cancelling an add.
        let d = descriptor();
        let mut idx = IndexUpdates::new();
        let apple = ValueTuple::single(Value::from("apple"));
        idx.tables.entry(d.clone()).or_default().entry(&apple).remove(NodeId(1));

        let changes = idx.index_do_update_entry(
            &d,
            NodeId(1),
            Some(apple),
            Some(ValueTuple::single(Value::from("banana"))),
        );
        assert_eq!(changes.register.len(), 2);
    }

    #[test]
    fn moving_value_does_not_collide_handles_across_before_and_after() {
        let d = descriptor();
        let mut idx = IndexUpdates::new();
        idx.index_do_update_entry(&d, NodeId(1), None, Some(ValueTuple::single(Value::from("apple"))));

        let changes = idx.index_do_update_entry(
            &d,
            NodeId(1),
            Some(ValueTuple::single(Value::from("apple"))),
            Some(ValueTuple::single(Value::from("banana"))),
        );
        assert_eq!(changes.register.len(), 1);
        assert_eq!(changes.deregister.len(), 1);
        // Even though apple's slot was freed in this same call, the handle
        // now registered for banana must not be numerically equal to it —
        // otherwise a facade that applies `register` before `deregister`
        // would have the deregister pass evict the handle it just
        // registered, via a bare `usize` comparison that can't tell the two
        // apart (node_state.rs's `deregister_index_diff`).
        assert_ne!(changes.register[0], changes.deregister[0]);

        let banana_seek = idx.updates_for_seek(&d, &ValueTuple::single(Value::from("banana")));
        assert!(banana_seek.is_added(&NodeId(1)));
    }
}
