//! `TxState` — the transaction-local mutation buffer façade (§2, §4.7, §6).
//!
//! Everything a single read-write transaction has written but not yet
//! committed lives here: node/relationship/property/label/token/schema/
//! index diffs, augmented reads over those diffs, and the deterministic
//! commit-time event stream in [`TxState::accept`]. A `TxState` belongs to
//! exactly one transaction (§5) and is discarded whole on commit or
//! rollback — there is no reset-and-reuse path.

use std::collections::{HashMap, HashSet};

use crate::index::{ConstraintDescriptor, IndexDescriptor, LabelSchemaDescriptor, SchemaDescriptor};
use crate::model::{Direction, LabelId, NodeId, PropertyKeyId, RelId, RelTypeId, Value, ValueTuple};

use super::config::TxStateConfig;
use super::cursors::{
    AugmentedCursor, AugmentedNodeCursor, AugmentedPropertyCursor, AugmentedRelationshipCursor, CursorPool,
};
use super::diff_set::DiffSet;
use super::graph_state::GraphState;
use super::index_updates::{IndexLinkChanges, IndexUpdates, RangeSeekError};
use super::label_state::LabelState;
use super::node_state::NodeState;
use super::property_container::PropertyContainerState;
use super::relationship_state::RelationshipState;
use super::schema::SchemaState;
use super::tokens::TokenTable;
use super::visitor::{TxStateError, TxStateVisitor};

/// Added/removed split returned by the schema-scoped query methods
/// (`indexDiffSetsByLabel`, `constraintsChangesFor*`) — a plain struct
/// rather than a `DiffSet` since these are *filtered projections*, not
/// the underlying diff themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDiff<D> {
    pub added: Vec<D>,
    pub removed: Vec<D>,
}

// Hand-written rather than `#[derive(Default)]`: the derive macro would add
// a spurious `D: Default` bound even though `Vec<D>::default()` doesn't need
// one, which would stop `SchemaDiff<IndexDescriptor>` and
// `SchemaDiff<ConstraintDescriptor>` from getting a `Default` impl at all.
impl<D> Default for SchemaDiff<D> {
    fn default() -> Self {
        Self { added: Vec::new(), removed: Vec::new() }
    }
}

/// The transaction-local mutation buffer. Not `Clone` — it owns pooled
/// cursor buffers and is meant to be built once per transaction and
/// discarded whole on commit or rollback, not duplicated.
#[derive(Debug, Default)]
pub struct TxState {
    nodes: DiffSet<NodeId>,
    relationships: DiffSet<RelId>,
    nodes_deleted_in_tx: HashSet<NodeId>,
    relationships_deleted_in_tx: HashSet<RelId>,

    node_states: HashMap<NodeId, NodeState>,
    relationship_states: HashMap<RelId, RelationshipState>,
    label_states: HashMap<LabelId, LabelState>,
    graph_state: GraphState,

    label_tokens: TokenTable<LabelId>,
    property_key_tokens: TokenTable<PropertyKeyId>,
    rel_type_tokens: TokenTable<RelTypeId>,

    schema: SchemaState,
    index_updates: IndexUpdates,

    node_cursor_pool: CursorPool<NodeId>,
    relationship_cursor_pool: CursorPool<RelId>,
    label_cursor_pool: CursorPool<LabelId>,
    property_cursor_pool: CursorPool<(PropertyKeyId, Value)>,
}

impl TxState {
    pub fn new(config: TxStateConfig) -> Self {
        Self {
            node_cursor_pool: CursorPool::new(config.cursor_pool_capacity),
            relationship_cursor_pool: CursorPool::new(config.cursor_pool_capacity),
            label_cursor_pool: CursorPool::new(config.cursor_pool_capacity),
            property_cursor_pool: CursorPool::new(config.cursor_pool_capacity),
            ..Default::default()
        }
    }

    fn node_state_mut(&mut self, id: NodeId) -> &mut NodeState {
        self.node_states.entry(id).or_default()
    }

    fn label_state_mut(&mut self, label: LabelId) -> &mut LabelState {
        self.label_states.entry(label).or_default()
    }

    // ---- producer side: nodes -------------------------------------------

    pub fn node_do_create(&mut self, id: NodeId) {
        tracing::trace!(node = id.0, "txstate.node.create");
        self.nodes.add(id);
    }

    /// Removes `id` from the main nodes `DiffSet`, records it in the
    /// shadow delete set, purges every index-update back-link this node
    /// registered, and drops the node id from every `LabelState` it
    /// appears in this tx — resolving `nodeDoDelete`'s label cleanup in
    /// favor of the label-bijection invariant (§8 invariant 4, §9):
    /// every label in this node's `labelDiffs`, added or removed side,
    /// gets purged from the matching `LabelState` rather than only the
    /// added side.
    pub fn node_do_delete(&mut self, id: NodeId) {
        tracing::trace!(node = id.0, "txstate.node.delete");
        self.nodes.remove(id);
        self.nodes_deleted_in_tx.insert(id);

        if let Some(state) = self.node_states.remove(&id) {
            for label in state.label_diffs().added().chain(state.label_diffs().removed()) {
                if let Some(label_state) = self.label_states.get_mut(label) {
                    label_state.purge_node(id);
                }
            }
            self.index_updates.purge_node(id, state.index_diff_handles());
        }
    }

    pub fn node_is_added_in_this_tx(&self, id: NodeId) -> bool {
        self.nodes.is_added(&id)
    }

    pub fn node_is_deleted_in_this_tx(&self, id: NodeId) -> bool {
        self.nodes_deleted_in_tx.contains(&id)
    }

    pub fn node_modified_in_this_tx(&self, id: NodeId) -> bool {
        self.node_states.get(&id).is_some_and(|s| !s.is_empty())
    }

    pub fn added_and_removed_nodes(&self) -> &DiffSet<NodeId> {
        &self.nodes
    }

    // ---- producer side: relationships ------------------------------------

    fn link_endpoints(&mut self, id: RelId, rel_type: RelTypeId, start: NodeId, end: NodeId) {
        if start == end {
            self.node_state_mut(start).add_relationship(id, rel_type, Direction::Both);
        } else {
            self.node_state_mut(start).add_relationship(id, rel_type, Direction::Outgoing);
            self.node_state_mut(end).add_relationship(id, rel_type, Direction::Incoming);
        }
    }

    fn unlink_endpoints(&mut self, id: RelId, rel_type: RelTypeId, start: NodeId, end: NodeId) {
        if start == end {
            self.node_state_mut(start).remove_relationship(id, rel_type, Direction::Both);
        } else {
            self.node_state_mut(start).remove_relationship(id, rel_type, Direction::Outgoing);
            self.node_state_mut(end).remove_relationship(id, rel_type, Direction::Incoming);
        }
    }

    pub fn relationship_do_create(&mut self, id: RelId, rel_type: RelTypeId, start: NodeId, end: NodeId) {
        tracing::trace!(rel = id.0, rel_type = rel_type.0, start = start.0, end = end.0, "txstate.relationship.create");
        self.relationships.add(id);
        self.relationship_states
            .entry(id)
            .or_insert_with(|| RelationshipState::new(start, end, rel_type));
        self.link_endpoints(id, rel_type, start, end);
    }

    pub fn relationship_do_delete(&mut self, id: RelId, rel_type: RelTypeId, start: NodeId, end: NodeId) {
        tracing::trace!(rel = id.0, "txstate.relationship.delete");
        self.relationships.remove(id);
        self.relationships_deleted_in_tx.insert(id);
        self.relationship_states.remove(&id);
        self.unlink_endpoints(id, rel_type, start, end);
    }

    pub fn relationship_is_added_in_this_tx(&self, id: RelId) -> bool {
        self.relationships.is_added(&id)
    }

    pub fn relationship_is_deleted_in_this_tx(&self, id: RelId) -> bool {
        self.relationships_deleted_in_tx.contains(&id)
    }

    pub fn added_and_removed_relationships(&self) -> &DiffSet<RelId> {
        &self.relationships
    }

    pub fn node_relationship_types(&self, id: NodeId) -> Vec<RelTypeId> {
        self.node_states
            .get(&id)
            .map(|s| s.relationship_types().collect())
            .unwrap_or_default()
    }

    // ---- producer side: properties ----------------------------------------

    pub fn node_do_add_property(&mut self, id: NodeId, key: PropertyKeyId, value: Value) {
        self.node_state_mut(id).add_property(key, value);
    }

    pub fn node_do_change_property(&mut self, id: NodeId, key: PropertyKeyId, value: Value) {
        self.node_state_mut(id).change_property(key, value);
    }

    pub fn node_do_remove_property(&mut self, id: NodeId, key: PropertyKeyId) {
        self.node_state_mut(id).remove_property(key);
    }

    pub fn relationship_do_add_property(&mut self, id: RelId, key: PropertyKeyId, value: Value) {
        if let Some(state) = self.relationship_states.get_mut(&id) {
            state.add_property(key, value);
        }
    }

    pub fn relationship_do_change_property(&mut self, id: RelId, key: PropertyKeyId, value: Value) {
        if let Some(state) = self.relationship_states.get_mut(&id) {
            state.change_property(key, value);
        }
    }

    pub fn relationship_do_remove_property(&mut self, id: RelId, key: PropertyKeyId) {
        if let Some(state) = self.relationship_states.get_mut(&id) {
            state.remove_property(key);
        }
    }

    pub fn graph_do_add_property(&mut self, key: PropertyKeyId, value: Value) {
        self.graph_state.add_property(key, value);
    }

    pub fn graph_do_change_property(&mut self, key: PropertyKeyId, value: Value) {
        self.graph_state.change_property(key, value);
    }

    pub fn graph_do_remove_property(&mut self, key: PropertyKeyId) {
        self.graph_state.remove_property(key);
    }

    // ---- producer side: labels ---------------------------------------------

    /// Maintains the label/node bijection (§4.4): updates both
    /// `labelState(label).nodes` and `nodeState(id).labelDiffs`.
    pub fn node_do_add_label(&mut self, id: NodeId, label: LabelId) {
        tracing::trace!(node = id.0, label = label.0, "txstate.label.add");
        self.node_state_mut(id).add_label(label);
        self.label_state_mut(label).add_node(id);
    }

    pub fn node_do_remove_label(&mut self, id: NodeId, label: LabelId) {
        tracing::trace!(node = id.0, label = label.0, "txstate.label.remove");
        self.node_state_mut(id).remove_label(label);
        self.label_state_mut(label).remove_node(id);
    }

    pub fn nodes_with_label_changed(&self, label: LabelId) -> &DiffSet<NodeId> {
        static EMPTY: std::sync::OnceLock<DiffSet<NodeId>> = std::sync::OnceLock::new();
        self.label_states
            .get(&label)
            .map(LabelState::nodes)
            .unwrap_or_else(|| EMPTY.get_or_init(DiffSet::new))
    }

    // ---- producer side: tokens ----------------------------------------------

    pub fn label_do_create_for_name(&mut self, id: LabelId, name: impl Into<String>) {
        self.label_tokens.create(id, name);
    }

    pub fn property_key_do_create_for_name(&mut self, id: PropertyKeyId, name: impl Into<String>) {
        self.property_key_tokens.create(id, name);
    }

    pub fn relationship_type_do_create_for_name(&mut self, id: RelTypeId, name: impl Into<String>) {
        self.rel_type_tokens.create(id, name);
    }

    // ---- producer side: schema -----------------------------------------------

    pub fn index_rule_do_add(&mut self, descriptor: IndexDescriptor) {
        tracing::debug!(schema = ?descriptor.schema, "txstate.index.add");
        self.schema.index_rule_do_add(descriptor);
    }

    pub fn index_do_drop(&mut self, descriptor: IndexDescriptor) {
        self.schema.index_do_drop(descriptor);
    }

    pub fn index_do_unremove(&mut self, descriptor: &IndexDescriptor) -> bool {
        self.schema.index_do_unremove(descriptor)
    }

    pub fn constraint_do_add(&mut self, descriptor: ConstraintDescriptor) {
        tracing::debug!(schema = ?descriptor.schema(), "txstate.constraint.add");
        self.schema.constraint_do_add(descriptor);
    }

    pub fn constraint_do_drop(&mut self, descriptor: ConstraintDescriptor) {
        self.schema.constraint_do_drop(descriptor);
    }

    pub fn constraint_indexes_created_in_tx(&self) -> Vec<IndexDescriptor> {
        self.schema.constraint_indexes_created_in_tx()
    }

    pub fn index_diff_sets_by_label(&self, label: LabelId) -> SchemaDiff<IndexDescriptor> {
        let mut diff = SchemaDiff::default();
        for d in self.schema.indexes().added() {
            if d.schema.label == label {
                diff.added.push(d.clone());
            }
        }
        for d in self.schema.indexes().removed() {
            if d.schema.label == label {
                diff.removed.push(d.clone());
            }
        }
        diff
    }

    pub fn constraints_changes_for_schema(&self, schema: &SchemaDescriptor) -> SchemaDiff<ConstraintDescriptor> {
        let mut diff = SchemaDiff::default();
        for c in self.schema.constraints().added() {
            if &c.schema() == schema {
                diff.added.push(c.clone());
            }
        }
        for c in self.schema.constraints().removed() {
            if &c.schema() == schema {
                diff.removed.push(c.clone());
            }
        }
        diff
    }

    pub fn constraints_changes_for_label(&self, label: LabelId) -> SchemaDiff<ConstraintDescriptor> {
        let mut diff = SchemaDiff::default();
        for c in self.schema.constraints().added() {
            if matches!(&c.schema(), SchemaDescriptor::Label(s) if s.label == label) {
                diff.added.push(c.clone());
            }
        }
        for c in self.schema.constraints().removed() {
            if matches!(&c.schema(), SchemaDescriptor::Label(s) if s.label == label) {
                diff.removed.push(c.clone());
            }
        }
        diff
    }

    pub fn constraints_changes_for_relationship_type(&self, rel_type: RelTypeId) -> SchemaDiff<ConstraintDescriptor> {
        let mut diff = SchemaDiff::default();
        for c in self.schema.constraints().added() {
            if matches!(&c.schema(), SchemaDescriptor::RelType(s) if s.rel_type == rel_type) {
                diff.added.push(c.clone());
            }
        }
        for c in self.schema.constraints().removed() {
            if matches!(&c.schema(), SchemaDescriptor::RelType(s) if s.rel_type == rel_type) {
                diff.removed.push(c.clone());
            }
        }
        diff
    }

    // ---- producer side: index-update tracking ---------------------------------

    pub fn index_do_update_entry(
        &mut self,
        descriptor: &LabelSchemaDescriptor,
        node: NodeId,
        before: Option<ValueTuple>,
        after: Option<ValueTuple>,
    ) -> IndexLinkChanges {
        let changes = self.index_updates.index_do_update_entry(descriptor, node, before, after);
        let state = self.node_state_mut(node);
        for h in &changes.register {
            state.register_index_diff(*h);
        }
        for h in &changes.deregister {
            state.deregister_index_diff(*h);
        }
        changes
    }

    pub fn index_updates_for_scan(&self, descriptor: &LabelSchemaDescriptor) -> DiffSet<NodeId> {
        self.index_updates.updates_for_scan(descriptor)
    }

    pub fn index_updates_for_seek(&self, descriptor: &LabelSchemaDescriptor, key: &ValueTuple) -> DiffSet<NodeId> {
        self.index_updates.updates_for_seek(descriptor, key)
    }

    pub fn index_updates_for_range_seek_by_number(
        &mut self,
        descriptor: &LabelSchemaDescriptor,
        lower: Option<(&Value, bool)>,
        upper: Option<(&Value, bool)>,
    ) -> Result<DiffSet<NodeId>, RangeSeekError> {
        self.index_updates.updates_for_range(descriptor, lower, upper)
    }

    pub fn index_updates_for_range_seek_by_string(
        &mut self,
        descriptor: &LabelSchemaDescriptor,
        lower: Option<(&Value, bool)>,
        upper: Option<(&Value, bool)>,
    ) -> Result<DiffSet<NodeId>, RangeSeekError> {
        self.index_updates.updates_for_range(descriptor, lower, upper)
    }

    pub fn index_updates_for_range_seek_by_prefix(
        &mut self,
        descriptor: &LabelSchemaDescriptor,
        prefix: &str,
    ) -> Result<DiffSet<NodeId>, RangeSeekError> {
        self.index_updates.updates_for_prefix(descriptor, prefix)
    }

    // ---- consumer side: augmenting reads ---------------------------------------

    pub fn augment_nodes_get_all<I: Iterator<Item = NodeId>>(&mut self, committed: I) -> AugmentedNodeCursor<'_, I> {
        AugmentedCursor::augment(&self.nodes, committed, &mut self.node_cursor_pool)
    }

    pub fn augment_relationships_get_all<I: Iterator<Item = RelId>>(
        &mut self,
        committed: I,
    ) -> AugmentedRelationshipCursor<'_, I> {
        AugmentedCursor::augment(&self.relationships, committed, &mut self.relationship_cursor_pool)
    }

    /// Alias kept distinct from `augment_relationships_get_all` because
    /// §6 lists both a plain getAll augment and a cursor-shaped one; both
    /// forward to the same `DiffSet`.
    pub fn augment_relationships_get_all_cursor<I: Iterator<Item = RelId>>(
        &mut self,
        committed: I,
    ) -> AugmentedRelationshipCursor<'_, I> {
        self.augment_relationships_get_all(committed)
    }

    pub fn augment_single_node_cursor(&self, id: NodeId, committed_exists: bool) -> bool {
        if self.nodes.is_removed(&id) {
            false
        } else {
            committed_exists || self.nodes.is_added(&id)
        }
    }

    pub fn augment_single_relationship_cursor(&self, id: RelId, committed_exists: bool) -> bool {
        if self.relationships.is_removed(&id) {
            false
        } else {
            committed_exists || self.relationships.is_added(&id)
        }
    }

    pub fn augment_property_cursor<I: Iterator<Item = (PropertyKeyId, Value)>>(
        &mut self,
        container: &PropertyContainerState,
        committed: I,
    ) -> AugmentedPropertyCursor<'_, I> {
        AugmentedPropertyCursor::augment(container, committed, &mut self.property_cursor_pool)
    }

    pub fn augment_graph_properties<I: Iterator<Item = (PropertyKeyId, Value)>>(
        &mut self,
        committed: I,
    ) -> AugmentedPropertyCursor<'_, I> {
        AugmentedPropertyCursor::augment(self.graph_state.properties(), committed, &mut self.property_cursor_pool)
    }

    /// The merged diff only needs to live for the duration of this call —
    /// `AugmentedCursor::augment` reads it into the pooled buffer before
    /// returning, so building it fresh per call (rather than caching it
    /// on `NodeState`) costs nothing extra at the type level.
    pub fn augment_node_relationship_cursor<I: Iterator<Item = RelId>>(
        &mut self,
        node: NodeId,
        dir: Direction,
        type_filter: Option<RelTypeId>,
        committed: I,
    ) -> AugmentedRelationshipCursor<'_, I> {
        let diff = self
            .node_states
            .get(&node)
            .map(|s| s.relationship_diff_for(dir, type_filter))
            .unwrap_or_default();
        AugmentedCursor::augment(&diff, committed, &mut self.relationship_cursor_pool)
    }

    pub fn augment_labels<I: Iterator<Item = LabelId>>(
        &mut self,
        node: NodeId,
        committed: I,
    ) -> AugmentedCursor<'_, I, LabelId> {
        let diff = self
            .node_states
            .get(&node)
            .map(|s| s.label_diffs().clone())
            .unwrap_or_default();
        AugmentedCursor::augment(&diff, committed, &mut self.label_cursor_pool)
    }

    pub fn augment_node_degree(
        &self,
        node: NodeId,
        dir: Direction,
        committed_degree: u64,
        type_filter: Option<RelTypeId>,
    ) -> u64 {
        self.node_states
            .get(&node)
            .map(|s| s.augment_degree(dir, committed_degree, type_filter))
            .unwrap_or(committed_degree)
    }

    // ---- change tracking -----------------------------------------------------

    pub fn has_changes(&self) -> bool {
        !self.nodes.is_empty()
            || !self.relationships.is_empty()
            || !self.nodes_deleted_in_tx.is_empty()
            || !self.relationships_deleted_in_tx.is_empty()
            || self.node_states.values().any(|s| !s.is_empty())
            || self.relationship_states.values().any(|s| !s.is_empty())
            || self.label_states.values().any(|s| !s.is_empty())
            || !self.graph_state.is_empty()
            || !self.label_tokens.is_empty()
            || !self.property_key_tokens.is_empty()
            || !self.rel_type_tokens.is_empty()
            || !self.schema.is_empty()
            || !self.index_updates.is_empty()
    }

    /// Excludes schema/token/index-update-only changes: a transaction
    /// that only added an index or a token has changes but no *data*
    /// changes.
    pub fn has_data_changes(&self) -> bool {
        !self.nodes.is_empty()
            || !self.relationships.is_empty()
            || !self.nodes_deleted_in_tx.is_empty()
            || !self.relationships_deleted_in_tx.is_empty()
            || self.node_states.values().any(|s| !s.is_empty())
            || self.relationship_states.values().any(|s| !s.is_empty())
            || self.label_states.values().any(|s| !s.is_empty())
            || !self.graph_state.is_empty()
    }

    // ---- commit-time traversal (§4.7) -----------------------------------------

    /// Walks every buffered change in the fixed categorical order and
    /// dispatches it to `visitor`. Stops and returns the first error the
    /// visitor raises — no partial rollback, no retry (§7).
    pub fn accept(&self, visitor: &mut dyn TxStateVisitor) -> Result<(), TxStateError> {
        // 1. Created nodes
        for &id in self.nodes.added() {
            visitor.visit_created_node(id)?;
        }

        // 2. Created relationships
        for &id in self.relationships.added() {
            if let Some(state) = self.relationship_states.get(&id) {
                visitor.visit_created_relationship(id, state.rel_type(), state.start_node(), state.end_node())?;
            }
        }

        // 3. Deleted relationships
        for &id in self.relationships.removed() {
            visitor.visit_deleted_relationship(id)?;
        }

        // 4. Deleted nodes
        for &id in self.nodes.removed() {
            visitor.visit_deleted_node(id)?;
        }

        // 5. Modified nodes: label changes then property changes
        for (&id, state) in &self.node_states {
            if !state.label_diffs().is_empty() {
                let added: Vec<LabelId> = state.label_diffs().added().copied().collect();
                let removed: Vec<LabelId> = state.label_diffs().removed().copied().collect();
                visitor.visit_node_label_changes(id, &added, &removed)?;
            }
            if !state.properties().is_empty() {
                let added: HashMap<_, _> = state.properties().added_iter().map(|(k, v)| (*k, v.clone())).collect();
                let changed: HashMap<_, _> =
                    state.properties().changed_iter().map(|(k, v)| (*k, v.clone())).collect();
                let removed: Vec<PropertyKeyId> = state.properties().removed_iter().copied().collect();
                visitor.visit_node_property_changes(id, &added, &changed, &removed)?;
            }
        }

        // 6. Modified relationships: property changes
        for (&id, state) in &self.relationship_states {
            if !state.properties().is_empty() {
                let added: HashMap<_, _> = state.properties().added_iter().map(|(k, v)| (*k, v.clone())).collect();
                let changed: HashMap<_, _> =
                    state.properties().changed_iter().map(|(k, v)| (*k, v.clone())).collect();
                let removed: Vec<PropertyKeyId> = state.properties().removed_iter().copied().collect();
                visitor.visit_rel_property_changes(id, &added, &changed, &removed)?;
            }
        }

        // 7. Graph property changes
        if !self.graph_state.is_empty() {
            let props = self.graph_state.properties();
            let added: HashMap<_, _> = props.added_iter().map(|(k, v)| (*k, v.clone())).collect();
            let changed: HashMap<_, _> = props.changed_iter().map(|(k, v)| (*k, v.clone())).collect();
            let removed: Vec<PropertyKeyId> = props.removed_iter().copied().collect();
            visitor.visit_graph_property_changes(&added, &changed, &removed)?;
        }

        // 8. Index changes: added then removed
        for d in self.schema.indexes().added() {
            visitor.visit_added_index(d)?;
        }
        for d in self.schema.indexes().removed() {
            visitor.visit_removed_index(d)?;
        }

        // 9. Constraint changes
        for c in self.schema.constraints().added() {
            visitor.visit_added_constraint(c)?;
        }
        for c in self.schema.constraints().removed() {
            visitor.visit_removed_constraint(c)?;
        }

        // 10. Created tokens, each in id order
        for (id, name) in self.label_tokens.in_id_order() {
            visitor.visit_created_label_token(name, id)?;
        }
        for (id, name) in self.property_key_tokens.in_id_order() {
            visitor.visit_created_property_key_token(name, id)?;
        }
        for (id, name) in self.rel_type_tokens.in_id_order() {
            visitor.visit_created_relationship_type_token(name, id)?;
        }

        Ok(())
    }
}
