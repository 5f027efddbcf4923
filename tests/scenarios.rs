//! End-to-end scenarios against `TxState` directly — no kernel, no
//! storage backend, just the mutation buffer and its façade API.

use pretty_assertions::assert_eq;

use txstate::index::{ConstraintDescriptor, IndexDescriptor, IndexType, LabelSchemaDescriptor};
use txstate::model::{LabelId, NodeId, PropertyKeyId, RelId, RelTypeId, Value, ValueTuple};
use txstate::{TxState, TxStateConfig};

fn tx() -> TxState {
    TxState::new(TxStateConfig::default())
}

// ============================================================================
// create + property
// ============================================================================

#[test]
fn create_then_add_property_is_visible_before_commit() {
    let mut t = tx();
    t.node_do_create(NodeId(7));
    t.node_do_add_property(NodeId(7), PropertyKeyId(1), Value::from("a"));

    assert!(t.node_is_added_in_this_tx(NodeId(7)));
    assert_eq!(t.added_and_removed_nodes().added().copied().collect::<Vec<_>>(), vec![NodeId(7)]);

    struct Recorder {
        created: Vec<NodeId>,
        node_props: Vec<(NodeId, Vec<(PropertyKeyId, Value)>)>,
    }
    impl txstate::TxStateVisitor for Recorder {
        fn visit_created_node(&mut self, id: NodeId) -> Result<(), txstate::TxStateError> {
            self.created.push(id);
            Ok(())
        }
        fn visit_node_property_changes(
            &mut self,
            id: NodeId,
            added: &std::collections::HashMap<PropertyKeyId, Value>,
            _changed: &std::collections::HashMap<PropertyKeyId, Value>,
            _removed: &[PropertyKeyId],
        ) -> Result<(), txstate::TxStateError> {
            let mut pairs: Vec<_> = added.iter().map(|(k, v)| (*k, v.clone())).collect();
            pairs.sort_by_key(|(k, _)| k.0);
            self.node_props.push((id, pairs));
            Ok(())
        }
    }

    let mut r = Recorder { created: vec![], node_props: vec![] };
    t.accept(&mut r).unwrap();
    assert_eq!(r.created, vec![NodeId(7)]);
    assert_eq!(r.node_props, vec![(NodeId(7), vec![(PropertyKeyId(1), Value::from("a"))])]);
}

// ============================================================================
// label bijection
// ============================================================================

#[test]
fn add_two_labels_then_remove_one_keeps_bijection() {
    let mut t = tx();
    t.node_do_add_label(NodeId(9), LabelId(42));
    t.node_do_add_label(NodeId(9), LabelId(43));
    t.node_do_remove_label(NodeId(9), LabelId(42));

    // label 42 was added then removed in the same tx: net no-op on that label's DiffSet.
    assert!(t.nodes_with_label_changed(LabelId(42)).is_empty());
    // label 43 is still a pending add.
    assert_eq!(
        t.nodes_with_label_changed(LabelId(43)).added().copied().collect::<Vec<_>>(),
        vec![NodeId(9)]
    );
}

// ============================================================================
// range index
// ============================================================================

#[test]
fn range_seek_by_string_excludes_lower_and_upper_as_requested() {
    let mut t = tx();
    let schema = LabelSchemaDescriptor::new(LabelId(1), vec![PropertyKeyId(1)]);

    t.index_do_update_entry(&schema, NodeId(1), None, Some(ValueTuple::single(Value::from("apple"))));
    t.index_do_update_entry(&schema, NodeId(2), None, Some(ValueTuple::single(Value::from("banana"))));
    t.index_do_update_entry(&schema, NodeId(3), None, Some(ValueTuple::single(Value::from("cherry"))));

    let apricot = Value::from("apricot");
    let cherry = Value::from("cherry");
    let result = t
        .index_updates_for_range_seek_by_string(&schema, Some((&apricot, true)), Some((&cherry, false)))
        .unwrap();

    assert_eq!(result.added().copied().collect::<Vec<_>>(), vec![NodeId(2)]);
}

// ============================================================================
// prefix scan
// ============================================================================

#[test]
fn prefix_scan_returns_only_matching_keys() {
    let mut t = tx();
    let schema = LabelSchemaDescriptor::new(LabelId(1), vec![PropertyKeyId(1)]);

    t.index_do_update_entry(&schema, NodeId(1), None, Some(ValueTuple::single(Value::from("apple"))));
    t.index_do_update_entry(&schema, NodeId(2), None, Some(ValueTuple::single(Value::from("appliance"))));
    t.index_do_update_entry(&schema, NodeId(3), None, Some(ValueTuple::single(Value::from("banana"))));

    let result = t.index_updates_for_range_seek_by_prefix(&schema, "app").unwrap();
    let mut added: Vec<u64> = result.added().map(|n| n.0).collect();
    added.sort();
    assert_eq!(added, vec![1, 2]);
}

// ============================================================================
// create-delete shadow
// ============================================================================

#[test]
fn relationship_created_then_deleted_same_tx_leaves_no_trace_but_is_shadowed() {
    let mut t = tx();
    t.relationship_do_create(RelId(50), RelTypeId(1), NodeId(10), NodeId(20));
    t.relationship_do_delete(RelId(50), RelTypeId(1), NodeId(10), NodeId(20));

    assert!(t.added_and_removed_relationships().is_empty());
    assert!(t.relationship_is_deleted_in_this_tx(RelId(50)));
    assert!(!t.relationship_is_added_in_this_tx(RelId(50)));

    struct Counter(usize);
    impl txstate::TxStateVisitor for Counter {
        fn visit_created_relationship(
            &mut self,
            _id: RelId,
            _rel_type: RelTypeId,
            _start: NodeId,
            _end: NodeId,
        ) -> Result<(), txstate::TxStateError> {
            self.0 += 1;
            Ok(())
        }
        fn visit_deleted_relationship(&mut self, _id: RelId) -> Result<(), txstate::TxStateError> {
            self.0 += 1;
            Ok(())
        }
    }
    let mut c = Counter(0);
    t.accept(&mut c).unwrap();
    assert_eq!(c.0, 0);
}

// ============================================================================
// constraint + backing-index drop
// ============================================================================

#[test]
fn dropping_a_uniqueness_constraint_drops_its_backing_index_too() {
    let mut t = tx();
    let schema = LabelSchemaDescriptor::new(LabelId(1), vec![PropertyKeyId(1)]);
    let backing = IndexDescriptor::new(schema.clone(), IndexType::Unique);
    let constraint = ConstraintDescriptor::Uniqueness { schema: schema.clone(), backing_index: backing.clone() };

    t.constraint_do_add(constraint.clone());
    t.constraint_do_drop(constraint);

    let constraint_diff = t.constraints_changes_for_label(LabelId(1));
    assert!(constraint_diff.added.is_empty());
    assert!(constraint_diff.removed.is_empty());

    let index_diff = t.index_diff_sets_by_label(LabelId(1));
    assert!(index_diff.added.is_empty());
    assert!(index_diff.removed.is_empty());
}
