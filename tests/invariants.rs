//! Property tests for the universal invariants: a `DiffSet` stays
//! disjoint and idempotent-unRemove under any sequence of operations,
//! augmentation always yields `(committed ∖ removed) ∪ added`, the
//! label/node bijection holds after any label mutation sequence, and
//! an untouched buffer is the identity for every augment call.

use std::collections::HashSet;

use proptest::prelude::*;

use txstate::model::{LabelId, NodeId};
use txstate::{DiffSet, TxState, TxStateConfig};

#[derive(Debug, Clone, Copy)]
enum SetOp {
    Add(i32),
    Remove(i32),
}

fn set_op_strategy() -> impl Strategy<Value = SetOp> {
    prop_oneof![
        (0i32..8).prop_map(SetOp::Add),
        (0i32..8).prop_map(SetOp::Remove),
    ]
}

proptest! {
    /// Invariant 1 + invariant 8: disjointness and idempotent unRemove hold
    /// after every prefix of any add/remove sequence.
    #[test]
    fn diffset_stays_disjoint_and_unremove_is_idempotent(ops in prop::collection::vec(set_op_strategy(), 0..50)) {
        let mut d: DiffSet<i32> = DiffSet::new();
        for op in &ops {
            match *op {
                SetOp::Add(x) => d.add(x),
                SetOp::Remove(x) => d.remove(x),
            }
            let added: HashSet<i32> = d.added().copied().collect();
            let removed: HashSet<i32> = d.removed().copied().collect();
            prop_assert!(added.is_disjoint(&removed));
        }

        // remove(x) then add(x) always lands on "added, not removed", no
        // matter what state x was in beforehand.
        d.remove(3);
        d.add(3);
        prop_assert!(d.is_added(&3));
        prop_assert!(!d.is_removed(&3));
    }

    /// Invariant 3: augmenting any committed set disjoint from the
    /// DiffSet's own elements yields exactly `(committed ∖ removed) ∪ added`,
    /// each element once, committed order preserved.
    #[test]
    fn augment_yields_committed_minus_removed_then_added(
        committed in prop::collection::vec(100i32..200, 0..20),
        ops in prop::collection::vec(set_op_strategy(), 0..30),
    ) {
        let mut d: DiffSet<i32> = DiffSet::new();
        for op in &ops {
            match *op {
                SetOp::Add(x) => d.add(x),
                SetOp::Remove(x) => d.remove(x),
            }
        }

        let removed: HashSet<i32> = d.removed().copied().collect();
        let mut expected: Vec<i32> = committed.iter().copied().filter(|x| !removed.contains(x)).collect();
        expected.extend(d.added().copied());

        let out: Vec<i32> = d.augment(committed.clone()).collect();
        prop_assert_eq!(out, expected);
    }

    /// Invariant 4: after any sequence of label add/remove on a handful of
    /// nodes and labels, both sides of the bijection (the per-node label
    /// diff and the per-label node diff) agree with a hand-simulated
    /// 3-state model, and neither side is ever self-contradictory.
    #[test]
    fn label_bijection_holds_after_random_mutations(
        ops in prop::collection::vec((0u64..5, 0i32..3, any::<bool>()), 0..50)
    ) {
        #[derive(PartialEq, Clone, Copy)]
        enum St { Neutral, Added, Removed }

        let mut t = TxState::new(TxStateConfig::default());
        let mut model = std::collections::HashMap::new();
        for (node, label, add) in ops {
            t.node_do_create(NodeId(node));
            let st = model.entry((node, label)).or_insert(St::Neutral);
            if add {
                t.node_do_add_label(NodeId(node), LabelId(label));
                *st = St::Added;
            } else {
                t.node_do_remove_label(NodeId(node), LabelId(label));
                *st = if *st == St::Added { St::Neutral } else { St::Removed };
            }
        }

        for node in 0u64..5 {
            for label in 0i32..3 {
                let expected_added = model.get(&(node, label)) == Some(&St::Added);

                let by_label = t.nodes_with_label_changed(LabelId(label));
                prop_assert_eq!(by_label.is_added(&NodeId(node)), expected_added);
                prop_assert!(!(by_label.is_added(&NodeId(node)) && by_label.is_removed(&NodeId(node))));

                let by_node: Vec<LabelId> = t.augment_labels(NodeId(node), std::iter::empty()).collect();
                prop_assert_eq!(by_node.contains(&LabelId(label)), expected_added);
            }
        }
    }

    /// Invariant 7: a freshly constructed buffer is the identity for
    /// augmentation and reports no changes.
    #[test]
    fn empty_buffer_is_identity_for_augment(committed in prop::collection::vec(0u64..50, 0..10)) {
        let mut t = TxState::new(TxStateConfig::default());
        prop_assert!(!t.has_changes());
        prop_assert!(!t.has_data_changes());

        let nodes: Vec<NodeId> = committed.iter().copied().map(NodeId).collect();
        let out: Vec<NodeId> = t.augment_nodes_get_all(nodes.clone().into_iter()).collect();
        prop_assert_eq!(out, nodes);
    }
}
