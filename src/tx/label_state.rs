//! `LabelState` — per-label node-id diffs, the other half of the
//! label/node bijection `NodeState::label_diffs` maintains (§4.4).

use crate::model::NodeId;
use super::diff_set::DiffSet;

#[derive(Debug, Clone, Default)]
pub struct LabelState {
    nodes: DiffSet<NodeId>,
}

impl LabelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &DiffSet<NodeId> {
        &self.nodes
    }

    pub fn add_node(&mut self, node: NodeId) {
        self.nodes.add(node);
    }

    pub fn remove_node(&mut self, node: NodeId) {
        self.nodes.remove(node);
    }

    /// Unconditionally drops `node` from both sides, used by
    /// `nodeDoDelete` to keep the label/node bijection intact when the
    /// owning `NodeState` (and its `labelDiffs`) is discarded (§4.4, §9).
    pub fn purge_node(&mut self, node: NodeId) {
        self.nodes.purge(&node);
    }
}
