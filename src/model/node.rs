//! The committed-store shape of a node — what an augmenting cursor merges
//! pending changes against. The buffer itself never stores a `Node`; it
//! stores `NodeId`s plus diffs (see `crate::tx::node_state`).

use serde::{Deserialize, Serialize};
use super::{LabelId, PropertyMap};

pub use super::ids::NodeId;

/// A committed node, as read from the store this buffer augments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub labels: Vec<LabelId>,
    pub properties: PropertyMap,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            labels: Vec::new(),
            properties: PropertyMap::new(),
        }
    }

    pub fn with_labels(mut self, labels: impl IntoIterator<Item = LabelId>) -> Self {
        self.labels = labels.into_iter().collect();
        self
    }

    pub fn has_label(&self, label: LabelId) -> bool {
        self.labels.contains(&label)
    }
}
