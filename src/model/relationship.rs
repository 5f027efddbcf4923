//! The committed-store shape of a relationship.

use serde::{Deserialize, Serialize};
use super::{NodeId, PropertyMap, RelTypeId};

pub use super::ids::RelId;

/// Traversal / adjacency-slot direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Outgoing,
    Incoming,
    Both,
}

/// A committed relationship (directed edge), as read from the store this
/// buffer augments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub id: RelId,
    pub start: NodeId,
    pub end: NodeId,
    pub rel_type: RelTypeId,
    pub properties: PropertyMap,
}

impl Relationship {
    pub fn new(id: RelId, start: NodeId, end: NodeId, rel_type: RelTypeId) -> Self {
        Self {
            id,
            start,
            end,
            rel_type,
            properties: PropertyMap::new(),
        }
    }

    /// The "other" end of the relationship from the given node.
    pub fn other_node(&self, from: NodeId) -> Option<NodeId> {
        if from == self.start {
            Some(self.end)
        } else if from == self.end {
            Some(self.start)
        } else {
            None
        }
    }
}
