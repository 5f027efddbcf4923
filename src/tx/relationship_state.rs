//! `RelationshipState` — per-relationship property diffs plus the
//! immutable endpoint metadata fixed at creation (§4.3 tail / glossary).

use crate::model::{NodeId, PropertyKeyId, RelTypeId, Value};
use super::property_container::PropertyContainerState;

/// Per-relationship transaction-local state.
#[derive(Debug, Clone)]
pub struct RelationshipState {
    properties: PropertyContainerState,
    start_node: NodeId,
    end_node: NodeId,
    rel_type: RelTypeId,
}

impl RelationshipState {
    pub fn new(start_node: NodeId, end_node: NodeId, rel_type: RelTypeId) -> Self {
        Self {
            properties: PropertyContainerState::new(),
            start_node,
            end_node,
            rel_type,
        }
    }

    pub fn start_node(&self) -> NodeId {
        self.start_node
    }

    pub fn end_node(&self) -> NodeId {
        self.end_node
    }

    pub fn rel_type(&self) -> RelTypeId {
        self.rel_type
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

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
}
