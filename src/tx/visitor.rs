//! Commit-time visitor interface (§4.7, §6 "Commit interface", §7).

use std::collections::HashMap;

use crate::index::{ConstraintDescriptor, IndexDescriptor};
use crate::model::{LabelId, NodeId, PropertyKeyId, RelId, RelTypeId, Value};

/// The two failure modes that can cross `TxState::accept`'s boundary.
/// Everything else about the mutation API is infallible by contract (§7):
/// the buffer never validates caller input, only the visitor can refuse
/// what it's being asked to apply downstream.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TxStateError {
    #[error("constraint validation failed: {0}")]
    ConstraintValidationFailure(String),

    #[error("failed to create constraint: {0}")]
    CreateConstraintFailure(String),
}

/// Sink for `TxState::accept`'s fixed-order commit walk. One method per
/// event kind, mirroring the teacher's single-sink-over-double-dispatch
/// pattern (Design Notes §9) rather than a visitor-per-entity hierarchy.
pub trait TxStateVisitor {
    fn visit_created_node(&mut self, id: NodeId) -> Result<(), TxStateError> {
        let _ = id;
        Ok(())
    }

    fn visit_deleted_node(&mut self, id: NodeId) -> Result<(), TxStateError> {
        let _ = id;
        Ok(())
    }

    fn visit_created_relationship(
        &mut self,
        id: RelId,
        rel_type: RelTypeId,
        start: NodeId,
        end: NodeId,
    ) -> Result<(), TxStateError> {
        let _ = (id, rel_type, start, end);
        Ok(())
    }

    fn visit_deleted_relationship(&mut self, id: RelId) -> Result<(), TxStateError> {
        let _ = id;
        Ok(())
    }

    fn visit_node_label_changes(
        &mut self,
        id: NodeId,
        added: &[LabelId],
        removed: &[LabelId],
    ) -> Result<(), TxStateError> {
        let _ = (id, added, removed);
        Ok(())
    }

    fn visit_node_property_changes(
        &mut self,
        id: NodeId,
        added: &HashMap<PropertyKeyId, Value>,
        changed: &HashMap<PropertyKeyId, Value>,
        removed: &[PropertyKeyId],
    ) -> Result<(), TxStateError> {
        let _ = (id, added, changed, removed);
        Ok(())
    }

    fn visit_rel_property_changes(
        &mut self,
        id: RelId,
        added: &HashMap<PropertyKeyId, Value>,
        changed: &HashMap<PropertyKeyId, Value>,
        removed: &[PropertyKeyId],
    ) -> Result<(), TxStateError> {
        let _ = (id, added, changed, removed);
        Ok(())
    }

    fn visit_graph_property_changes(
        &mut self,
        added: &HashMap<PropertyKeyId, Value>,
        changed: &HashMap<PropertyKeyId, Value>,
        removed: &[PropertyKeyId],
    ) -> Result<(), TxStateError> {
        let _ = (added, changed, removed);
        Ok(())
    }

    fn visit_added_index(&mut self, descriptor: &IndexDescriptor) -> Result<(), TxStateError> {
        let _ = descriptor;
        Ok(())
    }

    fn visit_removed_index(&mut self, descriptor: &IndexDescriptor) -> Result<(), TxStateError> {
        let _ = descriptor;
        Ok(())
    }

    fn visit_added_constraint(&mut self, descriptor: &ConstraintDescriptor) -> Result<(), TxStateError> {
        let _ = descriptor;
        Ok(())
    }

    fn visit_removed_constraint(&mut self, descriptor: &ConstraintDescriptor) -> Result<(), TxStateError> {
        let _ = descriptor;
        Ok(())
    }

    fn visit_created_label_token(&mut self, name: &str, id: LabelId) -> Result<(), TxStateError> {
        let _ = (name, id);
        Ok(())
    }

    fn visit_created_property_key_token(&mut self, name: &str, id: PropertyKeyId) -> Result<(), TxStateError> {
        let _ = (name, id);
        Ok(())
    }

    fn visit_created_relationship_type_token(
        &mut self,
        name: &str,
        id: RelTypeId,
    ) -> Result<(), TxStateError> {
        let _ = (name, id);
        Ok(())
    }
}
