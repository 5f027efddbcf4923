//! Schema-change tracking — index and constraint `DiffSet`s (§4.6).

use crate::index::{ConstraintDescriptor, IndexDescriptor};
use super::diff_set::DiffSet;

#[derive(Debug, Clone, Default)]
pub struct SchemaState {
    indexes: DiffSet<IndexDescriptor>,
    constraints: DiffSet<ConstraintDescriptor>,
}

impl SchemaState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty() && self.constraints.is_empty()
    }

    pub fn indexes(&self) -> &DiffSet<IndexDescriptor> {
        &self.indexes
    }

    pub fn constraints(&self) -> &DiffSet<ConstraintDescriptor> {
        &self.constraints
    }

    /// `indexRuleDoAdd` — `DiffSet::add` already does the unRemove-first
    /// dance §4.6 calls for, so this is a direct forward.
    pub fn index_rule_do_add(&mut self, descriptor: IndexDescriptor) {
        self.indexes.add(descriptor);
    }

    pub fn index_do_drop(&mut self, descriptor: IndexDescriptor) {
        self.indexes.remove(descriptor);
    }

    pub fn index_do_unremove(&mut self, descriptor: &IndexDescriptor) -> bool {
        self.indexes.unremove(descriptor)
    }

    /// Adding a uniqueness constraint also registers its backing index.
    pub fn constraint_do_add(&mut self, descriptor: ConstraintDescriptor) {
        if let Some(backing) = descriptor.backing_index() {
            self.indexes.add(backing.clone());
        }
        self.constraints.add(descriptor);
    }

    /// Dropping a uniqueness-enforcing constraint drops its backing index.
    pub fn constraint_do_drop(&mut self, descriptor: ConstraintDescriptor) {
        if let Some(backing) = descriptor.backing_index() {
            self.indexes.remove(backing.clone());
        }
        self.constraints.remove(descriptor);
    }

    /// Index descriptors owned by uniqueness constraints added this tx.
    pub fn constraint_indexes_created_in_tx(&self) -> Vec<IndexDescriptor> {
        self.constraints
            .added()
            .filter_map(|c| c.backing_index().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{IndexType, LabelSchemaDescriptor};
    use crate::model::{LabelId, PropertyKeyId};

    fn schema() -> LabelSchemaDescriptor {
        LabelSchemaDescriptor::new(LabelId(1), vec![PropertyKeyId(1)])
    }

    #[test]
    fn constraint_add_then_drop_cancels_and_drops_backing_index() {
        let backing = IndexDescriptor::new(schema(), IndexType::Unique);
        let c = ConstraintDescriptor::Uniqueness { schema: schema(), backing_index: backing.clone() };

        let mut s = SchemaState::new();
        s.constraint_do_add(c.clone());
        s.constraint_do_drop(c);

        assert!(s.constraints().is_empty());
        assert!(s.indexes().is_empty());
    }

    #[test]
    fn constraint_indexes_created_in_tx_lists_backing_indexes() {
        let backing = IndexDescriptor::new(schema(), IndexType::Unique);
        let c = ConstraintDescriptor::Uniqueness { schema: schema(), backing_index: backing.clone() };

        let mut s = SchemaState::new();
        s.constraint_do_add(c);

        assert_eq!(s.constraint_indexes_created_in_tx(), vec![backing]);
    }
}
