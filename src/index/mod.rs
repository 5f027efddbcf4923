//! Schema descriptors — the keys that index-update tracking and
//! schema-change tracking (§4.5, §4.6) are organized around.

use serde::{Deserialize, Serialize};
use crate::model::{LabelId, PropertyKeyId, RelTypeId};

/// Type of index to create. Carried from the teacher crate's `index::IndexType`;
/// `Unique` is the backing index kind a uniqueness constraint owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexType {
    BTree,
    FullText,
    Unique,
}

/// A label plus an ordered list of property keys — the schema a label-based
/// index or constraint is defined over. Order matters: `(label, [a, b])`
/// and `(label, [b, a])` are different schemas.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelSchemaDescriptor {
    pub label: LabelId,
    pub property_keys: Vec<PropertyKeyId>,
}

impl LabelSchemaDescriptor {
    pub fn new(label: LabelId, property_keys: impl Into<Vec<PropertyKeyId>>) -> Self {
        Self { label, property_keys: property_keys.into() }
    }

    pub fn is_composite(&self) -> bool {
        self.property_keys.len() > 1
    }
}

/// The relationship-type analogue of `LabelSchemaDescriptor`, for
/// relationship-type-scoped constraints (`constraintsChangesForRelationshipType`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelTypeSchemaDescriptor {
    pub rel_type: RelTypeId,
    pub property_keys: Vec<PropertyKeyId>,
}

/// Either schema shape a constraint can be defined over.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaDescriptor {
    Label(LabelSchemaDescriptor),
    RelType(RelTypeSchemaDescriptor),
}

impl From<LabelSchemaDescriptor> for SchemaDescriptor {
    fn from(d: LabelSchemaDescriptor) -> Self {
        SchemaDescriptor::Label(d)
    }
}

impl From<RelTypeSchemaDescriptor> for SchemaDescriptor {
    fn from(d: RelTypeSchemaDescriptor) -> Self {
        SchemaDescriptor::RelType(d)
    }
}

/// An index, identified by its schema and kind. Two descriptors are equal
/// iff schema and `unique` agree — the catalog id (if any) lives one layer
/// up, outside this buffer's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexDescriptor {
    pub schema: LabelSchemaDescriptor,
    pub index_type: IndexType,
}

impl IndexDescriptor {
    pub fn new(schema: LabelSchemaDescriptor, index_type: IndexType) -> Self {
        Self { schema, index_type }
    }

    pub fn is_unique(&self) -> bool {
        self.index_type == IndexType::Unique
    }
}

/// A schema constraint. A uniqueness constraint owns a backing index:
/// dropping the constraint drops the index with it (§4.6).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstraintDescriptor {
    Uniqueness { schema: LabelSchemaDescriptor, backing_index: IndexDescriptor },
    Existence { schema: SchemaDescriptor },
}

impl ConstraintDescriptor {
    pub fn schema(&self) -> SchemaDescriptor {
        match self {
            ConstraintDescriptor::Uniqueness { schema, .. } => SchemaDescriptor::Label(schema.clone()),
            ConstraintDescriptor::Existence { schema } => schema.clone(),
        }
    }

    pub fn backing_index(&self) -> Option<&IndexDescriptor> {
        match self {
            ConstraintDescriptor::Uniqueness { backing_index, .. } => Some(backing_index),
            ConstraintDescriptor::Existence { .. } => None,
        }
    }
}
