//! # txstate — transaction-local mutation buffer for a property-graph kernel
//!
//! Everything a single read-write transaction has written but not yet
//! committed: symbolic add/remove tracking for nodes, relationships,
//! labels, and properties; lazy index-update tracking with hashed-to-sorted
//! promotion; token tables for newly introduced labels, property keys, and
//! relationship types; schema-change tracking; augmenting cursors that
//! merge pending changes over a committed-store iterator without copying
//! it; and a deterministic commit-time event stream.
//!
//! A [`TxState`] belongs to exactly one transaction and is discarded whole
//! on commit or rollback — there is no reset-and-reuse path, and no
//! internal locking: everything here is synchronous and single-threaded by
//! contract. Physical storage, the write-ahead log, lock acquisition, and
//! concurrency control across transactions are the surrounding kernel's
//! job, not this crate's.
//!
//! ## Quick start
//!
//! ```rust
//! use txstate::{TxState, TxStateConfig};
//! use txstate::model::NodeId;
//!
//! let mut tx = TxState::new(TxStateConfig::default());
//! tx.node_do_create(NodeId(1));
//! assert!(tx.node_is_added_in_this_tx(NodeId(1)));
//! ```

pub mod model;
pub mod index;
pub mod tx;

pub use model::{Direction, LabelId, Node, NodeId, PropertyKeyId, PropertyMap, RelId, RelTypeId, Relationship, Value, ValueTuple};
pub use index::{ConstraintDescriptor, IndexDescriptor, IndexType, LabelSchemaDescriptor, RelTypeSchemaDescriptor, SchemaDescriptor};
pub use tx::{DiffSet, TxId, TxMode, TxState, TxStateConfig, TxStateError, TxStateVisitor, Transaction};
