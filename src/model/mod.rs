//! # Property graph model
//!
//! The identifier newtypes and value algebra that cross every boundary of
//! the transaction buffer: façade API, DiffSets, augmenting cursors, and
//! the commit-time visitor.
//!
//! Design rule: this module is pure data — no I/O, no state, no async.

pub mod ids;
pub mod value;
pub mod property_map;
pub mod node;
pub mod relationship;

pub use ids::{NodeId, RelId, LabelId, PropertyKeyId, RelTypeId};
pub use value::{Value, ValueTuple, IsoDuration};
pub use property_map::PropertyMap;
pub use node::Node;
pub use relationship::{Relationship, Direction};
