//! # Transaction-local mutation buffer
//!
//! Everything a single transaction has written but not yet committed:
//! node/relationship/property/label/token/schema/index diffs, augmented
//! reads over those diffs, and a deterministic commit-time event stream.
//! See the module docs on [`state::TxState`] for the façade.

pub mod diff_set;
pub mod property_container;
pub mod node_state;
pub mod relationship_state;
pub mod label_state;
pub mod graph_state;
pub mod tokens;
pub mod schema;
pub mod index_updates;
pub mod cursors;
pub mod visitor;
pub mod config;
pub mod state;

use serde::{Deserialize, Serialize};

/// Transaction mode. Carried from the teacher crate: `ReadOnly` transactions
/// never allocate a `TxState` beyond the empty façade since they perform no
/// mutation (§5 memory discipline).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxMode {
    ReadOnly,
    ReadWrite,
}

/// Opaque transaction identifier, owned by the surrounding kernel — this
/// crate never allocates one, only carries it for logging/tracing spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxId(pub u64);

/// Implemented by the surrounding kernel's transaction handle. The buffer
/// itself does not need this trait (`TxState` is a plain struct, not a
/// `Transaction`), but it is kept as the seam the kernel uses to identify
/// whose buffer this is.
pub trait Transaction: Send + Sync {
    fn mode(&self) -> TxMode;
    fn id(&self) -> TxId;
}

pub use config::TxStateConfig;
pub use diff_set::DiffSet;
pub use state::TxState;
pub use visitor::{TxStateError, TxStateVisitor};
