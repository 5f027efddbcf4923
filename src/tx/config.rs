//! Buffer-level configuration (§2 ambient stack).
//!
//! The buffer itself takes no configuration — it is owned by exactly one
//! transaction and its behavior is fully determined by the mutations it
//! receives (§5). The one operationally tunable knob is how many spare
//! buffers each augmenting-cursor pool keeps around.

/// Per-`TxState` tuning. Construct with `Default::default()` unless the
/// surrounding kernel has a reason to size the cursor pools differently
/// (e.g. statements that fan out many concurrent scans on one tx).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxStateConfig {
    /// Spare buffers retained per cursor-pool type before further
    /// releases are simply dropped. 16 comfortably covers a single
    /// statement's worth of concurrent scans without growing unbounded
    /// across a long-running explicit transaction.
    pub cursor_pool_capacity: usize,
}

impl Default for TxStateConfig {
    fn default() -> Self {
        Self { cursor_pool_capacity: 16 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cursor_pool_capacity_is_sixteen() {
        assert_eq!(TxStateConfig::default().cursor_pool_capacity, 16);
    }
}
