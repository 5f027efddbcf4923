//! Token tables — the (id, name) pairs for labels, property keys, and
//! relationship types introduced by this transaction (§3, §4.6).
//!
//! Token ids are allocated by an external token store before they reach
//! the buffer (mirroring node/relationship ids, §3 Identifiers); the
//! buffer only remembers which ones were newly minted so commit can emit
//! `visitCreatedXToken` events.

use std::collections::HashMap;
use std::hash::Hash;

/// A generic "names introduced this tx" table, generic over the token id
/// newtype so `TxState` can hold one instance per token kind without
/// repeating the bookkeeping three times.
#[derive(Debug, Clone)]
pub struct TokenTable<Id: Eq + Hash + Ord + Copy> {
    created: HashMap<Id, String>,
}

// Hand-written rather than `#[derive(Default)]`: the derive macro would add
// a spurious `Id: Default` bound even though `HashMap::default()` doesn't
// need one, which would stop `TokenTable<LabelId>` and friends from getting
// a `Default` impl at all (none of the token id newtypes implement `Default`).
impl<Id: Eq + Hash + Ord + Copy> Default for TokenTable<Id> {
    fn default() -> Self {
        Self { created: HashMap::new() }
    }
}

impl<Id: Eq + Hash + Ord + Copy> TokenTable<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.created.is_empty()
    }

    pub fn create(&mut self, id: Id, name: impl Into<String>) {
        self.created.insert(id, name.into());
    }

    pub fn name_of(&self, id: Id) -> Option<&str> {
        self.created.get(&id).map(String::as_str)
    }

    /// Created tokens in ascending id order, per §4.7 step 10.
    pub fn in_id_order(&self) -> Vec<(Id, &str)> {
        let mut v: Vec<(Id, &str)> = self
            .created
            .iter()
            .map(|(id, name)| (*id, name.as_str()))
            .collect();
        v.sort_by_key(|(id, _)| *id);
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LabelId;

    #[test]
    fn tokens_are_emitted_in_ascending_id_order() {
        let mut t: TokenTable<LabelId> = TokenTable::new();
        t.create(LabelId(3), "Movie");
        t.create(LabelId(1), "Person");
        t.create(LabelId(2), "Company");
        let order: Vec<LabelId> = t.in_id_order().into_iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![LabelId(1), LabelId(2), LabelId(3)]);
    }
}
