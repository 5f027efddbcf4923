//! PropertyMap — the key-value store on nodes, relationships, and the graph.

use std::collections::HashMap;
use super::{PropertyKeyId, Value};

/// A map of property keys to values, keyed by token id (not by name —
/// name resolution is the token table's job, not the buffer's).
pub type PropertyMap = HashMap<PropertyKeyId, Value>;

/// Convert an iterator of (key, value) pairs into a `Value::Map`, keeping
/// the teacher crate's ergonomic literal construction for string-keyed
/// maps used as plain property values (as opposed to a node/relationship's
/// `PropertyMap`, which is keyed by `PropertyKeyId`).
impl<K, V> From<Vec<(K, V)>> for Value
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        Value::Map(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
