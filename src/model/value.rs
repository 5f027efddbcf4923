//! The storage value algebra and the `ValueTuple` index key built from it.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A property value.
///
/// Covers the storage value algebra the buffer needs to reason about:
/// scalars, temporal values, spatial points, and containers, plus
/// `Value::Null` as the "no-value" sentinel used wherever the spec talks
/// about a property that is absent (e.g. the `before`/`after` arguments
/// to `indexDoUpdateEntry`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Map(HashMap<String, Value>),

    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(DateTime<Utc>),
    LocalDateTime(NaiveDateTime),
    Duration(IsoDuration),

    Point2D { srid: i32, x: f64, y: f64 },
    Point3D { srid: i32, x: f64, y: f64, z: f64 },
}

/// ISO 8601 duration (months, days, seconds, nanoseconds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IsoDuration {
    pub months: i64,
    pub days: i64,
    pub seconds: i64,
    pub nanoseconds: i32,
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Bool(_) => "BOOLEAN",
            Value::Int(_) => "INTEGER",
            Value::Float(_) => "FLOAT",
            Value::String(_) => "STRING",
            Value::Bytes(_) => "BYTES",
            Value::List(_) => "LIST",
            Value::Map(_) => "MAP",
            Value::Date(_) => "DATE",
            Value::Time(_) => "TIME",
            Value::DateTime(_) => "DATETIME",
            Value::LocalDateTime(_) => "LOCAL_DATETIME",
            Value::Duration(_) => "DURATION",
            Value::Point2D { .. } => "POINT",
            Value::Point3D { .. } => "POINT",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Float(f) if f.fract() == 0.0 => Some(*f as i64),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}
impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}
impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}
impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}
impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}
impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(s) => write!(f, "\"{}\"", s.replace('"', "\\\"")),
            Value::Bytes(b) => write!(f, "<bytes[{}]>", b.len()),
            Value::List(l) => {
                write!(f, "[")?;
                for (i, v) in l.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
            Value::Map(m) => {
                write!(f, "{{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            Value::Date(d) => write!(f, "{d}"),
            Value::Time(t) => write!(f, "{t}"),
            Value::DateTime(dt) => write!(f, "{dt}"),
            Value::LocalDateTime(dt) => write!(f, "{dt}"),
            Value::Duration(d) => write!(f, "P{}M{}DT{}S", d.months, d.days, d.seconds),
            Value::Point2D { x, y, srid } => write!(f, "point({{srid: {srid}, x: {x}, y: {y}}})"),
            Value::Point3D { x, y, z, srid } => {
                write!(f, "point({{srid: {srid}, x: {x}, y: {y}, z: {z}}})")
            }
        }
    }
}

impl Value {
    /// Neo4j-style comparison. `None` for incomparable pairs (mirrors SQL
    /// NULL semantics: `NULL = NULL` is unknown, not true).
    pub fn neo4j_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Null, _) | (_, Value::Null) => None,
            (Value::Bool(a), Value::Bool(b)) => a.partial_cmp(b),
            (Value::Int(a), Value::Int(b)) => a.partial_cmp(b),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Int(a), Value::Float(b)) => (*a as f64).partial_cmp(b),
            (Value::Float(a), Value::Int(b)) => a.partial_cmp(&(*b as f64)),
            (Value::String(a), Value::String(b)) => a.partial_cmp(b),
            _ => None,
        }
    }

    /// A total order over the value's type, used only to give every `Value`
    /// a deterministic rank relative to values of a *different* type so
    /// that `ValueTuple` can form a total order for a `BTreeMap` key. This
    /// has no bearing on `neo4j_cmp`, which is the semantic ordering used
    /// for range-query bound comparisons within a single type.
    fn type_rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) => 2,
            Value::Float(_) => 3,
            Value::String(_) => 4,
            Value::Bytes(_) => 5,
            Value::Date(_) => 6,
            Value::Time(_) => 7,
            Value::DateTime(_) => 8,
            Value::LocalDateTime(_) => 9,
            Value::Duration(_) => 10,
            Value::Point2D { .. } => 11,
            Value::Point3D { .. } => 12,
            Value::List(_) => 13,
            Value::Map(_) => 14,
        }
    }

    /// Total order used as the `ValueTuple` comparator. Falls back to
    /// `type_rank` whenever `neo4j_cmp` would return `None` (cross-type
    /// pairs, or a float `NaN`), so the ordering is total rather than
    /// partial — required for a `BTreeMap<ValueTuple, _>` key.
    fn total_cmp(&self, other: &Value) -> Ordering {
        if let Some(ord) = self.neo4j_cmp(other) {
            return ord;
        }
        match (self, other) {
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            _ => self.type_rank().cmp(&other.type_rank()),
        }
    }
}

/// An ordered list of values forming an index key.
///
/// `ValueTuple` is the key type for the per-descriptor index-update map
/// (§4.5): single-property indexes use a one-element tuple, composite
/// indexes a longer one. Ordering is lexicographic over `Value::total_cmp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueTuple(pub Vec<Value>);

impl ValueTuple {
    pub fn single(v: Value) -> Self {
        ValueTuple(vec![v])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_composite(&self) -> bool {
        self.0.len() > 1
    }

    pub fn values(&self) -> &[Value] {
        &self.0
    }
}

impl From<Value> for ValueTuple {
    fn from(v: Value) -> Self {
        ValueTuple::single(v)
    }
}

impl From<Vec<Value>> for ValueTuple {
    fn from(v: Vec<Value>) -> Self {
        ValueTuple(v)
    }
}

impl Eq for ValueTuple {}

impl Value {
    /// Hash consistent with `total_cmp` rather than `PartialEq`/`==`:
    /// floats hash on their bit pattern (so `NaN` hashes deterministically)
    /// and every variant's tag is mixed in so cross-type collisions need an
    /// actual value match, not just luck. Lets `ValueTuple` key a `HashMap`
    /// for the unpromoted index-update table (§4.5).
    fn hash_component<H: std::hash::Hasher>(&self, state: &mut H) {
        use std::hash::Hash;
        self.type_rank().hash(state);
        match self {
            Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Int(i) => i.hash(state),
            Value::Float(f) => f.to_bits().hash(state),
            Value::String(s) => s.hash(state),
            Value::Bytes(b) => b.hash(state),
            Value::Date(d) => d.hash(state),
            Value::Time(t) => t.hash(state),
            Value::DateTime(dt) => dt.hash(state),
            Value::LocalDateTime(dt) => dt.hash(state),
            Value::Duration(d) => {
                d.months.hash(state);
                d.days.hash(state);
                d.seconds.hash(state);
                d.nanoseconds.hash(state);
            }
            Value::Point2D { srid, x, y } => {
                srid.hash(state);
                x.to_bits().hash(state);
                y.to_bits().hash(state);
            }
            Value::Point3D { srid, x, y, z } => {
                srid.hash(state);
                x.to_bits().hash(state);
                y.to_bits().hash(state);
                z.to_bits().hash(state);
            }
            Value::List(_) | Value::Map(_) => {
                // Not used as index keys; hash by type only.
            }
        }
    }
}

impl std::hash::Hash for ValueTuple {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        use std::hash::Hash;
        for v in &self.0 {
            v.hash_component(state);
        }
        self.0.len().hash(state);
    }
}

impl PartialOrd for ValueTuple {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ValueTuple {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.0.iter().zip(other.0.iter()) {
            match a.total_cmp(b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        self.0.len().cmp(&other.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_from() {
        assert_eq!(Value::from("hello"), Value::String("hello".into()));
        assert_eq!(Value::from(42), Value::Int(42));
        assert_eq!(Value::from(3.14), Value::Float(3.14));
        assert_eq!(Value::from(true), Value::Bool(true));
    }

    #[test]
    fn test_null_comparison() {
        assert_eq!(Value::Null.neo4j_cmp(&Value::Null), None);
        assert_eq!(Value::Null.neo4j_cmp(&Value::Int(1)), None);
    }

    #[test]
    fn test_numeric_comparison() {
        assert_eq!(
            Value::Int(1).neo4j_cmp(&Value::Float(1.5)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn test_value_tuple_ordering() {
        let apple = ValueTuple::single(Value::from("apple"));
        let banana = ValueTuple::single(Value::from("banana"));
        assert!(apple < banana);

        let composite_a = ValueTuple::from(vec![Value::from(1i64), Value::from("x")]);
        let composite_b = ValueTuple::from(vec![Value::from(1i64), Value::from("y")]);
        assert!(composite_a < composite_b);
    }

    #[test]
    fn test_value_tuple_total_order_is_stable_for_btree() {
        use std::collections::BTreeMap;
        let mut m: BTreeMap<ValueTuple, u32> = BTreeMap::new();
        m.insert(ValueTuple::single(Value::from("cherry")), 3);
        m.insert(ValueTuple::single(Value::from("apple")), 1);
        m.insert(ValueTuple::single(Value::from("banana")), 2);
        let keys: Vec<_> = m
            .keys()
            .map(|k| k.0[0].as_str().unwrap().to_string())
            .collect();
        assert_eq!(keys, vec!["apple", "banana", "cherry"]);
    }
}
