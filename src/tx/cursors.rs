//! Augmenting cursors — the read side of the buffer (§4.8).
//!
//! Every committed-store cursor the kernel hands in gets wrapped so a
//! caller sees "committed minus removed, plus added" without the buffer
//! copying the committed side. Fast path: no relevant changes, the
//! committed cursor is handed back untouched. Slow path: the merged
//! result is materialized into a pooled buffer, and the buffer is
//! returned to its pool when the cursor is dropped — each wrapper holds
//! the pool by `&mut` for its own lifetime, so the return happens for
//! free via the ordinary field-drop order, no `Rc`/`RefCell` required.

use std::hash::Hash;

use crate::model::{NodeId, PropertyKeyId, RelId, Value};
use super::diff_set::DiffSet;

/// A per-type free-list of spare buffers, so augmenting many cursors of
/// the same shape in one transaction doesn't allocate a `Vec` per call.
#[derive(Debug)]
pub struct CursorPool<T> {
    free: Vec<Vec<T>>,
    capacity: usize,
}

impl<T> CursorPool<T> {
    pub fn new(capacity: usize) -> Self {
        Self { free: Vec::new(), capacity }
    }

    fn acquire(&mut self) -> Vec<T> {
        self.free.pop().unwrap_or_default()
    }

    fn release(&mut self, mut buf: Vec<T>) {
        if self.free.len() < self.capacity {
            buf.clear();
            self.free.push(buf);
        }
    }
}

impl<T> Default for CursorPool<T> {
    fn default() -> Self {
        Self::new(16)
    }
}

/// The slow-path half of [`AugmentedCursor`]: iterates a materialized
/// buffer and returns it to `pool` on drop.
pub struct SlowCursor<'p, T> {
    buf: Vec<T>,
    pos: usize,
    pool: &'p mut CursorPool<T>,
}

impl<'p, T: Clone> Iterator for SlowCursor<'p, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.buf.get(self.pos)?.clone();
        self.pos += 1;
        Some(item)
    }
}

impl<'p, T> Drop for SlowCursor<'p, T> {
    fn drop(&mut self) {
        let buf = std::mem::take(&mut self.buf);
        self.pool.release(buf);
    }
}

/// Wraps a committed-store iterator of `T` with a `DiffSet<T>`'s pending
/// changes. `Fast` is the identity case (no changes to apply); `Slow`
/// merges committed and pending into a pooled buffer up front, since a
/// `removed`-filtering + `added`-appending stream can't both borrow the
/// pool and stay a zero-allocation lazy adapter at the same time once
/// pooling is involved.
pub enum AugmentedCursor<'p, I, T> {
    Fast(I),
    Slow(SlowCursor<'p, T>),
}

impl<'p, I, T> AugmentedCursor<'p, I, T>
where
    I: Iterator<Item = T>,
    T: Eq + Hash + Clone,
{
    pub fn augment(diff: &DiffSet<T>, committed: I, pool: &'p mut CursorPool<T>) -> Self {
        if diff.is_empty() {
            return AugmentedCursor::Fast(committed);
        }
        let mut buf = pool.acquire();
        buf.extend(diff.augment(committed));
        AugmentedCursor::Slow(SlowCursor { buf, pos: 0, pool })
    }
}

impl<'p, I, T> Iterator for AugmentedCursor<'p, I, T>
where
    I: Iterator<Item = T>,
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self {
            AugmentedCursor::Fast(i) => i.next(),
            AugmentedCursor::Slow(s) => s.next(),
        }
    }
}

/// Node-id and relationship-id cursors are both plain `DiffSet` augments.
pub type AugmentedNodeCursor<'p, I> = AugmentedCursor<'p, I, NodeId>;
pub type AugmentedRelationshipCursor<'p, I> = AugmentedCursor<'p, I, RelId>;
pub type AugmentedNodeRelationshipCursor<'p, I> = AugmentedCursor<'p, I, RelId>;

/// Property cursors augment key/value pairs rather than bare ids: a
/// committed pair is hidden if its key was removed this tx, replaced if
/// its key was changed, and every added pair is appended. Shares
/// `CursorPool<(PropertyKeyId, Value)>` with the same fast/slow split.
pub enum AugmentedPropertyCursor<'p, I> {
    Fast(I),
    Slow(SlowCursor<'p, (PropertyKeyId, Value)>),
}

impl<'p, I> AugmentedPropertyCursor<'p, I>
where
    I: Iterator<Item = (PropertyKeyId, Value)>,
{
    pub fn augment(
        container: &super::property_container::PropertyContainerState,
        committed: I,
        pool: &'p mut CursorPool<(PropertyKeyId, Value)>,
    ) -> Self {
        if container.is_empty() {
            return AugmentedPropertyCursor::Fast(committed);
        }
        let mut buf = pool.acquire();
        for (key, value) in committed {
            if container.is_removed(key) {
                continue;
            }
            match container.changed_value(key) {
                Some(v) => buf.push((key, v.clone())),
                None => buf.push((key, value)),
            }
        }
        buf.extend(container.added_iter().map(|(k, v)| (*k, v.clone())));
        AugmentedPropertyCursor::Slow(SlowCursor { buf, pos: 0, pool })
    }
}

impl<'p, I> Iterator for AugmentedPropertyCursor<'p, I>
where
    I: Iterator<Item = (PropertyKeyId, Value)>,
{
    type Item = (PropertyKeyId, Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            AugmentedPropertyCursor::Fast(i) => i.next(),
            AugmentedPropertyCursor::Slow(s) => s.next(),
        }
    }
}

/// `augmentNodeDegree` never needs a cursor at all — it's a single
/// integer computed from `NodeState::augment_degree` — so there is no
/// `AugmentedDegree` cursor type; the façade exposes the count directly.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_path_returned_when_diffset_is_empty() {
        let diff: DiffSet<NodeId> = DiffSet::new();
        let mut pool = CursorPool::new(4);
        let cursor = AugmentedCursor::augment(&diff, vec![NodeId(1), NodeId(2)].into_iter(), &mut pool);
        assert!(matches!(cursor, AugmentedCursor::Fast(_)));
    }

    #[test]
    fn slow_path_hides_removed_and_appends_added() {
        let mut diff: DiffSet<NodeId> = DiffSet::new();
        diff.remove(NodeId(2));
        diff.add(NodeId(10));
        let mut pool = CursorPool::new(4);
        let committed = vec![NodeId(1), NodeId(2), NodeId(3)];
        let out: Vec<NodeId> = AugmentedCursor::augment(&diff, committed.into_iter(), &mut pool).collect();
        assert_eq!(out, vec![NodeId(1), NodeId(3), NodeId(10)]);
    }

    #[test]
    fn buffer_returns_to_pool_on_drop() {
        let mut diff: DiffSet<NodeId> = DiffSet::new();
        diff.add(NodeId(1));
        let mut pool = CursorPool::new(4);
        {
            let cursor = AugmentedCursor::augment(&diff, std::iter::empty(), &mut pool);
            drop(cursor);
        }
        assert_eq!(pool.free.len(), 1);
    }

    #[test]
    fn property_cursor_prefers_changed_over_committed_value() {
        let mut container = super::super::property_container::PropertyContainerState::new();
        container.change_property(PropertyKeyId(1), Value::from("new"));
        container.add_property(PropertyKeyId(2), Value::from("added"));
        let mut pool = CursorPool::new(4);
        let committed = vec![(PropertyKeyId(1), Value::from("old"))];
        let out: Vec<_> =
            AugmentedPropertyCursor::augment(&container, committed.into_iter(), &mut pool).collect();
        assert_eq!(
            out,
            vec![
                (PropertyKeyId(1), Value::from("new")),
                (PropertyKeyId(2), Value::from("added")),
            ]
        );
    }
}
