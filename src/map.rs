//! An ordered map backed by a plain binary search tree.
//!
//! The tree is deliberately left unbalanced: there is no rotation logic and
//! no height or color bookkeeping, so adversarial insertion orders (e.g.
//! ascending keys) degrade it to a linked-list shape. In exchange the
//! engine is small and every mutation disturbs at most the node it targets,
//! which keeps cursors to every other entry valid across an erase.
//!
//! # Examples
//!
//! ```
//! use bstmap::BstMap;
//!
//! let mut map = BstMap::new();
//!
//! // Nothing in here yet.
//! assert_eq!(map.get(&1), None);
//!
//! let (value, inserted) = map.insert(1, "one");
//! assert!(inserted);
//! assert_eq!(*value, "one");
//!
//! // Inserting an existing key leaves the stored value untouched.
//! let (value, inserted) = map.insert(1, "uno");
//! assert!(!inserted);
//! assert_eq!(*value, "one");
//!
//! assert_eq!(map.remove(&1), Some((1, "one")));
//! assert_eq!(map.get(&1), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;
use std::ops::{Bound, RangeBounds};

use compare::{Compare, Natural};

use crate::arena::{Arena, Node, NodeId};
use crate::cursor::{Cursor, CursorMut, Position};
use crate::iter::{IntoIter, Iter, Range};

/// An ordered map from unique keys to values, sorted by the ordering policy
/// `C` and backed by an unbalanced binary search tree.
///
/// Point operations (`get`, `insert`, `remove`, bounds) run in time
/// proportional to the tree depth; whole-tree operations (`clone`, `clear`,
/// iteration) are linear and iterative, so even a chain-shaped tree cannot
/// overflow the call stack.
pub struct BstMap<K, V, C = Natural<K>>
where
    C: Compare<K>,
{
    pub(crate) arena: Arena<K, V>,
    pub(crate) root: Option<NodeId>,
    len: usize,
    cmp: C,
}

impl<K: Ord, V> BstMap<K, V> {
    /// Creates an empty map ordered by the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstmap::BstMap::new();
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.iter().next(), Some((&1, &"a")));
    /// ```
    pub fn new() -> Self {
        BstMap::with_cmp(compare::natural())
    }
}

impl<K, V, C> BstMap<K, V, C>
where
    C: Compare<K>,
{
    /// Creates an empty map ordered by the given policy.
    ///
    /// The policy must be a strict weak ordering; two keys are considered
    /// equal iff it returns [`Ordering::Equal`] for them. A policy that
    /// violates this yields an unspecified tree shape, not a crash.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstmap::Compare;
    ///
    /// let mut map = bstmap::BstMap::with_cmp(bstmap::natural().rev());
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    ///
    /// assert_eq!(map.iter().next(), Some((&2, &"b")));
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        BstMap {
            arena: Arena::new(),
            root: None,
            len: 0,
            cmp,
        }
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The largest number of entries the map can theoretically hold.
    pub fn max_len(&self) -> usize {
        isize::MAX as usize / mem::size_of::<Node<K, V>>()
    }

    /// Returns a reference to the map's ordering policy.
    pub fn cmp(&self) -> &C {
        &self.cmp
    }

    /// Returns the derived ordering over `(key, value)` pairs that compares
    /// keys only.
    pub fn pair_cmp(&self) -> ByKey<C>
    where
        C: Clone,
    {
        ByKey(self.cmp.clone())
    }

    /// Removes every entry, releasing each node exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstmap::BstMap::new();
    /// map.insert(1, "a");
    /// map.clear();
    ///
    /// assert!(map.is_empty());
    /// assert_eq!(map.len(), 0);
    /// assert!(map.cursor_front() == map.cursor_end());
    /// ```
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    fn find_node<Q: ?Sized>(&self, key: &Q) -> Option<NodeId>
    where
        C: Compare<Q, K>,
    {
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = self.arena.get(id);
            cur = match self.cmp.compare(key, &node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// Returns a reference to the value stored under `key`, or `None` if
    /// the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstmap::BstMap::new();
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&42), None);
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V>
    where
        C: Compare<Q, K>,
    {
        let id = self.find_node(key)?;
        Some(&self.arena.get(id).value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstmap::BstMap::new();
    /// map.insert(1, "a");
    ///
    /// *map.get_mut(&1).unwrap() = "b";
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V>
    where
        C: Compare<Q, K>,
    {
        let id = self.find_node(key)?;
        Some(&mut self.arena.get_mut(id).value)
    }

    /// Checks whether the map contains the given key.
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool
    where
        C: Compare<Q, K>,
    {
        self.find_node(key).is_some()
    }

    /// Number of entries stored under `key`: 0 or 1, since keys are unique.
    pub fn count<Q: ?Sized>(&self, key: &Q) -> usize
    where
        C: Compare<Q, K>,
    {
        if self.contains_key(key) {
            1
        } else {
            0
        }
    }

    /// Returns a cursor positioned at the entry with the given key, or at
    /// the end position if the map does not contain the key.
    pub fn find<Q: ?Sized>(&self, key: &Q) -> Cursor<'_, K, V, C>
    where
        C: Compare<Q, K>,
    {
        Cursor::new(self, self.find_node(key))
    }

    /// Mutable form of [`find`](Self::find).
    pub fn find_mut<Q: ?Sized>(&mut self, key: &Q) -> CursorMut<'_, K, V, C>
    where
        C: Compare<Q, K>,
    {
        let node = self.find_node(key);
        CursorMut::new(self, node)
    }

    /// Inserts `key`/`value` if the map has no entry for `key`.
    ///
    /// Returns a reference to the value now stored under the key together
    /// with a flag telling whether an insertion happened. When the key was
    /// already present the supplied `value` is dropped and the stored value
    /// is left untouched; this is never an overwrite.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstmap::BstMap::new();
    ///
    /// let (value, inserted) = map.insert(1, "a");
    /// assert!(inserted);
    /// assert_eq!(*value, "a");
    ///
    /// let (value, inserted) = map.insert(1, "z");
    /// assert!(!inserted);
    /// assert_eq!(*value, "a");
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (&mut V, bool) {
        let (id, inserted) = self.insert_node(key, value);
        (&mut self.arena.get_mut(id).value, inserted)
    }

    fn insert_node(&mut self, key: K, value: V) -> (NodeId, bool) {
        let mut parent = None;
        let mut as_left = false;
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = self.arena.get(id);
            match self.cmp.compare(&key, &node.key) {
                Ordering::Less => {
                    parent = Some(id);
                    as_left = true;
                    cur = node.left;
                }
                Ordering::Greater => {
                    parent = Some(id);
                    as_left = false;
                    cur = node.right;
                }
                Ordering::Equal => return (id, false),
            }
        }
        (self.attach(parent, as_left, key, value), true)
    }

    /// Links a brand-new leaf under `parent`. The node is fully constructed
    /// in the arena before any existing link is rewired, so an allocation
    /// failure cannot leave a half-linked node behind.
    fn attach(&mut self, parent: Option<NodeId>, as_left: bool, key: K, value: V) -> NodeId {
        let new = self.arena.alloc(Node {
            key,
            value,
            parent,
            left: None,
            right: None,
        });
        match parent {
            Some(p) => {
                let p_node = self.arena.get_mut(p);
                if as_left {
                    debug_assert!(p_node.left.is_none());
                    p_node.left = Some(new);
                } else {
                    debug_assert!(p_node.right.is_none());
                    p_node.right = Some(new);
                }
            }
            None => self.root = Some(new),
        }
        self.len += 1;
        new
    }

    /// Like [`insert`](Self::insert), but takes a position hint, typically
    /// obtained from a cursor via [`Cursor::position`].
    ///
    /// When the key belongs immediately before the hinted entry (or after
    /// the maximum, for the end position) the new node is attached there
    /// without a descent from the root. A stale or unhelpful hint falls
    /// back to a plain insertion; the resulting map is identical either
    /// way.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstmap::BstMap::new();
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let hint = map.find(&3).position();
    /// let (_, inserted) = map.insert_hint(hint, 2, "b");
    /// assert!(inserted);
    ///
    /// let keys: Vec<i32> = map.iter().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, [1, 2, 3]);
    /// ```
    pub fn insert_hint(&mut self, hint: Position, key: K, value: V) -> (&mut V, bool) {
        let (id, inserted) = self.insert_node_hint(hint, key, value);
        (&mut self.arena.get_mut(id).value, inserted)
    }

    fn insert_node_hint(&mut self, hint: Position, key: K, value: V) -> (NodeId, bool) {
        match hint.node {
            // The end position hints an append after the maximum.
            None => match self.root {
                None => (self.attach(None, false, key, value), true),
                Some(root) => {
                    let max = self.arena.max(root);
                    if self.cmp.compares_lt(&self.arena.get(max).key, &key) {
                        (self.attach(Some(max), false, key, value), true)
                    } else {
                        self.insert_node(key, value)
                    }
                }
            },
            Some(h) if self.arena.contains(h) => {
                match self.cmp.compare(&key, &self.arena.get(h).key) {
                    Ordering::Equal => (h, false),
                    Ordering::Less => {
                        let pred = self.arena.predecessor(h);
                        let fits = match pred {
                            None => true,
                            Some(p) => self.cmp.compares_lt(&self.arena.get(p).key, &key),
                        };
                        if fits {
                            (self.attach_before(h, pred, key, value), true)
                        } else {
                            self.insert_node(key, value)
                        }
                    }
                    Ordering::Greater => self.insert_node(key, value),
                }
            }
            // Stale handle: ignore it rather than trust a recycled slot.
            Some(_) => self.insert_node(key, value),
        }
    }

    /// Attaches a new leaf immediately before `h` in in-order sequence,
    /// given `pred`, the in-order predecessor of `h`.
    fn attach_before(&mut self, h: NodeId, pred: Option<NodeId>, key: K, value: V) -> NodeId {
        if self.arena.get(h).left.is_none() {
            self.attach(Some(h), true, key, value)
        } else {
            // The predecessor is the maximum of h's left subtree, so it has
            // no right child.
            let p = pred.expect("a node with a left subtree has a predecessor");
            self.attach(Some(p), false, key, value)
        }
    }

    fn lower_bound_node<Q: ?Sized>(&self, key: &Q) -> Option<NodeId>
    where
        C: Compare<Q, K>,
    {
        let mut best = None;
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = self.arena.get(id);
            if self.cmp.compares_gt(key, &node.key) {
                cur = node.right;
            } else {
                best = Some(id);
                cur = node.left;
            }
        }
        best
    }

    fn upper_bound_node<Q: ?Sized>(&self, key: &Q) -> Option<NodeId>
    where
        C: Compare<Q, K>,
    {
        let mut best = None;
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = self.arena.get(id);
            if self.cmp.compares_lt(key, &node.key) {
                best = Some(id);
                cur = node.left;
            } else {
                cur = node.right;
            }
        }
        best
    }

    /// Returns a cursor at the first entry whose key is not less than
    /// `key`, or at the end position if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstmap::BstMap::new();
    /// for k in [2, 3, 5, 6, 7, 8] {
    ///     map.insert(k, ());
    /// }
    ///
    /// assert_eq!(map.lower_bound(&4).key(), Some(&5));
    /// assert_eq!(map.lower_bound(&5).key(), Some(&5));
    /// assert!(map.lower_bound(&9).is_end());
    /// ```
    pub fn lower_bound<Q: ?Sized>(&self, key: &Q) -> Cursor<'_, K, V, C>
    where
        C: Compare<Q, K>,
    {
        Cursor::new(self, self.lower_bound_node(key))
    }

    /// Returns a cursor at the first entry whose key is greater than
    /// `key`, or at the end position if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstmap::BstMap::new();
    /// for k in [2, 3, 5, 6, 7, 8] {
    ///     map.insert(k, ());
    /// }
    ///
    /// assert_eq!(map.upper_bound(&4).key(), Some(&5));
    /// assert_eq!(map.upper_bound(&5).key(), Some(&6));
    /// ```
    pub fn upper_bound<Q: ?Sized>(&self, key: &Q) -> Cursor<'_, K, V, C>
    where
        C: Compare<Q, K>,
    {
        Cursor::new(self, self.upper_bound_node(key))
    }

    /// Mutable form of [`lower_bound`](Self::lower_bound).
    pub fn lower_bound_mut<Q: ?Sized>(&mut self, key: &Q) -> CursorMut<'_, K, V, C>
    where
        C: Compare<Q, K>,
    {
        let node = self.lower_bound_node(key);
        CursorMut::new(self, node)
    }

    /// Mutable form of [`upper_bound`](Self::upper_bound).
    pub fn upper_bound_mut<Q: ?Sized>(&mut self, key: &Q) -> CursorMut<'_, K, V, C>
    where
        C: Compare<Q, K>,
    {
        let node = self.upper_bound_node(key);
        CursorMut::new(self, node)
    }

    /// The in-order window `[lower_bound(key), upper_bound(key))`. Since
    /// keys are unique it contains at most one entry.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstmap::BstMap::new();
    /// for k in [2, 3, 5, 6, 7, 8] {
    ///     map.insert(k, ());
    /// }
    ///
    /// assert_eq!(map.equal_range(&4).count(), 0);
    /// assert!(map.equal_range(&5).map(|(k, _)| *k).eq([5]));
    /// ```
    pub fn equal_range<Q: ?Sized>(&self, key: &Q) -> Range<'_, K, V>
    where
        C: Compare<Q, K>,
    {
        Range::new(
            &self.arena,
            self.root,
            self.lower_bound_node(key),
            self.upper_bound_node(key),
        )
    }

    /// Removes the entry stored under `key` and returns it, or `None` if
    /// the map does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstmap::BstMap::new();
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.remove(&1), Some((1, "a")));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)>
    where
        C: Compare<Q, K>,
    {
        let id = self.find_node(key)?;
        Some(self.remove_at(id))
    }

    /// Removes the node `id` and returns its entry. Three cases, decided by
    /// child count: a leaf is detached, a node with one child has that
    /// child spliced into its place, and an interior node with two children
    /// swaps entries with its in-order successor so that the successor node
    /// (which cannot have a left child) is the one spliced out. No node
    /// other than the one released ever changes identity.
    pub(crate) fn remove_at(&mut self, id: NodeId) -> (K, V) {
        let (left, right) = {
            let node = self.arena.get(id);
            (node.left, node.right)
        };
        let victim = match (left, right) {
            (Some(_), Some(right)) => {
                let succ = self.arena.min(right);
                // After the swap the removed entry sits in the successor's
                // slot and the successor's entry sits here, reachable at
                // this node's unchanged position.
                self.arena.swap_entry(id, succ);
                succ
            }
            _ => id,
        };
        self.splice(victim);
        self.len -= 1;
        let node = self.arena.free(victim);
        (node.key, node.value)
    }

    /// Unlinks a node with at most one child, attaching that child (if any)
    /// to the node's parent in its place.
    fn splice(&mut self, id: NodeId) {
        let (parent, child) = {
            let node = self.arena.get(id);
            debug_assert!(node.left.is_none() || node.right.is_none());
            (node.parent, node.left.or(node.right))
        };
        if let Some(c) = child {
            self.arena.get_mut(c).parent = parent;
        }
        match parent {
            Some(p) => {
                let p_node = self.arena.get_mut(p);
                if p_node.left == Some(id) {
                    p_node.left = child;
                } else {
                    p_node.right = child;
                }
            }
            None => self.root = child,
        }
    }

    /// Removes every entry whose key falls within `range` and returns how
    /// many were removed.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstmap::BstMap::new();
    /// for k in 0..10 {
    ///     map.insert(k, ());
    /// }
    ///
    /// assert_eq!(map.remove_range(3..7), 4);
    /// let keys: Vec<i32> = map.iter().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, [0, 1, 2, 7, 8, 9]);
    /// ```
    pub fn remove_range<Q: ?Sized, R>(&mut self, range: R) -> usize
    where
        C: Compare<Q, K>,
        R: RangeBounds<Q>,
    {
        let mut removed = 0;
        loop {
            // Erasing can move a successor entry into another node's slot,
            // so the next position is re-derived from the keys each time
            // instead of being carried across the removal.
            let first = match range.start_bound() {
                Bound::Included(q) => self.lower_bound_node(q),
                Bound::Excluded(q) => self.upper_bound_node(q),
                Bound::Unbounded => self.root.map(|r| self.arena.min(r)),
            };
            let id = match first {
                Some(id) => id,
                None => break,
            };
            let past_end = match range.end_bound() {
                Bound::Included(q) => self.cmp.compares_lt(q, &self.arena.get(id).key),
                Bound::Excluded(q) => self.cmp.compares_le(q, &self.arena.get(id).key),
                Bound::Unbounded => false,
            };
            if past_end {
                break;
            }
            self.remove_at(id);
            removed += 1;
        }
        removed
    }

    /// Iterates over the entries in ascending key order. The iterator is
    /// double-ended; `iter().rev()` walks in descending order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstmap::BstMap::new();
    /// for k in [5, 3, 7] {
    ///     map.insert(k, k * 10);
    /// }
    ///
    /// let keys: Vec<i32> = map.iter().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, [3, 5, 7]);
    ///
    /// let reversed: Vec<i32> = map.iter().rev().map(|(k, _)| *k).collect();
    /// assert_eq!(reversed, [7, 5, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.arena, self.root, self.len)
    }

    /// Returns a cursor at the first entry, or at the end position when the
    /// map is empty.
    pub fn cursor_front(&self) -> Cursor<'_, K, V, C> {
        Cursor::new(self, self.root.map(|r| self.arena.min(r)))
    }

    /// Returns a cursor at the end position. Moving it backwards yields the
    /// last entry.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = bstmap::BstMap::new();
    /// for k in [2, 1, 3] {
    ///     map.insert(k, ());
    /// }
    ///
    /// let mut cur = map.cursor_end();
    /// assert!(cur.is_end());
    /// cur.move_prev();
    /// assert_eq!(cur.key(), Some(&3));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, K, V, C> {
        Cursor::new(self, None)
    }

    /// Mutable form of [`cursor_front`](Self::cursor_front).
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, K, V, C> {
        let node = self.root.map(|r| self.arena.min(r));
        CursorMut::new(self, node)
    }

    /// Mutable form of [`cursor_end`](Self::cursor_end).
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, K, V, C> {
        CursorMut::new(self, None)
    }

    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        let mut stack = Vec::new();
        if let Some(root) = self.root {
            assert!(self.arena.get(root).parent.is_none());
            stack.push(root);
        }
        let mut count = 0;
        while let Some(id) = stack.pop() {
            count += 1;
            let node = self.arena.get(id);
            if let Some(left) = node.left {
                assert_eq!(self.arena.get(left).parent, Some(id));
                stack.push(left);
            }
            if let Some(right) = node.right {
                assert_eq!(self.arena.get(right).parent, Some(id));
                stack.push(right);
            }
        }
        assert_eq!(count, self.len);
        assert_eq!(self.len == 0, self.root.is_none());

        // Strictly ascending in-order sequence is equivalent to the search
        // property holding at every node.
        let mut prev: Option<&K> = None;
        for (key, _) in self.iter() {
            if let Some(prev) = prev {
                assert!(self.cmp.compares_lt(prev, key));
            }
            prev = Some(key);
        }
    }
}

/// Deep copy: every entry is duplicated and the link structure mirrors the
/// source exactly. Mutating the copy never affects the original.
impl<K, V, C> Clone for BstMap<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Compare<K> + Clone,
{
    fn clone(&self) -> Self {
        // Links are indices, so cloning the arena slot-for-slot reproduces
        // the whole structure without walking the tree.
        BstMap {
            arena: self.arena.clone(),
            root: self.root,
            len: self.len,
            cmp: self.cmp.clone(),
        }
    }
}

impl<K, V, C> Default for BstMap<K, V, C>
where
    C: Compare<K> + Default,
{
    fn default() -> Self {
        BstMap::with_cmp(C::default())
    }
}

impl<K, V, C> fmt::Debug for BstMap<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
    C: Compare<K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Each element is inserted with the usual insert-if-absent semantics: a
/// key already in the map keeps its stored value.
impl<K, V, C> Extend<(K, V)> for BstMap<K, V, C>
where
    C: Compare<K>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, C> FromIterator<(K, V)> for BstMap<K, V, C>
where
    C: Compare<K> + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = BstMap::default();
        map.extend(iter);
        map
    }
}

impl<'a, K, V, C> IntoIterator for &'a BstMap<K, V, C>
where
    C: Compare<K>,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V, C> IntoIterator for BstMap<K, V, C>
where
    C: Compare<K>,
{
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, C>;

    fn into_iter(self) -> IntoIter<K, V, C> {
        IntoIter { map: self }
    }
}

/// Ordering over `(key, value)` pairs that compares keys only, obtained
/// from [`BstMap::pair_cmp`].
#[derive(Clone, Copy, Debug)]
pub struct ByKey<C>(C);

impl<K, V, C> Compare<(K, V)> for ByKey<C>
where
    C: Compare<K>,
{
    fn compare(&self, l: &(K, V), r: &(K, V)) -> Ordering {
        self.0.compare(&l.0, &r.0)
    }
}
