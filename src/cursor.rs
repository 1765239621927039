//! Cursors over the entries of a [`BstMap`].
//!
//! A cursor is a pair of (map reference, optional node handle). The handle
//! being absent is the sentinel "one past the last entry" position: it is
//! not dereferenceable, but it is a valid starting point for a backward
//! step, which lands on the map's last entry. Erasing an entry invalidates
//! only handles to the node that is actually released; every other entry
//! keeps its position.

use std::fmt;
use std::ptr;

use compare::Compare;

use crate::arena::NodeId;
use crate::map::BstMap;

/// A detached, copyable handle to a position in a [`BstMap`]: either one of
/// its entries or the end position.
///
/// Obtained from [`Cursor::position`] or [`CursorMut::position`] and used
/// with [`BstMap::insert_hint`]. A position stays meaningful until the
/// entry it names is removed; positions taken from a different map name
/// whatever happens to live in that slot, so they must not be mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub(crate) node: Option<NodeId>,
}

/// A shared cursor over a [`BstMap`], created by [`BstMap::find`],
/// [`BstMap::lower_bound`], [`BstMap::upper_bound`], [`BstMap::cursor_front`]
/// or [`BstMap::cursor_end`].
///
/// # Examples
///
/// ```
/// let mut map = bstmap::BstMap::new();
/// for k in [2, 1, 3] {
///     map.insert(k, k * 10);
/// }
///
/// let mut cur = map.cursor_front();
/// assert_eq!(cur.key(), Some(&1));
/// cur.move_next();
/// cur.move_next();
/// assert_eq!(cur.entry(), Some((&3, &30)));
/// cur.move_next();
/// assert!(cur.is_end());
///
/// // The end position is a valid starting point for a backward walk.
/// cur.move_prev();
/// assert_eq!(cur.key(), Some(&3));
/// ```
pub struct Cursor<'a, K, V, C>
where
    C: Compare<K>,
{
    map: &'a BstMap<K, V, C>,
    node: Option<NodeId>,
}

impl<'a, K, V, C> Cursor<'a, K, V, C>
where
    C: Compare<K>,
{
    pub(crate) fn new(map: &'a BstMap<K, V, C>, node: Option<NodeId>) -> Self {
        Cursor { map, node }
    }

    /// Whether the cursor is at the end position.
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// The key at the current entry, or `None` at the end position.
    pub fn key(&self) -> Option<&'a K> {
        let map = self.map;
        self.node.map(move |id| &map.arena.get(id).key)
    }

    /// The value at the current entry, or `None` at the end position.
    pub fn value(&self) -> Option<&'a V> {
        let map = self.map;
        self.node.map(move |id| &map.arena.get(id).value)
    }

    /// The current entry, or `None` at the end position.
    pub fn entry(&self) -> Option<(&'a K, &'a V)> {
        let map = self.map;
        self.node.map(move |id| {
            let node = map.arena.get(id);
            (&node.key, &node.value)
        })
    }

    /// A detached handle to the current position.
    pub fn position(&self) -> Position {
        Position { node: self.node }
    }

    /// Steps to the in-order successor. Reaching past the last entry lands
    /// on the end position.
    ///
    /// # Panics
    ///
    /// When the cursor is already at the end position.
    pub fn move_next(&mut self) {
        let id = self.node.expect("cursor already at the end");
        self.node = self.map.arena.successor(id);
    }

    /// Steps to the in-order predecessor. From the end position this lands
    /// on the last entry of the map.
    ///
    /// # Panics
    ///
    /// When the cursor is already at the first entry, or when the map is
    /// empty.
    pub fn move_prev(&mut self) {
        let prev = match self.node {
            Some(id) => self.map.arena.predecessor(id),
            None => self.map.root.map(|root| self.map.arena.max(root)),
        };
        self.node = Some(prev.expect("cursor already at the first entry"));
    }
}

impl<'a, K, V, C> Clone for Cursor<'a, K, V, C>
where
    C: Compare<K>,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, K, V, C> Copy for Cursor<'a, K, V, C> where C: Compare<K> {}

/// Cursors are equal when they sit at the same position of the same map.
///
/// # Panics
///
/// Comparing cursors that belong to two different maps is a caller error
/// and panics rather than producing an arbitrary answer.
impl<'a, K, V, C> PartialEq for Cursor<'a, K, V, C>
where
    C: Compare<K>,
{
    fn eq(&self, other: &Self) -> bool {
        assert!(
            ptr::eq(self.map, other.map),
            "cannot compare cursors from different maps"
        );
        self.node == other.node
    }
}

impl<'a, K, V, C> Eq for Cursor<'a, K, V, C> where C: Compare<K> {}

impl<'a, K, V, C> fmt::Debug for Cursor<'a, K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
    C: Compare<K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entry() {
            Some(entry) => f.debug_tuple("Cursor").field(&entry).finish(),
            None => f.write_str("Cursor(end)"),
        }
    }
}

/// A cursor with exclusive access to its map, created by
/// [`BstMap::find_mut`], [`BstMap::lower_bound_mut`],
/// [`BstMap::upper_bound_mut`], [`BstMap::cursor_front_mut`] or
/// [`BstMap::cursor_end_mut`].
///
/// Besides traversal it can mutate the value at the current entry and
/// remove the entry itself.
///
/// # Examples
///
/// ```
/// let mut map = bstmap::BstMap::new();
/// for k in [2, 1, 3] {
///     map.insert(k, k * 10);
/// }
///
/// let mut cur = map.find_mut(&2);
/// *cur.value_mut().unwrap() += 1;
/// assert_eq!(cur.remove_current(), Some((2, 21)));
/// assert_eq!(cur.key(), Some(&3));
///
/// assert_eq!(map.len(), 2);
/// ```
pub struct CursorMut<'a, K, V, C>
where
    C: Compare<K>,
{
    map: &'a mut BstMap<K, V, C>,
    node: Option<NodeId>,
}

impl<'a, K, V, C> CursorMut<'a, K, V, C>
where
    C: Compare<K>,
{
    pub(crate) fn new(map: &'a mut BstMap<K, V, C>, node: Option<NodeId>) -> Self {
        CursorMut { map, node }
    }

    /// Whether the cursor is at the end position.
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// The key at the current entry, or `None` at the end position.
    pub fn key(&self) -> Option<&K> {
        self.node.map(move |id| &self.map.arena.get(id).key)
    }

    /// The value at the current entry, or `None` at the end position.
    pub fn value(&self) -> Option<&V> {
        self.node.map(move |id| &self.map.arena.get(id).value)
    }

    /// A mutable reference to the value at the current entry.
    pub fn value_mut(&mut self) -> Option<&mut V> {
        let map = &mut *self.map;
        match self.node {
            Some(id) => Some(&mut map.arena.get_mut(id).value),
            None => None,
        }
    }

    /// A detached handle to the current position.
    pub fn position(&self) -> Position {
        Position { node: self.node }
    }

    /// A read-only view of this cursor.
    pub fn as_cursor(&self) -> Cursor<'_, K, V, C> {
        Cursor::new(&*self.map, self.node)
    }

    /// Steps to the in-order successor; see [`Cursor::move_next`].
    ///
    /// # Panics
    ///
    /// When the cursor is already at the end position.
    pub fn move_next(&mut self) {
        let id = self.node.expect("cursor already at the end");
        self.node = self.map.arena.successor(id);
    }

    /// Steps to the in-order predecessor; see [`Cursor::move_prev`].
    ///
    /// # Panics
    ///
    /// When the cursor is already at the first entry, or when the map is
    /// empty.
    pub fn move_prev(&mut self) {
        let prev = match self.node {
            Some(id) => self.map.arena.predecessor(id),
            None => self.map.root.map(|root| self.map.arena.max(root)),
        };
        self.node = Some(prev.expect("cursor already at the first entry"));
    }

    /// Removes the current entry and returns it, leaving the cursor at the
    /// in-order successor (or the end position). Returns `None` when the
    /// cursor is at the end position.
    pub fn remove_current(&mut self) -> Option<(K, V)> {
        let id = self.node?;
        let node = self.map.arena.get(id);
        if node.left.is_some() && node.right.is_some() {
            // The successor's entry slides into this node's slot, so the
            // cursor already names the next entry.
            Some(self.map.remove_at(id))
        } else {
            self.node = self.map.arena.successor(id);
            Some(self.map.remove_at(id))
        }
    }
}

impl<'a, K, V, C> fmt::Debug for CursorMut<'a, K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
    C: Compare<K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node {
            Some(_) => f
                .debug_tuple("CursorMut")
                .field(&(self.key().unwrap(), self.value().unwrap()))
                .finish(),
            None => f.write_str("CursorMut(end)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::BstMap;

    #[test]
    fn forward_walk_visits_every_entry_in_order() {
        let mut map = BstMap::new();
        for k in [5, 3, 7, 2, 4, 6, 8] {
            map.insert(k, ());
        }

        let mut cur = map.cursor_front();
        let mut seen = Vec::new();
        while !cur.is_end() {
            seen.push(*cur.key().unwrap());
            cur.move_next();
        }
        assert_eq!(seen, [2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn backward_walk_from_the_end_is_the_exact_reverse() {
        let mut map = BstMap::new();
        for k in [5, 3, 7, 2, 4, 6, 8] {
            map.insert(k, ());
        }

        let mut cur = map.cursor_end();
        let mut seen = Vec::new();
        for _ in 0..map.len() {
            cur.move_prev();
            seen.push(*cur.key().unwrap());
        }
        assert_eq!(seen, [8, 7, 6, 5, 4, 3, 2]);
        assert!(cur == map.cursor_front());
    }

    #[test]
    fn end_cursor_is_not_dereferenceable() {
        let mut map = BstMap::new();
        map.insert(1, "a");

        let cur = map.cursor_end();
        assert!(cur.is_end());
        assert_eq!(cur.key(), None);
        assert_eq!(cur.value(), None);
        assert_eq!(cur.entry(), None);
    }

    #[test]
    #[should_panic(expected = "cursor already at the end")]
    fn advancing_past_the_end_panics() {
        let mut map = BstMap::new();
        map.insert(1, ());

        let mut cur = map.cursor_end();
        cur.move_next();
    }

    #[test]
    #[should_panic(expected = "cursor already at the first entry")]
    fn stepping_before_the_first_entry_panics() {
        let mut map = BstMap::new();
        map.insert(1, ());

        let mut cur = map.cursor_front();
        cur.move_prev();
    }

    #[test]
    #[should_panic(expected = "cannot compare cursors from different maps")]
    fn comparing_cursors_from_different_maps_panics() {
        let mut a = BstMap::new();
        a.insert(1, ());
        let mut b = BstMap::new();
        b.insert(1, ());

        let _ = a.cursor_front() == b.cursor_front();
    }

    #[test]
    fn cursor_survives_removal_of_other_entries() {
        let mut map = BstMap::new();
        for k in [5, 3, 7, 2, 4, 6, 8] {
            map.insert(k, ());
        }
        let four = map.find(&4).position();

        map.remove(&2);
        map.remove(&8);

        assert_eq!(map.find(&4).position(), four);
        let mut cur = map.find_mut(&4);
        assert_eq!(cur.remove_current(), Some((4, ())));
        assert_eq!(cur.key(), Some(&5));
    }

    #[test]
    fn remove_current_walks_the_whole_map() {
        let mut map = BstMap::new();
        for k in [5, 3, 7, 2, 4, 6, 8] {
            map.insert(k, k.to_string());
        }

        let mut cur = map.cursor_front_mut();
        let mut drained = Vec::new();
        while let Some((k, _)) = cur.remove_current() {
            drained.push(k);
        }
        assert_eq!(drained, [2, 3, 4, 5, 6, 7, 8]);
        assert!(map.is_empty());
        map.check_invariants();
    }

    #[test]
    fn value_mut_edits_in_place() {
        let mut map = BstMap::new();
        map.insert(1, 10);

        let mut cur = map.lower_bound_mut(&0);
        *cur.value_mut().unwrap() = 11;
        assert_eq!(map.get(&1), Some(&11));
    }

    #[test]
    fn mutable_end_cursor_reaches_the_maximum() {
        let mut map = BstMap::new();
        for k in [1, 2, 3] {
            map.insert(k, ());
        }

        let mut cur = map.cursor_end_mut();
        assert_eq!(cur.remove_current(), None);
        cur.move_prev();
        assert_eq!(cur.remove_current(), Some((3, ())));
        assert!(cur.is_end());
        assert_eq!(map.len(), 2);
    }
}
