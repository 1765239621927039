//! Iterators over the entries of a [`BstMap`].

use std::iter::FusedIterator;

use compare::{Compare, Natural};

use crate::arena::{Arena, NodeId};
use crate::map::BstMap;

/// A double-ended, exact-size iterator over the entries of a [`BstMap`] in
/// ascending key order, created by [`BstMap::iter`].
pub struct Iter<'a, K, V> {
    arena: &'a Arena<K, V>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(arena: &'a Arena<K, V>, root: Option<NodeId>, len: usize) -> Self {
        match root {
            Some(root) => Iter {
                arena,
                front: Some(arena.min(root)),
                back: Some(arena.max(root)),
                remaining: len,
            },
            None => Iter {
                arena,
                front: None,
                back: None,
                remaining: 0,
            },
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let id = self.front.expect("entry count out of sync with the range");
        self.remaining -= 1;
        if self.remaining == 0 {
            self.front = None;
            self.back = None;
        } else {
            self.front = arena.successor(id);
        }
        let node = arena.get(id);
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let id = self.back.expect("entry count out of sync with the range");
        self.remaining -= 1;
        if self.remaining == 0 {
            self.front = None;
            self.back = None;
        } else {
            self.back = arena.predecessor(id);
        }
        let node = arena.get(id);
        Some((&node.key, &node.value))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

/// Manual implementation so the iterator is cloneable regardless of whether
/// the key and value types are.
impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self {
        Iter {
            arena: self.arena,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

/// A double-ended iterator over a contiguous in-order window of a
/// [`BstMap`], created by [`BstMap::equal_range`].
pub struct Range<'a, K, V> {
    arena: &'a Arena<K, V>,
    front: Option<NodeId>,
    back: Option<NodeId>,
}

impl<'a, K, V> Range<'a, K, V> {
    /// Builds the window `[lower, upper)`, where `upper` being `None`
    /// means the window extends to the end of the map.
    pub(crate) fn new(
        arena: &'a Arena<K, V>,
        root: Option<NodeId>,
        lower: Option<NodeId>,
        upper: Option<NodeId>,
    ) -> Self {
        let (front, back) = if lower == upper {
            (None, None)
        } else {
            let back = match upper {
                Some(id) => arena.predecessor(id),
                None => root.map(|root| arena.max(root)),
            };
            match back {
                Some(back) => (lower, Some(back)),
                None => (None, None),
            }
        };
        Range { arena, front, back }
    }
}

impl<'a, K, V> Iterator for Range<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let arena = self.arena;
        let id = self.front?;
        if Some(id) == self.back {
            self.front = None;
            self.back = None;
        } else {
            self.front = arena.successor(id);
        }
        let node = arena.get(id);
        Some((&node.key, &node.value))
    }
}

impl<'a, K, V> DoubleEndedIterator for Range<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
        let arena = self.arena;
        let id = self.back?;
        if Some(id) == self.front {
            self.front = None;
            self.back = None;
        } else {
            self.back = arena.predecessor(id);
        }
        let node = arena.get(id);
        Some((&node.key, &node.value))
    }
}

impl<'a, K, V> FusedIterator for Range<'a, K, V> {}

impl<'a, K, V> Clone for Range<'a, K, V> {
    fn clone(&self) -> Self {
        Range {
            arena: self.arena,
            front: self.front,
            back: self.back,
        }
    }
}

/// A consuming iterator over the entries of a [`BstMap`] in ascending key
/// order, created by its [`IntoIterator`] implementation.
///
/// Each step removes the map's current minimum (or maximum, from the
/// back), so the tree stays consistent throughout and dropping the
/// iterator mid-way releases the rest through the map's own drop.
pub struct IntoIter<K, V, C = Natural<K>>
where
    C: Compare<K>,
{
    pub(crate) map: BstMap<K, V, C>,
}

impl<K, V, C> Iterator for IntoIter<K, V, C>
where
    C: Compare<K>,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        let root = self.map.root?;
        let min = self.map.arena.min(root);
        Some(self.map.remove_at(min))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.map.len(), Some(self.map.len()))
    }
}

impl<K, V, C> DoubleEndedIterator for IntoIter<K, V, C>
where
    C: Compare<K>,
{
    fn next_back(&mut self) -> Option<(K, V)> {
        let root = self.map.root?;
        let max = self.map.arena.max(root);
        Some(self.map.remove_at(max))
    }
}

impl<K, V, C> ExactSizeIterator for IntoIter<K, V, C> where C: Compare<K> {}

impl<K, V, C> FusedIterator for IntoIter<K, V, C> where C: Compare<K> {}
