//! An ordered map backed by a plain (non-self-balancing) binary search
//! tree, with a pluggable ordering policy.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree (BST) stores each entry in a `Node` with up to two
//! children and maintains two invariants:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have keys that
//!    order before its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have keys that
//!    order after its own key.
//!
//! Together these make point lookups `O(height)` and give sorted iteration
//! for free by visiting the left subtree, then the node, then the right
//! subtree. This crate deliberately does **not** rebalance: the height is
//! `O(lg N)` only for friendly insertion orders, and an adversarial order
//! (ascending keys, say) degrades the tree to a list. What the plain tree
//! buys in exchange is a very small engine in which an erase disturbs no
//! node other than the one removed, so positions into every other entry
//! stay valid.
//!
//! Keys are unique: inserting a key that is already present never
//! overwrites the stored value.
//!
//! ## Examples
//!
//! ```
//! use bstmap::BstMap;
//!
//! let mut map = BstMap::new();
//! for (k, v) in [(5, "five"), (3, "three"), (7, "seven")] {
//!     map.insert(k, v);
//! }
//!
//! // Sorted, bidirectional iteration.
//! let keys: Vec<i32> = map.iter().map(|(k, _)| *k).collect();
//! assert_eq!(keys, [3, 5, 7]);
//! let keys: Vec<i32> = map.iter().rev().map(|(k, _)| *k).collect();
//! assert_eq!(keys, [7, 5, 3]);
//!
//! // Bound queries return cursors that can walk in both directions,
//! // including backwards from the end position.
//! let mut cur = map.lower_bound(&4);
//! assert_eq!(cur.key(), Some(&5));
//! cur.move_prev();
//! assert_eq!(cur.key(), Some(&3));
//!
//! assert_eq!(map.remove(&5), Some((5, "five")));
//! assert_eq!(map.get(&5), None);
//! ```

#![deny(missing_docs)]

mod arena;
mod cursor;
mod iter;
mod map;
#[cfg(test)]
mod test;

pub use cursor::{Cursor, CursorMut, Position};
pub use iter::{IntoIter, Iter, Range};
pub use map::{BstMap, ByKey};

pub use compare::{natural, Compare, Natural};
