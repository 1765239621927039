//! Slab-style storage for tree nodes.
//!
//! Nodes live in a `Vec` of slots and refer to each other through
//! [`NodeId`] indices instead of pointers. Erased slots go onto a free list
//! and are recycled by later insertions; a live slot never moves, so every
//! node that isn't erased keeps its identity for as long as it is in the
//! tree. The link-walking primitives (subtree min/max, in-order successor
//! and predecessor) live here because they only read the link structure and
//! never consult the ordering policy.

use std::mem;

/// Handle to a slot in the arena.
///
/// A `NodeId` is only meaningful while its node is live; once the node is
/// freed the slot may be reused for a different entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

/// One key/value entry plus its link structure. The parent link is a
/// non-owning back-reference used only for traversal and re-linking.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub key: K,
    pub value: V,
    pub parent: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

#[derive(Clone)]
enum Slot<K, V> {
    Occupied(Node<K, V>),
    /// Freed slot, holding the next entry of the free list.
    Vacant(Option<NodeId>),
}

#[derive(Clone)]
pub(crate) struct Arena<K, V> {
    slots: Vec<Slot<K, V>>,
    free: Option<NodeId>,
}

impl<K, V> Arena<K, V> {
    pub fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: None,
        }
    }

    /// Stores a fully constructed node, reusing a freed slot when one is
    /// available. No links on other nodes are touched.
    pub fn alloc(&mut self, node: Node<K, V>) -> NodeId {
        match self.free {
            Some(id) => {
                self.free = match self.slots[id.0] {
                    Slot::Vacant(next) => next,
                    Slot::Occupied(_) => panic!("free list points at a live node"),
                };
                self.slots[id.0] = Slot::Occupied(node);
                id
            }
            None => {
                let id = NodeId(self.slots.len());
                self.slots.push(Slot::Occupied(node));
                id
            }
        }
    }

    /// Releases a node and returns its contents. The slot goes onto the
    /// free list; the caller is responsible for having unlinked the node.
    pub fn free(&mut self, id: NodeId) -> Node<K, V> {
        let slot = mem::replace(&mut self.slots[id.0], Slot::Vacant(self.free));
        self.free = Some(id);
        match slot {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => panic!("double free of node slot"),
        }
    }

    pub fn get(&self, id: NodeId) -> &Node<K, V> {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => panic!("stale node handle"),
        }
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant(_) => panic!("stale node handle"),
        }
    }

    /// Whether `id` names a live node. Used to reject stale handles handed
    /// back in from outside instead of panicking on them.
    pub fn contains(&self, id: NodeId) -> bool {
        matches!(self.slots.get(id.0), Some(Slot::Occupied(_)))
    }

    /// Drops every node at once. `Vec::clear` walks the slots iteratively,
    /// so a degenerate chain-shaped tree cannot overflow the call stack.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
    }

    /// Swaps the entries (key and value) of two live nodes, leaving both
    /// link structures untouched.
    pub fn swap_entry(&mut self, a: NodeId, b: NodeId) {
        assert_ne!(a.0, b.0, "cannot swap a node entry with itself");
        let (lo, hi) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        let (head, tail) = self.slots.split_at_mut(hi);
        match (&mut head[lo], &mut tail[0]) {
            (Slot::Occupied(x), Slot::Occupied(y)) => {
                mem::swap(&mut x.key, &mut y.key);
                mem::swap(&mut x.value, &mut y.value);
            }
            _ => panic!("swap through a stale node handle"),
        }
    }

    /// Leftmost node of the subtree rooted at `id`.
    pub fn min(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.get(id).left {
            id = left;
        }
        id
    }

    /// Rightmost node of the subtree rooted at `id`.
    pub fn max(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.get(id).right {
            id = right;
        }
        id
    }

    /// In-order successor: the minimum of the right subtree when there is
    /// one, otherwise the first ancestor reached from a left child. `None`
    /// means `id` is the maximum of the whole tree.
    pub fn successor(&self, id: NodeId) -> Option<NodeId> {
        let node = self.get(id);
        if let Some(right) = node.right {
            return Some(self.min(right));
        }
        let mut child = id;
        let mut parent = node.parent;
        while let Some(p) = parent {
            if self.get(p).left == Some(child) {
                return Some(p);
            }
            child = p;
            parent = self.get(p).parent;
        }
        None
    }

    /// In-order predecessor, symmetric to [`successor`](Self::successor).
    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        let node = self.get(id);
        if let Some(left) = node.left {
            return Some(self.max(left));
        }
        let mut child = id;
        let mut parent = node.parent;
        while let Some(p) = parent {
            if self.get(p).right == Some(child) {
                return Some(p);
            }
            child = p;
            parent = self.get(p).parent;
        }
        None
    }
}
