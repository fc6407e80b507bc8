//! Singly-linked chains of slab slots.
//!
//! Nodes live in a shared `slab::Slab`; a [`Chain`] only tracks head, tail,
//! and length, with the links stored inside the nodes. The queue keeps two
//! chains over one slab: the live chain (nodes holding elements) and the free
//! chain (vacated nodes waiting for reuse). Moving a node between them rewires
//! `next` handles and never touches the slab itself.
//!
//! # Storage Invariant
//!
//! A chain must always be used with the slab its keys came from, and a key is
//! linked into at most one chain at a time. Both are the queue's
//! responsibility; the chain does not check them.

use slab::Slab;

/// Sentinel handle for "no node".
pub(crate) const NIL: usize = usize::MAX;

/// Arena holding every node the queue currently owns.
pub(crate) type Nodes<T> = Slab<Node<T>>;

/// A node: an optional element plus the link to the next node in whichever
/// chain currently owns it.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) element: Option<T>,
    pub(crate) next: usize,
}

impl<T> Node<T> {
    /// Creates an unlinked node holding `element`.
    #[inline]
    pub(crate) fn occupied(element: T) -> Self {
        Self {
            element: Some(element),
            next: NIL,
        }
    }

    /// Creates an unlinked, element-less node.
    #[inline]
    pub(crate) fn vacant() -> Self {
        Self {
            element: None,
            next: NIL,
        }
    }
}

/// Head, tail, and length of one singly-linked run of nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Chain {
    head: usize,
    tail: usize,
    len: usize,
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl Chain {
    /// Creates an empty chain.
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            head: NIL,
            tail: NIL,
            len: 0,
        }
    }

    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the head node's key, or `None` if empty.
    #[inline]
    pub(crate) fn head(&self) -> Option<usize> {
        if self.head == NIL {
            None
        } else {
            Some(self.head)
        }
    }

    /// Links `key` after the current tail.
    ///
    /// The node must exist in `nodes` and not be in any chain.
    #[inline]
    pub(crate) fn push_back<T>(&mut self, nodes: &mut Nodes<T>, key: usize) {
        nodes[key].next = NIL;

        if self.tail == NIL {
            self.head = key;
        } else {
            nodes[self.tail].next = key;
        }

        self.tail = key;
        self.len += 1;
    }

    /// Detaches the head node and returns its key.
    ///
    /// The detached node's `next` is cleared so it carries no stale link into
    /// the next chain. Returns `None` if the chain is empty.
    #[inline]
    pub(crate) fn pop_front<T>(&mut self, nodes: &mut Nodes<T>) -> Option<usize> {
        if self.head == NIL {
            return None;
        }

        let key = self.head;
        let node = &mut nodes[key];
        self.head = node.next;
        node.next = NIL;

        if self.head == NIL {
            self.tail = NIL;
        }

        self.len -= 1;
        Some(key)
    }

    /// Keeps the first `keep` nodes and severs the rest.
    ///
    /// The severed nodes are returned as their own chain, still in storage.
    /// Does nothing (and returns an empty chain) when `keep >= len`.
    /// Walks `keep - 1` links from the head.
    pub(crate) fn truncate<T>(&mut self, nodes: &mut Nodes<T>, keep: usize) -> Chain {
        if keep >= self.len {
            return Chain::new();
        }
        if keep == 0 {
            return core::mem::take(self);
        }

        let mut cut = self.head;
        for _ in 1..keep {
            cut = nodes[cut].next;
        }

        let rest = Chain {
            head: nodes[cut].next,
            tail: self.tail,
            len: self.len - keep,
        };

        nodes[cut].next = NIL;
        self.tail = cut;
        self.len = keep;
        rest
    }

    /// Removes every node of the chain from storage, dropping any elements
    /// they hold. Returns the number of nodes released.
    pub(crate) fn release_all<T>(&mut self, nodes: &mut Nodes<T>) -> usize {
        let released = self.len;
        let mut key = self.head;

        while key != NIL {
            key = nodes.remove(key).next;
        }

        *self = Chain::new();
        released
    }

    /// Returns an iterator over the keys from head to tail.
    #[inline]
    pub(crate) fn keys<'a, T>(&self, nodes: &'a Nodes<T>) -> Keys<'a, T> {
        Keys {
            nodes,
            current: self.head,
            remaining: self.len,
        }
    }
}

/// Iterator over the keys of a chain, head to tail.
pub(crate) struct Keys<'a, T> {
    nodes: &'a Nodes<T>,
    current: usize,
    remaining: usize,
}

impl<'a, T> Keys<'a, T> {
    /// Storage the keys index into.
    #[inline]
    pub(crate) fn nodes(&self) -> &'a Nodes<T> {
        self.nodes
    }
}

impl<T> Iterator for Keys<'_, T> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current == NIL {
            return None;
        }

        let key = self.current;
        self.current = self.nodes[key].next;
        self.remaining -= 1;
        Some(key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Keys<'_, T> {}
