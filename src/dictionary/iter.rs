//! Iterators over a [`BstDictionary`](super::BstDictionary).
//!
//! Two traversal orders are exposed and they are intentionally different:
//!
//! - pre-order (node, left subtree, right subtree): [`Keys`], [`Values`],
//!   [`Entries`] and [`IntoIter`];
//! - level order (breadth first, left sibling before right): [`LevelOrder`],
//!   which also drives the `Display` rendering.
//!
//! All traversals keep their pending nodes in an explicit buffer, so the
//! depth of a degenerate tree never turns into call-stack depth.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use smallvec::SmallVec;

use super::node::Node;

/// Number of pending subtrees kept inline before the traversal stack spills
/// to the heap.
const INLINE_DEPTH: usize = 16;

// =============================================================================
// Pre-order Core
// =============================================================================

/// Borrowing pre-order walk shared by the public iterators.
struct PreOrder<'a, K, V> {
    stack: SmallVec<[&'a Node<K, V>; INLINE_DEPTH]>,
    remaining: usize,
}

impl<'a, K, V> PreOrder<'a, K, V> {
    fn new(root: Option<&'a Node<K, V>>, length: usize) -> Self {
        let mut stack = SmallVec::new();
        stack.extend(root);
        Self {
            stack,
            remaining: length,
        }
    }
}

impl<'a, K, V> Iterator for PreOrder<'a, K, V> {
    type Item = &'a Node<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right is pushed first so the left subtree is visited first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

// =============================================================================
// Keys / Values / Entries
// =============================================================================

/// A pre-order iterator over the keys of a dictionary.
///
/// Yields exactly the sequence returned by
/// [`key_set`](super::BstDictionary::key_set). A fresh traversal is produced
/// by every call to [`iter`](super::BstDictionary::iter).
pub struct Keys<'a, K, V> {
    inner: PreOrder<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(crate) fn new(root: Option<&'a Node<K, V>>, length: usize) -> Self {
        Self {
            inner: PreOrder::new(root, length),
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|node| &node.key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// A pre-order iterator over the values of a dictionary.
pub struct Values<'a, K, V> {
    inner: PreOrder<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
    pub(crate) fn new(root: Option<&'a Node<K, V>>, length: usize) -> Self {
        Self {
            inner: PreOrder::new(root, length),
        }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|node| &node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}

/// A pre-order iterator over the entries of a dictionary.
pub struct Entries<'a, K, V> {
    inner: PreOrder<'a, K, V>,
}

impl<'a, K, V> Entries<'a, K, V> {
    pub(crate) fn new(root: Option<&'a Node<K, V>>, length: usize) -> Self {
        Self {
            inner: PreOrder::new(root, length),
        }
    }
}

impl<'a, K, V> Iterator for Entries<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|node| (&node.key, &node.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Entries<'_, K, V> {}
impl<K, V> FusedIterator for Entries<'_, K, V> {}

// =============================================================================
// Level Order
// =============================================================================

/// A breadth-first iterator over the entries of a dictionary.
///
/// Each visited node enqueues its left child, then its right child, at the
/// tail of a FIFO queue; the next node is taken from the head.
pub struct LevelOrder<'a, K, V> {
    queue: VecDeque<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> LevelOrder<'a, K, V> {
    pub(crate) fn new(root: Option<&'a Node<K, V>>, length: usize) -> Self {
        let mut queue = VecDeque::new();
        queue.extend(root);
        Self {
            queue,
            remaining: length,
        }
    }
}

impl<'a, K, V> Iterator for LevelOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left.as_deref());
        self.queue.extend(node.right.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for LevelOrder<'_, K, V> {}
impl<K, V> FusedIterator for LevelOrder<'_, K, V> {}

// =============================================================================
// Owning Iterator
// =============================================================================

/// An owning pre-order iterator over the entries of a dictionary.
///
/// Nodes are detached one at a time as the iterator advances, so dropping a
/// partially consumed iterator releases the rest without recursion.
pub struct IntoIter<K, V> {
    stack: Vec<Box<Node<K, V>>>,
    remaining: usize,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(root: Option<Box<Node<K, V>>>, length: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: length,
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.stack.extend(node.right.take());
        self.stack.extend(node.left.take());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.into_entry())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> Drop for IntoIter<K, V> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}
    }
}
