//! Tree node and owning child links.

/// An owning child slot: either an exclusively owned subtree or nothing.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// Internal node structure for the binary search tree.
///
/// Every node is owned by exactly one slot, either the dictionary's root or a
/// parent's `left`/`right` link.
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    /// Creates a new node with no children.
    pub(crate) const fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    /// Returns `true` if this node has no children.
    #[inline]
    pub(crate) const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns `true` if this node has both a left and a right child.
    #[inline]
    pub(crate) const fn has_both_children(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// Consumes the node, returning its entry. Children are dropped.
    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}
