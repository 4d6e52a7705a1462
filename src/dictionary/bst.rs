//! Mutable ordered dictionary based on an unbalanced binary search tree.
//!
//! This module provides [`BstDictionary`], a key-ordered map that owns its
//! nodes exclusively and restructures itself in place.
//!
//! # Overview
//!
//! - O(height) get, put, remove and `contains_key`
//! - O(n) `contains_value`
//! - O(1) len and `is_empty`
//!
//! No rebalancing is performed: inserting keys in sorted order yields a
//! list-shaped tree whose height equals its length. Every walk is iterative,
//! so such trees are slow but never exhaust the call stack.
//!
//! # Traversal Orders
//!
//! [`key_set`](BstDictionary::key_set), [`values`](BstDictionary::values) and
//! iteration are **pre-order** (node, left subtree, right subtree). The
//! `Display` rendering is **level order**. Neither is sorted order.
//!
//! ```rust
//! use bst_dictionary::BstDictionary;
//!
//! let mut dictionary = BstDictionary::new();
//! dictionary.put(5, "c");
//! dictionary.put(3, "a");
//! dictionary.put(8, "h");
//! dictionary.put(1, "z");
//! dictionary.put(4, "d");
//!
//! assert_eq!(dictionary.key_set(), vec![&5, &3, &1, &4, &8]);
//! assert_eq!(dictionary.to_string(), "{5: c, 3: a, 8: h, 1: z, 4: d}");
//! ```
//!
//! # Removal
//!
//! A node with at most one child is unlinked and its child (if any) takes
//! its place. A node with two children keeps its position: the entry of its
//! in-order successor (the minimum of the right subtree) is moved into it and
//! the successor's node is unlinked instead.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::trace;

use super::Dictionary;
use super::iter::{Entries, IntoIter, Keys, LevelOrder, Values};
use super::node::{Link, Node};

// =============================================================================
// BstDictionary Definition
// =============================================================================

/// A mutable ordered dictionary backed by an unbalanced binary search tree.
///
/// Keys must implement `Ord`. For every node, all keys in its left subtree
/// order strictly before its key and all keys in its right subtree strictly
/// after it; keys are unique.
///
/// # Time Complexity
///
/// | Operation        | Complexity |
/// |------------------|------------|
/// | `new`            | O(1)       |
/// | `get`            | O(h)       |
/// | `put`            | O(h)       |
/// | `remove`         | O(h)       |
/// | `contains_key`   | O(h)       |
/// | `contains_value` | O(n)       |
/// | `key_set`        | O(n)       |
/// | `len`            | O(1)       |
///
/// where `h` is the height of the tree (`n` in the worst case).
///
/// # Borrowed Keys and Values
///
/// Dropping releases nodes iteratively through a `Drop` impl, so keys and
/// values that borrow data must outlive the dictionary. Declare the borrowed
/// data before the dictionary:
///
/// ```rust
/// use bst_dictionary::BstDictionary;
///
/// let owner = String::from("x");
/// let mut dictionary = BstDictionary::new();
/// dictionary.put(owner.as_str(), 1);
/// assert_eq!(dictionary.get("x"), Some(&1));
/// ```
///
/// ```compile_fail
/// use bst_dictionary::BstDictionary;
///
/// let mut dictionary = BstDictionary::new();
/// let owner = String::from("x");
/// dictionary.put(owner.as_str(), 1);
/// ```
///
/// # Examples
///
/// ```rust
/// use bst_dictionary::BstDictionary;
///
/// let mut dictionary = BstDictionary::new();
/// assert_eq!(dictionary.put("b", 2), None);
/// assert_eq!(dictionary.put("a", 1), None);
/// assert_eq!(dictionary.put("b", 20), Some(2));
///
/// assert_eq!(dictionary.get("b"), Some(&20));
/// assert_eq!(dictionary.len(), 2);
/// assert_eq!(dictionary.remove("a"), Some(1));
/// assert!(!dictionary.contains_key("a"));
/// ```
pub struct BstDictionary<K, V> {
    /// Root node of the tree
    root: Link<K, V>,
    /// Number of reachable nodes
    size: usize,
}

impl<K, V> BstDictionary<K, V> {
    /// Creates a new empty dictionary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_dictionary::BstDictionary;
    ///
    /// let dictionary: BstDictionary<i32, String> = BstDictionary::new();
    /// assert!(dictionary.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Returns the number of entries in the dictionary.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the dictionary contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Removes every entry.
    ///
    /// Nodes are released one at a time, so clearing a degenerate tree does
    /// not recurse.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.size = 0;
    }

    /// Returns the number of nodes on the longest path from the root to a
    /// leaf, or 0 for an empty dictionary.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_dictionary::BstDictionary;
    ///
    /// let balanced: BstDictionary<i32, ()> = [2, 1, 3].into_iter().map(|key| (key, ())).collect();
    /// let degenerate: BstDictionary<i32, ()> = [1, 2, 3].into_iter().map(|key| (key, ())).collect();
    /// assert_eq!(balanced.height(), 2);
    /// assert_eq!(degenerate.height(), 3);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&Node<K, V>, usize)> =
            self.root.as_deref().map(|node| (node, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.left.as_deref().map(|child| (child, depth + 1)));
            pending.extend(node.right.as_deref().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Returns the keys in pre-order: node, then left subtree, then right
    /// subtree.
    ///
    /// This is **not** sorted order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_dictionary::BstDictionary;
    ///
    /// let mut dictionary = BstDictionary::new();
    /// dictionary.put(5, "c");
    /// dictionary.put(3, "a");
    /// dictionary.put(8, "h");
    /// assert_eq!(dictionary.key_set(), vec![&5, &3, &8]);
    /// ```
    #[must_use]
    pub fn key_set(&self) -> Vec<&K> {
        self.keys().collect()
    }

    /// Returns the values in the same pre-order as [`key_set`](Self::key_set).
    #[must_use]
    pub fn values(&self) -> Vec<&V> {
        self.values_iter().collect()
    }

    /// Returns a fresh pre-order iterator over the keys.
    ///
    /// Equivalent to iterating [`key_set`](Self::key_set).
    #[inline]
    pub fn iter(&self) -> Keys<'_, K, V> {
        self.keys()
    }

    /// Returns a pre-order iterator over the keys.
    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.root.as_deref(), self.size)
    }

    /// Returns a pre-order iterator over the values.
    #[inline]
    pub fn values_iter(&self) -> Values<'_, K, V> {
        Values::new(self.root.as_deref(), self.size)
    }

    /// Returns a pre-order iterator over the entries.
    #[inline]
    pub fn entries(&self) -> Entries<'_, K, V> {
        Entries::new(self.root.as_deref(), self.size)
    }

    /// Returns a level-order (breadth first) iterator over the entries.
    ///
    /// Within a level, left children come before right children. This is
    /// the order used by the `Display` rendering.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_dictionary::BstDictionary;
    ///
    /// let dictionary: BstDictionary<i32, char> =
    ///     [(5, 'c'), (3, 'a'), (1, 'z'), (8, 'h')].into_iter().collect();
    /// let keys: Vec<&i32> = dictionary.level_order().map(|(key, _)| key).collect();
    /// assert_eq!(keys, vec![&5, &3, &8, &1]);
    /// ```
    #[inline]
    pub fn level_order(&self) -> LevelOrder<'_, K, V> {
        LevelOrder::new(self.root.as_deref(), self.size)
    }

    /// Returns `true` if some entry holds a value equal to `value`.
    ///
    /// Values carry no ordering, so this materializes
    /// [`values`](Self::values) and scans it.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().contains(&value)
    }

    /// Returns the entry with the smallest key.
    #[must_use]
    pub fn min(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some((&node.key, &node.value))
    }

    /// Returns the entry with the largest key.
    #[must_use]
    pub fn max(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some((&node.key, &node.value))
    }

    /// Returns the slot holding the minimum of the subtree in `link`.
    ///
    /// If the subtree root has no left child it is its own minimum.
    fn min_link(mut link: &mut Link<K, V>) -> &mut Link<K, V> {
        loop {
            let has_left = link.as_ref().is_some_and(|node| node.left.is_some());
            match (has_left, link) {
                (true, Some(node)) => link = &mut node.left,
                (_, rest) => return rest,
            }
        }
    }

    /// Detaches the node in `link` and returns its entry.
    ///
    /// A node with at most one child is replaced by that child. A node with
    /// two children stays in place and takes over the entry of its in-order
    /// successor, whose node is detached instead.
    fn unlink(link: &mut Link<K, V>) -> Option<(K, V)> {
        let node = link.as_mut()?;
        if node.has_both_children() {
            trace!("splicing in-order successor into two-child node");
            let (successor_key, successor_value) = Self::unlink(Self::min_link(&mut node.right))?;
            let key = mem::replace(&mut node.key, successor_key);
            let value = mem::replace(&mut node.value, successor_value);
            return Some((key, value));
        }

        let mut node = link.take()?;
        if node.is_leaf() {
            trace!("removing leaf node");
        } else {
            trace!("promoting only child of removed node");
        }
        *link = node.left.take().or_else(|| node.right.take());
        Some(node.into_entry())
    }
}

impl<K: Ord, V> BstDictionary<K, V> {
    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the dictionary's key type, but the
    /// ordering on the borrowed form must match the ordering on the key type.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_dictionary::BstDictionary;
    ///
    /// let mut dictionary = BstDictionary::new();
    /// dictionary.put("hello".to_string(), 42);
    ///
    /// assert_eq!(dictionary.get("hello"), Some(&42));
    /// assert_eq!(dictionary.get("world"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// The key itself cannot be changed, so the order invariant is kept.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::find_link(&mut self.root, key)
            .as_deref_mut()
            .map(|node| &mut node.value)
    }

    /// Returns `true` if the dictionary contains a value for the key.
    ///
    /// # Complexity
    ///
    /// O(h)
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Inserts a key-value pair.
    ///
    /// If the key is already present its value is replaced in place and the
    /// previous value is returned; the size is unchanged. Otherwise a new
    /// leaf is attached where the search ended and `None` is returned.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_dictionary::BstDictionary;
    ///
    /// let mut dictionary = BstDictionary::new();
    /// assert_eq!(dictionary.put(1, "one"), None);
    /// assert_eq!(dictionary.put(1, "ONE"), Some("one"));
    /// assert_eq!(dictionary.len(), 1);
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let link = Self::find_link(&mut self.root, &key);
        match link {
            Some(node) => {
                trace!("overwriting value of existing key");
                Some(mem::replace(&mut node.value, value))
            }
            None => {
                *link = Some(Box::new(Node::new(key, value)));
                self.size += 1;
                trace!("attached new leaf, size is now {}", self.size);
                None
            }
        }
    }

    /// Removes a key, returning its value if it was present.
    ///
    /// Removing an absent key is not an error: `None` is returned and the
    /// dictionary is left untouched.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bst_dictionary::BstDictionary;
    ///
    /// let mut dictionary: BstDictionary<i32, char> =
    ///     [(5, 'e'), (3, 'c'), (8, 'h'), (7, 'g'), (9, 'i')].into_iter().collect();
    ///
    /// // 5 has two children; its successor 7 takes its place.
    /// assert_eq!(dictionary.remove(&5), Some('e'));
    /// assert_eq!(dictionary.key_set(), vec![&7, &3, &8, &9]);
    /// assert_eq!(dictionary.remove(&5), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (_, value) = Self::unlink(Self::find_link(&mut self.root, key))?;
        self.size -= 1;
        Some(value)
    }

    /// Walks down from `link` and returns the slot that holds `key`, or the
    /// empty slot where it would be attached.
    fn find_link<'a, Q>(mut link: &'a mut Link<K, V>, key: &Q) -> &'a mut Link<K, V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        loop {
            // Decide with a shared borrow, then move the cursor by value.
            let ordering = link.as_deref().map(|node| key.cmp(node.key.borrow()));
            match (ordering, link) {
                (Some(Ordering::Less), Some(node)) => link = &mut node.left,
                (Some(Ordering::Greater), Some(node)) => link = &mut node.right,
                (_, rest) => return rest,
            }
        }
    }
}

// =============================================================================
// Dictionary Implementation
// =============================================================================

impl<K: Ord, V> Dictionary<K, V> for BstDictionary<K, V> {
    fn get(&self, key: &K) -> Option<&V> {
        Self::get(self, key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        Self::put(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        Self::remove(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        Self::contains_key(self, key)
    }

    fn size(&self) -> usize {
        self.size
    }

    fn key_set(&self) -> Vec<&K> {
        Self::key_set(self)
    }

    fn values(&self) -> Vec<&V> {
        Self::values(self)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for BstDictionary<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for BstDictionary<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Cloning re-inserts the entries in pre-order, which rebuilds exactly the
/// same shape.
impl<K: Ord + Clone, V: Clone> Clone for BstDictionary<K, V> {
    fn clone(&self) -> Self {
        self.entries()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BstDictionary<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        dictionary.extend(iter);
        dictionary
    }
}

impl<K: Ord, V> Extend<(K, V)> for BstDictionary<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K, V> IntoIterator for BstDictionary<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Consumes the dictionary, yielding owned entries in pre-order.
    fn into_iter(mut self) -> Self::IntoIter {
        let length = mem::take(&mut self.size);
        IntoIter::new(self.root.take(), length)
    }
}

impl<'a, K, V> IntoIterator for &'a BstDictionary<K, V> {
    type Item = &'a K;
    type IntoIter = Keys<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys()
    }
}

impl<K: Ord, V: PartialEq> PartialEq for BstDictionary<K, V> {
    /// Two dictionaries are equal when they hold the same entries, whatever
    /// their shapes.
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self
                .entries()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: Ord, V: Eq> Eq for BstDictionary<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BstDictionary<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.entries()).finish()
    }
}

/// Renders `{key: value, ...}` in level order.
impl<K: fmt::Display, V: fmt::Display> fmt::Display for BstDictionary<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self.level_order() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(BstDictionary<i32, String>: Send, Sync, Default);
static_assertions::assert_not_impl_any!(BstDictionary<std::rc::Rc<i32>, i32>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for BstDictionary<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        // Pre-order, so that sequential re-insertion rebuilds the same shape.
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.entries() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct BstDictionaryVisitor<K, V> {
    marker: std::marker::PhantomData<fn() -> BstDictionary<K, V>>,
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for BstDictionaryVisitor<K, V>
where
    K: serde::Deserialize<'de> + Ord,
    V: serde::Deserialize<'de>,
{
    type Value = BstDictionary<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut dictionary = BstDictionary::new();
        while let Some((key, value)) = access.next_entry()? {
            dictionary.put(key, value);
        }
        Ok(dictionary)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for BstDictionary<K, V>
where
    K: serde::Deserialize<'de> + Ord,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(BstDictionaryVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
