//! Key-ordered dictionaries.
//!
//! This module provides the [`Dictionary`] contract and its binary search
//! tree implementation:
//!
//! - [`BstDictionary`]: mutable ordered dictionary on an unbalanced BST
//!
//! # Examples
//!
//! ```rust
//! use bst_dictionary::dictionary::{BstDictionary, Dictionary};
//!
//! fn count_present<D: Dictionary<i32, &'static str>>(dictionary: &D, keys: &[i32]) -> usize {
//!     keys.iter().filter(|key| dictionary.contains_key(key)).count()
//! }
//!
//! let mut dictionary = BstDictionary::new();
//! dictionary.put(1, "one");
//! dictionary.put(2, "two");
//! assert_eq!(count_present(&dictionary, &[1, 2, 3]), 2);
//! ```

mod bst;
mod iter;
mod node;

pub use bst::BstDictionary;
pub use iter::{Entries, IntoIter, Keys, LevelOrder, Values};

/// A mutable map from unique keys to values.
///
/// Absence is never an error: lookups and removals of missing keys return
/// `None` (or `false`).
///
/// # Laws
///
/// ```text
/// { d.put(k, v); d.get(&k) }                == Some(&v)
/// { d.put(k, v1); d.put(k, v2) }            == Some(v1)
/// { let before = d.get(&k); d.remove(&k) }  == before.cloned()
/// { d.remove(&k); d.contains_key(&k) }      == false
/// d.size()                                  == d.key_set().len()
/// ```
pub trait Dictionary<K, V> {
    /// Returns the value stored for `key`.
    fn get(&self, key: &K) -> Option<&V>;

    /// Stores `value` for `key`, returning the value it replaced.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Removes `key`, returning its value if it was present.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Returns `true` if `key` is present.
    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns `true` if some entry holds a value equal to `value`.
    fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().contains(&value)
    }

    /// Returns the number of entries.
    fn size(&self) -> usize;

    /// Returns `true` if there are no entries.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns every key, in the implementation's traversal order.
    fn key_set(&self) -> Vec<&K>;

    /// Returns every value, in the same order as [`key_set`](Self::key_set).
    fn values(&self) -> Vec<&V>;
}
