//! # bst-dictionary
//!
//! An ordered key-value dictionary backed by an unbalanced binary search
//! tree.
//!
//! ## Overview
//!
//! - **[`BstDictionary`]**: insertion, lookup, deletion with in-order
//!   successor splicing, and traversal over any `Ord` key type
//! - **[`Dictionary`]**: the key-ordered dictionary contract it implements
//!
//! Traversal order is part of the contract: keys, values and iteration are
//! produced in pre-order, while the `Display` rendering is level order.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`BstDictionary`]
//! - `full`: Enable all features
//!
//! ## Logging
//!
//! Structural changes are reported at `trace` level through the [`log`]
//! facade. Nothing is printed unless the application installs a logger.
//!
//! ## Example
//!
//! ```rust
//! use bst_dictionary::prelude::*;
//!
//! let mut dictionary = BstDictionary::new();
//! dictionary.put(5, "c");
//! dictionary.put(3, "a");
//! dictionary.put(8, "h");
//!
//! assert_eq!(dictionary.to_string(), "{5: c, 3: a, 8: h}");
//! assert_eq!(dictionary.key_set(), vec![&5, &3, &8]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use bst_dictionary::prelude::*;
/// ```
pub mod prelude {
    pub use crate::dictionary::*;
}

pub mod dictionary;

pub use dictionary::{BstDictionary, Dictionary};
