//! # rbmap
//!
//! An ordered key-value map backed by a red-black tree, with a bidirectional
//! cursor for ordered traversal.
//!
//! ## Overview
//!
//! - **Tree**: [`RedBlackTree`](tree::RedBlackTree) stores entries in a
//!   self-balancing binary search tree ordered by a [`Comparator`](comparator::Comparator).
//!   Lookup, insertion and removal are O(log N).
//! - **Cursor**: [`Cursor`](cursor::Cursor) walks entries in either direction
//!   and can be parked before the first or after the last entry.
//! - **Map**: [`TreeMap`](map::TreeMap) wraps the tree with map vocabulary.
//! - **Serialization**: JSON object encoding behind the `serde` feature.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` impls and JSON helpers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use rbmap::prelude::*;
//!
//! let mut tree = RedBlackTree::new();
//! tree.put(3, "c");
//! tree.put(1, "x");
//! tree.put(2, "b");
//! tree.put(1, "a");
//!
//! assert_eq!(tree.size(), 3);
//! assert_eq!(tree.values(), vec![&"a", &"b", &"c"]);
//!
//! let mut cursor = tree.iterator();
//! cursor.end();
//! let mut keys = Vec::new();
//! while cursor.prev() {
//!     keys.push(*cursor.key().unwrap());
//! }
//! assert_eq!(keys, vec![3, 2, 1]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use rbmap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::comparator::{Comparator, FnComparator, OrdComparator, ReverseComparator};
    pub use crate::cursor::{Cursor, Iter};
    pub use crate::map::TreeMap;
    pub use crate::tree::{Color, InvariantViolation, NodeRef, RedBlackTree};

    #[cfg(feature = "serde")]
    pub use crate::serialization::SerializationError;
}

pub mod comparator;
pub mod cursor;
pub mod map;
pub mod tree;

#[cfg(feature = "serde")]
pub mod serialization;
