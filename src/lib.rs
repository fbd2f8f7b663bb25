//! An ordered key-value container backed by an unbalanced Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key, the value
//! associated with it, and up to two child `Node`s. The most important
//! invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)`, where `height` is the longest path from
//! the root `Node` to a leaf `Node`. BSTs also naturally support sorted iteration
//! by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! This tree never rebalances itself. Its height is whatever the insertion order
//! makes it, so keys inserted in sorted order produce a chain of height `N`.
//!
//! ## Semantics
//!
//! - Inserting a key that's already present changes nothing: the first value
//!   inserted for a key stays until that key is deleted.
//! - Deleting or finding an absent key isn't an error, it just reports `None`.
//! - [`Tree::iter`] visits every entry and [`Tree::range`] visits the entries in
//!   a semi-open interval `[start, end)`, both in ascending key order.
//! - [`Tree::iter_mut`] and [`Tree::range_mut`] do the same with mutable access
//!   to the values.
//! - Iterators are also cursors. Reading the element of an exhausted cursor is
//!   [`Error::OutOfRange`].
//!
//! # Examples
//!
//! ```
//! use searching_tree::Tree;
//!
//! let mut tree = Tree::new();
//! for (key, value) in [(10, "ten"), (5, "five"), (15, "fifteen"), (7, "seven")] {
//!     tree.insert(key, value);
//! }
//!
//! assert_eq!(tree.find(&7), Some(&"seven"));
//!
//! let in_range: Vec<_> = tree.range(5..15).map(|(k, _)| *k).collect();
//! assert_eq!(in_range, vec![5, 7, 10]);
//!
//! tree.delete(&10);
//! let keys: Vec<_> = tree.iter().map(|(k, _)| *k).collect();
//! assert_eq!(keys, vec![5, 7, 15]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod iter;
mod node;
pub mod tree;

pub use error::{Error, Result};
pub use iter::{Iter, IterMut, Range, RangeMut};
pub use tree::Tree;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
