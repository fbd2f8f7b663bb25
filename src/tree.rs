//! The public, owning handle for a Binary Search Tree.
//!
//! # Examples
//!
//! ```
//! use searching_tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.insert(1, 2);
//! assert_eq!(tree.find(&1), Some(&2));
//!
//! // The first value inserted for a key stays until the key is deleted.
//! tree.insert(1, 3);
//! assert_eq!(tree.find(&1), Some(&2));
//!
//! // Deleting a node returns its value.
//! assert_eq!(tree.delete(&1), Some(2));
//! assert_eq!(tree.find(&1), None);
//! ```

use std::fmt;
use std::ops;

use crate::iter::{Iter, IterMut, Range, RangeMut};
use crate::node::{Link, Node};

/// An unbalanced Binary Search Tree mapping keys to values. This can be used for inserting,
/// finding, deleting, and iterating over keys and values in ascending key order.
///
/// No rebalancing is ever done, so the shape depends entirely on insertion order. Inserting
/// keys in sorted order builds a chain and every operation costs `O(n)`.
pub struct Tree<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Tree<K, V> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Copies the tree node for node, so the clone has exactly the same shape.
impl<K, V> Clone for Tree<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        // Post-order: by the time a node comes off `pending` for the second time, its cloned
        // children sit on top of `built`, right above left.
        let mut pending: Vec<(&Node<K, V>, bool)> =
            self.root.as_deref().map(|root| (root, false)).into_iter().collect();
        let mut built: Vec<Box<Node<K, V>>> = Vec::new();

        while let Some((node, children_built)) = pending.pop() {
            if children_built {
                let right = node.right.as_ref().and_then(|_| built.pop());
                let left = node.left.as_ref().and_then(|_| built.pop());
                built.push(Box::new(Node {
                    key: node.key.clone(),
                    value: node.value.clone(),
                    left,
                    right,
                }));
            } else {
                pending.push((node, true));
                pending.extend(node.right().map(|right| (right, false)));
                pending.extend(node.left().map(|left| (left, false)));
            }
        }

        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Tree<K, V> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of entries in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `value` at `key` and returns `true`. If the tree already holds `key` nothing
    /// changes and `false` is returned: the first value inserted for a key is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use searching_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1, "first"));
    /// assert!(!tree.insert(1, "second"));
    /// assert_eq!(tree.find(&1), Some(&"first"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool
    where
        K: Ord,
    {
        let inserted = Node::insert(&mut self.root, key, value);
        if inserted {
            self.len += 1;
            log::trace!("inserted node, tree now holds {} entries", self.len);
        } else {
            log::trace!("key already present, insert ignored");
        }
        inserted
    }

    /// Deletes the node containing the given key from the tree and returns its value. If the
    /// tree does not contain a node with the key, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use searching_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.delete(&1), Some(2));
    /// assert_eq!(tree.delete(&1), None);
    /// assert_eq!(tree.find(&1), None);
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<V>
    where
        K: Ord,
    {
        let deleted = Node::delete(&mut self.root, key);
        if deleted.is_some() {
            self.len -= 1;
            log::trace!("deleted node, tree now holds {} entries", self.len);
        }
        deleted
    }

    /// Potentially finds the value associated with the given key in this tree. If no node has
    /// the corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use searching_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.find(&1), Some(&2));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        self.get_key_value(key).map(|(_, v)| v)
    }

    /// Like [`Tree::find`] but also returns the stored key.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)>
    where
        K: Ord,
    {
        self.root
            .as_deref()
            .and_then(|root| root.find(key))
            .map(|node| (&node.key, &node.value))
    }

    /// Mutable access to the value stored at `key`. Along with the mutable iterators, this is
    /// how a stored value changes without deleting and reinserting its key.
    ///
    /// # Examples
    ///
    /// ```
    /// use searching_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert("a", 1);
    ///
    /// if let Some(v) = tree.find_mut(&"a") {
    ///     *v += 1;
    /// }
    /// assert_eq!(tree.find(&"a"), Some(&2));
    /// ```
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V>
    where
        K: Ord,
    {
        Node::find_mut(&mut self.root, key)
    }

    /// Whether the tree holds `key`.
    pub fn contains_key(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.get_key_value(key).is_some()
    }

    /// The entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.root
            .as_deref()
            .map(Node::leftmost)
            .map(|node| (&node.key, &node.value))
    }

    /// The entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.root
            .as_deref()
            .map(Node::rightmost)
            .map(|node| (&node.key, &node.value))
    }

    /// Iterates over every entry in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use searching_tree::Tree;
    ///
    /// let tree: Tree<_, _> = [(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();
    /// let keys: Vec<_> = tree.iter().map(|(k, _)| *k).collect();
    ///
    /// assert_eq!(keys, vec![1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_deref())
    }

    /// A cursor positioned on `key` that continues in ascending key order from there. If the
    /// tree doesn't hold `key` the cursor is already exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// use searching_tree::{Error, Tree};
    ///
    /// let tree: Tree<_, _> = (1..=5).map(|k| (k, k * 10)).collect();
    ///
    /// let found = tree.seek(&3);
    /// assert_eq!(found.current(), Ok((&3, &30)));
    /// assert_eq!(found.map(|(k, _)| *k).collect::<Vec<_>>(), vec![3, 4, 5]);
    ///
    /// assert_eq!(tree.seek(&9).current(), Err(Error::OutOfRange));
    /// ```
    pub fn seek(&self, key: &K) -> Iter<'_, K, V>
    where
        K: Ord,
    {
        Iter::seek(self.root.as_deref(), key)
    }

    /// Iterates over the entries with `bounds.start <= key < bounds.end` in ascending key order.
    /// Empty or reversed bounds produce nothing.
    pub fn range(&self, bounds: ops::Range<K>) -> Range<'_, K, V>
    where
        K: Ord,
    {
        Range::new(self.root.as_deref(), bounds)
    }

    /// Iterates over every entry in ascending key order with mutable access to the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(self.root.as_deref_mut())
    }

    /// Like [`Tree::range`] but with mutable access to the values.
    pub fn range_mut(&mut self, bounds: ops::Range<K>) -> RangeMut<'_, K, V>
    where
        K: Ord,
    {
        RangeMut::new(self.root.as_deref_mut(), bounds)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.teardown();
    }

    /// Frees every node with an explicit stack. Dropping the root directly would recurse once
    /// per level, which a long enough chain turns into a stack overflow.
    fn teardown(&mut self) {
        if self.root.is_some() {
            log::trace!("tearing down tree of {} entries", self.len);
        }
        let mut stack: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }
}

impl<'a, K, V> IntoIterator for &'a Tree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut Tree<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Inserts every pair in order, so the first value seen for a key wins.
impl<K, V> FromIterator<(K, V)> for Tree<K, V>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, V> Extend<(K, V)> for Tree<K, V>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
