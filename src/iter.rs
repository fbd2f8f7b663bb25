//! In-order cursors over a [`Tree`][crate::Tree].
//!
//! All cursors keep an explicit stack of the ancestors still waiting to be visited instead of
//! recursing, so a traversal of a degenerate, chain shaped tree needs no call stack beyond a
//! single frame. The top of the stack is always the smallest key not yet visited.
//!
//! A cursor is positioned on an element as soon as it's built. [`Iter::current`] reads that
//! element and [`Iter::advance`] moves to the next one. The usual [`Iterator`] interface is
//! built on those two steps.
//!
//! [`IterMut`] and [`RangeMut`] hand out `&mut V` and can update values in place, never keys.
//!
//! Cursors borrow the tree, so the tree can't be restructured while one is alive.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::ops;

use crate::error::{Error, Result};
use crate::node::Node;

/// Pushes `node` and every node on its left spine onto `stack`.
fn push_left_spine<'a, K, V>(stack: &mut Vec<&'a Node<K, V>>, mut node: Option<&'a Node<K, V>>) {
    while let Some(n) = node {
        stack.push(n);
        node = n.left();
    }
}

/// An iterator over the entries of a [`Tree`][crate::Tree] in ascending key order.
///
/// Created by [`Tree::iter`][crate::Tree::iter] and [`Tree::seek`][crate::Tree::seek].
///
/// # Examples
///
/// ```
/// use searching_tree::{Error, Tree};
///
/// let tree: Tree<_, _> = [(2, "two"), (1, "one")].into_iter().collect();
/// let mut iter = tree.iter();
///
/// assert_eq!(iter.current(), Ok((&1, &"one")));
/// iter.advance();
/// assert_eq!(iter.current(), Ok((&2, &"two")));
/// iter.advance();
/// assert_eq!(iter.current(), Err(Error::OutOfRange));
/// ```
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    current: Option<&'a Node<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(root: Option<&'a Node<K, V>>) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            current: None,
        };
        push_left_spine(&mut iter.stack, root);
        iter.advance();
        iter
    }

    /// Builds a cursor on the node holding `key`. The stack holds exactly the ancestors where
    /// the search turned left, plus the left spine of the found node's right child.
    pub(crate) fn seek(root: Option<&'a Node<K, V>>, key: &K) -> Self
    where
        K: Ord,
    {
        let mut stack = Vec::new();
        let mut next = root;
        while let Some(node) = next {
            next = match key.cmp(&node.key) {
                Ordering::Less => {
                    stack.push(node);
                    node.left()
                }
                Ordering::Equal => {
                    push_left_spine(&mut stack, node.right());
                    return Self {
                        stack,
                        current: Some(node),
                    };
                }
                Ordering::Greater => node.right(),
            };
        }

        Self {
            stack: Vec::new(),
            current: None,
        }
    }

    /// The entry the cursor is on.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if the cursor is exhausted.
    pub fn current(&self) -> Result<(&'a K, &'a V)> {
        self.current
            .map(|node| (&node.key, &node.value))
            .ok_or(Error::OutOfRange)
    }

    /// Moves the cursor to the next entry in key order. Once exhausted this does nothing.
    pub fn advance(&mut self) {
        self.current = self.stack.pop();
        if let Some(node) = self.current {
            push_left_spine(&mut self.stack, node.right());
        }
    }

    /// Whether the cursor has run past the last entry.
    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.advance();
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every stacked node is still to come.
        (self.stack.len() + usize::from(self.current.is_some()), None)
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Manual implementation of `Clone` so cloning a cursor doesn't require `K: Clone` or
/// `V: Clone`. The clone walks independently of the original.
impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            current: self.current,
        }
    }
}

impl<K, V> fmt::Debug for Iter<'_, K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An iterator over the entries of a [`Tree`][crate::Tree] whose keys lie in a semi-open
/// interval `[start, end)`, in ascending key order.
///
/// Subtrees whose keys are all at or above `end` are never visited. Bounds with
/// `start >= end` produce nothing.
///
/// Created by [`Tree::range`][crate::Tree::range].
///
/// # Examples
///
/// ```
/// use searching_tree::Tree;
///
/// let tree: Tree<_, _> = (0..10).map(|k| (k, k * k)).collect();
/// let squares: Vec<_> = tree.range(3..6).map(|(_, v)| *v).collect();
///
/// assert_eq!(squares, vec![9, 16, 25]);
/// assert_eq!(tree.range(6..3).next(), None);
/// ```
pub struct Range<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    current: Option<&'a Node<K, V>>,
    bounds: ops::Range<K>,
}

impl<'a, K, V> Range<'a, K, V>
where
    K: Ord,
{
    pub(crate) fn new(root: Option<&'a Node<K, V>>, bounds: ops::Range<K>) -> Self {
        let mut range = Self {
            stack: Vec::new(),
            current: None,
            bounds,
        };
        if range.bounds.start < range.bounds.end {
            push_left_spine(&mut range.stack, root);
        }
        range.advance_to_valid();
        range
    }

    /// Pops nodes until one lies within the bounds, or the stack runs dry.
    fn advance_to_valid(&mut self) {
        self.current = None;
        while let Some(node) = self.stack.pop() {
            if self.bounds.contains(&node.key) {
                self.current = Some(node);
                return;
            }
            if node.key >= self.bounds.end {
                // Everything still stacked, and everything right of `node`, is larger.
                self.stack.clear();
                return;
            }
            push_left_spine(&mut self.stack, node.right());
        }
    }

    /// The entry the cursor is on.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if the cursor is exhausted.
    pub fn current(&self) -> Result<(&'a K, &'a V)> {
        self.current
            .map(|node| (&node.key, &node.value))
            .ok_or(Error::OutOfRange)
    }

    /// Moves the cursor to the next entry within the bounds. Once exhausted this does nothing.
    pub fn advance(&mut self) {
        let Some(node) = self.current.take() else {
            return;
        };
        push_left_spine(&mut self.stack, node.right());
        self.advance_to_valid();
    }

    /// Whether the cursor has run past the last entry within the bounds.
    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }
}

impl<'a, K, V> Iterator for Range<'a, K, V>
where
    K: Ord,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.advance();
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::from(self.current.is_some()), None)
    }
}

impl<K, V> FusedIterator for Range<'_, K, V> where K: Ord {}

/// Manual implementation of `Clone` so cloning a cursor doesn't require `V: Clone`. The bounds
/// are owned, so `K: Clone` is needed.
impl<K, V> Clone for Range<'_, K, V>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            current: self.current,
            bounds: self.bounds.clone(),
        }
    }
}

impl<K, V> fmt::Debug for Range<'_, K, V>
where
    K: fmt::Debug + Clone + Ord,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// A node waiting on a mutable cursor's stack, split into the parts the cursor still needs.
/// Its left subtree is already on the stack above it.
struct Pending<'a, K, V> {
    key: &'a K,
    value: &'a mut V,
    right: Option<&'a mut Node<K, V>>,
}

/// Pushes `node` and every node on its left spine onto `stack`.
fn push_left_spine_mut<'a, K, V>(
    stack: &mut Vec<Pending<'a, K, V>>,
    mut node: Option<&'a mut Node<K, V>>,
) {
    while let Some(n) = node {
        let Node {
            key,
            value,
            left,
            right,
        } = n;
        stack.push(Pending {
            key,
            value,
            right: right.as_deref_mut(),
        });
        node = left.as_deref_mut();
    }
}

/// An iterator over the entries of a [`Tree`][crate::Tree] in ascending key order, with
/// mutable access to the values.
///
/// Created by [`Tree::iter_mut`][crate::Tree::iter_mut].
///
/// # Examples
///
/// ```
/// use searching_tree::Tree;
///
/// let mut tree: Tree<_, _> = (1..=3).map(|k| (k, k)).collect();
/// for (_, value) in tree.iter_mut() {
///     *value *= 10;
/// }
///
/// assert_eq!(tree.find(&2), Some(&20));
/// ```
pub struct IterMut<'a, K, V> {
    stack: Vec<Pending<'a, K, V>>,
    current: Option<(&'a K, &'a mut V)>,
}

impl<'a, K, V> IterMut<'a, K, V> {
    pub(crate) fn new(root: Option<&'a mut Node<K, V>>) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            current: None,
        };
        push_left_spine_mut(&mut iter.stack, root);
        iter.advance();
        iter
    }

    /// The entry the cursor is on.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if the cursor is exhausted.
    pub fn current(&mut self) -> Result<(&K, &mut V)> {
        self.current
            .as_mut()
            .map(|(key, value)| (&**key, &mut **value))
            .ok_or(Error::OutOfRange)
    }

    /// Moves the cursor to the next entry in key order. Once exhausted this does nothing.
    pub fn advance(&mut self) {
        let Some(Pending { key, value, right }) = self.stack.pop() else {
            self.current = None;
            return;
        };
        push_left_spine_mut(&mut self.stack, right);
        self.current = Some((key, value));
    }

    /// Whether the cursor has run past the last entry.
    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.current.take()?;
        self.advance();
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len() + usize::from(self.current.is_some()), None)
    }
}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// An iterator over the entries of a [`Tree`][crate::Tree] whose keys lie in a semi-open
/// interval `[start, end)`, in ascending key order, with mutable access to the values.
///
/// Created by [`Tree::range_mut`][crate::Tree::range_mut].
///
/// # Examples
///
/// ```
/// use searching_tree::Tree;
///
/// let mut tree: Tree<_, _> = (0..6).map(|k| (k, 0)).collect();
/// for (_, value) in tree.range_mut(2..4) {
///     *value = 1;
/// }
///
/// let values: Vec<_> = tree.iter().map(|(_, v)| *v).collect();
/// assert_eq!(values, vec![0, 0, 1, 1, 0, 0]);
/// ```
pub struct RangeMut<'a, K, V> {
    stack: Vec<Pending<'a, K, V>>,
    // Keeps its right subtree until the cursor moves past it.
    current: Option<Pending<'a, K, V>>,
    bounds: ops::Range<K>,
}

impl<'a, K, V> RangeMut<'a, K, V>
where
    K: Ord,
{
    pub(crate) fn new(root: Option<&'a mut Node<K, V>>, bounds: ops::Range<K>) -> Self {
        let mut range = Self {
            stack: Vec::new(),
            current: None,
            bounds,
        };
        if range.bounds.start < range.bounds.end {
            push_left_spine_mut(&mut range.stack, root);
        }
        range.advance_to_valid();
        range
    }

    /// Pops nodes until one lies within the bounds, or the stack runs dry.
    fn advance_to_valid(&mut self) {
        self.current = None;
        while let Some(pending) = self.stack.pop() {
            if self.bounds.contains(pending.key) {
                self.current = Some(pending);
                return;
            }
            if *pending.key >= self.bounds.end {
                self.stack.clear();
                return;
            }
            push_left_spine_mut(&mut self.stack, pending.right);
        }
    }

    /// The entry the cursor is on.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if the cursor is exhausted.
    pub fn current(&mut self) -> Result<(&K, &mut V)> {
        self.current
            .as_mut()
            .map(|pending| (pending.key, &mut *pending.value))
            .ok_or(Error::OutOfRange)
    }

    /// Moves the cursor to the next entry within the bounds. Once exhausted this does nothing.
    pub fn advance(&mut self) {
        let Some(pending) = self.current.take() else {
            return;
        };
        push_left_spine_mut(&mut self.stack, pending.right);
        self.advance_to_valid();
    }

    /// Whether the cursor has run past the last entry within the bounds.
    pub fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }
}

impl<'a, K, V> Iterator for RangeMut<'a, K, V>
where
    K: Ord,
{
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        let Pending { key, value, right } = self.current.take()?;
        push_left_spine_mut(&mut self.stack, right);
        self.advance_to_valid();
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::from(self.current.is_some()), None)
    }
}

impl<K, V> FusedIterator for RangeMut<'_, K, V> where K: Ord {}
