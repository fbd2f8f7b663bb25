//! Node storage and the structural mutators.
//!
//! Every `Node` exclusively owns its two children so the whole tree is a chain of `Box`es
//! hanging off the [`Tree`][crate::Tree]'s root. Insertion and deletion walk down one
//! root-to-leaf path holding a `&mut` to the owning child slot, then fill or splice that
//! slot in place. Nothing recurses, so a degenerate chain of any length is fine.

use std::cmp::Ordering;
use std::mem;

/// An owning child slot. `None` is an empty subtree.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// A `Node` has a key that is used for searching/sorting and a value that is associated with
/// that key. Either child may be empty.
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    /// Construct a new leaf `Node` with the given `key` and `value`.
    pub(crate) fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The slot in the subtree owned by `link` that holds `key`, or the empty slot where a node
    /// for `key` belongs.
    fn slot<'a>(mut link: &'a mut Link<K, V>, key: &K) -> &'a mut Link<K, V>
    where
        K: Ord,
    {
        loop {
            let ordering = link.as_deref().map(|node| key.cmp(&node.key));
            // `link` is moved into the match so the child borrow can keep its full lifetime.
            link = match (ordering, link) {
                (Some(Ordering::Less), Some(node)) => &mut node.left,
                (Some(Ordering::Greater), Some(node)) => &mut node.right,
                (_, link) => return link,
            };
        }
    }

    /// Inserts `key` into the subtree owned by `link` and returns whether a node was created.
    /// An existing key is left untouched, value included.
    pub(crate) fn insert(link: &mut Link<K, V>, key: K, value: V) -> bool
    where
        K: Ord,
    {
        let slot = Self::slot(link, &key);
        if slot.is_some() {
            return false;
        }
        *slot = Some(Self::new_boxed(key, value));
        true
    }

    /// Deletes `key` from the subtree owned by `link` and returns the value that was stored
    /// there, if any.
    pub(crate) fn delete(link: &mut Link<K, V>, key: &K) -> Option<V>
    where
        K: Ord,
    {
        let slot = Self::slot(link, key);

        // Two children: the in-order successor (smallest key on the right) moves into this
        // node and its old node is spliced out of the right subtree.
        let node = slot.as_deref_mut()?;
        if node.left.is_some() {
            if let Some(successor) = Self::take_min(&mut node.right) {
                let Node {
                    key: successor_key,
                    value: successor_value,
                    ..
                } = *successor;
                log::trace!("promoting in-order successor into a node with two children");

                node.key = successor_key;
                return Some(mem::replace(&mut node.value, successor_value));
            }
        }

        // At most one child: it takes the node's place.
        let Node {
            value, left, right, ..
        } = *slot.take()?;
        *slot = left.or(right);
        Some(value)
    }

    /// Detaches the node with the smallest key from the subtree owned by `link`, splicing its
    /// right child into its place. The detached node has no children.
    fn take_min(mut link: &mut Link<K, V>) -> Option<Box<Self>> {
        loop {
            let has_left = link.as_deref().map(|node| node.left.is_some());
            link = match (has_left, link) {
                (Some(true), Some(node)) => &mut node.left,
                (_, link) => {
                    let mut min = link.take()?;
                    *link = min.right.take();
                    return Some(min);
                }
            };
        }
    }

    /// Finds the node holding `key` in the subtree rooted at `self`.
    pub(crate) fn find(&self, key: &K) -> Option<&Self>
    where
        K: Ord,
    {
        let mut next = Some(self);
        while let Some(node) = next {
            next = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Finds the value stored at `key` in the subtree owned by `link`.
    pub(crate) fn find_mut<'a>(link: &'a mut Link<K, V>, key: &K) -> Option<&'a mut V>
    where
        K: Ord,
    {
        Self::slot(link, key)
            .as_deref_mut()
            .map(|node| &mut node.value)
    }

    /// The node at the bottom of this node's left spine.
    pub(crate) fn leftmost(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// The node at the bottom of this node's right spine.
    pub(crate) fn rightmost(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }
}
