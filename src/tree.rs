//! A BST that is built balanced once and then edited in place. Construction picks the middle of
//! the sorted, deduplicated input as each subtree's root so a freshly built tree has `O(lg N)`
//! height. Inserts and deletes keep the ordering invariant but never rebalance - an adversarial
//! sequence of edits can leave the tree as tall as a linked list.
//!
//! # Examples
//!
//! ```
//! use bst::Tree;
//!
//! let mut tree = Tree::build([1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324]);
//!
//! // Duplicates are dropped and values come back out in order.
//! let sorted: Vec<_> = tree.inorder().copied().collect();
//! assert_eq!(sorted, [1, 3, 4, 5, 7, 8, 9, 23, 67, 324, 6345]);
//!
//! // Inserting a new value links a new node.
//! assert!(tree.insert(33));
//! assert_eq!(tree.find(&33).map(|n| *n.value()), Some(33));
//!
//! // Inserting an existing value does nothing.
//! assert!(!tree.insert(33));
//!
//! // Deleting a value hands it back.
//! assert_eq!(tree.delete(&4), Some(4));
//! assert!(tree.find(&4).is_none());
//! assert!(tree.find(&5).is_some());
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::node::{self, Link, Node};

/// A Binary Search Tree of unique values. It is built balanced from an arbitrary collection of
/// values and can then be searched, edited, and traversed.
///
/// Dropping a tree and walking it with the traversal iterators take constant stack space.
/// `insert`, `delete`, `clone`, and [`Node::height`] recurse once per level, so a tree made very
/// tall by edits can exhaust the stack in those operations.
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Detach children before each node drops so no `Box<Node>` drop ever recurses.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root()).finish()
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::build(values)
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a balanced tree out of `values`. The values are sorted and deduplicated first so
    /// the input can be in any order and contain repeats.
    ///
    /// For a sorted run of `n` values, the value at index `n / 2` becomes the root, everything
    /// before it builds the left subtree, and everything after it builds the right subtree. For
    /// an even `n` this picks the upper of the two middle values.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree = Tree::build([3, 1, 2, 3, 1]);
    ///
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(2));
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn build<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        let received = values.len();
        values.sort_unstable();
        values.dedup();
        debug!(received, unique = values.len(), "building balanced tree");

        let mut values = values.into_iter().map(Some).collect::<Vec<_>>();
        Self {
            root: build_balanced(&mut values),
        }
    }

    /// The root node of the tree, if there is one.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of values in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.preorder().count()
    }

    /// Inserts `value` into the tree. Returns `true` if a new node was linked in and `false` if
    /// the tree already held an equal value, in which case the tree is left untouched and
    /// `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let (root, linked) = insert(self.root.take(), value);
        self.root = root;

        if linked {
            debug!("inserted new node");
        } else {
            debug!("value already present, insert ignored");
        }
        linked
    }

    /// Deletes the node holding `value` and returns the stored value. If the tree doesn't hold
    /// `value`, nothing happens and `None` is returned.
    ///
    /// When the deleted node has two children its in-order successor's value is moved up into
    /// it, so the node that used to hold `value` now holds the next larger value.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::build([1, 2, 3]);
    ///
    /// assert_eq!(tree.delete(&2), Some(2));
    /// assert_eq!(tree.delete(&2), None);
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(3));
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let (root, removed) = delete(self.root.take(), value);
        self.root = root;

        if removed.is_some() {
            debug!("deleted node");
        } else {
            debug!("value not present, delete ignored");
        }
        removed
    }

    /// Potentially finds the node holding `value`. If no node holds it, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree = Tree::build([1, 2]);
    ///
    /// assert_eq!(tree.find(&1).map(|n| *n.value()), Some(1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }

        None
    }

    /// Whether the tree holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// The number of edges between the root and the node holding `value`, or `None` if no node
    /// holds it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3]);
    ///
    /// assert_eq!(tree.depth(&2), Some(0));
    /// assert_eq!(tree.depth(&3), Some(1));
    /// assert_eq!(tree.depth(&4), None);
    /// ```
    pub fn depth(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        let mut current = self.root();
        let mut depth = 0;
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(depth),
                Ordering::Greater => node.right(),
            };
            depth += 1;
        }

        None
    }

    /// The height of the whole tree. An empty tree has a height of -1 and a tree with only a root
    /// has a height of 0. Use [`Node::height`] to measure from some other node.
    pub fn height(&self) -> isize {
        node::height(self.root())
    }

    /// Whether, for every node, the heights of its two subtrees differ by at most one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::build(1..=7);
    /// assert!(tree.is_balanced());
    ///
    /// // Growing one side without rebalancing tips the tree over.
    /// for x in 8..=10 {
    ///     tree.insert(x);
    /// }
    /// assert!(!tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        checked_height(self.root()).is_some()
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.value)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.value)
    }
}

/// Builds a subtree out of a sorted, deduplicated run of values. The values are wrapped in
/// `Option` so each one can be moved out of the slice exactly once.
fn build_balanced<T>(values: &mut [Option<T>]) -> Link<T> {
    if values.is_empty() {
        return None;
    }

    let mid = values.len() / 2;
    let (left, rest) = values.split_at_mut(mid);
    let (pivot, right) = rest.split_first_mut()?;
    let mut node = Node::new_boxed(pivot.take()?);
    node.left = build_balanced(left);
    node.right = build_balanced(right);

    Some(node)
}

/// Inserts `value` into the subtree at `link` and returns the subtree to link back into the
/// parent, along with whether a new node was created.
fn insert<T>(link: Link<T>, value: T) -> (Link<T>, bool)
where
    T: Ord,
{
    let Some(mut node) = link else {
        return (Some(Node::new_boxed(value)), true);
    };

    let ordering = value.cmp(&node.value);
    trace!(?ordering, "insert descending");
    let linked = match ordering {
        Ordering::Less => {
            let (left, linked) = insert(node.left.take(), value);
            node.left = left;
            linked
        }
        Ordering::Equal => false,
        Ordering::Greater => {
            let (right, linked) = insert(node.right.take(), value);
            node.right = right;
            linked
        }
    };

    (Some(node), linked)
}

/// Deletes `value` from the subtree at `link` and returns the subtree to link back into the
/// parent, along with the removed value.
fn delete<T>(link: Link<T>, value: &T) -> (Link<T>, Option<T>)
where
    T: Ord,
{
    let Some(mut node) = link else {
        return (None, None);
    };

    let ordering = value.cmp(&node.value);
    trace!(?ordering, "delete descending");
    match ordering {
        Ordering::Less => {
            let (left, removed) = delete(node.left.take(), value);
            node.left = left;
            (Some(node), removed)
        }
        Ordering::Greater => {
            let (right, removed) = delete(node.right.take(), value);
            node.right = right;
            (Some(node), removed)
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => (right, Some(node.value)),
            (left, None) => (left, Some(node.value)),
            (Some(left), Some(right)) => {
                // Promote the in-order successor. It's the smallest value in the right subtree
                // so it's larger than everything on the left and smaller than the rest of the
                // right.
                debug!("deleted node has two children, promoting in-order successor");
                let (right, successor) = take_smallest(right);
                let removed = std::mem::replace(&mut node.value, successor);
                node.left = Some(left);
                node.right = right;
                (Some(node), Some(removed))
            }
        },
    }
}

/// Unlinks the leftmost node of the subtree rooted at `node` and returns what's left of the
/// subtree along with that node's value.
fn take_smallest<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.left.take() {
        None => {
            let Node { value, right, .. } = *node;
            (right, value)
        }
        Some(left) => {
            let (left, smallest) = take_smallest(left);
            node.left = left;
            (Some(node), smallest)
        }
    }
}

/// The height of the subtree if every node in it is balanced, `None` otherwise.
fn checked_height<T>(node: Option<&Node<T>>) -> Option<isize> {
    let Some(node) = node else {
        return Some(-1);
    };
    let left = checked_height(node.left())?;
    let right = checked_height(node.right())?;

    (left.abs_diff(right) <= 1).then(|| 1 + left.max(right))
}
