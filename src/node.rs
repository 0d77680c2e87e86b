//! The storage unit of a [`Tree`][crate::Tree].

use std::fmt;

/// An owned, possibly empty, subtree. Every `Node` is owned by exactly one parent link (or by the
/// `Tree` for the root) so rewriting a link moves the whole subtree with it.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` stores one value and two children, either of which may be absent.
///
/// Every value in the left subtree is smaller than this node's value and every value in the right
/// subtree is larger. The `Node` doesn't enforce this itself - the owning [`Tree`][crate::Tree]
/// maintains it across inserts and deletes.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Construct a boxed leaf, ready to be linked under a parent.
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self::new(value))
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The number of edges on the longest path from this node down to a leaf. A node with no
    /// children has a height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree = Tree::build([1, 2, 3, 4]);
    ///
    /// // 3 is the root, 2 hangs off of it and 1 hangs off of 2.
    /// assert_eq!(tree.find(&3).map(|n| n.height()), Some(2));
    /// assert_eq!(tree.find(&1).map(|n| n.height()), Some(0));
    /// ```
    pub fn height(&self) -> isize {
        1 + height(self.left()).max(height(self.right()))
    }
}

/// The height of an optional subtree. An absent subtree has a height of -1 so that a single node
/// has a height of 0.
///
/// This is the form to use when the starting node may itself be missing, e.g. straight from
/// [`Tree::find`][crate::Tree::find].
///
/// # Examples
///
/// ```
/// use bst::{height, Tree};
///
/// let tree = Tree::build([5, 3, 8]);
///
/// assert_eq!(height(tree.find(&5)), 1);
/// assert_eq!(height(tree.find(&8)), 0);
/// assert_eq!(height(tree.find(&42)), -1);
/// ```
pub fn height<T>(node: Option<&Node<T>>) -> isize {
    node.map_or(-1, Node::height)
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<T> Clone for Node<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}
