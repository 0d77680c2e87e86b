//! Depth-first and breadth-first iterators over a [`Tree`]'s values.
//!
//! Every traversal is a fresh iterator borrowing the tree, so it can be restarted by asking the
//! tree for another one. Collect it to get the sequence of values or drive it with `for_each` to
//! visit each value in turn:
//!
//! ```
//! use bst::Tree;
//!
//! let tree = Tree::build(1..=7);
//!
//! let preorder: Vec<_> = tree.preorder().copied().collect();
//! assert_eq!(preorder, [4, 2, 1, 3, 6, 5, 7]);
//!
//! let mut visited = Vec::new();
//! tree.level_order().for_each(|x| visited.push(*x));
//! assert_eq!(visited, [4, 2, 6, 1, 3, 5, 7]);
//! ```
//!
//! The depth-first iterators keep an explicit stack instead of recursing, so walking a degenerate
//! tree uses heap space rather than call stack. Building that tree with
//! [`Tree::insert`] still recurses once per level.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::Node;
use crate::tree::Tree;

impl<T> Tree<T> {
    /// Visits each node, then its left subtree, then its right subtree.
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder {
            stack: self.root().into_iter().collect(),
        }
    }

    /// Visits the left subtree, then the node, then the right subtree. This yields the values in
    /// ascending order.
    pub fn inorder(&self) -> Inorder<'_, T> {
        let mut iter = Inorder { stack: Vec::new() };
        iter.push_left_spine(self.root());
        iter
    }

    /// Visits the left subtree, then the right subtree, then the node.
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder {
            stack: self.root().map(|n| (n, false)).into_iter().collect(),
        }
    }

    /// Visits the nodes level by level, from the root down and left to right within a level.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder {
            queue: self.root().into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Inorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

/// A preorder iterator. See [`Tree::preorder`].
pub struct Preorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is finished before it's popped.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(&node.value)
    }
}

impl<T> FusedIterator for Preorder<'_, T> {}

/// An inorder iterator. See [`Tree::inorder`].
pub struct Inorder<'a, T> {
    /// Nodes whose left subtrees are being walked. The top of the stack is the next node to
    /// yield.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Inorder<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.value)
    }
}

impl<T> FusedIterator for Inorder<'_, T> {}

/// A postorder iterator. See [`Tree::postorder`].
pub struct Postorder<'a, T> {
    /// Each node is paired with whether its children have already been pushed. A node is only
    /// yielded the second time it reaches the top of the stack.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.value);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }
}

impl<T> FusedIterator for Postorder<'_, T> {}

/// A breadth-first iterator. See [`Tree::level_order`].
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(&node.value)
    }
}

impl<T> FusedIterator for LevelOrder<'_, T> {}
