//! Traversal support for LinkedBst.
//!
//! Every traversal keeps its pending nodes in an explicit stack or queue,
//! so walking a list-shaped tree costs heap space rather than call-stack depth.
//!
//! # Orders
//! - `iter()` - lazy pre-order walk (default iteration order)
//! - `inorder()` - ascending, fully materialized
//! - `preorder()` / `postorder()` / `levelorder()` - fully materialized

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::node::Node;
use crate::tree::LinkedBst;

/// Lazy pre-order iterator over the items of a tree.
///
/// Pops a node, yields its item, then pushes the right child followed by the
/// left child so the left subtree is visited first.
///
/// Each call to [`LinkedBst::iter`] builds an independent stack, and the walk
/// only reads the tree: abandoning it part-way leaves nothing behind.
///
/// # Example
/// ```rust
/// use linked_bst::LinkedBst;
///
/// let tree: LinkedBst<u32> = [5, 3, 8, 1, 4].into_iter().collect();
/// let items: Vec<u32> = tree.iter().copied().collect();
/// assert_eq!(items, vec![5, 3, 1, 4, 8]);
/// ```
pub struct PreorderIter<'a, T> {
    /// Nodes waiting to be visited (top = next)
    stack: Vec<&'a Node<T>>,

    /// Items not yet yielded
    remaining: usize,
}

impl<'a, T> PreorderIter<'a, T> {
    pub(crate) fn new(tree: &'a LinkedBst<T>) -> Self {
        Self {
            stack: tree.root().into_iter().collect(),
            remaining: tree.len(),
        }
    }
}

impl<'a, T> Iterator for PreorderIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for PreorderIter<'a, T> {}

impl<'a, T> FusedIterator for PreorderIter<'a, T> {}

impl<'a, T> IntoIterator for &'a LinkedBst<T> {
    type Item = &'a T;
    type IntoIter = PreorderIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> LinkedBst<T> {
    /// Lazy pre-order walk (node, left subtree, right subtree).
    ///
    /// This is the default iteration order of the tree.
    #[inline]
    pub fn iter(&self) -> PreorderIter<'_, T> {
        PreorderIter::new(self)
    }

    /// All items in ascending order.
    ///
    /// Recomputed on every call: O(n) time and space. Neighbor queries,
    /// range queries and balance diagnostics are built on this sequence.
    ///
    /// # Example
    /// ```rust
    /// use linked_bst::LinkedBst;
    ///
    /// let tree: LinkedBst<u32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    /// assert_eq!(tree.inorder(), vec![&1, &3, &4, &5, &7, &8, &9]);
    /// ```
    pub fn inorder(&self) -> Vec<&T> {
        let mut items = Vec::with_capacity(self.size);
        let mut stack: Vec<&Node<T>> = Vec::new();
        let mut current = self.root();

        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            match stack.pop() {
                Some(node) => {
                    items.push(&node.data);
                    current = node.right();
                }
                None => break,
            }
        }

        items
    }

    /// All items in pre-order (node, left subtree, right subtree).
    #[inline]
    pub fn preorder(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// All items in post-order (left subtree, right subtree, node).
    pub fn postorder(&self) -> Vec<&T> {
        // Reverse of (node, right, left)
        let mut items = Vec::with_capacity(self.size);
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            items.push(&node.data);
            stack.extend(node.left());
            stack.extend(node.right());
        }
        items.reverse();
        items
    }

    /// All items level by level, left to right within a level.
    pub fn levelorder(&self) -> Vec<&T> {
        let mut items = Vec::with_capacity(self.size);
        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            items.push(&node.data);
            queue.extend(node.left());
            queue.extend(node.right());
        }
        items
    }
}
