//! Height and balance diagnostics, and the minimal-height rebuild.

use alloc::boxed::Box;
use alloc::vec::Vec;

use log::debug;

use crate::node::{Link, Node};
use crate::tree::LinkedBst;

impl<T> LinkedBst<T> {
    /// Height of the tree, counted in edges.
    ///
    /// A single node has height 0 and an empty tree reports -1. The walk
    /// uses an explicit stack of `(node, depth)` pairs.
    ///
    /// # Performance
    /// O(n)
    ///
    /// # Example
    /// ```rust
    /// use linked_bst::LinkedBst;
    ///
    /// let mut tree = LinkedBst::new();
    /// assert_eq!(tree.height(), -1);
    /// tree.add(1);
    /// assert_eq!(tree.height(), 0);
    /// tree.add(2);
    /// tree.add(3);
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> isize {
        let mut levels = 0usize;
        let mut stack: Vec<(&Node<T>, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            levels = levels.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        levels as isize - 1
    }

    /// Approximate global balance check.
    ///
    /// True when `height < 2 * log2(n + 1) - 1`, where `n` is the number of
    /// items in the in-order sequence. Evaluated exactly in integers as
    /// `2^(height + 1) < (n + 1)^2`. Local per-subtree balance is not checked.
    ///
    /// # Example
    /// ```rust
    /// use linked_bst::LinkedBst;
    ///
    /// let mut tree: LinkedBst<u32> = (0..15).collect();
    /// assert!(!tree.is_balanced());
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        let count = self.inorder().len() as u128;
        let exponent = self.height() + 1;
        if exponent >= 128 {
            return false;
        }
        let squared = (count + 1) * (count + 1);
        (1u128 << exponent) < squared
    }
}

impl<T: Ord> LinkedBst<T> {
    /// Rebuild the tree with minimal height.
    ///
    /// Drains the items in ascending order, discards the old structure, then
    /// builds a new one directly: the middle item (`len / 2`) of each segment
    /// becomes the subtree root, the items before it form its left subtree
    /// and those after it its right subtree. The ordinary `add` path is not
    /// used. Items and their multiplicity are unchanged.
    ///
    /// Afterwards the height is at most `ceil(log2(n + 1)) - 1`.
    ///
    /// # Performance
    /// O(n) time; the rebuild recurses only to the new height.
    ///
    /// # Example
    /// ```rust
    /// use linked_bst::LinkedBst;
    ///
    /// let mut tree: LinkedBst<u32> = (1..=7).collect();
    /// assert_eq!(tree.height(), 6);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.root().map(|n| n.data), Some(4));
    /// ```
    pub fn rebalance(&mut self) {
        if self.is_empty() {
            return;
        }
        let before = self.height();

        let items = self.take_sorted();
        let count = items.len();
        let mut source = items.into_iter();
        self.root = build_balanced(count, &mut source);
        self.size = count;

        debug!(
            "rebalanced {} items: height {} -> {}",
            count,
            before,
            self.height()
        );
    }
}

/// Build a minimal-height subtree from the next `len` items of `source`.
///
/// Items are consumed in order: left subtree, subtree root, right subtree.
fn build_balanced<T, I>(len: usize, source: &mut I) -> Link<T>
where
    I: Iterator<Item = T>,
{
    if len == 0 {
        return None;
    }
    let mid = len / 2;
    let left = build_balanced(mid, source);
    let data = source.next()?;
    let right = build_balanced(len - mid - 1, source);
    Some(Box::new(Node::with_children(data, left, right)))
}
