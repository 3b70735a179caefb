//! Structural checks shared by the unit tests.

use alloc::vec::Vec;

use crate::node::Node;
use crate::tree::LinkedBst;

/// Bounds inherited from the ancestors of a node.
struct Window<'a, T> {
    /// Every item must be `>=` this
    low: Option<&'a T>,
    /// Every item must be `<` this (or `<=` when `inclusive_high`)
    high: Option<&'a T>,
    inclusive_high: bool,
}

fn check<T: Ord>(tree: &LinkedBst<T>, strict_left: bool) {
    let mut stack: Vec<(&Node<T>, Window<'_, T>)> = Vec::new();
    if let Some(root) = tree.root() {
        let window = Window {
            low: None,
            high: None,
            inclusive_high: false,
        };
        stack.push((root, window));
    }

    while let Some((node, window)) = stack.pop() {
        if let Some(low) = window.low {
            assert!(node.data >= *low, "item below its lower bound");
        }
        if let Some(high) = window.high {
            if window.inclusive_high {
                assert!(node.data <= *high, "item above its upper bound");
            } else {
                assert!(node.data < *high, "item not below its upper bound");
            }
        }

        if let Some(left) = node.left() {
            let window = Window {
                low: window.low,
                high: Some(&node.data),
                inclusive_high: !strict_left,
            };
            stack.push((left, window));
        }
        if let Some(right) = node.right() {
            let window = Window {
                low: Some(&node.data),
                high: window.high,
                inclusive_high: window.inclusive_high,
            };
            stack.push((right, window));
        }
    }
}

/// Left subtrees strictly less, right subtrees greater or equal.
pub(crate) fn assert_order_invariant<T: Ord>(tree: &LinkedBst<T>) {
    check(tree, true);
}

/// Left subtrees less or equal, right subtrees greater or equal.
///
/// The weaker form that a rebuild over duplicate items produces; lookups
/// remain correct under it.
pub(crate) fn assert_search_order<T: Ord>(tree: &LinkedBst<T>) {
    check(tree, false);
}

/// Number of nodes reachable from the root.
pub(crate) fn node_count<T>(tree: &LinkedBst<T>) -> usize {
    let mut count = 0;
    let mut stack: Vec<&Node<T>> = tree.root().into_iter().collect();
    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.left());
        stack.extend(node.right());
    }
    count
}

/// Smallest `k` with `2^k >= n`.
pub(crate) fn ceil_log2(n: usize) -> u32 {
    if n <= 1 {
        0
    } else {
        usize::BITS - (n - 1).leading_zeros()
    }
}
