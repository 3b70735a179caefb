//! Tree vertex with exclusively owned child links.

use alloc::boxed::Box;

/// Optional owned subtree.
///
/// `None` means "no subtree". There is no sentinel node for missing children.
pub type Link<T> = Option<Box<Node<T>>>;

/// A single tree vertex.
///
/// Holds one item and owns its two subtrees. There are no parent pointers,
/// so the structure is a strict tree with no cycles.
///
/// # Ordering
/// Every item in `left` is strictly less than `data`; every item in `right`
/// is greater than or equal to `data`. Equal items therefore chain along
/// right links in insertion order.
#[derive(Debug)]
pub struct Node<T> {
    /// Stored item.
    pub data: T,

    /// Subtree of items strictly less than `data`.
    pub left: Link<T>,

    /// Subtree of items greater than or equal to `data`.
    pub right: Link<T>,
}

impl<T> Node<T> {
    /// Create a leaf holding `data`.
    #[inline]
    pub fn new(data: T) -> Self {
        Node {
            data,
            left: None,
            right: None,
        }
    }

    /// Create a node with the given subtrees.
    #[inline]
    pub fn with_children(data: T, left: Link<T>, right: Link<T>) -> Self {
        Node { data, left, right }
    }

    /// Left child, if any.
    #[inline]
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// Right child, if any.
    #[inline]
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// `true` if the node has neither child.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
