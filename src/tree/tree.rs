//! Main tree structure: root ownership, lookup and mutation.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::mem;

use log::trace;

use crate::collection::Collection;
use crate::error::{BstError, Result};
use crate::node::{Link, Node};

/// Ordered container backed by a linked binary search tree.
///
/// Items are placed by comparison only: smaller items to the left, greater
/// or equal items to the right. Duplicates are allowed and keep their
/// relative insertion order along right links.
///
/// # Key Features
/// - O(height) `find`, `add`, `remove`, `replace`
/// - No automatic balancing: call [`rebalance`](Self::rebalance) to rebuild
///   a minimal-height tree
/// - Every walk uses an explicit stack, so list-shaped trees built from
///   sorted input never exhaust the call stack
///
/// # Concurrency
/// Single writer, single reader. A [`PreorderIter`](crate::PreorderIter)
/// borrows the tree, so the borrow checker rules out mutation during a walk.
///
/// # Example
/// ```rust
/// use linked_bst::LinkedBst;
///
/// let mut tree = LinkedBst::new();
/// tree.add(10);
/// tree.add(5);
/// tree.add(10);
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.find(&10), Some(&10));
/// assert_eq!(tree.inorder(), vec![&5, &10, &10]);
/// ```
pub struct LinkedBst<T> {
    /// Root of the tree (`None` when empty)
    pub(super) root: Link<T>,

    /// Number of items stored; always equals the number of reachable nodes
    pub(super) size: usize,
}

impl<T> LinkedBst<T> {
    /// Create a new empty tree.
    ///
    /// # Example
    /// ```rust
    /// use linked_bst::LinkedBst;
    ///
    /// let tree = LinkedBst::<u32>::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self { root: None, size: 0 }
    }

    /// Get the number of items in the tree.
    ///
    /// Duplicates are counted individually.
    ///
    /// # Performance
    /// O(1) - returns cached value
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if the tree is empty.
    ///
    /// # Performance
    /// O(1) - checks cached length
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Read-only view of the root node, `None` when the tree is empty.
    #[inline]
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Remove every item.
    ///
    /// Nodes are released one at a time from an explicit worklist, so clearing
    /// a degenerate tree does not recurse.
    ///
    /// # Performance
    /// O(n)
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        if self.size > 0 {
            log::debug!("cleared tree of {} items", self.size);
        }
        self.size = 0;
    }

    /// Move every item out of the tree in ascending order, leaving it empty.
    pub(super) fn take_sorted(&mut self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.size);
        let mut pending: Vec<Box<Node<T>>> = Vec::new();
        let mut current = self.root.take();

        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                pending.push(node);
            }
            match pending.pop() {
                Some(node) => {
                    let Node { data, right, .. } = *node;
                    items.push(data);
                    current = right;
                }
                None => break,
            }
        }

        self.size = 0;
        items
    }
}

impl<T: Ord> LinkedBst<T> {
    /// Find an item equal to `item`.
    ///
    /// Descends from the root: left when `item` is smaller than the node,
    /// right otherwise, stopping at the first equal item.
    ///
    /// # Arguments
    /// * `item` - The item to search for
    ///
    /// # Returns
    /// * `Some(&stored)` - the matched item as stored in the tree
    /// * `None` - no equal item exists
    ///
    /// # Performance
    /// O(height)
    ///
    /// # Example
    /// ```rust
    /// use linked_bst::LinkedBst;
    ///
    /// let tree: LinkedBst<u32> = [20, 10, 30].into_iter().collect();
    /// assert_eq!(tree.find(&10), Some(&10));
    /// assert_eq!(tree.find(&15), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match item.cmp(&node.data) {
                Ordering::Equal => return Some(&node.data),
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
            }
        }
        None
    }

    /// Check if an item equal to `item` is stored.
    ///
    /// # Example
    /// ```rust
    /// use linked_bst::LinkedBst;
    ///
    /// let mut tree = LinkedBst::new();
    /// assert!(!tree.contains(&42));
    /// tree.add(42);
    /// assert!(tree.contains(&42));
    /// ```
    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }

    /// Add an item to the tree.
    ///
    /// Walks down from the root, going right whenever the node is less than
    /// or equal to `item` and left otherwise, and attaches a new leaf at the
    /// first empty link. Equal items always land to the right of existing ones.
    ///
    /// # Performance
    /// O(height) - no rebalancing is performed
    ///
    /// # Example
    /// ```rust
    /// use linked_bst::LinkedBst;
    ///
    /// let mut tree = LinkedBst::new();
    /// tree.add(2);
    /// tree.add(1);
    /// tree.add(2);
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.inorder(), vec![&1, &2, &2]);
    /// ```
    pub fn add(&mut self, item: T) {
        let mut slot = &mut self.root;
        let mut depth = 0usize;
        while let Some(node) = slot {
            slot = if node.data <= item {
                &mut node.right
            } else {
                &mut node.left
            };
            depth += 1;
        }
        *slot = Some(Box::new(Node::new(item)));
        self.size += 1;
        trace!("attached leaf at depth {}", depth);
    }

    /// Remove one item equal to `item` and return the stored value.
    ///
    /// The first equal node on the search path is removed:
    /// - two children: the node takes the maximum of its left subtree, and
    ///   that maximum node is spliced out of the left subtree
    /// - no left child: the right subtree takes the node's place
    /// - no right child: the left subtree takes the node's place
    ///
    /// With duplicate keys the promoted maximum can end up with an equal item
    /// in its left subtree. Lookups still find every stored item.
    ///
    /// Root removal needs no special case because the walk works on the link
    /// slot that owns the node, starting with the root slot itself.
    ///
    /// # Errors
    /// [`BstError::NotFound`] if no equal item is stored. The tree is unchanged.
    ///
    /// # Performance
    /// O(height)
    ///
    /// # Example
    /// ```rust
    /// use linked_bst::{BstError, LinkedBst};
    ///
    /// let mut tree: LinkedBst<u32> = [5, 3, 8].into_iter().collect();
    /// assert_eq!(tree.remove(&5), Ok(5));
    /// assert_eq!(tree.remove(&5), Err(BstError::NotFound));
    /// assert_eq!(tree.inorder(), vec![&3, &8]);
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<T> {
        let slot = Self::locate(&mut self.root, item);
        let mut node = slot.take().ok_or(BstError::NotFound)?;

        let removed = match (node.left.take(), node.right.take()) {
            (Some(left), Some(right)) => {
                let (promoted, rest) = detach_max(left);
                trace!("promoted left-subtree maximum into removed slot");
                node.left = rest;
                node.right = Some(right);
                let data = mem::replace(&mut node.data, promoted);
                *slot = Some(node);
                data
            }
            (left, right) => {
                trace!("spliced single-child node");
                *slot = left.or(right);
                let Node { data, .. } = *node;
                data
            }
        };

        self.size -= 1;
        Ok(removed)
    }

    /// Overwrite the first item equal to `item` with `new_item`.
    ///
    /// The search follows the ordering comparison and the value is swapped
    /// in place. The tree is not restructured and the ordering invariant is
    /// not re-checked: callers must make sure `new_item` still belongs at
    /// that position, otherwise later lookups may miss items.
    ///
    /// # Returns
    /// * `Some(old)` - the previously stored item
    /// * `None` - no equal item exists; `new_item` is dropped
    ///
    /// # Example
    /// ```rust
    /// use linked_bst::LinkedBst;
    ///
    /// let mut tree: LinkedBst<u32> = [20, 10, 30].into_iter().collect();
    /// assert_eq!(tree.replace(&10, 11), Some(10));
    /// assert_eq!(tree.find(&11), Some(&11));
    /// assert_eq!(tree.replace(&99, 100), None);
    /// ```
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T> {
        let mut current = &mut self.root;
        while let Some(node) = current {
            match item.cmp(&node.data) {
                Ordering::Equal => return Some(mem::replace(&mut node.data, new_item)),
                Ordering::Less => current = &mut node.left,
                Ordering::Greater => current = &mut node.right,
            }
        }
        None
    }

    /// Link slot owning the first node equal to `item`, or the empty slot
    /// where the search ends.
    fn locate<'a>(mut slot: &'a mut Link<T>, item: &T) -> &'a mut Link<T> {
        loop {
            let go_left = match slot.as_deref() {
                Some(node) if *item < node.data => true,
                Some(node) if *item > node.data => false,
                _ => return slot,
            };
            let node = slot.as_mut().expect("slot checked non-empty above");
            slot = if go_left { &mut node.left } else { &mut node.right };
        }
    }
}

/// Unlink the maximum node of `subtree` and return its item together with
/// what remains of the subtree.
///
/// The maximum sits at the end of the right spine and has no right child, so
/// its left subtree (possibly empty) takes its place.
fn detach_max<T>(subtree: Box<Node<T>>) -> (T, Link<T>) {
    let mut spine = Vec::new();
    let mut current = subtree;
    while let Some(right) = current.right.take() {
        spine.push(current);
        current = right;
    }

    let Node { data, left, .. } = *current;
    let mut rest = left;
    while let Some(mut parent) = spine.pop() {
        parent.right = rest;
        rest = Some(parent);
    }
    (data, rest)
}

impl<T> Default for LinkedBst<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedBst<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedBst<T> {
    /// Structure-preserving copy, built bottom-up without recursion.
    fn clone(&self) -> Self {
        // Reverse of (node, right, left) is a post-order walk.
        let mut order: Vec<&Node<T>> = Vec::with_capacity(self.size);
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(node.left());
            stack.extend(node.right());
        }

        let mut built: Vec<Box<Node<T>>> = Vec::new();
        for node in order.into_iter().rev() {
            let right = if node.right.is_some() { built.pop() } else { None };
            let left = if node.left.is_some() { built.pop() } else { None };
            built.push(Box::new(Node::with_children(node.data.clone(), left, right)));
        }

        Self {
            root: built.pop(),
            size: self.size,
        }
    }
}

impl<T: Ord> PartialEq for LinkedBst<T> {
    /// Trees are equal when they hold the same items, regardless of shape.
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.inorder() == other.inorder()
    }
}

impl<T: Ord> Eq for LinkedBst<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedBst<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

impl<T: Ord> Collection<T> for LinkedBst<T> {
    #[inline]
    fn len(&self) -> usize {
        self.size
    }

    #[inline]
    fn add(&mut self, item: T) {
        LinkedBst::add(self, item);
    }
}

impl<T: Ord> FromIterator<T> for LinkedBst<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.add_all(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for LinkedBst<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}
