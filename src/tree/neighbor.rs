//! Successor, predecessor and range queries.
//!
//! All three work on the materialized in-order sequence, so each call is
//! O(n) regardless of tree shape.

use alloc::vec::Vec;

use crate::tree::LinkedBst;

impl<T: Ord> LinkedBst<T> {
    /// Find the smallest stored item above `item`.
    ///
    /// Scans the sorted items from largest to smallest, keeping the last one
    /// still past the boundary and stopping at the first one that is not.
    ///
    /// # Arguments
    /// * `item` - Query value (need not be stored)
    /// * `strict` - `true` for `> item`, `false` for `>= item`
    ///
    /// # Returns
    /// Matching stored item, or `None` if every item is below the boundary
    ///
    /// # Example
    /// ```rust
    /// use linked_bst::LinkedBst;
    ///
    /// let tree: LinkedBst<u32> = [1, 3, 4, 7, 8, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&4, true), Some(&7));
    /// assert_eq!(tree.successor(&4, false), Some(&4));
    /// assert_eq!(tree.successor(&9, true), None);
    /// ```
    pub fn successor(&self, item: &T, strict: bool) -> Option<&T> {
        let mut candidate = None;
        for elem in self.inorder().into_iter().rev() {
            let beyond = if strict { elem > item } else { elem >= item };
            if !beyond {
                break;
            }
            candidate = Some(elem);
        }
        candidate
    }

    /// Find the largest stored item below `item`.
    ///
    /// Mirror image of [`successor`](Self::successor): ascending scan,
    /// `strict` selects `< item` over `<= item`.
    ///
    /// # Example
    /// ```rust
    /// use linked_bst::LinkedBst;
    ///
    /// let tree: LinkedBst<u32> = [1, 3, 4, 7, 8, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.predecessor(&4, true), Some(&3));
    /// assert_eq!(tree.predecessor(&4, false), Some(&4));
    /// assert_eq!(tree.predecessor(&1, true), None);
    /// ```
    pub fn predecessor(&self, item: &T, strict: bool) -> Option<&T> {
        let mut candidate = None;
        for elem in self.inorder() {
            let beyond = if strict { elem < item } else { elem <= item };
            if !beyond {
                break;
            }
            candidate = Some(elem);
        }
        candidate
    }

    /// Items strictly between `low` and `high`, ascending.
    ///
    /// The slice runs from the strict successor of `low` to the strict
    /// predecessor of `high`, so both bounds are excluded: this is the open
    /// interval `(low, high)`, not `low..=high`. Every duplicate of the
    /// boundary items is included: the slice ends at the last occurrence of
    /// the upper neighbor, not at its first, so no item strictly inside the
    /// interval is dropped.
    ///
    /// ```rust
    /// use linked_bst::LinkedBst;
    ///
    /// let tree: LinkedBst<u32> = [1, 5, 5, 5, 9].into_iter().collect();
    /// assert_eq!(tree.range_find(&1, &9), vec![&5, &5, &5]);
    /// ```
    ///
    /// # Returns
    /// Empty when either neighbor is missing or the interval holds no items
    /// (including `low >= high`).
    ///
    /// # Example
    /// ```rust
    /// use linked_bst::LinkedBst;
    ///
    /// let tree: LinkedBst<u32> = [1, 3, 4, 7, 8, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.range_find(&3, &8), vec![&4, &7]);
    /// assert_eq!(tree.range_find(&0, &100), tree.inorder());
    /// assert!(tree.range_find(&8, &3).is_empty());
    /// ```
    pub fn range_find(&self, low: &T, high: &T) -> Vec<&T> {
        let (Some(min_item), Some(max_item)) =
            (self.successor(low, true), self.predecessor(high, true))
        else {
            return Vec::new();
        };

        let mut items = self.inorder();
        let start = items.partition_point(|elem| *elem < min_item);
        let end = items.partition_point(|elem| *elem <= max_item);
        if start >= end {
            return Vec::new();
        }

        items.truncate(end);
        items.drain(..start);
        items
    }
}
