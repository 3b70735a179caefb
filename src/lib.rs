//! # linked-bst
//!
//! Ordered container backed by a linked binary search tree.
//! Duplicate keys allowed. Balance restored on demand.
//!
//! ## Features
//! - O(height) add, find, remove, replace
//! - Successor, predecessor and open-interval range queries
//! - Height and balance diagnostics
//! - Minimal-height rebuild via [`LinkedBst::rebalance`]
//! - Stack-safe: no traversal recurses on the call stack
//! - no_std compatible (requires alloc)
//!
//! ## Example
//! ```rust
//! use linked_bst::LinkedBst;
//!
//! let mut tree: LinkedBst<u32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//! assert_eq!(tree.inorder(), vec![&1, &3, &4, &5, &7, &8, &9]);
//!
//! tree.remove(&5).unwrap();
//! assert_eq!(tree.successor(&4, true), Some(&7));
//! assert_eq!(tree.range_find(&3, &8), vec![&4, &7]);
//! ```

#![no_std]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

mod collection;
mod error;
mod node;
mod tree;

pub use collection::Collection;
pub use error::{BstError, Result};
pub use node::{Link, Node};
pub use tree::{LinkedBst, PreorderIter};
