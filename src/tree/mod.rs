//! Linked binary search tree and its query engines.

mod balance;
mod display;
mod iter;
mod neighbor;
#[allow(clippy::module_inception)]
mod tree;

pub use iter::PreorderIter;
pub use tree::LinkedBst;

#[cfg(test)]
pub(crate) mod test_utils;

#[cfg(test)]
mod proptests;
