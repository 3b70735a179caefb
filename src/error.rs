//! Error type for fallible tree operations.

/// Errors returned by [`LinkedBst`](crate::LinkedBst) mutators.
///
/// Lookups (`find`, `contains`, `successor`, `predecessor`, `replace`)
/// report a missing item with `None`. Only `remove` treats absence as an error.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BstError {
    /// The item passed to `remove` is not stored in the tree.
    #[error("item not found in tree")]
    NotFound,
}

/// Result alias for tree operations.
pub type Result<T> = core::result::Result<T, BstError>;
