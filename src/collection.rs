//! Size, emptiness and bulk-insert capability shared by collections.

/// Minimal collection capability.
///
/// Implementors supply `len` and `add`; `is_empty` and `add_all` come for free.
pub trait Collection<T> {
    /// Number of stored items.
    fn len(&self) -> usize;

    /// Insert a single item.
    fn add(&mut self, item: T);

    /// `true` if no items are stored.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert every item of `items`, in iteration order, via [`Collection::add`].
    fn add_all<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        for item in items {
            self.add(item);
        }
    }
}
