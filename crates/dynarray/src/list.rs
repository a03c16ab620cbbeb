use std::cmp::Ordering;

use crate::{ListIndex, Result};

/// Ordered, index-addressable sequence of `T`.
///
/// Positional operations validate their index before touching any element,
/// so a failed call leaves the list unchanged.
pub trait List<T> {
    /// Appends `element` at the end.
    fn add(&mut self, element: T);

    /// Inserts `element` at `index`, shifting the elements from `index` on one
    /// position to the right.
    ///
    /// Fails with [`IndexOutOfRange`](crate::Error::IndexOutOfRange) unless
    /// `0 <= index <= len()`.
    fn add_at(&mut self, index: impl ListIndex, element: T) -> Result<()>;

    /// Appends every element of `elements` in iteration order.
    fn add_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>;

    /// Returns the element at `index`.
    ///
    /// Fails with [`IndexOutOfRange`](crate::Error::IndexOutOfRange) unless
    /// `0 <= index < len()`.
    fn get(&self, index: impl ListIndex) -> Result<&T>;

    /// Removes and returns the element at `index`, shifting the elements after
    /// it one position to the left.
    fn remove(&mut self, index: impl ListIndex) -> Result<T>;

    /// Replaces the element at `index`, dropping the previous one.
    fn set(&mut self, index: impl ListIndex, element: T) -> Result<()>;

    /// Returns true if any element equals `element`.
    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq;

    /// Removes all elements.
    fn clear(&mut self);

    /// Sorts the elements in place with `compare`. Not stable.
    fn sort<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
