use std::{
    cmp::Ordering,
    fmt,
    mem::{self, MaybeUninit},
    ptr, slice,
};

use log::debug;

use crate::{
    List, ListIndex, Result,
    index::{check_capacity, check_index, check_position},
    sort::quicksort,
};

/// Slot count of a freshly created or cleared array.
pub const DEFAULT_CAPACITY: usize = 10;

/// Growable array backed by a single contiguous block of slots.
///
/// Slots `[0, len)` hold live elements, slots `[len, capacity)` are
/// uninitialized. The block grows by half its size (or to the required size,
/// whichever is larger) when an insertion would not fit, and is never shrunk
/// except by [`List::clear`], which swaps in a fresh block of
/// [`DEFAULT_CAPACITY`] slots.
pub struct DynamicArray<T> {
    storage: Box<[MaybeUninit<T>]>,
    len: usize,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self {
            storage: Self::allocate(DEFAULT_CAPACITY),
            len: 0,
        }
    }

    /// Creates an empty array with exactly `capacity` slots.
    ///
    /// Fails with [`InvalidArgument`](crate::Error::InvalidArgument) when
    /// `capacity` is zero or negative.
    pub fn with_capacity(capacity: impl ListIndex) -> Result<Self> {
        let capacity = check_capacity(capacity)?;
        Ok(Self {
            storage: Self::allocate(capacity),
            len: 0,
        })
    }

    /// Number of allocated slots, always `>= len()`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots [0, len) are initialized.
        unsafe { slice::from_raw_parts(self.storage.as_ptr().cast::<T>(), self.len) }
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: slots [0, len) are initialized.
        unsafe { slice::from_raw_parts_mut(self.storage.as_mut_ptr().cast::<T>(), self.len) }
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: impl ListIndex) -> Result<&mut T> {
        let index = check_index(index, self.len)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    fn allocate(capacity: usize) -> Box<[MaybeUninit<T>]> {
        Box::new_uninit_slice(capacity)
    }

    /// Makes room for at least `min_capacity` elements.
    fn grow(&mut self, min_capacity: usize) {
        let old_capacity = self.capacity();
        if min_capacity <= old_capacity {
            return;
        }

        let mut new_capacity = old_capacity + (old_capacity >> 1);
        if new_capacity < min_capacity {
            new_capacity = min_capacity;
        }

        let mut storage = Self::allocate(new_capacity);
        // SAFETY: both blocks hold at least `len` slots and are distinct
        // allocations. The old block is freed without dropping its slots, so
        // every moved element keeps exactly one owner.
        unsafe {
            ptr::copy_nonoverlapping(self.storage.as_ptr(), storage.as_mut_ptr(), self.len);
        }
        self.storage = storage;

        debug!("Grew storage from {old_capacity} to {new_capacity} slots.");
    }

    /// Writes `element` into the first free slot. Capacity must already fit it.
    #[inline]
    fn write_next(&mut self, element: T) {
        self.storage[self.len].write(element);
        self.len += 1;
    }
}

impl<T> List<T> for DynamicArray<T> {
    fn add(&mut self, element: T) {
        self.grow(self.len + 1);
        self.write_next(element);
    }

    fn add_at(&mut self, index: impl ListIndex, element: T) -> Result<()> {
        let index = check_position(index, self.len)?;
        self.grow(self.len + 1);

        // SAFETY: capacity > len, so shifting [index, len) right by one stays
        // inside the block. The slot at `index` is then overwritten without
        // dropping, as its previous value now lives at `index + 1`.
        unsafe {
            let slot = self.storage.as_mut_ptr().cast::<T>().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            ptr::write(slot, element);
        }
        self.len += 1;

        Ok(())
    }

    fn add_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        let batch: Vec<T> = elements.into_iter().collect();
        if batch.is_empty() {
            return;
        }

        self.grow(self.len + batch.len());
        for element in batch {
            self.write_next(element);
        }
    }

    fn get(&self, index: impl ListIndex) -> Result<&T> {
        let index = check_index(index, self.len)?;
        Ok(&self.as_slice()[index])
    }

    fn remove(&mut self, index: impl ListIndex) -> Result<T> {
        let index = check_index(index, self.len)?;

        // SAFETY: index < len. The element is moved out, then (index, len) is
        // shifted left over it, leaving slot len - 1 logically uninitialized.
        let removed = unsafe {
            let slot = self.storage.as_mut_ptr().cast::<T>().add(index);
            let removed = ptr::read(slot);
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            removed
        };
        self.len -= 1;

        Ok(removed)
    }

    fn set(&mut self, index: impl ListIndex, element: T) -> Result<()> {
        let index = check_index(index, self.len)?;
        self.as_mut_slice()[index] = element;
        Ok(())
    }

    fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|candidate| element == candidate)
    }

    fn clear(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        let mut storage = mem::replace(&mut self.storage, Self::allocate(DEFAULT_CAPACITY));

        debug!(
            "Cleared {len} elements, capacity reset from {} to {DEFAULT_CAPACITY}.",
            storage.len()
        );

        // SAFETY: the first `len` slots of the detached block were live and are
        // no longer reachable through `self`.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                storage.as_mut_ptr().cast::<T>(),
                len,
            ));
        }
    }

    fn sort<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        quicksort(self.as_mut_slice(), &mut compare);
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        // SAFETY: slots [0, len) are initialized and dropped exactly once here.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    /// Clones the elements into a block of the same capacity.
    fn clone(&self) -> Self {
        let mut clone = Self {
            storage: Self::allocate(self.capacity()),
            len: 0,
        };
        for element in self {
            clone.write_next(element.clone());
        }
        clone
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    /// Element-wise comparison, capacity is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.add_all(iter);
        array
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
