use std::{cmp::Ordering, mem};

/// In-place quicksort with the last element of each range as pivot.
///
/// Recurses into the smaller partition and loops on the larger one, so stack
/// depth stays logarithmic even when the pivot choice degrades to O(n²) work.
/// Partitions are disjoint, so this ordering of the work does not change the
/// resulting arrangement.
pub(crate) fn quicksort<T, F>(mut slice: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while slice.len() > 1 {
        let pivot = partition(slice, compare);
        let (left, right) = mem::take(&mut slice).split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, compare);
            slice = right;
        } else {
            quicksort(right, compare);
            slice = left;
        }
    }
}

/// Lomuto partition around `slice[len - 1]`. Returns the pivot's final index.
///
/// Everything before the returned index compares `<=` the pivot, everything
/// after it compares `>`.
fn partition<T, F>(slice: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let high = slice.len() - 1;
    let mut boundary = 0;

    for j in 0..high {
        if compare(&slice[j], &slice[high]) != Ordering::Greater {
            slice.swap(boundary, j);
            boundary += 1;
        }
    }

    slice.swap(boundary, high);
    boundary
}
