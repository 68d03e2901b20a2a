//! Slice entry points.
//!
//! Each function binds the slice to a [`SliceSlots`] and runs one sorter over the whole
//! slice. Use the sorters directly to sort a sub-range, to bound scratch memory, or to sort
//! storage that is not a slice.

use crate::core::Sorter;
use crate::introsort::IntroSorter;
use crate::merge::{InPlaceMergeSorter, MergeSorter};
use crate::primitives::{HeapSorter, InsertionSorter};
use crate::slice::SliceSlots;
use crate::timsort::TimSorter;
use std::cmp::Ordering;

/// Sorts `data` with TimSort. Stable.
///
/// # Examples
///
/// ```
/// use slotsort::timsort;
///
/// let mut data = vec!["banana", "apple", "cherry", "date"];
/// timsort(&mut data);
///
/// assert_eq!(data, vec!["apple", "banana", "cherry", "date"]);
/// ```
pub fn timsort<T: Ord + Clone>(data: &mut [T]) {
    timsort_by(data, T::cmp)
}

/// Sorts `data` with TimSort according to `compare`. Stable.
pub fn timsort_by<T, F>(data: &mut [T], compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    sort_all(TimSorter::new(SliceSlots::with_comparator(data, compare)), len);
}

/// Sorts `data` with introsort. Not stable.
///
/// # Examples
///
/// ```
/// use slotsort::introsort;
///
/// let mut data = vec![3, 1, 2];
/// introsort(&mut data);
///
/// assert_eq!(data, vec![1, 2, 3]);
/// ```
pub fn introsort<T: Ord + Clone>(data: &mut [T]) {
    introsort_by(data, T::cmp)
}

/// Sorts `data` with introsort according to `compare`. Not stable.
pub fn introsort_by<T, F>(data: &mut [T], compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    sort_all(IntroSorter::new(SliceSlots::with_comparator(data, compare)), len);
}

/// Sorts `data` with merge sort, using scratch memory as large as `data`. Stable.
pub fn merge_sort<T: Ord + Clone>(data: &mut [T]) {
    merge_sort_by(data, T::cmp)
}

/// Sorts `data` with merge sort according to `compare`. Stable.
pub fn merge_sort_by<T, F>(data: &mut [T], compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    sort_all(MergeSorter::new(SliceSlots::with_comparator(data, compare)), len);
}

/// Sorts `data` with merge sort without any scratch memory. Stable, no `Clone` needed.
///
/// # Examples
///
/// ```
/// use slotsort::merge_sort_in_place;
///
/// let mut data = vec![String::from("b"), String::from("a")];
/// merge_sort_in_place(&mut data);
///
/// assert_eq!(data, vec!["a", "b"]);
/// ```
pub fn merge_sort_in_place<T: Ord>(data: &mut [T]) {
    let len = data.len();
    sort_all(InPlaceMergeSorter::new(SliceSlots::new(data)), len);
}

/// Sorts `data` with heap sort. Not stable, no `Clone` needed.
pub fn heap_sort<T: Ord>(data: &mut [T]) {
    let len = data.len();
    sort_all(HeapSorter::new(SliceSlots::new(data)), len);
}

/// Sorts `data` with insertion sort. Stable, quadratic; meant for short or nearly sorted
/// slices.
pub fn insertion_sort<T: Ord>(data: &mut [T]) {
    let len = data.len();
    sort_all(InsertionSorter::new(SliceSlots::new(data)), len);
}

fn sort_all<S: Sorter>(mut sorter: S, len: usize) {
    if let Err(err) = sorter.sort(0, len) {
        unreachable!("sorting a whole slice failed: {}", err);
    }
}
