//! Introsort: quicksort with a recursion depth limit.
//!
//! Median-of-three pivot, Hoare-style partition against a cached pivot, insertion sort below
//! [`THRESHOLD`]. When the depth limit is hit the remaining range is handed to a
//! [`DepthFallback`], which bounds the worst case at O(n log n) (heap sort) or O(n log² n)
//! (in-place merge sort).

use crate::core::{PivotSortable, Sorter, THRESHOLD, check_range};
use crate::error::SortError;
use crate::merge::merge_sort_in_place;
use crate::primitives::{heap_sort, insertion_sort, is_sorted};
use std::cmp::Ordering;

/// What introsort does with a range once its depth budget is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DepthFallback {
    /// Heap sort, with a depth limit of `ceil(log2(len))`.
    #[default]
    HeapSort,
    /// In-place merge sort, with a depth limit of `2 * bit_length(len)`.
    MergeSortInPlace,
}

impl DepthFallback {
    /// Depth budget for a range of `len` elements.
    pub fn max_depth(self, len: usize) -> u32 {
        match self {
            DepthFallback::HeapSort => ceil_log2(len),
            DepthFallback::MergeSortInPlace => (usize::BITS - len.leading_zeros()) * 2,
        }
    }
}

fn ceil_log2(n: usize) -> u32 {
    if n <= 1 {
        0
    } else {
        usize::BITS - (n - 1).leading_zeros()
    }
}

/// Introsort. Not stable.
///
/// Sorted input is detected up front and left untouched.
///
/// # Examples
///
/// ```
/// use slotsort::prelude::*;
///
/// let mut data: Vec<u32> = (0..100).rev().collect();
/// let mut sorter = IntroSorter::new(SliceSlots::new(&mut data));
/// sorter.sort(0, 100).unwrap();
/// drop(sorter);
///
/// assert!(data.windows(2).all(|w| w[0] <= w[1]));
/// ```
pub struct IntroSorter<S> {
    slots: S,
    fallback: DepthFallback,
}

impl<S: PivotSortable> IntroSorter<S> {
    /// Introsort falling back to heap sort.
    pub fn new(slots: S) -> Self {
        Self::with_fallback(slots, DepthFallback::HeapSort)
    }

    /// Introsort with an explicit [`DepthFallback`].
    pub fn with_fallback(slots: S, fallback: DepthFallback) -> Self {
        Self { slots, fallback }
    }

    fn sort_unchecked(&mut self, from: usize, to: usize) {
        if is_sorted(&mut self.slots, from, to) {
            return;
        }
        let max_depth = self.fallback.max_depth(to - from);
        quicksort(&mut self.slots, from, to, max_depth, self.fallback);
    }
}

impl<S> IntroSorter<S> {
    /// The configured depth fallback.
    pub fn fallback(&self) -> DepthFallback {
        self.fallback
    }

    /// Returns the wrapped storage.
    pub fn slots(&self) -> &S {
        &self.slots
    }

    /// Returns the wrapped storage mutably.
    pub fn slots_mut(&mut self) -> &mut S {
        &mut self.slots
    }

    /// Unwraps the storage.
    pub fn into_inner(self) -> S {
        self.slots
    }
}

impl<S: PivotSortable> Sorter for IntroSorter<S> {
    fn sort(&mut self, from: usize, to: usize) -> Result<(), SortError> {
        check_range(from, to)?;
        if to - from <= 1 {
            return Ok(());
        }
        log::debug!("introsort ({:?}) [{}, {})", self.fallback, from, to);
        self.sort_unchecked(from, to);
        Ok(())
    }
}

fn quicksort<S: PivotSortable + ?Sized>(
    s: &mut S,
    from: usize,
    to: usize,
    max_depth: u32,
    fallback: DepthFallback,
) {
    if to - from < THRESHOLD {
        insertion_sort(s, from, to);
        return;
    }
    if max_depth == 0 {
        log::trace!("depth limit reached, {:?} on [{}, {})", fallback, from, to);
        match fallback {
            DepthFallback::HeapSort => heap_sort(s, from, to),
            DepthFallback::MergeSortInPlace => merge_sort_in_place(s, from, to),
        }
        return;
    }

    let left = partition(s, from, to);
    quicksort(s, from, left + 1, max_depth - 1, fallback);
    quicksort(s, left + 1, to, max_depth - 1, fallback);
}

/// Partitions `[from, to)` around the median of its first, middle and last elements.
///
/// Returns `left` such that `[from, left]` holds elements not greater than the pivot and
/// `[left + 1, to)` holds elements not smaller than it. Both sides are non-empty.
fn partition<S: PivotSortable + ?Sized>(s: &mut S, from: usize, to: usize) -> usize {
    let mid = from + (to - from) / 2;
    if s.compare(from, mid) == Ordering::Greater {
        s.swap(from, mid);
    }
    if s.compare(mid, to - 1) == Ordering::Greater {
        s.swap(mid, to - 1);
        if s.compare(from, mid) == Ordering::Greater {
            s.swap(from, mid);
        }
    }

    // a[from] <= pivot <= a[to - 1], so neither scan can leave the range.
    let mut left = from + 1;
    let mut right = to - 2;
    s.set_pivot(mid);
    loop {
        while s.compare_pivot(right) == Ordering::Less {
            right -= 1;
        }
        while left < right && s.compare_pivot(left) != Ordering::Less {
            left += 1;
        }
        if left < right {
            s.swap(left, right);
            right -= 1;
        } else {
            break;
        }
    }
    left
}
