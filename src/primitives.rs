//! Quadratic and heap-based sorts.
//!
//! These never recurse into the other families. They are the base cases (insertion sort,
//! binary-insertion sort) and the worst-case safety valve (heap sort) of the hybrid sorters,
//! and are also usable on their own through [`InsertionSorter`], [`BinaryInsertionSorter`]
//! and [`HeapSorter`].

use crate::core::{Sortable, Sorter, check_range};
use crate::error::SortError;
use std::cmp::Ordering;

/// Stable insertion sort of `[from, to)`.
pub(crate) fn insertion_sort<S: Sortable + ?Sized>(s: &mut S, from: usize, to: usize) {
    for i in from + 1..to {
        let mut j = i;
        while j > from && s.compare(j - 1, j) == Ordering::Greater {
            s.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Stable binary-insertion sort of `[from, to)` where `[from, sorted_to)` is already sorted.
///
/// The insertion point is the upper bound of the new element in the sorted prefix, so equal
/// elements keep their order.
pub(crate) fn binary_insertion_sort<S: Sortable + ?Sized>(
    s: &mut S,
    from: usize,
    to: usize,
    sorted_to: usize,
) {
    debug_assert!(from <= sorted_to && sorted_to <= to);
    for i in sorted_to.max(from + 1)..to {
        let mut lo = from;
        let mut hi = i;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if s.compare(i, mid) == Ordering::Less {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        for j in (lo..i).rev() {
            s.swap(j, j + 1);
        }
    }
}

/// Heap sort of `[from, to)`. Not stable.
pub(crate) fn heap_sort<S: Sortable + ?Sized>(s: &mut S, from: usize, to: usize) {
    if to - from <= 1 {
        return;
    }
    // Max-heap rooted at `from`, children of `i` at `from + 2 * (i - from) + 1` and `+ 2`.
    for i in (from..from + (to - from) / 2).rev() {
        sift_down(s, i, from, to);
    }
    for end in (from + 1..to).rev() {
        s.swap(from, end);
        sift_down(s, from, from, end);
    }
}

fn sift_down<S: Sortable + ?Sized>(s: &mut S, mut i: usize, from: usize, to: usize) {
    loop {
        let left = from + 2 * (i - from) + 1;
        if left >= to {
            break;
        }
        let right = left + 1;
        let child = if right < to && s.compare(left, right) == Ordering::Less {
            right
        } else {
            left
        };
        if s.compare(i, child) != Ordering::Less {
            break;
        }
        s.swap(i, child);
        i = child;
    }
}

/// Reverses `[from, to)` with swaps.
pub(crate) fn reverse<S: Sortable + ?Sized>(s: &mut S, from: usize, to: usize) {
    if to - from <= 1 {
        return;
    }
    let (mut lo, mut hi) = (from, to - 1);
    while lo < hi {
        s.swap(lo, hi);
        lo += 1;
        hi -= 1;
    }
}

/// Returns `true` if `[from, to)` is non-decreasing. Only compares.
pub(crate) fn is_sorted<S: Sortable + ?Sized>(s: &mut S, from: usize, to: usize) -> bool {
    (from + 1..to).all(|i| s.compare(i - 1, i) != Ordering::Greater)
}

macro_rules! primitive_sorter {
    ($(#[$doc:meta])* $name:ident, $label:literal, |$s:ident, $from:ident, $to:ident| $body:expr) => {
        $(#[$doc])*
        pub struct $name<S> {
            slots: S,
        }

        impl<S: Sortable> $name<S> {
            /// Wraps `slots`.
            pub fn new(slots: S) -> Self {
                Self { slots }
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

        impl<S: Sortable> Sorter for $name<S> {
            fn sort(&mut self, $from: usize, $to: usize) -> Result<(), SortError> {
                check_range($from, $to)?;
                if $to - $from <= 1 {
                    return Ok(());
                }
                log::debug!(concat!($label, " [{}, {})"), $from, $to);
                let $s = &mut self.slots;
                $body;
                Ok(())
            }
        }
    };
}

primitive_sorter!(
    /// Insertion sort. Stable, best on small or almost sorted ranges.
    InsertionSorter,
    "insertion sort",
    |s, from, to| insertion_sort(s, from, to)
);

primitive_sorter!(
    /// Binary-insertion sort. Stable, fewer comparisons than [`InsertionSorter`] on longer
    /// ranges for the same number of swaps.
    BinaryInsertionSorter,
    "binary insertion sort",
    |s, from, to| binary_insertion_sort(s, from, to, from)
);

primitive_sorter!(
    /// Heap sort. Not stable, O(n log n) worst case.
    ///
    /// Sorted input is detected up front and left untouched.
    HeapSorter,
    "heap sort",
    |s, from, to| {
        if !is_sorted(s, from, to) {
            heap_sort(s, from, to)
        }
    }
);
