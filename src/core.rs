//! Core traits and types for slotsort.
//!
//! This module defines:
//! - [`Sortable`]: The compare/swap contract every algorithm is written against.
//! - [`PivotSortable`]: Pivot caching used by the quicksort family.
//! - [`ScratchSortable`]: Scratch save/restore/copy used by the merge-based families.
//! - [`Sorter`]: The single operation a sorter exposes to callers.

use crate::error::SortError;
use std::cmp::Ordering;

/// Ranges shorter than this are insertion sorted by introsort and merge sort.
pub const THRESHOLD: usize = 20;

/// Random access to the positions of a sequence, by index only.
///
/// Algorithms never see the elements. They ask the implementor to compare two positions
/// and to exchange them, which lets one algorithm sort plain slices, parallel arrays or any
/// other randomly addressable storage.
///
/// # Examples
///
/// Sorting two parallel vectors by the first one:
///
/// ```
/// use slotsort::core::{Sortable, Sorter};
/// use slotsort::primitives::InsertionSorter;
/// use std::cmp::Ordering;
///
/// struct Columns {
///     keys: Vec<u32>,
///     names: Vec<&'static str>,
/// }
///
/// impl Sortable for Columns {
///     fn compare(&mut self, i: usize, j: usize) -> Ordering {
///         self.keys[i].cmp(&self.keys[j])
///     }
///
///     fn swap(&mut self, i: usize, j: usize) {
///         self.keys.swap(i, j);
///         self.names.swap(i, j);
///     }
/// }
///
/// let columns = Columns { keys: vec![3, 1, 2], names: vec!["c", "a", "b"] };
/// let mut sorter = InsertionSorter::new(columns);
/// sorter.sort(0, 3).unwrap();
///
/// assert_eq!(sorter.into_inner().names, vec!["a", "b", "c"]);
/// ```
pub trait Sortable {
    /// Compares the elements at positions `i` and `j`.
    fn compare(&mut self, i: usize, j: usize) -> Ordering;

    /// Exchanges the elements at positions `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);
}

/// A [`Sortable`] that can remember one element as the partitioning pivot.
///
/// The pivot is a copy of the value, so it stays valid while partitioning swaps the
/// position it was read from.
pub trait PivotSortable: Sortable {
    /// Caches the element currently at position `i` as the pivot.
    fn set_pivot(&mut self, i: usize);

    /// Compares the cached pivot with the element at position `j`.
    fn compare_pivot(&mut self, j: usize) -> Ordering;
}

/// A [`Sortable`] owning a private scratch area used by merges.
///
/// Within a merge step slots are written in increasing order starting from `0`, and a slot
/// is only read back after it was saved in that same step.
pub trait ScratchSortable: Sortable {
    /// Ensures the scratch area can hold at least `n` slots.
    ///
    /// Implementations should grow geometrically so that repeated requests stay amortized.
    fn require_capacity(&mut self, n: usize);

    /// Copies the element at position `src` into scratch slot `slot`.
    fn save(&mut self, src: usize, slot: usize);

    /// Copies scratch slot `slot` into position `dest`.
    fn restore(&mut self, slot: usize, dest: usize);

    /// Copies the element at position `src` into position `dest`.
    fn copy(&mut self, src: usize, dest: usize);

    /// Compares the scratch slots `a` and `b`.
    fn compare_saved(&mut self, a: usize, b: usize) -> Ordering;

    /// Compares scratch slot `slot` with the element at position `j`.
    fn compare_saved_with(&mut self, slot: usize, j: usize) -> Ordering;
}

/// A sort algorithm bound to its storage.
pub trait Sorter {
    /// Sorts the positions `from` (inclusive) to `to` (exclusive).
    ///
    /// Positions outside the range are never touched.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::InvalidRange`] when `to < from`.
    fn sort(&mut self, from: usize, to: usize) -> Result<(), SortError>;
}

/// Rejects reversed ranges.
pub fn check_range(from: usize, to: usize) -> Result<(), SortError> {
    if to < from {
        return Err(SortError::InvalidRange { from, to });
    }
    Ok(())
}

// Forwarding impls so sorters can borrow an adapter instead of owning it.
impl<S: Sortable + ?Sized> Sortable for &mut S {
    #[inline(always)]
    fn compare(&mut self, i: usize, j: usize) -> Ordering {
        (**self).compare(i, j)
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        (**self).swap(i, j)
    }
}

impl<S: PivotSortable + ?Sized> PivotSortable for &mut S {
    #[inline(always)]
    fn set_pivot(&mut self, i: usize) {
        (**self).set_pivot(i)
    }

    #[inline(always)]
    fn compare_pivot(&mut self, j: usize) -> Ordering {
        (**self).compare_pivot(j)
    }
}

impl<S: ScratchSortable + ?Sized> ScratchSortable for &mut S {
    #[inline(always)]
    fn require_capacity(&mut self, n: usize) {
        (**self).require_capacity(n)
    }

    #[inline(always)]
    fn save(&mut self, src: usize, slot: usize) {
        (**self).save(src, slot)
    }

    #[inline(always)]
    fn restore(&mut self, slot: usize, dest: usize) {
        (**self).restore(slot, dest)
    }

    #[inline(always)]
    fn copy(&mut self, src: usize, dest: usize) {
        (**self).copy(src, dest)
    }

    #[inline(always)]
    fn compare_saved(&mut self, a: usize, b: usize) -> Ordering {
        (**self).compare_saved(a, b)
    }

    #[inline(always)]
    fn compare_saved_with(&mut self, slot: usize, j: usize) -> Ordering {
        (**self).compare_saved_with(slot, j)
    }
}
