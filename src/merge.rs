//! Merge sort with a configurable scratch memory policy.
//!
//! All policies share the same divide-and-conquer skeleton and the insertion-sort base case.
//! They differ in how a merge is carried out:
//!
//! - [`MemoryPolicy::Unbounded`]: every merge goes through scratch sized for the whole range.
//! - [`MemoryPolicy::InPlace`]: every merge rotates blocks in place, no scratch at all.
//! - [`MemoryPolicy::Budget`]: ranges that fit the budget merge through scratch, larger merges
//!   use scratch for the shorter run when it fits and rotate in place otherwise.
//!
//! Every policy is stable and produces the same output; only speed and memory differ.

use crate::core::{ScratchSortable, Sortable, Sorter, THRESHOLD, check_range};
use crate::error::SortError;
use crate::gallop::merge_runs;
use crate::primitives::insertion_sort;
use crate::rotate::merge_in_place;
use std::cmp::Ordering;

/// How much scratch memory a [`MergeSorter`] may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryPolicy {
    /// As much as the range being sorted.
    Unbounded,
    /// None.
    InPlace,
    /// At most this many scratch slots.
    Budget(usize),
}

impl MemoryPolicy {
    /// Largest number of scratch slots a merge may use.
    pub fn max_temp_slots(self) -> usize {
        match self {
            MemoryPolicy::Unbounded => usize::MAX,
            MemoryPolicy::InPlace => 0,
            MemoryPolicy::Budget(slots) => slots,
        }
    }
}

/// Stable merge sort. Small ranges are sorted with insertion sort.
///
/// # Examples
///
/// ```
/// use slotsort::prelude::*;
///
/// let mut data = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
/// let slots = SliceSlots::with_comparator(&mut data, |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
/// let mut sorter = MergeSorter::low_memory(slots, 1);
/// sorter.sort(0, 4).unwrap();
/// drop(sorter);
///
/// assert_eq!(data, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
pub struct MergeSorter<S> {
    slots: S,
    policy: MemoryPolicy,
}

impl<S: ScratchSortable> MergeSorter<S> {
    /// Merge sort using as much scratch as the range needs.
    pub fn new(slots: S) -> Self {
        Self::with_policy(slots, MemoryPolicy::Unbounded)
    }

    /// Merge sort using at most `max_temp_slots` scratch slots per merge.
    pub fn low_memory(slots: S, max_temp_slots: usize) -> Self {
        Self::with_policy(slots, MemoryPolicy::Budget(max_temp_slots))
    }

    /// Merge sort that never touches scratch memory. See also [`InPlaceMergeSorter`], which
    /// only needs [`Sortable`].
    pub fn in_place(slots: S) -> Self {
        Self::with_policy(slots, MemoryPolicy::InPlace)
    }

    /// Merge sort with an explicit [`MemoryPolicy`].
    pub fn with_policy(slots: S, policy: MemoryPolicy) -> Self {
        Self { slots, policy }
    }
}

impl<S> MergeSorter<S> {
    /// The configured memory policy.
    pub fn policy(&self) -> MemoryPolicy {
        self.policy
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

impl<S: ScratchSortable> MergeSorter<S> {
    fn sort_unchecked(&mut self, from: usize, to: usize) {
        match self.policy {
            MemoryPolicy::InPlace => merge_sort_in_place(&mut self.slots, from, to),
            policy => merge_sort(&mut self.slots, from, to, policy.max_temp_slots()),
        }
    }
}

impl<S: ScratchSortable> Sorter for MergeSorter<S> {
    fn sort(&mut self, from: usize, to: usize) -> Result<(), SortError> {
        check_range(from, to)?;
        if to - from <= 1 {
            return Ok(());
        }
        log::debug!("merge sort ({:?}) [{}, {})", self.policy, from, to);
        self.sort_unchecked(from, to);
        Ok(())
    }
}

/// Merge sort that merges by rotating blocks, for storage without scratch support.
///
/// Stable, O(1) extra memory, O(n log² n) swaps.
pub struct InPlaceMergeSorter<S> {
    slots: S,
}

impl<S: Sortable> InPlaceMergeSorter<S> {
    /// Wraps `slots`.
    pub fn new(slots: S) -> Self {
        Self { slots }
    }

    /// Returns the wrapped storage.
    pub fn slots(&self) -> &S {
        &self.slots
    }

    /// Unwraps the storage.
    pub fn into_inner(self) -> S {
        self.slots
    }
}

impl<S: Sortable> Sorter for InPlaceMergeSorter<S> {
    fn sort(&mut self, from: usize, to: usize) -> Result<(), SortError> {
        check_range(from, to)?;
        if to - from <= 1 {
            return Ok(());
        }
        log::debug!("in-place merge sort [{}, {})", from, to);
        merge_sort_in_place(&mut self.slots, from, to);
        Ok(())
    }
}

/// Stable merge sort of `[from, to)` without scratch memory.
pub(crate) fn merge_sort_in_place<S: Sortable + ?Sized>(s: &mut S, from: usize, to: usize) {
    if to - from < THRESHOLD {
        insertion_sort(s, from, to);
        return;
    }
    let mid = from + (to - from) / 2;
    merge_sort_in_place(s, from, mid);
    merge_sort_in_place(s, mid, to);
    merge_in_place(s, from, mid, to);
}

fn merge_sort<S: ScratchSortable + ?Sized>(
    s: &mut S,
    from: usize,
    to: usize,
    max_temp_slots: usize,
) {
    let len = to - from;
    if len < THRESHOLD {
        insertion_sort(s, from, to);
        return;
    }
    if len > max_temp_slots {
        let mid = from + len / 2;
        merge_sort(s, from, mid, max_temp_slots);
        merge_sort(s, mid, to, max_temp_slots);
        merge_runs(s, from, mid, to, max_temp_slots);
        return;
    }

    // The whole range fits scratch: sort the four quarters, merge them pairwise into
    // scratch, then merge the two scratch halves back.
    let mid = from + len / 2;
    let q1 = from + (mid - from) / 2;
    let q3 = mid + (to - mid) / 2;
    merge_sort(s, q3, to, max_temp_slots);
    merge_sort(s, mid, q3, max_temp_slots);
    merge_sort(s, q1, mid, max_temp_slots);
    merge_sort(s, from, q1, max_temp_slots);

    let ordered_q1 = s.compare(q1 - 1, q1) != Ordering::Greater;
    let ordered_q3 = s.compare(q3 - 1, q3) != Ordering::Greater;
    if ordered_q1 && ordered_q3 && s.compare(mid - 1, mid) != Ordering::Greater {
        return;
    }

    s.require_capacity(len);
    if ordered_q1 {
        save_all(s, from, mid, from);
    } else {
        merge_into_scratch(s, from, q1, mid, from);
    }
    if ordered_q3 {
        save_all(s, mid, to, from);
    } else {
        merge_into_scratch(s, mid, q3, to, from);
    }
    merge_from_scratch(s, from, mid, to, from);
}

/// Saves `[from, to)` into slots starting at `from - base`.
fn save_all<S: ScratchSortable + ?Sized>(s: &mut S, from: usize, to: usize, base: usize) {
    for i in from..to {
        s.save(i, i - base);
    }
}

/// Merges the live runs `[from, mid)` and `[mid, to)` into slots starting at `from - base`.
fn merge_into_scratch<S: ScratchSortable + ?Sized>(
    s: &mut S,
    from: usize,
    mid: usize,
    to: usize,
    base: usize,
) {
    let (mut i, mut j, mut slot) = (from, mid, from - base);
    while i < mid && j < to {
        if s.compare(i, j) != Ordering::Greater {
            s.save(i, slot);
            i += 1;
        } else {
            s.save(j, slot);
            j += 1;
        }
        slot += 1;
    }
    for k in i..mid {
        s.save(k, slot);
        slot += 1;
    }
    for k in j..to {
        s.save(k, slot);
        slot += 1;
    }
    debug_assert_eq!(slot, to - base);
}

/// Merges the saved runs of `[from, mid)` and `[mid, to)` (slots offset by `base`) back into
/// live storage.
fn merge_from_scratch<S: ScratchSortable + ?Sized>(
    s: &mut S,
    from: usize,
    mid: usize,
    to: usize,
    base: usize,
) {
    let (i_end, j_end) = (mid - base, to - base);
    if s.compare_saved(i_end - 1, i_end) != Ordering::Greater {
        for dest in from..to {
            s.restore(dest - base, dest);
        }
        return;
    }
    let (mut i, mut j, mut dest) = (from - base, mid - base, from);
    while i < i_end && j < j_end {
        if s.compare_saved(i, j) != Ordering::Greater {
            s.restore(i, dest);
            i += 1;
        } else {
            s.restore(j, dest);
            j += 1;
        }
        dest += 1;
    }
    for slot in (i..i_end).chain(j..j_end) {
        s.restore(slot, dest);
        dest += 1;
    }
    debug_assert_eq!(dest, to);
}
