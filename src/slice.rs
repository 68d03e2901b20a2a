//! [`SliceSlots`]: the capability traits bound to a plain `&mut [T]`.

use crate::core::{PivotSortable, ScratchSortable, Sortable};
use std::cmp::Ordering;

/// Natural order comparator used by [`SliceSlots::new`].
pub type NaturalOrder<T> = fn(&T, &T) -> Ordering;

/// Slot access to a mutable slice, ordered by a comparator.
///
/// Holds the pivot and the scratch area the algorithms need, so one value can be handed to
/// any sorter in the crate. Scratch grows by 1.5x when a merge asks for more than it holds
/// and is reused across calls.
///
/// # Examples
///
/// ```
/// use slotsort::prelude::*;
///
/// let mut data = vec![5, 1, 4, 2, 3];
/// let mut sorter = TimSorter::new(SliceSlots::new(&mut data));
/// sorter.sort(1, 4).unwrap();
/// drop(sorter);
///
/// assert_eq!(data, vec![5, 1, 2, 4, 3]);
/// ```
pub struct SliceSlots<'a, T, F = NaturalOrder<T>> {
    data: &'a mut [T],
    compare: F,
    pivot: Option<T>,
    scratch: Vec<T>,
}

impl<'a, T: Ord> SliceSlots<'a, T> {
    /// Binds `data`, ordered by [`Ord`].
    pub fn new(data: &'a mut [T]) -> Self {
        Self::with_comparator(data, T::cmp)
    }
}

impl<'a, T, F> SliceSlots<'a, T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    /// Binds `data`, ordered by `compare`.
    pub fn with_comparator(data: &'a mut [T], compare: F) -> Self {
        Self {
            data,
            compare,
            pivot: None,
            scratch: Vec::new(),
        }
    }

    /// Length of the bound slice.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the bound slice is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of scratch slots currently allocated.
    pub fn scratch_capacity(&self) -> usize {
        self.scratch.capacity()
    }

    /// Drops the cached pivot and the scratch contents, keeping the allocation.
    pub fn reset(&mut self) {
        self.pivot = None;
        self.scratch.clear();
    }
}

impl<T, F> Sortable for SliceSlots<'_, T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    #[inline(always)]
    fn compare(&mut self, i: usize, j: usize) -> Ordering {
        (self.compare)(&self.data[i], &self.data[j])
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
    }
}

impl<T, F> PivotSortable for SliceSlots<'_, T, F>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    #[inline(always)]
    fn set_pivot(&mut self, i: usize) {
        self.pivot = Some(self.data[i].clone());
    }

    #[inline(always)]
    fn compare_pivot(&mut self, j: usize) -> Ordering {
        let Some(pivot) = &self.pivot else {
            unreachable!("compare_pivot before set_pivot");
        };
        (self.compare)(pivot, &self.data[j])
    }
}

impl<T, F> ScratchSortable for SliceSlots<'_, T, F>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    fn require_capacity(&mut self, n: usize) {
        let capacity = self.scratch.capacity();
        if capacity < n {
            let target = n.max(capacity + capacity / 2);
            self.scratch.reserve_exact(target - self.scratch.len());
        }
    }

    #[inline(always)]
    fn save(&mut self, src: usize, slot: usize) {
        let value = self.data[src].clone();
        // Slots are filled in order, so a new slot is always the next one.
        match slot.cmp(&self.scratch.len()) {
            Ordering::Less => self.scratch[slot] = value,
            Ordering::Equal => self.scratch.push(value),
            Ordering::Greater => unreachable!(
                "scratch slot {} saved before slot {}",
                slot,
                self.scratch.len()
            ),
        }
    }

    #[inline(always)]
    fn restore(&mut self, slot: usize, dest: usize) {
        self.data[dest] = self.scratch[slot].clone();
    }

    #[inline(always)]
    fn copy(&mut self, src: usize, dest: usize) {
        self.data[dest] = self.data[src].clone();
    }

    #[inline(always)]
    fn compare_saved(&mut self, a: usize, b: usize) -> Ordering {
        (self.compare)(&self.scratch[a], &self.scratch[b])
    }

    #[inline(always)]
    fn compare_saved_with(&mut self, slot: usize, j: usize) -> Ordering {
        (self.compare)(&self.scratch[slot], &self.data[j])
    }
}
