//! [TimSort](http://svn.python.org/projects/python/trunk/Objects/listsort.txt).
//!
//! The range is scanned once for natural runs (non-descending, or strictly descending and then
//! reversed), short runs are extended to a minimum length with binary-insertion sort, and runs
//! are merged from a stack whose lengths grow at least like the Fibonacci numbers. Merges
//! gallop when one run keeps winning, which makes partially sorted input close to linear.

use crate::core::{ScratchSortable, Sorter, check_range};
use crate::error::SortError;
use crate::gallop::merge_runs;
use crate::primitives::{binary_insertion_sort, reverse};
use cuneiform::cuneiform;
use std::cmp::Ordering;

/// Lower bound of [`min_run`] for ranges of at least [`TIMSORT_THRESHOLD`] elements.
pub const MIN_RUN: usize = 32;

/// Ranges shorter than this are sorted with a single binary-insertion sort.
pub const TIMSORT_THRESHOLD: usize = 64;

/// Runs the stack can hold. Every run but the last is at least [`MIN_RUN`] long and the
/// invariant makes run lengths grow like the Fibonacci numbers, so 85 covers any `usize` range.
const MAX_RUNS: usize = 85;

/// Minimum run length for a range of `len` elements.
///
/// Keeps the 6 most significant bits of `len` and adds one if any other bit is set, so that
/// `len / min_run` is a power of two or slightly less than one.
pub fn min_run(len: usize) -> usize {
    if len < TIMSORT_THRESHOLD {
        return len;
    }
    let mut n = len;
    let mut r = 0;
    while n >= TIMSORT_THRESHOLD {
        r |= n & 1;
        n >>= 1;
    }
    n + r
}

/// Stack of pending runs, stored as run end positions.
///
/// `ends[0]` is the start of the range and run `k` from the top spans
/// `[ends[len - k - 1], ends[len - k])`.
#[cuneiform]
struct RunStack {
    ends: [usize; MAX_RUNS + 1],
    len: usize,
}

impl RunStack {
    fn new() -> Self {
        Self {
            ends: [0; MAX_RUNS + 1],
            len: 0,
        }
    }

    fn reset(&mut self, from: usize) {
        self.ends[0] = from;
        self.len = 0;
    }

    fn push(&mut self, run_len: usize) {
        debug_assert!(self.len < MAX_RUNS);
        self.ends[self.len + 1] = self.ends[self.len] + run_len;
        self.len += 1;
    }

    /// End of the topmost run, i.e. where the next run starts.
    fn end(&self) -> usize {
        self.ends[self.len]
    }

    fn run_base(&self, k: usize) -> usize {
        self.ends[self.len - k - 1]
    }

    fn run_end(&self, k: usize) -> usize {
        self.ends[self.len - k]
    }

    fn run_len(&self, k: usize) -> usize {
        self.run_end(k) - self.run_base(k)
    }

    /// Joins runs `k` and `k + 1` (from the top) into one entry.
    fn join(&mut self, k: usize) {
        let boundary = self.len - k - 1;
        self.ends.copy_within(boundary + 1..self.len + 1, boundary);
        self.len -= 1;
    }
}

/// TimSort. Stable.
///
/// [`TimSorter::new`] saves the shorter run of every merge into scratch.
/// [`TimSorter::low_memory`] caps scratch at a fixed number of slots and merges larger runs
/// in place.
///
/// # Examples
///
/// ```
/// use slotsort::prelude::*;
///
/// let mut data: Vec<u32> = (0..500).chain(0..500).collect();
/// let mut sorter = TimSorter::low_memory(SliceSlots::new(&mut data), 16);
/// sorter.sort(0, 1000).unwrap();
/// drop(sorter);
///
/// assert!(data.windows(2).all(|w| w[0] <= w[1]));
/// ```
pub struct TimSorter<S> {
    slots: S,
    max_temp_slots: usize,
    stack: RunStack,
}

impl<S: ScratchSortable> TimSorter<S> {
    /// TimSort with as much scratch as merges need (at most half the range).
    pub fn new(slots: S) -> Self {
        Self::low_memory(slots, usize::MAX)
    }

    /// TimSort using at most `max_temp_slots` scratch slots per merge.
    pub fn low_memory(slots: S, max_temp_slots: usize) -> Self {
        Self {
            slots,
            max_temp_slots,
            stack: RunStack::new(),
        }
    }

    fn sort_unchecked(&mut self, from: usize, to: usize) {
        if to - from <= 1 {
            return;
        }
        let min_run = min_run(to - from);
        self.stack.reset(from);
        loop {
            let run_len = self.next_run(self.stack.end(), to, min_run);
            self.stack.push(run_len);
            self.ensure_invariants();
            if self.stack.end() == to {
                break;
            }
        }
        self.exhaust_stack();
        debug_assert_eq!(self.stack.len, 1);
    }

    /// Makes the run starting at `base` sorted and returns its length.
    fn next_run(&mut self, base: usize, to: usize, min_run: usize) -> usize {
        debug_assert!(base < to);
        if base == to - 1 {
            return 1;
        }
        let s = &mut self.slots;
        let mut o = base + 2;
        if s.compare(base, base + 1) == Ordering::Greater {
            // Strictly descending only, reversing equal elements would break stability.
            while o < to && s.compare(o - 1, o) == Ordering::Greater {
                o += 1;
            }
            reverse(s, base, o);
        } else {
            while o < to && s.compare(o - 1, o) != Ordering::Greater {
                o += 1;
            }
        }
        let run_hi = o.max(to.min(base + min_run));
        binary_insertion_sort(s, base, run_hi, o);
        run_hi - base
    }

    /// Merges until, from the top, `r1 > r0`, `r2 > r1 + r0` and `r3 > r2 + r1` hold.
    fn ensure_invariants(&mut self) {
        while self.stack.len > 1 {
            let r0 = self.stack.run_len(0);
            let r1 = self.stack.run_len(1);
            let size = self.stack.len;
            if (size > 2 && self.stack.run_len(2) <= r1 + r0)
                || (size > 3 && self.stack.run_len(3) <= self.stack.run_len(2) + r1)
            {
                // Merge the middle run with the smaller of its neighbours.
                if self.stack.run_len(2) < r0 {
                    self.merge_at(1);
                } else {
                    self.merge_at(0);
                }
            } else if r1 <= r0 {
                self.merge_at(0);
            } else {
                break;
            }
        }
    }

    fn exhaust_stack(&mut self) {
        while self.stack.len > 1 {
            self.merge_at(0);
        }
    }

    /// Merges runs `k + 1` and `k` from the top.
    fn merge_at(&mut self, k: usize) {
        debug_assert!(self.stack.len >= k + 2);
        let lo = self.stack.run_base(k + 1);
        let mid = self.stack.run_base(k);
        let hi = self.stack.run_end(k);
        merge_runs(&mut self.slots, lo, mid, hi, self.max_temp_slots);
        self.stack.join(k);
    }
}

impl<S> TimSorter<S> {
    /// Scratch slots a single merge may use.
    pub fn max_temp_slots(&self) -> usize {
        self.max_temp_slots
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

impl<S: ScratchSortable> Sorter for TimSorter<S> {
    fn sort(&mut self, from: usize, to: usize) -> Result<(), SortError> {
        check_range(from, to)?;
        log::debug!(
            "timsort (max {} temp slots) [{}, {})",
            self.max_temp_slots,
            from,
            to
        );
        self.sort_unchecked(from, to);
        Ok(())
    }
}
