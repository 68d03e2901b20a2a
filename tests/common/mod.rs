#![allow(dead_code)]

use rand::Rng;
use slotsort::prelude::*;
use std::cmp::Ordering;

/// A value tagged with its input position, ordered by value only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    pub value: i32,
    pub ord: usize,
}

pub fn by_value(a: &Entry, b: &Entry) -> Ordering {
    a.value.cmp(&b.value)
}

pub type EntryOrder = fn(&Entry, &Entry) -> Ordering;

pub fn entry_slots(data: &mut [Entry]) -> SliceSlots<'_, Entry, EntryOrder> {
    SliceSlots::with_comparator(data, by_value as EntryOrder)
}

pub fn entries(values: &[i32]) -> Vec<Entry> {
    values
        .iter()
        .enumerate()
        .map(|(ord, &value)| Entry { value, ord })
        .collect()
}

#[derive(Clone, Copy, Debug)]
pub enum Strategy {
    Random,
    RandomLowCardinality,
    Ascending,
    Descending,
    StrictlyDescending,
    AscendingSequences,
}

pub const STRATEGIES: [Strategy; 6] = [
    Strategy::Random,
    Strategy::RandomLowCardinality,
    Strategy::Ascending,
    Strategy::Descending,
    Strategy::StrictlyDescending,
    Strategy::AscendingSequences,
];

pub fn generate<R: Rng>(rng: &mut R, strategy: Strategy, len: usize) -> Vec<Entry> {
    let mut values: Vec<i32> = Vec::with_capacity(len);
    for i in 0..len {
        let value = match strategy {
            Strategy::Random => rng.random(),
            Strategy::RandomLowCardinality => rng.random_range(0..5),
            _ if i == 0 => rng.random_range(0..5),
            Strategy::Ascending => values[i - 1].wrapping_add(rng.random_range(0..5)),
            Strategy::Descending => values[i - 1].wrapping_sub(rng.random_range(0..5)),
            Strategy::StrictlyDescending => values[i - 1].wrapping_sub(rng.random_range(1..=5)),
            Strategy::AscendingSequences => {
                if rng.random_bool(0.01) {
                    rng.random_range(0..5)
                } else {
                    values[i - 1].wrapping_add(rng.random_range(0..5))
                }
            }
        };
        values.push(value);
    }
    entries(&values)
}

/// Every way the crate can sort, as exercised by the tests.
#[derive(Clone, Copy, Debug)]
pub enum Kind {
    Insertion,
    BinaryInsertion,
    Heap,
    Intro,
    IntroMergeFallback,
    Merge,
    MergeInPlace,
    MergeLowMemory(usize),
    InPlaceMerge,
    Tim,
    TimLowMemory(usize),
}

pub const KINDS: [Kind; 13] = [
    Kind::Insertion,
    Kind::BinaryInsertion,
    Kind::Heap,
    Kind::Intro,
    Kind::IntroMergeFallback,
    Kind::Merge,
    Kind::MergeInPlace,
    Kind::MergeLowMemory(1),
    Kind::MergeLowMemory(100),
    Kind::InPlaceMerge,
    Kind::Tim,
    Kind::TimLowMemory(1),
    Kind::TimLowMemory(100),
];

impl Kind {
    pub fn is_stable(self) -> bool {
        !matches!(self, Kind::Heap | Kind::Intro | Kind::IntroMergeFallback)
    }

    pub fn is_quadratic(self) -> bool {
        matches!(self, Kind::Insertion | Kind::BinaryInsertion)
    }

    /// Sorts `[from, to)` of `slots` and hands the storage back.
    pub fn run<S>(self, slots: S, from: usize, to: usize) -> (Result<(), SortError>, S)
    where
        S: PivotSortable + ScratchSortable,
    {
        fn finish<T: Sorter, S>(
            mut sorter: T,
            from: usize,
            to: usize,
            into_inner: fn(T) -> S,
        ) -> (Result<(), SortError>, S) {
            let result = sorter.sort(from, to);
            (result, into_inner(sorter))
        }

        match self {
            Kind::Insertion => finish(InsertionSorter::new(slots), from, to, |s| s.into_inner()),
            Kind::BinaryInsertion => {
                finish(BinaryInsertionSorter::new(slots), from, to, |s| s.into_inner())
            }
            Kind::Heap => finish(HeapSorter::new(slots), from, to, |s| s.into_inner()),
            Kind::Intro => finish(IntroSorter::new(slots), from, to, |s| s.into_inner()),
            Kind::IntroMergeFallback => finish(
                IntroSorter::with_fallback(slots, DepthFallback::MergeSortInPlace),
                from,
                to,
                |s| s.into_inner(),
            ),
            Kind::Merge => finish(MergeSorter::new(slots), from, to, |s| s.into_inner()),
            Kind::MergeInPlace => finish(MergeSorter::in_place(slots), from, to, |s| s.into_inner()),
            Kind::MergeLowMemory(budget) => {
                finish(MergeSorter::low_memory(slots, budget), from, to, |s| s.into_inner())
            }
            Kind::InPlaceMerge => {
                finish(InPlaceMergeSorter::new(slots), from, to, |s| s.into_inner())
            }
            Kind::Tim => finish(TimSorter::new(slots), from, to, |s| s.into_inner()),
            Kind::TimLowMemory(budget) => {
                finish(TimSorter::low_memory(slots, budget), from, to, |s| s.into_inner())
            }
        }
    }

    /// Sorts `[from, to)` of `data` by value.
    pub fn sort(self, data: &mut [Entry], from: usize, to: usize) -> Result<(), SortError> {
        self.run(entry_slots(data), from, to).0
    }
}

/// Checks `sorted` against a stable std sort of `original`.
pub fn assert_sorted(original: &[Entry], sorted: &[Entry], stable: bool) {
    assert_eq!(original.len(), sorted.len());
    let mut expected = original.to_vec();
    expected.sort_by(by_value);
    for (i, (e, s)) in expected.iter().zip(sorted).enumerate() {
        assert_eq!(e.value, s.value, "value mismatch at index {}", i);
        if stable {
            assert_eq!(e.ord, s.ord, "order of equal values changed at index {}", i);
        }
    }
}

/// Forwards to an adapter and counts every operation that writes storage.
pub struct Counting<S> {
    pub inner: S,
    pub swaps: usize,
    pub saves: usize,
    pub restores: usize,
    pub copies: usize,
}

impl<S> Counting<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            swaps: 0,
            saves: 0,
            restores: 0,
            copies: 0,
        }
    }

    pub fn writes(&self) -> usize {
        self.swaps + self.saves + self.restores + self.copies
    }
}

impl<S: Sortable> Sortable for Counting<S> {
    fn compare(&mut self, i: usize, j: usize) -> Ordering {
        self.inner.compare(i, j)
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.swaps += 1;
        self.inner.swap(i, j);
    }
}

impl<S: PivotSortable> PivotSortable for Counting<S> {
    fn set_pivot(&mut self, i: usize) {
        self.inner.set_pivot(i);
    }

    fn compare_pivot(&mut self, j: usize) -> Ordering {
        self.inner.compare_pivot(j)
    }
}

impl<S: ScratchSortable> ScratchSortable for Counting<S> {
    fn require_capacity(&mut self, n: usize) {
        self.inner.require_capacity(n);
    }

    fn save(&mut self, src: usize, slot: usize) {
        self.saves += 1;
        self.inner.save(src, slot);
    }

    fn restore(&mut self, slot: usize, dest: usize) {
        self.restores += 1;
        self.inner.restore(slot, dest);
    }

    fn copy(&mut self, src: usize, dest: usize) {
        self.copies += 1;
        self.inner.copy(src, dest);
    }

    fn compare_saved(&mut self, a: usize, b: usize) -> Ordering {
        self.inner.compare_saved(a, b)
    }

    fn compare_saved_with(&mut self, slot: usize, j: usize) -> Ordering {
        self.inner.compare_saved_with(slot, j)
    }
}
