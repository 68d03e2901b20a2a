mod common;

use common::{Entry, Strategy, assert_sorted, entries, entry_slots, generate};
use rand::Rng;
use slotsort::prelude::*;

fn sort_with<T: Sorter>(mut sorter: T, len: usize) {
    sorter.sort(0, len).unwrap();
}

#[test]
fn test_every_budget_matches_unbounded() {
    let mut rng = rand::rng();
    let len = 200;

    for strategy in [Strategy::Random, Strategy::RandomLowCardinality, Strategy::AscendingSequences] {
        let original = generate(&mut rng, strategy, len);
        let mut expected = original.clone();
        sort_with(MergeSorter::new(entry_slots(&mut expected)), len);
        assert_sorted(&original, &expected, true);

        for budget in 0..=len {
            let mut merged = original.clone();
            sort_with(MergeSorter::low_memory(entry_slots(&mut merged), budget), len);
            assert_eq!(merged, expected, "merge sort with {} temp slots", budget);

            let mut timsorted = original.clone();
            sort_with(TimSorter::low_memory(entry_slots(&mut timsorted), budget), len);
            assert_eq!(timsorted, expected, "timsort with {} temp slots", budget);
        }
    }
}

#[test]
fn test_large_budgets_match_unbounded() {
    let mut rng = rand::rng();
    let len = 50_000;
    let original = generate(&mut rng, Strategy::RandomLowCardinality, len);

    let mut expected = original.clone();
    sort_with(TimSorter::new(entry_slots(&mut expected)), len);
    assert_sorted(&original, &expected, true);

    for budget in [1, 2, 3, 7, 64, 1_000, 25_000, 50_000] {
        let mut merged = original.clone();
        sort_with(MergeSorter::low_memory(entry_slots(&mut merged), budget), len);
        assert_eq!(merged, expected, "merge sort with {} temp slots", budget);

        let mut timsorted = original.clone();
        sort_with(TimSorter::low_memory(entry_slots(&mut timsorted), budget), len);
        assert_eq!(timsorted, expected, "timsort with {} temp slots", budget);
    }
}

/// Two sorted runs of 1000 built from blocks of 50, so each side wins long streaks in turn.
/// Block boundaries share a value to exercise tie-breaking while galloping.
fn interleaved_blocks() -> Vec<Entry> {
    let mut left = Vec::with_capacity(1_000);
    let mut right = Vec::with_capacity(1_000);
    for block in 0..20 {
        let base = block * 100;
        left.extend(base..base + 50);
        right.extend(base + 49..base + 99);
    }
    left.extend(right);
    entries(&left)
}

fn straightforward_merge(runs: &[Entry], mid: usize) -> Vec<Entry> {
    let (a, b) = runs.split_at(mid);
    let (mut i, mut j) = (0, 0);
    let mut out = Vec::with_capacity(runs.len());
    while i < a.len() && j < b.len() {
        if a[i].value <= b[j].value {
            out.push(a[i]);
            i += 1;
        } else {
            out.push(b[j]);
            j += 1;
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}

#[test]
fn test_galloping_merge() {
    let original = interleaved_blocks();
    let expected = straightforward_merge(&original, 1_000);

    for budget in [usize::MAX, 1_000, 999, 300, 7, 1, 0] {
        let mut data = original.clone();
        sort_with(TimSorter::low_memory(entry_slots(&mut data), budget), 2_000);
        assert_eq!(data, expected, "timsort with {} temp slots", budget);

        let mut data = original.clone();
        sort_with(MergeSorter::low_memory(entry_slots(&mut data), budget), 2_000);
        assert_eq!(data, expected, "merge sort with {} temp slots", budget);
    }
}

#[test]
fn test_galloping_merge_reversed_sides() {
    // Right run entirely below the left run except for one shared value.
    let mut values: Vec<i32> = (1_000..2_000).collect();
    values.extend(0..=1_000);
    let original = entries(&values);
    let expected = straightforward_merge(&original, 1_000);

    for budget in [usize::MAX, 1_001, 1_000, 10, 0] {
        let mut data = original.clone();
        sort_with(TimSorter::low_memory(entry_slots(&mut data), budget), values.len());
        assert_eq!(data, expected, "timsort with {} temp slots", budget);
    }
}

#[test]
fn test_timsort_one_million() {
    let mut rng = rand::rng();
    let len = 1_000_000;
    let original: Vec<u32> = (0..len).map(|_| rng.random()).collect();

    let mut data = original.clone();
    timsort(&mut data);

    let mut expected = original;
    expected.sort();
    assert_eq!(data, expected);
}

#[test]
fn test_low_memory_large() {
    let mut rng = rand::rng();
    let len = 200_000;
    let original = generate(&mut rng, Strategy::AscendingSequences, len);

    let mut data = original.clone();
    sort_with(TimSorter::low_memory(entry_slots(&mut data), 1_024), len);
    assert_sorted(&original, &data, true);

    let mut data = original.clone();
    sort_with(MergeSorter::low_memory(entry_slots(&mut data), 1_024), len);
    assert_sorted(&original, &data, true);
}

#[test]
#[ignore]
fn test_ten_million_all_families() {
    let mut rng = rand::rng();
    let len = 10_000_000;
    let original: Vec<u64> = (0..len).map(|_| rng.random()).collect();
    let mut expected = original.clone();
    expected.sort();

    let sorts: [fn(&mut [u64]); 4] = [timsort, introsort, merge_sort, heap_sort];
    for sort in sorts {
        let mut data = original.clone();
        sort(&mut data);
        assert_eq!(data, expected);
    }
}
