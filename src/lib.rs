//! # Slotsort
//!
//! `slotsort` is a family of in-place sorting algorithms that never see the data they sort.
//! Every algorithm is written against a handful of slot operations: compare two positions,
//! swap two positions, and (for merges) save, restore and copy through a private scratch
//! area. One implementation therefore sorts plain slices, parallel arrays, columnar
//! storage, or anything else that can be addressed by index.
//!
//! ## Algorithms
//!
//! | Sorter | Stable | Extra memory | Worst case |
//! |---|---|---|---|
//! | [`InsertionSorter`], [`BinaryInsertionSorter`] | yes | none | O(n²) |
//! | [`HeapSorter`] | no | none | O(n log n) |
//! | [`IntroSorter`] | no | pivot | O(n log n) |
//! | [`MergeSorter`] (`new`) | yes | n slots | O(n log n) |
//! | [`MergeSorter`] (`low_memory`) | yes | configurable | O(n log² n) |
//! | [`InPlaceMergeSorter`] | yes | none | O(n log² n) |
//! | [`TimSorter`] (`new`) | yes | n / 2 slots | O(n log n) |
//! | [`TimSorter`] (`low_memory`) | yes | configurable | O(n log² n) |
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! For slices, the functions in [`algo`] pick a sorter and sort the whole slice:
//!
//! ```rust
//! use slotsort::timsort;
//!
//! let mut data = vec!["banana", "apple", "cherry", "date"];
//! timsort(&mut data);
//!
//! assert_eq!(data, vec!["apple", "banana", "cherry", "date"]);
//! ```
//!
//! ### Sub-ranges and memory budgets
//!
//! Sorters wrap a capability adapter such as [`SliceSlots`] and sort any `[from, to)` range:
//!
//! ```rust
//! use slotsort::prelude::*;
//!
//! let mut data = vec![9, 4, 3, 2, 1, 0];
//! let mut sorter = MergeSorter::low_memory(SliceSlots::new(&mut data), 2);
//! sorter.sort(1, 5)?;
//! drop(sorter);
//!
//! assert_eq!(data, vec![9, 1, 2, 3, 4, 0]);
//! # Ok::<(), SortError>(())
//! ```
//!
//! ### Custom storage
//!
//! Implement [`Sortable`] (plus [`PivotSortable`] for introsort, [`ScratchSortable`] for the
//! merge-based sorters) to sort storage that is not a slice:
//!
//! ```rust
//! use slotsort::prelude::*;
//! use std::cmp::Ordering;
//!
//! struct Scores {
//!     points: Vec<u32>,
//!     players: Vec<&'static str>,
//! }
//!
//! impl Sortable for Scores {
//!     fn compare(&mut self, i: usize, j: usize) -> Ordering {
//!         self.points[i].cmp(&self.points[j])
//!     }
//!
//!     fn swap(&mut self, i: usize, j: usize) {
//!         self.points.swap(i, j);
//!         self.players.swap(i, j);
//!     }
//! }
//!
//! let scores = Scores { points: vec![30, 10, 20], players: vec!["c", "a", "b"] };
//! let mut sorter = InPlaceMergeSorter::new(scores);
//! sorter.sort(0, 3)?;
//!
//! assert_eq!(sorter.into_inner().players, vec!["a", "b", "c"]);
//! # Ok::<(), SortError>(())
//! ```
//!
//! ## Errors
//!
//! The only failure is a reversed range (`to < from`), reported as
//! [`SortError::InvalidRange`] before anything is touched.

pub mod algo;
pub mod core;
pub mod error;
pub(crate) mod gallop;
pub mod introsort;
pub mod merge;
pub mod primitives;
pub(crate) mod rotate;
pub mod slice;
pub mod timsort;

pub use crate::algo::{
    heap_sort, insertion_sort, introsort, introsort_by, merge_sort, merge_sort_by,
    merge_sort_in_place, timsort, timsort_by,
};
pub use crate::core::{PivotSortable, ScratchSortable, Sortable, Sorter};
pub use crate::error::SortError;
pub use crate::gallop::MIN_GALLOP;
pub use crate::introsort::{DepthFallback, IntroSorter};
pub use crate::merge::{InPlaceMergeSorter, MemoryPolicy, MergeSorter};
pub use crate::primitives::{BinaryInsertionSorter, HeapSorter, InsertionSorter};
pub use crate::slice::SliceSlots;
pub use crate::timsort::TimSorter;

pub mod prelude {
    pub use crate::algo::{
        heap_sort, insertion_sort, introsort, introsort_by, merge_sort, merge_sort_by,
        merge_sort_in_place, timsort, timsort_by,
    };
    pub use crate::core::{PivotSortable, ScratchSortable, Sortable, Sorter};
    pub use crate::error::SortError;
    pub use crate::introsort::{DepthFallback, IntroSorter};
    pub use crate::merge::{InPlaceMergeSorter, MemoryPolicy, MergeSorter};
    pub use crate::primitives::{BinaryInsertionSorter, HeapSorter, InsertionSorter};
    pub use crate::slice::SliceSlots;
    pub use crate::timsort::TimSorter;
}
