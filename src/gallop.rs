//! Scratch-backed merges and the per-merge memory budget decision.
//!
//! [`merge_runs`] is the merge step of TimSort and of the budgeted merge sort. It trims the
//! parts of both runs that are already in place, then merges through scratch with
//! [`merge_lo`] or [`merge_hi`] when the shorter run fits the budget, and falls back to
//! [`merge_in_place_with`] otherwise.

use crate::core::ScratchSortable;
use crate::rotate::{gallop_backward, gallop_forward, merge_in_place_with, rotate};
use std::cmp::Ordering;

/// Consecutive wins from one side before a merge switches to galloping.
pub const MIN_GALLOP: usize = 7;

/// Which side won the last comparisons of a one-step merge loop.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Streak {
    Left,
    Right,
}

/// Stable merge of the sorted runs `[lo, mid)` and `[mid, hi)` using at most `max_temp_slots`
/// scratch slots.
pub(crate) fn merge_runs<S: ScratchSortable + ?Sized>(
    s: &mut S,
    lo: usize,
    mid: usize,
    hi: usize,
    max_temp_slots: usize,
) {
    if lo == mid || mid == hi || s.compare(mid - 1, mid) != Ordering::Greater {
        return;
    }
    // Left elements not greater than a[mid], and right elements not smaller than a[mid - 1],
    // are already in their final place.
    let lo = gallop_forward(lo, mid, |k| s.compare(mid, k) != Ordering::Less);
    let hi = gallop_backward(mid, hi, |k| s.compare(k, mid - 1) == Ordering::Less);

    let len1 = mid - lo;
    let len2 = hi - mid;
    if len2 <= len1 && len2 <= max_temp_slots {
        merge_hi(s, lo, mid, hi);
    } else if len1 <= max_temp_slots {
        merge_lo(s, lo, mid, hi);
    } else {
        log::trace!(
            "runs of {} and {} exceed {} temp slots, merging [{}, {}) in place",
            len1,
            len2,
            max_temp_slots,
            lo,
            hi
        );
        merge_in_place_with(s, lo, mid, hi, &mut |s: &mut S, lo: usize, mid: usize, hi: usize| {
            rotate_buffered(s, lo, mid, hi, max_temp_slots)
        });
    }
}

/// Merges forward, saving the left run. Requires `a[lo] > a[mid]` and `a[mid - 1] > a[hi - 1]`.
pub(crate) fn merge_lo<S: ScratchSortable + ?Sized>(s: &mut S, lo: usize, mid: usize, hi: usize) {
    debug_assert!(s.compare(lo, mid) == Ordering::Greater);
    let len1 = mid - lo;
    s.require_capacity(len1);
    for k in 0..len1 {
        s.save(lo + k, k);
    }
    s.copy(mid, lo);

    // Left run lives in slots [i, len1), right run in [j, hi), output goes to dest.
    let (mut i, mut j, mut dest) = (0, mid + 1, lo + 1);
    'merge: loop {
        let mut streak = Streak::Left;
        let mut wins = 0;
        while wins < MIN_GALLOP {
            if i == len1 || j == hi {
                break 'merge;
            }
            let side = if s.compare_saved_with(i, j) != Ordering::Greater {
                s.restore(i, dest);
                i += 1;
                Streak::Left
            } else {
                s.copy(j, dest);
                j += 1;
                Streak::Right
            };
            dest += 1;
            wins = if side == streak { wins + 1 } else { 1 };
            streak = side;
        }
        if i == len1 || j == hi {
            break;
        }

        match streak {
            Streak::Right => {
                // Right elements strictly smaller than slot i go first.
                let next = gallop_forward(j, hi, |k| s.compare_saved_with(i, k) == Ordering::Greater);
                while j < next {
                    s.copy(j, dest);
                    j += 1;
                    dest += 1;
                }
                s.restore(i, dest);
                i += 1;
                dest += 1;
            }
            Streak::Left => {
                // Saved elements not greater than a[j] go first.
                let next =
                    gallop_forward(i, len1, |k| s.compare_saved_with(k, j) != Ordering::Greater);
                while i < next {
                    s.restore(i, dest);
                    i += 1;
                    dest += 1;
                }
                // a[mid - 1] > a[hi - 1] keeps at least one saved element greater than a[j].
                debug_assert!(i < len1);
                s.copy(j, dest);
                j += 1;
                dest += 1;
            }
        }
    }
    while i < len1 {
        s.restore(i, dest);
        i += 1;
        dest += 1;
    }
    debug_assert_eq!(j, dest);
}

/// Merges backward, saving the right run. Requires `a[lo] > a[mid]` and `a[mid - 1] > a[hi - 1]`.
pub(crate) fn merge_hi<S: ScratchSortable + ?Sized>(s: &mut S, lo: usize, mid: usize, hi: usize) {
    debug_assert!(s.compare(mid - 1, hi - 1) == Ordering::Greater);
    let len2 = hi - mid;
    s.require_capacity(len2);
    for k in 0..len2 {
        s.save(mid + k, k);
    }
    s.copy(mid - 1, hi - 1);

    // Exclusive ends: left run is [lo, i), saved right run is slots [0, j), output ends at dest.
    let (mut i, mut j, mut dest) = (mid - 1, len2, hi - 1);
    'merge: loop {
        let mut streak = Streak::Right;
        let mut wins = 0;
        while wins < MIN_GALLOP {
            if i == lo || j == 0 {
                break 'merge;
            }
            let side = if s.compare_saved_with(j - 1, i - 1) != Ordering::Less {
                s.restore(j - 1, dest - 1);
                j -= 1;
                Streak::Right
            } else {
                s.copy(i - 1, dest - 1);
                i -= 1;
                Streak::Left
            };
            dest -= 1;
            wins = if side == streak { wins + 1 } else { 1 };
            streak = side;
        }
        if i == lo || j == 0 {
            break;
        }

        match streak {
            Streak::Left => {
                // Left elements strictly greater than slot j - 1 go last.
                let next = gallop_backward(lo, i, |k| {
                    s.compare_saved_with(j - 1, k) != Ordering::Less
                });
                while i > next {
                    s.copy(i - 1, dest - 1);
                    i -= 1;
                    dest -= 1;
                }
                s.restore(j - 1, dest - 1);
                j -= 1;
                dest -= 1;
            }
            Streak::Right => {
                // Saved elements not smaller than a[i - 1] go last.
                let next =
                    gallop_backward(0, j, |k| s.compare_saved_with(k, i - 1) == Ordering::Less);
                while j > next {
                    s.restore(j - 1, dest - 1);
                    j -= 1;
                    dest -= 1;
                }
                // a[lo] > a[mid] keeps at least one saved element smaller than a[i - 1].
                debug_assert!(j > 0);
                s.copy(i - 1, dest - 1);
                i -= 1;
                dest -= 1;
            }
        }
    }
    while j > 0 {
        s.restore(j - 1, dest - 1);
        j -= 1;
        dest -= 1;
    }
    debug_assert_eq!(i, dest);
}

/// Exchanges `[lo, mid)` and `[mid, hi)`, going through scratch when the shorter block fits
/// `max_temp_slots`.
pub(crate) fn rotate_buffered<S: ScratchSortable + ?Sized>(
    s: &mut S,
    lo: usize,
    mid: usize,
    hi: usize,
    max_temp_slots: usize,
) {
    let len1 = mid - lo;
    let len2 = hi - mid;
    if len1 == 0 || len2 == 0 {
        return;
    }
    if len1 == len2 {
        for k in 0..len1 {
            s.swap(lo + k, mid + k);
        }
    } else if len2 < len1 && len2 <= max_temp_slots {
        s.require_capacity(len2);
        for k in 0..len2 {
            s.save(mid + k, k);
        }
        for k in (lo..mid).rev() {
            s.copy(k, k + len2);
        }
        for k in 0..len2 {
            s.restore(k, lo + k);
        }
    } else if len1 <= max_temp_slots {
        s.require_capacity(len1);
        for k in 0..len1 {
            s.save(lo + k, k);
        }
        for k in mid..hi {
            s.copy(k, k - len1);
        }
        for k in 0..len1 {
            s.restore(k, lo + len2 + k);
        }
    } else {
        rotate(s, lo, mid, hi);
    }
}
