//! Index-space searches, block rotation and the in-place merge built from them.
//!
//! Every search here is expressed through [`partition_point`] over a predicate on positions,
//! which is what lets the same code search live storage, scratch slots, or a mix of both.

use crate::core::Sortable;
use crate::primitives::reverse;
use std::cmp::Ordering;

/// Returns the first index in `[from, to)` for which `pred` is false, assuming `pred` holds
/// for a (possibly empty) prefix of the range and fails for the rest.
pub(crate) fn partition_point<P>(mut from: usize, to: usize, mut pred: P) -> usize
where
    P: FnMut(usize) -> bool,
{
    let mut len = to - from;
    while len > 0 {
        let half = len / 2;
        let mid = from + half;
        if pred(mid) {
            from = mid + 1;
            len -= half + 1;
        } else {
            len = half;
        }
    }
    from
}

/// Same result as [`partition_point`], probing `from`, `from + 1`, `from + 3`, `from + 7`, ...
/// before the binary search. Cheap when the answer is close to `from`.
pub(crate) fn gallop_forward<P>(from: usize, to: usize, mut pred: P) -> usize
where
    P: FnMut(usize) -> bool,
{
    let mut base = from;
    let mut probe = from;
    let mut step = 1usize;
    while probe < to && pred(probe) {
        base = probe + 1;
        probe = probe.saturating_add(step);
        step = step.saturating_mul(2);
    }
    partition_point(base, probe.min(to), pred)
}

/// Same result as [`partition_point`], probing `to - 1`, `to - 3`, `to - 7`, ... before the
/// binary search. Cheap when the answer is close to `to`.
pub(crate) fn gallop_backward<P>(from: usize, to: usize, mut pred: P) -> usize
where
    P: FnMut(usize) -> bool,
{
    // Everything at or after `top` fails the predicate.
    let mut top = to;
    let mut step = 1usize;
    while top > from {
        let probe = top - step.min(top - from);
        if pred(probe) {
            return partition_point(probe + 1, top, pred);
        }
        top = probe;
        step = step.saturating_mul(2);
    }
    from
}

/// Leftmost insertion point of the element at `pivot` in the sorted range `[from, to)`.
pub(crate) fn lower_bound<S: Sortable + ?Sized>(
    s: &mut S,
    from: usize,
    to: usize,
    pivot: usize,
) -> usize {
    partition_point(from, to, |k| s.compare(k, pivot) == Ordering::Less)
}

/// Rightmost insertion point of the element at `pivot` in the sorted range `[from, to)`.
pub(crate) fn upper_bound<S: Sortable + ?Sized>(
    s: &mut S,
    from: usize,
    to: usize,
    pivot: usize,
) -> usize {
    partition_point(from, to, |k| s.compare(pivot, k) != Ordering::Less)
}

/// Exchanges `[lo, mid)` and `[mid, hi)` with three reversals.
pub(crate) fn rotate<S: Sortable + ?Sized>(s: &mut S, lo: usize, mid: usize, hi: usize) {
    if lo == mid || mid == hi {
        return;
    }
    reverse(s, lo, mid);
    reverse(s, mid, hi);
    reverse(s, lo, hi);
}

/// Stable merge of the sorted runs `[from, mid)` and `[mid, to)` without scratch memory.
pub(crate) fn merge_in_place<S: Sortable + ?Sized>(s: &mut S, from: usize, mid: usize, to: usize) {
    merge_in_place_with(
        s,
        from,
        mid,
        to,
        &mut |s: &mut S, lo: usize, mid: usize, hi: usize| rotate(s, lo, mid, hi),
    );
}

/// [`merge_in_place`] with a pluggable rotation, so budgeted sorters can rotate through
/// scratch when a block is small enough.
///
/// Cutting the left side uses [`lower_bound`] in the right side and cutting the right side
/// uses [`upper_bound`] in the left side: right elements equal to a left element always stay
/// behind it, which is what makes the merge stable.
pub(crate) fn merge_in_place_with<S, R>(
    s: &mut S,
    mut from: usize,
    mid: usize,
    mut to: usize,
    rotate_blocks: &mut R,
) where
    S: Sortable + ?Sized,
    R: FnMut(&mut S, usize, usize, usize),
{
    if from == mid || mid == to || s.compare(mid - 1, mid) != Ordering::Greater {
        return;
    }
    if to - from == 2 {
        s.swap(mid - 1, mid);
        return;
    }
    // a[mid - 1] > a[mid] bounds both scans.
    while s.compare(from, mid) != Ordering::Greater {
        from += 1;
    }
    while s.compare(mid - 1, to - 1) != Ordering::Greater {
        to -= 1;
    }

    let (first_cut, second_cut) = if mid - from > to - mid {
        let first_cut = from + (mid - from) / 2;
        (first_cut, lower_bound(s, mid, to, first_cut))
    } else {
        let second_cut = mid + (to - mid) / 2;
        (upper_bound(s, from, mid, second_cut), second_cut)
    };

    rotate_blocks(s, first_cut, mid, second_cut);
    let new_mid = first_cut + (second_cut - mid);
    merge_in_place_with(s, from, first_cut, new_mid, rotate_blocks);
    merge_in_place_with(s, new_mid, second_cut, to, rotate_blocks);
}
