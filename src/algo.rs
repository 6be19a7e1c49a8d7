//! Core sorting algorithms (introspective sort), binary search and shuffling.
//!
//! The sort is a hybrid of:
//! - **Small-range sorts**: a conditional swap for 2 elements, a 3-element network, and
//!   insertion sort up to [`SMALL_SORT_THRESHOLD`] elements.
//! - **Median-of-three Quicksort**: for larger ranges while the depth budget lasts.
//! - **Heapsort**: once the depth budget is spent, which caps the worst case at O(n log n).
//!
//! Everything operates in place through [`IndexedSequence`] and [`Comparator`], and allocates
//! nothing. The main entry points are [`sort`] and [`sort_range`].

use crate::core::{Comparator, IndexedSequence, NaturalOrder};
use crate::error::{RangeError, check_range};
use rand::Rng;
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Ranges of at most this many elements skip partitioning.
pub const SMALL_SORT_THRESHOLD: usize = 16;

/// Sorts the whole sequence in place.
///
/// This is [`sort_range`] over `0..sequence.len()`.
///
/// # Examples
///
/// ```
/// use totalsort::{float::SplitInlinedComparator, sort};
///
/// let mut data = vec![5.0, 3.0, f64::NAN, 1.0, f64::NAN, 4.0];
/// sort(&mut data, SplitInlinedComparator);
///
/// assert_eq!(&data[..4], &[1.0, 3.0, 4.0, 5.0]);
/// assert!(data[4..].iter().all(|x| x.is_nan()));
/// ```
pub fn sort<S, C>(sequence: &mut S, comparator: C)
where
    S: IndexedSequence + ?Sized,
    C: Comparator<S::Item>,
{
    let len = sequence.len();
    sort_unchecked(sequence, 0, len, &comparator);
}

/// Sorts the whole sequence in place using a comparison closure.
///
/// ```
/// use totalsort::sort_by;
///
/// let mut words = vec!["ccc", "a", "bb"];
/// sort_by(&mut words, |a, b| a.len().cmp(&b.len()));
/// assert_eq!(words, vec!["a", "bb", "ccc"]);
/// ```
pub fn sort_by<S, F>(sequence: &mut S, compare: F)
where
    S: IndexedSequence + ?Sized,
    F: Fn(&S::Item, &S::Item) -> Ordering,
{
    sort(sequence, compare);
}

/// Sorts the whole sequence in place by the elements' [`Ord`] implementation.
pub fn sort_natural<S>(sequence: &mut S)
where
    S: IndexedSequence + ?Sized,
    S::Item: Ord,
{
    sort(sequence, NaturalOrder);
}

/// Sorts `sequence[start..start + len]` in place into non-descending order.
///
/// Elements outside the range are not touched. The depth budget is derived from the length
/// of the whole sequence, not of the range.
///
/// # Panics
///
/// Panics if the range does not lie within the sequence. See [`try_sort_range`] for a
/// non-panicking variant.
///
/// # Examples
///
/// ```
/// use totalsort::{core::NaturalOrder, sort_range};
///
/// let mut data = [9, 4, 3, 2, 1, 0];
/// sort_range(&mut data[..], 1, 4, NaturalOrder);
/// assert_eq!(data, [9, 1, 2, 3, 4, 0]);
/// ```
pub fn sort_range<S, C>(sequence: &mut S, start: usize, len: usize, comparator: C)
where
    S: IndexedSequence + ?Sized,
    C: Comparator<S::Item>,
{
    if let Err(err) = check_range(start, len, sequence.len()) {
        panic!("{err}");
    }
    sort_unchecked(sequence, start, len, &comparator);
}

/// Sorts `sequence[start..start + len]` in place, rejecting an invalid range.
///
/// On error the sequence is left unchanged.
pub fn try_sort_range<S, C>(
    sequence: &mut S,
    start: usize,
    len: usize,
    comparator: C,
) -> Result<(), RangeError>
where
    S: IndexedSequence + ?Sized,
    C: Comparator<S::Item>,
{
    check_range(start, len, sequence.len()).inspect_err(|err| debug!(%err, "sort rejected"))?;
    sort_unchecked(sequence, start, len, &comparator);
    Ok(())
}

fn sort_unchecked<S, C>(sequence: &mut S, start: usize, len: usize, comparator: &C)
where
    S: IndexedSequence + ?Sized,
    C: Comparator<S::Item>,
{
    if len < 2 {
        return;
    }

    // len >= 2 implies sequence.len() >= 2, so ilog2 is well defined.
    let depth_limit = 2 * sequence.len().ilog2() as usize;
    introsort(sequence, start, start + len - 1, depth_limit, comparator);
}

/// Introspective sort over the inclusive range `lo..=hi`.
///
/// Recurses only into the smaller partition and loops on the larger one, so stack depth stays
/// O(log n) whatever the comparator does.
fn introsort<S, C>(
    keys: &mut S,
    mut lo: usize,
    mut hi: usize,
    mut depth_limit: usize,
    comparator: &C,
) where
    S: IndexedSequence + ?Sized,
    C: Comparator<S::Item>,
{
    while hi > lo {
        let n = hi - lo + 1;
        if n <= SMALL_SORT_THRESHOLD {
            match n {
                2 => swap_if_greater(keys, comparator, lo, hi),
                3 => {
                    swap_if_greater(keys, comparator, lo, hi - 1);
                    swap_if_greater(keys, comparator, lo, hi);
                    swap_if_greater(keys, comparator, hi - 1, hi);
                }
                _ => insertion_sort(keys, lo, hi, comparator),
            }
            return;
        }

        if depth_limit == 0 {
            trace!(lo, hi, "depth budget exhausted, falling back to heapsort");
            heapsort(keys, lo, hi, comparator);
            return;
        }

        depth_limit -= 1;
        let p = pick_pivot_and_partition(keys, lo, hi, comparator);

        // p lies in lo + 1..=hi - 1, so neither side underflows.
        if p - lo <= hi - p {
            introsort(keys, lo, p - 1, depth_limit, comparator);
            lo = p + 1;
        } else {
            introsort(keys, p + 1, hi, depth_limit, comparator);
            hi = p - 1;
        }
    }
}

/// Median-of-three partition of `lo..=hi` (at least 4 elements).
///
/// Returns the final index of the pivot: everything left of it compares `<=` and everything
/// right of it compares `>=`.
fn pick_pivot_and_partition<S, C>(keys: &mut S, lo: usize, hi: usize, comparator: &C) -> usize
where
    S: IndexedSequence + ?Sized,
    C: Comparator<S::Item>,
{
    let mid = lo + ((hi - lo) >> 1);

    swap_if_greater(keys, comparator, lo, mid);
    swap_if_greater(keys, comparator, lo, hi);
    swap_if_greater(keys, comparator, mid, hi);

    let pivot = keys.get(mid);
    let pivot_slot = hi - 1;
    keys.swap(mid, pivot_slot);

    // keys[lo] <= pivot and keys[hi] >= pivot act as sentinels for a consistent comparator.
    // The explicit bounds keep an inconsistent one from walking off the range.
    let mut i = lo;
    let mut j = pivot_slot;

    while i < j {
        loop {
            i += 1;
            if i >= pivot_slot || comparator.compare(&keys.get(i), &pivot) != Ordering::Less {
                break;
            }
        }

        loop {
            j -= 1;
            if j <= lo || comparator.compare(&pivot, &keys.get(j)) != Ordering::Less {
                break;
            }
        }

        if i >= j {
            break;
        }

        keys.swap(i, j);
    }

    keys.swap(i, pivot_slot);
    i
}

/// Stable insertion sort over `lo..=hi`.
fn insertion_sort<S, C>(keys: &mut S, lo: usize, hi: usize, comparator: &C)
where
    S: IndexedSequence + ?Sized,
    C: Comparator<S::Item>,
{
    for i in lo + 1..=hi {
        let x = keys.get(i);
        let mut j = i;

        while j > lo {
            let y = keys.get(j - 1);
            if comparator.compare(&x, &y) != Ordering::Less {
                break;
            }

            keys.set(j, y);
            j -= 1;
        }

        keys.set(j, x);
    }
}

/// In-place heapsort over `lo..=hi`.
fn heapsort<S, C>(keys: &mut S, lo: usize, hi: usize, comparator: &C)
where
    S: IndexedSequence + ?Sized,
    C: Comparator<S::Item>,
{
    let n = hi - lo + 1;

    for i in (1..=n / 2).rev() {
        down_heap(keys, i, n, lo, comparator);
    }

    for j in (2..=n).rev() {
        keys.swap(lo, lo + j - 1);
        down_heap(keys, 1, j - 1, lo, comparator);
    }
}

/// Sifts the element at 1-based heap position `i` down a max-heap of `n` elements rooted at
/// `lo`.
fn down_heap<S, C>(keys: &mut S, mut i: usize, n: usize, lo: usize, comparator: &C)
where
    S: IndexedSequence + ?Sized,
    C: Comparator<S::Item>,
{
    let x = keys.get(lo + i - 1);

    while i <= n / 2 {
        let mut child = 2 * i;

        if child < n
            && comparator.compare(&keys.get(lo + child - 1), &keys.get(lo + child))
                == Ordering::Less
        {
            child += 1;
        }

        let larger = keys.get(lo + child - 1);
        if comparator.compare(&x, &larger) != Ordering::Less {
            break;
        }

        keys.set(lo + i - 1, larger);
        i = child;
    }

    keys.set(lo + i - 1, x);
}

#[inline(always)]
fn swap_if_greater<S, C>(keys: &mut S, comparator: &C, i: usize, j: usize)
where
    S: IndexedSequence + ?Sized,
    C: Comparator<S::Item>,
{
    if i != j && comparator.compare(&keys.get(i), &keys.get(j)) == Ordering::Greater {
        keys.swap(i, j);
    }
}

/// Searches the whole sorted sequence for `target`.
///
/// See [`binary_search_range`] for the return encoding.
///
/// ```
/// use totalsort::{binary_search, core::NaturalOrder};
///
/// let data = [1, 3, 5, 7];
/// assert_eq!(binary_search(&data[..], &5, NaturalOrder), 2);
/// assert_eq!(!binary_search(&data[..], &4, NaturalOrder), 2);
/// ```
pub fn binary_search<S, C>(sequence: &S, target: &S::Item, comparator: C) -> isize
where
    S: IndexedSequence + ?Sized,
    C: Comparator<S::Item>,
{
    search_unchecked(sequence, 0, sequence.len(), target, &comparator)
}

/// Searches the sorted range `sequence[start..start + len]` for `target`.
///
/// Returns the index of an element equivalent to `target` if there is one; with duplicates,
/// any of the matching indices may be returned. Otherwise returns the bitwise complement of
/// the index at which `target` could be inserted while keeping the range sorted. The
/// complement is always negative, and `!result` recovers the insertion point. Use
/// [`decode_search`] to turn the encoding into a `Result`.
///
/// The range must already be sorted by `comparator`, otherwise the result is unspecified.
///
/// # Panics
///
/// Panics if the range does not lie within the sequence.
pub fn binary_search_range<S, C>(
    sequence: &S,
    start: usize,
    len: usize,
    target: &S::Item,
    comparator: C,
) -> isize
where
    S: IndexedSequence + ?Sized,
    C: Comparator<S::Item>,
{
    if let Err(err) = check_range(start, len, sequence.len()) {
        panic!("{err}");
    }
    search_unchecked(sequence, start, len, target, &comparator)
}

/// Non-panicking variant of [`binary_search_range`].
pub fn try_binary_search_range<S, C>(
    sequence: &S,
    start: usize,
    len: usize,
    target: &S::Item,
    comparator: C,
) -> Result<isize, RangeError>
where
    S: IndexedSequence + ?Sized,
    C: Comparator<S::Item>,
{
    check_range(start, len, sequence.len()).inspect_err(|err| debug!(%err, "search rejected"))?;
    Ok(search_unchecked(sequence, start, len, target, &comparator))
}

fn search_unchecked<S, C>(
    sequence: &S,
    start: usize,
    len: usize,
    target: &S::Item,
    comparator: &C,
) -> isize
where
    S: IndexedSequence + ?Sized,
    C: Comparator<S::Item>,
{
    let mut lo = start;
    let mut hi = start + len;

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        match comparator.compare(&sequence.get(mid), target) {
            Ordering::Equal => return mid as isize,
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    !(lo as isize)
}

/// Converts a [`binary_search_range`] result into the [`slice::binary_search`] convention:
/// `Ok(index)` when found, `Err(insertion_point)` otherwise.
///
/// ```
/// use totalsort::decode_search;
///
/// assert_eq!(decode_search(3), Ok(3));
/// assert_eq!(decode_search(!3), Err(3));
/// ```
#[inline]
pub fn decode_search(result: isize) -> Result<usize, usize> {
    if result >= 0 {
        Ok(result as usize)
    } else {
        Err(!result as usize)
    }
}

/// Shuffles the whole sequence into a uniformly random permutation.
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use totalsort::{shuffle, sort_natural};
///
/// let mut data: Vec<u32> = (0..100).collect();
/// shuffle(&mut data, &mut StdRng::seed_from_u64(7));
/// sort_natural(&mut data);
/// assert_eq!(data, (0..100).collect::<Vec<_>>());
/// ```
pub fn shuffle<S, R>(sequence: &mut S, rng: &mut R)
where
    S: IndexedSequence + ?Sized,
    R: Rng + ?Sized,
{
    let len = sequence.len();
    shuffle_unchecked(sequence, 0, len, rng);
}

/// Shuffles `sequence[start..start + len]` with a Fisher–Yates pass.
///
/// # Panics
///
/// Panics if the range does not lie within the sequence.
pub fn shuffle_range<S, R>(sequence: &mut S, start: usize, len: usize, rng: &mut R)
where
    S: IndexedSequence + ?Sized,
    R: Rng + ?Sized,
{
    if let Err(err) = check_range(start, len, sequence.len()) {
        panic!("{err}");
    }
    shuffle_unchecked(sequence, start, len, rng);
}

/// Non-panicking variant of [`shuffle_range`].
pub fn try_shuffle_range<S, R>(
    sequence: &mut S,
    start: usize,
    len: usize,
    rng: &mut R,
) -> Result<(), RangeError>
where
    S: IndexedSequence + ?Sized,
    R: Rng + ?Sized,
{
    check_range(start, len, sequence.len()).inspect_err(|err| debug!(%err, "shuffle rejected"))?;
    shuffle_unchecked(sequence, start, len, rng);
    Ok(())
}

fn shuffle_unchecked<S, R>(sequence: &mut S, start: usize, len: usize, rng: &mut R)
where
    S: IndexedSequence + ?Sized,
    R: Rng + ?Sized,
{
    if len == 0 {
        return;
    }

    for i in (start + 1..start + len).rev() {
        let j = start + rng.random_range(0..=i - start);
        sequence.swap(i, j);
    }
}
