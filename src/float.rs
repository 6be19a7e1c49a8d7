//! NaN-aware total-order comparators for `f32` and `f64`.
//!
//! IEEE-754 comparison is only a partial order: every `<`, `>` and `==` involving a NaN is
//! false. Sorting with it directly breaks the consistency the sort engine relies on. The
//! comparators here extend it to a total order:
//!
//! 1. `x < y` is `Less`, `x > y` is `Greater`.
//! 2. `x == y` is `Equal` (so `-0.0` and `+0.0` are equivalent).
//! 3. Otherwise a NaN is involved. NaN is greater than every non-NaN, and all NaNs are
//!    equivalent to each other regardless of sign or payload.
//!
//! Three implementations of the same rule are provided. They exist to measure how the
//! inlining posture of the comparison affects sort throughput and must agree on every
//! input pair:
//!
//! - [`compare_standard`] / [`StandardComparator`]: the reference, built on `partial_cmp`.
//! - [`compare_fully_inlined`] / [`FullyInlinedComparator`]: the whole chain is force-inlined.
//! - [`compare_split_inlined`] / [`SplitInlinedComparator`]: the ordered fast path is
//!   force-inlined and the NaN resolution is moved to a cold, out-of-line function.
//!
//! Note that this differs from [`f64::total_cmp`], which distinguishes `-0.0` from `+0.0` and
//! orders negative NaNs first.

use crate::core::Comparator;
use std::cmp::Ordering;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A primitive IEEE-754 float the comparators in this module understand.
///
/// Sealed; implemented for `f32` and `f64`.
pub trait NanFloat: sealed::Sealed + Copy + PartialOrd {
    /// Returns `true` if `self` is any NaN, quiet or signaling.
    fn is_nan(self) -> bool;
}

impl NanFloat for f32 {
    #[inline(always)]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }
}

impl NanFloat for f64 {
    #[inline(always)]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }
}

/// Reference total-order comparison. NaN collates after every other value.
///
/// ```
/// use std::cmp::Ordering;
/// use totalsort::float::compare_standard;
///
/// assert_eq!(compare_standard(1.0_f64, f64::NAN), Ordering::Less);
/// assert_eq!(compare_standard(f64::NAN, f64::INFINITY), Ordering::Greater);
/// assert_eq!(compare_standard(-0.0_f64, 0.0), Ordering::Equal);
/// ```
pub fn compare_standard<F: NanFloat>(x: F, y: F) -> Ordering {
    match x.partial_cmp(&y) {
        Some(ordering) => ordering,
        None => match (x.is_nan(), y.is_nan()) {
            (false, _) => Ordering::Less,
            (true, false) => Ordering::Greater,
            (true, true) => Ordering::Equal,
        },
    }
}

/// Same ordering as [`compare_standard`], force-inlined into every call site.
#[inline(always)]
pub fn compare_fully_inlined<F: NanFloat>(x: F, y: F) -> Ordering {
    if x < y {
        return Ordering::Less;
    }
    if x > y {
        return Ordering::Greater;
    }
    if x == y {
        return Ordering::Equal;
    }
    if !x.is_nan() {
        return Ordering::Less;
    }
    if !y.is_nan() {
        return Ordering::Greater;
    }
    Ordering::Equal
}

/// Same ordering as [`compare_standard`]. Only the ordered comparisons are inlined; the NaN
/// case is resolved out of line.
#[inline(always)]
pub fn compare_split_inlined<F: NanFloat>(x: F, y: F) -> Ordering {
    if x < y {
        return Ordering::Less;
    }
    if x > y {
        return Ordering::Greater;
    }
    if x == y {
        return Ordering::Equal;
    }
    compare_with_nan(x, y)
}

// At least one of `x`, `y` is NaN.
#[cold]
#[inline(never)]
fn compare_with_nan<F: NanFloat>(x: F, y: F) -> Ordering {
    if !x.is_nan() {
        return Ordering::Less;
    }
    if !y.is_nan() {
        return Ordering::Greater;
    }
    Ordering::Equal
}

/// Comparator wrapping [`compare_standard`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardComparator;

/// Comparator wrapping [`compare_fully_inlined`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FullyInlinedComparator;

/// Comparator wrapping [`compare_split_inlined`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SplitInlinedComparator;

impl<F: NanFloat> Comparator<F> for StandardComparator {
    #[inline(always)]
    fn compare(&self, a: &F, b: &F) -> Ordering {
        compare_standard(*a, *b)
    }
}

impl<F: NanFloat> Comparator<F> for FullyInlinedComparator {
    #[inline(always)]
    fn compare(&self, a: &F, b: &F) -> Ordering {
        compare_fully_inlined(*a, *b)
    }
}

impl<F: NanFloat> Comparator<F> for SplitInlinedComparator {
    #[inline(always)]
    fn compare(&self, a: &F, b: &F) -> Ordering {
        compare_split_inlined(*a, *b)
    }
}
