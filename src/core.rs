//! Core traits for totalsort.
//!
//! This module defines:
//! - [`IndexedSequence`]: Fixed-length random read/write access, the only view the sort engine has of the data.
//! - [`Comparator`]: The three-way ordering relation the engine sorts by.
//! - [`NaturalOrder`]: A comparator for any `T: Ord`.

use std::cmp::Ordering;
use std::collections::VecDeque;

/// A fixed-length, zero-based sequence with O(1) random read and write access.
///
/// The sort engine never resizes the sequence, so no insert/remove/iteration capability is
/// required. Anything that can hand out a copy of the element at an index and overwrite it
/// can be sorted in place.
///
/// # Examples
///
/// Implementing for a strided view over a flat buffer:
///
/// ```
/// use totalsort::core::IndexedSequence;
///
/// struct EveryOther<'a>(&'a mut [u32]);
///
/// impl IndexedSequence for EveryOther<'_> {
///     type Item = u32;
///
///     fn len(&self) -> usize {
///         self.0.len().div_ceil(2)
///     }
///
///     fn get(&self, index: usize) -> u32 {
///         self.0[index * 2]
///     }
///
///     fn set(&mut self, index: usize, value: u32) {
///         self.0[index * 2] = value;
///     }
/// }
///
/// let mut raw = [5, 0, 3, 0, 1];
/// totalsort::sort_natural(&mut EveryOther(&mut raw));
/// assert_eq!(raw, [1, 0, 3, 0, 5]);
/// ```
pub trait IndexedSequence {
    /// The element type.
    type Item;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a copy of the element at `index`.
    fn get(&self, index: usize) -> Self::Item;

    /// Overwrites the element at `index`.
    fn set(&mut self, index: usize, value: Self::Item);

    /// Exchanges the elements at `a` and `b`.
    ///
    /// The default goes through [`get`](Self::get)/[`set`](Self::set). Contiguous storage
    /// should override it with a move-based swap.
    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        if a != b {
            let tmp = self.get(a);
            let other = self.get(b);
            self.set(a, other);
            self.set(b, tmp);
        }
    }
}

impl<T: Clone> IndexedSequence for [T] {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn get(&self, index: usize) -> T {
        self[index].clone()
    }

    #[inline(always)]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_mut_slice()).
impl<T: Clone> IndexedSequence for Vec<T> {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn get(&self, index: usize) -> T {
        self[index].clone()
    }

    #[inline(always)]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

// VecDeque has O(1) random access, so it satisfies the contract even when wrapped.
impl<T: Clone> IndexedSequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index].clone()
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
}

/// A three-way ordering relation over `T`.
///
/// `Less`, `Equal` and `Greater` play the roles of a negative, zero and positive comparison
/// result. The relation must be a consistent total order (antisymmetric and transitive) for
/// the sort to produce sorted output. An inconsistent comparator yields an unspecified
/// permutation, but the sort still terminates.
///
/// Any `Fn(&T, &T) -> Ordering` is a comparator:
///
/// ```
/// use std::cmp::Ordering;
/// use totalsort::core::Comparator;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(by_len.compare(&"ab", &"abc"), Ordering::Less);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders values by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}
