//! Owned fixed-length buffer.
//!
//! [`FixedBuffer`] is a contiguous block of `T` whose length is set at construction and never
//! changes afterwards. It implements [`IndexedSequence`] with bounds-checked access and is the
//! natural home for a benchmark workload that is refilled and re-sorted many times.

use crate::core::IndexedSequence;
use std::ops::{Index, IndexMut};

/// A heap-allocated buffer of exactly `len` elements.
///
/// # Examples
///
/// ```
/// use totalsort::{FixedBuffer, float::StandardComparator, sort};
///
/// let mut buffer = FixedBuffer::from(vec![2.5_f32, f32::NAN, -1.0]);
/// sort(&mut buffer, StandardComparator);
///
/// assert_eq!(&buffer.as_slice()[..2], &[-1.0_f32, 2.5]);
/// assert!(buffer[2].is_nan());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FixedBuffer<T> {
    data: Box<[T]>,
}

impl<T> FixedBuffer<T> {
    /// Creates a buffer of `len` default values.
    pub fn new(len: usize) -> Self
    where
        T: Default,
    {
        Self::from_fn(len, |_| T::default())
    }

    /// Creates a buffer of `len` copies of `value`.
    pub fn filled(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![value; len].into_boxed_slice(),
        }
    }

    /// Creates a buffer whose element at `i` is `f(i)`.
    pub fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> Self {
        Self {
            data: (0..len).map(f).collect(),
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Overwrites the whole buffer with `src`.
    ///
    /// # Panics
    ///
    /// Panics if `src.len() != self.len()`.
    pub fn copy_from_slice(&mut self, src: &[T])
    where
        T: Copy,
    {
        self.data.copy_from_slice(src);
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }
}

impl<T> From<Vec<T>> for FixedBuffer<T> {
    fn from(data: Vec<T>) -> Self {
        Self {
            data: data.into_boxed_slice(),
        }
    }
}

impl<T> From<Box<[T]>> for FixedBuffer<T> {
    fn from(data: Box<[T]>) -> Self {
        Self { data }
    }
}

impl<T> Index<usize> for FixedBuffer<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for FixedBuffer<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Clone> IndexedSequence for FixedBuffer<T> {
    type Item = T;

    #[inline(always)]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    fn get(&self, index: usize) -> T {
        self.data[index].clone()
    }

    #[inline(always)]
    fn set(&mut self, index: usize, value: T) {
        self.data[index] = value;
    }

    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }
}
