//! # Totalsort
//!
//! `totalsort` is an in-place, allocation-free introspective sort over any indexable sequence,
//! parameterized by a comparator, together with a family of total-order comparators for
//! floating-point values that put NaN in a well-defined place.
//!
//! ## Key Features
//!
//! - **Introsort**: Median-of-three Quicksort for large ranges, insertion sort (and tiny
//!   sorting networks) for ranges of at most 16 elements, and a Heapsort fallback once the
//!   recursion depth budget of `2 * floor(log2(n))` is spent. O(n log n) worst case, O(log n)
//!   stack.
//! - **Any Sequence**: The [`IndexedSequence`] trait only asks for `len`, `get` and `set`, so
//!   slices, `Vec`, `VecDeque`, [`FixedBuffer`] and custom views can all be sorted in place.
//! - **Any Comparator**: The [`Comparator`] trait is statically dispatched, so the comparison
//!   is inlined into the sort loop. Closures work too.
//! - **NaN-aware Floats**: [`float`] provides three interchangeable comparators for `f32`/`f64`
//!   that order NaN after every other value and treat all NaNs as equal.
//!
//! ## Usage
//!
//! ### Sorting floats with NaNs
//!
//! ```rust
//! use totalsort::prelude::*;
//!
//! let mut data = vec![5.0, 3.0, f64::NAN, 1.0, f64::NAN, 4.0];
//! sort(&mut data, StandardComparator);
//!
//! assert_eq!(&data[..4], &[1.0, 3.0, 4.0, 5.0]);
//! assert!(data[4].is_nan() && data[5].is_nan());
//! ```
//!
//! ### Sub-ranges and searching
//!
//! ```rust
//! use totalsort::prelude::*;
//!
//! let mut data = vec![10, 7, 3, 9, 1, 0];
//! sort_range(&mut data, 1, 4, NaturalOrder);
//! assert_eq!(data, vec![10, 1, 3, 7, 9, 0]);
//!
//! assert_eq!(binary_search_range(&data, 1, 4, &7, NaturalOrder), 3);
//! assert_eq!(decode_search(binary_search_range(&data, 1, 4, &8, NaturalOrder)), Err(4));
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Worst Case**: O(n log n) comparisons, guaranteed by the Heapsort fallback.
//! - **Memory Overhead**: None beyond O(log n) stack frames; the sequence is permuted in place.
//! - **Stability**: Not stable. Only the insertion sort tier preserves the order of equal
//!   elements.

pub mod algo;
pub mod buffer;
pub mod core;
pub mod error;
pub mod float;

pub use algo::{
    binary_search, binary_search_range, decode_search, shuffle, shuffle_range, sort, sort_by,
    sort_natural, sort_range, try_binary_search_range, try_shuffle_range, try_sort_range,
};
pub use buffer::FixedBuffer;
pub use crate::core::{Comparator, IndexedSequence, NaturalOrder};
pub use error::RangeError;

pub mod prelude {
    pub use crate::algo::{
        binary_search, binary_search_range, decode_search, shuffle, shuffle_range, sort, sort_by,
        sort_natural, sort_range, try_binary_search_range, try_shuffle_range, try_sort_range,
    };
    pub use crate::buffer::FixedBuffer;
    pub use crate::core::{Comparator, NaturalOrder};
    pub use crate::error::RangeError;
    pub use crate::float::{FullyInlinedComparator, SplitInlinedComparator, StandardComparator};
}
