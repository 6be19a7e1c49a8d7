//! Range validation errors.
//!
//! Every ranged entry point (`*_range`) takes a `start` offset and a `len`. The plain entry
//! points panic with the message of a [`RangeError`] when the range does not fit the
//! sequence; the `try_*` variants return it instead. Either way the check happens before
//! any element is read or written, so a rejected call leaves the sequence untouched.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// A `start`/`len` pair that does not describe a range inside the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// `start + len` does not fit in a `usize`.
    Overflow {
        /// Requested start offset.
        start: usize,
        /// Requested length.
        len: usize,
    },

    /// The range ends past the end of the sequence.
    OutOfBounds {
        /// Requested start offset.
        start: usize,
        /// Requested length.
        len: usize,
        /// Length of the sequence.
        seq_len: usize,
    },
}

impl Display for RangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            RangeError::Overflow { start, len } => {
                write!(f, "range start {start} with length {len} overflows usize")
            }
            RangeError::OutOfBounds {
                start,
                len,
                seq_len,
            } => write!(
                f,
                "range {start}..{} out of bounds for sequence of length {seq_len}",
                start.saturating_add(*len)
            ),
        }
    }
}

impl Error for RangeError {}

/// Checks that `start..start + len` lies within a sequence of `seq_len` elements.
///
/// Returns the exclusive end of the range.
pub(crate) fn check_range(
    start: usize,
    len: usize,
    seq_len: usize,
) -> std::result::Result<usize, RangeError> {
    let end = start
        .checked_add(len)
        .ok_or(RangeError::Overflow { start, len })?;

    if end > seq_len {
        return Err(RangeError::OutOfBounds {
            start,
            len,
            seq_len,
        });
    }

    Ok(end)
}
