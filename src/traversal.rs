//! Core traversal primitives.
//!
//! Positions in this module are 1-based. The positional algorithms use
//! 0-based positions instead; each function states which base it takes.

use crate::error::{Result, SequenceError};

/// Returned by [`first_index_of`] when the target does not occur.
pub const NOT_FOUND: i64 = -1;

/// Number of elements in the sequence.
pub fn length<T>(seq: &[T]) -> usize {
    seq.len()
}

/// Returns a new sequence with the element order inverted.
pub fn reverse<T: Clone>(seq: &[T]) -> Vec<T> {
    seq.iter().rev().cloned().collect()
}

/// Element at 1-based position `i`, or `None` when `i < 1` or past the end.
pub fn at<T>(i: i64, seq: &[T]) -> Option<&T> {
    if i < 1 {
        return None;
    }
    usize::try_from(i - 1).ok().and_then(|idx| seq.get(idx))
}

/// Last element, or `None` for an empty sequence.
pub fn last<T>(seq: &[T]) -> Option<&T> {
    seq.last()
}

/// The final two elements in order, or `None` if there are fewer than two.
pub fn last_two<T>(seq: &[T]) -> Option<(&T, &T)> {
    match seq {
        [.., a, b] => Some((a, b)),
        _ => None,
    }
}

/// 1-based position of the first element equal to `target`, or [`NOT_FOUND`].
pub fn first_index_of<T: PartialEq>(target: &T, seq: &[T]) -> i64 {
    seq.iter()
        .position(|x| x == target)
        .map_or(NOT_FOUND, |idx| idx as i64 + 1)
}

/// Element at 1-based position `i`.
///
/// # Errors
/// [`SequenceError::IndexOutOfBounds`] when `i` is zero, negative, or greater
/// than the length. Zero goes through the same bounds check as everything else.
pub fn select_at<T>(i: i64, seq: &[T]) -> Result<&T> {
    let len = seq.len();
    if i < 1 || i as u64 > len as u64 {
        return Err(SequenceError::IndexOutOfBounds { index: i, len });
    }
    Ok(&seq[(i - 1) as usize])
}
