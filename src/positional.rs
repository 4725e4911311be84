//! Positional algorithms.
//!
//! Positions here are 0-based, unlike the 1-based lookups in
//! [`traversal`](crate::traversal). Negative positions count back from the
//! end; out-of-range positions make `remove_at` and `insert_at` return their
//! input unchanged.

use crate::transform::replicate;
use crate::traversal::length;

/// Maps a negative index onto `len + index`; other values pass through.
fn normalize(index: i64, len: usize) -> i64 {
    if index < 0 {
        len as i64 + index
    } else {
        index
    }
}

/// Removes every element whose 1-based position is a multiple of `idx`.
///
/// For `idx <= 0` the result is the first element repeated once per input
/// element (empty for an empty input), not the input unchanged.
pub fn drop_every<T: Clone>(seq: &[T], idx: i64) -> Vec<T> {
    if idx <= 0 {
        // Surprising, but pinned by `test_drop_every_non_positive_repeats_head`.
        return replicate(&seq[..seq.len().min(1)], length(seq) as i64);
    }

    let step = idx as u64;
    seq.iter()
        .enumerate()
        .filter(|(i, _)| (*i as u64 + 1) % step != 0)
        .map(|(_, item)| item.clone())
        .collect()
}

/// Splits after the first `k` elements.
///
/// `k <= 0` puts everything in the suffix; `k` past the end puts everything
/// in the prefix.
pub fn split<T: Clone>(seq: &[T], k: i64) -> (Vec<T>, Vec<T>) {
    let at = if k <= 0 {
        0
    } else {
        usize::try_from(k).map_or(seq.len(), |k| k.min(seq.len()))
    };
    let (prefix, suffix) = seq.split_at(at);
    (prefix.to_vec(), suffix.to_vec())
}

/// Inclusive slice between two 0-based indices.
///
/// Negative indices are normalized against the length first. Reversed bounds
/// are swapped when the normalized `end` is non-negative; a negative `end`
/// yields nothing; a negative `start` starts at the head. Indices past the
/// end are clamped to the last element.
pub fn slice<T: Clone>(seq: &[T], start: i64, end: i64) -> Vec<T> {
    let len = seq.len();
    let mut start = normalize(start, len);
    let mut end = normalize(end, len);

    if end < 0 || len == 0 {
        return Vec::new();
    }
    if start > end {
        std::mem::swap(&mut start, &mut end);
    }

    let last = len as i64 - 1;
    let start = start.clamp(0, last) as usize;
    let end = end.min(last) as usize;
    seq[start..=end].to_vec()
}

/// Rotates left by `k` places, or right by `|k|` when `k` is negative.
///
/// The shift is taken modulo the length; an empty input comes back empty.
pub fn rotate<T: Clone>(seq: &[T], k: i64) -> Vec<T> {
    let mut out = seq.to_vec();
    let len = out.len();
    if len == 0 {
        return out;
    }

    let shift = k.rem_euclid(len as i64) as usize;
    if shift > len / 2 {
        out.rotate_right(len - shift);
    } else {
        out.rotate_left(shift);
    }
    out
}

/// Removes the element at 0-based `pos`.
///
/// Negative `pos` counts from the end. Out of range, the input is returned
/// unchanged.
pub fn remove_at<T: Clone>(pos: i64, seq: &[T]) -> Vec<T> {
    let pos = normalize(pos, seq.len());
    if pos < 0 || pos >= seq.len() as i64 {
        return seq.to_vec();
    }

    let pos = pos as usize;
    let mut out = Vec::with_capacity(seq.len() - 1);
    out.extend_from_slice(&seq[..pos]);
    out.extend_from_slice(&seq[pos + 1..]);
    out
}

/// Inserts `el` at 0-based `pos`.
///
/// Negative `pos` is normalized against `length + 1`, so `-1` appends.
/// Outside `[0, length]` the input is returned unchanged.
pub fn insert_at<T: Clone>(el: T, pos: i64, seq: &[T]) -> Vec<T> {
    let pos = normalize(pos, seq.len() + 1);
    if pos < 0 || pos > seq.len() as i64 {
        return seq.to_vec();
    }

    let mut out = seq.to_vec();
    out.insert(pos as usize, el);
    out
}

/// All integers from `a` to `b` inclusive, counting down when `a > b`.
pub fn range(a: i64, b: i64) -> Vec<i64> {
    if a <= b {
        (a..=b).collect()
    } else {
        (b..=a).rev().collect()
    }
}
