//! Structural transformations: flattening, run grouping, run-length coding
//! and element repetition.
//!
//! Every function makes a single left-to-right pass with an accumulator, so
//! input length never turns into call depth.

use crate::node::Node;
use crate::rle_entry::RunEntry;
use crate::traversal::reverse;

/// True iff the sequence reads the same both ways.
///
/// The empty sequence is *not* a palindrome.
pub fn is_palindrome<T: PartialEq + Clone>(seq: &[T]) -> bool {
    if seq.is_empty() {
        return false;
    }
    reverse(seq) == seq
}

/// Unwraps nested groups depth-first, left to right.
pub fn flatten<T: Clone>(nodes: &[Node<T>]) -> Vec<T> {
    let mut out = Vec::new();
    // One iterator per open group; the innermost is on top.
    let mut stack = vec![nodes.iter()];

    while let Some(top) = stack.last_mut() {
        match top.next() {
            Some(Node::Single(value)) => out.push(value.clone()),
            Some(Node::Group(children)) => stack.push(children.iter()),
            None => {
                stack.pop();
            }
        }
    }

    out
}

/// Drops every element equal to the one kept before it.
pub fn compress<T: PartialEq + Clone>(seq: &[T]) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(seq.len());
    for item in seq {
        if out.last() != Some(item) {
            out.push(item.clone());
        }
    }
    out
}

/// Groups maximal runs of equal adjacent elements into sublists.
pub fn pack<T: PartialEq + Clone>(seq: &[T]) -> Vec<Vec<T>> {
    let mut out: Vec<Vec<T>> = Vec::new();
    for item in seq {
        match out.last_mut() {
            Some(run) if run.last() == Some(item) => run.push(item.clone()),
            _ => out.push(vec![item.clone()]),
        }
    }
    out
}

/// Run-length encodes the sequence.
///
/// A run of one becomes `Single`, longer runs become `Run(count, value)`.
pub fn encode<T: PartialEq + Clone>(seq: &[T]) -> Vec<RunEntry<T>> {
    let mut out = Vec::new();
    let mut iter = seq.iter();

    let Some(mut current) = iter.next() else {
        return out;
    };
    let mut run = 1usize;

    for item in iter {
        if item == current {
            run += 1;
        } else {
            out.push(entry_for(run, current));
            current = item;
            run = 1;
        }
    }
    out.push(entry_for(run, current));

    out
}

fn entry_for<T: Clone>(run: usize, value: &T) -> RunEntry<T> {
    if run == 1 {
        RunEntry::Single(value.clone())
    } else {
        RunEntry::Run(run, value.clone())
    }
}

/// Expands run-length entries back into a flat sequence.
pub fn decode<T: Clone>(entries: &[RunEntry<T>]) -> Vec<T> {
    let mut out = Vec::with_capacity(crate::rle_entry::decoded_len(entries));
    for entry in entries {
        match entry {
            RunEntry::Single(value) => out.push(value.clone()),
            RunEntry::Run(count, value) => {
                out.extend(std::iter::repeat(value).take(*count).cloned())
            }
        }
    }
    out
}

/// Each element twice in a row: `[a, b]` becomes `[a, a, b, b]`.
pub fn duplicate<T: Clone>(seq: &[T]) -> Vec<T> {
    replicate(seq, 2)
}

/// Each element `n` times in a row.
///
/// `n <= 0` gives an empty sequence.
// Non-positive counts look like an unintended corner; the empty output is
// pinned by `test_replicate_non_positive_count_is_empty`.
pub fn replicate<T: Clone>(seq: &[T], n: i64) -> Vec<T> {
    if n <= 0 {
        return Vec::new();
    }
    let n = n as usize;

    let mut out = Vec::with_capacity(seq.len().saturating_mul(n));
    for item in seq {
        out.extend(std::iter::repeat(item).take(n).cloned());
    }
    out
}
