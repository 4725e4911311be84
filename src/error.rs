use thiserror::Error;

/// Failures reported by the operations that can fail outright.
///
/// Lookups that merely find nothing return `Option` instead, and positional
/// edits with an out-of-range position return their input unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// A 1-based index was zero, negative, or past the end.
    #[error("index out of bounds: {index} (len = {len})")]
    IndexOutOfBounds { index: i64, len: usize },

    /// Collision probing in `rand_select` ran off both ends of the sequence.
    #[error("cannot find a new random element near position {position} (len = {len})")]
    NoFreshPosition { position: i64, len: usize },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SequenceError>;
