//! # SeqKit - Generic Sequence Algorithms
//!
//! Eager, allocation-returning algorithms over ordered sequences of any
//! element type:
//! 1. **Traversal**: length, reverse, 1-based lookups
//! 2. **Transformation**: flatten, compress, pack, run-length encode/decode, replicate
//! 3. **Positional**: 0-based split, slice, rotate, insert and remove
//! 4. **Sampling**: draws with and without replacement from an explicit generator
//!
//! Inputs are borrowed slices and results are new `Vec`s; nothing mutates
//! its input.
//!
//! ## Example
//!
//! ```
//! use seqkit_rs::{decode, encode, rotate, RunEntry};
//!
//! let input = ["a", "a", "a", "b", "c", "c"];
//! let encoded = encode(&input);
//! assert_eq!(
//!     encoded,
//!     vec![RunEntry::Run(3, "a"), RunEntry::Single("b"), RunEntry::Run(2, "c")]
//! );
//! assert_eq!(decode(&encoded), input);
//!
//! assert_eq!(rotate(&[1, 2, 3, 4, 5], 2), vec![3, 4, 5, 1, 2]);
//! ```
//!
//! ## Index bases
//!
//! The traversal lookups (`at`, `select_at`, `first_index_of`) count from 1.
//! The positional algorithms (`slice`, `remove_at`, `insert_at`, ...) count
//! from 0 and accept negative indices relative to the end.

mod error;
mod node;
mod positional;
mod rle_entry;
mod sampling;
mod transform;
mod traversal;


pub use error::{Result, SequenceError};
pub use node::Node;
pub use positional::{drop_every, insert_at, range, remove_at, rotate, slice, split};
pub use rle_entry::{decoded_len, RunEntry};
pub use sampling::{
    lotto_select, lotto_select_fresh, permutation, rand_select, rand_select_fresh,
    SamplingConfig,
};
pub use transform::{
    compress, decode, duplicate, encode, flatten, is_palindrome, pack, replicate,
};
pub use traversal::{at, first_index_of, last, last_two, length, reverse, select_at, NOT_FOUND};
