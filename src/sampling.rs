//! Random sampling with and without replacement.
//!
//! Every sampler takes its random source as an argument. Use
//! [`SamplingConfig`] to build one, seeded for reproducible output or freshly
//! seeded from OS entropy.

use crate::error::{Result, SequenceError};
use crate::traversal::{first_index_of, select_at, NOT_FOUND};
use log::{debug, trace, warn};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// How sampling generators are seeded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SamplingConfig {
    /// Fixed seed; `None` draws a new seed from OS entropy on each `rng()` call.
    pub seed: Option<u64>,
}

impl SamplingConfig {
    /// Entropy-seeded configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that always yields the same generator state.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Builds a generator for one sampling context.
    pub fn rng(&self) -> Xoshiro256PlusPlus {
        match self.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        }
    }
}

/// Draws `n` elements at distinct positions, in draw order.
///
/// Positions are drawn uniformly from `[1, length]`. A position that was
/// already taken is replaced by probing `p + 1`, `p - 1`, `p + 2`, ... until a
/// free one turns up. `n <= 0` gives an empty result and `n` above the length
/// is clamped, which shuffles the whole sequence.
///
/// # Errors
/// [`SequenceError::NoFreshPosition`] if probing leaves the sequence on both
/// sides without finding a free position.
pub fn rand_select<T, R>(seq: &[T], n: i64, rng: &mut R) -> Result<Vec<T>>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let len = seq.len();
    let wanted = if n <= 0 {
        0
    } else {
        usize::try_from(n).map_or(len, |n| n.min(len))
    };
    debug!("rand_select: requested {n}, drawing {wanted} of {len}");

    let mut drawn: Vec<i64> = Vec::with_capacity(wanted);
    let mut out = Vec::with_capacity(wanted);

    while drawn.len() < wanted {
        let candidate = rng.random_range(1..=len as i64);
        let position = fresh_position(candidate, &drawn, len)?;
        out.push(select_at(position, seq)?.clone());
        drawn.push(position);
    }

    Ok(out)
}

/// Finds the untaken position closest to `position`, trying above first.
fn fresh_position(position: i64, drawn: &[i64], len: usize) -> Result<i64> {
    let is_free = |p: i64| first_index_of(&p, drawn) == NOT_FOUND;
    if is_free(position) {
        return Ok(position);
    }

    let upper = len as i64;
    for offset in 1i64.. {
        let up = position + offset;
        let down = position - offset;
        if up > upper && down < 1 {
            break;
        }
        if up <= upper && is_free(up) {
            trace!("position {position} taken, probed up to {up}");
            return Ok(up);
        }
        if down >= 1 && is_free(down) {
            trace!("position {position} taken, probed down to {down}");
            return Ok(down);
        }
    }

    warn!("no free position left around {position} (len = {len})");
    Err(SequenceError::NoFreshPosition { position, len })
}

/// Draws `n` integers from `[1, boundary]` independently, repeats allowed.
///
/// `n <= 0` or `boundary <= 0` gives an empty result.
pub fn lotto_select<R: Rng + ?Sized>(n: i64, boundary: i64, rng: &mut R) -> Vec<i64> {
    if n <= 0 || boundary <= 0 {
        return Vec::new();
    }
    debug!("lotto_select: {n} draws from 1..={boundary}");
    (0..n).map(|_| rng.random_range(1..=boundary)).collect()
}

/// [`rand_select`] with a generator freshly seeded from OS entropy.
pub fn rand_select_fresh<T: Clone>(seq: &[T], n: i64) -> Result<Vec<T>> {
    rand_select(seq, n, &mut SamplingConfig::new().rng())
}

/// [`lotto_select`] with a generator freshly seeded from OS entropy.
pub fn lotto_select_fresh(n: i64, boundary: i64) -> Vec<i64> {
    lotto_select(n, boundary, &mut SamplingConfig::new().rng())
}

/// Random permutation of `seq`.
///
/// Not implemented: always returns an empty sequence.
pub fn permutation<T, R>(seq: &[T], _rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    debug!("permutation is not implemented; ignoring {} elements", seq.len());
    Vec::new()
}
