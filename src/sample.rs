//! Sampling without replacement.
//!
//! Selects `r` distinct integers from `{0, .., n-1}` so that every `r`-subset
//! is equally likely, and returns them in uniformly random order.
//!
//! Two strategies, picked by expected cost:
//!
//! - **Sparse** (`r(r+1)/2 < n`): rejection sampling. Draw uniform indices
//!   and keep the ones not seen before. Values are emitted in the order they
//!   were first drawn, which is already a uniformly random order.
//! - **Dense** (otherwise): a single selection scan. Index `k` is kept with
//!   probability `needed / remaining`, which yields exactly `r` ascending
//!   picks in at most `n` Bernoulli draws; the picks are then shuffled.
//!
//! The threshold only affects running time. Both paths are uniform.
//!
//! ## References
//!
//! - Knuth, TAOCP vol. 2, §3.4.2, Algorithm S (selection sampling).

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::trace;

use crate::error::{Error, Result};
use crate::source::Random;

/// Which algorithm a sample uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Rejection sampling into a duplicate-free set.
    Sparse,
    /// Selection scan followed by a shuffle.
    Dense,
}

impl Strategy {
    /// Pick the cheaper strategy for drawing `r` of `n`.
    ///
    /// Compares the rejection sampler's expected collisions, `r(r+1)/2`,
    /// against the population size. Evaluated in `f64` so it cannot overflow.
    pub fn select(n: u64, r: u64) -> Self {
        let r = r as f64;
        if r * (r + 1.0) / 2.0 < n as f64 {
            Strategy::Sparse
        } else {
            Strategy::Dense
        }
    }
}

/// Integer types usable as population sizes and sample values.
pub trait SampleIndex: Copy + Eq + Hash + Debug {
    /// The value as `u64`, or `None` when negative.
    fn to_u64(self) -> Option<u64>;

    /// Convert back from a value known to be below some `n: Self`.
    fn from_u64_unchecked(v: u64) -> Self;

    /// Lossless widening for error reporting.
    fn to_i128(self) -> i128;
}

macro_rules! impl_sample_index {
    ($($t:ty),*) => {$(
        impl SampleIndex for $t {
            #[inline]
            fn to_u64(self) -> Option<u64> {
                u64::try_from(self).ok()
            }

            #[inline]
            fn from_u64_unchecked(v: u64) -> Self {
                v as $t
            }

            #[inline]
            fn to_i128(self) -> i128 {
                self as i128
            }
        }
    )*};
}

impl_sample_index!(i32, i64, u32, u64, usize);

fn checked_range<I: SampleIndex>(n: I, r: I) -> Result<(u64, u64)> {
    match (n.to_u64(), r.to_u64()) {
        (Some(n64), Some(r64)) if r64 <= n64 => Ok((n64, r64)),
        _ => Err(Error::InvalidRange {
            n: n.to_i128(),
            r: r.to_i128(),
        }),
    }
}

impl Random {
    /// Select `r` distinct values from `[0, n)` in uniformly random order.
    ///
    /// Fails with [`Error::InvalidRange`] when `n < 0`, `r < 0` or `r > n`,
    /// before any randomness is consumed.
    ///
    /// ```
    /// use variate::Random;
    ///
    /// let mut rng = Random::seeded(1234);
    /// let picks: Vec<u32> = rng.sample(10, 3).unwrap();
    /// assert_eq!(picks.len(), 3);
    /// ```
    pub fn sample<I: SampleIndex>(&mut self, n: I, r: I) -> Result<Vec<I>> {
        let (n64, r64) = checked_range(n, r)?;
        self.sample_with_strategy(n, r, Strategy::select(n64, r64))
    }

    /// Like [`sample`](Self::sample), writing into `out`, whose length must
    /// equal `r`.
    pub fn sample_into<I: SampleIndex>(&mut self, n: I, r: I, out: &mut [I]) -> Result<()> {
        let (n64, r64) = checked_range(n, r)?;
        if out.len() as u64 != r64 {
            return Err(Error::BufferLength {
                expected: r64 as usize,
                actual: out.len(),
            });
        }
        self.fill_sample(n64, out, Strategy::select(n64, r64))
    }

    /// Like [`sample`](Self::sample), with the strategy forced.
    ///
    /// Both strategies are valid for any `r <= n`; this bypasses only the
    /// cost heuristic.
    pub fn sample_with_strategy<I: SampleIndex>(
        &mut self,
        n: I,
        r: I,
        strategy: Strategy,
    ) -> Result<Vec<I>> {
        let (n64, r64) = checked_range(n, r)?;
        let r = usize::try_from(r64).map_err(|_| Error::InvalidRange {
            n: n.to_i128(),
            r: r.to_i128(),
        })?;
        let mut out = vec![I::from_u64_unchecked(0); r];
        self.fill_sample(n64, &mut out, strategy)?;
        Ok(out)
    }

    fn fill_sample<I: SampleIndex>(
        &mut self,
        n: u64,
        out: &mut [I],
        strategy: Strategy,
    ) -> Result<()> {
        trace!(n, r = out.len(), ?strategy, "sampling without replacement");
        match strategy {
            Strategy::Sparse => {
                self.sparse_sample(n, out);
                Ok(())
            }
            Strategy::Dense => self.dense_sample(n, out),
        }
    }

    fn sparse_sample<I: SampleIndex>(&mut self, n: u64, out: &mut [I]) {
        // Membership only; output order is draw order, never hash order.
        let mut chosen = HashSet::with_capacity(out.len());
        let mut filled = 0;
        while filled < out.len() {
            let x = self.uniform_below(n);
            if chosen.insert(x) {
                out[filled] = I::from_u64_unchecked(x);
                filled += 1;
            }
        }
    }

    fn dense_sample<I: SampleIndex>(&mut self, n: u64, out: &mut [I]) -> Result<()> {
        let mut needed = out.len() as u64;
        let mut remaining = n;
        let mut k = 0u64;
        let mut filled = 0;

        // needed <= remaining holds throughout, so the ratio stays in [0, 1]
        // and reaches 1 exactly when every remaining index must be taken.
        while needed > 0 {
            if self.bernoulli(needed as f64 / remaining as f64)? {
                out[filled] = I::from_u64_unchecked(k);
                filled += 1;
                needed -= 1;
            }
            remaining -= 1;
            k += 1;
        }

        self.shuffle(out);
        Ok(())
    }
}
