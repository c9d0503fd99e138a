//! In-place uniform permutation.
//!
//! Fisher–Yates, scanning from the last index down: position `i` is swapped
//! with a uniformly chosen position in `[0, i]`. Every ordering of the input
//! is equally likely.

use rand::Rng;

use crate::source::Random;

/// Shuffle `items` in place using a caller-supplied RNG.
///
/// Exists for callers that bring their own engine (tests, benchmarks).
/// Inside this crate the shared [`Random`] engine is always used.
pub fn shuffle_with_rng<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

impl Random {
    /// Uniformly permute `items` in place.
    ///
    /// Consumes one uniform index draw per element after the first.
    #[inline]
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        shuffle_with_rng(items, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn empty_and_singleton_are_untouched() {
        let mut rng = Random::seeded(0);
        let mut empty: [u8; 0] = [];
        rng.shuffle(&mut empty);

        let mut one = [42];
        rng.shuffle(&mut one);
        assert_eq!(one, [42]);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = Random::seeded(1);
        let mut xs: Vec<u32> = (0..100).collect();
        rng.shuffle(&mut xs);
        assert_ne!(xs, (0..100).collect::<Vec<_>>());
        xs.sort_unstable();
        assert_eq!(xs, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn shared_engine_matches_external_rng() {
        // Same seed through the wrapper and through a bare engine gives the
        // same permutation: the shuffle draws nothing beyond its index draws.
        let mut rng = Random::seeded(9);
        let mut bare = ChaCha8Rng::seed_from_u64(9);

        let mut a: Vec<u8> = (0..20).collect();
        let mut b = a.clone();
        rng.shuffle(&mut a);
        shuffle_with_rng(&mut b, &mut bare);
        assert_eq!(a, b);
    }

    #[test]
    fn all_orderings_equally_likely() {
        // 3 elements -> 6 orderings; chi-squared with df = 5.
        let trials = 60_000;
        let mut counts = std::collections::HashMap::new();
        let mut rng = Random::seeded(2024);

        for _ in 0..trials {
            let mut xs = [0u8, 1, 2];
            rng.shuffle(&mut xs);
            *counts.entry(xs).or_insert(0usize) += 1;
        }

        assert_eq!(counts.len(), 6);
        let expected = trials as f64 / 6.0;
        let chi2: f64 = counts
            .values()
            .map(|&c| {
                let diff = c as f64 - expected;
                diff * diff / expected
            })
            .sum();

        // p = 0.001 critical value for df = 5 is ~20.5.
        assert!(chi2 < 20.5, "chi2 too large ({chi2:.2}): {counts:?}");
    }
}
