// src/rng.rs
//
// Deterministic randomness context shared by every generator.
//
// One SamplerRng is created per run from the configured seed; all draws
// (status selection, numeric ranges, catalog picks) go through it, so two
// runs with the same seed and project count are byte-identical.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded sampler wrapping a ChaCha8 stream.
///
/// Degenerate ranges (lo >= hi) collapse to `lo` without consuming a draw,
/// mirroring how the range helpers guard their inputs elsewhere in the
/// pipeline. The sampler itself never fails.
pub struct SamplerRng {
    rng: ChaCha8Rng,
}

impl SamplerRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform f64 in [lo, hi].
    pub fn uniform_f64(&mut self, lo: f64, hi: f64) -> f64 {
        if lo >= hi {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Uniform i64 in [lo, hi] (inclusive).
    pub fn uniform_i64(&mut self, lo: i64, hi: i64) -> i64 {
        if lo >= hi {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// True with probability `p`.
    pub fn probability(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }

    /// Uniform pick from a non-empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        debug_assert!(!items.is_empty());
        let idx = self.rng.gen_range(0..items.len());
        &items[idx]
    }

    /// Weighted pick from parallel (items, weights) slices.
    ///
    /// This is the one weighted-catalog sampler reused by every generator
    /// that needs a non-uniform categorical draw (status selection, yes/no
    /// catalogs with skewed odds).
    pub fn weighted_choose<'a, T>(&mut self, items: &'a [T], weights: &[f64]) -> &'a T {
        debug_assert_eq!(items.len(), weights.len());
        debug_assert!(!items.is_empty());

        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return &items[0];
        }

        let mut target = self.rng.gen::<f64>() * total;
        for (item, w) in items.iter().zip(weights) {
            target -= w;
            if target < 0.0 {
                return item;
            }
        }
        // Floating-point tail: fall back to the last item.
        &items[items.len() - 1]
    }

    /// Sample `k` distinct indices from `0..n` without replacement.
    ///
    /// `k` is clamped to `n`, so asking for more items than the population
    /// holds is safe (the whole population is returned, shuffled).
    pub fn sample_indices(&mut self, n: usize, k: usize) -> Vec<usize> {
        let k = k.min(n);
        let mut pool: Vec<usize> = (0..n).collect();
        // Partial Fisher-Yates: the first k slots end up uniformly sampled.
        for i in 0..k {
            let j = self.rng.gen_range(i..n);
            pool.swap(i, j);
        }
        pool.truncate(k);
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SamplerRng::new(42);
        let mut b = SamplerRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.uniform_f64(0.0, 1.0), b.uniform_f64(0.0, 1.0));
            assert_eq!(a.uniform_i64(0, 1000), b.uniform_i64(0, 1000));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SamplerRng::new(42);
        let mut b = SamplerRng::new(43);
        let xs: Vec<f64> = (0..10).map(|_| a.uniform_f64(0.0, 1.0)).collect();
        let ys: Vec<f64> = (0..10).map(|_| b.uniform_f64(0.0, 1.0)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn degenerate_ranges_collapse() {
        let mut rng = SamplerRng::new(1);
        assert_eq!(rng.uniform_f64(5.0, 5.0), 5.0);
        assert_eq!(rng.uniform_i64(7, 7), 7);
        assert_eq!(rng.uniform_i64(7, 3), 7);
    }

    #[test]
    fn uniform_draws_stay_in_range() {
        let mut rng = SamplerRng::new(9);
        for _ in 0..1000 {
            let x = rng.uniform_f64(0.8, 1.2);
            assert!((0.8..=1.2).contains(&x));
            let n = rng.uniform_i64(30, 365);
            assert!((30..=365).contains(&n));
        }
    }

    #[test]
    fn weighted_choose_skips_zero_weights() {
        let mut rng = SamplerRng::new(5);
        let items = ["a", "b", "c"];
        let weights = [0.0, 1.0, 0.0];
        for _ in 0..200 {
            assert_eq!(*rng.weighted_choose(&items, &weights), "b");
        }
    }

    #[test]
    fn weighted_choose_roughly_matches_weights() {
        let mut rng = SamplerRng::new(11);
        let items = [0usize, 1];
        let weights = [0.9, 0.1];
        let mut counts = [0usize; 2];
        for _ in 0..5000 {
            counts[*rng.weighted_choose(&items, &weights)] += 1;
        }
        // 90/10 split with generous slack.
        assert!(counts[0] > 4000);
        assert!(counts[1] > 200);
    }

    #[test]
    fn sample_indices_distinct_and_clamped() {
        let mut rng = SamplerRng::new(3);
        let picked = rng.sample_indices(5, 3);
        assert_eq!(picked.len(), 3);
        let mut sorted = picked.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 3);

        // Requesting more than the population clamps to the population.
        let all = rng.sample_indices(4, 10);
        assert_eq!(all.len(), 4);
    }
}
