//! Seeded randomness shared by every protocol step.

use crate::core::Basis;
use crate::core::errors::ProtocolError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Owned, reproducible random generator for one protocol run.
///
/// There is no process-wide seed: each run builds its own `RandomSource`, so
/// two runs with the same seed produce identical transcripts.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: ChaCha8Rng,
}

impl RandomSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// `n` independent, uniformly random bits.
    pub fn generate_bits(&mut self, n: usize) -> Vec<bool> {
        (0..n).map(|_| self.rng.random_bool(0.5)).collect()
    }

    /// `n` independent, uniformly random bases.
    pub fn generate_bases(&mut self, n: usize) -> Vec<Basis> {
        (0..n).map(|_| Basis::from_bit(self.rng.random_bool(0.5))).collect()
    }

    /// `k` indices drawn uniformly from `[0, n)` with replacement.
    ///
    /// Duplicates are allowed; the sampler resolves them against the shrinking key.
    pub fn select_sample_indices(&mut self, k: usize, n: usize) -> Result<Vec<usize>, ProtocolError> {
        if n == 0 && k > 0 {
            return Err(ProtocolError::InsufficientKey {
                remaining: 0,
                requested: k,
            });
        }
        Ok((0..k).map(|_| self.rng.random_range(0..n)).collect())
    }

    /// Single fair coin flip.
    pub fn coin(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    /// Bernoulli trial with probability `p`. `p` must lie in `[0, 1]`.
    pub(crate) fn chance(&mut self, p: f64) -> bool {
        p > 1e-12 && self.rng.random_bool(p)
    }

    /// Uniform float in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.rng.random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequences() {
        let mut a = RandomSource::from_seed(42);
        let mut b = RandomSource::from_seed(42);
        assert_eq!(a.generate_bits(64), b.generate_bits(64));
        assert_eq!(a.generate_bases(64), b.generate_bases(64));
        assert_eq!(
            a.select_sample_indices(10, 7).unwrap(),
            b.select_sample_indices(10, 7).unwrap()
        );
    }

    #[test]
    fn lengths_match_request() {
        let mut rng = RandomSource::from_seed(0);
        assert_eq!(rng.generate_bits(100).len(), 100);
        assert_eq!(rng.generate_bases(37).len(), 37);
        assert!(rng.generate_bits(0).is_empty());
    }

    #[test]
    fn indices_stay_in_range_and_may_repeat() {
        let mut rng = RandomSource::from_seed(3);
        let indices = rng.select_sample_indices(200, 5).unwrap();
        assert_eq!(indices.len(), 200);
        assert!(indices.iter().all(|&i| i < 5));

        let mut sorted = indices.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert!(sorted.len() < indices.len());
    }

    #[test]
    fn empty_range_is_rejected() {
        let mut rng = RandomSource::from_seed(0);
        assert!(matches!(
            rng.select_sample_indices(3, 0),
            Err(ProtocolError::InsufficientKey { remaining: 0, requested: 3 })
        ));
        assert!(rng.select_sample_indices(0, 0).unwrap().is_empty());
    }

    #[test]
    fn bits_are_roughly_balanced() {
        let mut rng = RandomSource::from_seed(7);
        let ones = rng.generate_bits(10_000).iter().filter(|&&b| b).count();
        assert!((4_700..=5_300).contains(&ones), "ones = {ones}");
    }
}
