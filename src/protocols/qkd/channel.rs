//! Transmission and basis-dependent measurement.

use crate::core::errors::StateError;
use crate::core::{Basis, Measurement, RandomSource};
use crate::protocols::qkd::encoder::QubitState;

/// Measures a single qubit in a chosen basis, destroying it.
pub trait Detector {
    fn detect(
        &self,
        state: QubitState,
        basis: Basis,
        rng: &mut RandomSource,
    ) -> Result<bool, StateError>;
}

/// Probabilistic measurement rule.
///
/// A matching basis returns the encoded bit; a mismatched basis returns a
/// fair coin flip independent of the encoded bit.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdealDetector;

impl Detector for IdealDetector {
    fn detect(
        &self,
        state: QubitState,
        basis: Basis,
        rng: &mut RandomSource,
    ) -> Result<bool, StateError> {
        if state.basis() == basis {
            Ok(state.bit())
        } else {
            Ok(rng.coin())
        }
    }
}

/// Measures the qubit's density matrix with Z or X projectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct DensityMatrixDetector;

impl Detector for DensityMatrixDetector {
    fn detect(
        &self,
        state: QubitState,
        basis: Basis,
        rng: &mut RandomSource,
    ) -> Result<bool, StateError> {
        let mut rho = state.to_density_matrix();
        let outcome = rho.measure(&Measurement::for_basis(basis), rng)?;
        rho.is_valid()?;
        Ok(outcome == 1)
    }
}

/// Delivers Alice's qubits to Bob and measures each one in Bob's basis.
#[derive(Debug, Clone, Default)]
pub struct ChannelSimulator<D: Detector> {
    detector: D,
}

impl<D: Detector> ChannelSimulator<D> {
    pub fn new(detector: D) -> Self {
        Self { detector }
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Measures every state against `measurement_bases[i]`.
    ///
    /// Takes the states by value: each is measured exactly once and then gone.
    pub fn measure(
        &self,
        states: Vec<QubitState>,
        measurement_bases: &[Basis],
        rng: &mut RandomSource,
    ) -> Result<Vec<bool>, StateError> {
        debug_assert_eq!(states.len(), measurement_bases.len());
        states
            .into_iter()
            .zip(measurement_bases)
            .map(|(state, &basis)| self.detector.detect(state, basis, rng))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocols::qkd::encoder::encode;

    const BASES: [Basis; 2] = [Basis::Rectilinear, Basis::Diagonal];

    fn matching_basis_is_exact<D: Detector>(detector: D) {
        for seed in 0..200 {
            let mut rng = RandomSource::from_seed(seed);
            for bit in [false, true] {
                for basis in BASES {
                    let got = detector.detect(encode(bit, basis), basis, &mut rng).unwrap();
                    assert_eq!(got, bit, "seed {seed}, basis {basis:?}");
                }
            }
        }
    }

    fn mismatched_basis_is_a_coin<D: Detector>(detector: D) {
        let mut rng = RandomSource::from_seed(11);
        let trials = 20_000;
        let mut agree = 0;
        for i in 0..trials {
            let bit = i % 2 == 0;
            let prepared = BASES[i % 4 / 2];
            let measured = BASES[1 - i % 4 / 2];
            if detector.detect(encode(bit, prepared), measured, &mut rng).unwrap() == bit {
                agree += 1;
            }
        }
        let rate = agree as f64 / trials as f64;
        assert!((rate - 0.5).abs() < 0.02, "agreement rate {rate}");
    }

    #[test]
    fn ideal_matching_basis_is_exact() {
        matching_basis_is_exact(IdealDetector);
    }

    #[test]
    fn ideal_mismatched_basis_is_a_coin() {
        mismatched_basis_is_a_coin(IdealDetector);
    }

    #[test]
    fn density_matrix_matching_basis_is_exact() {
        matching_basis_is_exact(DensityMatrixDetector);
    }

    #[test]
    fn density_matrix_mismatched_basis_is_a_coin() {
        mismatched_basis_is_a_coin(DensityMatrixDetector);
    }

    #[test]
    fn measure_writes_results_in_order() {
        let channel = ChannelSimulator::new(IdealDetector);
        let mut rng = RandomSource::from_seed(0);
        let states = vec![
            encode(true, Basis::Rectilinear),
            encode(false, Basis::Diagonal),
            encode(true, Basis::Diagonal),
        ];
        let bases = [Basis::Rectilinear, Basis::Diagonal, Basis::Diagonal];
        let results = channel.measure(states, &bases, &mut rng).unwrap();
        assert_eq!(results, vec![true, false, true]);
    }
}
