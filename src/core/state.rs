use crate::core::errors::StateError;
use crate::core::utils::{dagger, trace};
use crate::core::{Gate, Measurement, RandomSource};
use ndarray::Array2;
use num_complex::Complex64;

/// Density matrix of a single qubit.
#[derive(Clone, Debug)]
pub struct QuantumState {
    pub density_matrix: Array2<Complex64>,
}

impl Default for QuantumState {
    fn default() -> Self {
        Self::new()
    }
}

impl QuantumState {
    /// Creates a new quantum state initialized to |0>.
    pub fn new() -> Self {
        let mut density_matrix = Array2::<Complex64>::zeros((2, 2));
        density_matrix[[0, 0]] = Complex64::new(1.0, 0.0);

        Self { density_matrix }
    }

    /// Checks that the density matrix has unit trace.
    pub fn is_valid(&self) -> Result<(), StateError> {
        let tr = trace(&self.density_matrix);
        if (tr - Complex64::new(1.0, 0.0)).norm() > 1e-12 {
            return Err(StateError::InvalidTrace(tr));
        }
        Ok(())
    }

    /// rho -> U rho U†
    pub fn apply(&mut self, gate: &Gate) {
        let temp = gate.matrix.dot(&self.density_matrix);
        self.density_matrix = temp.dot(&dagger(&gate.matrix));
    }

    /// Born-rule probability of each outcome of `measurement`.
    pub fn probabilities(&self, measurement: &Measurement) -> [f64; 2] {
        let mut probs = [0.0; 2];
        for (p, op) in probs.iter_mut().zip(measurement.operators.iter()) {
            let projected = op.dot(&self.density_matrix).dot(&dagger(op));
            *p = trace(&projected).re.max(0.0);
        }

        // Due to float, renormalization to ensure completeness
        let sum: f64 = probs.iter().sum();
        if sum > 0.0 {
            for p in &mut probs {
                *p /= sum;
            }
        }
        probs
    }

    /// Physical measurement which changes the state irretrievably.
    ///
    /// Returns the index of the observed outcome and collapses
    /// rho' = (P_k rho P_k†) / p_k.
    pub fn measure(
        &mut self,
        measurement: &Measurement,
        rng: &mut RandomSource,
    ) -> Result<usize, StateError> {
        let probs = self.probabilities(measurement);
        let outcome = if rng.unit() < probs[0] { 0 } else { 1 };
        let p_selected = probs[outcome];

        if p_selected <= 1e-12 {
            return Err(StateError::ImpossibleOutcome(outcome));
        }

        let op = &measurement.operators[outcome];
        let numerator = op.dot(&self.density_matrix).dot(&dagger(op));
        self.density_matrix = numerator.mapv(|val| val / Complex64::new(p_selected, 0.0));

        Ok(outcome)
    }
}
