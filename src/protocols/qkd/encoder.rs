//! BB84 state preparation.

use crate::core::{Basis, Gate, QuantumState};
use std::fmt;

/// One of the four BB84 states.
///
/// A `QubitState` is deliberately neither `Clone` nor `Copy`: measuring it
/// consumes it, so the same qubit can never be measured twice.
#[derive(Debug, PartialEq, Eq)]
pub enum QubitState {
    /// |0>, bit 0 in the rectilinear basis.
    Zero,
    /// |1>, bit 1 in the rectilinear basis.
    One,
    /// |+> = H|0>, bit 0 in the diagonal basis.
    Plus,
    /// |-> = H|1>, bit 1 in the diagonal basis.
    Minus,
}

impl QubitState {
    /// Basis the state was prepared in.
    pub fn basis(&self) -> Basis {
        match self {
            QubitState::Zero | QubitState::One => Basis::Rectilinear,
            QubitState::Plus | QubitState::Minus => Basis::Diagonal,
        }
    }

    /// Bit the state encodes in its own basis.
    pub(crate) fn bit(&self) -> bool {
        matches!(self, QubitState::One | QubitState::Minus)
    }

    /// Density matrix for this state: X for bit 1, then H for the diagonal basis.
    pub fn to_density_matrix(&self) -> QuantumState {
        let mut state = QuantumState::new();
        if self.bit() {
            state.apply(&Gate::x());
        }
        if self.basis() == Basis::Diagonal {
            state.apply(&Gate::h());
        }
        state
    }
}

impl fmt::Display for QubitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QubitState::Zero => "|0>",
            QubitState::One => "|1>",
            QubitState::Plus => "|+>",
            QubitState::Minus => "|->",
        };
        f.write_str(label)
    }
}

/// Encodes one bit in the given basis.
pub fn encode(bit: bool, basis: Basis) -> QubitState {
    match (basis, bit) {
        (Basis::Rectilinear, false) => QubitState::Zero,
        (Basis::Rectilinear, true) => QubitState::One,
        (Basis::Diagonal, false) => QubitState::Plus,
        (Basis::Diagonal, true) => QubitState::Minus,
    }
}

/// Encodes Alice's bits position by position.
///
/// `bits` and `bases` must have equal length.
pub fn encode_message(bits: &[bool], bases: &[Basis]) -> Vec<QubitState> {
    debug_assert_eq!(bits.len(), bases.len());
    bits.iter()
        .zip(bases)
        .map(|(&bit, &basis)| encode(bit, basis))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Measurement;

    #[test]
    fn encoding_table() {
        assert_eq!(encode(false, Basis::Rectilinear), QubitState::Zero);
        assert_eq!(encode(true, Basis::Rectilinear), QubitState::One);
        assert_eq!(encode(false, Basis::Diagonal), QubitState::Plus);
        assert_eq!(encode(true, Basis::Diagonal), QubitState::Minus);
    }

    #[test]
    fn state_remembers_basis_and_bit() {
        for bit in [false, true] {
            for basis in [Basis::Rectilinear, Basis::Diagonal] {
                let state = encode(bit, basis);
                assert_eq!(state.basis(), basis);
                assert_eq!(state.bit(), bit);
            }
        }
    }

    #[test]
    fn message_keeps_order_and_length() {
        let bits = [false, true, false, true];
        let bases = [
            Basis::Rectilinear,
            Basis::Rectilinear,
            Basis::Diagonal,
            Basis::Diagonal,
        ];
        let message = encode_message(&bits, &bases);
        let labels: Vec<String> = message.iter().map(|q| q.to_string()).collect();
        assert_eq!(labels, ["|0>", "|1>", "|+>", "|->"]);
    }

    #[test]
    fn density_matrix_is_an_eigenstate_of_its_basis() {
        for bit in [false, true] {
            for basis in [Basis::Rectilinear, Basis::Diagonal] {
                let rho = encode(bit, basis).to_density_matrix();
                let probs = rho.probabilities(&Measurement::for_basis(basis));
                let expected = usize::from(bit);
                assert!((probs[expected] - 1.0).abs() < 1e-12);
            }
        }
    }
}
