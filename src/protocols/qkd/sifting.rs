//! Key sifting: keep only positions where both parties chose the same basis.

use crate::core::Basis;

/// Returns `bits[i]` for every `i` where `basis_a[i] == basis_b[i]`, in order.
pub fn sift(basis_a: &[Basis], basis_b: &[Basis], bits: &[bool]) -> Vec<bool> {
    debug_assert_eq!(basis_a.len(), basis_b.len());
    debug_assert_eq!(basis_a.len(), bits.len());
    agreement_positions(basis_a, basis_b)
        .into_iter()
        .filter_map(|i| bits.get(i).copied())
        .collect()
}

/// Indices at which the two basis sequences agree.
pub fn agreement_positions(basis_a: &[Basis], basis_b: &[Basis]) -> Vec<usize> {
    basis_a
        .iter()
        .zip(basis_b)
        .enumerate()
        .filter_map(|(i, (a, b))| (a == b).then_some(i))
        .collect()
}
