//! Utility functions.
//!
//! This module contains helpers for:
//! - Rendering bit and basis sequences as `[0 1 1 0]` style arrays.
//! - Small 2x2 matrix operations used by the density-matrix model.

use crate::core::Basis;
use ndarray::{Array1, Array2};
use num_complex::Complex64;

/// Renders a bit sequence as `[0 1 1 0]`.
pub fn format_bits(bits: &[bool]) -> String {
    let body: Vec<&str> = bits.iter().map(|&b| if b { "1" } else { "0" }).collect();
    format!("[{}]", body.join(" "))
}

/// Renders a basis sequence as `[0 1 1 0]`.
pub fn format_bases(bases: &[Basis]) -> String {
    let body: Vec<String> = bases.iter().map(|b| b.to_string()).collect();
    format!("[{}]", body.join(" "))
}

/// Computes the trace of a matrix (sum of diagonal elements).
pub fn trace(matrix: &Array2<Complex64>) -> Complex64 {
    matrix.diag().sum()
}

/// Outer product |a><b|.
pub fn outer_product(a: &Array1<Complex64>, b: &Array1<Complex64>) -> Array2<Complex64> {
    let n = a.len();
    let m = b.len();
    Array2::from_shape_fn((n, m), |(i, j)| a[i] * b[j].conj())
}

/// Conjugate transpose.
pub fn dagger(matrix: &Array2<Complex64>) -> Array2<Complex64> {
    matrix.t().mapv(|c| c.conj())
}
