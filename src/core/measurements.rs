use crate::core::Basis;
use crate::core::utils;
use ndarray::{Array1, Array2, array};
use num_complex::Complex64;

/// Projective single-qubit measurement.
#[derive(Clone, Debug)]
pub struct Measurement {
    /// Projectors, indexed by the classical outcome they report.
    pub operators: [Array2<Complex64>; 2],
}

impl Measurement {
    /// Z basis (Computational) -> {|0>, |1>}.
    pub fn z_basis() -> Measurement {
        let v0: Array1<Complex64> = array![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
        let v1: Array1<Complex64> = array![Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)];

        Measurement {
            operators: [utils::outer_product(&v0, &v0), utils::outer_product(&v1, &v1)],
        }
    }

    /// X basis (Hadamard) -> {|+>, |->}.
    pub fn x_basis() -> Measurement {
        let inv_sqrt2 = Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0);

        let v_plus: Array1<Complex64> = array![inv_sqrt2, inv_sqrt2];
        let v_minus: Array1<Complex64> = array![inv_sqrt2, -inv_sqrt2];

        Measurement {
            operators: [
                utils::outer_product(&v_plus, &v_plus),
                utils::outer_product(&v_minus, &v_minus),
            ],
        }
    }

    pub fn for_basis(basis: Basis) -> Measurement {
        match basis {
            Basis::Rectilinear => Measurement::z_basis(),
            Basis::Diagonal => Measurement::x_basis(),
        }
    }

    /// Projectors must sum to the identity.
    pub fn is_complete(&self) -> bool {
        let sum = &self.operators[0] + &self.operators[1];
        let eye = Array2::<Complex64>::eye(2);
        sum.iter().zip(eye.iter()).all(|(a, b)| (*a - *b).norm() < 1e-9)
    }
}
