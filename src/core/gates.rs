use ndarray::{Array2, arr2};
use num_complex::Complex64;

/// Represents a single-qubit quantum gate by its unitary matrix.
#[derive(Clone, Debug)]
pub struct Gate {
    /// The 2x2 unitary matrix of the gate.
    pub matrix: Array2<Complex64>,
}

impl Gate {
    /// Creates an Identity gate.
    pub fn i() -> Gate {
        Gate {
            matrix: arr2(&[
                [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
                [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
            ]),
        }
    }

    /// Creates a Pauli-X gate (NOT gate).
    pub fn x() -> Gate {
        Gate {
            matrix: arr2(&[
                [Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)],
                [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
            ]),
        }
    }

    /// Creates a Hadamard gate, mapping |0> to |+> and |1> to |->.
    pub fn h() -> Gate {
        let s = Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0);
        Gate {
            matrix: arr2(&[[s, s], [s, -s]]),
        }
    }

    /// Checks U U† = I within tolerance.
    pub fn is_unitary(&self) -> bool {
        let u_dagger = self.matrix.t().mapv(|x| x.conj());
        let product = self.matrix.dot(&u_dagger);

        product
            .iter()
            .zip(Gate::i().matrix.iter())
            .all(|(a, b)| (*a - *b).norm() < 1e-9)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_gates_are_unitary() {
        assert!(Gate::i().is_unitary());
        assert!(Gate::x().is_unitary());
        assert!(Gate::h().is_unitary());
    }

    #[test]
    fn hadamard_is_self_inverse() {
        let h = Gate::h().matrix;
        let hh = h.dot(&h);
        assert!((hh[[0, 0]].re - 1.0).abs() < 1e-12);
        assert!(hh[[0, 1]].norm() < 1e-12);
    }
}
