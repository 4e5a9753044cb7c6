use nalgebra::{DMatrix, DVector};

use crate::config::{Complex, Real};
use crate::gate::Unitary;
use crate::qubit::{Amplitudes, Qubit};

/// Matrix-vector product over the amplitude sequence. Rows are walked
/// outer, columns inner in ascending order, each real entry promoted to
/// a complex scalar for the multiply; the summation order is part of the
/// contract, results must be reproducible bit for bit.
fn apply(q: &Qubit, matrix: &DMatrix<Real>) -> Qubit {
    let amps = q.amplitudes();
    // caller guarantees the column count matches the state dimension
    debug_assert_eq!(matrix.ncols(), amps.len());

    log::debug!(
        "applying {}x{} matrix to {}-dim state",
        matrix.nrows(),
        matrix.ncols(),
        amps.len()
    );

    let mut out = DVector::from_element(matrix.nrows(), Complex::default());
    for i in 0..matrix.nrows() {
        let mut sum = Complex::default();
        for j in 0..matrix.ncols() {
            sum += amps[j] * Complex::new(matrix[(i, j)], 0.0);
        }
        out[i] = sum;
    }

    Qubit::new(out)
}

/// Apply a gate to a state through the unitary matrix it exposes.
pub fn apply_gate<G: Unitary>(q: &Qubit, gate: &G) -> Qubit {
    apply(q, &gate.matrix())
}

/// Apply an explicit matrix to a state.
pub fn apply_matrix(q: &Qubit, matrix: &DMatrix<Real>) -> Qubit {
    apply(q, matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NotGate;

    impl Unitary for NotGate {
        fn matrix(&self) -> DMatrix<Real> {
            DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0])
        }
    }

    #[test]
    fn test_identity_returns_input() {
        let q = Qubit::from_amplitudes(vec![
            Complex::new(0.5, 0.1),
            Complex::new(-0.25, 0.0),
            Complex::new(0.0, 0.75),
            Complex::new(0.3, -0.3),
        ]);
        let identity = DMatrix::identity(4, 4);
        assert_eq!(apply_matrix(&q, &identity), q);
    }

    #[test]
    fn test_pauli_x_swaps_basis_states() {
        let x = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]);
        assert_eq!(apply_matrix(&Qubit::basis(1, 0), &x), Qubit::basis(1, 1));
        assert_eq!(apply_matrix(&Qubit::basis(1, 1), &x), Qubit::basis(1, 0));
    }

    #[test]
    fn test_gate_object_routes_to_same_computation() {
        let q = Qubit::from_amplitudes(vec![Complex::new(0.8, 0.0), Complex::new(0.0, 0.6)]);
        let raw = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]);
        assert_eq!(apply_gate(&q, &NotGate), apply_matrix(&q, &raw));
    }

    #[test]
    fn test_rectangular_matrix_sets_output_dimension() {
        // a 1x2 row contracts a 2-dim state down to a single amplitude
        let q = Qubit::from_amplitudes(vec![Complex::new(0.25, 0.5), Complex::new(0.75, -0.5)]);
        let row = DMatrix::from_row_slice(1, 2, &[1.0, 1.0]);
        let out = apply_matrix(&q, &row);
        assert_eq!(out.dim(), 1);
        assert_eq!(out.amplitudes()[0], Complex::new(1.0, 0.0));
    }

    #[test]
    fn test_complex_amplitudes_accumulate() {
        let q = Qubit::from_amplitudes(vec![Complex::new(0.0, 1.0), Complex::new(0.0, -1.0)]);
        let x = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]);
        let out = apply_matrix(&q, &x);
        assert_eq!(out.amplitudes()[0], Complex::new(0.0, -1.0));
        assert_eq!(out.amplitudes()[1], Complex::new(0.0, 1.0));
    }

    #[test]
    fn test_determinism() {
        let q = Qubit::from_amplitudes(vec![Complex::new(0.3, 0.7), Complex::new(-0.1, 0.2)]);
        let m = DMatrix::from_row_slice(2, 2, &[0.25, -0.5, 0.75, 1.0]);
        assert_eq!(apply_matrix(&q, &m), apply_matrix(&q, &m));
    }
}
