use nalgebra::DVector;

use crate::config::Complex;
use crate::qubit::{Amplitudes, Qubit};

/// Tensor product of two states, |q1> (x) |q2>. The composite amplitude
/// at index `i * len2 + j` is `q1[i] * q2[j]`, so e.g. |0> and |1>
/// combine into |01>.
pub fn entangle(q1: &Qubit, q2: &Qubit) -> Qubit {
    let a1 = q1.amplitudes();
    let a2 = q2.amplitudes();
    let len1 = a1.len();
    let len2 = a2.len();

    let mut composite = DVector::from_element(len1 * len2, Complex::default());
    let mut k = 0;
    for i in 0..len1 {
        for j in 0..len2 {
            composite[k] = a1[i] * a2[j];
            k += 1;
        }
    }

    Qubit::new(composite)
}

/// Left-fold of [`entangle`] across an ordered sequence of states, so
/// |0>, |0>, |1> combine into |001>. Returns `None` when fewer than two
/// states are supplied.
pub fn entangle_all(qubits: &[Qubit]) -> Option<Qubit> {
    if qubits.len() < 2 {
        log::warn!(
            "skipping tensor product of {} state(s), at least 2 are required",
            qubits.len()
        );
        return None;
    }

    let mut composite = qubits[0].clone();
    for q in &qubits[1..] {
        log::debug!(
            "folding {}-qubit state into {}-qubit composite",
            q.num_qubits(),
            composite.num_qubits()
        );
        composite = entangle(&composite, q);
    }
    Some(composite)
}
