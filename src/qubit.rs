use std::fmt;

use nalgebra::DVector;

use crate::config::{self, Complex, Real};

pub fn is_real_zero(x: Real) -> bool {
    x.abs() < config::constants::ZERO_THRESHOLD
}

pub fn is_zero(c: Complex) -> bool {
    is_real_zero(c.re) && is_real_zero(c.im)
}

pub fn format_amplitude(c: &Complex) -> String {
    if c.im > -config::constants::ZERO_THRESHOLD {
        format!("{:.8}+{:.8}i", c.re, c.im.abs())
    } else {
        format!("{:.8}-{:.8}i", c.re, c.im.abs())
    }
}

/// An n-qubit register state: 2^n complex amplitudes in computational
/// basis order. Amplitudes are fixed at construction; every operation on
/// states returns a freshly built one.
#[derive(Debug, Clone, PartialEq)]
pub struct Qubit {
    amplitudes: DVector<Complex>,
}

impl Qubit {
    pub fn new(amplitudes: DVector<Complex>) -> Self {
        Self { amplitudes }
    }

    pub fn from_amplitudes(amplitudes: Vec<Complex>) -> Self {
        Self {
            amplitudes: DVector::from_vec(amplitudes),
        }
    }

    /// Create the computational basis state |index> of a register of
    /// `num_qubits` qubits.
    pub fn basis(num_qubits: usize, index: usize) -> Self {
        let dim = 1 << num_qubits;
        let mut amplitudes = DVector::from_element(dim, Complex::default());
        amplitudes[index] = Complex::new(1.0, 0.0);
        Self { amplitudes }
    }

    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Number of qubits in the register (log2 of the dimension).
    pub fn num_qubits(&self) -> usize {
        self.dim().trailing_zeros() as usize
    }
}

/// Read access to an ordered amplitude sequence. Implemented by [`Qubit`]
/// and by raw slices, so each bra/ket operation has a single entry point
/// covering both.
pub trait Amplitudes {
    fn amplitudes(&self) -> &[Complex];
}

impl Amplitudes for Qubit {
    fn amplitudes(&self) -> &[Complex] {
        self.amplitudes.as_slice()
    }
}

impl Amplitudes for [Complex] {
    fn amplitudes(&self) -> &[Complex] {
        self
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.num_qubits();
        let mut first = true;
        for (idx, amp) in self.amplitudes.iter().enumerate() {
            if is_zero(*amp) {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            write!(f, "({})|{:0width$b}>", format_amplitude(amp), idx)?;
            first = false;
        }
        if first {
            // all amplitudes below the display threshold
            write!(f, "0")?;
        }
        Ok(())
    }
}
