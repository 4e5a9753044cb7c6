//! Dense state-vector arithmetic for qubit registers: tensor products,
//! unitary matrix application, and bra/ket contractions over complex
//! amplitude sequences.

pub mod config;
pub mod gate;
pub mod ops;
pub mod qubit;

pub use config::{Complex, Real};
pub use gate::Unitary;
pub use ops::apply::{apply_gate, apply_matrix};
pub use ops::braket::{inner_product, outer_product, transpose};
pub use ops::tensor::{entangle, entangle_all};
pub use qubit::{Amplitudes, Qubit};
