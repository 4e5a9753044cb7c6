use nalgebra::DMatrix;

use crate::config::Real;

/// Capability of anything that acts as a gate: materialize the
/// real-valued unitary matrix describing its action on a state vector.
///
/// The crate consumes gates only through this matrix; defining concrete
/// gate types is left to callers.
pub trait Unitary {
    fn matrix(&self) -> DMatrix<Real>;
}
