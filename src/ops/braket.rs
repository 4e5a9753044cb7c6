use nalgebra::DMatrix;

use crate::config::Complex;
use crate::qubit::Amplitudes;

/// Reshape a ket into its 1 x N bra row form, |q> -> <q|. Order is
/// preserved exactly; no arithmetic is performed.
pub fn transpose<A: Amplitudes + ?Sized>(a: &A) -> DMatrix<Complex> {
    let amps = a.amplitudes();
    DMatrix::from_fn(1, amps.len(), |_, j| amps[j])
}

/// Outer product |a><b| of two equal-length amplitude sequences.
///
/// Entry `[i][j]` is the plain product `a[i] * b[j]`; the bra operand is
/// NOT conjugated, matching the convention of [`inner_product`]. Returns
/// `None` when the lengths differ.
pub fn outer_product<A, B>(a: &A, b: &B) -> Option<DMatrix<Complex>>
where
    A: Amplitudes + ?Sized,
    B: Amplitudes + ?Sized,
{
    let a = a.amplitudes();
    let b = b.amplitudes();
    if a.len() != b.len() {
        log::warn!(
            "skipping outer product of {}-dim and {}-dim sequences",
            a.len(),
            b.len()
        );
        return None;
    }

    let bra = transpose(b);
    let rows = a.len();
    let cols = bra.ncols();

    // single-row bra, so the inner contraction has exactly one term;
    // kept in the shape of a general matrix product
    let mut result = DMatrix::from_element(rows, cols, Complex::default());
    for i in 0..rows {
        for j in 0..cols {
            let mut sum = Complex::default();
            for k in 0..bra.nrows() {
                sum += a[i] * bra[(k, j)];
            }
            result[(i, j)] = sum;
        }
    }
    Some(result)
}

/// Inner product <a|b> of two equal-length amplitude sequences.
///
/// The bra operand is NOT conjugated: the result is the plain sum of
/// `a[i] * b[i]` in ascending order. Returns `None` when the lengths
/// differ.
pub fn inner_product<A, B>(a: &A, b: &B) -> Option<Complex>
where
    A: Amplitudes + ?Sized,
    B: Amplitudes + ?Sized,
{
    let a = a.amplitudes();
    let b = b.amplitudes();
    if a.len() != b.len() {
        log::warn!(
            "skipping inner product of {}-dim and {}-dim sequences",
            a.len(),
            b.len()
        );
        return None;
    }

    let bra = transpose(a);
    let mut result = Complex::default();
    for i in 0..b.len() {
        result += bra[(0, i)] * b[i];
    }
    Some(result)
}
