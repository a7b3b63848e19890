//! Explicit widening of integer (or other primitive) data to floats
//!
//! Elimination divides, so integer arithmetic would truncate. Every input that
//! is not already a [`RealField`] goes through these conversions first.
//!
//! Widening is not always exact: integers beyond the float's mantissa (2^53 for
//! `f64`, 2^24 for `f32`) are rounded to the nearest float without error.
//! [`GaussError::NonRepresentable`] only reports values with no conversion at all.

use crate::error::GaussError;
use crate::traits::RealField;
use ndarray::{Array1, Array2};
use num_traits::ToPrimitive;

/// Widen every element of a matrix to `T`.
///
/// Fails with [`GaussError::NonRepresentable`] carrying the row-major index of
/// the first element that cannot be converted.
pub fn widen_matrix<I, T>(a: &Array2<I>) -> Result<Array2<T>, GaussError>
where
    I: ToPrimitive,
    T: RealField,
{
    let mut out = Array2::zeros(a.raw_dim());
    for (index, (dst, src)) in out.iter_mut().zip(a.iter()).enumerate() {
        *dst = T::widen_from(src).ok_or(GaussError::NonRepresentable { index })?;
    }
    Ok(out)
}

/// Widen every element of a vector to `T`.
pub fn widen_vector<I, T>(b: &Array1<I>) -> Result<Array1<T>, GaussError>
where
    I: ToPrimitive,
    T: RealField,
{
    b.iter()
        .enumerate()
        .map(|(index, v)| T::widen_from(v).ok_or(GaussError::NonRepresentable { index }))
        .collect()
}

/// Widen a matrix and its right-hand side together
pub fn widen_system<I, T>(
    a: &Array2<I>,
    b: &Array1<I>,
) -> Result<(Array2<T>, Array1<T>), GaussError>
where
    I: ToPrimitive,
    T: RealField,
{
    Ok((widen_matrix(a)?, widen_vector(b)?))
}
