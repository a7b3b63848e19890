//! Direct solvers for dense linear systems
//!
//! This module provides the two halves of Gaussian elimination, used in sequence:
//! - [`eliminate`]: forward elimination to an upper triangular system
//! - [`back_substitute`]: backward substitution on that system
//!
//! [`gauss_solve`] chains them.

mod elimination;
mod substitution;

pub use elimination::{TriangularSystem, eliminate, eliminate_in_place, eliminate_with};
pub use substitution::{back_substitute, back_substitute_with};

use crate::config::EliminationConfig;
use crate::error::GaussError;
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Validate a square system and return its order `n`
pub(crate) fn check_system<T>(a: &Array2<T>, b: &Array1<T>) -> Result<usize, GaussError> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(GaussError::NotSquare { rows, cols });
    }
    if rows == 0 {
        return Err(GaussError::Empty);
    }
    if b.len() != rows {
        return Err(GaussError::DimensionMismatch {
            expected: rows,
            got: b.len(),
        });
    }
    Ok(rows)
}

/// Solve Ax = b by naive Gaussian elimination
///
/// This is a convenience function that combines elimination and back substitution.
pub fn gauss_solve<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>, GaussError> {
    gauss_solve_with(a, b, &EliminationConfig::default())
}

/// Solve Ax = b by Gaussian elimination with an explicit configuration
pub fn gauss_solve_with<T: RealField>(
    a: &Array2<T>,
    b: &Array1<T>,
    config: &EliminationConfig<T>,
) -> Result<Array1<T>, GaussError> {
    eliminate_with(a, b, config)?.solve_with(config)
}

/// Max-norm of the residual `A x - b`
pub fn residual_norm<T: RealField>(
    a: &Array2<T>,
    x: &Array1<T>,
    b: &Array1<T>,
) -> Result<T, GaussError> {
    let n = check_system(a, b)?;
    if x.len() != n {
        return Err(GaussError::DimensionMismatch {
            expected: n,
            got: x.len(),
        });
    }

    Ok(a.rows()
        .into_iter()
        .zip(b.iter())
        .map(|(row, &b_i)| {
            let ax_i = row
                .iter()
                .zip(x.iter())
                .fold(T::zero(), |acc, (&a_ij, &x_j)| acc + a_ij * x_j);
            (ax_i - b_i).abs()
        })
        .fold(T::zero(), T::max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_gauss_solve_worked_example() {
        let a = array![[2.0_f64, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]];
        let b = array![8.0_f64, -11.0, -3.0];

        let x = gauss_solve(&a, &b).expect("Gaussian elimination should succeed");

        assert_relative_eq!(x[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 3.0, epsilon = 1e-12);
        assert_relative_eq!(x[2], -1.0, epsilon = 1e-12);
        assert!(residual_norm(&a, &x, &b).unwrap() < 1e-12);
    }

    #[test]
    fn test_gauss_solve_singular() {
        let a = array![[1.0_f64, 1.0], [1.0, 1.0]];
        let b = array![2.0_f64, 2.0];

        assert_eq!(
            gauss_solve(&a, &b).unwrap_err(),
            GaussError::SingularMatrix { index: 1 }
        );
    }

    #[test]
    fn test_gauss_solve_f32() {
        let a = array![[4.0_f32, 1.0], [1.0, 3.0]];
        let b = array![1.0_f32, 2.0];

        let x = gauss_solve(&a, &b).unwrap();

        let ax = a.dot(&x);
        for i in 0..2 {
            assert_relative_eq!(ax[i], b[i], epsilon = 1e-5);
        }
    }

    #[test]
    fn test_residual_norm_dimension_check() {
        let a = Array2::<f64>::eye(2);
        let b = array![1.0_f64, 2.0];
        let x = array![1.0_f64];

        assert_eq!(
            residual_norm(&a, &x, &b).unwrap_err(),
            GaussError::DimensionMismatch {
                expected: 2,
                got: 1
            }
        );
        assert_eq!(residual_norm(&a, &b, &b).unwrap(), 0.0);
    }
}
