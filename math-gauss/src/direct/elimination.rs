//! Forward elimination
//!
//! Reduces a square system `A x = b` to an equivalent upper triangular system
//! `R x = b'`. With the default configuration this is naive Gaussian
//! elimination: rows are processed in their given order and the full row
//! (every column, including those already reduced) is updated.

use super::substitution::back_substitute_with;
use super::check_system;
use crate::config::{EliminationConfig, Pivoting, ZeroPivotPolicy};
use crate::error::GaussError;
use crate::parallel;
use crate::traits::RealField;
use ndarray::{Array1, Array2, Axis, Zip};

/// Result of forward elimination
///
/// Stores the reduced matrix together with the right-hand side transformed in
/// lockstep.
#[derive(Debug, Clone)]
pub struct TriangularSystem<T: RealField> {
    /// Upper triangular matrix R (up to rounding below the diagonal)
    pub r: Array2<T>,
    /// Transformed right-hand side b'
    pub rhs: Array1<T>,
    /// Number of row exchanges performed (always 0 without pivoting)
    pub row_swaps: usize,
}

impl<T: RealField> TriangularSystem<T> {
    /// Solve `R x = b'` by back substitution with exact zero checks
    pub fn solve(&self) -> Result<Array1<T>, GaussError> {
        self.solve_with(&EliminationConfig::default())
    }

    /// Solve `R x = b'` using the singularity check from `config`
    pub fn solve_with(&self, config: &EliminationConfig<T>) -> Result<Array1<T>, GaussError> {
        back_substitute_with(&self.r, &self.rhs, config)
    }

    /// Split into `(R, b')`
    pub fn into_parts(self) -> (Array2<T>, Array1<T>) {
        (self.r, self.rhs)
    }

    /// Check that every entry below the diagonal is within `tol` of zero
    pub fn is_upper_triangular(&self, tol: T) -> bool {
        self.r
            .indexed_iter()
            .all(|((i, j), v)| i <= j || v.abs() <= tol)
    }
}

/// Reduce `A x = b` to upper triangular form.
///
/// `a` and `b` are left untouched; the reduction runs on copies. Fails with
/// [`GaussError::SingularMatrix`] on an exactly-zero pivot.
pub fn eliminate<T: RealField>(
    a: &Array2<T>,
    b: &Array1<T>,
) -> Result<TriangularSystem<T>, GaussError> {
    eliminate_with(a, b, &EliminationConfig::default())
}

/// Reduce `A x = b` to upper triangular form with an explicit configuration.
pub fn eliminate_with<T: RealField>(
    a: &Array2<T>,
    b: &Array1<T>,
    config: &EliminationConfig<T>,
) -> Result<TriangularSystem<T>, GaussError> {
    let mut r = a.clone();
    let mut rhs = b.clone();
    let row_swaps = eliminate_in_place(&mut r, &mut rhs, config)?;
    Ok(TriangularSystem { r, rhs, row_swaps })
}

/// Reduce `A x = b` in the caller's buffers.
///
/// Returns the number of row exchanges. On error `a` and `b` are left partially
/// reduced and must not be used as a triangular system.
pub fn eliminate_in_place<T: RealField>(
    a: &mut Array2<T>,
    b: &mut Array1<T>,
    config: &EliminationConfig<T>,
) -> Result<usize, GaussError> {
    let n = check_system(a, b)?;
    let mut row_swaps = 0;

    if config.log_progress {
        log::debug!(
            "Gaussian elimination: n = {}, pivoting = {:?}, parallel = {}",
            n,
            config.pivoting,
            parallel::is_parallel_available() && n > config.parallel_threshold
        );
    }

    for k in 0..n - 1 {
        if config.pivoting == Pivoting::Partial {
            let p = select_pivot_row(a, k);
            if p != k {
                swap_rows(a, b, k, p);
                row_swaps += 1;
                if config.log_progress {
                    log::debug!("Elimination step {}: swapped rows {} and {}", k, k, p);
                }
            }
        }

        let pivot = a[[k, k]];
        if config.singularity.is_singular(pivot) && config.zero_pivot == ZeroPivotPolicy::Fail {
            if config.log_progress {
                log::debug!("Elimination step {}: singular pivot {}", k, pivot);
            }
            return Err(GaussError::SingularMatrix { index: k });
        }

        let d = T::one() / pivot;
        let (upper, lower) = a.view_mut().split_at(Axis(0), k + 1);
        let (b_upper, b_lower) = b.view_mut().split_at(Axis(0), k + 1);
        let pivot_row = upper.row(k);
        let b_k = b_upper[k];

        parallel::for_each_row(lower, b_lower, config.parallel_threshold, |mut row, b_i| {
            let factor = row[k] * d;
            *b_i -= factor * b_k;
            Zip::from(&mut row)
                .and(&pivot_row)
                .for_each(|a_ij, &a_kj| *a_ij -= factor * a_kj);
        });

        if config.log_progress {
            log::debug!("Elimination step {}: pivot = {:.6e}", k, pivot);
        }
    }

    Ok(row_swaps)
}

/// Row at or below `k` with the largest magnitude in column `k` (first wins ties)
fn select_pivot_row<T: RealField>(a: &Array2<T>, k: usize) -> usize {
    let mut max_val = a[[k, k]].abs();
    let mut max_row = k;
    for i in (k + 1)..a.nrows() {
        let val = a[[i, k]].abs();
        if val > max_val {
            max_val = val;
            max_row = i;
        }
    }
    max_row
}

fn swap_rows<T: RealField>(a: &mut Array2<T>, b: &mut Array1<T>, k: usize, p: usize) {
    for j in 0..a.ncols() {
        a.swap([k, j], [p, j]);
    }
    b.swap(k, p);
}
