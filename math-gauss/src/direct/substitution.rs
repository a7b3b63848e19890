//! Back substitution for upper triangular systems

use super::check_system;
use crate::config::EliminationConfig;
use crate::error::GaussError;
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Solve `R x = b` for upper triangular `R`.
///
/// Entries below the diagonal are ignored. Each diagonal entry is checked for
/// an exact zero right before it is divided by, from the last row up.
pub fn back_substitute<T: RealField>(
    r: &Array2<T>,
    b: &Array1<T>,
) -> Result<Array1<T>, GaussError> {
    back_substitute_with(r, b, &EliminationConfig::default())
}

/// Solve `R x = b` using the singularity check from `config`.
pub fn back_substitute_with<T: RealField>(
    r: &Array2<T>,
    b: &Array1<T>,
    config: &EliminationConfig<T>,
) -> Result<Array1<T>, GaussError> {
    let n = check_system(r, b)?;
    let mut x = Array1::zeros(n);

    for i in (0..n).rev() {
        let mut acc = b[i];
        for j in (i + 1)..n {
            acc -= r[[i, j]] * x[j];
        }

        let r_ii = r[[i, i]];
        if config.singularity.is_singular(r_ii) {
            if config.log_progress {
                log::debug!("Back substitution: singular diagonal {} at row {}", r_ii, i);
            }
            return Err(GaussError::SingularMatrix { index: i });
        }
        x[i] = acc / r_ii;
    }

    Ok(x)
}
