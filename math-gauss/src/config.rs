//! Elimination configuration
//!
//! The default configuration reproduces naive Gaussian elimination: no row
//! exchanges, and only an exactly-zero pivot or divisor counts as singular.

use crate::traits::RealField;

/// Row exchange strategy used while eliminating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pivoting {
    /// Rows are eliminated in their given order
    #[default]
    None,
    /// Swap in the row with the largest magnitude in the pivot column
    Partial,
}

/// What elimination does when a pivot is flagged as singular
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroPivotPolicy {
    /// Stop with [`crate::GaussError::SingularMatrix`]
    #[default]
    Fail,
    /// Keep going: `1/0` becomes infinite and non-finite values spread
    /// through the remaining rows. Back substitution still checks its divisors.
    Propagate,
}

/// Test applied to pivots and back-substitution divisors
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SingularityCheck<R> {
    /// Only an exact zero is singular
    Exact,
    /// `|value| <= tol` is singular
    Tolerance(R),
}

impl<R: RealField> SingularityCheck<R> {
    /// Whether `value` must be rejected as a divisor
    pub fn is_singular(&self, value: R) -> bool {
        match *self {
            SingularityCheck::Exact => value.is_exact_zero(),
            SingularityCheck::Tolerance(tol) => value.abs() <= tol,
        }
    }
}

impl<R> Default for SingularityCheck<R> {
    fn default() -> Self {
        SingularityCheck::Exact
    }
}

/// Elimination and back-substitution configuration
#[derive(Debug, Clone)]
pub struct EliminationConfig<R> {
    /// Row exchange strategy
    pub pivoting: Pivoting,
    /// Handling of a singular pivot during elimination
    pub zero_pivot: ZeroPivotPolicy,
    /// Singularity test for pivots and divisors
    pub singularity: SingularityCheck<R>,
    /// Minimum number of rows below the pivot for a parallel row update
    /// (only used with the `rayon` feature)
    pub parallel_threshold: usize,
    /// Log each pivot step at debug level
    pub log_progress: bool,
}

impl<R> Default for EliminationConfig<R> {
    fn default() -> Self {
        Self {
            pivoting: Pivoting::None,
            zero_pivot: ZeroPivotPolicy::Fail,
            singularity: SingularityCheck::Exact,
            parallel_threshold: 256,
            log_progress: false,
        }
    }
}

impl<R> EliminationConfig<R> {
    pub fn with_pivoting(mut self, pivoting: Pivoting) -> Self {
        self.pivoting = pivoting;
        self
    }

    pub fn with_zero_pivot(mut self, policy: ZeroPivotPolicy) -> Self {
        self.zero_pivot = policy;
        self
    }

    /// Treat `|value| <= tol` as singular instead of exact zero only
    pub fn with_tolerance(mut self, tol: R) -> Self {
        self.singularity = SingularityCheck::Tolerance(tol);
        self
    }

    pub fn with_parallel_threshold(mut self, rows: usize) -> Self {
        self.parallel_threshold = rows;
        self
    }

    pub fn with_log_progress(mut self, enabled: bool) -> Self {
        self.log_progress = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_naive() {
        let config = EliminationConfig::<f64>::default();
        assert_eq!(config.pivoting, Pivoting::None);
        assert_eq!(config.zero_pivot, ZeroPivotPolicy::Fail);
        assert_eq!(config.singularity, SingularityCheck::Exact);
        assert!(!config.log_progress);
    }

    #[test]
    fn test_exact_check_ignores_tiny_values() {
        let check = SingularityCheck::<f64>::Exact;
        assert!(check.is_singular(0.0));
        assert!(check.is_singular(-0.0));
        assert!(!check.is_singular(1e-300));
        assert!(!check.is_singular(f64::NAN));
    }

    #[test]
    fn test_tolerance_check() {
        let config = EliminationConfig::default().with_tolerance(1e-12);
        assert!(config.singularity.is_singular(1e-13));
        assert!(config.singularity.is_singular(-1e-12));
        assert!(!config.singularity.is_singular(1e-11));
    }
}
