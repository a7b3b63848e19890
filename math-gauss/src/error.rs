//! Error type shared by the eliminator and the back solver

use thiserror::Error;

/// Errors that can occur during elimination or back substitution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GaussError {
    /// A pivot or diagonal divisor was zero (or within the configured tolerance).
    #[error("Matrix is singular: zero pivot at row {index}")]
    SingularMatrix { index: usize },
    #[error("Matrix dimensions mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },
    #[error("System is empty")]
    Empty,
    /// Element `index` (row-major) has no floating-point representation.
    #[error("Input element {index} cannot be represented as a float")]
    NonRepresentable { index: usize },
}
