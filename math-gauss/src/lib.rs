//! Naive Gaussian elimination for dense linear systems
//!
//! This crate solves `A x = b` for small-to-moderate dense square systems in two
//! steps: forward elimination to an upper triangular system `R x = b'`, then
//! back substitution.
//!
//! # Features
//!
//! - **Naive elimination by default**: no row exchanges, only an exactly-zero
//!   pivot or divisor is singular
//! - **Opt-in partial pivoting** and tolerance-based singularity detection
//! - **Copy-in API** with an explicit in-place variant
//! - **Explicit widening** of integer data to `f64`/`f32`
//! - **Parallel row updates** behind the `rayon` feature
//!
//! # Example
//!
//! ```
//! use math_audio_gauss::{back_substitute, eliminate};
//! use ndarray::array;
//!
//! let a = array![[2.0_f64, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]];
//! let b = array![8.0_f64, -11.0, -3.0];
//!
//! let (r, b_prime) = eliminate(&a, &b)?.into_parts();
//! let x = back_substitute(&r, &b_prime)?;
//!
//! assert!((x[0] - 2.0).abs() < 1e-12);
//! assert!((x[1] - 3.0).abs() < 1e-12);
//! assert!((x[2] + 1.0).abs() < 1e-12);
//! # Ok::<(), math_audio_gauss::GaussError>(())
//! ```

pub mod config;
pub mod direct;
pub mod error;
pub mod parallel;
pub mod traits;
pub mod widen;

// Re-export main types
pub use config::{EliminationConfig, Pivoting, SingularityCheck, ZeroPivotPolicy};
pub use error::GaussError;
pub use traits::RealField;
pub use widen::{widen_matrix, widen_system, widen_vector};

// Re-export direct solvers
pub use direct::{
    TriangularSystem, back_substitute, back_substitute_with, eliminate, eliminate_in_place,
    eliminate_with, gauss_solve, gauss_solve_with, residual_norm,
};
