//! Parallel row updates with feature-gated implementations
//!
//! For a fixed pivot the rows below it are independent, so with the `rayon`
//! feature they are updated concurrently. Each row runs the same arithmetic in
//! either path, so results do not depend on the thread count.

use ndarray::{ArrayViewMut1, ArrayViewMut2, Axis};

/// Check if parallel processing is available
#[cfg(feature = "rayon")]
pub fn is_parallel_available() -> bool {
    true
}

/// Check if parallel processing is available
#[cfg(not(feature = "rayon"))]
pub fn is_parallel_available() -> bool {
    false
}

/// Apply `update` to each row of `rows` paired with the matching entry of `rhs`.
///
/// Runs in parallel when there are at least `threshold` rows.
#[cfg(feature = "rayon")]
pub fn for_each_row<T, F>(
    mut rows: ArrayViewMut2<'_, T>,
    mut rhs: ArrayViewMut1<'_, T>,
    threshold: usize,
    update: F,
) where
    T: Send + Sync,
    F: Fn(ArrayViewMut1<'_, T>, &mut T) + Sync + Send,
{
    use rayon::prelude::*;

    if rows.nrows() < threshold {
        rows.axis_iter_mut(Axis(0))
            .zip(rhs.iter_mut())
            .for_each(|(row, r)| update(row, r));
        return;
    }

    let pairs: Vec<_> = rows.axis_iter_mut(Axis(0)).zip(rhs.iter_mut()).collect();
    pairs.into_par_iter().for_each(|(row, r)| update(row, r));
}

/// Sequential row update (fallback)
#[cfg(not(feature = "rayon"))]
pub fn for_each_row<T, F>(
    mut rows: ArrayViewMut2<'_, T>,
    mut rhs: ArrayViewMut1<'_, T>,
    _threshold: usize,
    update: F,
) where
    F: Fn(ArrayViewMut1<'_, T>, &mut T),
{
    rows.axis_iter_mut(Axis(0))
        .zip(rhs.iter_mut())
        .for_each(|(row, r)| update(row, r));
}
