//! Batch evaluation of benchmark functions.

use super::error::BenchmarkError;
use super::types::MultiObjectiveFunction;
use tracing::debug;

/// Evaluates `function` at every point, preserving order.
///
/// With the `parallel` feature the points are evaluated on the rayon
/// thread pool. Any evaluation error aborts the batch; in parallel mode
/// which of several failing points is reported is unspecified.
///
/// # Examples
///
/// ```
/// use u_fuzzy::benchmark::{evaluate_batch, Lz9, MultiObjectiveFunction};
///
/// let lz9 = Lz9::new(5);
/// let points = vec![vec![0.1; 5], vec![0.9; 5]];
/// let values = evaluate_batch(&lz9, &points).unwrap();
/// assert_eq!(values.len(), 2);
/// assert_eq!(lz9.evaluation_count(), 2);
/// ```
pub fn evaluate_batch<F>(function: &F, points: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, BenchmarkError>
where
    F: MultiObjectiveFunction + ?Sized,
{
    debug!(
        function = function.name(),
        points = points.len(),
        parallel = cfg!(feature = "parallel"),
        "evaluating batch"
    );

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        points.par_iter().map(|x| function.eval(x)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        points.iter().map(|x| function.eval(x)).collect()
    }
}
