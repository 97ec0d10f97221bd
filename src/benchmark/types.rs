//! Core trait for multi-objective benchmark functions.

use super::constraints::BoxConstraints;
use super::error::BenchmarkError;

/// A real-valued function with several objectives, all **minimized**.
///
/// Benchmark functions are used to compare optimizers, so they keep a
/// running count of evaluations. The count lives behind `&self` and must
/// be safe to update from several threads, because batches may be
/// evaluated in parallel (see [`evaluate_batch`](super::evaluate_batch)).
///
/// # Thread Safety
///
/// `MultiObjectiveFunction` must be `Send + Sync`.
pub trait MultiObjectiveFunction: Send + Sync {
    /// Short identifier, e.g. `"LZ9"`.
    fn name(&self) -> &str;

    /// Number of objectives returned by [`eval`](Self::eval).
    fn number_of_objectives(&self) -> usize;

    /// Current number of decision variables.
    fn number_of_variables(&self) -> usize {
        self.constraints().dimensions()
    }

    /// Whether [`set_number_of_variables`](Self::set_number_of_variables)
    /// is supported.
    fn has_scalable_dimensionality(&self) -> bool {
        false
    }

    /// Changes the number of decision variables.
    ///
    /// The default implementation rejects the change.
    fn set_number_of_variables(&mut self, _n: usize) -> Result<(), BenchmarkError> {
        Err(BenchmarkError::NotScalable(self.name().to_string()))
    }

    /// Feasible region of the search space.
    fn constraints(&self) -> &BoxConstraints;

    /// Evaluates the objectives at `x`.
    ///
    /// Every call counts towards [`evaluation_count`](Self::evaluation_count),
    /// including calls rejected with an error.
    fn eval(&self, x: &[f64]) -> Result<Vec<f64>, BenchmarkError>;

    /// Number of [`eval`](Self::eval) calls since creation or the last reset.
    fn evaluation_count(&self) -> usize;

    /// Resets the evaluation counter to zero.
    fn reset_evaluation_count(&self);
}
