//! The LZ9 bi-objective test function.

use super::constraints::BoxConstraints;
use super::error::BenchmarkError;
use super::types::MultiObjectiveFunction;
use std::f64::consts::PI;
use std::sync::atomic::{AtomicUsize, Ordering};

/// LZ9 from Li & Zhang (2009), a scalable problem with a complicated,
/// non-linear Pareto set.
///
/// With `n` variables on `[0, 1]^n` and
/// `theta_i = sin(6 pi x_0 + i pi / n)`:
///
/// - `f1 = x_0 + 2/|J1| * sum_{i in J1} (x_i - theta_i)^2`, `J1` = odd `i`
/// - `f2 = 1 - x_0^2 + 2/|J2| * sum_{i in J2} (x_i - theta_i)^2`, `J2` = even `i > 0`
///
/// The Pareto front is concave: `f2 = 1 - f1^2` for `f1` in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use u_fuzzy::benchmark::{Lz9, MultiObjectiveFunction};
///
/// let lz9 = Lz9::new(10);
/// let x = lz9.pareto_set_point(0.5);
/// let f = lz9.eval(&x).unwrap();
/// assert!((f[0] - 0.5).abs() < 1e-12);
/// assert!((f[1] - 0.75).abs() < 1e-12);
/// assert_eq!(lz9.evaluation_count(), 1);
/// ```
///
/// # References
///
/// H. Li and Q. Zhang, "Multiobjective Optimization Problems with
/// Complicated Pareto Sets, MOEA/D and NSGA-II", IEEE Transactions on
/// Evolutionary Computation, 13(2):284-302, 2009.
#[derive(Debug)]
pub struct Lz9 {
    constraints: BoxConstraints,
    evaluations: AtomicUsize,
}

impl Lz9 {
    /// Identifier returned by [`MultiObjectiveFunction::name`].
    pub const NAME: &'static str = "LZ9";

    /// Both index sets `J1` and `J2` must be non-empty.
    pub const MIN_VARIABLES: usize = 3;

    /// Creates LZ9 with `n` variables. `n = 0` leaves the dimension unset.
    pub fn new(n: usize) -> Self {
        Self {
            constraints: BoxConstraints::unit(n),
            evaluations: AtomicUsize::new(0),
        }
    }

    /// The Pareto-optimal decision vector whose first coordinate is `x0`.
    ///
    /// Coordinates after the first are `sin(...)` values and may fall
    /// outside `[0, 1]`.
    pub fn pareto_set_point(&self, x0: f64) -> Vec<f64> {
        let n = self.number_of_variables();
        (0..n)
            .map(|i| if i == 0 { x0 } else { theta(x0, i, n) })
            .collect()
    }

    /// Second objective on the Pareto front for a given first objective.
    pub fn pareto_front(f1: f64) -> f64 {
        1.0 - f1 * f1
    }
}

impl Default for Lz9 {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Clone for Lz9 {
    fn clone(&self) -> Self {
        Self {
            constraints: self.constraints.clone(),
            evaluations: AtomicUsize::new(self.evaluation_count()),
        }
    }
}

impl MultiObjectiveFunction for Lz9 {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn number_of_objectives(&self) -> usize {
        2
    }

    fn has_scalable_dimensionality(&self) -> bool {
        true
    }

    fn set_number_of_variables(&mut self, n: usize) -> Result<(), BenchmarkError> {
        self.constraints = BoxConstraints::unit(n);
        Ok(())
    }

    fn constraints(&self) -> &BoxConstraints {
        &self.constraints
    }

    fn eval(&self, x: &[f64]) -> Result<Vec<f64>, BenchmarkError> {
        self.evaluations.fetch_add(1, Ordering::Relaxed);

        let n = self.number_of_variables();
        if x.len() != n {
            return Err(BenchmarkError::DimensionMismatch {
                expected: n,
                found: x.len(),
            });
        }
        if n < Self::MIN_VARIABLES {
            return Err(BenchmarkError::TooFewVariables {
                function: Self::NAME,
                minimum: Self::MIN_VARIABLES,
                found: n,
            });
        }

        let x0 = x[0];
        let mut sum_odd = 0.0;
        let mut sum_even = 0.0;
        for (i, &xi) in x.iter().enumerate().skip(1) {
            let d = xi - theta(x0, i, n);
            if i % 2 == 0 {
                sum_even += d * d;
            } else {
                sum_odd += d * d;
            }
        }

        // |J1| counts odd i in 1..n, |J2| even i in 2..n.
        let count_odd = (n / 2) as f64;
        let count_even = ((n - 1) / 2) as f64;

        Ok(vec![
            x0 + 2.0 * sum_odd / count_odd,
            1.0 - x0 * x0 + 2.0 * sum_even / count_even,
        ])
    }

    fn evaluation_count(&self) -> usize {
        self.evaluations.load(Ordering::Relaxed)
    }

    fn reset_evaluation_count(&self) {
        self.evaluations.store(0, Ordering::Relaxed);
    }
}

fn theta(x0: f64, i: usize, n: usize) -> f64 {
    (6.0 * PI * x0 + i as f64 * PI / n as f64).sin()
}
