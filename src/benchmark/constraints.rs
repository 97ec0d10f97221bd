//! Box constraints on a real-valued search space.

use super::error::BenchmarkError;
use rand::Rng;
use std::cmp::Ordering;

/// Per-dimension bounds `lower[i] <= x[i] <= upper[i]`.
///
/// # Examples
///
/// ```
/// use u_fuzzy::benchmark::BoxConstraints;
///
/// let bounds = BoxConstraints::unit(3);
/// assert!(bounds.is_feasible(&[0.0, 0.5, 1.0]));
/// assert!(!bounds.is_feasible(&[0.0, 1.5, 1.0]));
/// assert_eq!(bounds.closest_feasible(&[-1.0, 0.5, 2.0]), vec![0.0, 0.5, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxConstraints {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl BoxConstraints {
    /// Creates constraints from explicit bound vectors.
    ///
    /// # Errors
    ///
    /// [`BenchmarkError::InvalidBounds`] if the vectors differ in length,
    /// some `lower[i] > upper[i]`, or some interval is too wide to sample
    /// (infinite bounds, or a width above `f64::MAX / 2` such as
    /// `[-f64::MAX, f64::MAX]`).
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self, BenchmarkError> {
        validate(&lower, &upper)?;
        Ok(Self { lower, upper })
    }

    /// The unit hypercube `[0, 1]^n`.
    pub fn unit(n: usize) -> Self {
        Self {
            lower: vec![0.0; n],
            upper: vec![1.0; n],
        }
    }

    /// Number of constrained dimensions.
    pub fn dimensions(&self) -> usize {
        self.lower.len()
    }

    /// Lower bounds.
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Upper bounds.
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Replaces both bound vectors.
    ///
    /// On error the previous bounds are kept.
    pub fn set_bounds(&mut self, lower: Vec<f64>, upper: Vec<f64>) -> Result<(), BenchmarkError> {
        validate(&lower, &upper)?;
        self.lower = lower;
        self.upper = upper;
        Ok(())
    }

    /// Returns `true` if `x` has the right dimension and lies inside the box.
    pub fn is_feasible(&self, x: &[f64]) -> bool {
        x.len() == self.dimensions()
            && x
                .iter()
                .zip(self.lower.iter().zip(&self.upper))
                .all(|(&v, (&lo, &hi))| lo <= v && v <= hi)
    }

    /// Clamps each coordinate of `x` into its interval.
    ///
    /// Extra coordinates beyond [`dimensions`](Self::dimensions) are dropped.
    pub fn closest_feasible(&self, x: &[f64]) -> Vec<f64> {
        x.iter()
            .zip(self.lower.iter().zip(&self.upper))
            .map(|(&v, (&lo, &hi))| v.clamp(lo, hi))
            .collect()
    }

    /// Draws a point uniformly from the box.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec<f64> {
        self.lower
            .iter()
            .zip(&self.upper)
            .map(|(&lo, &hi)| if lo < hi { rng.random_range(lo..=hi) } else { lo })
            .collect()
    }
}

fn validate(lower: &[f64], upper: &[f64]) -> Result<(), BenchmarkError> {
    if lower.len() != upper.len() {
        return Err(BenchmarkError::InvalidBounds(format!(
            "{} lower bounds but {} upper bounds",
            lower.len(),
            upper.len()
        )));
    }
    let crossed = lower
        .iter()
        .zip(upper)
        .position(|(lo, hi)| matches!(lo.partial_cmp(hi), None | Some(Ordering::Greater)));
    if let Some(i) = crossed {
        return Err(BenchmarkError::InvalidBounds(format!(
            "dimension {i}: lower {} exceeds upper {}",
            lower[i], upper[i]
        )));
    }
    // The uniform sampler scales the width up slightly; keep headroom.
    let unbounded = lower
        .iter()
        .zip(upper)
        .position(|(lo, hi)| !((hi - lo) * 2.0).is_finite());
    if let Some(i) = unbounded {
        return Err(BenchmarkError::InvalidBounds(format!(
            "dimension {i}: interval [{}, {}] is too wide",
            lower[i], upper[i]
        )));
    }
    Ok(())
}
