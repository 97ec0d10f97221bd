//! Pareto dominance utilities for inspecting benchmark results.
//!
//! All objectives are **minimized**.
//!
//! - [`dominates`]: Pareto dominance between two objective vectors
//! - [`non_dominated_sort`]: fronts and ranks (Deb et al., 2002)
//! - [`crowding_distance`]: spread of solutions along a front
//! - [`hypervolume_2d`]: dominated area for bi-objective fronts
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II",
//!   IEEE Transactions on Evolutionary Computation, 6(2), 182-197
//! - Zitzler & Thiele (1999), "Multiobjective Evolutionary Algorithms:
//!   A Comparative Case Study and the Strength Pareto Approach"

use std::cmp::Ordering;

/// Returns `true` if `a` is no worse than `b` in every objective and
/// strictly better in at least one.
///
/// ```
/// use u_fuzzy::benchmark::pareto::dominates;
///
/// assert!(dominates(&[1.0, 2.0], &[1.0, 3.0]));
/// assert!(!dominates(&[1.0, 3.0], &[2.0, 2.0]));
/// assert!(!dominates(&[1.0, 1.0], &[1.0, 1.0]));
/// ```
pub fn dominates(a: &[f64], b: &[f64]) -> bool {
    let mut strictly_better = false;
    for (&va, &vb) in a.iter().zip(b) {
        if va > vb {
            return false;
        }
        if va < vb {
            strictly_better = true;
        }
    }
    strictly_better
}

/// Result of [`non_dominated_sort`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParetoFronts {
    /// Rank of each solution; 0 is the non-dominated front.
    pub ranks: Vec<usize>,

    /// Solution indices grouped by rank, each group in ascending index order.
    pub fronts: Vec<Vec<usize>>,
}

impl ParetoFronts {
    /// Indices of the non-dominated solutions.
    pub fn first_front(&self) -> &[usize] {
        self.fronts.first().map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Fast non-dominated sorting.
///
/// Empty input yields empty ranks and no fronts. Identical vectors do not
/// dominate each other and share a rank.
///
/// # Complexity
///
/// O(m * n²) for n solutions with m objectives.
///
/// # Example
///
/// ```
/// use u_fuzzy::benchmark::pareto::non_dominated_sort;
///
/// let objectives = vec![
///     vec![1.0, 5.0],
///     vec![3.0, 3.0],
///     vec![5.0, 1.0],
///     vec![4.0, 4.0], // dominated by (3, 3)
/// ];
/// let sorted = non_dominated_sort(&objectives);
/// assert_eq!(sorted.ranks, vec![0, 0, 0, 1]);
/// assert_eq!(sorted.fronts, vec![vec![0, 1, 2], vec![3]]);
/// ```
pub fn non_dominated_sort(objectives: &[Vec<f64>]) -> ParetoFronts {
    let n = objectives.len();
    let mut dominated: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut dominator_count = vec![0usize; n];

    for i in 0..n {
        for j in (i + 1)..n {
            if dominates(&objectives[i], &objectives[j]) {
                dominated[i].push(j);
                dominator_count[j] += 1;
            } else if dominates(&objectives[j], &objectives[i]) {
                dominated[j].push(i);
                dominator_count[i] += 1;
            }
        }
    }

    let mut ranks = vec![0usize; n];
    let mut fronts = Vec::new();
    let mut current: Vec<usize> = (0..n).filter(|&i| dominator_count[i] == 0).collect();

    while !current.is_empty() {
        let mut next = Vec::new();
        for &i in &current {
            for &j in &dominated[i] {
                dominator_count[j] -= 1;
                if dominator_count[j] == 0 {
                    ranks[j] = fronts.len() + 1;
                    next.push(j);
                }
            }
        }
        next.sort_unstable();
        fronts.push(current);
        current = next;
    }

    ParetoFronts { ranks, fronts }
}

/// Crowding distance of each solution within one front.
///
/// Extreme solutions in any objective get `f64::INFINITY`. Fronts of two
/// or fewer solutions are all extreme. Objectives with zero range add
/// nothing. Rows of unequal length are compared on their common prefix.
///
/// # Complexity
///
/// O(m * n log n).
pub fn crowding_distance(objectives: &[Vec<f64>]) -> Vec<f64> {
    let n = objectives.len();
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }

    let m = objectives.iter().map(Vec::len).min().unwrap_or(0);
    let mut distance = vec![0.0f64; n];
    let mut order: Vec<usize> = (0..n).collect();

    for k in 0..m {
        order.sort_by(|&a, &b| {
            objectives[a][k]
                .partial_cmp(&objectives[b][k])
                .unwrap_or(Ordering::Equal)
        });

        let lo = objectives[order[0]][k];
        let hi = objectives[order[n - 1]][k];
        distance[order[0]] = f64::INFINITY;
        distance[order[n - 1]] = f64::INFINITY;

        let range = hi - lo;
        if range <= 0.0 {
            continue;
        }
        for w in order.windows(3) {
            let gap = objectives[w[2]][k] - objectives[w[0]][k];
            distance[w[1]] += gap / range;
        }
    }

    distance
}

/// Area dominated by a bi-objective point set and bounded by `reference`.
///
/// Points that do not strictly dominate the reference point contribute
/// nothing; dominated points are absorbed by their dominators.
///
/// ```
/// use u_fuzzy::benchmark::pareto::hypervolume_2d;
///
/// let front = vec![[1.0, 3.0], [2.0, 2.0], [3.0, 1.0]];
/// // Staircase under reference (4, 4): 3*1 + 2*1 + 1*1.
/// assert!((hypervolume_2d(&front, [4.0, 4.0]) - 6.0).abs() < 1e-12);
/// ```
pub fn hypervolume_2d(points: &[[f64; 2]], reference: [f64; 2]) -> f64 {
    let mut inside: Vec<[f64; 2]> = points
        .iter()
        .copied()
        .filter(|p| p[0] < reference[0] && p[1] < reference[1])
        .collect();
    inside.sort_by(|a, b| {
        a[0].partial_cmp(&b[0])
            .unwrap_or(Ordering::Equal)
            .then(a[1].partial_cmp(&b[1]).unwrap_or(Ordering::Equal))
    });

    let mut volume = 0.0;
    let mut ceiling = reference[1];
    for p in inside {
        if p[1] < ceiling {
            volume += (reference[0] - p[0]) * (ceiling - p[1]);
            ceiling = p[1];
        }
    }
    volume
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::{Lz9, MultiObjectiveFunction};

    // ---- Dominance ----

    #[test]
    fn test_dominates_requires_strict_improvement() {
        assert!(dominates(&[0.0, 0.0], &[0.0, 1.0]));
        assert!(!dominates(&[0.0, 1.0], &[0.0, 1.0]));
        assert!(!dominates(&[0.0, 2.0], &[1.0, 1.0]));
    }

    // ---- Non-dominated sort ----

    #[test]
    fn test_sort_empty() {
        let sorted = non_dominated_sort(&[]);
        assert!(sorted.ranks.is_empty());
        assert!(sorted.fronts.is_empty());
        assert!(sorted.first_front().is_empty());
    }

    #[test]
    fn test_sort_chain() {
        let objs = vec![vec![3.0, 3.0], vec![1.0, 1.0], vec![2.0, 2.0]];
        let sorted = non_dominated_sort(&objs);
        assert_eq!(sorted.ranks, vec![2, 0, 1]);
        assert_eq!(sorted.fronts, vec![vec![1], vec![2], vec![0]]);
    }

    #[test]
    fn test_sort_duplicates_share_rank() {
        let objs = vec![vec![2.0, 2.0]; 3];
        let sorted = non_dominated_sort(&objs);
        assert_eq!(sorted.ranks, vec![0, 0, 0]);
        assert_eq!(sorted.first_front(), &[0, 1, 2]);
    }

    #[test]
    fn test_sort_three_objectives_mutually_incomparable() {
        let objs = vec![
            vec![1.0, 5.0, 3.0],
            vec![3.0, 1.0, 5.0],
            vec![5.0, 3.0, 1.0],
            vec![4.0, 4.0, 4.0],
        ];
        let sorted = non_dominated_sort(&objs);
        assert!(sorted.ranks.iter().all(|&r| r == 0));
    }

    #[test]
    fn test_lz9_front_is_non_dominated() {
        let lz9 = Lz9::new(10);
        let mut objs: Vec<Vec<f64>> = (0..=20)
            .map(|k| lz9.eval(&lz9.pareto_set_point(k as f64 / 20.0)).unwrap())
            .collect();
        // A feasible but non-optimal point.
        objs.push(lz9.eval(&[0.5; 10]).unwrap());

        let sorted = non_dominated_sort(&objs);
        assert_eq!(sorted.first_front().len(), 21);
        assert_eq!(sorted.ranks[21], 1);
    }

    // ---- Crowding distance ----

    #[test]
    fn test_crowding_small_fronts() {
        assert!(crowding_distance(&[]).is_empty());
        let d = crowding_distance(&[vec![1.0, 3.0], vec![3.0, 1.0]]);
        assert!(d.iter().all(|v| v.is_infinite()));
    }

    #[test]
    fn test_crowding_even_spacing() {
        let objs: Vec<Vec<f64>> = (0..5).map(|i| vec![i as f64, 4.0 - i as f64]).collect();
        let d = crowding_distance(&objs);
        assert!(d[0].is_infinite());
        assert!(d[4].is_infinite());
        for v in &d[1..4] {
            // 2/4 per objective, two objectives.
            assert!((v - 1.0).abs() < 1e-12, "{v}");
        }
    }

    #[test]
    fn test_crowding_ragged_rows_use_common_objectives() {
        let objs = vec![vec![1.0, 2.0], vec![2.0], vec![3.0, 0.0]];
        let d = crowding_distance(&objs);
        assert!(d[0].is_infinite());
        assert!(d[2].is_infinite());
        // Only the first objective is shared: gap 2 over range 2.
        assert!((d[1] - 1.0).abs() < 1e-12);

        let d = crowding_distance(&[vec![1.0], vec![], vec![3.0]]);
        assert_eq!(d, vec![0.0; 3]);
    }

    #[test]
    fn test_crowding_zero_range() {
        let objs = vec![vec![1.0, 5.0], vec![2.0, 5.0], vec![3.0, 5.0]];
        let d = crowding_distance(&objs);
        assert!((d[1] - 1.0).abs() < 1e-12);
    }

    // ---- Hypervolume ----

    #[test]
    fn test_hypervolume_single_point() {
        assert!((hypervolume_2d(&[[1.0, 1.0]], [2.0, 3.0]) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_hypervolume_ignores_outside_and_dominated() {
        let pts = [[1.0, 1.0], [1.5, 1.5], [5.0, 0.0], [0.0, 5.0]];
        assert!((hypervolume_2d(&pts, [2.0, 2.0]) - 1.0).abs() < 1e-12);
        assert_eq!(hypervolume_2d(&[], [1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_hypervolume_lz9_front_approaches_integral() {
        // Area above f2 = 1 - f1^2 within [0,1]x[0,1] relative to (1, 1)
        // is the integral of f1^2 from 0 to 1, i.e. 1/3.
        let lz9 = Lz9::new(10);
        let pts: Vec<[f64; 2]> = (0..=200)
            .map(|k| {
                let f = lz9.eval(&lz9.pareto_set_point(k as f64 / 200.0)).unwrap();
                [f[0], f[1]]
            })
            .collect();
        let hv = hypervolume_2d(&pts, [1.0, 1.0]);
        assert!((hv - 1.0 / 3.0).abs() < 0.01, "{hv}");
    }
}
