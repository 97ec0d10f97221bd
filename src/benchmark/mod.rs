//! Multi-objective benchmark functions.
//!
//! Test problems used to compare multi-objective optimizers, plus the
//! small toolkit needed to inspect their output.
//!
//! # Key Types
//!
//! - [`MultiObjectiveFunction`]: evaluation contract with an evaluation counter
//! - [`BoxConstraints`]: rectangular feasible region
//! - [`Lz9`]: the LZ9 problem of Li & Zhang (2009)
//!
//! # Submodules
//!
//! - [`pareto`]: dominance, non-dominated sorting, crowding distance, hypervolume
//!
//! Optimization algorithms themselves are out of scope.

mod batch;
mod constraints;
mod error;
mod lz9;
pub mod pareto;
mod types;

pub use batch::evaluate_batch;
pub use constraints::BoxConstraints;
pub use error::BenchmarkError;
pub use lz9::Lz9;
pub use types::MultiObjectiveFunction;
