//! Fuzzy rule-base containers and multi-objective benchmark functions.
//!
//! - **Fuzzy**: [`fuzzy::RuleBase`], the ordered composite of rules and
//!   declared input/output linguistic variables that a fuzzy inference
//!   engine is built from. Rules are shared handles and may point back at
//!   their base without creating ownership cycles.
//! - **Benchmarks**: scalable multi-objective test problems such as
//!   [`benchmark::Lz9`], box constraints, and Pareto utilities for
//!   inspecting optimizer output.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for plain data types.
//! - `parallel`: batch evaluation on the rayon thread pool.
//!
//! Diagnostics are emitted through `tracing`; install a subscriber to see them.

pub mod benchmark;
pub mod fuzzy;
