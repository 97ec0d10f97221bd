//! Fuzzy-logic rule containers.
//!
//! The central type is [`RuleBase`], the composite that an inference
//! engine builds up before evaluation: an ordered list of rules plus the
//! declared input and output linguistic variables.
//!
//! Rules and variables are opaque here. The container only needs the
//! [`Rule`] and [`LinguisticVariable`] capabilities and holds them
//! through shared handles ([`RuleRef`], [`VariableRef`]).
//!
//! # Ownership
//!
//! The base owns its rules. A rule that needs to reach its base keeps a
//! `Weak<RuleBase>`, so no ownership cycle forms. When the base is torn
//! down it first enters [`Lifecycle::TearingDown`], and any
//! [`RuleBase::remove_rule`] call made by a rule being released is ignored.
//!
//! Inference and defuzzification are out of scope for this module.

mod error;
mod rule_base;
mod types;

pub use error::FuzzyError;
pub use rule_base::RuleBase;
pub use types::{LinguisticVariable, Lifecycle, NamedVariable, Rule, RuleRef, VariableRef};
