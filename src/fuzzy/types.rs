//! Capabilities stored by a rule base.
//!
//! The rule base never looks inside a rule or a variable. It only needs
//! to print rules and to hold shared handles to both, so the contracts
//! here are deliberately small.

use std::fmt;
use std::rc::Rc;

/// A fuzzy inference rule as seen by a [`RuleBase`](super::RuleBase).
///
/// # Back-references
///
/// A rule may keep a `std::rc::Weak<RuleBase>` to the base that owns it
/// and call [`RuleBase::remove_rule`](super::RuleBase::remove_rule) from
/// its own `Drop`. The base tolerates this: while it is tearing down such
/// calls are ignored, and it never drops a handle while it is borrowing
/// its own storage.
///
/// # Examples
///
/// ```
/// use u_fuzzy::fuzzy::Rule;
///
/// struct IfTallThenHeavy;
///
/// impl Rule for IfTallThenHeavy {
///     fn print_rule(&self) -> String {
///         "IF height IS tall THEN weight IS heavy".to_string()
///     }
/// }
/// ```
pub trait Rule {
    /// Human-readable form of the rule, without a trailing newline.
    fn print_rule(&self) -> String;
}

/// A named linguistic variable used to declare a rule base's input or
/// output signature.
pub trait LinguisticVariable {
    /// Name of the variable.
    fn name(&self) -> &str;
}

/// Shared handle to a rule.
pub type RuleRef = Rc<dyn Rule>;

/// Shared handle to a linguistic variable.
pub type VariableRef = Rc<dyn LinguisticVariable>;

/// The simplest linguistic variable: a name and nothing else.
///
/// Useful for declaring signatures before the membership functions of a
/// variable are known.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedVariable {
    name: String,
}

impl NamedVariable {
    /// Creates a variable with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Creates a variable and wraps it in a shared handle.
    pub fn shared(name: impl Into<String>) -> VariableRef {
        Rc::new(Self::new(name))
    }
}

impl LinguisticVariable for NamedVariable {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for NamedVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Lifecycle of a [`RuleBase`](super::RuleBase).
///
/// `Live -> TearingDown` happens once and is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Lifecycle {
    /// Mutation permitted.
    #[default]
    Live,
    /// Destruction in progress; rule removals are suppressed.
    TearingDown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_variable() {
        let v = NamedVariable::new("temperature");
        assert_eq!(v.name(), "temperature");
        assert_eq!(v.to_string(), "temperature");

        let shared = NamedVariable::shared("pressure");
        assert_eq!(shared.name(), "pressure");
    }

    #[test]
    fn test_lifecycle_default_is_live() {
        assert_eq!(Lifecycle::default(), Lifecycle::Live);
    }
}
