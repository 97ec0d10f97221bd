//! Rule base: an ordered composite of rules plus declared input/output
//! variable formats.

use super::error::FuzzyError;
use super::types::{Lifecycle, RuleRef, VariableRef};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, trace};

/// Ordered collection of shared rule handles with an input and an output
/// format.
///
/// Rules keep insertion order, which defines both [`print`](Self::print)
/// order and positions for [`get_rule`](Self::get_rule). Duplicates are
/// allowed. The three sequences are independent; the base does not check
/// that a rule's variables appear in the declared formats.
///
/// All operations take `&self`, so a base shared as `Rc<RuleBase>` can be
/// reached from a rule through a `Weak` back-reference, including from
/// the rule's `Drop`. Handles are always released after the internal
/// borrow ends, so such callbacks never observe a borrowed sequence.
///
/// The base is single-threaded: it is neither `Send` nor `Sync`.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use u_fuzzy::fuzzy::{NamedVariable, Rule, RuleBase, RuleRef};
///
/// struct Fixed(&'static str);
/// impl Rule for Fixed {
///     fn print_rule(&self) -> String { self.0.to_string() }
/// }
///
/// let base = RuleBase::new()
///     .with_input_format([NamedVariable::shared("speed"), NamedVariable::shared("distance")]);
/// base.add_to_output_format(NamedVariable::shared("brake"));
///
/// let r1: RuleRef = Rc::new(Fixed("IF speed IS high THEN brake IS hard"));
/// let r2: RuleRef = Rc::new(Fixed("IF distance IS far THEN brake IS none"));
/// base.add_rule(r1.clone());
/// base.add_rule(r2);
///
/// assert_eq!(base.number_of_rules(), 2);
/// assert!(Rc::ptr_eq(&base.get_rule(0).unwrap(), &r1));
/// assert!(base.get_rule(2).is_err());
/// assert_eq!(
///     base.print(),
///     "IF speed IS high THEN brake IS hard\nIF distance IS far THEN brake IS none\n"
/// );
/// ```
pub struct RuleBase {
    name: Option<String>,
    rules: RefCell<Vec<RuleRef>>,
    input_format: RefCell<Vec<VariableRef>>,
    output_format: RefCell<Vec<VariableRef>>,
    lifecycle: Cell<Lifecycle>,
}

impl RuleBase {
    /// Creates an empty, live rule base.
    pub fn new() -> Self {
        Self {
            name: None,
            rules: RefCell::new(Vec::new()),
            input_format: RefCell::new(Vec::new()),
            output_format: RefCell::new(Vec::new()),
            lifecycle: Cell::new(Lifecycle::Live),
        }
    }

    /// Sets a name used in diagnostics.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Seeds the input format.
    pub fn with_input_format(mut self, variables: impl IntoIterator<Item = VariableRef>) -> Self {
        self.input_format.get_mut().extend(variables);
        self
    }

    /// Returns the diagnostic name, if one was set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Current lifecycle state.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle.get()
    }

    /// Returns `true` once teardown has started.
    pub fn is_tearing_down(&self) -> bool {
        self.lifecycle.get() == Lifecycle::TearingDown
    }

    // ---- Rules ----

    /// Appends a rule.
    pub fn add_rule(&self, rule: RuleRef) {
        self.rules.borrow_mut().push(rule);
    }

    /// Removes the first occurrence of `rule`, compared by identity.
    ///
    /// Absent rules are ignored. While the base is tearing down, the call
    /// does nothing at all: rules released by the teardown may call back
    /// here from their own `Drop`.
    ///
    /// If the base held the last handle, the rule is dropped after the
    /// internal borrow ends, so its `Drop` may call back into this base.
    pub fn remove_rule(&self, rule: &RuleRef) {
        if self.is_tearing_down() {
            trace!(base = ?self.name, "rule removal suppressed during teardown");
            return;
        }

        let removed = remove_first(&self.rules, rule);
        if removed.is_none() {
            trace!(base = ?self.name, "rule to remove not present");
        }
        drop(removed);
    }

    /// Returns the rule at `index` in insertion order.
    ///
    /// # Errors
    ///
    /// [`FuzzyError::IndexOutOfBounds`] when `index >= number_of_rules()`.
    pub fn get_rule(&self, index: usize) -> Result<RuleRef, FuzzyError> {
        let rules = self.rules.borrow();
        rules
            .get(index)
            .cloned()
            .ok_or(FuzzyError::IndexOutOfBounds {
                index,
                len: rules.len(),
            })
    }

    /// Number of rules, duplicates included.
    pub fn number_of_rules(&self) -> usize {
        self.rules.borrow().len()
    }

    /// Returns `true` if the base holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.borrow().is_empty()
    }

    /// First rule in insertion order.
    pub fn first_rule(&self) -> Option<RuleRef> {
        self.rules.borrow().first().cloned()
    }

    /// Last rule in insertion order.
    pub fn last_rule(&self) -> Option<RuleRef> {
        self.rules.borrow().last().cloned()
    }

    /// Snapshot of all rules in insertion order.
    pub fn rules(&self) -> Vec<RuleRef> {
        self.rules.borrow().clone()
    }

    // ---- Input format ----

    /// Appends a variable to the input format.
    pub fn add_to_input_format(&self, variable: VariableRef) {
        self.input_format.borrow_mut().push(variable);
    }

    /// Appends each variable to the input format, left to right.
    pub fn extend_input_format(&self, variables: impl IntoIterator<Item = VariableRef>) {
        for variable in variables {
            self.add_to_input_format(variable);
        }
    }

    /// Removes the first occurrence of `variable`, compared by identity.
    /// Absent variables are ignored.
    pub fn remove_from_input_format(&self, variable: &VariableRef) {
        let removed = remove_first(&self.input_format, variable);
        if removed.is_none() {
            trace!(base = ?self.name, "input variable to remove not present");
        }
        drop(removed);
    }

    /// Replaces the input format with a copy of `variables`.
    pub fn set_input_format(&self, variables: &[VariableRef]) {
        let previous = self.input_format.replace(variables.to_vec());
        drop(previous);
    }

    /// Snapshot of the input format.
    pub fn input_format(&self) -> Vec<VariableRef> {
        self.input_format.borrow().clone()
    }

    // ---- Output format ----

    /// Appends a variable to the output format.
    pub fn add_to_output_format(&self, variable: VariableRef) {
        self.output_format.borrow_mut().push(variable);
    }

    /// Appends each variable to the output format, left to right.
    pub fn extend_output_format(&self, variables: impl IntoIterator<Item = VariableRef>) {
        for variable in variables {
            self.add_to_output_format(variable);
        }
    }

    /// Snapshot of the output format.
    pub fn output_format(&self) -> Vec<VariableRef> {
        self.output_format.borrow().clone()
    }

    // ---- Formatting and teardown ----

    /// Every rule's printed form followed by a newline, in rule order.
    pub fn print(&self) -> String {
        // Snapshot so that print_rule may call back into the base.
        let rules = self.rules();
        let mut out = String::new();
        for rule in &rules {
            out.push_str(&rule.print_rule());
            out.push('\n');
        }
        out
    }

    /// Enters [`Lifecycle::TearingDown`] and releases every held handle.
    ///
    /// Rules and variables whose last handle was held here are dropped.
    /// Their `Drop` may call [`remove_rule`](Self::remove_rule) on this
    /// base; those calls are no-ops. Calling this again releases whatever
    /// was added since, without changing state. Called from `Drop`.
    ///
    /// # Warning
    ///
    /// Teardown is terminal. A base that is still used afterwards keeps
    /// accepting `add_*` calls, but [`remove_rule`](Self::remove_rule)
    /// silently ignores every request from then on. Prefer dropping the
    /// last `Rc<RuleBase>`; call this only to release members while rules
    /// can still reach the base through a `Weak` back-reference.
    pub fn tear_down(&self) {
        if !self.is_tearing_down() {
            self.lifecycle.set(Lifecycle::TearingDown);
            debug!(base = ?self.name, "rule base tearing down");
        }

        let rules = self.rules.take();
        let input_format = self.input_format.take();
        let output_format = self.output_format.take();
        debug!(
            base = ?self.name,
            rules = rules.len(),
            inputs = input_format.len(),
            outputs = output_format.len(),
            "releasing rule base members"
        );

        drop(rules);
        drop(input_format);
        drop(output_format);
    }
}

impl Default for RuleBase {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RuleBase {
    fn drop(&mut self) {
        self.tear_down();
    }
}

impl fmt::Display for RuleBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}

impl fmt::Debug for RuleBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleBase")
            .field("name", &self.name)
            .field("rules", &self.number_of_rules())
            .field("inputs", &self.input_format.borrow().len())
            .field("outputs", &self.output_format.borrow().len())
            .field("lifecycle", &self.lifecycle.get())
            .finish()
    }
}

/// Takes the first handle identical to `target` out of `items`.
///
/// The borrow ends before the caller receives the handle.
fn remove_first<T: ?Sized>(items: &RefCell<Vec<Rc<T>>>, target: &Rc<T>) -> Option<Rc<T>> {
    let mut items = items.borrow_mut();
    let pos = items.iter().position(|item| Rc::ptr_eq(item, target))?;
    Some(items.remove(pos))
}
