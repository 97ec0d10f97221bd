//! Property tests for the rule base and the LZ9 benchmark.

use proptest::prelude::*;
use std::rc::Rc;
use u_fuzzy::benchmark::pareto::{dominates, non_dominated_sort};
use u_fuzzy::benchmark::{BoxConstraints, Lz9, MultiObjectiveFunction};
use u_fuzzy::fuzzy::{FuzzyError, NamedVariable, Rule, RuleBase, RuleRef};

struct Labeled(usize);

impl Rule for Labeled {
    fn print_rule(&self) -> String {
        format!("rule {}", self.0)
    }
}

fn labeled(n: usize) -> Vec<RuleRef> {
    (0..n).map(|i| Rc::new(Labeled(i)) as RuleRef).collect()
}

proptest! {
    #[test]
    fn prop_rules_keep_insertion_order(n in 0usize..40) {
        let base = RuleBase::new();
        let rules = labeled(n);
        for r in &rules {
            base.add_rule(r.clone());
        }

        prop_assert_eq!(base.number_of_rules(), n);
        for (i, r) in rules.iter().enumerate() {
            prop_assert!(Rc::ptr_eq(&base.get_rule(i).unwrap(), r));
        }
        prop_assert_eq!(
            base.get_rule(n).err(),
            Some(FuzzyError::IndexOutOfBounds { index: n, len: n })
        );
    }

    #[test]
    fn prop_remove_shifts_and_preserves_order(n in 1usize..30, pick in any::<prop::sample::Index>()) {
        let base = RuleBase::new();
        let rules = labeled(n);
        for r in &rules {
            base.add_rule(r.clone());
        }

        let victim = pick.index(n);
        base.remove_rule(&rules[victim]);

        let expected: Vec<&RuleRef> = rules
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != victim)
            .map(|(_, r)| r)
            .collect();
        prop_assert_eq!(base.number_of_rules(), n - 1);
        for (i, r) in expected.iter().enumerate() {
            prop_assert!(Rc::ptr_eq(&base.get_rule(i).unwrap(), r));
        }
    }

    #[test]
    fn prop_remove_absent_changes_nothing(n in 0usize..20) {
        let base = RuleBase::new();
        for r in labeled(n) {
            base.add_rule(r);
        }
        let before = base.print();

        let stranger: RuleRef = Rc::new(Labeled(0));
        base.remove_rule(&stranger);

        prop_assert_eq!(base.number_of_rules(), n);
        prop_assert_eq!(base.print(), before);
    }

    #[test]
    fn prop_set_input_format_replaces(old in 0usize..5, new in 0usize..5) {
        let base = RuleBase::new();
        base.extend_input_format((0..old).map(|i| NamedVariable::shared(format!("old{i}"))));

        let vars: Vec<_> = (0..new).map(|i| NamedVariable::shared(format!("new{i}"))).collect();
        base.set_input_format(&vars);

        let current = base.input_format();
        prop_assert_eq!(current.len(), new);
        for (a, b) in current.iter().zip(&vars) {
            prop_assert!(Rc::ptr_eq(a, b));
        }
    }

    #[test]
    fn prop_lz9_never_beats_its_front(
        n in 3usize..20,
        seed in prop::collection::vec(0.0f64..=1.0, 20),
    ) {
        let lz9 = Lz9::new(n);
        let x = &seed[..n];
        prop_assert!(lz9.constraints().is_feasible(x));

        let f = lz9.eval(x).unwrap();
        let optimal = lz9.eval(&lz9.pareto_set_point(x[0])).unwrap();
        prop_assert!(f[0] >= optimal[0] - 1e-12);
        prop_assert!(f[1] >= optimal[1] - 1e-12);
        prop_assert!(!dominates(&f, &optimal));
    }

    #[test]
    fn prop_front_ranks_are_consistent(
        points in prop::collection::vec(prop::collection::vec(0.0f64..10.0, 2), 1..30),
    ) {
        let sorted = non_dominated_sort(&points);
        prop_assert_eq!(sorted.ranks.len(), points.len());
        prop_assert_eq!(sorted.fronts.iter().map(Vec::len).sum::<usize>(), points.len());
        for i in 0..points.len() {
            for j in 0..points.len() {
                if dominates(&points[i], &points[j]) {
                    prop_assert!(sorted.ranks[i] < sorted.ranks[j]);
                }
            }
        }
    }

    #[test]
    fn prop_closest_feasible_is_feasible(x in prop::collection::vec(-5.0f64..5.0, 4)) {
        let b = BoxConstraints::new(vec![-1.0, 0.0, 0.0, 2.0], vec![1.0, 0.0, 3.0, 2.5]).unwrap();
        prop_assert!(b.is_feasible(&b.closest_feasible(&x)));
    }
}
