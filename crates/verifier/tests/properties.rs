//! Property-based tests for nebula-verifier.

use nebula_verifier::prelude::*;
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1.0e6..1.0e6_f64).prop_map(Value::from),
        "[ -~]{0,12}".prop_map(Value::from),
        "-?[0-9]{1,6}(\\.[0-9]{1,3})?".prop_map(Value::from),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(2, 16, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Value::from)
    })
}

/// Runs one named rule on a fresh chain, optionally negated.
fn run(chain: Verifier, rule: usize, negated: bool) -> Verifier {
    match (rule, negated) {
        (0, false) => chain.int(false),
        (0, true) => chain.not_int(false),
        (1, false) => chain.num(true),
        (1, true) => chain.not_num(true),
        (2, false) => chain.str(),
        (2, true) => chain.not_str(),
        (3, false) => chain.arr(),
        (3, true) => chain.not_arr(),
        (4, false) => chain.empty(),
        (4, true) => chain.not_empty(),
        (5, false) => chain.eq(0, false),
        (5, true) => chain.not_eq(0, false),
        (6, false) => chain.contain("1"),
        (6, true) => chain.not_contain("1"),
        (_, false) => chain.boo(),
        (_, true) => chain.not_boo(),
    }
}

// ============================================================================
// AND-FOLD: a failed chain never recovers
// ============================================================================

proptest! {
    #[test]
    fn chain_is_the_and_of_its_rules(v in value(), rules in prop::collection::vec(0..8_usize, 0..8)) {
        let mut chain = is(v.clone());
        let mut expected = true;
        for rule in rules {
            expected &= run(is(v.clone()), rule, false).resolve();
            chain = run(chain, rule, false);
            prop_assert_eq!(chain.is_pending(), expected);
        }
        prop_assert_eq!(chain.resolve(), expected);
    }

    #[test]
    fn failed_chain_stays_failed(v in value(), rules in prop::collection::vec(0..8_usize, 0..8)) {
        let mut chain = is(v).not_str().str();
        for rule in rules {
            chain = run(chain, rule, rule % 2 == 0);
            prop_assert_eq!(chain.state(), ChainState::Failed);
        }
    }
}

// ============================================================================
// DUALITY: not_r fails exactly where r holds
// ============================================================================

proptest! {
    #[test]
    fn negated_rules_are_complements(v in value(), rule in 0..8_usize) {
        let plain = run(is(v.clone()), rule, false).resolve();
        let negated = run(is(v), rule, true).resolve();
        prop_assert_ne!(plain, negated);
    }

    #[test]
    fn not_in_complements_is_in_for_lists_of_values(x in -50..50_i64, set in prop::collection::vec(-50..50_i64, 0..6)) {
        let inside = is(x).is_in(set.clone()).resolve();
        prop_assert_eq!(is(x).not_in(set.clone()).resolve(), !inside);
        prop_assert_eq!(is(x).out(set).resolve(), !inside);
    }
}

// ============================================================================
// INTERVALS
// ============================================================================

proptest! {
    #[test]
    fn endpoint_order_is_irrelevant(
        x in -100..100_i64,
        a in -100..100_i64,
        b in -100..100_i64,
        open in prop::sample::select(vec!['[', '(']),
        close in prop::sample::select(vec![']', ')']),
    ) {
        let forward = format!("{open}{a},{b}{close}");
        let backward = format!("{open}{b},{a}{close}");
        prop_assert_eq!(is(x).is_in(forward.as_str()).resolve(), is(x).is_in(backward.as_str()).resolve());
        prop_assert_eq!(is(x).out(forward.as_str()).resolve(), is(x).out(backward.as_str()).resolve());
    }

    #[test]
    fn closed_intervals_partition_numbers(x in -100..100_i64, a in -100..100_i64, b in -100..100_i64) {
        let (lo, hi) = (a.min(b), a.max(b));
        let interval = format!("[{a},{b}]");
        let inside = lo <= x && x <= hi;
        prop_assert_eq!(is(x).is_in(interval.as_str()).resolve(), inside);
        prop_assert_eq!(is(x).out(interval.as_str()).resolve(), !inside);
    }
}

// ============================================================================
// LENGTH
// ============================================================================

proptest! {
    #[test]
    fn len_agrees_with_char_count(s in "\\PC{0,20}") {
        let n = i64::try_from(s.chars().count()).unwrap();
        prop_assert!(is(s.as_str()).len("==", n).unwrap().resolve());
        prop_assert!(!is(s.as_str()).len("!=", n).unwrap().resolve());
        prop_assert!(is(s.as_str()).not_len("<", n).unwrap().resolve());
    }
}
