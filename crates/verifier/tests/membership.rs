//! Integration tests for `is_in`, `out`, `contain`, `contain_any` and
//! `without`.

use nebula_verifier::prelude::*;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

#[fixture]
fn numbers() -> List {
    list! { "one" => "uno", "two" => 2, 3 => "tres" }
}

// ============================================================================
// INTERVALS
// ============================================================================

#[test]
fn interval_scenarios() {
    assert!(is(3).is_in("(-2,3]").resolve());
    assert!(!is(4).is_in("[1,4)").resolve());
    assert!(is(4).int(true).is_in("[1,4]").out("(4,10]").resolve());
}

#[rstest]
#[case("[10,-5]", "[-5,10]")]
#[case("(3.142,2.618]", "(2.618,3.142]")]
#[case("[7,7]", "[7,7]")]
fn endpoint_order_does_not_matter(#[case] reversed: &str, #[case] sorted: &str) {
    for x in [-6, -5, 0, 2, 3, 7, 10, 11] {
        assert_eq!(is(x).is_in(reversed).resolve(), is(x).is_in(sorted).resolve(), "{x}");
        assert_eq!(is(x).out(reversed).resolve(), is(x).out(sorted).resolve(), "{x}");
    }
}

#[test]
fn interval_text_on_a_string_is_a_substring_test() {
    assert!(is("1,2").is_in("[1,2]").resolve());
    assert!(!is("3").is_in("[1,4]").resolve());
}

#[test]
fn intervals_parse_as_values() {
    let interval = nebula_verifier::rules::Interval::parse("[2.618,3.142)").unwrap();
    let lower = interval.lower.unwrap();
    let upper = interval.upper.unwrap();
    assert!(lower.inclusive);
    assert!(!upper.inclusive);
}

// ============================================================================
// SUBSTRINGS AND VALUE LISTS
// ============================================================================

#[rstest]
#[case(Value::from("WORLD"), Value::from("Hello world!"), true)]
#[case(Value::from("planet"), Value::from("Hello world!"), false)]
#[case(Value::from(2), Value::from(list![1, 2, 3]), true)]
#[case(Value::from("2"), Value::from(list![1, 2, 3]), true)]
#[case(Value::from(true), Value::from(list![true]), false)]
#[case(Value::from(list![1]), Value::from(list![1]), false)]
fn is_in_and_out(#[case] value: Value, #[case] haystack: Value, #[case] inside: bool) {
    let applicable = !matches!(value.kind(), DataKind::Bool | DataKind::List);
    assert_eq!(is(value.clone()).is_in(haystack.clone()).resolve(), inside);
    assert_eq!(is(value).out(haystack).resolve(), applicable && !inside);
}

// ============================================================================
// CONTAIN FAMILY
// ============================================================================

#[rstest]
fn list_membership(numbers: List) {
    assert!(is(numbers.clone()).contain("uno").resolve());
    assert!(!is(numbers.clone()).contain(args!["uno", "dos"]).resolve());
    assert!(is(numbers.clone()).contain_any(args!["uno", "dos"]).resolve());
    assert!(is(numbers.clone()).contain_any(vec!["dos", "tres"]).resolve());
    assert!(is(numbers.clone()).without(args!["uno", "dos"]).resolve());
    assert!(!is(numbers.clone()).without(args!["uno", 2]).resolve());
    assert!(is(numbers).contain("2").resolve());
}

#[rstest]
#[case(args!["name", "Emi"], true, true, false)]
#[case(args!["name", "Emilio"], false, true, true)]
#[case(args!["Name"], false, false, true)]
#[case(args![3], false, false, true)]
fn string_membership(
    #[case] needles: Args,
    #[case] contain: bool,
    #[case] contain_any: bool,
    #[case] without: bool,
) {
    let text = "My name is Emi";
    assert_eq!(is(text).contain(needles.clone()).resolve(), contain);
    assert_eq!(is(text).contain_any(needles.clone()).resolve(), contain_any);
    assert_eq!(is(text).without(needles.clone()).resolve(), without);
    assert_eq!(is(text).not_contain(needles).resolve(), !contain);
}

#[test]
fn empty_needle_lists() {
    assert!(is("abc").contain(args![]).resolve());
    assert!(!is("abc").contain_any(args![]).resolve());
    assert!(!is("abc").without(args![]).resolve());
}

#[test]
fn contain_family_fails_on_other_kinds() {
    for value in [Value::from(123), Value::Null, Value::from(Object::new("stdClass"))] {
        assert!(!is(value.clone()).contain(args![]).resolve());
        assert!(!is(value.clone()).contain_any("1").resolve());
        assert!(!is(value).without("1").resolve());
    }
}
