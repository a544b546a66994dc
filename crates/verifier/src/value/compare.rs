//! Loose and strict equality.
//!
//! Loose equality coerces across kinds:
//!
//! | left \ right | Bool        | Null            | Number            | String                        |
//! |--------------|-------------|-----------------|-------------------|-------------------------------|
//! | Bool         | ==          | truthiness      | truthiness        | truthiness                    |
//! | Null         | truthiness  | equal           | other is falsy    | string is empty               |
//! | Number       | truthiness  | falsy           | numeric           | numeric, else text            |
//! | String       | truthiness  | empty           | numeric, else text| numeric if both, else bytes   |
//!
//! Lists compare by key set and loosely equal values, objects by class and
//! loosely equal attributes (or by instant for date/times), resources by
//! instance. Any other pairing is unequal.

use std::sync::Arc;

use super::{Number, Value, parse_numeric};

/// Loose (coercing) equality.
///
/// ```
/// use nebula_verifier::value::{Value, loose_eq};
///
/// assert!(loose_eq(&Value::from(32), &Value::from("32")));
/// assert!(loose_eq(&Value::from("0"), &Value::from(false)));
/// assert!(!loose_eq(&Value::from(true), &Value::from(0)));
/// ```
#[must_use]
pub fn loose_eq(left: &Value, right: &Value) -> bool {
    use Value::{Bool, Float, Int, List, Null, Object, Resource, String};

    match (left, right) {
        (Null, Null) => true,
        (Bool(a), other) | (other, Bool(a)) => *a == other.is_truthy(),
        (Null, String(s)) | (String(s), Null) => s.is_empty(),
        (Null, other) | (other, Null) => !other.is_truthy(),
        (Int(_) | Float(_), Int(_) | Float(_)) => match (left.as_number(), right.as_number()) {
            (Some(a), Some(b)) => a.num_eq(b),
            _ => false,
        },
        (Int(_) | Float(_), String(s)) => number_eq_string(left, s),
        (String(s), Int(_) | Float(_)) => number_eq_string(right, s),
        (String(a), String(b)) => match (parse_numeric(a), parse_numeric(b)) {
            (Some(x), Some(y)) => x.num_eq(y),
            _ => a == b,
        },
        (List(a), List(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, value)| b.get(key).is_some_and(|theirs| loose_eq(value, theirs)))
        }
        (Object(a), Object(b)) => Arc::ptr_eq(a, b) || a.loosely_equals(b),
        (Resource(a), Resource(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

fn number_eq_string(number: &Value, s: &str) -> bool {
    match (number.as_number(), parse_numeric(s)) {
        (Some(a), Some(b)) => a.num_eq(b),
        _ => number.to_text() == s,
    }
}

/// Strict equality: same kind and same value.
///
/// Lists must agree on key order, keys and strictly equal values; objects and
/// resources must be the same instance.
#[must_use]
pub fn strict_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Float(a), Value::Float(b)) => Number::Float(*a).num_eq(Number::Float(*b)),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::List(a), Value::List(b)) => {
            a.len() == b.len()
                && a.iter()
                    .zip(b.iter())
                    .all(|((ka, va), (kb, vb))| ka == kb && strict_eq(va, vb))
        }
        (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
        (Value::Resource(a), Value::Resource(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::value::{List as ValueList, Object as ValueObject};

    fn sample_list() -> Value {
        ValueList::new()
            .with("one", "uno")
            .with("two", 2)
            .with(3, "tres")
            .into()
    }

    #[rstest]
    // bool
    #[case(Value::from(true), Value::from(true), true)]
    #[case(Value::from(true), Value::from("abc"), true)]
    #[case(Value::from(true), Value::from(42), true)]
    #[case(Value::from(true), Value::from(0), false)]
    #[case(Value::from(false), Value::from(0), true)]
    // int
    #[case(Value::from(32), Value::from(32), true)]
    #[case(Value::from(32), Value::from(33), false)]
    #[case(Value::from(32), Value::from("32"), true)]
    #[case(Value::from(32), Value::from(true), true)]
    #[case(Value::from(0), Value::from(false), true)]
    #[case(Value::from(0), Value::from("a"), false)]
    #[case(Value::from(100), Value::from("1e2"), true)]
    // float
    #[case(Value::from(3.14), Value::from(3.14), true)]
    #[case(Value::from(3.14), Value::from(3.15), false)]
    #[case(Value::from(3.14), Value::from("3.14"), true)]
    #[case(Value::from(3.14), Value::from(true), true)]
    #[case(Value::from(0.0), Value::from(false), true)]
    // string
    #[case(Value::from("3.14"), Value::from(3.14), true)]
    #[case(Value::from("abc"), Value::from("abc"), true)]
    #[case(Value::from("abc"), Value::from("aBc"), false)]
    #[case(Value::from("abc"), Value::from(true), true)]
    #[case(Value::from("0"), Value::from(false), true)]
    #[case(Value::from(""), Value::from(false), true)]
    #[case(Value::from("1e3"), Value::from("1000"), true)]
    // null
    #[case(Value::Null, Value::from(""), true)]
    #[case(Value::Null, Value::from("0"), false)]
    #[case(Value::Null, Value::from(0), true)]
    #[case(Value::Null, Value::from(false), true)]
    #[case(Value::Null, Value::from(ValueList::new()), true)]
    // list
    #[case(sample_list(), sample_list(), true)]
    #[case(sample_list(), ValueList::new().with("one", "uno").into(), false)]
    #[case(Value::from(vec!["uno"]), Value::from(vec!["Uno"]), false)]
    #[case(sample_list(), Value::from(true), true)]
    #[case(Value::from(ValueList::new()), Value::from(false), true)]
    #[case(Value::from(vec![1]), Value::from(1), false)]
    fn loose_table(#[case] left: Value, #[case] right: Value, #[case] expected: bool) {
        assert_eq!(loose_eq(&left, &right), expected, "{left:?} == {right:?}");
        assert_eq!(loose_eq(&right, &left), expected, "{right:?} == {left:?}");
    }

    #[rstest]
    #[case(Value::from(true), Value::from("abc"))]
    #[case(Value::from(false), Value::from(0))]
    #[case(Value::from(32), Value::from("32"))]
    #[case(Value::from(32), Value::from(true))]
    #[case(Value::from(0.0), Value::from(false))]
    #[case(Value::from(3.14), Value::from("3.14"))]
    #[case(Value::from(""), Value::from(false))]
    #[case(Value::from(ValueList::new()), Value::from(false))]
    #[case(Value::from(1), Value::from(1.0))]
    fn strict_rejects_cross_kind(#[case] left: Value, #[case] right: Value) {
        assert!(!strict_eq(&left, &right));
    }

    #[test]
    fn strict_list_respects_order() {
        let ab = ValueList::new().with("a", 1).with("b", 2);
        let ba = ValueList::new().with("b", 2).with("a", 1);
        assert!(loose_eq(&ab.clone().into(), &ba.clone().into()));
        assert!(!strict_eq(&ab.into(), &ba.into()));
    }

    #[test]
    fn objects_compare_by_identity_when_strict() {
        let obj = Value::from(ValueObject::new("stdClass").with_attr("one", "uno"));
        let twin = Value::from(ValueObject::new("stdClass").with_attr("one", "uno"));
        let empty = Value::from(ValueObject::new("stdClass"));
        assert!(loose_eq(&obj, &obj.clone()));
        assert!(strict_eq(&obj, &obj.clone()));
        assert!(loose_eq(&obj, &twin));
        assert!(!strict_eq(&obj, &twin));
        assert!(!loose_eq(&obj, &empty));
        assert!(loose_eq(&obj, &Value::from(true)));
    }
}
