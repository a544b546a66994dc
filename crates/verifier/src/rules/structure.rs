//! Structural rules over lists and objects: `value`, `key` and `attr`.

use crate::arguments::Args;
use crate::chain::{Verifier, reject};
use crate::error::{UsageError, UsageResult};
use crate::value::{Key, Value, loose_eq, strict_eq};

// ============================================================================
// PREDICATES
// ============================================================================

fn has_value(ctx: &Verifier, needle: &Value, strict: bool) -> bool {
    let matches = |item: &Value| {
        if strict {
            strict_eq(item, needle)
        } else {
            loose_eq(item, needle)
        }
    };
    match ctx.data() {
        Value::List(list) => list.values().any(matches),
        Value::Object(obj) => obj.attrs().any(|(_, item)| matches(item)),
        _ => false,
    }
}

/// The stored value is loosely equal to one of `expected`; any stored value
/// passes when nothing is expected.
fn is_expected(stored: &Value, expected: &[Value]) -> bool {
    expected.is_empty() || expected.iter().any(|candidate| loose_eq(stored, candidate))
}

fn has_key(ctx: &Verifier, args: &Args) -> bool {
    let (Value::List(list), Some((key, expected))) = (ctx.data(), args.split_first()) else {
        return false;
    };
    Key::from_value(key)
        .and_then(|key| list.get(&key))
        .is_some_and(|stored| is_expected(stored, expected))
}

fn has_attr(ctx: &Verifier, args: &Args) -> bool {
    let (Value::Object(obj), Some((Value::String(name), expected))) =
        (ctx.data(), args.split_first())
    else {
        return false;
    };
    obj.attr(name)
        .is_some_and(|stored| is_expected(stored, expected))
}

fn require_arguments(rule: &'static str, args: Args) -> UsageResult<Args> {
    if args.is_empty() {
        return Err(reject(UsageError::MissingArguments { rule }));
    }
    Ok(args)
}

// ============================================================================
// RULES
// ============================================================================

impl Verifier {
    /// The list's values, or the object's attribute values, include
    /// `needle` (loosely, or strictly when `strict`).
    pub fn value(self, needle: impl Into<Value>, strict: bool) -> Self {
        let needle = needle.into();
        self.apply("value", |ctx| has_value(ctx, &needle, strict))
    }

    /// Negation of [`value`](Self::value).
    pub fn not_value(self, needle: impl Into<Value>, strict: bool) -> Self {
        let needle = needle.into();
        self.apply_negated("not_value", |ctx| has_value(ctx, &needle, strict))
    }

    /// The list has a key, optionally holding one of the expected values.
    ///
    /// The first argument is the key (`"3"` and `3` are the same key); any
    /// further arguments are the accepted values. A call without arguments
    /// is rejected, even on a failed chain.
    ///
    /// ```
    /// use nebula_verifier::{args, is, list};
    ///
    /// let numbers = list! { "one" => "uno", "two" => 2, 3 => "tres" };
    /// assert!(is(numbers.clone()).key("one")?.resolve());
    /// assert!(is(numbers.clone()).key(args![3, "three", "tres"])?.resolve());
    /// assert!(!is(numbers.clone()).key(args!["one", 1])?.resolve());
    /// assert!(is(numbers).key(args![]).is_err());
    /// # Ok::<(), nebula_verifier::UsageError>(())
    /// ```
    pub fn key(self, args: impl Into<Args>) -> UsageResult<Self> {
        let args = require_arguments("key", args.into())?;
        Ok(self.apply("key", |ctx| has_key(ctx, &args)))
    }

    /// Negation of [`key`](Self::key).
    pub fn not_key(self, args: impl Into<Args>) -> UsageResult<Self> {
        let args = require_arguments("not_key", args.into())?;
        Ok(self.apply_negated("not_key", |ctx| has_key(ctx, &args)))
    }

    /// The object has an attribute, optionally holding one of the expected
    /// values.
    ///
    /// The first argument must be a string naming the attribute; anything
    /// else fails the rule. A call without arguments is rejected, even on a
    /// failed chain.
    pub fn attr(self, args: impl Into<Args>) -> UsageResult<Self> {
        let args = require_arguments("attr", args.into())?;
        Ok(self.apply("attr", |ctx| has_attr(ctx, &args)))
    }

    /// Negation of [`attr`](Self::attr).
    pub fn not_attr(self, args: impl Into<Args>) -> UsageResult<Self> {
        let args = require_arguments("not_attr", args.into())?;
        Ok(self.apply_negated("not_attr", |ctx| has_attr(ctx, &args)))
    }
}
