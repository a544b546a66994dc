//! Comparison rules: `len`, `eq` and `ineq`.

use std::cmp::Ordering;
use std::fmt;

use crate::chain::{Verifier, reject};
use crate::error::{UsageError, UsageResult};
use crate::value::{Number, Value, loose_eq, strict_eq};

// ============================================================================
// OPERATORS
// ============================================================================

/// A comparison operator, as spelled at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `=` or `==`
    Eq,
    /// `===`
    StrictEq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl Operator {
    /// Parses an operator, ignoring surrounding whitespace.
    #[must_use]
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s.trim() {
            "=" | "==" => Some(Self::Eq),
            "===" => Some(Self::StrictEq),
            "!=" => Some(Self::Ne),
            "<" => Some(Self::Lt),
            "<=" => Some(Self::Le),
            ">" => Some(Self::Gt),
            ">=" => Some(Self::Ge),
            _ => None,
        }
    }

    /// Whether `ordering` (left compared to right) satisfies the operator.
    #[must_use]
    pub fn holds(self, ordering: Ordering) -> bool {
        match self {
            Self::Eq | Self::StrictEq => ordering.is_eq(),
            Self::Ne => ordering.is_ne(),
            Self::Lt => ordering.is_lt(),
            Self::Le => ordering.is_le(),
            Self::Gt => ordering.is_gt(),
            Self::Ge => ordering.is_ge(),
        }
    }

    /// True for `<`, `<=`, `>` and `>=`.
    #[must_use]
    pub const fn is_inequality(self) -> bool {
        matches!(self, Self::Lt | Self::Le | Self::Gt | Self::Ge)
    }

    /// Canonical spelling.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::StrictEq => "===",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// PREDICATES
// ============================================================================

fn length_of(ctx: &Verifier) -> Option<usize> {
    let unit = ctx.config().length_unit;
    match ctx.data() {
        Value::List(list) => Some(list.len()),
        Value::String(s) => Some(unit.measure(s)),
        value @ (Value::Int(_) | Value::Float(_)) => Some(unit.measure(&value.to_text())),
        _ => None,
    }
}

fn has_length(ctx: &Verifier, operator: &str, bound: i64) -> bool {
    let Some(operator) = Operator::from_symbol(operator) else {
        return false;
    };
    length_of(ctx).is_some_and(|len| {
        let len = i64::try_from(len).unwrap_or(i64::MAX);
        operator.holds(len.cmp(&bound))
    })
}

fn equals(ctx: &Verifier, other: &Value, strict: bool) -> bool {
    if strict {
        strict_eq(ctx.data(), other)
    } else {
        loose_eq(ctx.data(), other)
    }
}

fn satisfies(ctx: &Verifier, operator: &str, bound: Number) -> bool {
    let operator = match Operator::from_symbol(operator) {
        Some(operator) if operator.is_inequality() => operator,
        _ => return false,
    };
    let data = match ctx.data() {
        Value::Int(_) | Value::Float(_) | Value::String(_) => ctx.data().as_number(),
        _ => None,
    };
    data.and_then(|n| n.compare(bound))
        .is_some_and(|ordering| operator.holds(ordering))
}

fn integer_bound(rule: &'static str, bound: Value) -> UsageResult<i64> {
    match bound {
        Value::Int(n) => Ok(n),
        other => Err(reject(UsageError::NonIntegerLength {
            rule,
            found: other.kind(),
        })),
    }
}

fn numeric_bound(rule: &'static str, bound: &Value) -> UsageResult<Number> {
    let number = match bound {
        Value::Int(_) | Value::Float(_) | Value::String(_) => bound.as_number(),
        _ => None,
    };
    number.ok_or_else(|| {
        reject(UsageError::NonNumericBound {
            rule,
            found: bound.kind(),
        })
    })
}

// ============================================================================
// RULES
// ============================================================================

impl Verifier {
    /// Compares the length of the value with `bound`.
    ///
    /// Lists measure their element count; strings, ints and floats measure
    /// their text form (`-8` has length 2). Other kinds fail. `bound` must be
    /// an `Int`, otherwise the call is rejected even on a failed chain.
    ///
    /// ```
    /// use nebula_verifier::is;
    ///
    /// assert!(is("abcd").len(">", 2)?.len("<", 5)?.resolve());
    /// assert!(is(-8).len("==", 2)?.resolve());
    /// assert!(is("abc").len("<=", 3.14).is_err());
    /// # Ok::<(), nebula_verifier::UsageError>(())
    /// ```
    pub fn len(self, operator: &str, bound: impl Into<Value>) -> UsageResult<Self> {
        let bound = integer_bound("len", bound.into())?;
        Ok(self.apply("len", |ctx| has_length(ctx, operator, bound)))
    }

    /// Negation of [`len`](Self::len). Kinds without a length pass.
    pub fn not_len(self, operator: &str, bound: impl Into<Value>) -> UsageResult<Self> {
        let bound = integer_bound("not_len", bound.into())?;
        Ok(self.apply_negated("not_len", |ctx| has_length(ctx, operator, bound)))
    }

    /// Equality with `other`: loose (coercing) by default, same kind and
    /// value when `strict`.
    ///
    /// ```
    /// use nebula_verifier::is;
    ///
    /// assert!(is(32).eq("32", false).resolve());
    /// assert!(!is(32).eq("32", true).resolve());
    /// assert!(!is(true).eq(0, false).resolve());
    /// ```
    pub fn eq(self, other: impl Into<Value>, strict: bool) -> Self {
        let other = other.into();
        self.apply("eq", |ctx| equals(ctx, &other, strict))
    }

    /// Negation of [`eq`](Self::eq).
    pub fn not_eq(self, other: impl Into<Value>, strict: bool) -> Self {
        let other = other.into();
        self.apply_negated("not_eq", |ctx| equals(ctx, &other, strict))
    }

    /// Numeric inequality against `bound` (`<`, `<=`, `>`, `>=` only).
    ///
    /// Applies to ints, floats and numeric strings. `bound` must be numeric
    /// (an int, a float or a numeric string), otherwise the call is rejected.
    pub fn ineq(self, operator: &str, bound: impl Into<Value>) -> UsageResult<Self> {
        let bound = numeric_bound("ineq", &bound.into())?;
        Ok(self.apply("ineq", |ctx| satisfies(ctx, operator, bound)))
    }

    /// Negation of [`ineq`](Self::ineq).
    pub fn not_ineq(self, operator: &str, bound: impl Into<Value>) -> UsageResult<Self> {
        let bound = numeric_bound("not_ineq", &bound.into())?;
        Ok(self.apply_negated("not_ineq", |ctx| satisfies(ctx, operator, bound)))
    }
}
