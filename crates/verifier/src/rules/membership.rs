//! Membership rules: `is_in` / `out` (intervals, substrings and value lists)
//! and `contain` / `contain_any` / `without`.
//!
//! # Intervals
//!
//! A single string argument given to `is_in` / `out` on a number is read as
//! an interval: an opening `[` (inclusive) or `(` (exclusive), two numeric
//! endpoints separated by a comma, and a closing `]` or `)`. Endpoints are
//! sorted, so `[10,-5]` is `[-5,10]`.
//!
//! ```
//! use nebula_verifier::is;
//!
//! assert!(is(3).is_in("(-2,3]").resolve());
//! assert!(!is(4).is_in("[1,4)").resolve());
//! assert!(is(4).out("(-2.2,4)").resolve());
//! ```
//!
//! Brackets are read independently: a first character other than `[` / `(`
//! leaves the lower side unspecified, and likewise for the last character.
//! `is_in` requires a lower side and ANDs the upper test into it; `out`
//! starts from "below the lower side" and ORs "above the upper side" into
//! it. The two rules are therefore not exact complements for half-specified
//! intervals.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::arguments::Args;
use crate::chain::Verifier;
use crate::value::{Number, Value, loose_eq, parse_numeric};

// ============================================================================
// INTERVAL
// ============================================================================

/// One side of an interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoint {
    /// Boundary value.
    pub value: Number,
    /// Whether the boundary itself belongs to the interval.
    pub inclusive: bool,
}

impl Endpoint {
    /// `x` lies on the inner side of this endpoint taken as a lower bound.
    fn admits_from_above(self, x: Number) -> bool {
        match x.compare(self.value) {
            Some(Ordering::Greater) => true,
            Some(Ordering::Equal) => self.inclusive,
            _ => false,
        }
    }

    /// `x` lies on the inner side of this endpoint taken as an upper bound.
    fn admits_from_below(self, x: Number) -> bool {
        match x.compare(self.value) {
            Some(Ordering::Less) => true,
            Some(Ordering::Equal) => self.inclusive,
            _ => false,
        }
    }

    /// `x` lies strictly outside, below this lower bound.
    fn below(self, x: Number) -> bool {
        match x.compare(self.value) {
            Some(Ordering::Less) => true,
            Some(Ordering::Equal) => !self.inclusive,
            _ => false,
        }
    }

    /// `x` lies strictly outside, above this upper bound.
    fn above(self, x: Number) -> bool {
        match x.compare(self.value) {
            Some(Ordering::Greater) => true,
            Some(Ordering::Equal) => !self.inclusive,
            _ => false,
        }
    }
}

/// A numeric interval such as `[2.618,3.142)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower side, if the text opened with `[` or `(`.
    pub lower: Option<Endpoint>,
    /// Upper side, if the text closed with `]` or `)`.
    pub upper: Option<Endpoint>,
}

impl Interval {
    /// Parses interval text. `None` when there are not exactly two numeric
    /// endpoints.
    ///
    /// ```
    /// use nebula_verifier::rules::Interval;
    /// use nebula_verifier::value::Number;
    ///
    /// let interval = Interval::parse("[10,-5]").unwrap();
    /// assert_eq!(interval.lower.map(|e| e.value), Some(Number::Int(-5)));
    /// assert!(Interval::parse("[1,2,3]").is_none());
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        let open = chars.next()?;
        let close = chars.next_back()?;

        let mut endpoints = chars.as_str().split(',');
        let (Some(a), Some(b), None) = (endpoints.next(), endpoints.next(), endpoints.next())
        else {
            return None;
        };
        let (a, b) = (parse_numeric(a)?, parse_numeric(b)?);
        let (low, high) = if b.compare(a) == Some(Ordering::Less) {
            (b, a)
        } else {
            (a, b)
        };

        let side = |value: Number, delimiter: char, inclusive: char, exclusive: char| {
            (delimiter == inclusive || delimiter == exclusive).then_some(Endpoint {
                value,
                inclusive: delimiter == inclusive,
            })
        };
        Some(Self {
            lower: side(low, open, '[', '('),
            upper: side(high, close, ']', ')'),
        })
    }

    /// `is_in` semantics.
    #[must_use]
    pub fn contains(&self, x: Number) -> bool {
        let mut inside = self.lower.is_some_and(|lower| lower.admits_from_above(x));
        if let Some(upper) = self.upper {
            inside &= upper.admits_from_below(x);
        }
        inside
    }

    /// `out` semantics.
    #[must_use]
    pub fn excludes(&self, x: Number) -> bool {
        let mut outside = self.lower.is_some_and(|lower| lower.below(x));
        if let Some(upper) = self.upper {
            outside |= upper.above(x);
        }
        outside
    }
}

// ============================================================================
// PREDICATES
// ============================================================================

/// Where the data sits relative to the arguments of `is_in` / `out`.
enum Placement {
    Inside,
    Outside,
    Inapplicable,
}

fn place(ctx: &Verifier, args: &Args) -> Placement {
    let data = ctx.data();
    let inside = match (data, args.single_value()) {
        (Value::Int(_) | Value::Float(_), Some(Value::String(text))) => {
            let Some(x) = data.as_number() else {
                return Placement::Inapplicable;
            };
            return match Interval::parse(text) {
                Some(interval) if interval.contains(x) => Placement::Inside,
                Some(interval) if interval.excludes(x) => Placement::Outside,
                _ => Placement::Inapplicable,
            };
        }
        (Value::String(needle), Some(Value::String(haystack))) => {
            haystack.to_lowercase().contains(&needle.to_lowercase())
        }
        (Value::Int(_) | Value::Float(_) | Value::String(_), _) => {
            args.values().iter().any(|candidate| loose_eq(data, candidate))
        }
        _ => return Placement::Inapplicable,
    };
    if inside {
        Placement::Inside
    } else {
        Placement::Outside
    }
}

fn is_inside(ctx: &Verifier, args: &Args) -> bool {
    matches!(place(ctx, args), Placement::Inside)
}

fn is_outside(ctx: &Verifier, args: &Args) -> bool {
    matches!(place(ctx, args), Placement::Outside)
}

fn needle_text(needle: &Value) -> Option<Cow<'_, str>> {
    match needle {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::List(_) | Value::Object(_) | Value::Resource(_) => None,
        scalar => Some(Cow::Owned(scalar.to_text())),
    }
}

fn holds(data: &Value, needle: &Value) -> bool {
    match data {
        Value::String(haystack) => {
            needle_text(needle).is_some_and(|needle| haystack.contains(needle.as_ref()))
        }
        Value::List(list) => list.values().any(|item| loose_eq(item, needle)),
        _ => false,
    }
}

fn is_searchable(ctx: &Verifier) -> bool {
    matches!(ctx.data(), Value::String(_) | Value::List(_))
}

fn holds_all(ctx: &Verifier, args: &Args) -> bool {
    is_searchable(ctx) && args.values().iter().all(|needle| holds(ctx.data(), needle))
}

fn holds_any(ctx: &Verifier, args: &Args) -> bool {
    is_searchable(ctx) && args.values().iter().any(|needle| holds(ctx.data(), needle))
}

fn lacks_any(ctx: &Verifier, args: &Args) -> bool {
    is_searchable(ctx) && args.values().iter().any(|needle| !holds(ctx.data(), needle))
}

// ============================================================================
// RULES
// ============================================================================

impl Verifier {
    /// The value lies inside an interval, inside a string, or among a list
    /// of values.
    ///
    /// - number + single string: interval test (see the module docs)
    /// - string + single string: case-insensitive "is a substring of"
    /// - otherwise: loose membership among the argument values
    ///
    /// Applies to ints, floats and strings.
    ///
    /// ```
    /// use nebula_verifier::{args, is};
    ///
    /// assert!(is(8).is_in(args![2, 4, 6, 8]).resolve());
    /// assert!(is("wor").is_in("Hello world!").resolve());
    /// assert!(is("two").is_in(vec!["one", "two", "three"]).resolve());
    /// ```
    pub fn is_in(self, args: impl Into<Args>) -> Self {
        let args = args.into();
        self.apply("is_in", |ctx| is_inside(ctx, &args))
    }

    /// Negation of [`is_in`](Self::is_in).
    pub fn not_in(self, args: impl Into<Args>) -> Self {
        let args = args.into();
        self.apply_negated("not_in", |ctx| is_inside(ctx, &args))
    }

    /// The value lies outside an interval, outside a string, or is absent
    /// from a list of values. Same call shapes as [`is_in`](Self::is_in).
    pub fn out(self, args: impl Into<Args>) -> Self {
        let args = args.into();
        self.apply("out", |ctx| is_outside(ctx, &args))
    }

    /// Negation of [`out`](Self::out).
    pub fn not_out(self, args: impl Into<Args>) -> Self {
        let args = args.into();
        self.apply_negated("not_out", |ctx| is_outside(ctx, &args))
    }

    /// The string contains every needle (case-sensitive), or the list holds
    /// every needle among its values (loose equality).
    ///
    /// ```
    /// use nebula_verifier::{args, is};
    ///
    /// assert!(is("My name is Emi").contain(args!["name", "Emi"]).resolve());
    /// assert!(!is("My name is Emi").contain("emi").resolve());
    /// ```
    pub fn contain(self, args: impl Into<Args>) -> Self {
        let args = args.into();
        self.apply("contain", |ctx| holds_all(ctx, &args))
    }

    /// Negation of [`contain`](Self::contain).
    pub fn not_contain(self, args: impl Into<Args>) -> Self {
        let args = args.into();
        self.apply_negated("not_contain", |ctx| holds_all(ctx, &args))
    }

    /// Like [`contain`](Self::contain), but one needle is enough.
    pub fn contain_any(self, args: impl Into<Args>) -> Self {
        let args = args.into();
        self.apply("contain_any", |ctx| holds_any(ctx, &args))
    }

    /// Negation of [`contain_any`](Self::contain_any).
    pub fn not_contain_any(self, args: impl Into<Args>) -> Self {
        let args = args.into();
        self.apply_negated("not_contain_any", |ctx| holds_any(ctx, &args))
    }

    /// At least one needle is missing from the string or list.
    ///
    /// This is not the negation of [`contain`](Self::contain) applied per
    /// needle: `without(args!["name", "Emilio"])` holds on
    /// `"My name is Emi"` because one needle is absent.
    pub fn without(self, args: impl Into<Args>) -> Self {
        let args = args.into();
        self.apply("without", |ctx| lacks_any(ctx, &args))
    }

    /// Negation of [`without`](Self::without).
    pub fn not_without(self, args: impl Into<Args>) -> Self {
        let args = args.into();
        self.apply_negated("not_without", |ctx| lacks_any(ctx, &args))
    }
}
