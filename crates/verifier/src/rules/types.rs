//! Kind rules: `boo`, `int`, `num`, `dec`, `str`, `arr`, `obj`, `res`, plus
//! the emptiness rule.

use crate::chain::Verifier;
use crate::value::{DataKind, Number, Value};

// ============================================================================
// PREDICATES
// ============================================================================

fn is_bool(ctx: &Verifier) -> bool {
    ctx.kind() == DataKind::Bool
}

fn is_int(ctx: &Verifier, strict: bool) -> bool {
    let integral = ctx.data().as_number().is_some_and(Number::is_integral);
    integral && (!strict || ctx.kind() == DataKind::Int)
}

fn is_num(ctx: &Verifier, strict: bool) -> bool {
    if strict {
        return ctx.kind().is_numeric();
    }
    match ctx.data() {
        Value::Int(_) => true,
        Value::Float(f) => f.is_finite(),
        Value::String(s) => crate::value::parse_numeric(s).is_some_and(|n| n.as_f64().is_finite()),
        _ => false,
    }
}

fn is_dec(ctx: &Verifier, strict: bool) -> bool {
    is_num(ctx, strict) && !is_int(ctx, false)
}

fn is_str(ctx: &Verifier) -> bool {
    ctx.kind() == DataKind::String
}

fn is_arr(ctx: &Verifier) -> bool {
    match ctx.data() {
        Value::List(_) => true,
        Value::Object(obj) => obj.as_array_like().is_some(),
        _ => false,
    }
}

fn is_obj(ctx: &Verifier, class: Option<&str>) -> bool {
    ctx.data()
        .as_object()
        .is_some_and(|obj| class.is_none_or(|class| obj.instance_of(class)))
}

fn is_res(ctx: &Verifier, kind: Option<&str>) -> bool {
    match ctx.data() {
        Value::Resource(res) => kind.is_none_or(|kind| res.kind().eq_ignore_ascii_case(kind)),
        _ => false,
    }
}

// ============================================================================
// RULES
// ============================================================================

impl Verifier {
    /// The value is a bool.
    pub fn boo(self) -> Self {
        self.apply("boo", is_bool)
    }

    /// Negation of [`boo`](Self::boo).
    pub fn not_boo(self) -> Self {
        self.apply_negated("not_boo", is_bool)
    }

    /// The value is numeric without a fractional part (`1.0` and `"-123"`
    /// count). `strict` also requires kind `Int`.
    ///
    /// ```
    /// use nebula_verifier::is;
    ///
    /// assert!(is(1.0).int(false).resolve());
    /// assert!(!is(1.0).int(true).resolve());
    /// assert!(!is("0xff").int(false).resolve());
    /// ```
    pub fn int(self, strict: bool) -> Self {
        self.apply("int", |ctx| is_int(ctx, strict))
    }

    /// Negation of [`int`](Self::int).
    pub fn not_int(self, strict: bool) -> Self {
        self.apply_negated("not_int", |ctx| is_int(ctx, strict))
    }

    /// The value is an int, a finite float or a numeric string. `strict`
    /// requires kind `Int` or `Float`.
    pub fn num(self, strict: bool) -> Self {
        self.apply("num", |ctx| is_num(ctx, strict))
    }

    /// Negation of [`num`](Self::num).
    pub fn not_num(self, strict: bool) -> Self {
        self.apply_negated("not_num", |ctx| is_num(ctx, strict))
    }

    /// The value is a number with a fractional part.
    pub fn dec(self, strict: bool) -> Self {
        self.apply("dec", |ctx| is_dec(ctx, strict))
    }

    /// Negation of [`dec`](Self::dec).
    pub fn not_dec(self, strict: bool) -> Self {
        self.apply_negated("not_dec", |ctx| is_dec(ctx, strict))
    }

    /// The value is a string.
    pub fn str(self) -> Self {
        self.apply("str", is_str)
    }

    /// Negation of [`str`](Self::str).
    pub fn not_str(self) -> Self {
        self.apply_negated("not_str", is_str)
    }

    /// The value is a list, or an object with an array-like capability.
    pub fn arr(self) -> Self {
        self.apply("arr", is_arr)
    }

    /// Negation of [`arr`](Self::arr).
    pub fn not_arr(self) -> Self {
        self.apply_negated("not_arr", is_arr)
    }

    /// The value is an object, and an instance of `class` when given
    /// (case-insensitive, ancestors included).
    pub fn obj(self, class: Option<&str>) -> Self {
        self.apply("obj", |ctx| is_obj(ctx, class))
    }

    /// Negation of [`obj`](Self::obj).
    pub fn not_obj(self, class: Option<&str>) -> Self {
        self.apply_negated("not_obj", |ctx| is_obj(ctx, class))
    }

    /// The value is a resource, of subtype `kind` when given
    /// (case-insensitive).
    pub fn res(self, kind: Option<&str>) -> Self {
        self.apply("res", |ctx| is_res(ctx, kind))
    }

    /// Negation of [`res`](Self::res).
    pub fn not_res(self, kind: Option<&str>) -> Self {
        self.apply_negated("not_res", |ctx| is_res(ctx, kind))
    }

    /// The value is empty: `false`, `0`, `0.0`, `""`, `"0"`, `Null` or an
    /// empty list.
    pub fn empty(self) -> Self {
        self.apply("empty", |ctx| ctx.data().is_empty())
    }

    /// Negation of [`empty`](Self::empty).
    pub fn not_empty(self) -> Self {
        self.apply_negated("not_empty", |ctx| ctx.data().is_empty())
    }
}
