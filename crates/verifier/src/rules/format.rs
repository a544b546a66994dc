//! Format rules: named filters and regular expressions.

use regex::Regex;

use crate::chain::{Verifier, reject};
use crate::error::{UsageError, UsageResult};
use crate::formats::Filter;
use crate::value::Value;

fn compile(rule: &'static str, pattern: &str) -> UsageResult<Regex> {
    Regex::new(pattern).map_err(|source| {
        reject(UsageError::InvalidPattern {
            rule,
            pattern: pattern.to_owned(),
            source,
        })
    })
}

fn matches_pattern(ctx: &Verifier, regex: &Regex) -> bool {
    match ctx.data() {
        Value::String(s) => regex.is_match(s),
        _ => false,
    }
}

impl Verifier {
    /// The value passes a format filter.
    ///
    /// A filter is evaluated whatever the chain state, but a failed chain
    /// stays failed.
    ///
    /// ```
    /// use nebula_verifier::{Filter, is};
    ///
    /// assert!(is("user@example.com").filter(Filter::Email).resolve());
    /// assert!(!is("user@").filter(Filter::Email).resolve());
    /// assert!(is("10.0.0.1").filter(Filter::Ipv4).resolve());
    /// ```
    pub fn filter(self, filter: Filter) -> Self {
        self.apply_always("filter", |ctx| filter.accepts_value(ctx.data()))
    }

    /// Negation of [`filter`](Self::filter), evaluated the same way.
    pub fn not_filter(self, filter: Filter) -> Self {
        self.apply_always("not_filter", |ctx| !filter.accepts_value(ctx.data()))
    }

    /// [`filter`](Self::filter) by name (`email`, `url`, `ip`, `ipv4`,
    /// `ipv6`, case-insensitive).
    pub fn filter_named(self, name: &str) -> UsageResult<Self> {
        let filter = name.parse::<Filter>().map_err(reject)?;
        Ok(self.filter(filter))
    }

    /// The value is a string matched by `pattern`.
    ///
    /// The pattern uses the `regex` crate syntax and matches anywhere in the
    /// string unless anchored. Inline flags such as `(?i)` replace trailing
    /// modifiers.
    ///
    /// ```
    /// use nebula_verifier::is;
    ///
    /// assert!(is("abc123").regex(r"^[a-z]+\d+$")?.resolve());
    /// assert!(is("ABC").regex("(?i)^abc$")?.resolve());
    /// assert!(!is(123).regex(r"\d+")?.resolve());
    /// assert!(is("abc").regex("(").is_err());
    /// # Ok::<(), nebula_verifier::UsageError>(())
    /// ```
    pub fn regex(self, pattern: &str) -> UsageResult<Self> {
        let regex = compile("regex", pattern)?;
        Ok(self.apply("regex", |ctx| matches_pattern(ctx, &regex)))
    }

    /// Negation of [`regex`](Self::regex).
    pub fn not_regex(self, pattern: &str) -> UsageResult<Self> {
        let regex = compile("not_regex", pattern)?;
        Ok(self.apply_negated("not_regex", |ctx| matches_pattern(ctx, &regex)))
    }
}
