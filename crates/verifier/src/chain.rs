//! The verification chain.
//!
//! A [`Verifier`] owns the value under test, its [`DataKind`] (classified
//! once, at construction) and the running AND of every rule applied so far.
//! Rule methods consume the chain and return it, so a chain reads as one
//! expression:
//!
//! ```
//! use nebula_verifier::is;
//!
//! let ok = is(3).int(true).is_in("(-2,3]").resolve();
//! assert!(ok);
//! ```
//!
//! # State machine
//!
//! ```text
//!            rule → true
//!          ┌───────────┐
//!          ▼           │
//!     ┌─────────┐ rule → false ┌────────┐
//!  ──▶│ Pending │─────────────▶│ Failed │──┐ any rule
//!     └─────────┘              └────────┘◀─┘ (no-op)
//! ```
//!
//! Once failed, a chain never recovers and further rules are not evaluated.
//! Argument checks are the exception: a malformed call returns a
//! [`UsageError`] whatever the state.

use std::fmt;
use std::sync::Arc;

use crate::config::VerifierConfig;
use crate::error::UsageError;
use crate::formats::Filter;
use crate::value::{DataKind, Value};

// ============================================================================
// CHAIN STATE
// ============================================================================

/// Where a chain stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainState {
    /// Every rule so far held.
    Pending,
    /// At least one rule failed.
    Failed,
}

impl fmt::Display for ChainState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "pending",
            Self::Failed => "failed",
        })
    }
}

// ============================================================================
// VERIFIER
// ============================================================================

/// A chain of rules over one value.
#[derive(Debug, Clone)]
#[must_use = "a chain does nothing until it is resolved"]
pub struct Verifier {
    data: Value,
    kind: DataKind,
    passed: bool,
    config: Arc<VerifierConfig>,
}

impl Verifier {
    /// Starts a chain with the shared default configuration.
    pub fn is(data: impl Into<Value>) -> Self {
        Self::with_config(data, VerifierConfig::shared_default())
    }

    /// Starts a chain with an explicit configuration.
    pub fn with_config(data: impl Into<Value>, config: Arc<VerifierConfig>) -> Self {
        let data = data.into();
        Self {
            kind: data.kind(),
            data,
            passed: true,
            config,
        }
    }

    /// Starts a chain holding the email format filter.
    pub fn is_email(data: impl Into<Value>) -> Self {
        Self::is(data).filter(Filter::Email)
    }

    /// Starts a chain holding the URL format filter.
    pub fn is_url(data: impl Into<Value>) -> Self {
        Self::is(data).filter(Filter::Url)
    }

    /// Starts a chain holding the IP address format filter.
    pub fn is_ip(data: impl Into<Value>) -> Self {
        Self::is(data).filter(Filter::Ip)
    }

    /// Starts a chain holding "strictly equal to `Null`".
    pub fn is_null(data: impl Into<Value>) -> Self {
        Self::is(data).eq(Value::Null, true)
    }

    /// Starts a chain holding "not strictly equal to `Null`".
    pub fn is_not_null(data: impl Into<Value>) -> Self {
        Self::is(data).not_eq(Value::Null, true)
    }

    /// Starts a chain holding the emptiness rule.
    pub fn is_empty(data: impl Into<Value>) -> Self {
        Self::is(data).empty()
    }

    /// Starts a chain holding the non-emptiness rule.
    pub fn is_not_empty(data: impl Into<Value>) -> Self {
        Self::is(data).not_empty()
    }

    // ------------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------------

    /// The value under test.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Kind of the value under test.
    pub fn kind(&self) -> DataKind {
        self.kind
    }

    /// Configuration shared by the rules of this chain.
    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> ChainState {
        if self.passed {
            ChainState::Pending
        } else {
            ChainState::Failed
        }
    }

    /// True while every rule has held.
    pub fn is_pending(&self) -> bool {
        self.passed
    }

    // ------------------------------------------------------------------------
    // Resolution
    // ------------------------------------------------------------------------

    /// Consumes the chain and returns its outcome.
    #[must_use]
    pub fn resolve(self) -> bool {
        tracing::trace!(kind = %self.kind, passed = self.passed, "chain resolved");
        self.passed
    }

    /// Returns `Some(on_true)` if every rule held.
    ///
    /// ```
    /// use nebula_verifier::is;
    ///
    /// assert_eq!(is("abcd").len("==", 4).unwrap().resolve_then("ok"), Some("ok"));
    /// assert_eq!(is(true).str().resolve_then("ok"), None);
    /// ```
    #[must_use]
    pub fn resolve_then<T>(self, on_true: T) -> Option<T> {
        self.resolve().then_some(on_true)
    }

    /// Returns `on_true` if every rule held, `on_false` otherwise.
    #[must_use]
    pub fn resolve_with<T>(self, on_true: T, on_false: T) -> T {
        if self.resolve() { on_true } else { on_false }
    }

    // ------------------------------------------------------------------------
    // Rule plumbing
    // ------------------------------------------------------------------------

    /// Folds `eval` into the chain unless it has already failed.
    pub(crate) fn apply(self, rule: &'static str, eval: impl FnOnce(&Self) -> bool) -> Self {
        if !self.passed {
            return self;
        }
        let outcome = eval(&self);
        self.record(rule, outcome)
    }

    /// Folds the negation of `eval`, evaluated on the same value.
    pub(crate) fn apply_negated(
        self,
        rule: &'static str,
        eval: impl FnOnce(&Self) -> bool,
    ) -> Self {
        self.apply(rule, |chain| !eval(chain))
    }

    /// Folds `eval` into the chain even if it has already failed.
    pub(crate) fn apply_always(self, rule: &'static str, eval: impl FnOnce(&Self) -> bool) -> Self {
        let outcome = eval(&self);
        self.record(rule, outcome)
    }

    fn record(mut self, rule: &'static str, outcome: bool) -> Self {
        if self.passed && !outcome {
            tracing::trace!(rule, kind = %self.kind, "rule failed, chain short-circuits");
        }
        self.passed &= outcome;
        self
    }
}

/// Logs a usage error on its way to the caller.
pub(crate) fn reject(err: UsageError) -> UsageError {
    tracing::debug!(rule = ?err.rule(), error = %err, "malformed rule call");
    err
}

// ============================================================================
// TESTS
// ============================================================================
