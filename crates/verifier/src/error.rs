//! Usage errors raised by malformed rule calls.
//!
//! A usage error is a programming mistake at the call site (a non-integer
//! length bound, a rule called without its mandatory argument, a pattern that
//! does not compile). It is never a validation outcome: a value of the wrong
//! kind simply makes the rule evaluate to `false`.
//!
//! Argument checks run before the chain state is consulted, so a malformed
//! call fails even on a chain that has already failed.

use crate::value::DataKind;

// ============================================================================
// USAGE ERROR
// ============================================================================

/// A malformed rule call.
///
/// Every variant carries the name of the rule that rejected its arguments.
///
/// # Examples
///
/// ```
/// use nebula_verifier::{UsageError, is};
///
/// let err = is("abc").len("<=", 3.14).unwrap_err();
/// assert!(matches!(err, UsageError::NonIntegerLength { rule: "len", .. }));
/// ```
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum UsageError {
    /// `len` / `not_len` received a bound that is not an integer.
    #[error("{rule}() invalid parameter: length bound must be an integer, got {found}")]
    NonIntegerLength {
        /// Rule that raised the error.
        rule: &'static str,
        /// Kind of the rejected bound.
        found: DataKind,
    },

    /// `ineq` / `not_ineq` received a bound that is not numeric.
    #[error("{rule}() invalid parameter: bound must be a numeric value, got {found}")]
    NonNumericBound {
        /// Rule that raised the error.
        rule: &'static str,
        /// Kind of the rejected bound.
        found: DataKind,
    },

    /// A rule that needs at least one argument was called with none.
    #[error("{rule}() invalid number of parameters: at least 1 parameter is required")]
    MissingArguments {
        /// Rule that raised the error.
        rule: &'static str,
    },

    /// `regex` / `not_regex` received a pattern that does not compile.
    #[error("{rule}() invalid parameter: pattern `{pattern}` does not compile")]
    InvalidPattern {
        /// Rule that raised the error.
        rule: &'static str,
        /// The rejected pattern.
        pattern: String,
        /// Compiler diagnostic.
        #[source]
        source: regex::Error,
    },

    /// `date` / `not_date` received a format with an unknown or malformed token.
    #[error("{rule}() invalid parameter: `{format}` is not a valid date format")]
    InvalidDateFormat {
        /// Rule that raised the error.
        rule: &'static str,
        /// The rejected format.
        format: String,
    },

    /// A format filter was requested by a name no validator is registered for.
    #[error("unknown filter `{name}`")]
    UnknownFilter {
        /// The rejected name.
        name: String,
    },
}

impl UsageError {
    /// Name of the rule that raised this error, if the error is tied to one.
    #[must_use]
    pub fn rule(&self) -> Option<&'static str> {
        match self {
            Self::NonIntegerLength { rule, .. }
            | Self::NonNumericBound { rule, .. }
            | Self::MissingArguments { rule }
            | Self::InvalidPattern { rule, .. }
            | Self::InvalidDateFormat { rule, .. } => Some(*rule),
            Self::UnknownFilter { .. } => None,
        }
    }
}

/// Result alias for rule calls that validate their arguments.
pub type UsageResult<T> = Result<T, UsageError>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_rule() {
        let err = UsageError::NonIntegerLength {
            rule: "not_len",
            found: DataKind::Float,
        };
        insta::assert_snapshot!(
            err.to_string(),
            @"not_len() invalid parameter: length bound must be an integer, got float"
        );

        let err = UsageError::MissingArguments { rule: "attr" };
        insta::assert_snapshot!(
            err.to_string(),
            @"attr() invalid number of parameters: at least 1 parameter is required"
        );
    }

    #[test]
    fn pattern_error_keeps_its_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = UsageError::InvalidPattern {
            rule: "regex",
            pattern: "(".to_owned(),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.rule(), Some("regex"));
    }

    #[test]
    fn unknown_filter_has_no_rule() {
        let err = UsageError::UnknownFilter {
            name: "isbn".to_owned(),
        };
        assert_eq!(err.rule(), None);
        assert_eq!(err.to_string(), "unknown filter `isbn`");
    }
}
