//! # nebula-verifier
//!
//! Fluent, chainable verification of dynamically typed values for Nebula
//! workflow inputs.
//!
//! ## Quick Start
//!
//! ```
//! use nebula_verifier::{args, is};
//!
//! // Every rule folds into one boolean; the first failure is sticky.
//! assert!(is(3).int(true).is_in("(-2,3]").resolve());
//! assert!(is("My name is Emi").str().contain(args!["name", "Emi"]).resolve());
//! assert!(!is("abc").int(false).str().resolve());
//!
//! // Malformed calls are usage errors, not validation outcomes.
//! assert!(is("abc").len("<=", 3.14).is_err());
//! ```
//!
//! ## Model
//!
//! - [`Value`] is the dynamic input: scalars, keyed [`List`]s, [`Object`]s
//!   with a class hierarchy, and opaque [`Resource`]s. JSON converts into it.
//! - [`Verifier`] owns one value and the running AND of the rules applied to
//!   it. Rules consume the chain and return it; [`Verifier::resolve`] ends it.
//! - Every rule has a `not_` twin evaluated on the same value.
//! - Rules with malformed arguments return [`UsageError`] whatever the chain
//!   state.
//!
//! ## Rules
//!
//! - **Kinds**: `boo`, `int`, `num`, `dec`, `str`, `arr`, `obj`, `res`, `empty`
//! - **Comparison**: `len`, `eq`, `ineq`
//! - **Membership**: `is_in`, `out`, `contain`, `contain_any`, `without`
//! - **Structure**: `value`, `key`, `attr`
//! - **Formats**: `date`, `regex`, `filter`
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events only: `trace` when a chain fails or
//! resolves, `debug` when a call is rejected. Install a subscriber to see
//! them.

mod arguments;
mod chain;
mod config;
mod error;
pub mod formats;
mod macros;
pub mod prelude;
pub mod rules;
pub mod value;

pub use arguments::{ArgShape, Args};
pub use chain::{ChainState, Verifier};
pub use config::{LengthUnit, VerifierConfig};
pub use error::{UsageError, UsageResult};
pub use formats::Filter;
pub use value::{DataKind, Key, List, Object, Resource, Value};

/// Starts a chain over `data`. Shorthand for [`Verifier::is`].
pub fn is(data: impl Into<Value>) -> Verifier {
    Verifier::is(data)
}

/// Starts a chain holding the email filter.
pub fn is_email(data: impl Into<Value>) -> Verifier {
    Verifier::is_email(data)
}

/// Starts a chain holding the URL filter.
pub fn is_url(data: impl Into<Value>) -> Verifier {
    Verifier::is_url(data)
}

/// Starts a chain holding the IP address filter.
pub fn is_ip(data: impl Into<Value>) -> Verifier {
    Verifier::is_ip(data)
}

/// Starts a chain holding "strictly `Null`".
pub fn is_null(data: impl Into<Value>) -> Verifier {
    Verifier::is_null(data)
}

/// Starts a chain holding "not strictly `Null`".
pub fn is_not_null(data: impl Into<Value>) -> Verifier {
    Verifier::is_not_null(data)
}

/// Starts a chain holding the emptiness rule.
pub fn is_empty(data: impl Into<Value>) -> Verifier {
    Verifier::is_empty(data)
}

/// Starts a chain holding the non-emptiness rule.
pub fn is_not_empty(data: impl Into<Value>) -> Verifier {
    Verifier::is_not_empty(data)
}
