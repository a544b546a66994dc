//! Rule methods on [`Verifier`](crate::Verifier).
//!
//! Every rule `r` has a negated twin `not_r` evaluated on the same value, so
//! `not_r` fails exactly where `r` holds. Rules are grouped by concern:
//!
//! - [`types`]: kind checks and emptiness
//! - [`compare`]: length, equality and numeric inequality
//! - [`membership`]: intervals, `contain`, `contain_any`, `without`
//! - [`structure`]: list values, list keys, object attributes
//! - [`date`]: free-form and formatted dates
//! - [`format`]: named filters and regular expressions

pub mod compare;
pub mod date;
pub mod format;
pub mod membership;
pub mod structure;
pub mod types;

pub use compare::Operator;
pub use membership::{Endpoint, Interval};
