//! Prelude module for convenient imports.
//!
//! ```
//! use nebula_verifier::prelude::*;
//!
//! let ok = is(list![1, 2, 3]).arr().contain(args![1, 3]).resolve();
//! assert!(ok);
//! ```

// ============================================================================
// ENTRY POINTS
// ============================================================================

pub use crate::{
    is, is_email, is_empty, is_ip, is_not_empty, is_not_null, is_null, is_url,
};
pub use crate::{args, list};

// ============================================================================
// TYPES
// ============================================================================

pub use crate::{
    ArgShape, Args, ChainState, DataKind, Filter, Key, LengthUnit, List, Object, Resource,
    UsageError, UsageResult, Value, Verifier, VerifierConfig,
};
pub use crate::rules::{Interval, Operator};
