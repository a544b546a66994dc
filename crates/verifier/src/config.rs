//! Verifier configuration.
//!
//! Most callers never touch this: [`is`](crate::is) uses
//! [`VerifierConfig::default`]. Override it per chain with
//! [`Verifier::with_config`](crate::Verifier::with_config).
//!
//! ```
//! use std::sync::Arc;
//!
//! use chrono::NaiveDate;
//! use nebula_verifier::{LengthUnit, Verifier, VerifierConfig};
//!
//! let config = Arc::new(
//!     VerifierConfig::new()
//!         .with_length_unit(LengthUnit::Bytes)
//!         .with_reference_date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()),
//! );
//!
//! let ok = Verifier::with_config("Jiménez", config).len("==", 8).unwrap();
//! assert!(ok.resolve());
//! ```

use std::sync::{Arc, LazyLock};

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

static DEFAULT_CONFIG: LazyLock<Arc<VerifierConfig>> =
    LazyLock::new(|| Arc::new(VerifierConfig::default()));

/// How `len` measures strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    /// Unicode scalar values.
    #[default]
    Chars,
    /// UTF-8 bytes.
    Bytes,
}

impl LengthUnit {
    /// Length of `s` in this unit.
    #[must_use]
    pub fn measure(self, s: &str) -> usize {
        match self {
            Self::Chars => s.chars().count(),
            Self::Bytes => s.len(),
        }
    }
}

/// Settings shared by every rule of a chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Unit used by `len` on strings and stringified numbers.
    pub length_unit: LengthUnit,

    /// "Today" for date defaults and relative keywords. `None` means the
    /// current UTC date.
    pub reference_date: Option<NaiveDate>,

    /// Extra strftime layouts accepted by free-form `date()`.
    pub date_layouts: Vec<String>,
}

impl VerifierConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared default configuration.
    #[must_use]
    pub fn shared_default() -> Arc<Self> {
        Arc::clone(&DEFAULT_CONFIG)
    }

    /// Sets the string length unit.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_length_unit(mut self, unit: LengthUnit) -> Self {
        self.length_unit = unit;
        self
    }

    /// Pins "today".
    #[must_use = "builder methods must be chained or built"]
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Adds a free-form date layout.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_date_layout(mut self, layout: impl Into<String>) -> Self {
        self.date_layouts.push(layout.into());
        self
    }

    /// The effective "today".
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Utc::now().date_naive())
    }
}
