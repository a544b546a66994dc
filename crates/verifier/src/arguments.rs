//! Canonical argument sequences for variadic rules.
//!
//! Rules such as `is_in`, `contain` and `key` accept three call shapes:
//!
//! - a single scalar: `contain("uno")`
//! - a single list, whose values are spread: `contain(vec!["uno", "tres"])`
//! - several values: `contain(args!["uno", 2])`
//!
//! [`Args`] normalises all three into one ordered sequence of values and
//! remembers which shape was used, so no rule re-implements the
//! disambiguation.

use smallvec::SmallVec;

use crate::value::{List, Object, Resource, Value};

/// How the arguments were supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgShape {
    /// Exactly one non-list value.
    Single,
    /// Exactly one list, spread into its values.
    Spread,
    /// Zero or several values.
    Variadic,
}

/// An ordered sequence of rule arguments.
#[derive(Debug, Clone)]
pub struct Args {
    values: SmallVec<[Value; 4]>,
    shape: ArgShape,
}

impl Args {
    /// Normalises a variadic call.
    ///
    /// A call with exactly one argument is indistinguishable from the
    /// single-argument form and is normalised the same way.
    pub fn variadic<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut values: SmallVec<[Value; 4]> = values.into_iter().map(Into::into).collect();
        if values.len() == 1
            && let Some(only) = values.pop()
        {
            return Self::single(only);
        }
        Self {
            values,
            shape: ArgShape::Variadic,
        }
    }

    /// Normalises a single-argument call.
    pub fn single(value: impl Into<Value>) -> Self {
        match value.into() {
            Value::List(list) => Self {
                values: list.values().cloned().collect(),
                shape: ArgShape::Spread,
            },
            other => Self {
                values: smallvec::smallvec![other],
                shape: ArgShape::Single,
            },
        }
    }

    /// No arguments at all.
    #[must_use]
    pub fn none() -> Self {
        Self {
            values: SmallVec::new(),
            shape: ArgShape::Variadic,
        }
    }

    /// Call shape.
    #[must_use]
    pub fn shape(&self) -> ArgShape {
        self.shape
    }

    /// All argument values, in order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// The only argument, when the call used the single-scalar shape.
    #[must_use]
    pub fn single_value(&self) -> Option<&Value> {
        match self.shape {
            ArgShape::Single => self.values.first(),
            ArgShape::Spread | ArgShape::Variadic => None,
        }
    }

    /// First argument and the remaining ones.
    #[must_use]
    pub fn split_first(&self) -> Option<(&Value, &[Value])> {
        self.values.split_first()
    }

    /// Number of argument values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no argument values were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

macro_rules! args_from_single {
    ($($t:ty),* $(,)?) => {
        $(impl From<$t> for Args {
            fn from(value: $t) -> Self {
                Self::single(value)
            }
        })*
    };
}

args_from_single!(
    Value, bool, i8, i16, i32, i64, u8, u16, u32, f32, f64, char, &str, String, &String, List,
    Object, Resource,
);

impl<T: Into<Value>> From<Vec<T>> for Args {
    fn from(values: Vec<T>) -> Self {
        Self::single(values)
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Args {
    fn from(values: &[T]) -> Self {
        Self::single(values)
    }
}

/// Builds a variadic [`Args`] from heterogeneous values.
///
/// ```
/// use nebula_verifier::{args, is};
///
/// assert!(is(8).is_in(args![2, 4, 6, 8]).resolve());
/// assert!(is("My name is Emi").contain(args!["name", "Emi"]).resolve());
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::none()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Args::variadic([$($crate::Value::from($value)),+])
    };
}
