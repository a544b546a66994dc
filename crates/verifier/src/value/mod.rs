//! The dynamic input model.
//!
//! A chain verifies one [`Value`]. Values are classified into a [`DataKind`]
//! once, when the chain is created, and every rule dispatches on that kind.
//!
//! - **Scalars**: `Null`, `Bool`, `Int`, `Float`, `String`
//! - **Collections**: [`List`] (ordered map keyed by [`Key`])
//! - **Structures**: [`Object`] (class + ancestors + attributes), [`Resource`]
//!
//! Objects and resources are reference-counted so that cloning a value keeps
//! instance identity, which strict equality relies on.

mod compare;
mod display;
mod json;
mod kind;
mod list;
mod numeric;
mod object;

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub use compare::{loose_eq, strict_eq};
pub use kind::DataKind;
pub use list::{ArrayLike, Countable, Iterable, Key, KeyIndexed, List};
pub use numeric::{Number, is_numeric, parse_numeric};
pub use object::{DATE_TIME_CLASS, DATE_TIME_INTERFACE, Object, Resource};

// ============================================================================
// VALUE
// ============================================================================

/// Any value a chain can verify.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(List),
    Object(Arc<Object>),
    Resource(Arc<Resource>),
}

impl Value {
    /// Classifies the value.
    #[must_use]
    pub fn kind(&self) -> DataKind {
        match self {
            Self::Null => DataKind::Null,
            Self::Bool(_) => DataKind::Bool,
            Self::Int(_) => DataKind::Int,
            Self::Float(_) => DataKind::Float,
            Self::String(_) => DataKind::String,
            Self::List(_) => DataKind::List,
            Self::Object(_) => DataKind::Object,
            Self::Resource(_) => DataKind::Resource,
        }
    }

    /// Truthiness: `false`, `0`, `0.0`, `""`, `"0"`, `Null` and the empty list
    /// are falsy; everything else is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::String(s) => !(s.is_empty() || s == "0"),
            Self::List(list) => !list.is_empty(),
            Self::Object(_) | Self::Resource(_) => true,
        }
    }

    /// The negation of [`is_truthy`](Self::is_truthy).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.is_truthy()
    }

    /// The value as a number: ints, floats and numeric strings.
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Int(i) => Some(Number::Int(*i)),
            Self::Float(f) => Some(Number::Float(*f)),
            Self::String(s) => parse_numeric(s),
            _ => None,
        }
    }

    /// String slice, for `String` values.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// List reference, for `List` values.
    #[must_use]
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// Object reference, for `Object` values.
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// True for `Null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Strict (same kind, same value, same instance) equality.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        strict_eq(self, other)
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! value_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(i: $t) -> Self {
                Self::Int(i64::from(i))
            }
        })*
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Self::Float(f64::from(f))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::String(s.clone())
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Self::String(c.to_string())
    }
}

impl From<List> for Value {
    fn from(list: List) -> Self {
        Self::List(list)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Self::Object(Arc::new(obj))
    }
}

impl From<Arc<Object>> for Value {
    fn from(obj: Arc<Object>) -> Self {
        Self::Object(obj)
    }
}

impl From<Resource> for Value {
    fn from(res: Resource) -> Self {
        Self::Resource(Arc::new(res))
    }
}

impl From<Arc<Resource>> for Value {
    fn from(res: Arc<Resource>) -> Self {
        Self::Resource(res)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().collect())
    }
}

impl<T: Into<Self> + Clone> From<&[T]> for Value {
    fn from(values: &[T]) -> Self {
        Self::List(values.iter().cloned().collect())
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(instant: DateTime<Tz>) -> Self {
        Object::date_time(instant.fixed_offset()).into()
    }
}

impl From<NaiveDateTime> for Value {
    fn from(instant: NaiveDateTime) -> Self {
        Utc.from_utc_datetime(&instant).into()
    }
}

impl From<NaiveDate> for Value {
    fn from(date: NaiveDate) -> Self {
        date.and_time(chrono::NaiveTime::MIN).into()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Value::Null, DataKind::Null)]
    #[case(Value::from(true), DataKind::Bool)]
    #[case(Value::from(-0xff), DataKind::Int)]
    #[case(Value::from(1.0), DataKind::Float)]
    #[case(Value::from("1"), DataKind::String)]
    #[case(Value::from(vec![1, 2]), DataKind::List)]
    #[case(Value::from(Object::new("stdClass")), DataKind::Object)]
    #[case(Value::from(Resource::new("stream")), DataKind::Resource)]
    #[case(Value::from(None::<i32>), DataKind::Null)]
    fn classifies(#[case] value: Value, #[case] kind: DataKind) {
        assert_eq!(value.kind(), kind);
    }

    #[rstest]
    #[case(Value::from(""))]
    #[case(Value::from(0))]
    #[case(Value::from(0.0))]
    #[case(Value::from("0"))]
    #[case(Value::Null)]
    #[case(Value::from(false))]
    #[case(Value::from(List::new()))]
    fn empty_values(#[case] value: Value) {
        assert!(value.is_empty());
    }

    #[rstest]
    #[case(Value::from("0.0"))]
    #[case(Value::from(" "))]
    #[case(Value::from(-1))]
    #[case(Value::from(vec![0]))]
    #[case(Value::from(Object::new("stdClass")))]
    fn non_empty_values(#[case] value: Value) {
        assert!(value.is_truthy());
    }

    #[test]
    fn chrono_instants_become_date_time_objects() {
        let date = NaiveDate::from_ymd_opt(1977, 11, 6).unwrap();
        let value = Value::from(date);
        let obj = value.as_object().unwrap();
        assert!(obj.instance_of(DATE_TIME_CLASS));
        assert_eq!(
            obj.as_date_time().map(|dt| dt.date_naive()),
            Some(date)
        );
    }

    #[test]
    fn numbers_from_values() {
        assert_eq!(Value::from("32").as_number(), Some(Number::Int(32)));
        assert_eq!(Value::from(true).as_number(), None);
        assert_eq!(Value::from("0xff").as_number(), None);
    }
}
