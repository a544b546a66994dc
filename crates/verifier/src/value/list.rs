//! Ordered, keyed lists and the array-like capability.

use std::fmt;

use indexmap::IndexMap;

use super::Value;

// ============================================================================
// KEY
// ============================================================================

/// A list key: an integer or a string.
///
/// String keys that spell a canonical decimal integer are stored as integers,
/// so `"3"` and `3` address the same slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    /// Converts a scalar value into a key.
    ///
    /// Bools map to `0` / `1`, floats are truncated toward zero and `Null`
    /// maps to the empty string. Lists, objects and resources cannot be keys.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(Self::Str(String::new())),
            Value::Bool(b) => Some(Self::Int(i64::from(*b))),
            Value::Int(i) => Some(Self::Int(*i)),
            Value::Float(f) if f.is_finite() => Some(Self::Int(f.trunc() as i64)),
            Value::String(s) => Some(Self::from(s.as_str())),
            Value::Float(_) | Value::List(_) | Value::Object(_) | Value::Resource(_) => None,
        }
    }

    /// The key as a value (`Int` or `String`).
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Int(i) => Value::Int(*i),
            Self::Str(s) => Value::String(s.clone()),
        }
    }
}

fn canonical_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let canonical = match digits.as_bytes() {
        [b'0'] => !s.starts_with('-'),
        [first, rest @ ..] => {
            (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit)
        }
        [] => false,
    };
    if canonical { s.parse().ok() } else { None }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        canonical_int(s).map_or_else(|| Self::Str(s.to_owned()), Self::Int)
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        canonical_int(&s).map_or(Self::Str(s), Self::Int)
    }
}

macro_rules! key_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Key {
            fn from(i: $t) -> Self {
                Self::Int(i64::from(i))
            }
        })*
    };
}

key_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

// ============================================================================
// ARRAY-LIKE CAPABILITY
// ============================================================================

/// Lookup by key.
pub trait KeyIndexed {
    /// The value stored under `key`, if any.
    fn get(&self, key: &Key) -> Option<&Value>;
}

/// Iteration over stored values, in order.
pub trait Iterable {
    /// Iterates the stored values.
    fn values(&self) -> Box<dyn Iterator<Item = &Value> + '_>;
}

/// Element count.
pub trait Countable {
    /// Number of stored elements.
    fn count(&self) -> usize;
}

/// Anything that is key-indexed, iterable and countable.
///
/// Objects carrying an `ArrayLike` capability satisfy the `arr()` rule even
/// though their kind is [`DataKind::Object`](super::DataKind::Object).
pub trait ArrayLike: KeyIndexed + Iterable + Countable + fmt::Debug + Send + Sync {}

impl<T> ArrayLike for T where T: KeyIndexed + Iterable + Countable + fmt::Debug + Send + Sync {}

// ============================================================================
// LIST
// ============================================================================

/// An insertion-ordered map from [`Key`] to [`Value`].
///
/// ```
/// use nebula_verifier::value::{Key, List};
///
/// let mut list = List::new();
/// list.push("zero");
/// list.insert("name", "nebula");
/// list.push("one");
/// assert_eq!(list.len(), 3);
/// assert!(list.contains_key(&Key::Int(1)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct List {
    entries: IndexMap<Key, Value>,
}

impl List {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value under the next free integer key.
    pub fn push(&mut self, value: impl Into<Value>) {
        let key = self.next_index();
        self.entries.insert(Key::Int(key), value.into());
    }

    /// Inserts (or replaces) a value under `key`.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    /// True when `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    /// Iterates values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    fn next_index(&self) -> i64 {
        self.entries
            .keys()
            .filter_map(|k| match k {
                Key::Int(i) => Some(*i),
                Key::Str(_) => None,
            })
            .max()
            .map_or(0, |max| max.saturating_add(1))
    }
}

impl KeyIndexed for List {
    fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }
}

impl Iterable for List {
    fn values(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
        Box::new(self.entries.values())
    }
}

impl Countable for List {
    fn count(&self) -> usize {
        self.entries.len()
    }
}

impl<V: Into<Value>> FromIterator<V> for List {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.push(value);
        }
        list
    }
}

impl<V: Into<Value>> Extend<V> for List {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
