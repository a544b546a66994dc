//! Objects with a nominal class hierarchy, and opaque resources.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;

use super::{ArrayLike, Value};

/// Class name given to date/time objects.
pub const DATE_TIME_CLASS: &str = "DateTime";

/// Interface implemented by date/time objects.
pub const DATE_TIME_INTERFACE: &str = "DateTimeInterface";

// ============================================================================
// OBJECT
// ============================================================================

/// A structured value: a named class, its ancestors, and attributes.
///
/// Class names match case-insensitively, as nominal types usually do in
/// dynamic payloads.
///
/// ```
/// use nebula_verifier::value::Object;
///
/// let user = Object::new("Admin")
///     .extends("User")
///     .with_attr("name", "ada")
///     .with_attr("level", 3);
///
/// assert!(user.instance_of("user"));
/// assert!(user.has_attr("level"));
/// ```
#[derive(Clone, Default)]
pub struct Object {
    class: String,
    ancestors: Vec<String>,
    attributes: IndexMap<String, Value>,
    date_time: Option<DateTime<FixedOffset>>,
    array: Option<Arc<dyn ArrayLike>>,
}

impl Object {
    /// Creates an object of class `class` with no attributes.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            ..Self::default()
        }
    }

    /// Creates a date/time object holding `instant`.
    #[must_use]
    pub fn date_time(instant: DateTime<FixedOffset>) -> Self {
        Self {
            class: DATE_TIME_CLASS.to_owned(),
            ancestors: vec![DATE_TIME_INTERFACE.to_owned()],
            date_time: Some(instant),
            ..Self::default()
        }
    }

    /// Adds a parent class or interface.
    #[must_use = "builder methods must be chained or built"]
    pub fn extends(mut self, ancestor: impl Into<String>) -> Self {
        self.ancestors.push(ancestor.into());
        self
    }

    /// Sets an attribute.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Attaches an array-like capability (indexable, iterable, countable).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_array_access(mut self, array: impl ArrayLike + 'static) -> Self {
        self.array = Some(Arc::new(array));
        self
    }

    /// Class name.
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    /// True when the object's class, or any ancestor, is `class`.
    #[must_use]
    pub fn instance_of(&self, class: &str) -> bool {
        std::iter::once(&self.class)
            .chain(&self.ancestors)
            .any(|name| name.eq_ignore_ascii_case(class))
    }

    /// Attribute value.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// True when the attribute is set (even to `Null`).
    #[must_use]
    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Iterates `(name, value)` attribute pairs in insertion order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The instant held by a date/time object.
    #[must_use]
    pub fn as_date_time(&self) -> Option<&DateTime<FixedOffset>> {
        self.date_time.as_ref()
    }

    /// The array-like capability, if attached.
    #[must_use]
    pub fn as_array_like(&self) -> Option<&dyn ArrayLike> {
        self.array.as_deref()
    }

    pub(crate) fn loosely_equals(&self, other: &Self) -> bool {
        if !self.class.eq_ignore_ascii_case(&other.class) {
            return false;
        }
        if let (Some(a), Some(b)) = (&self.date_time, &other.date_time) {
            return a == b;
        }
        self.attributes.len() == other.attributes.len()
            && self.attributes.iter().all(|(name, value)| {
                other
                    .attributes
                    .get(name)
                    .is_some_and(|theirs| super::loose_eq(value, theirs))
            })
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Object");
        s.field("class", &self.class);
        if !self.ancestors.is_empty() {
            s.field("ancestors", &self.ancestors);
        }
        s.field("attributes", &self.attributes);
        if let Some(instant) = &self.date_time {
            s.field("date_time", instant);
        }
        if self.array.is_some() {
            s.field("array_access", &true);
        }
        s.finish()
    }
}

// ============================================================================
// RESOURCE
// ============================================================================

/// An opaque handle to an external resource (a stream, a connection, ...).
///
/// Only the declared subtype is observable; two resources are the same only
/// when they are the same instance.
#[derive(Debug)]
pub struct Resource {
    kind: String,
}

impl Resource {
    /// Creates a resource of subtype `kind`.
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }

    /// Declared subtype.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn instance_of_walks_ancestors() {
        let obj = Object::new("Admin").extends("User").extends("Serializable");
        assert!(obj.instance_of("admin"));
        assert!(obj.instance_of("User"));
        assert!(obj.instance_of("SERIALIZABLE"));
        assert!(!obj.instance_of("Guest"));
    }

    #[test]
    fn date_time_objects_implement_interface() {
        let instant = FixedOffset::east_opt(0)
            .and_then(|tz| tz.with_ymd_and_hms(1977, 11, 6, 0, 0, 0).single())
            .unwrap();
        let obj = Object::date_time(instant);
        assert!(obj.instance_of(DATE_TIME_CLASS));
        assert!(obj.instance_of(DATE_TIME_INTERFACE));
        assert_eq!(obj.as_date_time(), Some(&instant));
    }

    #[test]
    fn loose_equality_compares_attributes() {
        let a = Object::new("Point").with_attr("x", 1).with_attr("y", "2");
        let b = Object::new("point").with_attr("y", 2).with_attr("x", true);
        let c = Object::new("Point").with_attr("x", 1);
        assert!(a.loosely_equals(&b));
        assert!(!a.loosely_equals(&c));
    }
}
