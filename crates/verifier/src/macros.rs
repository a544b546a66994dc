//! Construction macros for [`List`](crate::value::List).

/// Builds a [`List`](crate::value::List).
///
/// Bare values get sequential integer keys; `key => value` pairs set keys
/// explicitly. Numeric string keys are normalised, so `"3"` and `3` name the
/// same slot.
///
/// ```
/// use nebula_verifier::{Value, list};
/// use nebula_verifier::value::Key;
///
/// let positional = list![1, "two", 3.0];
/// assert_eq!(positional.get(&Key::Int(1)), Some(&Value::from("two")));
///
/// let keyed = list! { "one" => "uno", "3" => "tres" };
/// assert_eq!(keyed.get(&Key::Int(3)), Some(&Value::from("tres")));
/// assert_eq!(list![].len(), 0);
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::value::List::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::value::List::new()$(.with($key, $value))+
    };
    ($($value:expr),+ $(,)?) => {
        $crate::value::List::from_iter([$($crate::Value::from($value)),+])
    };
}
