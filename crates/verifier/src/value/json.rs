//! Conversion from `serde_json::Value`, so decoded JSON payloads can be
//! verified directly.
//!
//! JSON arrays become positional lists and JSON objects become keyed lists
//! (numeric member names normalise to integer keys, as with any [`Key`]).
//!
//! ```
//! use nebula_verifier::{DataKind, Value};
//! use serde_json::json;
//!
//! let v = Value::from(json!({"one": "uno", "3": "tres"}));
//! assert_eq!(v.kind(), DataKind::List);
//! ```

use super::{Key, List, Value};

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or(Self::Null),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => Self::List(items.into_iter().collect()),
            serde_json::Value::Object(members) => {
                let mut list = List::new();
                for (name, member) in members {
                    list.insert(Key::from(name), Self::from(member));
                }
                Self::List(list)
            }
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        Self::from(json.clone())
    }
}
