//! Data kinds: the coarse classification every rule dispatches on.
//!
//! ```rust
//! use nebula_verifier::{DataKind, Value};
//!
//! let v = Value::from(3.14);
//! assert_eq!(v.kind(), DataKind::Float);
//! assert!(DataKind::Float.is_numeric());
//! assert_eq!(DataKind::Float.code(), 'f');
//! assert_eq!(DataKind::from_code('i'), Some(DataKind::Int));
//! ```

use core::fmt::{Display, Formatter};

/// Semantic kind of a [`Value`](crate::Value), derived once when a chain is created.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataKind {
    Bool,
    Int,
    Float,
    String,
    List,
    Object,
    Resource,
    Null,
}

impl DataKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Bool,
        Self::Int,
        Self::Float,
        Self::String,
        Self::List,
        Self::Object,
        Self::Resource,
        Self::Null,
    ];

    /// Check if this kind is numeric
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }

    /// Check if this kind is scalar (bool, number or string)
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Bool | Self::Int | Self::Float | Self::String)
    }

    /// Parse from a type name
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bool" | "boolean" => Some(Self::Bool),
            "int" | "integer" => Some(Self::Int),
            "float" | "double" => Some(Self::Float),
            "string" | "str" => Some(Self::String),
            "list" | "array" => Some(Self::List),
            "object" => Some(Self::Object),
            "resource" => Some(Self::Resource),
            "null" => Some(Self::Null),
            _ => None,
        }
    }

    /// Get a descriptive name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::List => "list",
            Self::Object => "object",
            Self::Resource => "resource",
            Self::Null => "null",
        }
    }

    /// Get a short type code
    pub const fn code(&self) -> char {
        match self {
            Self::Bool => 'b',
            Self::Int => 'i',
            Self::Float => 'f',
            Self::String => 's',
            Self::List => 'a',
            Self::Object => 'o',
            Self::Resource => 'r',
            Self::Null => 'n',
        }
    }

    /// Parse from type code
    pub fn from_code(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == c)
    }
}

impl Display for DataKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for kind in DataKind::ALL {
            assert_eq!(DataKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(DataKind::from_code('z'), None);
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!(DataKind::from_name("Integer"), Some(DataKind::Int));
        assert_eq!(DataKind::from_name("ARRAY"), Some(DataKind::List));
        assert_eq!(DataKind::from_name("decimal"), None);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&DataKind::Resource).unwrap();
        assert_eq!(json, "\"resource\"");
    }
}
