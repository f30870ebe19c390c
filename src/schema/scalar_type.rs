use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Closed set of scalar value types a column, parameter or result field can
/// carry.
///
/// Integral and floating-point numbers are distinct types: there is no
/// implicit widening between them anywhere in the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarType {
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point
    Float,
    /// UTF-8 text
    Text,
    /// Boolean
    Bool,
}

static TYPE_KEYWORDS: Lazy<HashMap<&'static str, ScalarType>> = Lazy::new(|| {
    HashMap::from([
        ("int", ScalarType::Int),
        ("integer", ScalarType::Int),
        ("double", ScalarType::Float),
        ("float", ScalarType::Float),
        ("real", ScalarType::Float),
        ("string", ScalarType::Text),
        ("text", ScalarType::Text),
        ("bool", ScalarType::Bool),
        ("boolean", ScalarType::Bool),
    ])
});

impl ScalarType {
    /// Map an annotation type keyword (case-insensitive) to a scalar type.
    pub fn from_keyword(word: &str) -> Option<ScalarType> {
        TYPE_KEYWORDS.get(word.to_ascii_lowercase().as_str()).copied()
    }

    /// Classify a runtime value into the scalar set.
    ///
    /// `Null`, arrays and objects have no scalar classification and return
    /// `None`. Integral JSON numbers classify as `Int`, everything else
    /// numeric as `Float`.
    pub fn of_value(value: &Value) -> Option<ScalarType> {
        match value {
            Value::Bool(_) => Some(ScalarType::Bool),
            Value::Number(n) if n.is_i64() || n.is_u64() => Some(ScalarType::Int),
            Value::Number(_) => Some(ScalarType::Float),
            Value::String(_) => Some(ScalarType::Text),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarType::Int => write!(f, "int"),
            ScalarType::Float => write!(f, "double"),
            ScalarType::Text => write!(f, "string"),
            ScalarType::Bool => write!(f, "bool"),
        }
    }
}
