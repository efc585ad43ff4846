use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// Value
///
/// Scalar attribute value. `Display` is the canonical rendering used in
/// index-key derivation and as a set member, so it must stay stable.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Text(String),
    Uint(u64),
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Uint(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

///
/// AttributeValue
///
/// Scalar or multi-valued attribute payload. The declared shape lives on the
/// attribute model; this is the runtime value an entity currently holds.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum AttributeValue {
    Scalar(Value),
    Many(Vec<Value>),
}

impl From<Value> for AttributeValue {
    fn from(v: Value) -> Self {
        Self::Scalar(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        Self::Scalar(v.into())
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        Self::Scalar(v.into())
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        Self::Scalar(v.into())
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        Self::Scalar(v.into())
    }
}

impl From<u64> for AttributeValue {
    fn from(v: u64) -> Self {
        Self::Scalar(v.into())
    }
}

impl From<Vec<Value>> for AttributeValue {
    fn from(values: Vec<Value>) -> Self {
        Self::Many(values)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_display_is_stable() {
        assert_eq!(Value::Text("abc".into()).to_string(), "abc");
        assert_eq!(Value::Int(-7).to_string(), "-7");
        assert_eq!(Value::Uint(7).to_string(), "7");
        assert_eq!(Value::Bool(true).to_string(), "true");
    }

    #[test]
    fn scalar_conversions() {
        assert_eq!(AttributeValue::from("x"), AttributeValue::Scalar(Value::Text("x".into())));
        assert_eq!(AttributeValue::from(3u64), AttributeValue::Scalar(Value::Uint(3)));
    }
}
