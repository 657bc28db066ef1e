//! Primitive enum values and the strict-equality semantics shared by every
//! guard in this crate.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A primitive value of an enum-like mapping: text or a number.
///
/// Equality is strict, never coercive: text only equals identical text, and
/// numbers compare numerically within a single numeric domain, so a declared
/// `Int(1)` equals a candidate `1.0` (and vice versa), but never the text
/// `"1"`. NaN equals nothing, including itself.
///
/// Serde is untagged, so a `VariantValue` round-trips as a plain JSON string
/// or number.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariantValue {
    /// A text constant. `Cow` lets static declarations avoid allocation.
    Text(Cow<'static, str>),
    /// An integer constant.
    Int(i64),
    /// A floating-point constant.
    Float(f64),
}

impl VariantValue {
    /// The text content, if this is a `Text` value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            VariantValue::Text(s) => Some(s),
            VariantValue::Int(_) | VariantValue::Float(_) => None,
        }
    }

    /// The integer content, if this is an `Int` value.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            VariantValue::Int(i) => Some(*i),
            VariantValue::Text(_) | VariantValue::Float(_) => None,
        }
    }

    /// The numeric content of either numeric form.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            VariantValue::Int(i) => Some(*i as f64),
            VariantValue::Float(f) => Some(*f),
            VariantValue::Text(_) => None,
        }
    }

    /// True iff `candidate` strictly equals this value.
    ///
    /// Total over every candidate shape: null, booleans, arrays, and objects
    /// are never equal to a primitive enum value. Numbers compare
    /// numerically regardless of their integer/float representation.
    #[must_use]
    pub fn matches(&self, candidate: &Value) -> bool {
        match (self, candidate) {
            (VariantValue::Text(s), Value::String(c)) => s.as_ref() == c.as_str(),
            (VariantValue::Int(i), Value::Number(n)) => {
                n.as_i64() == Some(*i) || n.as_f64() == Some(*i as f64)
            }
            (VariantValue::Float(f), Value::Number(n)) => n.as_f64() == Some(*f),
            _ => false,
        }
    }
}

impl PartialEq for VariantValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (VariantValue::Text(a), VariantValue::Text(b)) => a == b,
            (VariantValue::Int(a), VariantValue::Int(b)) => a == b,
            (VariantValue::Float(a), VariantValue::Float(b)) => a == b,
            (VariantValue::Int(i), VariantValue::Float(f))
            | (VariantValue::Float(f), VariantValue::Int(i)) => *i as f64 == *f,
            _ => false,
        }
    }
}

impl PartialEq<Value> for VariantValue {
    fn eq(&self, other: &Value) -> bool {
        self.matches(other)
    }
}

impl PartialEq<VariantValue> for Value {
    fn eq(&self, other: &VariantValue) -> bool {
        other.matches(self)
    }
}

impl fmt::Display for VariantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantValue::Text(s) => f.write_str(s),
            VariantValue::Int(i) => write!(f, "{i}"),
            VariantValue::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<&'static str> for VariantValue {
    fn from(value: &'static str) -> Self {
        VariantValue::Text(Cow::Borrowed(value))
    }
}

impl From<String> for VariantValue {
    fn from(value: String) -> Self {
        VariantValue::Text(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for VariantValue {
    fn from(value: Cow<'static, str>) -> Self {
        VariantValue::Text(value)
    }
}

impl From<i64> for VariantValue {
    fn from(value: i64) -> Self {
        VariantValue::Int(value)
    }
}

impl From<i32> for VariantValue {
    fn from(value: i32) -> Self {
        VariantValue::Int(i64::from(value))
    }
}

impl From<u32> for VariantValue {
    fn from(value: u32) -> Self {
        VariantValue::Int(i64::from(value))
    }
}

impl From<f64> for VariantValue {
    fn from(value: f64) -> Self {
        VariantValue::Float(value)
    }
}

impl From<VariantValue> for Value {
    fn from(value: VariantValue) -> Self {
        match value {
            VariantValue::Text(s) => Value::String(s.into_owned()),
            VariantValue::Int(i) => Value::from(i),
            VariantValue::Float(f) => Value::from(f),
        }
    }
}
