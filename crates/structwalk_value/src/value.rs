//! Value definition.
//!
//! The dynamic data model walked by structwalk.

use serde::Serialize;

use crate::{Field, Record, ValueError};

/// A dynamically shaped value.
///
/// Containers are [`Value::Record`], [`Value::Sequence`] and
/// [`Value::FixedSequence`]; everything else is a leaf.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Named fields in declaration order.
    Record(Record),
    /// Dynamic-length sequence.
    Sequence(Vec<Value>),
    /// Fixed-length sequence.
    FixedSequence(Box<[Value]>),
}

impl Value {
    /// Creates a dynamic-length sequence.
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Creates a fixed-length sequence.
    pub fn fixed<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::FixedSequence(items.into_iter().map(Into::into).collect())
    }

    /// Parses JSON text into a value.
    ///
    /// Objects become records (key order preserved), arrays become
    /// dynamic-length sequences.
    pub fn from_json_str(json: &str) -> Result<Self, ValueError> {
        let json: serde_json::Value = serde_json::from_str(json)?;
        Ok(json.into())
    }

    /// Returns a short lowercase name for the shape of this value.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Record(_) => "record",
            Value::Sequence(_) => "sequence",
            Value::FixedSequence(_) => "fixed_sequence",
        }
    }

    /// Returns true for records and both sequence kinds.
    #[inline]
    pub const fn is_container(&self) -> bool {
        matches!(
            self,
            Value::Record(_) | Value::Sequence(_) | Value::FixedSequence(_)
        )
    }

    #[inline]
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Returns the elements of either sequence kind.
    #[inline]
    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            Value::FixedSequence(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Sequence(value)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Record(
                map.into_iter()
                    .map(|(name, value)| Field::new(name, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Record(record) => {
                let mut map = serializer.serialize_map(Some(record.len()))?;
                for field in record.fields() {
                    map.serialize_entry(&field.name, &field.value)?;
                }
                map.end()
            }
            Value::Sequence(items) => items.serialize(serializer),
            Value::FixedSequence(items) => items.serialize(serializer),
        }
    }
}
