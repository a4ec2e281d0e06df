//! Structural classification of visited values.

use std::fmt;

use serde::Serialize;
use structwalk_value::Value;

/// The structural kind of a metadata node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetaDataKind {
    Record,
    /// Dynamic-length sequence.
    Sequence,
    /// Fixed-length sequence.
    FixedSequence,
    /// Anything that is not a container.
    Value,
}

impl MetaDataKind {
    /// Classifies a value purely from its runtime shape.
    #[inline]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Record(_) => MetaDataKind::Record,
            Value::Sequence(_) => MetaDataKind::Sequence,
            Value::FixedSequence(_) => MetaDataKind::FixedSequence,
            _ => MetaDataKind::Value,
        }
    }

    #[inline]
    pub const fn is_container(self) -> bool {
        !matches!(self, MetaDataKind::Value)
    }

    /// Returns true for both sequence kinds.
    #[inline]
    pub const fn is_indexed(self) -> bool {
        matches!(self, MetaDataKind::Sequence | MetaDataKind::FixedSequence)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            MetaDataKind::Record => "record",
            MetaDataKind::Sequence => "sequence",
            MetaDataKind::FixedSequence => "fixed_sequence",
            MetaDataKind::Value => "value",
        }
    }
}

impl fmt::Display for MetaDataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
