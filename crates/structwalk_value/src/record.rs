//! Records and their fields.

use crate::Value;

/// A named field of a [`Record`].
///
/// The tag is free-form annotation text attached to the field. It is carried
/// through traversal untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Field {
    pub name: String,
    pub tag: String,
    pub value: Value,
}

impl Field {
    /// Creates an untagged field.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            tag: String::new(),
            value: value.into(),
        }
    }

    /// Creates a field carrying tag text.
    pub fn tagged(name: impl Into<String>, tag: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            tag: tag.into(),
            value: value.into(),
        }
    }

    /// Returns the borrowed name/tag pair reported to traversal visitors.
    #[inline]
    pub fn descriptor(&self) -> FieldDescriptor<'_> {
        FieldDescriptor {
            name: &self.name,
            tag: &self.tag,
        }
    }
}

/// Name and raw tag of a record field, as seen by a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor<'v> {
    pub name: &'v str,
    pub tag: &'v str,
}

/// An ordered collection of named fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<Field>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an untagged field.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push(Field::new(name, value));
        self
    }

    /// Appends a field carrying tag text.
    pub fn with_tagged_field(
        mut self,
        name: impl Into<String>,
        tag: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.fields.push(Field::tagged(name, tag, value));
        self
    }

    /// Appends a field in place.
    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Returns the fields in declaration order.
    #[inline]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the value of the first field with the given name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<Field> for Record {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
