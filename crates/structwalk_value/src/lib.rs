//! # structwalk_value
//!
//! Dynamic value model and the raw traversal primitive for structwalk.
//!
//! Values are only reachable through structural introspection: a [`Value`]
//! is either a leaf, a [`Record`] of named fields, a dynamic-length
//! sequence or a fixed-length sequence.
//!
//! [`visit_struct`] walks a value depth-first and reports what it finds to a
//! [`StructVisitor`] as a flat stream of `(depth, value, field-or-index)`
//! events. The stream carries no parent information; reconstructing the
//! nesting is left to the consumer.
//!
//! ## Example
//!
//! ```rust
//! use structwalk_value::{Record, Value};
//!
//! let value = Value::Record(
//!     Record::new()
//!         .with_field("name", "Ada")
//!         .with_tagged_field("scores", "label=Scores", Value::fixed([1, 2])),
//! );
//!
//! assert_eq!(value.type_name(), "record");
//! assert_eq!(value.as_record().unwrap().len(), 2);
//! ```

mod error;
mod record;
mod value;
pub mod walk;

pub use error::ValueError;
pub use record::{Field, FieldDescriptor, Record};
pub use value::Value;
pub use walk::{StructVisitor, visit_struct, visit_struct_depth};
