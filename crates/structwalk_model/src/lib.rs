//! # structwalk_model
//!
//! Metadata-aware traversal of structwalk values.
//!
//! The raw traversal in `structwalk_value` only reports how deep each event
//! is. This crate rebuilds the nesting structure from that stream (parent,
//! depth, sibling index and field name) and hands it to a [`Visitor`] as a
//! [`Node`].
//!
//! ## Architecture
//!
//! - [`MetaData`] describes one node: kind, value, depth, index, name and tag
//! - [`MetaDataWalker`] keeps one node per depth in an arena and validates
//!   every event against the depth contract
//! - [`Visitor`] receives begin/child/end callbacks for records, sequences and
//!   fixed sequences
//! - Broken event streams surface as [`ContractViolation`]s, kept apart from
//!   the visitor's own errors in [`WalkError`]
//!
//! ## Example
//!
//! ```rust
//! use structwalk_model::{Outline, visit};
//! use structwalk_value::{Record, Value};
//!
//! let model = Value::Record(
//!     Record::new().with_tagged_field("tags", "label=Tags", Value::sequence(["a"])),
//! );
//!
//! let mut outline = Outline::new();
//! visit(&model, &mut outline).unwrap();
//!
//! let selectors: Vec<_> = outline.entries().iter().map(|e| e.selector.as_str()).collect();
//! assert_eq!(selectors, ["", "tags", "tags", "tags.0", "tags", ""]);
//! ```

mod error;
mod kind;
mod metadata;
mod node;
pub mod outline;
mod tag;
pub mod visitor;
mod walker;

pub use error::{ContractViolation, WalkError};
pub use kind::MetaDataKind;
pub use metadata::{MetaData, NodeId};
pub use node::Node;
pub use outline::{Outline, OutlineEntry, OutlineEvent};
pub use tag::Attribs;
pub use visitor::Visitor;
pub use walker::{MetaDataWalker, visit, visit_max_depth};

pub use structwalk_value::{StructVisitor, Value};
