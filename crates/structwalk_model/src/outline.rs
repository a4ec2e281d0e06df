//! Outline recorder.
//!
//! [`Outline`] is a ready-made [`Visitor`] that records every callback
//! together with the node's reconstructed context. It can be rendered as an
//! indented text outline or serialized as JSON.

use std::convert::Infallible;
use std::fmt::{self, Write as _};

use serde::Serialize;
use structwalk_value::Value;

use crate::{MetaDataKind, Node, NodeId, Visitor};

/// The visitor callback an [`OutlineEntry`] was recorded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlineEvent {
    BeginRecord,
    RecordField,
    EndRecord,
    BeginSequence,
    SequenceElement,
    EndSequence,
    BeginFixedSequence,
    FixedSequenceElement,
    EndFixedSequence,
}

impl OutlineEvent {
    pub const fn as_str(self) -> &'static str {
        match self {
            OutlineEvent::BeginRecord => "begin_record",
            OutlineEvent::RecordField => "record_field",
            OutlineEvent::EndRecord => "end_record",
            OutlineEvent::BeginSequence => "begin_sequence",
            OutlineEvent::SequenceElement => "sequence_element",
            OutlineEvent::EndSequence => "end_sequence",
            OutlineEvent::BeginFixedSequence => "begin_fixed_sequence",
            OutlineEvent::FixedSequenceElement => "fixed_sequence_element",
            OutlineEvent::EndFixedSequence => "end_fixed_sequence",
        }
    }

    /// Returns true for field and element events.
    pub const fn is_child(self) -> bool {
        matches!(
            self,
            OutlineEvent::RecordField
                | OutlineEvent::SequenceElement
                | OutlineEvent::FixedSequenceElement
        )
    }
}

impl fmt::Display for OutlineEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded callback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutlineEntry {
    pub event: OutlineEvent,
    pub id: NodeId,
    pub kind: MetaDataKind,
    pub depth: usize,
    pub index: usize,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    pub selector: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tag: String,
    /// Rendered leaf value, for field and element events on leaves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Visitor that records the whole traversal.
#[derive(Debug, Clone)]
pub struct Outline {
    entries: Vec<OutlineEntry>,
    show_values: bool,
}

impl Outline {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            show_values: true,
        }
    }

    /// Enables or disables leaf value previews.
    pub fn show_values(mut self, yes: bool) -> Self {
        self.show_values = yes;
        self
    }

    pub fn entries(&self) -> &[OutlineEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<OutlineEntry> {
        self.entries
    }

    /// Renders one line per entry, indented by `indent` spaces per depth level.
    pub fn render_text(&self, indent: usize) -> String {
        let mut out = String::new();
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let label = if entry.selector.is_empty() {
                "<root>"
            } else {
                entry.selector.as_str()
            };
            let _ = write!(
                out,
                "{:pad$}{} {label} ({})",
                "",
                entry.event,
                entry.kind,
                pad = entry.depth.saturating_mul(indent)
            );
            if !entry.tag.is_empty() {
                let _ = write!(out, " [{}]", entry.tag);
            }
            if let Some(value) = &entry.value {
                let _ = write!(out, " = {value}");
            }
        }
        out
    }

    fn push(&mut self, event: OutlineEvent, node: Node<'_, '_>) -> Result<(), Infallible> {
        let value = if self.show_values && event.is_child() {
            preview(node.value())
        } else {
            None
        };
        self.entries.push(OutlineEntry {
            event,
            id: node.id(),
            kind: node.kind(),
            depth: node.depth(),
            index: node.index(),
            name: node.name().to_string(),
            selector: node.selector(),
            tag: node.tag().to_string(),
            value,
        });
        Ok(())
    }
}

impl Default for Outline {
    fn default() -> Self {
        Self::new()
    }
}

fn preview(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some("null".to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Int(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::String(s) => Some(format!("{s:?}")),
        Value::Record(_) | Value::Sequence(_) | Value::FixedSequence(_) => None,
    }
}

impl<'v> Visitor<'v> for Outline {
    type Error = Infallible;

    fn begin_record(&mut self, record: Node<'_, 'v>) -> Result<(), Infallible> {
        self.push(OutlineEvent::BeginRecord, record)
    }

    fn record_field(&mut self, field: Node<'_, 'v>) -> Result<(), Infallible> {
        self.push(OutlineEvent::RecordField, field)
    }

    fn end_record(&mut self, record: Node<'_, 'v>) -> Result<(), Infallible> {
        self.push(OutlineEvent::EndRecord, record)
    }

    fn begin_sequence(&mut self, sequence: Node<'_, 'v>) -> Result<(), Infallible> {
        self.push(OutlineEvent::BeginSequence, sequence)
    }

    fn sequence_element(&mut self, element: Node<'_, 'v>) -> Result<(), Infallible> {
        self.push(OutlineEvent::SequenceElement, element)
    }

    fn end_sequence(&mut self, sequence: Node<'_, 'v>) -> Result<(), Infallible> {
        self.push(OutlineEvent::EndSequence, sequence)
    }

    fn begin_fixed_sequence(&mut self, sequence: Node<'_, 'v>) -> Result<(), Infallible> {
        self.push(OutlineEvent::BeginFixedSequence, sequence)
    }

    fn fixed_sequence_element(&mut self, element: Node<'_, 'v>) -> Result<(), Infallible> {
        self.push(OutlineEvent::FixedSequenceElement, element)
    }

    fn end_fixed_sequence(&mut self, sequence: Node<'_, 'v>) -> Result<(), Infallible> {
        self.push(OutlineEvent::EndFixedSequence, sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{visit, visit_max_depth};
    use pretty_assertions::assert_eq;
    use structwalk_value::Record;

    fn sample() -> Value {
        Value::Record(
            Record::new()
                .with_field("name", "Ada")
                .with_tagged_field("scores", "label=Scores", Value::fixed([1, 2]))
                .with_field("tags", Value::sequence(Vec::<Value>::new())),
        )
    }

    #[test]
    fn test_render_text() {
        let model = sample();
        let mut outline = Outline::new();
        visit(&model, &mut outline).unwrap();

        insta::assert_snapshot!(outline.render_text(2), @r#"
        begin_record <root> (record)
          record_field name (value) = "Ada"
          record_field scores (fixed_sequence) [label=Scores]
          begin_fixed_sequence scores (fixed_sequence) [label=Scores]
            fixed_sequence_element scores.0 (value) = 1
            fixed_sequence_element scores.1 (value) = 2
          end_fixed_sequence scores (fixed_sequence) [label=Scores]
          record_field tags (sequence)
          begin_sequence tags (sequence)
          end_sequence tags (sequence)
        end_record <root> (record)
        "#);
    }

    #[test]
    fn test_render_text_without_values() {
        let model = sample();
        let mut outline = Outline::new().show_values(false);
        visit_max_depth(&model, &mut outline, 1).unwrap();

        let text = outline.render_text(4);
        assert!(!text.contains(" = "));
        assert!(text.contains("\n    record_field name (value)"));
        assert!(!text.contains("scores.0"));
    }

    #[test]
    fn test_entry_serialization_skips_empty_fields() {
        let model = sample();
        let mut outline = Outline::new();
        visit(&model, &mut outline).unwrap();

        let entries = outline.into_entries();
        let root = serde_json::to_value(&entries[0]).unwrap();
        assert_eq!(
            root,
            serde_json::json!({
                "event": "begin_record",
                "id": 0,
                "kind": "record",
                "depth": 0,
                "index": 0,
                "selector": "",
            })
        );

        let element = serde_json::to_value(&entries[4]).unwrap();
        assert_eq!(element["event"], "fixed_sequence_element");
        assert_eq!(element["selector"], "scores.0");
        assert_eq!(element["value"], "1");
        assert!(element.get("name").is_none());
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview(&Value::from("a\"b")), Some(r#""a\"b""#.to_string()));
        assert_eq!(preview(&Value::Float(0.5)), Some("0.5".to_string()));
        assert_eq!(preview(&Value::Null), Some("null".to_string()));
        assert_eq!(preview(&Value::sequence([1])), None);
    }
}
