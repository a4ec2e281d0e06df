//! Stats command implementation

use std::collections::BTreeSet;
use std::convert::Infallible;
use std::path::Path;

use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use structwalk_model::{MetaDataKind, Node, Visitor};

use super::{load_document, walk};
use crate::config::{OutputFormat, WalkConfig};

/// Shape summary of a document.
#[derive(Debug, Default, Serialize)]
pub struct Stats {
    pub records: usize,
    pub sequences: usize,
    pub fixed_sequences: usize,
    pub fields: usize,
    pub elements: usize,
    pub leaves: usize,
    pub max_depth: usize,
    /// Distinct wildcard selectors of every field and element.
    pub selectors: BTreeSet<String>,
}

impl Stats {
    fn child(&mut self, node: Node<'_, '_>) {
        if node.kind() == MetaDataKind::Value {
            self.leaves += 1;
        }
        self.max_depth = self.max_depth.max(node.depth());
        self.selectors.insert(node.wildcard_selector());
    }

    fn render_text(&self) -> String {
        [
            ("records", self.records),
            ("sequences", self.sequences),
            ("fixed_sequences", self.fixed_sequences),
            ("fields", self.fields),
            ("elements", self.elements),
            ("leaves", self.leaves),
            ("max_depth", self.max_depth),
            ("selectors", self.selectors.len()),
        ]
        .iter()
        .map(|(label, count)| format!("{label}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
    }
}

impl<'v> Visitor<'v> for Stats {
    type Error = Infallible;

    fn begin_record(&mut self, _record: Node<'_, 'v>) -> Result<(), Infallible> {
        self.records += 1;
        Ok(())
    }

    fn record_field(&mut self, field: Node<'_, 'v>) -> Result<(), Infallible> {
        self.fields += 1;
        self.child(field);
        Ok(())
    }

    fn begin_sequence(&mut self, _sequence: Node<'_, 'v>) -> Result<(), Infallible> {
        self.sequences += 1;
        Ok(())
    }

    fn sequence_element(&mut self, element: Node<'_, 'v>) -> Result<(), Infallible> {
        self.elements += 1;
        self.child(element);
        Ok(())
    }

    fn begin_fixed_sequence(&mut self, _sequence: Node<'_, 'v>) -> Result<(), Infallible> {
        self.fixed_sequences += 1;
        Ok(())
    }

    fn fixed_sequence_element(&mut self, element: Node<'_, 'v>) -> Result<(), Infallible> {
        self.elements += 1;
        self.child(element);
        Ok(())
    }
}

pub fn run_stats(config: &WalkConfig, file: &Path) -> Result<()> {
    let model = load_document(file)?;

    let mut stats = Stats::default();
    walk(&model, &mut stats, config.max_depth).into_diagnostic()?;

    match config.format {
        OutputFormat::Text => println!("{}", stats.render_text()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&stats).into_diagnostic()?;
            println!("{json}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use structwalk_model::visit;
    use structwalk_value::{Record, Value};

    fn collect(model: &Value) -> Stats {
        let mut stats = Stats::default();
        visit(model, &mut stats).unwrap();
        stats
    }

    #[test]
    fn test_counts_nested_document() {
        let model = Value::from_json_str(
            r#"{"users": [{"name": "a"}, {"name": "b", "admin": true}], "count": 2}"#,
        )
        .unwrap();
        let stats = collect(&model);

        assert_eq!(stats.records, 3);
        assert_eq!(stats.sequences, 1);
        assert_eq!(stats.fixed_sequences, 0);
        assert_eq!(stats.fields, 5);
        assert_eq!(stats.elements, 2);
        assert_eq!(stats.leaves, 4);
        assert_eq!(stats.max_depth, 3);
        let selectors: Vec<_> = stats.selectors.iter().map(String::as_str).collect();
        assert_eq!(
            selectors,
            vec!["count", "users", "users.$", "users.$.admin", "users.$.name"]
        );
    }

    #[test]
    fn test_counts_fixed_sequences() {
        let model = Value::Record(Record::new().with_field("pair", Value::fixed([1, 2])));
        let stats = collect(&model);

        assert_eq!(stats.fixed_sequences, 1);
        assert_eq!(stats.elements, 2);
        assert_eq!(stats.leaves, 2);
        assert_eq!(stats.max_depth, 2);
    }

    #[test]
    fn test_render_text() {
        let stats = collect(&Value::Record(Record::new().with_field("a", 1)));
        assert_eq!(
            stats.render_text(),
            "records: 1\nsequences: 0\nfixed_sequences: 0\nfields: 1\nelements: 0\nleaves: 1\nmax_depth: 1\nselectors: 1"
        );
    }
}
