//! Integration tests for metadata reconstruction
//!
//! Walks whole JSON documents through the public API and checks the context
//! every callback observes.

use std::collections::HashMap;

use rstest::rstest;
use structwalk_model::{MetaDataKind, Node, NodeId, Outline, OutlineEvent, Visitor, visit};
use structwalk_value::{Record, Value};

#[derive(Debug, PartialEq)]
enum Violation {
    ParentDepth(String),
    ParentKind(String),
    IndexOrder(String),
    ElementName(String),
    SiblingId(String),
}

/// Checks structural properties as events arrive.
#[derive(Default)]
struct Checker {
    violations: Vec<Violation>,
    /// Last child index and node id seen per depth.
    last_child: HashMap<usize, (usize, NodeId)>,
    events: usize,
}

impl Checker {
    fn begin(&mut self, node: Node<'_, '_>) {
        self.events += 1;
        self.last_child.remove(&(node.depth() + 1));
    }

    fn child(&mut self, node: Node<'_, '_>, container: MetaDataKind) {
        self.events += 1;
        let selector = node.selector();

        match node.parent() {
            Some(parent) if parent.depth() + 1 == node.depth() => {}
            _ => self.violations.push(Violation::ParentDepth(selector.clone())),
        }
        if node.parent_kind() != Some(container) {
            self.violations.push(Violation::ParentKind(selector.clone()));
        }
        if container.is_indexed() && !node.name().is_empty() {
            self.violations.push(Violation::ElementName(selector.clone()));
        }

        match self.last_child.get(&node.depth()) {
            Some(&(index, id)) => {
                if node.index() != index + 1 {
                    self.violations.push(Violation::IndexOrder(selector.clone()));
                }
                if node.id() != id {
                    self.violations.push(Violation::SiblingId(selector));
                }
            }
            None if node.index() != 0 => {
                self.violations.push(Violation::IndexOrder(selector));
            }
            None => {}
        }
        self.last_child
            .insert(node.depth(), (node.index(), node.id()));
    }

    fn end(&mut self) {
        self.events += 1;
    }
}

impl<'v> Visitor<'v> for Checker {
    type Error = std::convert::Infallible;

    fn begin_record(&mut self, record: Node<'_, 'v>) -> Result<(), Self::Error> {
        self.begin(record);
        Ok(())
    }

    fn record_field(&mut self, field: Node<'_, 'v>) -> Result<(), Self::Error> {
        self.child(field, MetaDataKind::Record);
        Ok(())
    }

    fn end_record(&mut self, _record: Node<'_, 'v>) -> Result<(), Self::Error> {
        self.end();
        Ok(())
    }

    fn begin_sequence(&mut self, sequence: Node<'_, 'v>) -> Result<(), Self::Error> {
        self.begin(sequence);
        Ok(())
    }

    fn sequence_element(&mut self, element: Node<'_, 'v>) -> Result<(), Self::Error> {
        self.child(element, MetaDataKind::Sequence);
        Ok(())
    }

    fn end_sequence(&mut self, _sequence: Node<'_, 'v>) -> Result<(), Self::Error> {
        self.end();
        Ok(())
    }

    fn begin_fixed_sequence(&mut self, sequence: Node<'_, 'v>) -> Result<(), Self::Error> {
        self.begin(sequence);
        Ok(())
    }

    fn fixed_sequence_element(&mut self, element: Node<'_, 'v>) -> Result<(), Self::Error> {
        self.child(element, MetaDataKind::FixedSequence);
        Ok(())
    }

    fn end_fixed_sequence(&mut self, _sequence: Node<'_, 'v>) -> Result<(), Self::Error> {
        self.end();
        Ok(())
    }
}

fn document(json: &str) -> Value {
    Value::from_json_str(json).unwrap()
}

mod structural_properties {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case::flat(r#"{"a": 1, "b": "x", "c": null}"#, 5)]
    #[case::nested_records(r#"{"a": {"b": {"c": {"d": true}}}}"#, 12)]
    #[case::sequence_root(r#"[1, [2, 3], {"x": [4]}, []]"#, 18)]
    #[case::mixed(
        r#"{"users": [{"name": "a", "tags": ["x", "y"]}, {"name": "b", "tags": []}], "total": 2}"#,
        22
    )]
    #[case::empty_record("{}", 2)]
    fn holds_for_document(#[case] json: &str, #[case] events: usize) {
        let model = document(json);
        let mut checker = Checker::default();
        visit(&model, &mut checker).unwrap();

        assert_eq!(checker.violations, vec![]);
        assert_eq!(checker.events, events);
    }

    #[test]
    fn holds_for_fixed_sequences() {
        // {"pair": fixed[1, [2, 3]], "grid": [fixed[], fixed[{"x": 4}]]}
        let model = Value::Record(
            Record::new()
                .with_field("pair", Value::fixed([Value::from(1), Value::fixed([2, 3])]))
                .with_field(
                    "grid",
                    Value::sequence([
                        Value::fixed(Vec::<Value>::new()),
                        Value::fixed([Value::Record(Record::new().with_field("x", 4))]),
                    ]),
                ),
        );
        let mut checker = Checker::default();
        visit(&model, &mut checker).unwrap();

        assert_eq!(checker.violations, vec![]);
        assert_eq!(checker.events, 24);
    }

    #[test]
    fn leaf_document_produces_no_events() {
        let model = document("42");
        let mut checker = Checker::default();
        visit(&model, &mut checker).unwrap();

        assert_eq!(checker.events, 0);
    }
}

mod reconstructed_context {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn selectors_follow_document_order() {
        let model = document(r#"{"a": [{"b": 1}, {"b": 2}], "c": {"d": [true]}}"#);
        let mut outline = Outline::new();
        visit(&model, &mut outline).unwrap();

        let children: Vec<_> = outline
            .entries()
            .iter()
            .filter(|e| e.event.is_child())
            .map(|e| e.selector.as_str())
            .collect();
        assert_eq!(
            children,
            vec!["a", "a.0", "a.0.b", "a.1", "a.1.b", "c", "c.d", "c.d.0"]
        );
    }

    #[test]
    fn container_events_share_the_child_node() {
        let model = document(r#"{"inner": {"x": 1}}"#);
        let mut outline = Outline::new();
        visit(&model, &mut outline).unwrap();

        let entries = outline.entries();
        let events: Vec<_> = entries.iter().map(|e| e.event).collect();
        assert_eq!(
            events,
            vec![
                OutlineEvent::BeginRecord,
                OutlineEvent::RecordField,
                OutlineEvent::BeginRecord,
                OutlineEvent::RecordField,
                OutlineEvent::EndRecord,
                OutlineEvent::EndRecord,
            ]
        );

        // The field, its begin and its end all see the same node.
        assert_eq!(entries[1].id, entries[2].id);
        assert_eq!(entries[2].id, entries[4].id);
        assert_eq!(entries[2].depth, 1);
        assert_eq!(entries[2].name, "inner");

        // The root is a distinct node, reported again at the very end.
        assert_ne!(entries[0].id, entries[1].id);
        assert_eq!(entries[0].id, entries[5].id);
    }

    #[test]
    fn kinds_describe_each_value() {
        let model = document(r#"{"r": {}, "s": [], "v": 1}"#);
        let mut outline = Outline::new();
        visit(&model, &mut outline).unwrap();

        let kinds: Vec<_> = outline
            .entries()
            .iter()
            .filter(|e| e.event.is_child())
            .map(|e| (e.name.as_str(), e.kind))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("r", MetaDataKind::Record),
                ("s", MetaDataKind::Sequence),
                ("v", MetaDataKind::Value),
            ]
        );
    }
}

mod visitor_errors {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Fails on the first field whose name matches.
    struct StopAt(&'static str);

    impl<'v> Visitor<'v> for StopAt {
        type Error = String;

        fn record_field(&mut self, field: Node<'_, 'v>) -> Result<(), String> {
            if field.name() == self.0 {
                return Err(format!("stopped at {}", field.selector()));
            }
            Ok(())
        }
    }

    #[test]
    fn first_error_is_returned_unchanged() {
        let model = document(r#"{"a": {"b": 1, "c": 2}, "d": 3}"#);
        let err = visit(&model, &mut StopAt("c")).unwrap_err();

        assert!(!err.is_contract_violation());
        assert_eq!(err.into_visitor_error(), Some("stopped at a.c".to_string()));
    }
}
