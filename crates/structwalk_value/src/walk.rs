//! Depth-indexed traversal of [`Value`]s.
//!
//! [`visit_struct`] emits one event per container entered, per child and per
//! container left. Depths obey a simple contract that consumers may rely on:
//!
//! - the root container is reported at depth 0;
//! - a container's children are reported at the container's depth plus one,
//!   each immediately followed by the walk of the child itself;
//! - a container is closed at the same depth it was opened at.
//!
//! Leaves are only ever reported as children; a leaf root produces no events.

use tracing::trace;

use crate::{FieldDescriptor, Value};

/// Receiver for the raw event stream produced by [`visit_struct`].
///
/// Any error returned by a method aborts the walk; the walk functions return
/// it unchanged.
pub trait StructVisitor<'v> {
    type Error;

    fn begin_record(&mut self, depth: usize, value: &'v Value) -> Result<(), Self::Error>;
    fn record_field(
        &mut self,
        depth: usize,
        value: &'v Value,
        field: FieldDescriptor<'v>,
        index: usize,
    ) -> Result<(), Self::Error>;
    fn end_record(&mut self, depth: usize, value: &'v Value) -> Result<(), Self::Error>;

    fn begin_sequence(&mut self, depth: usize, value: &'v Value) -> Result<(), Self::Error>;
    fn sequence_element(
        &mut self,
        depth: usize,
        value: &'v Value,
        index: usize,
    ) -> Result<(), Self::Error>;
    fn end_sequence(&mut self, depth: usize, value: &'v Value) -> Result<(), Self::Error>;

    fn begin_fixed_sequence(&mut self, depth: usize, value: &'v Value) -> Result<(), Self::Error>;
    fn fixed_sequence_element(
        &mut self,
        depth: usize,
        value: &'v Value,
        index: usize,
    ) -> Result<(), Self::Error>;
    fn end_fixed_sequence(&mut self, depth: usize, value: &'v Value) -> Result<(), Self::Error>;
}

/// Walks `value` without a depth limit.
pub fn visit_struct<'v, S>(value: &'v Value, visitor: &mut S) -> Result<(), S::Error>
where
    S: StructVisitor<'v> + ?Sized,
{
    walk(value, visitor, None, 0)
}

/// Walks `value`, never reporting anything deeper than `max_depth`.
///
/// Containers at `max_depth` are still opened and closed, but their children
/// are skipped.
pub fn visit_struct_depth<'v, S>(
    value: &'v Value,
    visitor: &mut S,
    max_depth: usize,
) -> Result<(), S::Error>
where
    S: StructVisitor<'v> + ?Sized,
{
    walk(value, visitor, Some(max_depth), 0)
}

fn walk<'v, S>(
    value: &'v Value,
    visitor: &mut S,
    max_depth: Option<usize>,
    depth: usize,
) -> Result<(), S::Error>
where
    S: StructVisitor<'v> + ?Sized,
{
    let child_depth = depth + 1;
    let descend = max_depth.is_none_or(|max| child_depth <= max);

    match value {
        Value::Record(record) => {
            trace!(depth, fields = record.len(), "walk record");
            visitor.begin_record(depth, value)?;
            if descend {
                for (index, field) in record.fields().iter().enumerate() {
                    visitor.record_field(child_depth, &field.value, field.descriptor(), index)?;
                    walk(&field.value, visitor, max_depth, child_depth)?;
                }
            }
            visitor.end_record(depth, value)
        }
        Value::Sequence(items) => {
            trace!(depth, len = items.len(), "walk sequence");
            visitor.begin_sequence(depth, value)?;
            if descend {
                for (index, item) in items.iter().enumerate() {
                    visitor.sequence_element(child_depth, item, index)?;
                    walk(item, visitor, max_depth, child_depth)?;
                }
            }
            visitor.end_sequence(depth, value)
        }
        Value::FixedSequence(items) => {
            trace!(depth, len = items.len(), "walk fixed sequence");
            visitor.begin_fixed_sequence(depth, value)?;
            if descend {
                for (index, item) in items.iter().enumerate() {
                    visitor.fixed_sequence_element(child_depth, item, index)?;
                    walk(item, visitor, max_depth, child_depth)?;
                }
            }
            visitor.end_fixed_sequence(depth, value)
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;
    use pretty_assertions::assert_eq;

    /// Records each event as a compact `name@depth` string.
    #[derive(Default)]
    struct EventLog {
        events: Vec<String>,
        fail_on: Option<&'static str>,
    }

    impl EventLog {
        fn push(&mut self, event: String) -> Result<(), String> {
            let stop = self.fail_on.is_some_and(|f| event == f);
            self.events.push(event.clone());
            if stop { Err(event) } else { Ok(()) }
        }
    }

    impl<'v> StructVisitor<'v> for EventLog {
        type Error = String;

        fn begin_record(&mut self, depth: usize, _: &'v Value) -> Result<(), String> {
            self.push(format!("begin_record@{depth}"))
        }
        fn record_field(
            &mut self,
            depth: usize,
            _: &'v Value,
            field: FieldDescriptor<'v>,
            index: usize,
        ) -> Result<(), String> {
            self.push(format!("field:{}#{index}@{depth}", field.name))
        }
        fn end_record(&mut self, depth: usize, _: &'v Value) -> Result<(), String> {
            self.push(format!("end_record@{depth}"))
        }
        fn begin_sequence(&mut self, depth: usize, _: &'v Value) -> Result<(), String> {
            self.push(format!("begin_sequence@{depth}"))
        }
        fn sequence_element(&mut self, depth: usize, _: &'v Value, index: usize) -> Result<(), String> {
            self.push(format!("element#{index}@{depth}"))
        }
        fn end_sequence(&mut self, depth: usize, _: &'v Value) -> Result<(), String> {
            self.push(format!("end_sequence@{depth}"))
        }
        fn begin_fixed_sequence(&mut self, depth: usize, _: &'v Value) -> Result<(), String> {
            self.push(format!("begin_fixed@{depth}"))
        }
        fn fixed_sequence_element(
            &mut self,
            depth: usize,
            _: &'v Value,
            index: usize,
        ) -> Result<(), String> {
            self.push(format!("fixed#{index}@{depth}"))
        }
        fn end_fixed_sequence(&mut self, depth: usize, _: &'v Value) -> Result<(), String> {
            self.push(format!("end_fixed@{depth}"))
        }
    }

    fn sample() -> Value {
        Value::Record(
            Record::new()
                .with_field("id", 7)
                .with_field("pair", Value::fixed(["a", "b"]))
                .with_field("list", Value::sequence(Vec::<Value>::new())),
        )
    }

    #[test]
    fn test_event_order_and_depths() {
        let value = sample();
        let mut log = EventLog::default();
        visit_struct(&value, &mut log).unwrap();

        assert_eq!(
            log.events,
            vec![
                "begin_record@0",
                "field:id#0@1",
                "field:pair#1@1",
                "begin_fixed@1",
                "fixed#0@2",
                "fixed#1@2",
                "end_fixed@1",
                "field:list#2@1",
                "begin_sequence@1",
                "end_sequence@1",
                "end_record@0",
            ]
        );
    }

    #[test]
    fn test_leaf_root_emits_nothing() {
        let mut log = EventLog::default();
        visit_struct(&Value::from("leaf"), &mut log).unwrap();
        assert!(log.events.is_empty());
    }

    #[test]
    fn test_max_depth_zero_opens_and_closes_root_only() {
        let value = sample();
        let mut log = EventLog::default();
        visit_struct_depth(&value, &mut log, 0).unwrap();
        assert_eq!(log.events, vec!["begin_record@0", "end_record@0"]);
    }

    #[test]
    fn test_max_depth_one_skips_grandchildren() {
        let value = sample();
        let mut log = EventLog::default();
        visit_struct_depth(&value, &mut log, 1).unwrap();

        assert_eq!(
            log.events,
            vec![
                "begin_record@0",
                "field:id#0@1",
                "field:pair#1@1",
                "begin_fixed@1",
                "end_fixed@1",
                "field:list#2@1",
                "begin_sequence@1",
                "end_sequence@1",
                "end_record@0",
            ]
        );
    }

    #[test]
    fn test_error_stops_walk_immediately() {
        let value = sample();
        let mut log = EventLog {
            fail_on: Some("fixed#0@2"),
            ..Default::default()
        };

        let err = visit_struct(&value, &mut log).unwrap_err();
        assert_eq!(err, "fixed#0@2");
        assert_eq!(log.events.last().map(String::as_str), Some("fixed#0@2"));
        assert!(!log.events.iter().any(|e| e.starts_with("end_")));
    }
}
