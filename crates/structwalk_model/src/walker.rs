//! Metadata reconstruction over a raw traversal.
//!
//! [`MetaDataWalker`] sits between a depth-indexed event source (anything
//! driving a [`StructVisitor`]) and a [`Visitor`]. The event source only says
//! how deep each event is; the walker turns that into a consistent chain of
//! [`MetaData`] nodes, one per depth, and hands the current one to the
//! visitor.
//!
//! The chain is an arena indexed by depth: slot `d` always holds the node at
//! depth `d`, so a node's parent is simply the slot before it.
//!
//! - The first child of a container pushes a new node.
//! - Later siblings overwrite the node in place, keeping its [`NodeId`].
//! - Closing a container that had children pops back to it.
//!
//! Events that break this discipline are reported as
//! [`ContractViolation`]s instead of being patched over.
//!
//! [`NodeId`]: crate::NodeId

use structwalk_value::{FieldDescriptor, StructVisitor, Value, visit_struct, visit_struct_depth};
use tracing::{debug, error, trace};

use crate::{ContractViolation, MetaData, MetaDataKind, Node, Visitor, WalkError};

/// Walks `model` without a depth limit, reporting to `visitor`.
pub fn visit<'v, V>(model: &'v Value, visitor: &mut V) -> Result<(), WalkError<V::Error>>
where
    V: Visitor<'v> + ?Sized,
{
    debug!(root = model.type_name(), "visit");
    let mut walker = MetaDataWalker::new(visitor);
    let result = visit_struct(model, &mut walker);
    debug!(ok = result.is_ok(), "visit finished");
    result
}

/// Walks `model`, not descending past `max_depth`.
///
/// The limit is enforced by the underlying traversal; containers at
/// `max_depth` are still opened and closed, but their children are skipped.
pub fn visit_max_depth<'v, V>(
    model: &'v Value,
    visitor: &mut V,
    max_depth: usize,
) -> Result<(), WalkError<V::Error>>
where
    V: Visitor<'v> + ?Sized,
{
    debug!(root = model.type_name(), max_depth, "visit");
    let mut walker = MetaDataWalker::new(visitor);
    let result = visit_struct_depth(model, &mut walker, max_depth);
    debug!(ok = result.is_ok(), "visit finished");
    result
}

/// Logs a violation and lifts it into a [`WalkError`].
fn check<E>(result: Result<(), ContractViolation>) -> Result<(), WalkError<E>> {
    result.map_err(|violation| {
        error!(%violation, "traversal contract violated");
        WalkError::Contract(violation)
    })
}

#[derive(Debug, Clone, Copy)]
enum Container {
    Record,
    Sequence,
    FixedSequence,
}

impl Container {
    const fn kind(self) -> MetaDataKind {
        match self {
            Container::Record => MetaDataKind::Record,
            Container::Sequence => MetaDataKind::Sequence,
            Container::FixedSequence => MetaDataKind::FixedSequence,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Begin,
    Child,
    End,
}

/// Adapter from raw traversal events to [`Visitor`] callbacks.
///
/// A walker serves exactly one traversal: once a root has been opened, a
/// second depth-0 begin is a contract violation.
pub struct MetaDataWalker<'v, V> {
    visitor: V,
    chain: Vec<MetaData<'v>>,
    next_id: u64,
}

impl<'v, V> MetaDataWalker<'v, V>
where
    V: Visitor<'v>,
{
    pub fn new(visitor: V) -> Self {
        Self {
            visitor,
            chain: Vec::new(),
            next_id: 0,
        }
    }

    /// Returns the node under the cursor, if any.
    pub fn current(&self) -> Option<Node<'_, 'v>> {
        Node::new(&self.chain)
    }

    pub fn visitor(&self) -> &V {
        &self.visitor
    }

    pub fn into_visitor(self) -> V {
        self.visitor
    }

    fn allocate(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn current_depth(&self) -> Option<usize> {
        self.chain.last().map(MetaData::depth)
    }

    fn on_begin(
        &mut self,
        depth: usize,
        value: &'v Value,
        container: Container,
    ) -> Result<(), ContractViolation> {
        let kind = container.kind();
        if depth == 0 {
            if !self.chain.is_empty() {
                return Err(ContractViolation::RootAlreadyOpen { kind });
            }
            let id = self.allocate();
            self.chain.push(MetaData::root(id, value, kind));
            return Ok(());
        }

        match self.chain.last_mut() {
            Some(node) if node.depth() == depth => {
                node.set_kind(kind);
                Ok(())
            }
            other => Err(ContractViolation::MissingNode {
                kind,
                depth,
                current: other.map(|node| node.depth()),
            }),
        }
    }

    fn on_child(
        &mut self,
        depth: usize,
        value: &'v Value,
        index: usize,
        field: Option<FieldDescriptor<'v>>,
        container: Container,
    ) -> Result<(), ContractViolation> {
        let kind = container.kind();

        if index == 0 {
            let Some(parent) = self.chain.last() else {
                return Err(ContractViolation::MissingParent { kind, depth });
            };
            let expected = parent.depth() + 1;
            if depth != expected {
                return Err(ContractViolation::FirstChildDepth {
                    kind,
                    expected,
                    depth,
                });
            }
            if parent.kind() != kind {
                return Err(ContractViolation::WrongParentKind {
                    kind,
                    found: parent.kind(),
                });
            }
            let id = self.allocate();
            self.chain.push(MetaData::child(id, depth, index, value, field));
            return Ok(());
        }

        let Some(expected) = self.current_depth() else {
            return Err(ContractViolation::MissingParent { kind, depth });
        };
        if depth != expected {
            return Err(ContractViolation::SiblingDepth {
                kind,
                index,
                expected,
                depth,
            });
        }
        let parent_kind = self
            .chain
            .len()
            .checked_sub(2)
            .and_then(|slot| self.chain.get(slot))
            .map(MetaData::kind);
        match parent_kind {
            None => return Err(ContractViolation::MissingParent { kind, depth }),
            Some(found) if found != kind => {
                return Err(ContractViolation::WrongParentKind { kind, found });
            }
            Some(_) => {}
        }
        if let Some(node) = self.chain.last_mut() {
            node.overwrite(value, index, field);
        }
        Ok(())
    }

    fn on_end(&mut self, depth: usize, container: Container) -> Result<(), ContractViolation> {
        let kind = container.kind();
        match self.current_depth() {
            Some(current) if current == depth => {}
            Some(current) if current == depth + 1 => {
                self.chain.pop();
            }
            current => return Err(ContractViolation::EndDepth { kind, depth, current }),
        }

        match self.chain.last() {
            Some(node) if node.kind() == kind => Ok(()),
            Some(node) => Err(ContractViolation::EndKind {
                kind,
                found: node.kind(),
            }),
            None => Err(ContractViolation::EndDepth {
                kind,
                depth,
                current: None,
            }),
        }
    }

    /// Hands the current node to the visitor callback for `step`.
    fn dispatch(
        &mut self,
        step: Step,
        container: Container,
        depth: usize,
    ) -> Result<(), WalkError<V::Error>> {
        let Some(node) = Node::new(&self.chain) else {
            let violation = ContractViolation::MissingNode {
                kind: container.kind(),
                depth,
                current: None,
            };
            return check(Err(violation));
        };
        trace!(
            ?step,
            kind = %node.kind(),
            depth = node.depth(),
            index = node.index(),
            id = node.id().get(),
            "dispatch"
        );

        let visitor = &mut self.visitor;
        let result = match (step, container) {
            (Step::Begin, Container::Record) => visitor.begin_record(node),
            (Step::Child, Container::Record) => visitor.record_field(node),
            (Step::End, Container::Record) => visitor.end_record(node),
            (Step::Begin, Container::Sequence) => visitor.begin_sequence(node),
            (Step::Child, Container::Sequence) => visitor.sequence_element(node),
            (Step::End, Container::Sequence) => visitor.end_sequence(node),
            (Step::Begin, Container::FixedSequence) => visitor.begin_fixed_sequence(node),
            (Step::Child, Container::FixedSequence) => visitor.fixed_sequence_element(node),
            (Step::End, Container::FixedSequence) => visitor.end_fixed_sequence(node),
        };
        result.map_err(WalkError::Visitor)
    }

    fn begin(
        &mut self,
        depth: usize,
        value: &'v Value,
        container: Container,
    ) -> Result<(), WalkError<V::Error>> {
        let result = self.on_begin(depth, value, container);
        check(result)?;
        self.dispatch(Step::Begin, container, depth)
    }

    fn child(
        &mut self,
        depth: usize,
        value: &'v Value,
        index: usize,
        field: Option<FieldDescriptor<'v>>,
        container: Container,
    ) -> Result<(), WalkError<V::Error>> {
        let result = self.on_child(depth, value, index, field, container);
        check(result)?;
        self.dispatch(Step::Child, container, depth)
    }

    fn end(&mut self, depth: usize, container: Container) -> Result<(), WalkError<V::Error>> {
        let result = self.on_end(depth, container);
        check(result)?;
        self.dispatch(Step::End, container, depth)
    }
}

impl<'v, V> StructVisitor<'v> for MetaDataWalker<'v, V>
where
    V: Visitor<'v>,
{
    type Error = WalkError<V::Error>;

    fn begin_record(&mut self, depth: usize, value: &'v Value) -> Result<(), Self::Error> {
        self.begin(depth, value, Container::Record)
    }

    fn record_field(
        &mut self,
        depth: usize,
        value: &'v Value,
        field: FieldDescriptor<'v>,
        index: usize,
    ) -> Result<(), Self::Error> {
        self.child(depth, value, index, Some(field), Container::Record)
    }

    fn end_record(&mut self, depth: usize, _value: &'v Value) -> Result<(), Self::Error> {
        self.end(depth, Container::Record)
    }

    fn begin_sequence(&mut self, depth: usize, value: &'v Value) -> Result<(), Self::Error> {
        self.begin(depth, value, Container::Sequence)
    }

    fn sequence_element(
        &mut self,
        depth: usize,
        value: &'v Value,
        index: usize,
    ) -> Result<(), Self::Error> {
        self.child(depth, value, index, None, Container::Sequence)
    }

    fn end_sequence(&mut self, depth: usize, _value: &'v Value) -> Result<(), Self::Error> {
        self.end(depth, Container::Sequence)
    }

    fn begin_fixed_sequence(&mut self, depth: usize, value: &'v Value) -> Result<(), Self::Error> {
        self.begin(depth, value, Container::FixedSequence)
    }

    fn fixed_sequence_element(
        &mut self,
        depth: usize,
        value: &'v Value,
        index: usize,
    ) -> Result<(), Self::Error> {
        self.child(depth, value, index, None, Container::FixedSequence)
    }

    fn end_fixed_sequence(&mut self, depth: usize, _value: &'v Value) -> Result<(), Self::Error> {
        self.end(depth, Container::FixedSequence)
    }
}
