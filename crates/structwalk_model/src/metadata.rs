//! Metadata node definition.
//!
//! A [`MetaData`] describes where a traversal currently is. Nodes are owned by
//! the [`MetaDataWalker`](crate::MetaDataWalker) and only ever observed by
//! visitors, which reach them through a [`Node`](crate::Node).

use std::borrow::Cow;
use std::cell::OnceCell;

use serde::Serialize;
use structwalk_value::{FieldDescriptor, Value};

use crate::{Attribs, MetaDataKind};

/// Identity of a metadata node within one traversal.
///
/// Siblings at the same depth share a node, so they share an id; a new id is
/// handed out only when a container's first child is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Structural context of the value currently being visited.
#[derive(Debug)]
pub struct MetaData<'v> {
    id: NodeId,
    kind: MetaDataKind,
    value: &'v Value,
    depth: usize,
    index: usize,
    name: &'v str,
    tag: &'v str,
    attribs: OnceCell<Attribs<'v>>,
}

impl<'v> MetaData<'v> {
    pub(crate) fn root(id: u64, value: &'v Value, kind: MetaDataKind) -> Self {
        Self {
            id: NodeId(id),
            kind,
            value,
            depth: 0,
            index: 0,
            name: "",
            tag: "",
            attribs: OnceCell::new(),
        }
    }

    pub(crate) fn child(
        id: u64,
        depth: usize,
        index: usize,
        value: &'v Value,
        field: Option<FieldDescriptor<'v>>,
    ) -> Self {
        let (name, tag) = field.map_or(("", ""), |f| (f.name, f.tag));
        Self {
            id: NodeId(id),
            kind: MetaDataKind::of(value),
            value,
            depth,
            index,
            name,
            tag,
            attribs: OnceCell::new(),
        }
    }

    /// Reuses this node for the next sibling at the same depth.
    pub(crate) fn overwrite(
        &mut self,
        value: &'v Value,
        index: usize,
        field: Option<FieldDescriptor<'v>>,
    ) {
        let (name, tag) = field.map_or(("", ""), |f| (f.name, f.tag));
        self.value = value;
        self.kind = MetaDataKind::of(value);
        self.index = index;
        self.name = name;
        if self.tag != tag {
            self.tag = tag;
            self.attribs = OnceCell::new();
        }
    }

    pub(crate) fn set_kind(&mut self, kind: MetaDataKind) {
        self.kind = kind;
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> MetaDataKind {
        self.kind
    }

    #[inline]
    pub fn value(&self) -> &'v Value {
        self.value
    }

    /// Containment depth; the root is 0.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Position among the parent container's children.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Field name; empty unless this node is a field of a record.
    #[inline]
    pub fn name(&self) -> &'v str {
        self.name
    }

    /// Raw, unparsed tag text of a record field.
    #[inline]
    pub fn tag(&self) -> &'v str {
        self.tag
    }

    /// Returns the field name, or the index for sequence elements and the root.
    pub fn name_or_index(&self) -> Cow<'v, str> {
        if self.name.is_empty() {
            Cow::Owned(self.index.to_string())
        } else {
            Cow::Borrowed(self.name)
        }
    }

    /// Returns the parsed tag attributes.
    ///
    /// Parsing happens on first use and is cached until the tag changes.
    pub fn attribs(&self) -> &Attribs<'v> {
        self.attribs.get_or_init(|| Attribs::parse(self.tag))
    }

    pub fn attrib(&self, key: &str) -> Option<&'v str> {
        self.attribs().get(key)
    }

    /// Returns true only if the attribute is present with the value `true`.
    pub fn bool_attrib(&self, key: &str) -> bool {
        self.attrib(key) == Some("true")
    }
}
