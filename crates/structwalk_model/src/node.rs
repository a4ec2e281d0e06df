//! Borrowed view of the current node and its ancestors.

use std::fmt;
use std::ops::Deref;

use crate::{MetaData, MetaDataKind};

/// The node handed to visitor callbacks.
///
/// A `Node` borrows the walker's ancestor chain: the node itself plus every
/// enclosing node up to the root. Parents are reached by position in that
/// chain, never by ownership. It dereferences to the current [`MetaData`].
#[derive(Clone, Copy)]
pub struct Node<'a, 'v> {
    current: &'a MetaData<'v>,
    ancestors: &'a [MetaData<'v>],
}

impl<'a, 'v> Node<'a, 'v> {
    /// Views the last entry of `chain` as the current node.
    ///
    /// Returns `None` for an empty chain.
    pub(crate) fn new(chain: &'a [MetaData<'v>]) -> Option<Self> {
        let (current, ancestors) = chain.split_last()?;
        Some(Self { current, ancestors })
    }

    #[inline]
    pub fn meta(&self) -> &'a MetaData<'v> {
        self.current
    }

    /// Returns the enclosing node, or `None` at the root.
    #[inline]
    pub fn parent(&self) -> Option<Node<'a, 'v>> {
        Node::new(self.ancestors)
    }

    #[inline]
    pub fn parent_kind(&self) -> Option<MetaDataKind> {
        self.ancestors.last().map(MetaData::kind)
    }

    /// Enclosing nodes, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = Node<'a, 'v>> + use<'a, 'v> {
        let ancestors = self.ancestors;
        (0..ancestors.len())
            .rev()
            .filter_map(move |end| Node::new(&ancestors[..=end]))
    }

    pub fn root(&self) -> Node<'a, 'v> {
        match self.ancestors.first() {
            Some(root) => Node {
                current: root,
                ancestors: &[],
            },
            None => *self,
        }
    }

    /// Nodes from the root down to and including this one.
    pub fn path(&self) -> impl Iterator<Item = &'a MetaData<'v>> + use<'a, 'v> {
        self.ancestors.iter().chain(std::iter::once(self.current))
    }

    /// Dot-joined names and indices of every node below the root.
    ///
    /// The root's selector is empty.
    pub fn selector(&self) -> String {
        self.path()
            .skip(1)
            .map(|node| node.name_or_index())
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Like [`selector`](Self::selector), with every sequence index replaced
    /// by `$`.
    pub fn wildcard_selector(&self) -> String {
        let chain: Vec<&MetaData<'v>> = self.path().collect();
        chain
            .windows(2)
            .map(|pair| {
                if pair[0].kind().is_indexed() {
                    "$".into()
                } else {
                    pair[1].name_or_index()
                }
            })
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Returns true if this node or any ancestor is a sequence element.
    pub fn is_self_or_parent_indexed(&self) -> bool {
        let chain: Vec<&MetaData<'v>> = self.path().collect();
        chain.windows(2).any(|pair| pair[0].kind().is_indexed())
    }
}

impl<'v> Deref for Node<'_, 'v> {
    type Target = MetaData<'v>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.current
    }
}

impl fmt::Debug for Node<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("selector", &self.selector())
            .field("meta", self.current)
            .finish()
    }
}
