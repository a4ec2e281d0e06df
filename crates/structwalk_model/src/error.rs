//! Traversal error types.

use thiserror::Error;

use crate::MetaDataKind;

/// An event sequence that breaks the depth/kind contract the walker relies on.
///
/// These never come from visitor logic. They mean the event source (or
/// whoever drives a [`MetaDataWalker`](crate::MetaDataWalker) by hand)
/// emitted events out of order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("begin {kind} at depth 0 must not have a parent")]
    RootAlreadyOpen { kind: MetaDataKind },

    #[error(
        "begin {kind} at depth {depth}: expected a field or element at that depth before it, current depth is {}",
        depth_label(.current)
    )]
    MissingNode {
        kind: MetaDataKind,
        depth: usize,
        current: Option<usize>,
    },

    #[error("{kind} child at depth {depth} has no enclosing {kind}")]
    MissingParent { kind: MetaDataKind, depth: usize },

    #[error("first child of a {kind} must be at depth {expected}, got {depth}")]
    FirstChildDepth {
        kind: MetaDataKind,
        expected: usize,
        depth: usize,
    },

    #[error(
        "{kind} child {index} must be at the depth of its previous sibling ({expected}), got {depth}"
    )]
    SiblingDepth {
        kind: MetaDataKind,
        index: usize,
        expected: usize,
        depth: usize,
    },

    #[error("{kind} child reported under a {found} parent")]
    WrongParentKind {
        kind: MetaDataKind,
        found: MetaDataKind,
    },

    #[error(
        "end {kind} at depth {depth}: current depth is {}, expected {depth} or {}",
        depth_label(.current),
        .depth + 1
    )]
    EndDepth {
        kind: MetaDataKind,
        depth: usize,
        current: Option<usize>,
    },

    #[error("end {kind} called for {found}")]
    EndKind {
        kind: MetaDataKind,
        found: MetaDataKind,
    },
}

fn depth_label(depth: &Option<usize>) -> String {
    match depth {
        Some(depth) => depth.to_string(),
        None => "none".to_string(),
    }
}

/// Error returned by a traversal.
///
/// Visitor errors are carried verbatim in [`WalkError::Visitor`]; contract
/// violations are kept apart so callers can tell a broken event stream from
/// an ordinary failure.
#[derive(Debug, Error)]
pub enum WalkError<E> {
    #[error("traversal contract violated: {0}")]
    Contract(#[from] ContractViolation),

    #[error(transparent)]
    Visitor(E),
}

impl<E> WalkError<E> {
    #[inline]
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, WalkError::Contract(_))
    }

    pub fn contract_violation(&self) -> Option<&ContractViolation> {
        match self {
            WalkError::Contract(violation) => Some(violation),
            WalkError::Visitor(_) => None,
        }
    }

    /// Returns the visitor's own error, unchanged.
    pub fn into_visitor_error(self) -> Option<E> {
        match self {
            WalkError::Visitor(error) => Some(error),
            WalkError::Contract(_) => None,
        }
    }
}
