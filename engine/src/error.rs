//! Error types for the bones engine

use thiserror::Error;

use crate::node::{Heap, NodeId};

/// Main error type for building and evaluating game trees
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid argument: starting heap must be non-negative, got {heap}")]
    InvalidArgument { heap: i64 },

    #[error("node {node} (heap {heap}) has no children to select a best move from")]
    EmptyChildSet { node: NodeId, heap: Heap },

    #[error("node {node} is referenced but missing from the tree")]
    MissingNode { node: NodeId },
}

pub type Result<T> = std::result::Result<T, Error>;
