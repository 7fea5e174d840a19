//! bones Engine - Core solver types and logic
//!
//! This crate contains the Game of Bones data model (positions and the
//! arena-backed game tree), the error taxonomy, and the backward-induction
//! evaluator that labels every position with a forced outcome for max.
//!
//! Tree construction lives in `bones-tree`; the engine only consumes trees.

pub mod error;
pub mod minimax;
pub mod node;
pub mod test_tree;

pub use error::{Error, Result};
pub use minimax::{evaluate, Outcomes, SelectionRule, SolverConfig};
pub use node::{GameTree, Heap, NodeId, Outcome, Player, Position};
