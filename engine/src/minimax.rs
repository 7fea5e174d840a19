//! Backward induction over a built game tree
//!
//! All outcomes are from the max player's perspective. A terminal position is
//! scored from its parent: whoever moved into it took the last bone and wins.
//!
//! The traversal only borrows the tree. Results go into an [`Outcomes`] table
//! parallel to the node arena, so a tree can be evaluated any number of times
//! (and under different rules) without being rebuilt.

use crate::error::{Error, Result};
use crate::node::{GameTree, Heap, NodeId, Outcome, Player};
use log::{debug, trace};

/// How a position picks its best child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionRule {
    /// Highest-scoring child for every position, whoever is on move.
    #[default]
    AlwaysMax,
    /// Highest-scoring child when max is on move, lowest when min is.
    Alternating,
}

impl SelectionRule {
    /// Pick the best `(child, outcome)` pair, first occurrence winning ties.
    fn select(self, to_move: Player, scored: &[(NodeId, Outcome)]) -> Option<(NodeId, Outcome)> {
        let prefer_high = match self {
            SelectionRule::AlwaysMax => true,
            SelectionRule::Alternating => to_move.is_max(),
        };
        let mut best: Option<(NodeId, Outcome)> = None;
        for &(id, outcome) in scored {
            best = match best {
                Some((_, current)) if prefer_high && outcome <= current => best,
                Some((_, current)) if !prefer_high && outcome >= current => best,
                _ => Some((id, outcome)),
            };
        }
        best
    }
}

/// Solver settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolverConfig {
    pub rule: SelectionRule,
}

impl SolverConfig {
    pub fn with_rule(rule: SelectionRule) -> Self {
        SolverConfig { rule }
    }
}

/// Per-node evaluation results, indexed by node ID.
///
/// `None` means the node has not been scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcomes {
    /// outcomes[node_id] — forced result for max
    outcomes: Vec<Option<Outcome>>,
    /// best_child[node_id] — selected child (None for terminals)
    best_child: Vec<Option<NodeId>>,
}

impl Outcomes {
    /// Allocate an all-unset table for `num_nodes` positions.
    pub fn new(num_nodes: usize) -> Self {
        Outcomes {
            outcomes: vec![None; num_nodes],
            best_child: vec![None; num_nodes],
        }
    }

    fn record(&mut self, id: NodeId, outcome: Outcome, best: Option<NodeId>) -> Result<()> {
        let idx = id as usize;
        match (self.outcomes.get_mut(idx), self.best_child.get_mut(idx)) {
            (Some(slot), Some(best_slot)) => {
                *slot = Some(outcome);
                *best_slot = best;
                Ok(())
            }
            _ => Err(Error::MissingNode { node: id }),
        }
    }

    /// Outcome of a node, if scored
    pub fn get(&self, id: NodeId) -> Option<Outcome> {
        self.outcomes.get(id as usize).copied().flatten()
    }

    /// Outcome of the root
    pub fn root(&self) -> Option<Outcome> {
        self.get(0)
    }

    /// True iff max forces a win from the root
    pub fn max_wins(&self) -> bool {
        self.root() == Some(Outcome::MaxWins)
    }

    /// Child selected as best at `id`
    pub fn best_child(&self, id: NodeId) -> Option<NodeId> {
        self.best_child.get(id as usize).copied().flatten()
    }

    /// True when every node has an outcome
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(Option::is_some)
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Heap sizes along the line of best moves, starting at the root.
    pub fn best_line(&self, tree: &GameTree) -> Vec<Heap> {
        let mut line = Vec::new();
        let mut cursor = tree.root().map(|root| root.id);
        while let Some(node) = cursor.and_then(|id| tree.get(id)) {
            line.push(node.heap);
            cursor = self.best_child(node.id);
        }
        line
    }
}

/// Score `node_id` and everything below it, children before parents.
fn score_node(
    tree: &GameTree,
    rule: SelectionRule,
    node_id: NodeId,
    table: &mut Outcomes,
) -> Result<Outcome> {
    let node = tree.get(node_id).ok_or(Error::MissingNode { node: node_id })?;

    let mut scored = Vec::with_capacity(node.children.len());
    for &child_id in &node.children {
        let child = tree.get(child_id).ok_or(Error::MissingNode { node: child_id })?;
        let outcome = if child.is_terminal() {
            let outcome = Outcome::last_bone_taken_by(node.to_move);
            trace!("terminal {} reached by {:?}: {:?}", child_id, node.to_move, outcome);
            table.record(child_id, outcome, None)?;
            outcome
        } else {
            score_node(tree, rule, child_id, table)?
        };
        scored.push((child_id, outcome));
    }

    let (best, outcome) = rule.select(node.to_move, &scored).ok_or(Error::EmptyChildSet {
        node: node_id,
        heap: node.heap,
    })?;
    table.record(node_id, outcome, Some(best))?;
    Ok(outcome)
}

/// Evaluate every position of `tree` by backward induction.
///
/// The root must not be terminal: a root with no children fails with
/// [`Error::EmptyChildSet`].
pub fn evaluate(tree: &GameTree, config: &SolverConfig) -> Result<Outcomes> {
    let mut table = Outcomes::new(tree.len());
    let root = tree.root().ok_or(Error::MissingNode { node: 0 })?;
    let outcome = score_node(tree, config.rule, root.id, &mut table)?;
    debug!(
        "evaluated {} positions from heap {} with {:?}: {:?}",
        tree.len(),
        root.heap,
        config.rule,
        outcome
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_tree::{build_heap_one_tree, build_heap_three_tree, build_stub_tree};

    #[test]
    fn test_heap_one_max_wins() {
        let tree = build_heap_one_tree();
        let outcomes = evaluate(&tree, &SolverConfig::default()).unwrap();
        assert_eq!(outcomes.get(1), Some(Outcome::MaxWins));
        assert_eq!(outcomes.root(), Some(Outcome::MaxWins));
        assert!(outcomes.max_wins());
    }

    #[test]
    fn test_every_node_scored() {
        let tree = build_heap_three_tree();
        let outcomes = evaluate(&tree, &SolverConfig::default()).unwrap();
        assert_eq!(outcomes.len(), tree.len());
        assert!(outcomes.is_complete());
    }

    #[test]
    fn test_terminals_scored_by_mover() {
        let tree = build_heap_three_tree();
        let outcomes = evaluate(&tree, &SolverConfig::default()).unwrap();
        for node in tree.nodes.iter().filter(|n| n.is_terminal()) {
            let parent = tree.get(node.parent.unwrap()).unwrap();
            assert_eq!(
                outcomes.get(node.id),
                Some(Outcome::last_bone_taken_by(parent.to_move)),
                "terminal {} scored against the wrong mover",
                node.id
            );
        }
    }

    #[test]
    fn test_always_max_ignores_side_to_move() {
        // Node 1 is min to move at heap 2: children heap 1 (max wins) and heap 0 (min wins).
        let tree = build_heap_three_tree();
        let outcomes = evaluate(&tree, &SolverConfig::default()).unwrap();
        assert_eq!(outcomes.get(1), Some(Outcome::MaxWins));
        assert_eq!(outcomes.best_child(1), Some(2));
    }

    #[test]
    fn test_alternating_min_picks_lowest() {
        let tree = build_heap_three_tree();
        let config = SolverConfig::with_rule(SelectionRule::Alternating);
        let outcomes = evaluate(&tree, &config).unwrap();
        assert_eq!(outcomes.get(1), Some(Outcome::MinWins));
        // Taking all three bones at once is max's only winning move.
        assert_eq!(outcomes.root(), Some(Outcome::MaxWins));
        assert_eq!(outcomes.best_line(&tree), vec![3, 0]);
    }

    #[test]
    fn test_ties_break_on_first_child() {
        let scored = [(4, Outcome::MaxWins), (5, Outcome::MaxWins), (6, Outcome::MinWins)];
        assert_eq!(
            SelectionRule::AlwaysMax.select(Player::Min, &scored),
            Some((4, Outcome::MaxWins))
        );
        let scored = [(4, Outcome::MaxWins), (5, Outcome::MinWins), (6, Outcome::MinWins)];
        assert_eq!(
            SelectionRule::Alternating.select(Player::Min, &scored),
            Some((5, Outcome::MinWins))
        );
        assert_eq!(SelectionRule::AlwaysMax.select(Player::Max, &[]), None);
    }

    #[test]
    fn test_empty_child_set_is_an_error() {
        let tree = build_stub_tree();
        let err = evaluate(&tree, &SolverConfig::default()).unwrap_err();
        assert_eq!(err, Error::EmptyChildSet { node: 1, heap: 2 });
    }

    #[test]
    fn test_terminal_root_is_an_error() {
        let mut tree = GameTree::new();
        tree.push(0, Player::Max, None);
        let err = evaluate(&tree, &SolverConfig::default()).unwrap_err();
        assert_eq!(err, Error::EmptyChildSet { node: 0, heap: 0 });
    }

    #[test]
    fn test_empty_tree_is_an_error() {
        let err = evaluate(&GameTree::new(), &SolverConfig::default()).unwrap_err();
        assert_eq!(err, Error::MissingNode { node: 0 });
    }

    #[test]
    fn test_evaluation_is_repeatable() {
        let tree = build_heap_three_tree();
        let first = evaluate(&tree, &SolverConfig::default()).unwrap();
        let second = evaluate(&tree, &SolverConfig::default()).unwrap();
        assert_eq!(first, second);
    }
}
