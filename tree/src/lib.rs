//! bones Tree Builder - Game tree construction module
//!
//! This crate builds the complete Game of Bones tree for a starting heap and
//! hands it to the engine for evaluation. [`solve`] runs both steps.

use bones_engine::{evaluate, Error, GameTree, Heap, NodeId, Player, Result, SolverConfig};
use log::debug;
use rayon::prelude::*;

/// Bones a player may take in one move, in move order.
pub const TAKES: [Heap; 3] = [1, 2, 3];

/// Upper bound on positions reserved up front.
const PREALLOCATE_LIMIT: u64 = 1 << 20;

/// Heaps reachable in one move from `heap`, largest first.
pub fn expand_moves(heap: Heap) -> Vec<Heap> {
    TAKES.iter().filter_map(|&take| heap.checked_sub(take)).collect()
}

/// Number of positions in the tree for `heap`, saturating at `u64::MAX`.
pub fn tree_size(heap: Heap) -> u64 {
    // sizes[k] = positions in the subtree rooted at heap k
    let mut sizes: Vec<u64> = Vec::with_capacity(heap as usize + 1);
    for h in 0..=heap {
        let size = expand_moves(h)
            .into_iter()
            .fold(1u64, |acc, child| acc.saturating_add(sizes[child as usize]));
        sizes.push(size);
    }
    sizes[heap as usize]
}

/// Validate a caller-supplied starting heap.
pub fn validate_heap(heap: i64) -> Result<Heap> {
    Heap::try_from(heap).map_err(|_| Error::InvalidArgument { heap })
}

/// Build the complete game tree for `starting_heap`, max to move at the root.
pub fn build_tree(starting_heap: i64) -> Result<GameTree> {
    let heap = validate_heap(starting_heap)?;
    let capacity = tree_size(heap).min(PREALLOCATE_LIMIT) as usize;
    let mut tree = GameTree::with_capacity(capacity);
    let root = tree.push(heap, Player::Max, None);
    expand(&mut tree, root, heap, Player::Max);
    debug!("built tree for heap {}: {} positions", heap, tree.len());
    Ok(tree)
}

fn expand(tree: &mut GameTree, parent: NodeId, heap: Heap, to_move: Player) {
    let child_to_move = to_move.opponent();
    for child_heap in expand_moves(heap) {
        let child = tree.push(child_heap, child_to_move, Some(parent));
        if child_heap > 0 {
            expand(tree, child, child_heap, child_to_move);
        }
    }
}

/// Whether max forces a win from `starting_heap` under the default rule.
pub fn solve(starting_heap: i64) -> Result<bool> {
    solve_with(starting_heap, &SolverConfig::default())
}

/// Whether max forces a win from `starting_heap` under `config`.
pub fn solve_with(starting_heap: i64, config: &SolverConfig) -> Result<bool> {
    let tree = build_tree(starting_heap)?;
    Ok(evaluate(&tree, config)?.max_wins())
}

/// Solve independent heaps in parallel. Results keep the input order.
pub fn solve_many(heaps: &[i64], config: &SolverConfig) -> Vec<Result<bool>> {
    heaps.par_iter().map(|&heap| solve_with(heap, config)).collect()
}
