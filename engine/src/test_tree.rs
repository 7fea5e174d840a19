//! Hand-built trees for evaluator tests
//!
//! Nodes are pushed in the same depth-first order the tree builder uses, so
//! ids here match what `bones_tree::build_tree` produces for the same heap.
//!
//! Heap-3 tree:
//!   0: heap 3  Max  [→ 1, → 5, → 7]
//!   1: heap 2  Min  [→ 2, → 4]
//!   2: heap 1  Max  [→ 3]
//!   3: heap 0  Min  terminal, max took the last bone
//!   4: heap 0  Max  terminal, min took the last bone
//!   5: heap 1  Min  [→ 6]
//!   6: heap 0  Max  terminal, min took the last bone
//!   7: heap 0  Min  terminal, max took the last bone

use crate::node::{GameTree, Player};

/// Root heap 1 with a single terminal child.
pub fn build_heap_one_tree() -> GameTree {
    let mut tree = GameTree::with_capacity(2);
    let root = tree.push(1, Player::Max, None);
    tree.push(0, Player::Min, Some(root));
    tree
}

/// The complete 8-node tree for heap 3.
pub fn build_heap_three_tree() -> GameTree {
    let mut tree = GameTree::with_capacity(8);
    let root = tree.push(3, Player::Max, None);

    let two = tree.push(2, Player::Min, Some(root));
    let one = tree.push(1, Player::Max, Some(two));
    tree.push(0, Player::Min, Some(one));
    tree.push(0, Player::Max, Some(two));

    let one = tree.push(1, Player::Min, Some(root));
    tree.push(0, Player::Max, Some(one));

    tree.push(0, Player::Min, Some(root));
    tree
}

/// A malformed tree: node 1 has bones left but no moves.
pub fn build_stub_tree() -> GameTree {
    let mut tree = GameTree::with_capacity(2);
    let root = tree.push(3, Player::Max, None);
    tree.push(2, Player::Min, Some(root));
    tree
}
