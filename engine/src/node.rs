//! Node definitions for the game tree
//!
//! This module defines the positions of the Game of Bones tree. Positions are
//! immutable once built; evaluation results are stored separately in an
//! [`crate::minimax::Outcomes`] table indexed by [`NodeId`].

/// Side to move at a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// The player whose forced result is reported (moves first)
    Max,
    /// The opposing player
    Min,
}

impl Player {
    /// Get the opponent of this player
    pub fn opponent(self) -> Player {
        match self {
            Player::Max => Player::Min,
            Player::Min => Player::Max,
        }
    }

    pub fn is_max(self) -> bool {
        self == Player::Max
    }
}

/// Forced result of a position, always from the max player's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    MinWins = -1,
    MaxWins = 1,
}

impl Outcome {
    /// Outcome of a terminal position reached by a move made by `mover`.
    ///
    /// Whoever takes the last bone wins.
    pub fn last_bone_taken_by(mover: Player) -> Outcome {
        match mover {
            Player::Max => Outcome::MaxWins,
            Player::Min => Outcome::MinWins,
        }
    }

    /// Signed score: +1 when max wins, -1 when min wins
    pub fn score(self) -> i8 {
        self as i8
    }
}

/// Number of bones left in the heap
pub type Heap = u32;

/// Node ID type (index into flat array storage)
pub type NodeId = u32;

/// One reachable game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Unique identifier for this node (index in flat array)
    pub id: NodeId,
    /// Bones remaining
    pub heap: Heap,
    /// Player on move
    pub to_move: Player,
    /// Parent node ID (None for root)
    pub parent: Option<NodeId>,
    /// Child node IDs, one per legal move, in move order
    pub children: Vec<NodeId>,
}

impl Position {
    /// A terminal position has no bones left
    pub fn is_terminal(&self) -> bool {
        self.heap == 0
    }
}

/// Game tree wrapper
///
/// Contains a flat array of positions; the root is always node 0.
#[derive(Debug, Clone, Default)]
pub struct GameTree {
    /// Flat array of positions indexed by NodeId
    pub nodes: Vec<Position>,
}

impl GameTree {
    /// Create a new empty game tree
    pub fn new() -> Self {
        GameTree { nodes: Vec::new() }
    }

    /// Create an empty tree with room for `capacity` positions
    pub fn with_capacity(capacity: usize) -> Self {
        GameTree {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Append a position under `parent` and return its id.
    ///
    /// The new id is registered in the parent's child list, so every node is
    /// owned by exactly one parent.
    pub fn push(&mut self, heap: Heap, to_move: Player, parent: Option<NodeId>) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(Position {
            id,
            heap,
            to_move,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent.and_then(|p| self.nodes.get_mut(p as usize)) {
            parent.children.push(id);
        }
        id
    }

    /// The root position, if the tree is non-empty
    pub fn root(&self) -> Option<&Position> {
        self.nodes.first()
    }

    /// Get a position by ID
    pub fn get(&self, id: NodeId) -> Option<&Position> {
        self.nodes.get(id as usize)
    }

    /// Get the number of positions
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Shortest and longest root-to-terminal path length, in moves.
    pub fn depth_range(&self) -> Option<(usize, usize)> {
        let root = self.root()?;
        let mut range: Option<(usize, usize)> = None;
        let mut stack = vec![(root.id, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = self.get(id)?;
            if node.children.is_empty() {
                range = Some(match range {
                    None => (depth, depth),
                    Some((lo, hi)) => (lo.min(depth), hi.max(depth)),
                });
            }
            stack.extend(node.children.iter().map(|&c| (c, depth + 1)));
        }
        range
    }
}
