//! MCTS tree node representation.
//!
//! Each node represents a game state reached by playing a move from the parent.
//! Nodes store the win/visit statistics used for UCT selection and for the
//! final move ranking.

use engine_core::GameState;

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_some(self) -> bool {
        !self.is_none()
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the MCTS tree.
#[derive(Debug, Clone)]
pub struct MctsNode<S: GameState> {
    /// Parent node index (NONE for root)
    pub parent: NodeId,

    /// Move that led to this node from parent (None for root)
    pub incoming_move: Option<S::Move>,

    /// Game position at this node, owned exclusively by the node
    pub state: S,

    /// Rollouts through this node won by the player who made `incoming_move`
    pub wins: u32,

    /// Number of rollouts backpropagated through this node
    pub simulations: u32,

    /// Ply depth from the root (root = 0)
    pub node_level: u32,

    /// Children in insertion order. Empty until the node is expanded.
    pub children: Vec<NodeId>,
}

impl<S: GameState> MctsNode<S> {
    /// Create a new root node.
    pub fn new_root(state: S) -> Self {
        Self {
            parent: NodeId::NONE,
            incoming_move: None,
            state,
            wins: 0,
            simulations: 0,
            node_level: 0,
            children: Vec::new(),
        }
    }

    /// Create a detached child node. Parent link and level are set when the
    /// node is attached with [`MctsTree::add_child`](crate::MctsTree::add_child).
    pub fn new_child(state: S, incoming_move: S::Move) -> Self {
        Self {
            incoming_move: Some(incoming_move),
            ..Self::new_root(state)
        }
    }

    /// Fraction of rollouts won, 0.0 if never visited.
    #[inline]
    pub fn win_rate(&self) -> f64 {
        if self.simulations == 0 {
            0.0
        } else {
            self.wins as f64 / self.simulations as f64
        }
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Check if this node has been expanded (has children).
    #[inline]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{forced_single_win, ScriptedGame};

    #[test]
    fn test_node_id_none() {
        assert!(NodeId::NONE.is_none());
        assert!(!NodeId::NONE.is_some());
        assert!(!NodeId(0).is_none());
        assert!(NodeId(0).is_some());
    }

    #[test]
    fn test_new_root() {
        let node = MctsNode::new_root(forced_single_win());

        assert!(node.is_root());
        assert!(node.incoming_move.is_none());
        assert_eq!(node.simulations, 0);
        assert_eq!(node.wins, 0);
        assert_eq!(node.node_level, 0);
        assert!(!node.is_expanded());
    }

    #[test]
    fn test_new_child_carries_move() {
        let node: MctsNode<ScriptedGame> = MctsNode::new_child(forced_single_win(), "win");
        assert_eq!(node.incoming_move, Some("win"));
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_win_rate() {
        let mut node = MctsNode::new_root(forced_single_win());

        // Unvisited
        assert!(node.win_rate().abs() < 1e-12);

        // After visits
        node.simulations = 4;
        node.wins = 3;
        assert!((node.win_rate() - 0.75).abs() < 1e-12);
    }
}
