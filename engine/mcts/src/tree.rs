//! MCTS tree structure with arena allocation.
//!
//! The tree uses arena allocation for efficient node storage and
//! cache-friendly traversal. Nodes are stored in a contiguous Vec
//! and referenced by NodeId indices; the parent link is a plain index,
//! so the tree owns no reference cycles.

use std::collections::VecDeque;

use engine_core::GameState;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;

use crate::node::{MctsNode, NodeId};
use crate::search::SearchError;
use crate::uct::uct_score;

/// MCTS tree with arena-based node storage.
#[derive(Debug, Clone)]
pub struct MctsTree<S: GameState> {
    /// Arena storing all nodes
    nodes: Vec<MctsNode<S>>,

    /// Root node index (always 0)
    root: NodeId,
}

impl<S: GameState> MctsTree<S> {
    /// Create a new tree rooted at the given state.
    pub fn new(root_state: S) -> Self {
        Self {
            nodes: vec![MctsNode::new_root(root_state)],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode<S> {
        &self.nodes[id.index()]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode<S> {
        &mut self.nodes[id.index()]
    }

    /// Get the total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the arena slice for read access.
    #[inline]
    pub fn arena(&self) -> &[MctsNode<S>] {
        &self.nodes
    }

    /// Attach a new child to `parent_id`.
    ///
    /// The child's parent link and level are derived from the parent; no
    /// other node is touched. Returns the new child's NodeId.
    pub fn add_child(&mut self, parent_id: NodeId, state: S, incoming_move: S::Move) -> NodeId {
        let mut child = MctsNode::new_child(state, incoming_move);
        child.parent = parent_id;
        child.node_level = self.get(parent_id).node_level + 1;

        let child_id = NodeId(self.nodes.len() as u32);
        self.nodes.push(child);
        self.get_mut(parent_id).children.push(child_id);

        child_id
    }

    /// Record a rollout result at `leaf_id` and every ancestor.
    ///
    /// `win` is from the perspective of the player who moved into the leaf.
    /// Consecutive plies belong to opposite players, so the flag flips at
    /// each level on the way up.
    pub fn record_result(&mut self, leaf_id: NodeId, win: bool) {
        let mut current_id = leaf_id;
        let mut current_win = win;

        while current_id.is_some() {
            let node = self.get_mut(current_id);
            node.simulations += 1;
            if current_win {
                node.wins += 1;
            }

            current_win = !current_win;
            current_id = node.parent;
        }
    }

    /// Children of `node_id` by descending simulations.
    ///
    /// Ties keep insertion order. Visit count rather than win rate is the
    /// ranking signal: a lightly sampled child with a lucky win rate does not
    /// outrank a thoroughly sampled one.
    pub fn rank_children(&self, node_id: NodeId) -> Vec<NodeId> {
        let mut ranked = self.get(node_id).children.clone();
        ranked.sort_by_key(|id| std::cmp::Reverse(self.get(*id).simulations));
        ranked
    }

    /// Highest ranked child of `node_id`, if any.
    pub fn best_child(&self, node_id: NodeId) -> Option<NodeId> {
        self.rank_children(node_id).first().copied()
    }

    /// UCT score of a non-root node against its parent.
    pub fn score(&self, node_id: NodeId, exploration: f64) -> Result<f64, SearchError> {
        let node = self.get(node_id);
        if node.is_root() {
            return Err(SearchError::IllegalOperation(
                "UCT score requested for the root node".to_string(),
            ));
        }

        let parent = self.get(node.parent);
        Ok(uct_score(
            node.wins,
            node.simulations,
            parent.simulations,
            exploration,
        ))
    }

    /// Select the child of `node_id` with the highest UCT score.
    ///
    /// Children are shuffled before a strict-greater scan so equal scores are
    /// broken uniformly at random. Returns `None` for a node without children.
    pub fn select_child(
        &self,
        node_id: NodeId,
        exploration: f64,
        rng: &mut ChaCha20Rng,
    ) -> Result<Option<NodeId>, SearchError> {
        let node = self.get(node_id);
        if node.children.is_empty() {
            return Ok(None);
        }

        let mut candidates = node.children.clone();
        candidates.shuffle(rng);

        let mut best: Option<(NodeId, f64)> = None;
        for child_id in candidates {
            let score = self.score(child_id, exploration)?;
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((child_id, score));
            }
        }

        Ok(best.map(|(id, _)| id))
    }

    /// Child of `node_id` reached by `mv`, if it has been created.
    pub fn child_by_move(&self, node_id: NodeId, mv: &S::Move) -> Option<NodeId> {
        self.get(node_id)
            .children
            .iter()
            .copied()
            .find(|id| self.get(*id).incoming_move.as_ref() == Some(mv))
    }

    /// Moves leading from the root to `node_id`.
    pub fn line_to(&self, node_id: NodeId) -> Vec<S::Move> {
        let mut line = Vec::new();
        let mut current_id = node_id;

        while current_id.is_some() {
            let node = self.get(current_id);
            if let Some(mv) = &node.incoming_move {
                line.push(mv.clone());
            }
            current_id = node.parent;
        }

        line.reverse();
        line
    }

    /// Follow the best child from the root until a leaf.
    pub fn principal_variation(&self) -> Vec<S::Move> {
        let mut current_id = self.root;
        while let Some(child_id) = self.best_child(current_id) {
            current_id = child_id;
        }
        self.line_to(current_id)
    }

    /// Make `new_root` the root, discarding everything outside its subtree.
    ///
    /// Statistics of the kept nodes are preserved. Ids are reassigned
    /// breadth-first so the new root is `NodeId(0)`, children keep their
    /// insertion order, and levels are renumbered from 0.
    pub fn retain_subtree(&mut self, new_root: NodeId) {
        let base_level = self.get(new_root).node_level;
        let mut slots: Vec<Option<MctsNode<S>>> =
            std::mem::take(&mut self.nodes).into_iter().map(Some).collect();

        let mut queue = VecDeque::from([(new_root, NodeId::NONE)]);
        while let Some((old_id, new_parent)) = queue.pop_front() {
            let Some(mut node) = slots[old_id.index()].take() else {
                continue;
            };

            let new_id = NodeId(self.nodes.len() as u32);
            let old_children = std::mem::take(&mut node.children);
            node.parent = new_parent;
            node.node_level -= base_level;
            if new_parent.is_none() {
                node.incoming_move = None;
            }
            self.nodes.push(node);

            if new_parent.is_some() {
                self.get_mut(new_parent).children.push(new_id);
            }
            queue.extend(old_children.into_iter().map(|child| (child, new_id)));
        }

        self.root = NodeId(0);
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root);
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root.simulations,
            root_wins: root.wins,
            max_depth: self
                .nodes
                .iter()
                .map(|node| node.node_level)
                .max()
                .unwrap_or(0),
        }
    }
}

/// Statistics about an MCTS tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub root_wins: u32,
    pub max_depth: u32,
}
