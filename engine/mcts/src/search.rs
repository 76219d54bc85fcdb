//! MCTS search implementation.
//!
//! Implements the core UCT algorithm:
//! 1. Selection: Traverse tree using UCT to find a leaf
//! 2. Expansion: Sample up to K successors of the leaf as new children
//! 3. Simulation: Play a random game out from the first new child
//! 4. Backpropagation: Update win/visit counts along the path
//!
//! An iteration only mutates the tree once the rollout has succeeded, so a
//! failed iteration leaves every node exactly as it was.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use engine_core::{GameError, GameState};
use rand::seq::index;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::MctsConfig;
use crate::node::NodeId;
use crate::rollout::{RolloutPolicy, UniformRollout};
use crate::tree::MctsTree;

/// Errors that can occur during MCTS search.
///
/// A game that breaks the [`GameState`] contract, including a non-terminal
/// state without successors, is reported as [`SearchError::Game`]. Misuse of
/// the search itself is [`SearchError::IllegalOperation`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("Illegal operation: {0}")]
    IllegalOperation(String),

    #[error("No search iteration has completed on this tree")]
    SearchNotRun,

    #[error("Root has no children")]
    EmptyTree,

    #[error("Rollout aborted after {plies} plies")]
    RolloutTooLong { plies: u32 },
}

/// A root move with the statistics it was ranked by.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMove<M> {
    pub mv: M,
    pub simulations: u32,
    pub wins: u32,
}

/// Statistics about a single `run` call.
#[derive(Debug, Clone)]
pub struct SearchStats {
    /// Iterations completed by this call
    pub iterations: u32,
    /// Nodes added to the tree by this call
    pub nodes_created: usize,
    pub elapsed: Duration,
    /// True if the time limit or the stop flag ended the run early
    pub interrupted: bool,
}

/// Result of an MCTS search.
#[derive(Debug, Clone)]
pub struct SearchResult<M> {
    /// Most simulated root move
    pub best_move: M,

    /// All root moves, most simulated first
    pub ranked: Vec<RankedMove<M>>,

    /// Simulations recorded at the root
    pub simulations: u32,

    pub stats: SearchStats,
}

/// MCTS search session.
///
/// Owns the tree for one position. Between searches the session can follow
/// the real game with [`advance`](Self::advance).
pub struct MctsSearch<S: GameState, P = UniformRollout> {
    tree: MctsTree<S>,
    config: MctsConfig,
    policy: P,
    /// Real moves played since the position the session was created with
    ply_offset: u32,
    stop: Arc<AtomicBool>,
}

impl<S: GameState> MctsSearch<S, UniformRollout> {
    /// Create a new search session with the default configuration.
    pub fn new(state: S) -> Self {
        Self::with_config(state, MctsConfig::default())
    }

    /// Create a new search session with the given configuration.
    ///
    /// `state` becomes the ply origin, wherever it came from.
    pub fn with_config(mut state: S, config: MctsConfig) -> Self {
        state.rebase();
        Self {
            tree: MctsTree::new(state),
            policy: UniformRollout::new(config.max_rollout_plies),
            config,
            ply_offset: 0,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl<S: GameState, P: RolloutPolicy<S>> MctsSearch<S, P> {
    /// Replace the rollout policy.
    pub fn with_rollout_policy<Q: RolloutPolicy<S>>(self, policy: Q) -> MctsSearch<S, Q> {
        MctsSearch {
            tree: self.tree,
            config: self.config,
            policy,
            ply_offset: self.ply_offset,
            stop: self.stop,
        }
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Get the search tree (for inspection/debugging).
    pub fn tree(&self) -> &MctsTree<S> {
        &self.tree
    }

    pub fn ply_offset(&self) -> u32 {
        self.ply_offset
    }

    /// Shared flag that stops a running search after the current iteration.
    ///
    /// The flag is never reset by the search; clear it before reusing it.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Run the configured number of simulations.
    pub fn search(&mut self, rng: &mut ChaCha20Rng) -> Result<SearchStats, SearchError> {
        self.run(self.config.num_simulations, self.config.max_children, rng)
    }

    /// Run up to `n_simulations` iterations, expanding at most `max_children`
    /// children per leaf.
    ///
    /// The time limit and stop flag are checked between iterations. The first
    /// failing iteration aborts the run; iterations completed before it stay
    /// recorded in the tree.
    pub fn run(
        &mut self,
        n_simulations: u32,
        max_children: usize,
        rng: &mut ChaCha20Rng,
    ) -> Result<SearchStats, SearchError> {
        self.config
            .clone()
            .with_max_children(max_children)
            .validate()?;

        let start = Instant::now();
        let nodes_before = self.tree.len();
        let mut iterations = 0u32;
        let mut interrupted = false;

        while iterations < n_simulations {
            if self.stop.load(Ordering::Relaxed) {
                interrupted = true;
                break;
            }
            if let Some(limit) = self.config.time_limit {
                if start.elapsed() >= limit {
                    interrupted = true;
                    break;
                }
            }

            self.iterate(max_children, rng)?;
            iterations += 1;

            if self.config.log_interval > 0 && iterations % self.config.log_interval == 0 {
                let root = self.tree.get(self.tree.root());
                debug!(
                    iterations,
                    total = n_simulations,
                    nodes = self.tree.len(),
                    root_win_rate = root.win_rate(),
                    "MCTS progress"
                );
            }
        }

        let stats = SearchStats {
            iterations,
            nodes_created: self.tree.len() - nodes_before,
            elapsed: start.elapsed(),
            interrupted,
        };

        debug!(
            iterations = stats.iterations,
            nodes = self.tree.len(),
            elapsed_ms = stats.elapsed.as_millis() as u64,
            interrupted,
            "MCTS search complete"
        );

        Ok(stats)
    }

    /// Run one select -> expand -> simulate -> backpropagate iteration.
    fn iterate(&mut self, max_children: usize, rng: &mut ChaCha20Rng) -> Result<(), SearchError> {
        let leaf_id = self.select(rng)?;
        let expansion = self.expand(leaf_id, max_children, rng)?;

        let leaf = self.tree.get(leaf_id);
        let (rollout_start, level) = match expansion.first() {
            Some((state, _)) => (state, leaf.node_level + 1),
            None => (&leaf.state, leaf.node_level),
        };
        let terminal = self.policy.playout(rollout_start, rng)?;
        let win = terminal.outcome(level + self.ply_offset)?;

        let expanded = expansion.len();
        let mut simulated = leaf_id;
        for (i, (state, mv)) in expansion.into_iter().enumerate() {
            let child_id = self.tree.add_child(leaf_id, state, mv);
            if i == 0 {
                simulated = child_id;
            }
        }
        self.tree.record_result(simulated, win);

        trace!(
            leaf = leaf_id.0,
            simulated = simulated.0,
            level,
            expanded,
            win,
            "MCTS iteration complete"
        );

        Ok(())
    }

    /// Select a leaf node by traversing the tree using UCT.
    fn select(&self, rng: &mut ChaCha20Rng) -> Result<NodeId, SearchError> {
        let mut current = self.tree.root();
        while let Some(child_id) = self
            .tree
            .select_child(current, self.config.exploration, rng)?
        {
            current = child_id;
        }
        Ok(current)
    }

    /// Sample up to `max_children` successors of a leaf, in sampled order.
    ///
    /// Nothing is attached to the tree here. A terminal leaf yields no
    /// candidates.
    fn expand(
        &self,
        leaf_id: NodeId,
        max_children: usize,
        rng: &mut ChaCha20Rng,
    ) -> Result<Vec<(S, S::Move)>, SearchError> {
        let leaf = self.tree.get(leaf_id);
        if leaf.state.is_terminal() {
            return Ok(Vec::new());
        }

        let successors = leaf.state.successors();
        if successors.is_empty() {
            return Err(GameError::IllegalOperation(format!(
                "non-terminal state at level {} has no successors",
                leaf.node_level
            ))
            .into());
        }

        let amount = max_children.min(successors.len());
        let picked = index::sample(rng, successors.len(), amount);
        let mut slots: Vec<Option<(S, S::Move)>> = successors.into_iter().map(Some).collect();

        Ok(picked
            .into_iter()
            .filter_map(|i| slots[i].take())
            .collect())
    }

    /// The most simulated root move.
    pub fn recommended_move(&self) -> Result<S::Move, SearchError> {
        let root_id = self.tree.root();
        if self.tree.get(root_id).simulations == 0 {
            return Err(SearchError::SearchNotRun);
        }

        let best = self.tree.best_child(root_id).ok_or(SearchError::EmptyTree)?;
        self.tree.get(best).incoming_move.clone().ok_or_else(|| {
            SearchError::IllegalOperation("root child without an incoming move".to_string())
        })
    }

    /// Root moves by descending simulations, ties in insertion order.
    pub fn ranked_moves(&self) -> Vec<RankedMove<S::Move>> {
        self.tree
            .rank_children(self.tree.root())
            .into_iter()
            .filter_map(|id| {
                let node = self.tree.get(id);
                node.incoming_move.clone().map(|mv| RankedMove {
                    mv,
                    simulations: node.simulations,
                    wins: node.wins,
                })
            })
            .collect()
    }

    /// Expected line of play from the root.
    pub fn principal_variation(&self) -> Vec<S::Move> {
        self.tree.principal_variation()
    }

    /// Follow a real move played from the root position.
    ///
    /// With tree reuse enabled and `mv` already explored, its subtree becomes
    /// the new tree. Otherwise the session restarts from the successor
    /// reached by `mv`.
    pub fn advance(&mut self, mv: &S::Move) -> Result<(), SearchError> {
        let root_id = self.tree.root();
        let explored = if self.config.reuse_tree {
            self.tree.child_by_move(root_id, mv)
        } else {
            None
        };

        let reused = explored.is_some();
        match explored {
            Some(child_id) => self.tree.retain_subtree(child_id),
            None => {
                let next = self
                    .tree
                    .get(root_id)
                    .state
                    .successors()
                    .into_iter()
                    .find(|(_, m)| m == mv)
                    .map(|(state, _)| state)
                    .ok_or_else(|| {
                        SearchError::IllegalOperation(format!(
                            "move {:?} is not legal at the root",
                            mv
                        ))
                    })?;
                self.tree = MctsTree::new(next);
            }
        }

        self.ply_offset += 1;

        debug!(
            ?mv,
            reused,
            kept_nodes = self.tree.len(),
            root_simulations = self.tree.get(self.tree.root()).simulations,
            ply_offset = self.ply_offset,
            "MCTS advanced root"
        );

        Ok(())
    }
}

/// Convenience function to run a single MCTS search.
pub fn run_mcts<S: GameState>(
    state: S,
    config: &MctsConfig,
    rng: &mut ChaCha20Rng,
) -> Result<SearchResult<S::Move>, SearchError> {
    let mut search = MctsSearch::with_config(state, config.clone());
    let stats = search.search(rng)?;
    let best_move = search.recommended_move()?;

    Ok(SearchResult {
        best_move,
        ranked: search.ranked_moves(),
        simulations: search.tree.get(search.tree.root()).simulations,
        stats,
    })
}
