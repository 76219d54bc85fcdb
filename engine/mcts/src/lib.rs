//! Monte Carlo Tree Search (MCTS) with UCT selection and random rollouts.
//!
//! This crate provides a game-agnostic MCTS implementation that works with any
//! game implementing the `engine-core` [`GameState`](engine_core::GameState)
//! trait. No evaluation function is needed: positions are judged by playing
//! them out at random.
//!
//! # Overview
//!
//! Each iteration consists of four phases:
//!
//! 1. **Selection**: Traverse the tree using UCT (Upper Confidence bound
//!    applied to Trees) to balance exploration and exploitation
//! 2. **Expansion**: When reaching a non-terminal leaf, add up to K randomly
//!    sampled successors as children
//! 3. **Simulation**: Play a random game out from the first new child
//! 4. **Backpropagation**: Update win and visit counts from that child up to
//!    the root, flipping the point of view at every ply
//!
//! # Usage
//!
//! ```rust
//! use games_tictactoe::{State, TicTacToe};
//! use mcts::{run_mcts, MctsConfig};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let state = TicTacToe::new(State::from_moves(&[0, 3, 1, 4]));
//! let config = MctsConfig::for_testing().with_simulations(500);
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let result = run_mcts(state, &config, &mut rng).unwrap();
//!
//! assert_eq!(result.simulations, 500);
//! println!("Best move: {}", result.best_move);
//! ```
//!
//! # Configuration
//!
//! The [`MctsConfig`] struct controls search behavior:
//!
//! - `num_simulations`: Number of iterations per search (default: 1000)
//! - `max_children`: Children sampled per expansion (default: 100)
//! - `exploration`: UCT constant C (default: sqrt(2))
//! - `time_limit`: Optional wall-clock budget
//! - `reuse_tree`: Keep the played subtree in [`MctsSearch::advance`]
//!
//! # Architecture
//!
//! ```text
//! +-------------------------------------------------------+
//! |                      MctsSearch                       |
//! +-------------------------------------------------------+
//! |  +-------------+  +-------------+  +---------------+  |
//! |  |  MctsTree   |  |  GameState  |  | RolloutPolicy |  |
//! |  |  (arena)    |  | (game sim)  |  |  (playouts)   |  |
//! |  +------+------+  +------+------+  +-------+-------+  |
//! |         |                |                 |          |
//! |         v                v                 v          |
//! |  +-------------------------------------------------+  |
//! |  |     select -> expand -> simulate -> backprop    |  |
//! |  +-------------------------------------------------+  |
//! +-------------------------------------------------------+
//! ```

pub mod config;
pub mod node;
pub mod rollout;
pub mod search;
pub mod tree;
pub mod uct;

#[cfg(test)]
mod testing;

// Re-export main types
pub use config::MctsConfig;
pub use node::{MctsNode, NodeId};
pub use rollout::{RolloutPolicy, UniformRollout};
pub use search::{run_mcts, MctsSearch, RankedMove, SearchError, SearchResult, SearchStats};
pub use tree::{MctsTree, TreeStats};
pub use uct::{uct_score, DEFAULT_EXPLORATION};
