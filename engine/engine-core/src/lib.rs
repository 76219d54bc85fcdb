//! Core traits and types for the Playout search engine
//!
//! This crate provides the boundary between the search and the game being searched:
//! - `GameState`: The contract a position must satisfy to be searched
//! - `GameError`: Contract failures reported by a position
//! - `TwoPlayerRules`: Simple rules interface for alternating two-player games
//! - `RulesAdapter`: Automatic conversion from rules to the `GameState` contract

pub mod adapter;
pub mod board_game;
pub mod state;

// Re-export main types for convenience
pub use adapter::RulesAdapter;
pub use board_game::{Outcome, Player, TwoPlayerRules};
pub use state::{GameError, GameState};
