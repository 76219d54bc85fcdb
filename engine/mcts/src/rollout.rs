//! Rollout policies for the simulation phase.
//!
//! A rollout plays a position out to the end without touching the tree, so
//! memory stays bounded by the tree size no matter how many simulations run.
//! The default [`UniformRollout`] picks every move uniformly at random; a
//! heuristic policy can be swapped in through [`RolloutPolicy`] without
//! changing the search driver.

use engine_core::GameState;
use rand_chacha::ChaCha20Rng;

use crate::search::SearchError;

/// Trait for rollout policies.
pub trait RolloutPolicy<S: GameState> {
    /// Play `start` out to a terminal state.
    ///
    /// Works on its own copy; `start` is never modified.
    fn playout(&self, start: &S, rng: &mut ChaCha20Rng) -> Result<S, SearchError>;
}

/// Uniformly random playout to the end of the game.
#[derive(Debug, Clone, Default)]
pub struct UniformRollout {
    /// Maximum plies per rollout (0 = unlimited)
    pub max_plies: u32,
}

impl UniformRollout {
    pub fn new(max_plies: u32) -> Self {
        Self { max_plies }
    }
}

impl<S: GameState> RolloutPolicy<S> for UniformRollout {
    fn playout(&self, start: &S, rng: &mut ChaCha20Rng) -> Result<S, SearchError> {
        let mut state = start.clone();
        let mut plies = 0u32;

        while !state.is_terminal() {
            if self.max_plies > 0 && plies >= self.max_plies {
                return Err(SearchError::RolloutTooLong { plies });
            }
            state = state.random_successor(rng)?;
            plies += 1;
        }

        Ok(state)
    }
}
