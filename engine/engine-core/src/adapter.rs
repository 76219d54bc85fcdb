//! Adapter layer converting two-player rules to the search contract
//!
//! This module provides the `RulesAdapter` struct that turns any
//! [`TwoPlayerRules`] implementation into a [`GameState`], handling
//! successor generation, random move selection and the mapping from ply
//! numbers to players.

use rand::seq::SliceRandom;
use rand_chacha::ChaCha20Rng;

use crate::board_game::{Outcome, Player, TwoPlayerRules};
use crate::state::{GameError, GameState};

/// Adapter that makes a rules implementation searchable.
///
/// The adapter remembers which player was to move when it was created (the
/// origin). Every successor inherits that origin, so `outcome(ply)` always
/// counts plies from the same position regardless of how deep the state is.
/// [`GameState::rebase`] moves the origin to the current position.
///
/// # Example
///
/// ```rust
/// # use engine_core::{GameState, Outcome, Player, RulesAdapter, TwoPlayerRules};
/// #
/// # #[derive(Debug, Clone)]
/// # struct Coin { to_move: Player, winner: Option<Player> }
/// # impl TwoPlayerRules for Coin {
/// #     type Move = bool;
/// #     fn to_move(&self) -> Player { self.to_move }
/// #     fn legal_moves(&self) -> Vec<bool> {
/// #         if self.winner.is_some() { vec![] } else { vec![true, false] }
/// #     }
/// #     fn play(&mut self, mv: &bool) {
/// #         self.winner = Some(if *mv { self.to_move } else { self.to_move.opponent() });
/// #         self.to_move = self.to_move.opponent();
/// #     }
/// #     fn outcome(&self) -> Option<Outcome> { self.winner.map(Outcome::Winner) }
/// # }
/// let state = RulesAdapter::new(Coin { to_move: Player::First, winner: None });
/// assert!(!state.is_terminal());
///
/// let (next, mv) = state.successors().into_iter().next().unwrap();
/// assert!(mv);
/// // Ply 1 was made by the first player, who won by playing `true`.
/// assert_eq!(next.outcome(1), Ok(true));
/// ```
#[derive(Debug, Clone)]
pub struct RulesAdapter<G: TwoPlayerRules> {
    game: G,
    origin: Player,
}

impl<G: TwoPlayerRules> RulesAdapter<G> {
    /// Create a new adapter; the current position becomes the ply origin.
    pub fn new(game: G) -> Self {
        let origin = game.to_move();
        Self { game, origin }
    }

    /// Get a reference to the underlying game
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Consume the adapter and return the underlying game
    pub fn into_inner(self) -> G {
        self.game
    }

    /// Player to move at the origin position
    pub fn origin(&self) -> Player {
        self.origin
    }

    /// Player who made ply `ply`, counted from the origin.
    pub fn mover_of(&self, ply: u32) -> Player {
        if ply % 2 == 1 {
            self.origin
        } else {
            self.origin.opponent()
        }
    }

    fn with_move(&self, mv: &G::Move) -> Self {
        let mut next = self.clone();
        next.game.play(mv);
        next
    }
}

impl<G: TwoPlayerRules> GameState for RulesAdapter<G> {
    type Move = G::Move;

    fn is_terminal(&self) -> bool {
        self.game.outcome().is_some()
    }

    fn successors(&self) -> Vec<(Self, Self::Move)> {
        if self.is_terminal() {
            return Vec::new();
        }

        self.game
            .legal_moves()
            .into_iter()
            .map(|mv| (self.with_move(&mv), mv))
            .collect()
    }

    fn random_successor(&self, rng: &mut ChaCha20Rng) -> Result<Self, GameError> {
        if self.is_terminal() {
            return Err(GameError::IllegalOperation(
                "random move requested on a terminal state".to_string(),
            ));
        }

        let moves = self.game.legal_moves();
        let mv = moves.choose(rng).ok_or_else(|| {
            GameError::IllegalOperation("no legal moves on a non-terminal state".to_string())
        })?;

        Ok(self.with_move(mv))
    }

    fn outcome(&self, ply: u32) -> Result<bool, GameError> {
        match self.game.outcome() {
            None => Err(GameError::NotTerminal),
            Some(Outcome::Draw) => Ok(false),
            Some(Outcome::Winner(winner)) => Ok(winner == self.mover_of(ply)),
        }
    }

    fn rebase(&mut self) {
        self.origin = self.game.to_move();
    }
}
