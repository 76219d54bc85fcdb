//! Shared types for alternating two-player games.
//!
//! Most board games are easier to describe as "whose turn is it, what can
//! they play, who won" than through the full [`GameState`](crate::GameState)
//! contract. [`TwoPlayerRules`] captures that shape; wrap an implementation in
//! [`RulesAdapter`](crate::RulesAdapter) to make it searchable.

/// One of the two sides of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// The other side.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// Rules of a two-player game in which the players strictly alternate.
///
/// A pass, where the game allows one, must be modelled as a move so that the
/// alternation holds.
pub trait TwoPlayerRules: Clone + std::fmt::Debug {
    /// Move type
    type Move: Clone + PartialEq + std::fmt::Debug;

    /// Player whose turn it is
    fn to_move(&self) -> Player;

    /// Legal moves for the player to move. Empty once the game is over.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Apply a legal move in place
    fn play(&mut self, mv: &Self::Move);

    /// `Some` once the game is over
    fn outcome(&self) -> Option<Outcome>;
}
