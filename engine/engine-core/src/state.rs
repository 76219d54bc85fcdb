//! The position contract consumed by the search engine.
//!
//! The search never looks inside a position. Everything it needs from the
//! game is expressed by [`GameState`]: whether the game is over, what the
//! legal continuations are, how to play a random move, and who won.

use rand_chacha::ChaCha20Rng;

/// Errors reported by a position that was asked for something it cannot provide.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Outcome requested on a position that is not terminal")]
    NotTerminal,

    #[error("Illegal operation: {0}")]
    IllegalOperation(String),
}

/// A searchable position in a two-player, zero-sum, perfect-information game.
///
/// Implementations must be cheap to clone relative to the cost of a rollout;
/// the engine clones a state for every child it creates and for every
/// rollout it runs, so that no branch can ever mutate another branch or the
/// live game. Prefer structural sharing over deep copies for large boards.
///
/// # Ply numbering
///
/// Plies are counted from the position a search session was created with
/// (the *origin*). Ply `k` is the `k`-th move played after the origin, so ply
/// 1 is made by the player to move at the origin, ply 2 by the opponent, and
/// so on. Ply 0 refers to the move that produced the origin, made by the
/// opponent of the origin's player to move.
///
/// A session re-anchors its root with [`rebase`](Self::rebase) before
/// searching, so a state reached by playing moves counts plies from itself.
pub trait GameState: Clone + std::fmt::Debug {
    /// Move type. Treated as an opaque label by the search.
    type Move: Clone + PartialEq + std::fmt::Debug;

    /// True iff no further moves exist for either player.
    fn is_terminal(&self) -> bool;

    /// All legal continuations for the player to move, paired with the move
    /// that produces them.
    ///
    /// Must be non-empty whenever [`is_terminal`](Self::is_terminal) is false.
    /// The search reports an empty list on a non-terminal state as a contract
    /// violation rather than treating the position as finished.
    fn successors(&self) -> Vec<(Self, Self::Move)>;

    /// Play one uniformly random legal move and return the resulting position.
    ///
    /// Fails with [`GameError::IllegalOperation`] on a terminal state.
    fn random_successor(&self, rng: &mut ChaCha20Rng) -> Result<Self, GameError>;

    /// Whether the player who made ply `ply` won this finished game.
    ///
    /// A drawn game is a win for nobody. Fails with [`GameError::NotTerminal`]
    /// when the game is still in progress.
    fn outcome(&self, ply: u32) -> Result<bool, GameError>;

    /// Make this position the ply origin for itself and its successors.
    ///
    /// States whose `outcome` does not depend on where counting started can
    /// keep the default, which does nothing.
    fn rebase(&mut self) {}
}
