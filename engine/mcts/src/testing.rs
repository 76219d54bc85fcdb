//! Game fixtures for the search tests.
//!
//! [`Scripted`] walks an explicit game tree given as a table, which makes it
//! easy to build positions with a known best move. [`Stuck`] and [`Endless`]
//! break the contract on purpose.

use std::rc::Rc;

use engine_core::{GameError, GameState, Outcome, Player, RulesAdapter, TwoPlayerRules};
use rand_chacha::ChaCha20Rng;

/// One position of a scripted game. A position without moves is terminal.
#[derive(Debug)]
pub struct Position {
    pub moves: Vec<(&'static str, usize)>,
    pub winner: Option<Player>,
}

impl Position {
    pub fn inner(moves: Vec<(&'static str, usize)>) -> Self {
        Self {
            moves,
            winner: None,
        }
    }

    pub fn terminal(winner: Option<Player>) -> Self {
        Self {
            moves: Vec::new(),
            winner,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Scripted {
    table: Rc<Vec<Position>>,
    at: usize,
    to_move: Player,
}

impl Scripted {
    pub fn new(table: Vec<Position>) -> Self {
        Self {
            table: Rc::new(table),
            at: 0,
            to_move: Player::First,
        }
    }
}

impl TwoPlayerRules for Scripted {
    type Move = &'static str;

    fn to_move(&self) -> Player {
        self.to_move
    }

    fn legal_moves(&self) -> Vec<&'static str> {
        self.table[self.at].moves.iter().map(|(mv, _)| *mv).collect()
    }

    fn play(&mut self, mv: &&'static str) {
        if let Some((_, next)) = self.table[self.at].moves.iter().find(|(m, _)| m == mv) {
            self.at = *next;
            self.to_move = self.to_move.opponent();
        }
    }

    fn outcome(&self) -> Option<Outcome> {
        let position = &self.table[self.at];
        if !position.moves.is_empty() {
            return None;
        }
        Some(position.winner.map_or(Outcome::Draw, Outcome::Winner))
    }
}

pub type ScriptedGame = RulesAdapter<Scripted>;

/// The root is already over.
pub fn terminal_root() -> ScriptedGame {
    RulesAdapter::new(Scripted::new(vec![Position::terminal(None)]))
}

/// A single move that wins on the spot for the player to move.
pub fn forced_single_win() -> ScriptedGame {
    RulesAdapter::new(Scripted::new(vec![
        Position::inner(vec![("win", 1)]),
        Position::terminal(Some(Player::First)),
    ]))
}

/// "good" leads to a forced win next ply, "bad" to a forced loss.
pub fn win_or_lose() -> ScriptedGame {
    RulesAdapter::new(Scripted::new(vec![
        Position::inner(vec![("good", 1), ("bad", 2)]),
        Position::inner(vec![("reply", 3)]),
        Position::inner(vec![("reply", 4)]),
        Position::terminal(Some(Player::First)),
        Position::terminal(Some(Player::Second)),
    ]))
}

/// A line of `depth` forced moves ending in a win for the first player.
pub fn chain(depth: usize) -> ScriptedGame {
    let mut table: Vec<Position> = (0..depth)
        .map(|i| Position::inner(vec![("step", i + 1)]))
        .collect();
    table.push(Position::terminal(Some(Player::First)));
    RulesAdapter::new(Scripted::new(table))
}

/// Claims the game goes on but offers no moves.
#[derive(Debug, Clone)]
pub struct Stuck;

impl GameState for Stuck {
    type Move = u8;

    fn is_terminal(&self) -> bool {
        false
    }

    fn successors(&self) -> Vec<(Self, u8)> {
        Vec::new()
    }

    fn random_successor(&self, _rng: &mut ChaCha20Rng) -> Result<Self, GameError> {
        Err(GameError::IllegalOperation("no moves".to_string()))
    }

    fn outcome(&self, _ply: u32) -> Result<bool, GameError> {
        Err(GameError::NotTerminal)
    }
}

/// Never ends.
#[derive(Debug, Clone)]
pub struct Endless(pub u32);

impl GameState for Endless {
    type Move = u32;

    fn is_terminal(&self) -> bool {
        false
    }

    fn successors(&self) -> Vec<(Self, u32)> {
        vec![(Endless(self.0 + 1), self.0), (Endless(self.0 + 2), self.0 + 1)]
    }

    fn random_successor(&self, _rng: &mut ChaCha20Rng) -> Result<Self, GameError> {
        Ok(Endless(self.0 + 1))
    }

    fn outcome(&self, _ply: u32) -> Result<bool, GameError> {
        Err(GameError::NotTerminal)
    }
}
