//! TicTacToe rules for the Playout search engine
//!
//! This crate provides a complete reference implementation of TicTacToe
//! demonstrating how to implement the `TwoPlayerRules` trait and search it
//! through the `RulesAdapter`.
//!
//! # Usage
//!
//! ```rust
//! use engine_core::GameState;
//! use games_tictactoe::{State, TicTacToe};
//!
//! let game: TicTacToe = TicTacToe::new(State::new());
//! assert!(!game.is_terminal());
//! assert_eq!(game.successors().len(), 9);
//! ```

use engine_core::{Outcome, Player, RulesAdapter, TwoPlayerRules};

/// Searchable TicTacToe position
pub type TicTacToe = RulesAdapter<State>;

/// Board position (0-8, row-major)
pub type Position = u8;

/// TicTacToe game state
///
/// Represents the complete state of a TicTacToe game including the board,
/// current player, and winner information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    /// Board representation: 0=empty, 1=X, 2=O
    board: [u8; 9],
    /// Current player: 1=X, 2=O
    current_player: u8,
    /// Winner: 0=none/ongoing, 1=X, 2=O, 3=draw
    winner: u8,
}

impl State {
    /// Create a new initial game state
    pub fn new() -> Self {
        Self {
            board: [0; 9],
            current_player: 1, // X goes first
            winner: 0,
        }
    }

    /// Play a sequence of moves from the initial position
    pub fn from_moves(moves: &[Position]) -> Self {
        moves
            .iter()
            .fold(Self::new(), |state, &pos| state.make_move(pos))
    }

    /// Check if the game is over
    pub fn is_done(&self) -> bool {
        self.winner != 0
    }

    /// Cell contents: 0=empty, 1=X, 2=O
    pub fn cell(&self, position: Position) -> u8 {
        self.board[position as usize]
    }

    /// Get legal moves (empty positions)
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.is_done() {
            return Vec::new();
        }

        (0..9u8)
            .filter(|&pos| self.board[pos as usize] == 0)
            .collect()
    }

    /// Make a move and return the new state
    pub fn make_move(&self, position: Position) -> State {
        if self.is_done() || position >= 9 || self.board[position as usize] != 0 {
            return *self; // Invalid move, return unchanged state
        }

        let mut new_state = *self;
        new_state.board[position as usize] = self.current_player;

        // Check for winner
        new_state.winner = Self::check_winner(&new_state.board);

        // Switch player if game not over
        if new_state.winner == 0 {
            new_state.current_player = if self.current_player == 1 { 2 } else { 1 };
        }

        new_state
    }

    /// Check for winner on the board
    fn check_winner(board: &[u8; 9]) -> u8 {
        // Winning positions (rows, columns, diagonals)
        const LINES: [[usize; 3]; 8] = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8], // rows
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8], // columns
            [0, 4, 8],
            [2, 4, 6], // diagonals
        ];

        for line in &LINES {
            let [a, b, c] = *line;
            if board[a] != 0 && board[a] == board[b] && board[b] == board[c] {
                return board[a]; // Return the winning player
            }
        }

        // Check for draw (board full but no winner)
        if board.iter().all(|&cell| cell != 0) {
            return 3; // Draw
        }

        0 // Game ongoing
    }

    fn player(mark: u8) -> Player {
        if mark == 1 {
            Player::First
        } else {
            Player::Second
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl TwoPlayerRules for State {
    type Move = Position;

    fn to_move(&self) -> Player {
        Self::player(self.current_player)
    }

    fn legal_moves(&self) -> Vec<Position> {
        State::legal_moves(self)
    }

    fn play(&mut self, mv: &Position) {
        *self = self.make_move(*mv);
    }

    fn outcome(&self) -> Option<Outcome> {
        match self.winner {
            0 => None,
            3 => Some(Outcome::Draw),
            mark => Some(Outcome::Winner(Self::player(mark))),
        }
    }
}

#[cfg(test)]
mod tests;
