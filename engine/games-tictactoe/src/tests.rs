use super::*;
use engine_core::{GameError, GameState};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_initial_state() {
    let state = State::new();
    assert_eq!(state.board, [0; 9]);
    assert_eq!(state.current_player, 1);
    assert_eq!(state.winner, 0);
    assert!(!state.is_done());
    assert_eq!(state.to_move(), Player::First);
    assert_eq!(state.outcome(), None);
}

#[test]
fn test_legal_moves() {
    let state = State::new();
    let legal = State::legal_moves(&state);
    assert_eq!(legal, (0..9).collect::<Vec<_>>());

    // After one move
    let state = state.make_move(4); // Center
    let legal = State::legal_moves(&state);
    assert_eq!(legal.len(), 8);
    assert!(!legal.contains(&4));
}

#[test]
fn test_make_move() {
    let state = State::new();
    let new_state = state.make_move(4); // X places in center

    assert_eq!(new_state.cell(4), 1);
    assert_eq!(new_state.current_player, 2); // Now O's turn
    assert_eq!(new_state.to_move(), Player::Second);
    assert!(!new_state.is_done());
}

#[test]
fn test_invalid_move() {
    let state = State::new();
    let state_with_move = state.make_move(4);

    // Try to place in same position
    let invalid_state = state_with_move.make_move(4);
    assert_eq!(invalid_state, state_with_move); // Should be unchanged
}

#[test]
fn test_winning_game() {
    // X wins with top row
    let state = State::from_moves(&[0, 3, 1, 4, 2]);

    assert_eq!(state.winner, 1);
    assert!(state.is_done());
    assert!(State::legal_moves(&state).is_empty());
    assert_eq!(state.outcome(), Some(Outcome::Winner(Player::First)));
}

#[test]
fn test_draw_game() {
    // Board: X O X / O X O / O X O
    let state = State {
        board: [1, 2, 1, 2, 1, 2, 2, 1, 2],
        current_player: 1,
        winner: 3,
    };

    let detected_winner = State::check_winner(&state.board);
    assert_eq!(detected_winner, 3);
    assert!(state.is_done());
    assert_eq!(state.outcome(), Some(Outcome::Draw));
}

/// All 8 winning lines should be detected correctly
#[test]
fn test_all_winning_lines() {
    let all_lines = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];

    for (line_idx, line) in all_lines.iter().enumerate() {
        let mut board_x = [0u8; 9];
        for &pos in line {
            board_x[pos] = 1;
        }
        assert_eq!(State::check_winner(&board_x), 1, "X on line {}", line_idx);

        let mut board_o = [0u8; 9];
        for &pos in line {
            board_o[pos] = 2;
        }
        assert_eq!(State::check_winner(&board_o), 2, "O on line {}", line_idx);
    }
}

#[test]
fn test_adapter_successors() {
    let game = TicTacToe::new(State::from_moves(&[4]));
    let successors = game.successors();

    assert_eq!(successors.len(), 8);
    for (next, mv) in &successors {
        assert_eq!(next.game().cell(*mv), 2);
        assert_eq!(next.game().to_move(), Player::First);
    }
}

#[test]
fn test_adapter_outcome_for_origin_player() {
    // O to move at the origin: X X _ / O O _ / _ _ _ after X plays elsewhere
    let origin = State::from_moves(&[0, 3, 1, 4, 8]);
    assert_eq!(origin.to_move(), Player::Second);

    let game = TicTacToe::new(origin);
    let (won, _) = game
        .successors()
        .into_iter()
        .find(|(_, mv)| *mv == 5)
        .unwrap();

    assert!(won.is_terminal());
    // Ply 1 was made by O, the origin player
    assert_eq!(won.outcome(1), Ok(true));
    assert_eq!(won.outcome(2), Ok(false));
}

#[test]
fn test_adapter_outcome_not_terminal() {
    let game = TicTacToe::new(State::new());
    assert_eq!(game.outcome(1), Err(GameError::NotTerminal));
}

/// Random playouts through the adapter always finish within 9 plies
#[test]
fn test_random_playouts_terminate() {
    for seed in 0..50 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut game = TicTacToe::new(State::new());
        let mut plies = 0;

        while !game.is_terminal() {
            let prev_player = game.game().to_move();
            game = game.random_successor(&mut rng).unwrap();
            plies += 1;

            if !game.is_terminal() {
                assert_ne!(
                    game.game().to_move(),
                    prev_player,
                    "Player should switch after move (seed={})",
                    seed
                );
            }
        }

        assert!(plies <= 9, "Game should finish within 9 moves (seed={})", seed);
        assert!(game.game().is_done());
        assert!(game.successors().is_empty());
        assert!(matches!(
            game.random_successor(&mut rng),
            Err(GameError::IllegalOperation(_))
        ));
    }
}
