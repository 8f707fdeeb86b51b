//! Tests for the board engine.

mod common;

use common::{LOSS_OPPONENT, LOSS_PLAYER, PLAYER_WIN_OPPONENT, TIE_OPPONENT, TIE_PLAYER, scripted_engine};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use solo_tictactoe::{
    Board, BoardEngine, Cell, HeuristicOpponent, IllegalMove, Outcome, Position, check_winner,
    is_full,
};

#[test]
fn test_new_engine_is_empty_and_in_progress() {
    let engine = BoardEngine::default();
    let snapshot = engine.current_snapshot();
    assert_eq!(snapshot.board, Board::new());
    assert_eq!(snapshot.outcome, Outcome::InProgress);
}

#[test]
fn test_first_move_always_in_progress() {
    for seed in 0..50 {
        let mut engine = BoardEngine::new(Box::new(HeuristicOpponent::seeded(seed)));
        let outcome = engine.submit_player_move(0, 0).expect("Legal move");
        assert_eq!(outcome, Outcome::InProgress);

        let board = engine.current_snapshot().board;
        assert_eq!(board.get(Position::TopLeft), Cell::Player);
        assert_eq!(board.count(Cell::Player), 1);
        assert_eq!(board.count(Cell::Opponent), 1);
    }
}

#[test]
fn test_out_of_bounds_rejected() {
    let mut engine = BoardEngine::default();
    engine.submit_player_move(1, 1).expect("Legal move");
    let before = engine.current_snapshot();

    for (row, col) in [(3, 0), (0, 3), (7, 9), (usize::MAX, 1)] {
        assert_eq!(
            engine.submit_player_move(row, col),
            Err(IllegalMove::OutOfBounds { row, col })
        );
        assert_eq!(engine.current_snapshot(), before);
    }
}

#[test]
fn test_occupied_cell_rejected() {
    let mut engine = scripted_engine([Position::Center]);
    engine.submit_player_move(0, 0).expect("Legal move");
    let before = engine.current_snapshot();

    assert_eq!(
        engine.submit_player_move(0, 0),
        Err(IllegalMove::Occupied(Position::TopLeft))
    );
    assert_eq!(
        engine.submit_player_move(1, 1),
        Err(IllegalMove::Occupied(Position::Center))
    );
    assert_eq!(engine.current_snapshot(), before);
}

#[test]
fn test_player_completes_row() {
    let mut engine = scripted_engine(PLAYER_WIN_OPPONENT);
    assert_eq!(engine.submit_player_move(0, 0), Ok(Outcome::InProgress));
    assert_eq!(engine.submit_player_move(0, 1), Ok(Outcome::InProgress));
    assert_eq!(engine.submit_player_move(0, 2), Ok(Outcome::PlayerWin));

    // The opponent does not reply after a winning move.
    let board = engine.current_snapshot().board;
    assert_eq!(board.count(Cell::Player), 3);
    assert_eq!(board.count(Cell::Opponent), 2);
}

#[test]
fn test_opponent_completes_line() {
    let mut engine = scripted_engine(LOSS_OPPONENT);
    let mut outcome = Outcome::InProgress;
    for (row, col) in LOSS_PLAYER {
        outcome = engine.submit_player_move(row, col).expect("Legal move");
    }
    assert_eq!(outcome, Outcome::OpponentWin);
}

#[test]
fn test_full_board_without_line_is_tie() {
    let mut engine = scripted_engine(TIE_OPPONENT);
    let mut outcome = Outcome::InProgress;
    for (row, col) in TIE_PLAYER {
        outcome = engine.submit_player_move(row, col).expect("Legal move");
    }
    assert_eq!(outcome, Outcome::Tie);
    assert!(engine.current_snapshot().board.is_full());
}

#[test]
fn test_moves_rejected_after_game_over() {
    let mut engine = scripted_engine(PLAYER_WIN_OPPONENT);
    for col in 0..3 {
        engine.submit_player_move(0, col).expect("Legal move");
    }
    let before = engine.current_snapshot();

    assert_eq!(
        engine.submit_player_move(1, 1),
        Err(IllegalMove::GameOver(Outcome::PlayerWin))
    );
    assert_eq!(engine.current_snapshot(), before);
}

#[test]
fn test_reset_clears_any_state() {
    let mut engine = scripted_engine(TIE_OPPONENT);
    for (row, col) in TIE_PLAYER {
        engine.submit_player_move(row, col).expect("Legal move");
    }
    engine.reset();
    let snapshot = engine.current_snapshot();
    assert_eq!(snapshot.board, Board::new());
    assert_eq!(snapshot.outcome, Outcome::InProgress);

    engine.reset();
    assert_eq!(engine.current_snapshot().board, Board::new());
}

#[test]
fn test_misbehaving_opponent_falls_back_to_empty_cell() {
    // Replies with an occupied cell, then with nothing at all.
    let mut engine = scripted_engine([Position::TopLeft]);
    engine.submit_player_move(0, 0).expect("Legal move");
    let board = engine.current_snapshot().board;
    assert_eq!(board.get(Position::TopCenter), Cell::Opponent);

    engine.submit_player_move(2, 2).expect("Legal move");
    let board = engine.current_snapshot().board;
    assert_eq!(board.count(Cell::Opponent), 2);
    assert!(board.counts_balanced());
}

#[test]
fn test_random_games_keep_invariants() {
    for seed in 0..200u64 {
        let mut engine = BoardEngine::new(Box::new(HeuristicOpponent::seeded(seed)));
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);

        loop {
            let board = engine.current_snapshot().board;
            let empty = board.empty_positions();
            let pos = empty[rng.random_range(0..empty.len())];

            let outcome = engine
                .submit_player_move(pos.row(), pos.col())
                .expect("Empty cell is legal");
            let snapshot = engine.current_snapshot();

            assert_eq!(outcome, snapshot.outcome);
            assert!(snapshot.board.counts_balanced());
            assert_eq!(
                outcome.is_terminal(),
                check_winner(&snapshot.board).is_some() || is_full(&snapshot.board),
                "seed {seed}:\n{}",
                snapshot.board
            );

            if outcome.is_terminal() {
                assert!(matches!(
                    engine.submit_player_move(pos.row(), pos.col()),
                    Err(IllegalMove::GameOver(_))
                ));
                break;
            }
        }
    }
}
