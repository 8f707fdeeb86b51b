//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use solo_tictactoe::{Board, BoardEngine, Opponent, Position};

/// Opponent that replays a fixed list of moves.
#[derive(Debug)]
pub struct Scripted(VecDeque<Position>);

impl Scripted {
    pub fn new(moves: impl IntoIterator<Item = Position>) -> Self {
        Self(moves.into_iter().collect())
    }
}

impl Opponent for Scripted {
    fn choose(&mut self, _board: &Board) -> Option<Position> {
        self.0.pop_front()
    }
}

/// Engine whose opponent plays `moves` in order.
pub fn scripted_engine(moves: impl IntoIterator<Item = Position>) -> BoardEngine {
    BoardEngine::new(Box::new(Scripted::new(moves)))
}

/// Player moves and opponent replies that fill the board with no line:
///
/// ```text
/// X O X
/// X O O
/// O X X
/// ```
pub const TIE_PLAYER: [(usize, usize); 5] = [(0, 0), (0, 2), (2, 1), (1, 0), (2, 2)];
pub const TIE_OPPONENT: [Position; 4] = [
    Position::Center,
    Position::TopCenter,
    Position::BottomLeft,
    Position::MiddleRight,
];

/// Opponent replies that let the player complete the top row.
pub const PLAYER_WIN_OPPONENT: [Position; 2] = [Position::BottomLeft, Position::BottomCenter];

/// Player moves and opponent replies ending on the opponent's anti-diagonal.
pub const LOSS_PLAYER: [(usize, usize); 3] = [(0, 0), (0, 1), (2, 2)];
pub const LOSS_OPPONENT: [Position; 3] =
    [Position::Center, Position::TopRight, Position::BottomLeft];
