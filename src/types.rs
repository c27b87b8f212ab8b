use serde::Serialize;

use crate::game::MoveRecord;
use crate::piece::Player;

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Dark cells are the playable ones.
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Steps `distance` cells along `(d_row, d_col)`, or `None` past the edge.
    pub fn offset(self, (d_row, d_col): (i8, i8), distance: i8) -> Option<Self> {
        let row = self.row as i8 + d_row * distance;
        let col = self.col as i8 + d_col * distance;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// One entry per square, index `square - 1`:
    /// 0=empty, 1=light man, 2=light king, 3=dark man, 4=dark king.
    pub board: Vec<u8>,
    pub current_player: Player,
    /// Contract:
    /// - `Some(square)` while a capture chain must continue from `square`.
    /// - `None` otherwise.
    pub must_continue_from: Option<u8>,
    pub light_count: u8,
    pub dark_count: u8,
    pub is_game_over: bool,
    pub last_move: Option<MoveRecord>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// `None` for a draw.
    pub winner: Option<Player>,
    pub light_count: u8,
    pub dark_count: u8,
}
