use std::fmt;

use serde::{Deserialize, Serialize};

/// Side to move. Light starts on rows 0-2 and advances toward row 7.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    #[default]
    Light,
    Dark,
}

impl Player {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Row delta of a forward step.
    pub const fn forward(self) -> i8 {
        match self {
            Self::Light => 1,
            Self::Dark => -1,
        }
    }

    /// The opponent's back rank, where this side's men are crowned.
    pub const fn promotion_row(self) -> u8 {
        match self {
            Self::Light => 7,
            Self::Dark => 0,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Man,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    pub color: Player,
    pub rank: Rank,
}

const LIGHT_MAN_DIRECTIONS: [(i8, i8); 2] = [(1, -1), (1, 1)];
const DARK_MAN_DIRECTIONS: [(i8, i8); 2] = [(-1, -1), (-1, 1)];
const KING_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Piece {
    pub const fn man(color: Player) -> Self {
        Self {
            color,
            rank: Rank::Man,
        }
    }

    pub const fn king(color: Player) -> Self {
        Self {
            color,
            rank: Rank::King,
        }
    }

    /// True for men and kings of `player`.
    pub fn belongs_to(self, player: Player) -> bool {
        self.color == player
    }

    pub fn is_king(self) -> bool {
        self.rank == Rank::King
    }

    /// Colors differ; rank is irrelevant.
    pub fn is_opposing(self, other: Piece) -> bool {
        self.color != other.color
    }

    /// Diagonal directions the piece may step or jump along.
    /// Men go forward only; kings go all four ways, one cell at a time.
    pub fn directions(self) -> &'static [(i8, i8)] {
        match (self.rank, self.color) {
            (Rank::King, _) => &KING_DIRECTIONS,
            (Rank::Man, Player::Light) => &LIGHT_MAN_DIRECTIONS,
            (Rank::Man, Player::Dark) => &DARK_MAN_DIRECTIONS,
        }
    }

    pub fn promoted(self) -> Self {
        Self::king(self.color)
    }
}
