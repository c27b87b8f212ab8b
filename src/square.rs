use std::fmt;

use serde::Serialize;

use crate::error::MoveError;
use crate::types::Position;

pub const NUM_SQUARES: u8 = 32;
const SQUARES_PER_ROW: u8 = 4;

/// A playable dark square, numbered 1..=32 left-to-right, top-to-bottom.
///
/// ```text
///      0  1  2  3  4  5  6  7
///   0  .  1  .  2  .  3  .  4
///   1  5  .  6  .  7  .  8  .
///   2  .  9  . 10  . 11  . 12
///   ...
///   7 29  . 30  . 31  . 32  .
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Square(u8);

impl Square {
    pub fn new(number: u8) -> Result<Self, MoveError> {
        if (1..=NUM_SQUARES).contains(&number) {
            Ok(Self(number))
        } else {
            Err(MoveError::InvalidSquare(number))
        }
    }

    /// Inverse of [`Square::position`]; fails on light or off-board cells.
    pub fn from_position(pos: Position) -> Result<Self, MoveError> {
        if pos.row >= 8 || pos.col >= 8 || !pos.is_dark() {
            return Err(MoveError::NotPlayable {
                row: pos.row,
                col: pos.col,
            });
        }
        Ok(Self(pos.row * SQUARES_PER_ROW + pos.col / 2 + 1))
    }

    pub fn position(self) -> Position {
        let index = self.0 - 1;
        let row = index / SQUARES_PER_ROW;
        let col = if row % 2 == 0 {
            index % SQUARES_PER_ROW * 2 + 1
        } else {
            index % SQUARES_PER_ROW * 2
        };
        Position::new(row, col)
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    /// All 32 squares in ascending order.
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=NUM_SQUARES).map(Square)
    }

    fn bit(self) -> u32 {
        1u32 << (self.0 - 1)
    }
}

impl TryFrom<u8> for Square {
    type Error = MoveError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Square-to-coordinates conversion on raw square numbers.
pub fn square_to_coordinates(number: u8) -> Result<(u8, u8), MoveError> {
    let pos = Square::new(number)?.position();
    Ok((pos.row, pos.col))
}

/// Coordinates-to-square conversion returning the raw square number.
pub fn coordinates_to_square(row: u8, col: u8) -> Result<u8, MoveError> {
    Square::from_position(Position::new(row, col)).map(Square::number)
}

/// A set of squares represented by one bit per square.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SquareSet(u32);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    pub fn insert(&mut self, square: Square) {
        self.0 |= square.bit();
    }

    pub fn contains(self, square: Square) -> bool {
        (self.0 & square.bit()) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn union(self, other: SquareSet) -> SquareSet {
        SquareSet(self.0 | other.0)
    }

    /// Ascending square order.
    pub fn iter(self) -> impl Iterator<Item = Square> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let index = bits.trailing_zeros() as u8;
            bits &= bits - 1;
            Some(Square(index + 1))
        })
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for square in iter {
            set.insert(square);
        }
        set
    }
}
