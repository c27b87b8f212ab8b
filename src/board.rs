use crate::error::MoveError;
use crate::piece::{Piece, Player, Rank};
use crate::square::{Square, SquareSet};
use crate::types::Position;

const BOARD_SIZE: usize = 8;
const NUM_SQUARES: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Non-playable cell, `(row + col)` even.
    Light,
    Empty,
    Occupied(Piece),
}

/// Result of applying a move to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Square of the piece removed by a jump.
    pub captured: Option<Square>,
    pub promoted: bool,
}

impl MoveOutcome {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Checkers board state, row-major 8x8 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates the initial board:
    /// light men on rows 0-2 (squares 1-12), dark men on rows 5-7 (squares 21-32).
    pub fn new() -> Self {
        let mut board = Self::empty();
        for square in Square::all() {
            let row = square.position().row;
            match row {
                0..=2 => board.place(square, Piece::man(Player::Light)),
                5..=7 => board.place(square, Piece::man(Player::Dark)),
                _ => {}
            }
        }
        board
    }

    /// A board with every dark cell empty.
    pub fn empty() -> Self {
        let mut cells = [[Cell::Light; BOARD_SIZE]; BOARD_SIZE];
        for (row, line) in cells.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                if (row + col) % 2 == 1 {
                    *cell = Cell::Empty;
                }
            }
        }
        Self { cells }
    }

    /// An otherwise empty board holding the given pieces.
    pub fn from_pieces(pieces: &[(Square, Piece)]) -> Self {
        let mut board = Self::empty();
        for &(square, piece) in pieces {
            board.place(square, piece);
        }
        board
    }

    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        match self.cell(square.position()) {
            Cell::Occupied(piece) => Some(piece),
            _ => None,
        }
    }

    pub fn place(&mut self, square: Square, piece: Piece) {
        let pos = square.position();
        self.cells[pos.row as usize][pos.col as usize] = Cell::Occupied(piece);
    }

    /// Empties the square, returning what stood there.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let piece = self.piece_at(square);
        let pos = square.position();
        self.cells[pos.row as usize][pos.col as usize] = Cell::Empty;
        piece
    }

    /// Pieces of `player` in ascending square order.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| {
            self.piece_at(square)
                .filter(|piece| piece.belongs_to(player))
                .map(|piece| (square, piece))
        })
    }

    pub fn count(&self, player: Player) -> u8 {
        self.pieces(player).count() as u8
    }

    /// Destinations of single-step diagonal moves into empty squares.
    pub fn simple_moves(&self, square: Square) -> SquareSet {
        let mut moves = SquareSet::EMPTY;
        let Some(piece) = self.piece_at(square) else {
            return moves;
        };

        let from = square.position();
        for &dir in piece.directions() {
            if let Some(to) = from.offset(dir, 1)
                && self.cell(to) == Cell::Empty
                && let Ok(dest) = Square::from_position(to)
            {
                moves.insert(dest);
            }
        }

        moves
    }

    /// Landing squares of single jumps over an adjacent opposing piece.
    pub fn capture_moves(&self, square: Square) -> SquareSet {
        let mut captures = SquareSet::EMPTY;
        let Some(piece) = self.piece_at(square) else {
            return captures;
        };

        let from = square.position();
        for &dir in piece.directions() {
            let (Some(over), Some(land)) = (from.offset(dir, 1), from.offset(dir, 2)) else {
                continue;
            };
            if let Cell::Occupied(jumped) = self.cell(over)
                && piece.is_opposing(jumped)
                && self.cell(land) == Cell::Empty
                && let Ok(dest) = Square::from_position(land)
            {
                captures.insert(dest);
            }
        }

        captures
    }

    /// Moves a piece, removing the jumped piece on a capture and crowning
    /// men that reach the far rank.
    ///
    /// Caller contract: the move was accepted by the validator. Moves that
    /// are not one- or two-step diagonals into an empty square, or jumps
    /// without an opposing piece in between, are rejected and leave the
    /// board unchanged.
    pub fn apply_move(
        &mut self,
        origin: Square,
        destination: Square,
    ) -> Result<MoveOutcome, MoveError> {
        let piece = self
            .piece_at(origin)
            .ok_or(MoveError::NoPieceAtOrigin(origin))?;
        if self.piece_at(destination).is_some() {
            return Err(MoveError::DestinationOccupied(destination));
        }

        let from = origin.position();
        let to = destination.position();
        let d_row = to.row as i8 - from.row as i8;
        let d_col = to.col as i8 - from.col as i8;
        let distance = d_row.abs();
        if distance != d_col.abs() || !(1..=2).contains(&distance) {
            return Err(MoveError::NotDiagonal {
                origin,
                destination,
            });
        }

        let mut captured = None;
        if distance == 2 {
            let over = from
                .offset((d_row / 2, d_col / 2), 1)
                .and_then(|pos| Square::from_position(pos).ok());
            match over.and_then(|square| self.piece_at(square).map(|p| (square, p))) {
                Some((square, jumped)) if piece.is_opposing(jumped) => {
                    self.remove(square);
                    captured = Some(square);
                }
                _ => {
                    return Err(MoveError::NothingToCapture {
                        origin,
                        destination,
                    });
                }
            }
        }

        let promoted = piece.rank == Rank::Man && to.row == piece.color.promotion_row();
        let landed = if promoted { piece.promoted() } else { piece };
        self.remove(origin);
        self.place(destination, landed);

        Ok(MoveOutcome { captured, promoted })
    }

    /// Converts board to `[u8; 32]` indexed by `square - 1`:
    /// 0=empty, 1=light man, 2=light king, 3=dark man, 4=dark king.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut board = [0u8; NUM_SQUARES];
        for (square, cell) in Square::all().zip(board.iter_mut()) {
            *cell = match self.piece_at(square) {
                None => 0,
                Some(piece) => match (piece.color, piece.rank) {
                    (Player::Light, Rank::Man) => 1,
                    (Player::Light, Rank::King) => 2,
                    (Player::Dark, Rank::Man) => 3,
                    (Player::Dark, Rank::King) => 4,
                },
            };
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// The standard starting position.
pub fn create_initial_board() -> Board {
    Board::new()
}
