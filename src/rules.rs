//! Move validation under the mandatory-capture rule, and game-end detection.

use std::fmt;

use serde::Serialize;

use crate::board::Board;
use crate::config::CaptureScope;
use crate::error::MoveError;
use crate::piece::Player;
use crate::square::Square;

/// A validated (origin, destination) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    pub origin: Square,
    pub destination: Square,
    pub is_capture: bool,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture { 'x' } else { '-' };
        write!(f, "{}{}{}", self.origin, sep, self.destination)
    }
}

/// Validates moves for one side.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    scope: CaptureScope,
}

impl Rules {
    pub fn new(scope: CaptureScope) -> Self {
        Self { scope }
    }

    pub fn scope(&self) -> CaptureScope {
        self.scope
    }

    /// Checks a raw (origin, destination) pair for `player`.
    ///
    /// A piece that can capture must capture. Under [`CaptureScope::Board`]
    /// a capture anywhere on the side also rules out simple moves.
    pub fn check_move(
        &self,
        board: &Board,
        origin: u8,
        destination: u8,
        player: Player,
    ) -> Result<Move, MoveError> {
        let origin = Square::new(origin)?;
        let destination = Square::new(destination)?;

        let piece = board
            .piece_at(origin)
            .ok_or(MoveError::NoPieceAtOrigin(origin))?;
        if !piece.belongs_to(player) {
            return Err(MoveError::WrongOwnership {
                square: origin,
                player,
            });
        }

        let captures = board.capture_moves(origin);
        if !captures.is_empty() {
            if captures.contains(destination) {
                return Ok(Move {
                    origin,
                    destination,
                    is_capture: true,
                });
            }
            return Err(MoveError::CaptureRequired { origin });
        }

        if self.scope == CaptureScope::Board
            && let Some(capturer) = first_capturing_piece(board, player)
        {
            return Err(MoveError::CaptureRequired { origin: capturer });
        }

        if board.simple_moves(origin).contains(destination) {
            Ok(Move {
                origin,
                destination,
                is_capture: false,
            })
        } else {
            Err(MoveError::Unreachable {
                origin,
                destination,
            })
        }
    }

    /// Fails closed: malformed and illegal moves are both `false`.
    pub fn is_legal_move(&self, board: &Board, origin: u8, destination: u8, player: Player) -> bool {
        self.check_move(board, origin, destination, player).is_ok()
    }

    /// Every legal move of `player`, ordered by origin then destination.
    pub fn legal_moves(&self, board: &Board, player: Player) -> Vec<Move> {
        let side_must_capture =
            self.scope == CaptureScope::Board && first_capturing_piece(board, player).is_some();

        let mut moves = Vec::new();
        for (origin, _) in board.pieces(player) {
            let captures = board.capture_moves(origin);
            let (targets, is_capture) = if !captures.is_empty() {
                (captures, true)
            } else if side_must_capture {
                continue;
            } else {
                (board.simple_moves(origin), false)
            };

            moves.extend(targets.iter().map(|destination| Move {
                origin,
                destination,
                is_capture,
            }));
        }
        moves
    }
}

/// Per-piece mandatory capture check for raw square numbers.
pub fn is_legal_move(board: &Board, origin: u8, destination: u8, player: Player) -> bool {
    Rules::default().is_legal_move(board, origin, destination, player)
}

pub fn has_pieces(board: &Board, player: Player) -> bool {
    board.pieces(player).next().is_some()
}

pub fn has_legal_move(board: &Board, player: Player) -> bool {
    board.pieces(player).any(|(square, _)| {
        !board.simple_moves(square).is_empty() || !board.capture_moves(square).is_empty()
    })
}

/// `player` has lost when left without pieces or without moves.
pub fn is_game_over(board: &Board, player: Player) -> bool {
    !has_pieces(board, player) || !has_legal_move(board, player)
}

fn first_capturing_piece(board: &Board, player: Player) -> Option<Square> {
    board
        .pieces(player)
        .map(|(square, _)| square)
        .find(|&square| !board.capture_moves(square).is_empty())
}
