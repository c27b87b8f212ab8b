pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod piece;
pub mod rules;
pub mod square;
pub mod types;
pub mod wasm;

pub use board::{Board, Cell, MoveOutcome, create_initial_board};
pub use config::{CaptureScope, RulesConfig};
pub use error::{ConfigError, MoveError};
pub use game::{Chain, Game, GameOutcome, MoveRecord, TurnState};
pub use piece::{Piece, Player, Rank};
pub use rules::{Move, Rules, has_legal_move, has_pieces, is_game_over, is_legal_move};
pub use square::{Square, SquareSet, coordinates_to_square, square_to_coordinates};
pub use wasm::wasm_ready;
