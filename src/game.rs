use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::board::Board;
use crate::config::RulesConfig;
use crate::error::{ConfigError, MoveError};
use crate::piece::Player;
use crate::rules::{self, Move, Rules};
use crate::square::Square;
use crate::types::{GameResult, GameState};

/// Whether the side to move is in the middle of a capture chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chain {
    Idle,
    /// Only the piece on this square may move, and only by capturing.
    MustContinue(Square),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    pub player: Player,
    pub chain: Chain,
}

impl TurnState {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            chain: Chain::Idle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// One applied move, as reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub player: Player,
    pub origin: Square,
    pub destination: Square,
    pub captured: Option<Square>,
    pub promoted: bool,
    /// Contract:
    /// - `true` when the same piece owes another capture this turn.
    /// - `false` when the turn passed (or the game ended).
    pub continues: bool,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.captured.is_some() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.origin, sep, self.destination)
    }
}

pub struct Game {
    board: Board,
    rules: Rules,
    config: RulesConfig,
    turn: TurnState,
    outcome: Option<GameOutcome>,
    last_move: Option<MoveRecord>,
    /// Consecutive king plies without a capture.
    king_plies: u16,
}

impl Game {
    pub fn new(config: RulesConfig) -> Result<Self, ConfigError> {
        Self::with_board(Board::new(), config.first_player, config)
    }

    /// Starts from an arbitrary position with `player` to move.
    pub fn with_board(
        board: Board,
        player: Player,
        config: RulesConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let outcome = rules::is_game_over(&board, player)
            .then_some(GameOutcome::Winner(player.opponent()));
        Ok(Self {
            board,
            rules: Rules::new(config.capture_scope),
            config,
            turn: TurnState::new(player),
            outcome,
            last_move: None,
            king_plies: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    pub fn current_player(&self) -> Player {
        self.turn.player
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn last_move(&self) -> Option<MoveRecord> {
        self.last_move
    }

    /// Legal moves for the side to move, honoring an open capture chain.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_game_over() {
            return Vec::new();
        }
        match self.turn.chain {
            Chain::MustContinue(origin) => self
                .board
                .capture_moves(origin)
                .iter()
                .map(|destination| Move {
                    origin,
                    destination,
                    is_capture: true,
                })
                .collect(),
            Chain::Idle => self.rules.legal_moves(&self.board, self.turn.player),
        }
    }

    pub fn is_legal_move(&self, origin: u8, destination: u8) -> bool {
        self.validate(origin, destination).is_ok()
    }

    /// Validates and applies a move for the side to move.
    pub fn play(&mut self, origin: u8, destination: u8) -> Result<MoveRecord, MoveError> {
        let mv = self.validate(origin, destination).inspect_err(|err| {
            debug!(player = %self.turn.player, origin, destination, %err, "move rejected");
        })?;

        let player = self.turn.player;
        let moved_king = self
            .board
            .piece_at(mv.origin)
            .is_some_and(|piece| piece.is_king());
        let applied = self.board.apply_move(mv.origin, mv.destination)?;
        let continues =
            applied.is_capture() && !self.board.capture_moves(mv.destination).is_empty();

        self.king_plies = if moved_king && !applied.is_capture() {
            self.king_plies.saturating_add(1)
        } else {
            0
        };

        let record = MoveRecord {
            player,
            origin: mv.origin,
            destination: mv.destination,
            captured: applied.captured,
            promoted: applied.promoted,
            continues,
        };
        self.last_move = Some(record);
        debug!(player = %player, mv = %record, promoted = record.promoted, continues, "move applied");

        if continues {
            self.turn.chain = Chain::MustContinue(mv.destination);
            return Ok(record);
        }

        let next = player.opponent();
        self.turn = TurnState::new(next);
        if rules::is_game_over(&self.board, next) {
            self.outcome = Some(GameOutcome::Winner(player));
            info!(winner = %player, "game over");
        } else if self
            .config
            .draw_after_king_moves
            .is_some_and(|limit| self.king_plies >= limit)
        {
            self.outcome = Some(GameOutcome::Draw);
            info!(king_plies = self.king_plies, "game drawn");
        }

        Ok(record)
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.turn.player,
            must_continue_from: match self.turn.chain {
                Chain::MustContinue(square) => Some(square.number()),
                Chain::Idle => None,
            },
            light_count: self.board.count(Player::Light),
            dark_count: self.board.count(Player::Dark),
            is_game_over: self.is_game_over(),
            last_move: self.last_move,
        }
    }

    /// `None` while the game is in progress.
    pub fn to_game_result(&self) -> Option<GameResult> {
        let winner = match self.outcome? {
            GameOutcome::Winner(player) => Some(player),
            GameOutcome::Draw => None,
        };
        Some(GameResult {
            winner,
            light_count: self.board.count(Player::Light),
            dark_count: self.board.count(Player::Dark),
        })
    }

    fn validate(&self, origin: u8, destination: u8) -> Result<Move, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }

        match self.turn.chain {
            Chain::Idle => {
                self.rules
                    .check_move(&self.board, origin, destination, self.turn.player)
            }
            Chain::MustContinue(square) => {
                let origin = Square::new(origin)?;
                let destination = Square::new(destination)?;
                if origin != square {
                    return Err(MoveError::MustContinue { square });
                }
                if !self.board.capture_moves(square).contains(destination) {
                    return Err(MoveError::CaptureRequired { origin: square });
                }
                Ok(Move {
                    origin,
                    destination,
                    is_capture: true,
                })
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        let config = RulesConfig::default();
        Self {
            board: Board::new(),
            rules: Rules::new(config.capture_scope),
            config,
            turn: TurnState::new(config.first_player),
            outcome: None,
            last_move: None,
            king_plies: 0,
        }
    }
}
