use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::piece::Player;

/// Which pieces the mandatory-capture rule looks at.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureScope {
    /// Only the piece being moved must capture when it can.
    #[default]
    Piece,
    /// Any capture available to the side forbids every simple move.
    Board,
}

/// Rules settings for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub first_player: Player,
    pub capture_scope: CaptureScope,
    /// Draw after this many consecutive king plies without a capture.
    pub draw_after_king_moves: Option<u16>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            first_player: Player::Light,
            capture_scope: CaptureScope::Piece,
            draw_after_king_moves: None,
        }
    }
}

impl RulesConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.draw_after_king_moves == Some(0) {
            return Err(ConfigError::Validation(
                "draw_after_king_moves must be > 0".into(),
            ));
        }
        Ok(())
    }
}
