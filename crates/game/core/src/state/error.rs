//! State invariant errors.
//!
//! Produced when a [`GameState`](super::GameState) breaks one of the board
//! invariants, either after a transition (an engine bug) or when a decoded
//! snapshot has the wrong shape.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{PlayerColor, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvariantViolation {
    #[error("{color} token at {position} is off the board")]
    TokenOffBoard {
        color: PlayerColor,
        position: Position,
    },

    #[error("tokens share {position} outside of a capture")]
    TokensOverlap { position: Position },

    #[error("wall at {position} is off the board")]
    WallOffBoard { position: Position },

    #[error("wall at {position} sits on a reserved cell")]
    WallOnReservedCell { position: Position },

    #[error("wall at {position} sits on a token")]
    WallOnToken { position: Position },

    #[error("wall at {position} has hp {hp} outside 1..=2")]
    WallHpOutOfRange { position: Position, hp: u8 },

    #[error("walls disconnect the two home bases")]
    BasesDisconnected,

    #[error("{color} energy {energy} exceeds the maximum")]
    EnergyOutOfRange { color: PlayerColor, energy: u8 },

    #[error("winner recorded while the game is still running")]
    WinnerWithoutGameOver,

    #[error("game over without a winner")]
    GameOverWithoutWinner,
}

impl GameError for InvariantViolation {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        use InvariantViolation::*;
        match self {
            TokenOffBoard { .. } => "STATE_TOKEN_OFF_BOARD",
            TokensOverlap { .. } => "STATE_TOKENS_OVERLAP",
            WallOffBoard { .. } => "STATE_WALL_OFF_BOARD",
            WallOnReservedCell { .. } => "STATE_WALL_ON_RESERVED_CELL",
            WallOnToken { .. } => "STATE_WALL_ON_TOKEN",
            WallHpOutOfRange { .. } => "STATE_WALL_HP_OUT_OF_RANGE",
            BasesDisconnected => "STATE_BASES_DISCONNECTED",
            EnergyOutOfRange { .. } => "STATE_ENERGY_OUT_OF_RANGE",
            WinnerWithoutGameOver => "STATE_WINNER_WITHOUT_GAME_OVER",
            GameOverWithoutWinner => "STATE_GAME_OVER_WITHOUT_WINNER",
        }
    }
}
