//! Action rejection reasons.
//!
//! Every rejection is local and recoverable from the caller's point of view:
//! the state is left untouched and the player may pick another action.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{InvariantViolation, Position};

/// Why an action was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// The acting player has no energy left, or not enough for this action.
    #[error("not enough energy")]
    OutOfEnergy,

    /// Target is off the board, not reachable from the token, or walled.
    #[error("illegal destination {target}")]
    IllegalDestination { target: Position },

    /// The diagonal jump was already spent this turn.
    #[error("jump already used this turn")]
    JumpAlreadyUsed,

    /// Hits this turn already match the player's energy.
    #[error("hit limit reached for this turn")]
    HitLimitReached,

    /// A wall on the target would leave no path between the two bases.
    #[error("wall at {target} would disconnect the bases")]
    WallWouldDisconnectBases { target: Position },

    /// Target is a base, a jump cell, a token, or already walled.
    #[error("cell {target} is occupied or reserved")]
    CellOccupiedOrReserved { target: Position },

    /// A wall was placed this turn; only ending the turn is allowed.
    #[error("actions are locked until the turn ends")]
    ActionsLockedThisTurn,

    /// The game has a winner; no further transitions are accepted.
    #[error("game is already over")]
    GameAlreadyOver,

    /// Ending the turn while energy and a legal action remain.
    #[error("turn cannot end while energy remains to be spent")]
    TurnNotFinished,

    /// The input state or the state after the transition breaks a board
    /// invariant.
    #[error("state invariant violated: {0}")]
    InvariantViolated(#[from] InvariantViolation),
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            OutOfEnergy | JumpAlreadyUsed | HitLimitReached | ActionsLockedThisTurn
            | TurnNotFinished => ErrorSeverity::Recoverable,
            IllegalDestination { .. }
            | WallWouldDisconnectBases { .. }
            | CellOccupiedOrReserved { .. }
            | GameAlreadyOver => ErrorSeverity::Validation,
            InvariantViolated(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            OutOfEnergy => "ACTION_OUT_OF_ENERGY",
            IllegalDestination { .. } => "ACTION_ILLEGAL_DESTINATION",
            JumpAlreadyUsed => "ACTION_JUMP_ALREADY_USED",
            HitLimitReached => "ACTION_HIT_LIMIT_REACHED",
            WallWouldDisconnectBases { .. } => "ACTION_WALL_WOULD_DISCONNECT_BASES",
            CellOccupiedOrReserved { .. } => "ACTION_CELL_OCCUPIED_OR_RESERVED",
            ActionsLockedThisTurn => "ACTION_ACTIONS_LOCKED_THIS_TURN",
            GameAlreadyOver => "ACTION_GAME_ALREADY_OVER",
            TurnNotFinished => "ACTION_TURN_NOT_FINISHED",
            InvariantViolated(_) => "ACTION_INVARIANT_VIOLATED",
        }
    }
}
