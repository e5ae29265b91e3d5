//! Error types for the action execution pipeline.

use crate::action::{ActionError, ActionKind};
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase, self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the game engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("move action failed: {0}")]
    Move(TransitionPhaseError<ActionError>),

    #[error("hit action failed: {0}")]
    Hit(TransitionPhaseError<ActionError>),

    #[error("place wall action failed: {0}")]
    PlaceWall(TransitionPhaseError<ActionError>),

    #[error("end turn action failed: {0}")]
    EndTurn(TransitionPhaseError<ActionError>),
}

impl ExecuteError {
    fn inner(&self) -> &TransitionPhaseError<ActionError> {
        match self {
            ExecuteError::Move(inner)
            | ExecuteError::Hit(inner)
            | ExecuteError::PlaceWall(inner)
            | ExecuteError::EndTurn(inner) => inner,
        }
    }

    /// The rejection reason reported to callers.
    pub fn kind(&self) -> ActionError {
        self.inner().error
    }

    pub fn phase(&self) -> TransitionPhase {
        self.inner().phase
    }

    pub fn action_kind(&self) -> ActionKind {
        match self {
            ExecuteError::Move(_) => ActionKind::Move,
            ExecuteError::Hit(_) => ActionKind::Hit,
            ExecuteError::PlaceWall(_) => ActionKind::PlaceWall,
            ExecuteError::EndTurn(_) => ActionKind::EndTurn,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        self.kind().severity()
    }

    fn error_code(&self) -> &'static str {
        self.kind().error_code()
    }
}
