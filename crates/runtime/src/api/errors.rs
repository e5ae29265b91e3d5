//! Unified error types surfaced by the runtime API.
//!
//! Wraps engine rejections, snapshot codec failures and transport problems so
//! clients can bubble them up with consistent context.
use thiserror::Error;

use game_core::{ActionError, ExecuteError, GameError, PlayerColor, SnapshotError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Rejected(#[from] ExecuteError),

    #[error("{current} is to move, but this session plays {seat}")]
    NotYourTurn {
        seat: PlayerColor,
        current: PlayerColor,
    },

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("snapshot transport closed")]
    TransportClosed,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RuntimeError {
    /// The rule violation behind a rejected action, if that is what this is.
    pub fn action_error(&self) -> Option<ActionError> {
        match self {
            RuntimeError::Rejected(error) => Some(error.kind()),
            _ => None,
        }
    }

    /// True for errors the player can recover from by choosing another action.
    pub fn is_recoverable(&self) -> bool {
        match self {
            RuntimeError::Rejected(error) => !error.severity().is_internal(),
            RuntimeError::NotYourTurn { .. } => true,
            _ => false,
        }
    }
}
