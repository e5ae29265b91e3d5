//! Event types for different topics.

use serde::{Deserialize, Serialize};

use game_core::engine::TransitionPhase;
use game_core::{Action, ActionError, ActionResult, PlayerColor, StateDelta};

/// Events related to game state changes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameStateEvent {
    /// An action was executed with resulting state changes
    ActionApplied {
        delta: Box<StateDelta>,
        result: ActionResult,
    },

    /// The engine refused an action; the state is unchanged
    ActionRejected {
        action: Action,
        phase: TransitionPhase,
        error: ActionError,
    },

    /// A snapshot from the peer replaced the local state
    SnapshotAdopted { nonce: u64, state_root: String },

    /// A snapshot from the peer could not be decoded and a fresh game was
    /// started in its place
    SnapshotRejected { reason: String },
}

/// Events related to turn management (lightweight)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TurnEvent {
    TurnEnded {
        next_player: PlayerColor,
        energy: u8,
        nonce: u64,
    },
    GameOver {
        winner: PlayerColor,
        nonce: u64,
    },
}

/// Connectivity of the remote replica, as reported by the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeerEvent {
    Connected,
    Disconnected,
}
