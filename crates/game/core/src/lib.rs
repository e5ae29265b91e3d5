//! Deterministic rules for two-player grid combat.
//!
//! `game-core` defines the canonical rules (board, actions, engine, state) and
//! exposes pure APIs that are reused by the runtime and the terminal client.
//! All state mutation flows through [`engine::GameEngine`]; the value-level
//! wrappers [`engine::new_game`], [`engine::apply`] and [`engine::end_turn`]
//! never mutate their input.
pub mod action;
pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod rng;
#[cfg(feature = "serde")]
pub mod snapshot;
pub mod state;

pub use action::{
    Action, ActionError, ActionKind, ActionResult, ActionTransition, EndTurnAction, HitAction,
    HitOutcome, Knockback, MoveAction, MoveKind, PlaceWallAction, ValidMoves, available_actions,
    has_playable_action, valid_moves,
};
pub use board::{COLS, CellKind, ROWS};
pub use config::{GameConfig, StartingPlayer};
pub use engine::{
    ExecuteError, ExecutionOutcome, GameEngine, Transition, TransitionPhase, TransitionPhaseError,
    apply, end_turn, new_game,
};
pub use error::{ErrorSeverity, GameError};
#[cfg(feature = "serde")]
pub use snapshot::{SNAPSHOT_VERSION, SnapshotError, StateRoot, state_root};
pub use state::{
    EnergyChange, GameState, InvariantViolation, PerColor, PlayerColor, Position, StateDelta,
    StateFields, TokenMove, TurnState, Wall, WallChanges, WallDamage, WallSet,
};
