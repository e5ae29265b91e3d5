//! Action domain.
//!
//! # Module Structure
//!
//! - `error`: rejection reasons ([`ActionError`])
//! - `types`: per-action results ([`ActionResult`], [`HitOutcome`])
//! - `movement`, `hit`, `wall`, `end_turn`: one transition per action kind
//! - `available`: legal-action queries built on the same validation
//!
//! Each action implements [`ActionTransition`]; the engine drives every one of
//! them through the same pre-validate / apply / post-validate pipeline.

pub mod available;
pub mod end_turn;
pub mod error;
pub mod hit;
pub mod movement;
pub mod types;
pub mod wall;

pub use available::{ValidMoves, available_actions, has_playable_action, valid_moves};
pub use end_turn::EndTurnAction;
pub use error::ActionError;
pub use hit::HitAction;
pub use movement::MoveAction;
pub use types::{ActionResult, HitOutcome, Knockback, MoveKind};
pub use wall::PlaceWallAction;

use crate::config::GameConfig;
use crate::state::{GameState, Position};

/// Defines how a concrete action variant mutates game state.
///
/// Validation hooks receive read-only access and must stay side-effect free.
pub trait ActionTransition {
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _config: &GameConfig) -> Result<(), ActionError> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly. Implementations
    /// may assume that `pre_validate` has already run successfully.
    fn apply(
        &self,
        state: &mut GameState,
        config: &GameConfig,
    ) -> Result<Self::Result, ActionError>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), ActionError> {
        state.validate().map_err(ActionError::from)
    }
}

/// Discriminant of [`Action`], used for error reporting and statistics.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    Move,
    Hit,
    PlaceWall,
    EndTurn,
}

/// Every input the engine accepts. Closed set, matched exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move(MoveAction),
    Hit(HitAction),
    PlaceWall(PlaceWallAction),
    EndTurn(EndTurnAction),
}

impl Action {
    pub fn move_to(target: Position) -> Self {
        Self::Move(MoveAction::new(target))
    }

    pub fn hit() -> Self {
        Self::Hit(HitAction)
    }

    pub fn place_wall(target: Position) -> Self {
        Self::PlaceWall(PlaceWallAction::new(target))
    }

    pub fn end_turn() -> Self {
        Self::EndTurn(EndTurnAction)
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Move(_) => ActionKind::Move,
            Action::Hit(_) => ActionKind::Hit,
            Action::PlaceWall(_) => ActionKind::PlaceWall,
            Action::EndTurn(_) => ActionKind::EndTurn,
        }
    }

    /// Runs only the pre-validation of this action against `state`.
    pub fn check(&self, state: &GameState, config: &GameConfig) -> Result<(), ActionError> {
        match self {
            Action::Move(action) => action.pre_validate(state, config),
            Action::Hit(action) => action.pre_validate(state, config),
            Action::PlaceWall(action) => action.pre_validate(state, config),
            Action::EndTurn(action) => action.pre_validate(state, config),
        }
    }
}

/// Gate shared by move, hit and wall placement.
pub(crate) fn ensure_can_act(state: &GameState) -> Result<(), ActionError> {
    if state.game_over {
        return Err(ActionError::GameAlreadyOver);
    }
    if state.turn.actions_locked {
        return Err(ActionError::ActionsLockedThisTurn);
    }
    Ok(())
}
