//! Action transition dispatch.

use crate::action::{Action, ActionError, ActionResult, ActionTransition};
use crate::config::GameConfig;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Runs a transition through pre_validate, apply and post_validate, tagging
/// any failure with the phase that produced it. A state that already breaks
/// a board invariant is refused in the pre-validate phase before any rule
/// looks at it.
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    config: &GameConfig,
) -> Result<T::Result, TransitionPhaseError<ActionError>>
where
    T: ActionTransition,
{
    state
        .validate()
        .map_err(ActionError::from)
        .and_then(|()| transition.pre_validate(state, config))
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
    config: &GameConfig,
) -> Result<ActionResult, ExecuteError> {
    match action {
        Action::Move(transition) => {
            drive_transition(transition, state, config).map_err(ExecuteError::Move)
        }
        Action::Hit(transition) => {
            drive_transition(transition, state, config).map_err(ExecuteError::Hit)
        }
        Action::PlaceWall(transition) => {
            drive_transition(transition, state, config).map_err(ExecuteError::PlaceWall)
        }
        Action::EndTurn(transition) => {
            drive_transition(transition, state, config).map_err(ExecuteError::EndTurn)
        }
    }
}
