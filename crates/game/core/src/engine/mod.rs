//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Every
//! action, turn ends included, runs through the same pre_validate → apply →
//! post_validate pipeline against a working copy; the caller's state is only
//! replaced once all three phases succeed, so rejections never mutate it.
//!
//! The free functions [`new_game`], [`apply`] and [`end_turn`] are the
//! value-in / value-out surface for callers that do not hold a mutable state.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, ActionError, ActionResult};
use crate::config::GameConfig;
use crate::state::{GameState, StateDelta};

/// Complete outcome of action execution.
///
/// Contains both state change metadata (delta) and action-specific results.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// What changed between the previous and the resulting state.
    pub delta: StateDelta,

    /// Action-specific execution result.
    pub result: ActionResult,
}

pub struct GameEngine<'a> {
    state: &'a mut GameState,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Executes an action through the transition pipeline.
    ///
    /// On success the nonce advances by one and the outcome describes the
    /// change. On failure the state is left exactly as it was. An input state
    /// that breaks a board invariant is refused with
    /// [`ActionError::InvariantViolated`].
    pub fn execute(&mut self, action: &Action) -> Result<ExecutionOutcome, ExecuteError> {
        let mut working = self.state.clone();

        let result = transition::execute_transition(action, &mut working, self.config)?;
        working.nonce = working.nonce.wrapping_add(1);

        let delta = StateDelta::from_states(*action, self.state, &working);
        *self.state = working;

        Ok(ExecutionOutcome { delta, result })
    }
}

/// Result of the value-level entry points: the resulting state, plus the
/// rejection reason when the action was refused (the state is then the input,
/// unchanged).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub error: Option<ActionError>,
}

impl Transition {
    pub fn is_accepted(&self) -> bool {
        self.error.is_none()
    }
}

/// Builds the opening position for `config`.
pub fn new_game(config: &GameConfig) -> GameState {
    GameState::new(config.starting_player.resolve())
}

/// Attempts one action. Never panics and always returns a state.
pub fn apply(state: &GameState, action: &Action, config: &GameConfig) -> Transition {
    let mut next = state.clone();
    let error = GameEngine::new(&mut next, config)
        .execute(action)
        .err()
        .map(|error| error.kind());
    Transition { state: next, error }
}

/// Attempts to end the current turn.
pub fn end_turn(state: &GameState, config: &GameConfig) -> Transition {
    apply(state, &Action::end_turn(), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{InvariantViolation, PlayerColor, Position, StateFields};

    #[test]
    fn accepted_action_advances_nonce_and_reports_delta() {
        let config = GameConfig::default();
        let mut state = GameState::new(PlayerColor::Red);

        let outcome = GameEngine::new(&mut state, &config)
            .execute(&Action::move_to(Position::new(0, 1)))
            .unwrap();

        assert_eq!(state.nonce, 1);
        assert_eq!(outcome.delta.nonce, 1);
        assert!(outcome.delta.fields.contains(StateFields::POSITIONS));
        assert!(matches!(outcome.result, ActionResult::Move { .. }));
    }

    #[test]
    fn rejection_leaves_state_untouched() {
        let config = GameConfig::default();
        let mut state = GameState::new(PlayerColor::Red);
        let before = state.clone();

        let err = GameEngine::new(&mut state, &config)
            .execute(&Action::move_to(Position::new(2, 2)))
            .unwrap_err();

        assert_eq!(err.phase(), TransitionPhase::PreValidate);
        assert_eq!(err.action_kind(), crate::action::ActionKind::Move);
        assert_eq!(
            err.kind(),
            ActionError::IllegalDestination {
                target: Position::new(2, 2)
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn value_level_apply_returns_input_on_rejection() {
        let config = GameConfig::default();
        let state = new_game(&config);

        let rejected = end_turn(&state, &config);
        assert_eq!(rejected.error, Some(ActionError::TurnNotFinished));
        assert_eq!(rejected.state, state);

        let accepted = apply(&state, &Action::hit(), &config);
        assert!(accepted.is_accepted());
        assert_eq!(accepted.state.nonce, 1);
    }

    #[test]
    fn nothing_is_accepted_after_game_over() {
        let config = GameConfig::default();
        let mut state = new_game(&config);
        state.declare_winner(PlayerColor::Red);

        for action in [
            Action::move_to(Position::new(0, 1)),
            Action::hit(),
            Action::place_wall(Position::new(1, 1)),
            Action::end_turn(),
        ] {
            let transition = apply(&state, &action, &config);
            assert_eq!(transition.error, Some(ActionError::GameAlreadyOver));
            assert_eq!(transition.state, state);
        }
    }

    #[test]
    fn malformed_input_state_is_refused_before_the_rules_run() {
        let config = GameConfig::default();
        let mut state = new_game(&config);
        state.positions.red = Position::new(i32::MAX, 0);

        for action in [
            Action::move_to(Position::new(0, 1)),
            Action::hit(),
            Action::place_wall(Position::new(1, 1)),
            Action::end_turn(),
        ] {
            let transition = apply(&state, &action, &config);
            assert_eq!(
                transition.error,
                Some(ActionError::InvariantViolated(
                    InvariantViolation::TokenOffBoard {
                        color: PlayerColor::Red,
                        position: Position::new(i32::MAX, 0),
                    }
                ))
            );
            assert_eq!(transition.state, state);
        }

        let mut working = state.clone();
        let err = GameEngine::new(&mut working, &config)
            .execute(&Action::hit())
            .unwrap_err();
        assert_eq!(err.phase(), TransitionPhase::PreValidate);
    }
}
