use crate::action::{ActionError, ActionResult, ActionTransition, has_playable_action};
use crate::config::GameConfig;
use crate::state::GameState;

/// Hand the turn to the opponent.
///
/// Accepted once the acting player is locked by a wall, has no energy left, or
/// has nothing legal to spend it on. The incoming player's energy is replaced,
/// not topped up: two after a wall turn, one otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndTurnAction;

impl ActionTransition for EndTurnAction {
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, config: &GameConfig) -> Result<(), ActionError> {
        if state.game_over {
            return Err(ActionError::GameAlreadyOver);
        }

        if state.turn.actions_locked || state.current_energy() == 0 {
            return Ok(());
        }

        if has_playable_action(state, config) {
            return Err(ActionError::TurnNotFinished);
        }

        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _config: &GameConfig,
    ) -> Result<Self::Result, ActionError> {
        let placed_wall = state.turn.last_action_was_wall;
        let next_player = state.turn.pass_to_opponent();
        let energy = GameConfig::turn_energy(placed_wall);
        state.set_energy(next_player, energy);

        Ok(ActionResult::EndTurn {
            next_player,
            energy: state.energy(next_player),
        })
    }
}
