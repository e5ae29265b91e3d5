use crate::action::{ActionError, ActionResult, ActionTransition, ensure_can_act};
use crate::board;
use crate::config::GameConfig;
use crate::state::{GameState, Position, Wall};

/// Erect a full-health wall on `target`.
///
/// A placement that would leave no wall-free path between the two bases is
/// rejected. An accepted placement locks the turn: the player must end it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceWallAction {
    pub target: Position,
}

impl PlaceWallAction {
    pub fn new(target: Position) -> Self {
        Self { target }
    }

    fn wall_for(&self, state: &GameState) -> Wall {
        Wall::new(self.target, state.current_player(), GameConfig::WALL_HP)
    }
}

impl ActionTransition for PlaceWallAction {
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, config: &GameConfig) -> Result<(), ActionError> {
        ensure_can_act(state)?;

        if state.current_energy() == 0 {
            return Err(ActionError::OutOfEnergy);
        }

        let target = self.target;
        if !board::is_on_board(target) {
            return Err(ActionError::IllegalDestination { target });
        }

        if state.walls.contains(target)
            || board::is_base_cell(target)
            || board::is_jump_cell(target)
            || state.is_token_at(target)
        {
            return Err(ActionError::CellOccupiedOrReserved { target });
        }

        if config.adjacent_walls_only && !state.current_position().is_orthogonal_to(target) {
            return Err(ActionError::IllegalDestination { target });
        }

        if !board::has_path(&state.walls.with(self.wall_for(state))) {
            return Err(ActionError::WallWouldDisconnectBases { target });
        }

        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _config: &GameConfig,
    ) -> Result<Self::Result, ActionError> {
        let player = state.current_player();
        let energy = state
            .energy(player)
            .checked_sub(GameConfig::ACTION_COST)
            .ok_or(ActionError::OutOfEnergy)?;

        let wall = self.wall_for(state);
        state
            .walls
            .insert(wall)
            .map_err(|_| ActionError::CellOccupiedOrReserved {
                target: self.target,
            })?;

        state.set_energy(player, energy);
        state.turn.actions_locked = true;
        state.turn.last_action_was_wall = true;

        Ok(ActionResult::PlaceWall {
            position: self.target,
        })
    }
}
