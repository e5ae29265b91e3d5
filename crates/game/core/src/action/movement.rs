use crate::action::{ActionError, ActionResult, ActionTransition, MoveKind, ensure_can_act};
use crate::board;
use crate::config::GameConfig;
use crate::state::{GameState, Position};

/// Move the acting token to `target`.
///
/// Legal targets are orthogonal neighbors, plus the partner jump cell once per
/// turn while standing on one of the mover's own jump cells. Stepping onto the
/// opponent captures it and ends the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub target: Position,
}

impl MoveAction {
    pub fn new(target: Position) -> Self {
        Self { target }
    }

    fn classify(&self, state: &GameState) -> Result<MoveKind, ActionError> {
        let target = self.target;
        if !board::is_on_board(target) {
            return Err(ActionError::IllegalDestination { target });
        }

        let player = state.current_player();
        let origin = state.current_position();

        if origin.is_orthogonal_to(target) {
            return Ok(MoveKind::Step);
        }

        if board::jump_partner(player, origin) == Some(target) {
            if state.turn.used_jump[player] {
                return Err(ActionError::JumpAlreadyUsed);
            }
            return Ok(MoveKind::Jump);
        }

        Err(ActionError::IllegalDestination { target })
    }
}

impl ActionTransition for MoveAction {
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), ActionError> {
        ensure_can_act(state)?;
        self.classify(state)?;

        if state.walls.blocks(self.target) {
            return Err(ActionError::IllegalDestination {
                target: self.target,
            });
        }

        if state.current_energy() == 0 {
            return Err(ActionError::OutOfEnergy);
        }

        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _config: &GameConfig,
    ) -> Result<Self::Result, ActionError> {
        let kind = self.classify(state)?;
        let player = state.current_player();
        let from = state.current_position();
        let to = self.target;

        // Capture: the game ends on the spot, no energy is charged.
        if to == state.opponent_position() {
            state.positions[player] = to;
            state.declare_winner(player);
            return Ok(ActionResult::Move {
                from,
                to,
                kind,
                captured: true,
                refunded: false,
            });
        }

        let refunded = board::is_energy_cell(to);
        let refund = if refunded { GameConfig::ACTION_COST } else { 0 };
        let energy = state
            .energy(player)
            .checked_sub(GameConfig::ACTION_COST)
            .ok_or(ActionError::OutOfEnergy)?;
        state.set_energy(player, energy + refund);
        state.positions[player] = to;

        if kind == MoveKind::Jump {
            state.turn.used_jump[player] = true;
        }

        Ok(ActionResult::Move {
            from,
            to,
            kind,
            captured: false,
            refunded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PlayerColor, Wall};

    fn run(state: &mut GameState, target: Position) -> Result<ActionResult, ActionError> {
        let config = GameConfig::default();
        let action = MoveAction::new(target);
        action.pre_validate(state, &config)?;
        let result = action.apply(state, &config)?;
        action.post_validate(state, &config)?;
        Ok(result)
    }

    #[test]
    fn step_costs_one_energy() {
        let mut state = GameState::new(PlayerColor::Red);
        let result = run(&mut state, Position::new(0, 1)).unwrap();

        assert!(matches!(
            result,
            ActionResult::Move {
                kind: MoveKind::Step,
                captured: false,
                ..
            }
        ));
        assert_eq!(state.position(PlayerColor::Red), Position::new(0, 1));
        assert_eq!(state.energy(PlayerColor::Red), 0);
    }

    #[test]
    fn rejects_non_adjacent_and_off_board_targets() {
        let mut state = GameState::new(PlayerColor::Red);
        assert_eq!(
            run(&mut state, Position::new(2, 0)),
            Err(ActionError::IllegalDestination {
                target: Position::new(2, 0)
            })
        );
        assert_eq!(
            run(&mut state, Position::new(-1, 0)),
            Err(ActionError::IllegalDestination {
                target: Position::new(-1, 0)
            })
        );
        // Diagonal off a non-jump cell.
        assert!(run(&mut state, Position::new(1, 1)).is_err());
    }

    #[test]
    fn rejects_walled_target() {
        let mut state = GameState::new(PlayerColor::Red);
        state.positions.red = Position::new(1, 1);
        state
            .walls
            .insert(Wall::new(Position::new(1, 2), PlayerColor::Blue, 1))
            .unwrap();

        assert_eq!(
            run(&mut state, Position::new(1, 2)),
            Err(ActionError::IllegalDestination {
                target: Position::new(1, 2)
            })
        );
    }

    #[test]
    fn rejects_without_energy() {
        let mut state = GameState::new(PlayerColor::Red);
        state.energy.red = 0;
        assert_eq!(
            run(&mut state, Position::new(0, 1)),
            Err(ActionError::OutOfEnergy)
        );
    }

    #[test]
    fn jump_between_own_jump_cells_once_per_turn() {
        let mut state = GameState::new(PlayerColor::Red);
        state.positions.red = Position::new(1, 0);
        state.energy.red = 2;

        let result = run(&mut state, Position::new(0, 1)).unwrap();
        assert!(matches!(
            result,
            ActionResult::Move {
                kind: MoveKind::Jump,
                ..
            }
        ));
        assert!(state.turn.used_jump.red);

        assert_eq!(
            run(&mut state, Position::new(1, 0)),
            Err(ActionError::JumpAlreadyUsed)
        );
    }

    #[test]
    fn cannot_use_opponents_jump_cells() {
        let mut state = GameState::new(PlayerColor::Red);
        state.positions.red = Position::new(2, 4);
        state.positions.blue = Position::new(0, 4);
        assert_eq!(
            run(&mut state, Position::new(3, 3)),
            Err(ActionError::IllegalDestination {
                target: Position::new(3, 3)
            })
        );
    }

    #[test]
    fn energy_cell_refunds_the_move() {
        let mut state = GameState::new(PlayerColor::Red);
        state.positions.red = Position::new(1, 1);

        let result = run(&mut state, Position::new(1, 2)).unwrap();
        assert!(matches!(result, ActionResult::Move { refunded: true, .. }));
        assert_eq!(state.energy(PlayerColor::Red), 1);
    }

    #[test]
    fn refund_never_exceeds_cap() {
        let mut state = GameState::new(PlayerColor::Red);
        state.positions.red = Position::new(1, 1);
        state.energy.red = 2;

        run(&mut state, Position::new(1, 2)).unwrap();
        assert_eq!(state.energy(PlayerColor::Red), 2);
    }

    #[test]
    fn capture_ends_game_without_energy_charge() {
        let mut state = GameState::new(PlayerColor::Red);
        state.positions.red = Position::new(3, 3);
        // Blue sits on its own base next to red.
        let result = run(&mut state, Position::new(3, 4)).unwrap();

        assert!(matches!(result, ActionResult::Move { captured: true, .. }));
        assert!(state.game_over);
        assert_eq!(state.winner, Some(PlayerColor::Red));
        assert_eq!(state.energy(PlayerColor::Red), 1);
    }

    #[test]
    fn no_moves_after_wall_lock() {
        let mut state = GameState::new(PlayerColor::Red);
        state.turn.actions_locked = true;
        assert_eq!(
            run(&mut state, Position::new(0, 1)),
            Err(ActionError::ActionsLockedThisTurn)
        );
    }
}
