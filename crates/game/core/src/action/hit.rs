use crate::action::{
    ActionError, ActionResult, ActionTransition, HitOutcome, Knockback, ensure_can_act,
};
use crate::board;
use crate::config::GameConfig;
use crate::state::GameState;

/// Area strike around the acting token.
///
/// All eight surrounding cells are hit at once: every wall there loses one hp,
/// and an orthogonally adjacent opponent is pushed one cell further away.
/// Pushing the opponent onto the hitter's own base wins the game.
///
/// The first hit in a turn costs one energy, each further hit one more than the
/// previous, and a turn never holds more hits than the player has energy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitAction;

impl ActionTransition for HitAction {
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), ActionError> {
        ensure_can_act(state)?;

        let energy = state.current_energy();
        if energy == 0 {
            return Err(ActionError::OutOfEnergy);
        }

        let hits = state.turn.hits_this_turn;
        if hits >= energy {
            return Err(ActionError::HitLimitReached);
        }

        if GameConfig::hit_cost(hits) > energy {
            return Err(ActionError::OutOfEnergy);
        }

        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _config: &GameConfig,
    ) -> Result<Self::Result, ActionError> {
        let player = state.current_player();
        let opponent = player.opponent();
        let origin = state.current_position();
        let cost = GameConfig::hit_cost(state.turn.hits_this_turn);

        let mut outcome = HitOutcome {
            energy_spent: cost,
            ..HitOutcome::default()
        };

        for cell in board::surrounding_cells(origin) {
            if let Some(damage) = state.walls.damage(cell) {
                outcome.walls.push(damage);
            }
        }

        let target = state.position(opponent);
        if origin.is_orthogonal_to(target) {
            let (d_row, d_col) = origin.direction_to(target);
            let pushed = target.offset(d_row, d_col);
            let landing = if board::is_on_board(pushed) && !state.walls.blocks(pushed) {
                pushed
            } else {
                target
            };
            state.positions[opponent] = landing;
            outcome.knockback = Some(Knockback {
                from: target,
                to: landing,
            });
            outcome.reverse_capture = landing == board::home_base(player);
        }

        let energy = state
            .energy(player)
            .checked_sub(cost)
            .ok_or(ActionError::OutOfEnergy)?;
        state.set_energy(player, energy);
        state.turn.hits_this_turn = state.turn.hits_this_turn.saturating_add(1);

        if outcome.reverse_capture {
            state.declare_winner(player);
        }

        Ok(ActionResult::Hit(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PlayerColor, Position, Wall, WallDamage};

    fn run(state: &mut GameState) -> Result<HitOutcome, ActionError> {
        let config = GameConfig::default();
        HitAction.pre_validate(state, &config)?;
        let result = HitAction.apply(state, &config)?;
        HitAction.post_validate(state, &config)?;
        match result {
            ActionResult::Hit(outcome) => Ok(outcome),
            other => panic!("unexpected result {other:?}"),
        }
    }

    fn wall(row: i32, col: i32) -> Wall {
        Wall::new(Position::new(row, col), PlayerColor::Blue, 2)
    }

    #[test]
    fn damages_every_surrounding_wall() {
        let mut state = GameState::new(PlayerColor::Red);
        state.positions.red = Position::new(1, 2);
        for (row, col) in [(0, 2), (2, 3), (1, 1)] {
            state.walls.insert(wall(row, col)).unwrap();
        }
        // Out of reach.
        state.walls.insert(wall(1, 4)).unwrap();

        let outcome = run(&mut state).unwrap();

        assert_eq!(outcome.walls.len(), 3);
        assert_eq!(outcome.energy_spent, 1);
        assert!(state.walls.iter().filter(|w| w.hp == 1).count() == 3);
        assert_eq!(state.walls.get(Position::new(1, 4)).map(|w| w.hp), Some(2));
        assert_eq!(state.energy(PlayerColor::Red), 0);
        assert_eq!(state.turn.hits_this_turn, 1);
    }

    #[test]
    fn second_hit_in_same_turn_is_throttled() {
        let mut state = GameState::new(PlayerColor::Red);
        state.energy.red = 2;

        run(&mut state).unwrap();
        assert_eq!(state.energy(PlayerColor::Red), 1);
        assert_eq!(run(&mut state), Err(ActionError::HitLimitReached));
    }

    #[test]
    fn rejects_without_energy() {
        let mut state = GameState::new(PlayerColor::Red);
        state.energy.red = 0;
        assert_eq!(run(&mut state), Err(ActionError::OutOfEnergy));
    }

    #[test]
    fn destroys_wall_with_one_hp() {
        let mut state = GameState::new(PlayerColor::Red);
        state.positions.red = Position::new(1, 1);
        state
            .walls
            .insert(Wall::new(Position::new(2, 2), PlayerColor::Blue, 1))
            .unwrap();

        let outcome = run(&mut state).unwrap();

        assert_eq!(
            outcome.walls,
            vec![WallDamage::Destroyed {
                position: Position::new(2, 2)
            }]
        );
        assert!(state.walls.is_empty());
    }

    #[test]
    fn pushes_adjacent_opponent_one_cell() {
        let mut state = GameState::new(PlayerColor::Red);
        state.positions.red = Position::new(1, 1);
        state.positions.blue = Position::new(1, 2);

        let outcome = run(&mut state).unwrap();

        assert_eq!(
            outcome.knockback,
            Some(Knockback {
                from: Position::new(1, 2),
                to: Position::new(1, 3)
            })
        );
        assert_eq!(state.position(PlayerColor::Blue), Position::new(1, 3));
        assert!(!state.game_over);
    }

    #[test]
    fn diagonal_opponent_is_not_pushed() {
        let mut state = GameState::new(PlayerColor::Red);
        state.positions.red = Position::new(1, 1);
        state.positions.blue = Position::new(2, 2);

        let outcome = run(&mut state).unwrap();
        assert_eq!(outcome.knockback, None);
        assert_eq!(state.position(PlayerColor::Blue), Position::new(2, 2));
    }

    #[test]
    fn push_blocked_by_edge_or_wall() {
        let mut state = GameState::new(PlayerColor::Red);
        state.positions.red = Position::new(2, 1);
        state.positions.blue = Position::new(3, 1);

        let outcome = run(&mut state).unwrap();
        assert!(outcome.knockback.is_some_and(|k| k.was_blocked()));

        let mut state = GameState::new(PlayerColor::Red);
        state.positions.red = Position::new(1, 0);
        state.positions.blue = Position::new(1, 1);
        state.walls.insert(wall(1, 2)).unwrap();

        let outcome = run(&mut state).unwrap();
        // The wall is out of the hit's reach and keeps blocking.
        assert!(outcome.knockback.is_some_and(|k| k.was_blocked()));
        assert_eq!(state.position(PlayerColor::Blue), Position::new(1, 1));
    }

    #[test]
    fn knocking_opponent_onto_own_base_wins() {
        let mut state = GameState::new(PlayerColor::Red);
        state.positions.red = Position::new(0, 2);
        state.positions.blue = Position::new(0, 1);

        let outcome = run(&mut state).unwrap();

        assert!(outcome.reverse_capture);
        assert_eq!(state.position(PlayerColor::Blue), Position::new(0, 0));
        assert!(state.game_over);
        assert_eq!(state.winner, Some(PlayerColor::Red));
    }
}
