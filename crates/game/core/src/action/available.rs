//! Legal-action queries for the acting player.
//!
//! Candidates are filtered through [`Action::check`], the same pre-validation
//! the engine runs, so these queries can never disagree with execution.

use crate::action::Action;
use crate::board;
use crate::config::GameConfig;
use crate::state::{GameState, Position};

/// Cells the acting player could target right now, grouped by action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidMoves {
    /// Legal move destinations, steps and jump alike.
    pub moves: Vec<Position>,
    /// Cells that would accept a wall.
    pub wall_placements: Vec<Position>,
    /// Cells a hit would affect: surrounding walls and an adjacent opponent.
    /// Empty when a hit is not currently legal.
    pub hit_targets: Vec<Position>,
}

impl ValidMoves {
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.wall_placements.is_empty() && self.hit_targets.is_empty()
    }
}

pub fn valid_moves(state: &GameState, config: &GameConfig) -> ValidMoves {
    let moves = move_candidates(state)
        .filter(|&target| Action::move_to(target).check(state, config).is_ok())
        .collect();

    let wall_placements = board::cells()
        .filter(|&target| Action::place_wall(target).check(state, config).is_ok())
        .collect();

    let hit_targets = if Action::hit().check(state, config).is_ok() {
        hit_targets(state)
    } else {
        Vec::new()
    };

    ValidMoves {
        moves,
        wall_placements,
        hit_targets,
    }
}

/// Every action the engine would accept from `state`, end turn included.
pub fn available_actions(state: &GameState, config: &GameConfig) -> Vec<Action> {
    let mut actions: Vec<Action> = move_candidates(state)
        .map(Action::move_to)
        .chain(std::iter::once(Action::hit()))
        .chain(board::cells().map(Action::place_wall))
        .chain(std::iter::once(Action::end_turn()))
        .filter(|action| action.check(state, config).is_ok())
        .collect();
    actions.dedup();
    actions
}

/// True if any move, hit or wall placement is currently legal.
pub fn has_playable_action(state: &GameState, config: &GameConfig) -> bool {
    let accepts = |action: Action| action.check(state, config).is_ok();

    move_candidates(state).map(Action::move_to).any(accepts)
        || accepts(Action::hit())
        || board::cells().map(Action::place_wall).any(accepts)
}

fn move_candidates(state: &GameState) -> impl Iterator<Item = Position> {
    let origin = state.current_position();
    board::orthogonal_neighbors(origin)
        .into_iter()
        .chain(board::jump_partner(state.current_player(), origin))
}

fn hit_targets(state: &GameState) -> Vec<Position> {
    let origin = state.current_position();
    let opponent = state.opponent_position();
    board::surrounding_cells(origin)
        .into_iter()
        .filter(|&cell| {
            state.walls.contains(cell) || (cell == opponent && origin.is_orthogonal_to(cell))
        })
        .collect()
}
