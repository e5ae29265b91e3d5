//! Authoritative game state representation.
//!
//! This module owns the data structures that describe tokens, walls, energy
//! and turn bookkeeping. Callers clone or query this state but mutate it
//! exclusively through the engine.
pub mod delta;
pub mod error;
pub mod types;

pub use delta::{EnergyChange, StateDelta, StateFields, TokenMove, WallChanges};
pub use error::InvariantViolation;
pub use types::{PerColor, PlayerColor, Position, TurnState, Wall, WallDamage, WallSet};

use crate::board;
use crate::config::GameConfig;

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Number of transitions accepted so far. Increments once per successful
    /// action, including turn ends.
    pub nonce: u64,

    /// Turn owner and per-turn flags.
    pub turn: TurnState,

    /// Token cell for each side.
    pub positions: PerColor<Position>,

    /// Active walls. Destroyed walls are removed, never kept as tombstones.
    pub walls: WallSet,

    /// Spendable energy for each side, always within `0..=MAX_ENERGY`.
    pub energy: PerColor<u8>,

    pub game_over: bool,
    pub winner: Option<PlayerColor>,
}

impl GameState {
    /// Creates the opening position: both tokens on their bases, no walls,
    /// starting energy for both sides.
    pub fn new(starting_player: PlayerColor) -> Self {
        Self {
            nonce: 0,
            turn: TurnState::new(starting_player),
            positions: PerColor::new(
                board::home_base(PlayerColor::Red),
                board::home_base(PlayerColor::Blue),
            ),
            walls: WallSet::new(),
            energy: PerColor::splat(GameConfig::STARTING_ENERGY),
            game_over: false,
            winner: None,
        }
    }

    #[inline]
    pub fn current_player(&self) -> PlayerColor {
        self.turn.current_player
    }

    pub fn position(&self, color: PlayerColor) -> Position {
        self.positions[color]
    }

    pub fn energy(&self, color: PlayerColor) -> u8 {
        self.energy[color]
    }

    pub fn current_position(&self) -> Position {
        self.position(self.current_player())
    }

    pub fn opponent_position(&self) -> Position {
        self.position(self.current_player().opponent())
    }

    pub fn current_energy(&self) -> u8 {
        self.energy(self.current_player())
    }

    /// Sets a side's energy, clamped to the maximum.
    pub fn set_energy(&mut self, color: PlayerColor, energy: u8) {
        self.energy[color] = energy.min(GameConfig::MAX_ENERGY);
    }

    /// True if either token stands on `position`.
    pub fn is_token_at(&self, position: Position) -> bool {
        self.positions.red == position || self.positions.blue == position
    }

    /// Marks the game finished in favor of `winner`. The state is terminal afterwards.
    pub fn declare_winner(&mut self, winner: PlayerColor) {
        self.game_over = true;
        self.winner = Some(winner);
    }

    /// Checks every board invariant. Accepted transitions must always pass.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        for (color, &position) in self.positions.iter() {
            if !board::is_on_board(position) {
                return Err(InvariantViolation::TokenOffBoard { color, position });
            }
        }

        // Tokens may only share a cell in the capture that ended the game.
        if self.positions.red == self.positions.blue && !self.game_over {
            return Err(InvariantViolation::TokensOverlap {
                position: self.positions.red,
            });
        }

        for wall in self.walls.iter() {
            let position = wall.position;
            if !board::is_on_board(position) {
                return Err(InvariantViolation::WallOffBoard { position });
            }
            if board::is_base_cell(position) || board::is_jump_cell(position) {
                return Err(InvariantViolation::WallOnReservedCell { position });
            }
            if self.is_token_at(position) {
                return Err(InvariantViolation::WallOnToken { position });
            }
            if !(1..=GameConfig::WALL_HP).contains(&wall.hp) {
                return Err(InvariantViolation::WallHpOutOfRange {
                    position,
                    hp: wall.hp,
                });
            }
        }

        if !board::has_path(&self.walls) {
            return Err(InvariantViolation::BasesDisconnected);
        }

        for (color, &energy) in self.energy.iter() {
            if energy > GameConfig::MAX_ENERGY {
                return Err(InvariantViolation::EnergyOutOfRange { color, energy });
            }
        }

        match (self.game_over, self.winner) {
            (false, Some(_)) => Err(InvariantViolation::WinnerWithoutGameOver),
            (true, None) => Err(InvariantViolation::GameOverWithoutWinner),
            _ => Ok(()),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(PlayerColor::Red)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_position_is_valid() {
        let state = GameState::new(PlayerColor::Blue);
        assert_eq!(state.current_player(), PlayerColor::Blue);
        assert_eq!(state.position(PlayerColor::Red), Position::new(0, 0));
        assert_eq!(state.position(PlayerColor::Blue), Position::new(3, 4));
        assert_eq!(state.energy, PerColor::splat(1));
        assert!(state.walls.is_empty());
        assert!(!state.turn.actions_locked);
        assert_eq!(state.validate(), Ok(()));
    }

    #[test]
    fn set_energy_clamps_to_maximum() {
        let mut state = GameState::default();
        state.set_energy(PlayerColor::Red, 5);
        assert_eq!(state.energy(PlayerColor::Red), GameConfig::MAX_ENERGY);
    }

    #[test]
    fn validate_rejects_wall_on_jump_cell() {
        let mut state = GameState::default();
        state
            .walls
            .insert(Wall::new(Position::new(1, 0), PlayerColor::Blue, 2))
            .unwrap();
        assert_eq!(
            state.validate(),
            Err(InvariantViolation::WallOnReservedCell {
                position: Position::new(1, 0)
            })
        );
    }

    #[test]
    fn validate_rejects_overlap_unless_captured() {
        let mut state = GameState::default();
        state.positions.red = state.positions.blue;
        assert!(matches!(
            state.validate(),
            Err(InvariantViolation::TokensOverlap { .. })
        ));

        state.declare_winner(PlayerColor::Red);
        assert_eq!(state.validate(), Ok(()));
    }
}
