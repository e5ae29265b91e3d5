mod bitmask;
mod changes;

use crate::action::Action;
use crate::state::{GameState, PlayerColor};

pub use bitmask::StateFields;
pub use changes::{EnergyChange, TokenMove, WallChanges};

/// What a single accepted action changed, for presentation layers that
/// animate or log transitions without diffing whole states themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateDelta {
    /// The action that caused this transition.
    pub action: Action,

    /// Side that performed the action.
    pub actor: PlayerColor,

    /// Nonce of the resulting state.
    pub nonce: u64,

    pub fields: StateFields,
    pub tokens: Vec<TokenMove>,
    pub walls: WallChanges,
    pub energy: Vec<EnergyChange>,

    /// New turn owner, when the turn changed hands.
    pub next_player: Option<PlayerColor>,

    /// Set on the transition that ended the game.
    pub winner: Option<PlayerColor>,
}

impl StateDelta {
    /// Creates a delta by comparing two game states field by field.
    pub fn from_states(action: Action, before: &GameState, after: &GameState) -> Self {
        let mut fields = StateFields::empty();

        let tokens: Vec<TokenMove> = PlayerColor::ALL
            .into_iter()
            .filter(|&color| before.positions[color] != after.positions[color])
            .map(|color| TokenMove {
                color,
                from: before.positions[color],
                to: after.positions[color],
            })
            .collect();
        if !tokens.is_empty() {
            fields |= StateFields::POSITIONS;
        }

        let walls = WallChanges::from_sets(&before.walls, &after.walls);
        if !walls.is_empty() {
            fields |= StateFields::WALLS;
        }

        let energy: Vec<EnergyChange> = PlayerColor::ALL
            .into_iter()
            .filter(|&color| before.energy[color] != after.energy[color])
            .map(|color| EnergyChange {
                color,
                before: before.energy[color],
                after: after.energy[color],
            })
            .collect();
        if !energy.is_empty() {
            fields |= StateFields::ENERGY;
        }

        let next_player = (before.turn.current_player != after.turn.current_player)
            .then_some(after.turn.current_player);
        if next_player.is_some() {
            fields |= StateFields::TURN_OWNER;
        }

        let (b, a) = (&before.turn, &after.turn);
        if b.used_jump != a.used_jump
            || b.hits_this_turn != a.hits_this_turn
            || b.actions_locked != a.actions_locked
            || b.last_action_was_wall != a.last_action_was_wall
        {
            fields |= StateFields::TURN_FLAGS;
        }

        let winner = if !before.game_over && after.game_over {
            fields |= StateFields::GAME_OVER;
            after.winner
        } else {
            None
        };

        Self {
            action,
            actor: before.current_player(),
            nonce: after.nonce,
            fields,
            tokens,
            walls,
            energy,
            next_player,
            winner,
        }
    }

    /// Returns true if no state field changed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Energy change for `color`, if any.
    pub fn energy_of(&self, color: PlayerColor) -> Option<EnergyChange> {
        self.energy.iter().copied().find(|change| change.color == color)
    }
}
