use super::{PerColor, PlayerColor};

/// Per-turn bookkeeping for the player currently acting.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// The side allowed to act.
    pub current_player: PlayerColor,

    /// Whether each side has spent its diagonal jump. Reset for a side when
    /// its turn begins.
    pub used_jump: PerColor<bool>,

    /// Hits performed during the current turn.
    pub hits_this_turn: u8,

    /// Set once a wall is placed; only ending the turn is accepted afterwards.
    pub actions_locked: bool,

    /// Set when the acting player placed a wall this turn. Consumed by the
    /// next turn change to grant the opponent comeback energy.
    pub last_action_was_wall: bool,
}

impl TurnState {
    pub fn new(current_player: PlayerColor) -> Self {
        Self {
            current_player,
            used_jump: PerColor::splat(false),
            hits_this_turn: 0,
            actions_locked: false,
            last_action_was_wall: false,
        }
    }

    /// Hands the turn to the opponent and clears the per-turn flags.
    pub fn pass_to_opponent(&mut self) -> PlayerColor {
        let next = self.current_player.opponent();
        self.current_player = next;
        self.used_jump[next] = false;
        self.hits_this_turn = 0;
        self.actions_locked = false;
        self.last_action_was_wall = false;
        next
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new(PlayerColor::Red)
    }
}
