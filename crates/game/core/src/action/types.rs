use crate::state::{PlayerColor, Position, WallDamage};

/// How a token travelled during a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    /// One orthogonal step.
    Step,
    /// Diagonal hop between the mover's own jump cells.
    Jump,
}

/// Opponent displacement caused by a hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knockback {
    pub from: Position,
    /// Equal to `from` when the push was blocked by the edge or a wall.
    pub to: Position,
}

impl Knockback {
    pub fn was_blocked(&self) -> bool {
        self.from == self.to
    }
}

/// Everything a single hit resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitOutcome {
    pub walls: Vec<WallDamage>,
    pub knockback: Option<Knockback>,
    pub energy_spent: u8,
    pub reverse_capture: bool,
}

impl HitOutcome {
    pub fn walls_destroyed(&self) -> usize {
        self.walls
            .iter()
            .filter(|damage| matches!(damage, WallDamage::Destroyed { .. }))
            .count()
    }
}

/// Action-specific result of an accepted transition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    Move {
        from: Position,
        to: Position,
        kind: MoveKind,
        captured: bool,
        /// Landed on an energy cell and got the move's energy back.
        refunded: bool,
    },
    Hit(HitOutcome),
    PlaceWall {
        position: Position,
    },
    EndTurn {
        next_player: PlayerColor,
        energy: u8,
    },
}
