use std::collections::BTreeMap;

use crate::state::{PlayerColor, Position, Wall, WallSet};

/// A token that changed cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenMove {
    pub color: PlayerColor,
    pub from: Position,
    pub to: Position,
}

/// Energy of one side before and after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyChange {
    pub color: PlayerColor,
    pub before: u8,
    pub after: u8,
}

impl EnergyChange {
    pub fn gained(&self) -> i16 {
        i16::from(self.after) - i16::from(self.before)
    }
}

/// Wall set difference, keyed by cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallChanges {
    pub placed: Vec<Wall>,
    /// Walls still standing with fewer hit points than before.
    pub damaged: Vec<Wall>,
    pub destroyed: Vec<Position>,
}

impl WallChanges {
    pub(super) fn from_sets(before: &WallSet, after: &WallSet) -> Self {
        let mut remaining: BTreeMap<Position, &Wall> =
            before.iter().map(|wall| (wall.position, wall)).collect();
        let mut changes = Self::default();

        for wall in after.iter() {
            match remaining.remove(&wall.position) {
                Some(prev) if prev.hp > wall.hp => changes.damaged.push(*wall),
                Some(_) => {}
                None => changes.placed.push(*wall),
            }
        }

        changes.destroyed.extend(remaining.into_keys());
        changes
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.placed.is_empty() && self.damaged.is_empty() && self.destroyed.is_empty()
    }
}
