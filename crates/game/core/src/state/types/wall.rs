use super::{PlayerColor, Position};

/// Destructible barrier occupying a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wall {
    pub position: Position,
    pub owner: PlayerColor,
    pub hp: u8,
}

impl Wall {
    pub const fn new(position: Position, owner: PlayerColor, hp: u8) -> Self {
        Self { position, owner, hp }
    }

    /// Intact walls block traversal. Destroyed walls never stay in a [`WallSet`],
    /// but hypothetical sets built by callers may still contain them.
    #[inline]
    pub const fn is_intact(&self) -> bool {
        self.hp > 0
    }
}

/// Result of applying one point of damage to a wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WallDamage {
    /// Wall survived with the given remaining hp.
    Damaged { position: Position, remaining: u8 },
    /// Wall reached zero hp and was removed.
    Destroyed { position: Position },
}

impl WallDamage {
    pub fn position(&self) -> Position {
        match *self {
            WallDamage::Damaged { position, .. } | WallDamage::Destroyed { position } => position,
        }
    }
}

/// Active walls keyed by position, kept sorted so equality and serialization
/// are independent of placement order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WallSet {
    walls: Vec<Wall>,
}

impl WallSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Wall> {
        self.walls.iter()
    }

    pub fn get(&self, position: Position) -> Option<&Wall> {
        self.search(position).ok().map(|index| &self.walls[index])
    }

    pub fn contains(&self, position: Position) -> bool {
        self.search(position).is_ok()
    }

    /// True when an intact wall stands on `position`.
    pub fn blocks(&self, position: Position) -> bool {
        self.get(position).is_some_and(Wall::is_intact)
    }

    /// Inserts a wall. Returns the wall back if the cell is already walled.
    pub fn insert(&mut self, wall: Wall) -> Result<(), Wall> {
        match self.search(wall.position) {
            Ok(_) => Err(wall),
            Err(index) => {
                self.walls.insert(index, wall);
                Ok(())
            }
        }
    }

    /// Applies one point of damage to the wall on `position`, removing it when
    /// its hp reaches zero. Returns `None` if no wall stands there.
    pub fn damage(&mut self, position: Position) -> Option<WallDamage> {
        let index = self.search(position).ok()?;
        let wall = &mut self.walls[index];
        wall.hp = wall.hp.saturating_sub(1);

        if wall.is_intact() {
            Some(WallDamage::Damaged {
                position,
                remaining: wall.hp,
            })
        } else {
            self.walls.remove(index);
            Some(WallDamage::Destroyed { position })
        }
    }

    /// Copy of this set with `wall` added, used for what-if connectivity checks.
    pub fn with(&self, wall: Wall) -> Self {
        let mut next = self.clone();
        // An occupied cell keeps its current wall; callers reject that case earlier.
        let _ = next.insert(wall);
        next
    }

    fn search(&self, position: Position) -> Result<usize, usize> {
        self.walls
            .binary_search_by(|wall| wall.position.cmp(&position))
    }
}

impl FromIterator<Wall> for WallSet {
    fn from_iter<I: IntoIterator<Item = Wall>>(iter: I) -> Self {
        let mut set = WallSet::new();
        for wall in iter {
            let _ = set.insert(wall);
        }
        set
    }
}
