use std::fmt;
use std::ops::{Index, IndexMut};

/// One of the two sides in a match.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PlayerColor {
    Red,
    Blue,
}

impl PlayerColor {
    pub const ALL: [PlayerColor; 2] = [PlayerColor::Red, PlayerColor::Blue];

    /// Returns the other side.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerColor::Red => PlayerColor::Blue,
            PlayerColor::Blue => PlayerColor::Red,
        }
    }
}

/// Discrete board cell expressed as `(row, col)`.
///
/// Coordinates are signed so that off-board targets coming from callers can be
/// represented and rejected instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the cell displaced by `(d_row, d_col)`. The result may be
    /// off-board; coordinates saturate instead of overflowing.
    #[inline]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row.saturating_add(d_row), self.col.saturating_add(d_col))
    }

    /// Unit step from `self` towards `other` when the two cells are neighbors.
    pub fn direction_to(self, other: Position) -> (i32, i32) {
        (
            other.row.cmp(&self.row) as i32,
            other.col.cmp(&self.col) as i32,
        )
    }

    pub fn is_orthogonal_to(self, other: Position) -> bool {
        let d_row = self.row.abs_diff(other.row);
        let d_col = self.col.abs_diff(other.col);
        d_row.checked_add(d_col) == Some(1)
    }

    pub fn is_diagonal_to(self, other: Position) -> bool {
        self.row.abs_diff(other.row) == 1 && self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Pair of values indexed by [`PlayerColor`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerColor<T> {
    pub red: T,
    pub blue: T,
}

impl<T> PerColor<T> {
    pub const fn new(red: T, blue: T) -> Self {
        Self { red, blue }
    }

    pub fn get(&self, color: PlayerColor) -> &T {
        match color {
            PlayerColor::Red => &self.red,
            PlayerColor::Blue => &self.blue,
        }
    }

    pub fn get_mut(&mut self, color: PlayerColor) -> &mut T {
        match color {
            PlayerColor::Red => &mut self.red,
            PlayerColor::Blue => &mut self.blue,
        }
    }

    /// Iterates `(color, value)` pairs, Red first.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerColor, &T)> {
        [(PlayerColor::Red, &self.red), (PlayerColor::Blue, &self.blue)].into_iter()
    }
}

impl<T: Clone> PerColor<T> {
    pub fn splat(value: T) -> Self {
        Self {
            red: value.clone(),
            blue: value,
        }
    }
}

impl<T> Index<PlayerColor> for PerColor<T> {
    type Output = T;

    fn index(&self, color: PlayerColor) -> &T {
        self.get(color)
    }
}

impl<T> IndexMut<PlayerColor> for PerColor<T> {
    fn index_mut(&mut self, color: PlayerColor) -> &mut T {
        self.get_mut(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_parse_case_insensitively() {
        assert_eq!("red".parse::<PlayerColor>(), Ok(PlayerColor::Red));
        assert_eq!("BLUE".parse::<PlayerColor>(), Ok(PlayerColor::Blue));
        assert!("green".parse::<PlayerColor>().is_err());
        assert_eq!(PlayerColor::Blue.to_string(), "blue");
    }

    #[test]
    fn opponent_is_an_involution() {
        for color in PlayerColor::ALL {
            assert_ne!(color, color.opponent());
            assert_eq!(color, color.opponent().opponent());
        }
    }

    #[test]
    fn adjacency_predicates() {
        let origin = Position::new(1, 1);
        assert!(origin.is_orthogonal_to(Position::new(0, 1)));
        assert!(!origin.is_orthogonal_to(Position::new(0, 0)));
        assert!(origin.is_diagonal_to(Position::new(0, 0)));
        assert!(!origin.is_diagonal_to(Position::new(1, 3)));
        assert_eq!(origin.direction_to(Position::new(1, 2)), (0, 1));
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let far = Position::new(i32::MAX, i32::MIN);
        assert_eq!(far.offset(1, -1), far);
        assert!(!far.is_orthogonal_to(Position::new(0, 1)));
        assert!(!far.is_diagonal_to(Position::new(i32::MIN, 0)));
        assert_eq!(far.direction_to(Position::new(0, 0)), (-1, 1));
    }

    #[test]
    fn per_color_indexing() {
        let mut energy = PerColor::splat(1u8);
        energy[PlayerColor::Blue] = 2;
        assert_eq!(energy[PlayerColor::Red], 1);
        assert_eq!(energy.blue, 2);
    }
}
