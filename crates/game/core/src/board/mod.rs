//! Static board geometry.
//!
//! The board is a fixed 4×5 grid. Every query here is a pure lookup over
//! compile-time constants; nothing depends on game state.

pub mod connectivity;

pub use connectivity::has_path;

use arrayvec::ArrayVec;

use crate::state::{PlayerColor, Position};

/// Number of rows on the board.
pub const ROWS: i32 = 4;
/// Number of columns on the board.
pub const COLS: i32 = 5;
/// Total number of cells.
pub const CELL_COUNT: usize = (ROWS * COLS) as usize;

const RED_BASE: Position = Position::new(0, 0);
const BLUE_BASE: Position = Position::new(3, 4);

const RED_JUMPS: [Position; 2] = [Position::new(1, 0), Position::new(0, 1)];
const BLUE_JUMPS: [Position; 2] = [Position::new(2, 4), Position::new(3, 3)];

/// Cells that refund the energy spent on the move that lands on them.
pub const ENERGY_CELLS: [Position; 4] = [
    Position::new(0, 4),
    Position::new(1, 2),
    Position::new(2, 2),
    Position::new(3, 0),
];

const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Static role of a cell, independent of tokens and walls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Base(PlayerColor),
    Jump(PlayerColor),
    Energy,
    Empty,
}

pub const fn is_on_board(position: Position) -> bool {
    position.row >= 0 && position.row < ROWS && position.col >= 0 && position.col < COLS
}

pub const fn home_base(color: PlayerColor) -> Position {
    match color {
        PlayerColor::Red => RED_BASE,
        PlayerColor::Blue => BLUE_BASE,
    }
}

/// The fixed jump pair for `color`. The two cells are diagonal neighbors.
pub const fn jump_cells(color: PlayerColor) -> [Position; 2] {
    match color {
        PlayerColor::Red => RED_JUMPS,
        PlayerColor::Blue => BLUE_JUMPS,
    }
}

/// The jump cell paired with `position`, if `position` is one of `color`'s jump cells.
pub fn jump_partner(color: PlayerColor, position: Position) -> Option<Position> {
    let [a, b] = jump_cells(color);
    if position == a {
        Some(b)
    } else if position == b {
        Some(a)
    } else {
        None
    }
}

pub fn is_jump_cell(position: Position) -> bool {
    PlayerColor::ALL
        .iter()
        .any(|&color| jump_cells(color).contains(&position))
}

pub fn is_energy_cell(position: Position) -> bool {
    ENERGY_CELLS.contains(&position)
}

pub fn is_base_cell(position: Position) -> bool {
    position == RED_BASE || position == BLUE_BASE
}

pub fn cell_kind(position: Position) -> CellKind {
    for color in PlayerColor::ALL {
        if position == home_base(color) {
            return CellKind::Base(color);
        }
        if jump_cells(color).contains(&position) {
            return CellKind::Jump(color);
        }
    }
    if is_energy_cell(position) {
        CellKind::Energy
    } else {
        CellKind::Empty
    }
}

/// In-bounds orthogonal neighbors (up, down, left, right).
pub fn orthogonal_neighbors(position: Position) -> ArrayVec<Position, 4> {
    neighbors(position, &ORTHOGONAL)
}

/// In-bounds diagonal neighbors.
pub fn diagonal_neighbors(position: Position) -> ArrayVec<Position, 4> {
    neighbors(position, &DIAGONAL)
}

/// Union of orthogonal and diagonal neighbors.
pub fn surrounding_cells(position: Position) -> ArrayVec<Position, 8> {
    orthogonal_neighbors(position)
        .into_iter()
        .chain(diagonal_neighbors(position))
        .collect()
}

/// Every cell in row-major order.
pub fn cells() -> impl Iterator<Item = Position> {
    (0..ROWS).flat_map(|row| (0..COLS).map(move |col| Position::new(row, col)))
}

/// Row-major index of an on-board cell.
pub(crate) fn index_of(position: Position) -> Option<usize> {
    is_on_board(position).then(|| (position.row * COLS + position.col) as usize)
}

fn neighbors(position: Position, deltas: &[(i32, i32); 4]) -> ArrayVec<Position, 4> {
    deltas
        .iter()
        .map(|&(d_row, d_col)| position.offset(d_row, d_col))
        .filter(|&cell| is_on_board(cell))
        .collect()
}
