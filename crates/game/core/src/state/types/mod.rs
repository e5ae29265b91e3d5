pub mod common;
pub mod turn;
pub mod wall;

pub use common::{PerColor, PlayerColor, Position};
pub use turn::TurnState;
pub use wall::{Wall, WallDamage, WallSet};
