use bitflags::bitflags;

bitflags! {
    /// Top-level [`GameState`](crate::state::GameState) fields touched by a
    /// transition.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StateFields: u8 {
        const POSITIONS    = 1 << 0;
        const WALLS        = 1 << 1;
        const ENERGY       = 1 << 2;
        const TURN_OWNER   = 1 << 3;
        const TURN_FLAGS   = 1 << 4;
        const GAME_OVER    = 1 << 5;
    }
}
