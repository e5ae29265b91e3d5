//! Snapshot codec for shipping a [`GameState`] between replicas.
//!
//! Wire format: a bincode envelope `{ version, checksum, payload }` where
//! `payload` is the bincode-encoded state and `checksum` its SHA-256 digest.
//! A decoded state must also pass [`GameState::validate`]; anything else is
//! rejected. [`deserialize`] turns every rejection into a fresh game so a
//! corrupt transfer never leaves a replica without a playable state.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::GameConfig;
use crate::engine;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, InvariantViolation, WallSet};

/// Current envelope version. Bump when the layout of [`GameState`] changes.
pub const SNAPSHOT_VERSION: u16 = 1;

/// SHA-256 digest of a state's canonical encoding.
pub type StateRoot = [u8; 32];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Envelope {
    version: u16,
    checksum: StateRoot,
    payload: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to encode snapshot: {0}")]
    Encode(String),

    #[error("failed to decode snapshot: {0}")]
    Decode(String),

    #[error("unsupported snapshot version {found} (expected {expected})")]
    UnsupportedVersion { found: u16, expected: u16 },

    #[error("snapshot checksum mismatch")]
    ChecksumMismatch,

    #[error("snapshot walls are not in canonical order")]
    NonCanonicalWalls,

    #[error("snapshot holds an invalid state: {0}")]
    InvalidState(#[from] InvariantViolation),
}

impl GameError for SnapshotError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            SnapshotError::Encode(_) => ErrorSeverity::Internal,
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SnapshotError::Encode(_) => "SNAPSHOT_ENCODE",
            SnapshotError::Decode(_) => "SNAPSHOT_DECODE",
            SnapshotError::UnsupportedVersion { .. } => "SNAPSHOT_UNSUPPORTED_VERSION",
            SnapshotError::ChecksumMismatch => "SNAPSHOT_CHECKSUM_MISMATCH",
            SnapshotError::NonCanonicalWalls => "SNAPSHOT_NON_CANONICAL_WALLS",
            SnapshotError::InvalidState(_) => "SNAPSHOT_INVALID_STATE",
        }
    }
}

fn encode_state(state: &GameState) -> Result<Vec<u8>, SnapshotError> {
    bincode::serialize(state).map_err(|e| SnapshotError::Encode(e.to_string()))
}

fn digest(bytes: &[u8]) -> StateRoot {
    Sha256::digest(bytes).into()
}

/// Encodes `state` into a self-checking snapshot.
pub fn serialize(state: &GameState) -> Result<Vec<u8>, SnapshotError> {
    let payload = encode_state(state)?;
    let envelope = Envelope {
        version: SNAPSHOT_VERSION,
        checksum: digest(&payload),
        payload,
    };
    bincode::serialize(&envelope).map_err(|e| SnapshotError::Encode(e.to_string()))
}

/// Decodes a snapshot, reporting exactly why it was rejected.
pub fn try_deserialize(bytes: &[u8]) -> Result<GameState, SnapshotError> {
    let envelope: Envelope =
        bincode::deserialize(bytes).map_err(|e| SnapshotError::Decode(e.to_string()))?;

    if envelope.version != SNAPSHOT_VERSION {
        return Err(SnapshotError::UnsupportedVersion {
            found: envelope.version,
            expected: SNAPSHOT_VERSION,
        });
    }

    if digest(&envelope.payload) != envelope.checksum {
        return Err(SnapshotError::ChecksumMismatch);
    }

    let state: GameState = bincode::deserialize(&envelope.payload)
        .map_err(|e| SnapshotError::Decode(e.to_string()))?;

    let canonical: WallSet = state.walls.iter().copied().collect();
    if canonical != state.walls {
        return Err(SnapshotError::NonCanonicalWalls);
    }

    state.validate()?;
    Ok(state)
}

/// Decodes a snapshot, substituting a fresh game for anything unusable.
pub fn deserialize(bytes: &[u8], config: &GameConfig) -> GameState {
    try_deserialize(bytes).unwrap_or_else(|_| engine::new_game(config))
}

/// SHA-256 of the state's canonical encoding. Equal roots mean equal states.
pub fn state_root(state: &GameState) -> Result<StateRoot, SnapshotError> {
    encode_state(state).map(|payload| digest(&payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::state::{PlayerColor, Position, Wall};

    fn played_state() -> GameState {
        let config = GameConfig::default();
        let mut state = engine::new_game(&config);
        for action in [
            Action::place_wall(Position::new(1, 2)),
            Action::end_turn(),
            Action::hit(),
        ] {
            let next = engine::apply(&state, &action, &config);
            assert!(next.is_accepted(), "{action:?}: {:?}", next.error);
            state = next.state;
        }
        state
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let state = played_state();
        let bytes = serialize(&state).unwrap();
        assert_eq!(try_deserialize(&bytes).unwrap(), state);
    }

    #[test]
    fn flipped_payload_byte_fails_checksum() {
        let mut bytes = serialize(&played_state()).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0xff;
        assert_eq!(try_deserialize(&bytes), Err(SnapshotError::ChecksumMismatch));
    }

    #[test]
    fn truncated_bytes_fall_back_to_fresh_game() {
        let config = GameConfig::default();
        let bytes = serialize(&played_state()).unwrap();

        assert!(matches!(
            try_deserialize(&bytes[..bytes.len() / 2]),
            Err(SnapshotError::Decode(_))
        ));
        assert_eq!(
            deserialize(&bytes[..bytes.len() / 2], &config),
            engine::new_game(&config)
        );
        assert_eq!(deserialize(&[], &config), engine::new_game(&config));
    }

    #[test]
    fn rejects_future_version() {
        let payload = encode_state(&GameState::default()).unwrap();
        let envelope = Envelope {
            version: SNAPSHOT_VERSION + 1,
            checksum: digest(&payload),
            payload,
        };
        let bytes = bincode::serialize(&envelope).unwrap();
        assert_eq!(
            try_deserialize(&bytes),
            Err(SnapshotError::UnsupportedVersion {
                found: SNAPSHOT_VERSION + 1,
                expected: SNAPSHOT_VERSION
            })
        );
    }

    #[test]
    fn rejects_well_formed_but_illegal_state() {
        let mut state = GameState::default();
        state
            .walls
            .insert(Wall::new(Position::new(0, 1), PlayerColor::Blue, 2))
            .unwrap();
        let bytes = serialize(&state).unwrap();
        assert!(matches!(
            try_deserialize(&bytes),
            Err(SnapshotError::InvalidState(
                InvariantViolation::WallOnReservedCell { .. }
            ))
        ));
    }

    #[test]
    fn state_root_tracks_content() {
        let a = GameState::default();
        let mut b = a.clone();
        assert_eq!(state_root(&a).unwrap(), state_root(&b).unwrap());

        b.nonce += 1;
        assert_ne!(state_root(&a).unwrap(), state_root(&b).unwrap());
        assert_eq!(hex::encode(state_root(&a).unwrap()).len(), 64);
    }
}
