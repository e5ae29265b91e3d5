//! Session orchestration around the deterministic game engine.
//!
//! This crate wraps [`game_core`] with the pieces a playable match needs:
//! a local replica with statistics and an action log, a topic-based event bus,
//! and a transport boundary for keeping two replicas in sync.
//!
//! Modules are organized by responsibility:
//! - [`session`] owns one replica and is the only caller of the engine
//! - [`replica`] pairs a session with a [`transport::SnapshotTransport`]
//! - [`events`] provides the topic-based event bus
//! - [`repository`] persists snapshots and exports the action log
pub mod api;
pub mod events;
pub mod replica;
pub mod repository;
pub mod session;
pub mod stats;
pub mod transport;

pub use api::{Result, RuntimeError};
pub use events::{Event, EventBus, GameStateEvent, PeerEvent, Topic, TurnEvent};
pub use replica::{PumpOutcome, ReplicatedSession};
pub use repository::{
    ActionLog, ActionLogEntry, FileSnapshotRepository, RepositoryError, SnapshotRepository,
};
pub use session::{GameSession, SessionConfig};
pub use stats::MatchStats;
pub use transport::{MemoryTransport, SnapshotTransport, TransportMessage};
