//! Boundary to the layer that ships snapshots between two replicas.
//!
//! The runtime never deals with network identity. A transport delivers opaque
//! snapshot bytes and tells the session when the peer comes or goes.

mod memory;

pub use memory::MemoryTransport;

use async_trait::async_trait;

use crate::api::Result;

/// What a transport can hand to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportMessage {
    /// A full encoded game state from the peer.
    Snapshot(Vec<u8>),
    PeerConnected,
    PeerDisconnected,
}

#[async_trait]
pub trait SnapshotTransport: Send {
    /// Ships an encoded snapshot to the peer.
    async fn send(&mut self, snapshot: Vec<u8>) -> Result<()>;

    /// Waits for the next message. `None` once the transport is closed for good.
    async fn recv(&mut self) -> Option<TransportMessage>;
}
