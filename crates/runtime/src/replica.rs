//! A [`GameSession`] kept in sync with a remote replica.
//!
//! Both sides apply their own actions optimistically and ship the resulting
//! full snapshot. Incoming snapshots are adopted last-write-wins: whatever
//! arrived most recently replaces the local state. There is no merge.
//!
//! A local action is committed before its snapshot is shipped. When shipping
//! fails the action stays applied and the snapshot is marked pending; since
//! every snapshot carries the full state, the next successful send catches the
//! peer up.

use game_core::snapshot;
use game_core::{Action, ExecutionOutcome, GameError};

use crate::api::{Result, RuntimeError};
use crate::events::{Event, GameStateEvent, PeerEvent};
use crate::session::GameSession;
use crate::transport::{SnapshotTransport, TransportMessage};

/// What [`ReplicatedSession::pump`] did with one transport message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpOutcome {
    /// The peer's snapshot replaced the local state.
    Adopted { nonce: u64 },
    /// The peer's snapshot was unusable; a fresh game replaced the local state.
    Reset,
    PeerConnected,
    PeerDisconnected,
    /// The transport is closed and will deliver nothing more.
    Closed,
}

pub struct ReplicatedSession<T> {
    session: GameSession,
    transport: T,
    peer_connected: bool,
    pending_snapshot: bool,
}

impl<T: SnapshotTransport> ReplicatedSession<T> {
    pub fn new(session: GameSession, transport: T) -> Self {
        Self {
            session,
            transport,
            peer_connected: false,
            pending_snapshot: false,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn is_peer_connected(&self) -> bool {
        self.peer_connected
    }

    /// True when the local state has changed since the last snapshot the
    /// peer was sent.
    pub fn has_pending_snapshot(&self) -> bool {
        self.pending_snapshot
    }

    /// Applies a local action and, once accepted, ships the new snapshot.
    ///
    /// `Err` always means the action was refused and the state is unchanged.
    /// An accepted action whose snapshot could not be sent still returns
    /// `Ok`; check [`Self::has_pending_snapshot`] and retry with
    /// [`Self::publish_snapshot`].
    pub async fn submit(&mut self, action: Action) -> Result<ExecutionOutcome> {
        let outcome = self.session.submit(action)?;
        self.pending_snapshot = true;
        if let Err(error) = self.publish_snapshot().await {
            tracing::warn!(
                %error,
                nonce = self.session.state().nonce,
                "action applied but its snapshot was not shipped"
            );
        }
        Ok(outcome)
    }

    /// Sends the current state to the peer. Clears the pending flag on success.
    pub async fn publish_snapshot(&mut self) -> Result<()> {
        let bytes = snapshot::serialize(self.session.state())?;
        tracing::trace!(
            nonce = self.session.state().nonce,
            bytes = bytes.len(),
            "shipping snapshot"
        );
        self.transport.send(bytes).await?;
        self.pending_snapshot = false;
        Ok(())
    }

    /// Waits for and handles one message from the transport.
    pub async fn pump(&mut self) -> Result<PumpOutcome> {
        let Some(message) = self.transport.recv().await else {
            return Ok(PumpOutcome::Closed);
        };

        let outcome = match message {
            TransportMessage::Snapshot(bytes) => self.receive_snapshot(&bytes),
            TransportMessage::PeerConnected => {
                tracing::info!("peer connected");
                self.peer_connected = true;
                self.session
                    .events()
                    .publish(Event::Peer(PeerEvent::Connected));
                PumpOutcome::PeerConnected
            }
            TransportMessage::PeerDisconnected => {
                tracing::info!("peer disconnected");
                self.peer_connected = false;
                self.session
                    .events()
                    .publish(Event::Peer(PeerEvent::Disconnected));
                PumpOutcome::PeerDisconnected
            }
        };
        Ok(outcome)
    }

    /// Pumps until the peer's next snapshot has been handled.
    pub async fn sync(&mut self) -> Result<PumpOutcome> {
        loop {
            match self.pump().await? {
                outcome @ (PumpOutcome::Adopted { .. } | PumpOutcome::Reset) => {
                    return Ok(outcome);
                }
                PumpOutcome::Closed => return Err(RuntimeError::TransportClosed),
                PumpOutcome::PeerConnected | PumpOutcome::PeerDisconnected => {}
            }
        }
    }

    fn receive_snapshot(&mut self, bytes: &[u8]) -> PumpOutcome {
        match snapshot::try_deserialize(bytes) {
            Ok(state) => {
                let nonce = state.nonce;
                let root = match snapshot::state_root(&state) {
                    Ok(root) => hex::encode(root),
                    Err(error) => {
                        tracing::warn!(%error, nonce, "could not hash adopted snapshot");
                        String::new()
                    }
                };
                self.pending_snapshot = false;
                self.session.adopt(state, root);
                PumpOutcome::Adopted { nonce }
            }
            Err(error) => {
                tracing::warn!(
                    %error,
                    code = error.error_code(),
                    "rejected peer snapshot, starting a fresh game"
                );
                self.session.reset();
                self.session
                    .events()
                    .publish(Event::GameState(GameStateEvent::SnapshotRejected {
                        reason: error.to_string(),
                    }));
                PumpOutcome::Reset
            }
        }
    }
}
