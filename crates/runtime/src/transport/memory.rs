use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{SnapshotTransport, TransportMessage};
use crate::api::{Result, RuntimeError};

/// In-process transport over a pair of tokio channels.
///
/// Each end of [`MemoryTransport::pair`] announces itself to the other with
/// `PeerConnected` and sends `PeerDisconnected` when dropped.
pub struct MemoryTransport {
    tx: mpsc::UnboundedSender<TransportMessage>,
    rx: mpsc::UnboundedReceiver<TransportMessage>,
}

impl MemoryTransport {
    pub fn pair() -> (Self, Self) {
        let (a_tx, b_rx) = mpsc::unbounded_channel();
        let (b_tx, a_rx) = mpsc::unbounded_channel();

        // Unbounded sends only fail once the receiver is gone, which cannot
        // have happened yet.
        let _ = a_tx.send(TransportMessage::PeerConnected);
        let _ = b_tx.send(TransportMessage::PeerConnected);

        (
            Self { tx: a_tx, rx: a_rx },
            Self { tx: b_tx, rx: b_rx },
        )
    }
}

#[async_trait]
impl SnapshotTransport for MemoryTransport {
    async fn send(&mut self, snapshot: Vec<u8>) -> Result<()> {
        self.tx
            .send(TransportMessage::Snapshot(snapshot))
            .map_err(|_| RuntimeError::TransportClosed)
    }

    async fn recv(&mut self) -> Option<TransportMessage> {
        self.rx.recv().await
    }
}

impl Drop for MemoryTransport {
    fn drop(&mut self) {
        let _ = self.tx.send(TransportMessage::PeerDisconnected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pair_delivers_both_ways() {
        let (mut a, mut b) = MemoryTransport::pair();
        assert_eq!(a.recv().await, Some(TransportMessage::PeerConnected));
        assert_eq!(b.recv().await, Some(TransportMessage::PeerConnected));

        a.send(vec![1, 2, 3]).await.unwrap();
        assert_eq!(b.recv().await, Some(TransportMessage::Snapshot(vec![1, 2, 3])));

        drop(a);
        assert_eq!(b.recv().await, Some(TransportMessage::PeerDisconnected));
        assert_eq!(b.recv().await, None);
    }

    #[tokio::test]
    async fn send_fails_once_peer_is_gone() {
        let (mut a, b) = MemoryTransport::pair();
        drop(b);
        assert!(matches!(
            a.send(vec![0]).await,
            Err(RuntimeError::TransportClosed)
        ));
    }
}
