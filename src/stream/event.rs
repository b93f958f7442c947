//! Synthetic inbound stream events
//!
//! Builds the event a handler would receive when a remote peer opens a
//! stream, without running a handshake.

use crate::peer::PeerId;
use crate::protocol::ProtocolId;

use super::connection::Connection;

/// Partial connection view attached to a synthetic event
///
/// Only the remote peer is available; nothing else about the connection is
/// reproduced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePeer {
    remote_peer: PeerId,
}

impl RemotePeer {
    /// Create a view exposing `remote_peer`
    pub fn new(remote_peer: PeerId) -> Self {
        Self { remote_peer }
    }

    /// Identity of the peer on the other end
    pub fn remote_peer(&self) -> &PeerId {
        &self.remote_peer
    }
}

/// Inbound stream event handed to a protocol handler
#[derive(Debug)]
pub struct IncomingStreamData<S> {
    /// Stream returned by the connection
    pub stream: S,

    /// Connection view the stream arrived on
    pub connection: RemotePeer,
}

/// Build an inbound stream event for `protocol`
///
/// Opens a stream on `connection` for `[protocol]` and pairs it with a
/// connection view exposing `remote_peer`. Errors from the connection are
/// returned unchanged.
pub async fn build_incoming_stream_event<C: Connection>(
    protocol: impl Into<ProtocolId>,
    connection: &C,
    remote_peer: PeerId,
) -> Result<IncomingStreamData<C::Stream>, C::Error> {
    let protocols = [protocol.into()];
    let stream = connection.new_stream(&protocols).await?;

    let [protocol] = &protocols;
    tracing::debug!(
        protocol = %protocol,
        remote_peer = %remote_peer,
        "Synthetic inbound stream opened"
    );

    Ok(IncomingStreamData {
        stream,
        connection: RemotePeer::new(remote_peer),
    })
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use thiserror::Error;
    use tokio::io::{AsyncReadExt, AsyncWriteExt, DuplexStream};
    use tokio_test::{assert_err, assert_ok};

    use super::*;

    #[derive(Debug, Error, PartialEq, Eq)]
    #[error("protocol selection failed: {0:?}")]
    struct UnsupportedProtocol(Vec<String>);

    /// Stream returned by the test connection
    #[derive(Debug)]
    struct TestStream {
        protocol: ProtocolId,
        io: DuplexStream,
    }

    /// Connection double that negotiates against a fixed protocol list
    ///
    /// Each opened stream is one half of an in-memory duplex pipe; the other
    /// half is kept so the test can talk to the "remote" side.
    struct TestConnection {
        supported: Vec<ProtocolId>,
        remote_ends: std::sync::Mutex<Vec<DuplexStream>>,
    }

    impl TestConnection {
        fn new(supported: &[&str]) -> Self {
            Self {
                supported: supported.iter().copied().map(ProtocolId::from).collect(),
                remote_ends: std::sync::Mutex::new(Vec::new()),
            }
        }

        fn take_remote_end(&self) -> DuplexStream {
            self.remote_ends.lock().unwrap().pop().unwrap()
        }
    }

    #[async_trait]
    impl Connection for TestConnection {
        type Stream = TestStream;
        type Error = UnsupportedProtocol;

        async fn new_stream(&self, protocols: &[ProtocolId]) -> Result<TestStream, Self::Error> {
            let protocol = protocols
                .iter()
                .find(|&p| self.supported.contains(p))
                .cloned()
                .ok_or_else(|| {
                    UnsupportedProtocol(protocols.iter().map(|p| p.to_string()).collect())
                })?;

            let (local, remote) = tokio::io::duplex(1024);
            self.remote_ends.lock().unwrap().push(remote);

            Ok(TestStream { protocol, io: local })
        }
    }

    fn remote_peer() -> PeerId {
        PeerId::from_static(b"remote-peer")
    }

    #[tokio::test]
    async fn test_event_carries_stream_and_peer() {
        let connection = TestConnection::new(&["/echo/1.0.0"]);

        let event = assert_ok!(
            build_incoming_stream_event("/echo/1.0.0", &connection, remote_peer()).await
        );

        assert_eq!(event.stream.protocol.as_str(), "/echo/1.0.0");
        assert_eq!(event.connection.remote_peer(), &remote_peer());
    }

    #[tokio::test]
    async fn test_event_stream_is_usable() {
        let connection = TestConnection::new(&["/echo/1.0.0"]);

        let mut event = build_incoming_stream_event("/echo/1.0.0", &connection, remote_peer())
            .await
            .unwrap();
        let mut remote = connection.take_remote_end();

        remote.write_all(b"ping").await.unwrap();

        let mut buf = [0u8; 4];
        event.stream.io.read_exact(&mut buf).await.unwrap();
        assert_eq!(&buf, b"ping");
    }

    #[tokio::test]
    async fn test_connection_error_propagated() {
        let connection = TestConnection::new(&["/echo/1.0.0"]);

        let err = assert_err!(
            build_incoming_stream_event("/chat/1.0.0", &connection, remote_peer()).await
        );

        // Only the requested protocol is offered
        assert_eq!(err, UnsupportedProtocol(vec!["/chat/1.0.0".to_string()]));
    }

    #[tokio::test]
    async fn test_event_built_on_spawned_task() {
        fn spawn_event<C>(connection: C) -> tokio::task::JoinHandle<bool>
        where
            C: Connection + 'static,
        {
            tokio::spawn(async move {
                build_incoming_stream_event("/echo/1.0.0", &connection, remote_peer())
                    .await
                    .is_ok()
            })
        }

        let opened = spawn_event(TestConnection::new(&["/echo/1.0.0"]));
        assert!(opened.await.unwrap());

        let rejected = spawn_event(TestConnection::new(&["/chat/1.0.0"]));
        assert!(!rejected.await.unwrap());
    }
}
