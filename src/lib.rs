//! In-memory protocol registrar for testing peer-to-peer networking code
//!
//! Register protocol handlers and topology observers without a real network
//! stack, then build synthetic inbound stream events for a protocol, a
//! connection double and a remote peer.
//!
//! # Example
//! ```
//! use registrar_mock::{MockRegistrar, Registrar, StreamHandlerOptionsInit};
//!
//! # async fn example() -> registrar_mock::Result<()> {
//! let mut registrar: MockRegistrar<&str, &str> = MockRegistrar::new();
//!
//! registrar
//!     .handle(
//!         "/echo/1.0.0",
//!         "echo handler",
//!         Some(StreamHandlerOptionsInit::new().max_inbound_streams(5)),
//!     )
//!     .await?;
//!
//! let record = registrar.get_handler("/echo/1.0.0")?;
//! assert_eq!(record.options.max_inbound_streams, 5);
//! assert_eq!(record.options.max_outbound_streams, 1);
//!
//! let id = registrar.register("/echo/1.0.0", "topology");
//! registrar.unregister(id);
//! assert!(registrar.get_topologies("/echo/1.0.0").is_empty());
//! # Ok(())
//! # }
//! ```

pub mod peer;
pub mod protocol;
pub mod registrar;
pub mod stream;

pub use peer::PeerId;
pub use protocol::ProtocolId;
pub use registrar::{
    mock_registrar, MockRegistrar, Registrar, RegistrarConfig, RegistrarError, Result,
    StreamHandlerOptions, StreamHandlerOptionsInit, StreamHandlerRecord, SubscriptionId,
    SubscriptionIds, TopologySubscription,
};
pub use stream::{build_incoming_stream_event, Connection, IncomingStreamData, RemotePeer};
