//! Synthetic stream events
//!
//! Lets tests simulate "a remote peer opened a stream speaking this
//! protocol" on top of a connection double they provide.

pub mod connection;
pub mod event;

pub use connection::Connection;
pub use event::{build_incoming_stream_event, IncomingStreamData, RemotePeer};
