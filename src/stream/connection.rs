//! Connection capability
//!
//! The event builder only needs a connection that can open a stream for a
//! list of candidate protocols. Tests supply their own doubles.

use async_trait::async_trait;

use crate::protocol::ProtocolId;

/// A logical link to a peer that can open streams
#[async_trait]
pub trait Connection: Send + Sync {
    /// Stream (and its metadata) produced by a successful open
    type Stream: Send;

    /// Error raised when no stream could be opened
    type Error: std::error::Error + Send;

    /// Open a stream speaking one of `protocols`
    async fn new_stream(&self, protocols: &[ProtocolId]) -> Result<Self::Stream, Self::Error>;
}
