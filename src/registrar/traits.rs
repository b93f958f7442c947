//! Registrar contract
//!
//! The capability a component under test depends on. Collaborators take
//! `&mut impl Registrar`, so tests can hand them a [`MockRegistrar`].
//!
//! [`MockRegistrar`]: super::MockRegistrar

use async_trait::async_trait;

use crate::protocol::ProtocolId;

use super::config::StreamHandlerOptionsInit;
use super::entry::{StreamHandlerRecord, SubscriptionId, SubscriptionIds};
use super::error::Result;

/// Protocol handler and topology registration
#[async_trait]
pub trait Registrar: Send {
    /// Handler stored per protocol
    type Handler: Send;

    /// Topology observer stored per subscription
    type Topology: Send;

    /// All protocols with a registered handler, sorted ascending
    fn get_protocols(&self) -> Vec<ProtocolId>;

    /// Register a handler for a protocol
    ///
    /// Fails with [`DuplicateHandler`] if the protocol already has one; the
    /// existing handler must be removed with [`unhandle`] first.
    ///
    /// [`DuplicateHandler`]: super::RegistrarError::DuplicateHandler
    /// [`unhandle`]: Registrar::unhandle
    async fn handle<P>(
        &mut self,
        protocol: P,
        handler: Self::Handler,
        options: Option<StreamHandlerOptionsInit>,
    ) -> Result<()>
    where
        P: Into<ProtocolId> + Send;

    /// Remove the handler for a protocol, if any
    fn unhandle(&mut self, protocol: &str);

    /// Look up the handler for a protocol
    fn get_handler(&self, protocol: &str) -> Result<&StreamHandlerRecord<Self::Handler>>;

    /// Register a topology observer for a protocol
    fn register(&mut self, protocol: impl Into<ProtocolId>, topology: Self::Topology)
        -> SubscriptionId;

    /// Remove one or more topology subscriptions
    ///
    /// Unknown ids are ignored.
    fn unregister(&mut self, ids: impl Into<SubscriptionIds>);

    /// Topology observers for a protocol, in registration order
    fn get_topologies(&self, protocol: &str) -> Vec<&Self::Topology>;
}
