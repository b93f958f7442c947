//! Mock registrar implementation
//!
//! Keeps handler records and topology subscriptions in plain maps owned by
//! the test. Nothing is shared between registrar instances.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::protocol::ProtocolId;

use super::config::{RegistrarConfig, StreamHandlerOptionsInit};
use super::entry::{StreamHandlerRecord, SubscriptionId, SubscriptionIds, TopologySubscription};
use super::error::{RegistrarError, Result};
use super::traits::Registrar;

/// In-memory registrar for tests
///
/// Generic over the handler type `H` and topology type `T`, both stored
/// as-is and handed back on lookup.
#[derive(Debug)]
pub struct MockRegistrar<H, T> {
    /// Map of protocol to its handler
    handlers: HashMap<ProtocolId, StreamHandlerRecord<H>>,

    /// Map of protocol to its subscriptions, in registration order
    topologies: HashMap<ProtocolId, Vec<TopologySubscription<T>>>,

    /// Owning protocol of every live subscription
    subscriptions: HashMap<SubscriptionId, ProtocolId>,

    next_subscription_id: u64,

    /// Configuration
    config: RegistrarConfig,
}

impl<H, T> MockRegistrar<H, T> {
    /// Create a new registrar with default configuration
    pub fn new() -> Self {
        Self::with_config(RegistrarConfig::default())
    }

    /// Create a new registrar with custom configuration
    pub fn with_config(config: RegistrarConfig) -> Self {
        Self {
            handlers: HashMap::new(),
            topologies: HashMap::new(),
            subscriptions: HashMap::new(),
            next_subscription_id: 1,
            config,
        }
    }

    /// Get the registrar configuration
    pub fn config(&self) -> &RegistrarConfig {
        &self.config
    }

    /// Check if a handler is registered for a protocol
    pub fn has_handler(&self, protocol: &str) -> bool {
        self.handlers.contains_key(protocol)
    }

    /// Get total number of registered handlers
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Get total number of live topology subscriptions
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    fn allocate_subscription_id(&mut self) -> SubscriptionId {
        let id = SubscriptionId::new(self.next_subscription_id);
        self.next_subscription_id += 1;
        id
    }

    fn remove_subscription(&mut self, id: SubscriptionId) {
        let Some(protocol) = self.subscriptions.remove(&id) else {
            tracing::trace!(subscription = %id, "Ignoring unknown topology subscription");
            return;
        };

        if let Some(list) = self.topologies.get_mut(&protocol) {
            list.retain(|subscription| subscription.id != id);

            tracing::debug!(
                protocol = %protocol,
                subscription = %id,
                subscriptions = list.len(),
                "Topology unregistered"
            );

            if list.is_empty() {
                self.topologies.remove(&protocol);
            }
        }
    }
}

impl<H, T> Default for MockRegistrar<H, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<H: Send, T: Send> Registrar for MockRegistrar<H, T> {
    type Handler = H;
    type Topology = T;

    fn get_protocols(&self) -> Vec<ProtocolId> {
        let mut protocols: Vec<ProtocolId> = self.handlers.keys().cloned().collect();
        protocols.sort();
        protocols
    }

    async fn handle<P>(
        &mut self,
        protocol: P,
        handler: H,
        options: Option<StreamHandlerOptionsInit>,
    ) -> Result<()>
    where
        P: Into<ProtocolId> + Send,
    {
        let protocol = protocol.into();

        if self.handlers.contains_key(&protocol) {
            tracing::warn!(protocol = %protocol, "Handler already registered");
            return Err(RegistrarError::DuplicateHandler(protocol));
        }

        let defaults = self.config.default_handler_options;
        let options = match options {
            Some(init) => defaults.merge(&init),
            None => defaults,
        };

        tracing::info!(
            protocol = %protocol,
            max_inbound_streams = options.max_inbound_streams,
            max_outbound_streams = options.max_outbound_streams,
            "Handler registered"
        );

        self.handlers
            .insert(protocol, StreamHandlerRecord::new(handler, options));

        Ok(())
    }

    fn unhandle(&mut self, protocol: &str) {
        if self.handlers.remove(protocol).is_some() {
            tracing::info!(protocol = protocol, "Handler unregistered");
        }
    }

    fn get_handler(&self, protocol: &str) -> Result<&StreamHandlerRecord<H>> {
        self.handlers
            .get(protocol)
            .ok_or_else(|| RegistrarError::HandlerNotFound(ProtocolId::new(protocol)))
    }

    fn register(&mut self, protocol: impl Into<ProtocolId>, topology: T) -> SubscriptionId {
        let protocol = protocol.into();
        let id = self.allocate_subscription_id();

        let list = self.topologies.entry(protocol.clone()).or_default();
        list.push(TopologySubscription { id, topology });

        tracing::debug!(
            protocol = %protocol,
            subscription = %id,
            subscriptions = list.len(),
            "Topology registered"
        );

        self.subscriptions.insert(id, protocol);
        id
    }

    fn unregister(&mut self, ids: impl Into<SubscriptionIds>) {
        for id in ids.into() {
            self.remove_subscription(id);
        }
    }

    fn get_topologies(&self, protocol: &str) -> Vec<&T> {
        self.topologies
            .get(protocol)
            .map(|list| list.iter().map(|subscription| &subscription.topology).collect())
            .unwrap_or_default()
    }
}

/// Create a new mock registrar with default configuration
pub fn mock_registrar<H, T>() -> MockRegistrar<H, T> {
    MockRegistrar::new()
}
