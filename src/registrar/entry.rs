//! Handler records and topology subscriptions
//!
//! This module defines the per-protocol state stored in the registrar.

use super::config::StreamHandlerOptions;

/// Handler registered for a single protocol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamHandlerRecord<H> {
    /// Handler invoked by the caller's dispatcher when a stream arrives
    pub handler: H,

    /// Resolved options (defaults overlaid with caller overrides)
    pub options: StreamHandlerOptions,
}

impl<H> StreamHandlerRecord<H> {
    /// Create a new handler record
    pub fn new(handler: H, options: StreamHandlerOptions) -> Self {
        Self { handler, options }
    }
}

/// Identifier returned when a topology is registered
///
/// Allocated from a per-registrar counter, so ids are never reused while
/// the registrar is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(super) const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the numeric value of the id
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "topology-id-{}", self.0)
    }
}

/// A topology observer registered for a protocol
#[derive(Debug, Clone)]
pub struct TopologySubscription<T> {
    /// Id handed back to the registering caller
    pub id: SubscriptionId,

    /// The observer itself
    pub topology: T,
}

/// One or more subscription ids to remove
///
/// Lets `unregister` take either a single id or a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionIds(Vec<SubscriptionId>);

impl SubscriptionIds {
    /// Iterate over the ids in the order given
    pub fn iter(&self) -> impl Iterator<Item = SubscriptionId> + '_ {
        self.0.iter().copied()
    }

    /// Number of ids in the batch
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the batch is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for SubscriptionIds {
    type Item = SubscriptionId;
    type IntoIter = std::vec::IntoIter<SubscriptionId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<SubscriptionId> for SubscriptionIds {
    fn from(id: SubscriptionId) -> Self {
        Self(vec![id])
    }
}

impl From<Vec<SubscriptionId>> for SubscriptionIds {
    fn from(ids: Vec<SubscriptionId>) -> Self {
        Self(ids)
    }
}

impl From<&[SubscriptionId]> for SubscriptionIds {
    fn from(ids: &[SubscriptionId]) -> Self {
        Self(ids.to_vec())
    }
}

impl<const N: usize> From<[SubscriptionId; N]> for SubscriptionIds {
    fn from(ids: [SubscriptionId; N]) -> Self {
        Self(ids.to_vec())
    }
}

impl FromIterator<SubscriptionId> for SubscriptionIds {
    fn from_iter<I: IntoIterator<Item = SubscriptionId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
