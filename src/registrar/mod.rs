//! Mock protocol registrar
//!
//! The registrar keeps two kinds of bookkeeping for tests of a peer-to-peer
//! stack: one stream handler per protocol, and any number of topology
//! observers per protocol.
//!
//! # Architecture
//!
//! ```text
//!                       MockRegistrar<H, T>
//!        ┌──────────────────────────────────────────────┐
//!        │ handlers:      HashMap<ProtocolId,           │
//!        │                  StreamHandlerRecord<H>>     │
//!        │ topologies:    HashMap<ProtocolId,           │
//!        │                  Vec<TopologySubscription>>  │
//!        │ subscriptions: HashMap<SubscriptionId,       │
//!        │                  ProtocolId>                 │
//!        └──────────────────────┬───────────────────────┘
//!                               │
//!          ┌────────────────────┼────────────────────┐
//!          ▼                    ▼                    ▼
//!   handle()/unhandle()   register()/unregister()   get_*()
//!      test setup            test setup          assertions
//! ```
//!
//! `subscriptions` indexes every live subscription by id, so `unregister`
//! finds the owning protocol directly.

pub mod config;
pub mod entry;
pub mod error;
pub mod store;
pub mod traits;

pub use config::{RegistrarConfig, StreamHandlerOptions, StreamHandlerOptionsInit};
pub use entry::{StreamHandlerRecord, SubscriptionId, SubscriptionIds, TopologySubscription};
pub use error::{RegistrarError, Result};
pub use store::{mock_registrar, MockRegistrar};
pub use traits::Registrar;
