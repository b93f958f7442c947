//! Registrar error types
//!
//! Error types for handler registration and lookup.

use thiserror::Error;

use crate::protocol::ProtocolId;

/// Error type for registrar operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrarError {
    /// A handler is already registered for the protocol
    #[error("Handler already registered for protocol {0}")]
    DuplicateHandler(ProtocolId),

    /// No handler is registered for the protocol
    #[error("No handler registered for protocol {0}")]
    HandlerNotFound(ProtocolId),
}

/// Result type for registrar operations
pub type Result<T, E = RegistrarError> = std::result::Result<T, E>;
