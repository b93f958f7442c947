//! Protocol identifiers
//!
//! A protocol identifier names a wire protocol version (e.g. `/echo/1.0.0`).
//! It is used purely as a lookup key and is never parsed.

use std::borrow::Borrow;

/// Opaque name of a wire protocol
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProtocolId(String);

impl ProtocolId {
    /// Create a new protocol identifier
    pub fn new(protocol: impl Into<String>) -> Self {
        Self(protocol.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier, returning the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ProtocolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProtocolId {
    fn from(protocol: &str) -> Self {
        Self::new(protocol)
    }
}

impl From<String> for ProtocolId {
    fn from(protocol: String) -> Self {
        Self(protocol)
    }
}

impl Borrow<str> for ProtocolId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_raw_string() {
        let protocol = ProtocolId::new("/echo/1.0.0");
        assert_eq!(protocol.to_string(), "/echo/1.0.0");
        assert_eq!(protocol.as_str(), "/echo/1.0.0");
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let mut protocols: Vec<ProtocolId> =
            vec!["/b/1.0.0".into(), "/a/2.0.0".into(), "/a/1.0.0".into()];
        protocols.sort();

        let names: Vec<&str> = protocols.iter().map(ProtocolId::as_str).collect();
        assert_eq!(names, ["/a/1.0.0", "/a/2.0.0", "/b/1.0.0"]);
    }
}
