//! Peer identity
//!
//! The registrar never inspects peer identities; it only carries them from
//! the caller to the synthetic stream events it builds.

use bytes::Bytes;

/// Opaque identity of a remote peer
///
/// Backed by `Bytes`, so clones share the same allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PeerId(Bytes);

impl PeerId {
    /// Create a peer identity from raw bytes
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    /// Create a peer identity from a static byte slice
    pub const fn from_static(bytes: &'static [u8]) -> Self {
        Self(Bytes::from_static(bytes))
    }

    /// Get the raw identity bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Get the identity as shared `Bytes`
    pub fn to_bytes(&self) -> Bytes {
        self.0.clone()
    }
}

impl std::fmt::Display for PeerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_hex() {
        let peer = PeerId::from_static(&[0x00, 0xab, 0x12]);
        assert_eq!(peer.to_string(), "00ab12");
    }

    #[test]
    fn test_clone_shares_bytes() {
        let peer = PeerId::from_bytes(vec![1u8, 2, 3]);
        let copy = peer.clone();

        assert_eq!(peer, copy);
        assert_eq!(copy.as_bytes(), &[1, 2, 3]);
        assert_eq!(peer.to_bytes().as_ptr(), copy.to_bytes().as_ptr());
    }
}
