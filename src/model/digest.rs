//! Fixed-size digest type used for leaf and root hashes

use crate::{Error, Result};
use std::fmt;

/// A 32-byte BLAKE3 digest.
///
/// The canonical string rendering is lowercase hexadecimal; it is the form
/// used wherever digests are compared, cached, or displayed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; 32]);

impl Digest {
    /// Create a digest from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Digest(bytes)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as lowercase hex (the canonical string form)
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from a hex string
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|e| Error::InvalidDigest(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(Error::InvalidDigest(format!(
                "expected 32 bytes, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Digest(arr))
    }

    /// Get a short prefix for display (first 7 hex chars, like git)
    pub fn short(&self) -> String {
        self.to_hex()[..7].to_string()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.short())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_hex_roundtrip() {
        let d1 = Digest::from_bytes(*blake3::hash(b"test data").as_bytes());
        let hex = d1.to_hex();
        assert_eq!(hex.len(), 64);
        let d2 = Digest::from_hex(&hex).unwrap();
        assert_eq!(d1, d2);
    }

    #[test]
    fn test_digest_rejects_bad_hex() {
        assert!(Digest::from_hex("not hex").is_err());
        assert!(Digest::from_hex("abcd").is_err());
    }

    #[test]
    fn test_digest_short() {
        let d = Digest::from_bytes(*blake3::hash(b"test").as_bytes());
        assert_eq!(d.short().len(), 7);
        assert!(d.to_hex().starts_with(&d.short()));
    }
}
