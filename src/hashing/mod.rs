//! Hashing service: validation, canonical encoding, and digest computation
//!
//! The service turns one arbitrary structured value into one stable digest.
//! Input arrives as [`serde_json::Value`], a closed sum of null, booleans,
//! numbers, strings, arrays, and objects; callable values are not
//! representable at this boundary, and the absent value (`Value::Null`) is
//! rejected before encoding.

mod encode;
mod engine;

pub use encode::canonical_bytes;
pub use engine::{Blake3Engine, CountingEngine, HashEngine};

use crate::model::Digest;
use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;

/// The hashing service
///
/// Owns the hash backend, resolved once at construction. Pure: hashing has
/// no side effects, and structurally equal inputs always produce the same
/// digest.
pub struct Hashing {
    engine: Box<dyn HashEngine>,
}

impl Hashing {
    /// Create a service backed by the default BLAKE3 engine
    pub fn new() -> Self {
        Hashing {
            engine: Box::new(Blake3Engine),
        }
    }

    /// Create a service backed by a caller-supplied engine
    pub fn with_engine(engine: Box<dyn HashEngine>) -> Self {
        Hashing { engine }
    }

    /// Get the backend name
    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Hash one structured value.
    ///
    /// Rejects `Value::Null` with [`Error::InvalidData`]; everything else is
    /// canonically encoded and digested.
    pub fn hash_from(&self, value: &Value) -> Result<Digest> {
        if value.is_null() {
            return Err(Error::InvalidData(
                "absent values cannot be hashed".to_string(),
            ));
        }
        let bytes = canonical_bytes(value)?;
        Ok(self.engine.digest(&bytes))
    }

    /// Hash any serializable item by converting it to a structured value
    /// first. `None` serializes to the absent value and is rejected.
    pub fn hash_item<T: Serialize>(&self, item: &T) -> Result<Digest> {
        let value = serde_json::to_value(item)?;
        self.hash_from(&value)
    }

    /// Combine two digests into their parent digest.
    ///
    /// The canonical combination rule: concatenate the two hex renderings,
    /// left then right, and feed the resulting string through the same
    /// encode-and-digest path as leaf data. Order matters.
    pub fn combine(&self, left: &Digest, right: &Digest) -> Result<Digest> {
        let joined = format!("{}{}", left.to_hex(), right.to_hex());
        self.hash_from(&Value::String(joined))
    }
}

impl Default for Hashing {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hash_from_deterministic() {
        let hashing = Hashing::new();
        let v = json!({"name": "alice", "age": 30});

        assert_eq!(hashing.hash_from(&v).unwrap(), hashing.hash_from(&v).unwrap());
    }

    #[test]
    fn test_hash_from_distinguishes_values() {
        let hashing = Hashing::new();

        assert_ne!(
            hashing.hash_from(&json!([1, 2, 3])).unwrap(),
            hashing.hash_from(&json!([1, 2, 4])).unwrap()
        );
    }

    #[test]
    fn test_hash_from_rejects_null() {
        let hashing = Hashing::new();
        assert!(matches!(
            hashing.hash_from(&Value::Null),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_hash_item_rejects_none() {
        let hashing = Hashing::new();
        assert!(matches!(
            hashing.hash_item(&None::<u32>),
            Err(Error::InvalidData(_))
        ));
        assert!(hashing.hash_item(&Some(1u32)).is_ok());
    }

    #[test]
    fn test_hash_item_matches_hash_from() {
        let hashing = Hashing::new();
        let via_item = hashing.hash_item(&vec![1, 2, 3]).unwrap();
        let via_value = hashing.hash_from(&json!([1, 2, 3])).unwrap();
        assert_eq!(via_item, via_value);
    }

    #[test]
    fn test_combine_is_order_sensitive() {
        let hashing = Hashing::new();
        let a = hashing.hash_from(&json!("a")).unwrap();
        let b = hashing.hash_from(&json!("b")).unwrap();

        let ab = hashing.combine(&a, &b).unwrap();
        let ba = hashing.combine(&b, &a).unwrap();

        assert_ne!(ab, ba);
        assert_eq!(ab, hashing.combine(&a, &b).unwrap());
    }

    #[test]
    fn test_combine_matches_string_hash() {
        // The pair rule is plain string hashing of the joined hex forms
        let hashing = Hashing::new();
        let a = hashing.hash_from(&json!(1)).unwrap();
        let b = hashing.hash_from(&json!(2)).unwrap();

        let expected = hashing
            .hash_from(&json!(format!("{}{}", a.to_hex(), b.to_hex())))
            .unwrap();
        assert_eq!(hashing.combine(&a, &b).unwrap(), expected);
    }
}
