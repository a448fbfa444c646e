//! Canonical byte encoding of structured values

use crate::Result;
use serde_json::Value;

/// Serialize a value to its canonical byte form (UTF-8 JSON text).
///
/// Deterministic for structurally equal inputs: serde_json's object map is
/// BTreeMap-backed, so keys serialize in sorted order regardless of how the
/// value was assembled.
pub fn canonical_bytes(value: &Value) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}
