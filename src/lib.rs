//! # rootsum
//!
//! Merkle root digests for auditing ordered data collections.
//!
//! rootsum builds a binary Merkle tree over an ordered sequence of
//! arbitrary structured data items and reduces it to a single root digest.
//! Two parties that compute equal roots hold the same data in the same
//! order; a single differing, missing, or reordered item changes the root.
//!
//! ## Core Concepts
//!
//! - **Leaf digest**: BLAKE3 hash of one canonically encoded data item
//! - **Layer reduction**: adjacent digests are paired left-to-right and
//!   hashed together until one digest remains; odd layers duplicate their
//!   last digest for the pass
//! - **Root cache**: the root is computed on demand and cached until the
//!   next append invalidates it
//!
//! ## Example
//!
//! ```
//! use rootsum::MerkleTree;
//! use serde_json::json;
//!
//! let items = vec![json!(1), json!("two"), json!({"n": 3})];
//! let mut ours = MerkleTree::from_values(&items)?;
//! let mut theirs = MerkleTree::from_values(&items)?;
//!
//! assert!(ours.matches(&mut theirs)?);
//! # Ok::<(), rootsum::Error>(())
//! ```

pub mod hashing;
pub mod model;
pub mod tree;

mod error;

pub use error::{Error, Result};
pub use hashing::{Blake3Engine, CountingEngine, HashEngine, Hashing};
pub use model::Digest;
pub use tree::MerkleTree;
