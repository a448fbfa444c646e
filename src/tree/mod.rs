//! Merkle tree over an ordered collection of data items

mod merkle;

pub use merkle::MerkleTree;
