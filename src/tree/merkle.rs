//! Binary Merkle tree with a cached, invalidation-tracked root digest

use crate::hashing::{HashEngine, Hashing};
use crate::model::Digest;
use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;

/// Root-cache state machine.
///
/// `Fresh` holds a root digest that is valid for the current leaf sequence;
/// any append drops back to `Stale`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RootCache {
    Stale,
    Fresh(Digest),
}

/// A binary Merkle tree over an ordered collection of data items.
///
/// Leaves are stored as digests in insertion order (duplicates allowed) and
/// are immutable in position once appended; there are no removal or reorder
/// operations. The root digest is computed on demand and cached until the
/// next append.
///
/// # Example
///
/// ```
/// use rootsum::MerkleTree;
/// use serde_json::json;
///
/// let mut tree = MerkleTree::from_values(&[json!(1), json!(2), json!(3)])?;
/// let root = tree.root_hash()?;
/// assert_eq!(tree.len(), 3);
/// assert_eq!(root, tree.root_hash()?);
/// # Ok::<(), rootsum::Error>(())
/// ```
pub struct MerkleTree {
    hashing: Hashing,
    /// Leaf digests in insertion order
    leaves: Vec<Digest>,
    cache: RootCache,
}

impl MerkleTree {
    /// Create an empty tree backed by the default BLAKE3 engine
    pub fn new() -> Self {
        Self::with_hashing(Hashing::new())
    }

    /// Create an empty tree backed by a caller-supplied hash engine
    pub fn with_engine(engine: Box<dyn HashEngine>) -> Self {
        Self::with_hashing(Hashing::with_engine(engine))
    }

    /// Create an empty tree around an existing hashing service
    pub fn with_hashing(hashing: Hashing) -> Self {
        MerkleTree {
            hashing,
            leaves: Vec::new(),
            cache: RootCache::Stale,
        }
    }

    /// Create a tree over the given items, in order.
    ///
    /// Equivalent to [`MerkleTree::new`] followed by [`MerkleTree::extend`];
    /// fails without constructing any leaves if any item is unhashable.
    pub fn from_values(items: &[Value]) -> Result<Self> {
        let mut tree = Self::new();
        tree.extend(items)?;
        Ok(tree)
    }

    /// Current leaf count (never triggers computation)
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// True iff the tree has no leaves
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// True iff no valid cached root exists for the current leaf sequence
    pub fn is_dirty(&self) -> bool {
        matches!(self.cache, RootCache::Stale)
    }

    /// Hash `data` and append the digest as the next leaf.
    ///
    /// Returns the updated leaf count. On failure the leaf sequence and the
    /// cache are unchanged.
    pub fn push(&mut self, data: &Value) -> Result<usize> {
        let digest = self.hashing.hash_from(data)?;
        self.leaves.push(digest);
        self.cache = RootCache::Stale;
        Ok(self.leaves.len())
    }

    /// Like [`MerkleTree::push`] for any serializable item
    pub fn push_item<T: Serialize>(&mut self, item: &T) -> Result<usize> {
        let digest = self.hashing.hash_item(item)?;
        self.leaves.push(digest);
        self.cache = RootCache::Stale;
        Ok(self.leaves.len())
    }

    /// Append a batch of items in order, all-or-nothing.
    ///
    /// Every item is hashed into a staging buffer first; the leaf sequence
    /// and cache are touched only once the whole batch has hashed
    /// successfully. On failure the tree is unchanged, including items that
    /// preceded the failing one. Returns the final leaf count.
    pub fn extend(&mut self, items: &[Value]) -> Result<usize> {
        let staged: Vec<Digest> = items
            .iter()
            .map(|item| self.hashing.hash_from(item))
            .collect::<Result<_>>()?;

        if !staged.is_empty() {
            self.leaves.extend(staged);
            self.cache = RootCache::Stale;
        }
        Ok(self.leaves.len())
    }

    /// Compute the root digest of the current leaf sequence.
    ///
    /// Returns the cached root without any hashing work when the tree is
    /// clean. Fails with [`Error::EmptyTree`] on zero leaves. Odd layers are
    /// evened out by duplicating their last digest in a working copy only;
    /// the persisted leaf sequence and [`MerkleTree::len`] never change.
    pub fn root_hash(&mut self) -> Result<Digest> {
        if let RootCache::Fresh(root) = self.cache {
            return Ok(root);
        }
        if self.leaves.is_empty() {
            return Err(Error::EmptyTree);
        }

        let root = self.reduce(self.leaves.clone())?;
        self.cache = RootCache::Fresh(root);
        Ok(root)
    }

    /// Compare this tree with another by root digest.
    ///
    /// Computes (or reuses) both roots and returns true iff they are equal.
    /// Under a collision-resistant hash, root equality is a sound proxy for
    /// the two trees holding the same ordered data.
    pub fn matches(&mut self, other: &mut MerkleTree) -> Result<bool> {
        let ours = self.root_hash()?;
        let theirs = other.root_hash()?;
        Ok(ours == theirs)
    }

    /// Reduce a working layer of digests down to the root.
    ///
    /// Pairing is strictly left-to-right by index; each layer is fully
    /// materialized before the next begins. A single leaf is the root as-is,
    /// with no self-combination pass.
    fn reduce(&self, mut layer: Vec<Digest>) -> Result<Digest> {
        while layer.len() > 1 {
            if layer.len() % 2 == 1 {
                // Even out this layer in the working copy only
                let last = layer[layer.len() - 1];
                layer.push(last);
            }

            let mut next = Vec::with_capacity(layer.len() / 2);
            for pair in layer.chunks(2) {
                next.push(self.hashing.combine(&pair[0], &pair[1])?);
            }
            layer = next;
        }

        Ok(layer[0])
    }
}

impl Default for MerkleTree {
    fn default() -> Self {
        Self::new()
    }
}
