//! Hash engine trait definition

use crate::model::Digest;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Trait for the cryptographic hash backend
///
/// The engine is chosen once, at tree construction time. Implementations
/// must be fixed-output-size and collision resistant; the default is BLAKE3.
pub trait HashEngine: Send + Sync {
    /// Digest a byte sequence
    fn digest(&self, bytes: &[u8]) -> Digest;

    /// Get the engine name/identifier
    fn name(&self) -> &str;
}

/// The default BLAKE3 engine (32-byte output)
#[derive(Clone, Copy, Debug, Default)]
pub struct Blake3Engine;

impl HashEngine for Blake3Engine {
    fn digest(&self, bytes: &[u8]) -> Digest {
        Digest::from_bytes(*blake3::hash(bytes).as_bytes())
    }

    fn name(&self) -> &str {
        "blake3"
    }
}

/// An engine wrapper that counts digest calls
///
/// Useful for asserting on cache behavior: a cached root computation must
/// perform zero additional digest calls. Delegates to the wrapped engine,
/// so digests are unchanged.
pub struct CountingEngine<E> {
    inner: E,
    calls: Arc<AtomicUsize>,
}

impl<E: HashEngine> CountingEngine<E> {
    /// Wrap an engine with a call counter
    pub fn new(inner: E) -> Self {
        CountingEngine {
            inner,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get a handle to the counter, shared with clones of this engine
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    /// Number of digest calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<E: HashEngine> HashEngine for CountingEngine<E> {
    fn digest(&self, bytes: &[u8]) -> Digest {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.digest(bytes)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
