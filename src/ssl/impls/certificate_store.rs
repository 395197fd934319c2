use crate::ssl::structs::certificate_pair::CertificatePair;
use crate::ssl::structs::certificate_store::CertificateStore;
use arc_swap::ArcSwapOption;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

impl std::fmt::Debug for CertificateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let current = self.current.load();
        f.debug_struct("CertificateStore")
            .field("populated", &current.is_some())
            .field("fingerprint", &(*current).as_ref().map(|pair| pair.fingerprint().to_string()))
            .field("generation", &self.generation())
            .finish()
    }
}

impl CertificateStore {
    /// Creates a store that holds no pair yet.
    pub fn empty() -> Self {
        Self {
            current: ArcSwapOption::empty(),
            generation: AtomicU64::new(0),
        }
    }

    pub fn new(pair: CertificatePair) -> Self {
        let store = Self::empty();
        store.replace(pair);
        store
    }

    /// Returns the pair visible at call time, or `None` before the first
    /// successful `replace`.
    pub fn current(&self) -> Option<Arc<CertificatePair>> {
        self.current.load_full()
    }

    /// Installs `pair` and returns the pair it displaced.
    pub fn replace(&self, pair: CertificatePair) -> Option<Arc<CertificatePair>> {
        self.install(Arc::new(pair)).0
    }

    /// Installs an already shared pair. Returns the displaced pair and the
    /// generation of this install; the generation only identifies this pair
    /// when installs into the store are serialized by the caller.
    pub fn install(&self, pair: Arc<CertificatePair>) -> (Option<Arc<CertificatePair>>, u64) {
        let previous = self.current.swap(Some(pair));
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        (previous, generation)
    }

    pub fn is_populated(&self) -> bool {
        self.current.load().is_some()
    }

    /// Number of pairs installed so far. Bumped after the swap is visible.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}
