//! Lock-free chunk pool counters.

use std::sync::atomic::{AtomicU64, Ordering};

/// Point-in-time view of pool activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Chunks served from the pool.
    pub hits: u64,
    /// Chunks built fresh because the pool was empty.
    pub misses: u64,
    /// Released chunks dropped because the pool was full.
    pub evictions: u64,
    /// Requests refused because the live budget was spent.
    pub failures: u64,
}

impl PoolStats {
    /// Fraction of successful requests served by recycling, in [0, 1].
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn reuse_ratio(&self) -> f64 {
        let served = self.hits + self.misses;
        if served == 0 {
            0.0
        } else {
            self.hits as f64 / served as f64
        }
    }
}

/// Counters behind a [`PoolStats`] snapshot.
#[derive(Debug, Default)]
pub(crate) struct AtomicPoolStats {
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
    failures: AtomicU64,
}

impl AtomicPoolStats {
    pub(crate) fn snapshot(&self) -> PoolStats {
        PoolStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }

    pub(crate) fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
        self.failures.store(0, Ordering::Relaxed);
    }

    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }
}
