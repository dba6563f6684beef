//! Recycling chunk pool with an optional live-chunk budget.

use parking_lot::Mutex;
use tracing::warn;

use crate::alloc::{AllocError, ChunkAllocator};
use crate::chunk::Chunk;
use crate::stats::{AtomicPoolStats, PoolStats};

/// Default number of idle chunks a pool retains.
pub const DEFAULT_MAX_POOLED: usize = 256;

struct Inner {
    idle: Vec<Chunk>,
    live: usize,
}

/// Pool of reusable chunks.
///
/// Released chunks are cleared and kept for the next request, up to
/// `max_pooled`. With a `max_live` budget, requests beyond that many
/// outstanding chunks fail with [`AllocError::Exhausted`].
pub struct ChunkPool {
    inner: Mutex<Inner>,
    max_pooled: usize,
    max_live: Option<usize>,
    stats: AtomicPoolStats,
}

impl ChunkPool {
    /// Create an unbounded pool retaining up to `max_pooled` idle chunks.
    #[must_use]
    pub fn new(max_pooled: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                idle: Vec::new(),
                live: 0,
            }),
            max_pooled,
            max_live: None,
            stats: AtomicPoolStats::default(),
        }
    }

    /// Create a pool that refuses to have more than `max_live` chunks out.
    #[must_use]
    pub fn with_budget(max_pooled: usize, max_live: usize) -> Self {
        Self {
            max_live: Some(max_live),
            ..Self::new(max_pooled)
        }
    }

    /// Chunks currently handed out.
    #[must_use]
    pub fn live(&self) -> usize {
        self.inner.lock().live
    }

    /// Idle chunks waiting for reuse.
    #[must_use]
    pub fn total_pooled(&self) -> usize {
        self.inner.lock().idle.len()
    }

    /// Configured live budget, if any.
    #[must_use]
    pub fn budget(&self) -> Option<usize> {
        self.max_live
    }

    /// Snapshot of pool statistics.
    #[must_use]
    pub fn stats(&self) -> PoolStats {
        self.stats.snapshot()
    }

    /// Reset statistics counters.
    pub fn reset_stats(&self) {
        self.stats.reset();
    }

    /// Drop every idle chunk.
    pub fn clear(&self) {
        self.inner.lock().idle.clear();
    }

    /// Top the idle list up to `count` chunks (bounded by `max_pooled`).
    pub fn warm(&self, count: usize) {
        let mut inner = self.inner.lock();
        let target = count.min(self.max_pooled);
        let missing = target.saturating_sub(inner.idle.len());
        inner.idle.extend(std::iter::repeat_with(Chunk::new).take(missing));
    }
}

impl ChunkAllocator for ChunkPool {
    fn make_chunk(&self) -> Result<Chunk, AllocError> {
        let mut inner = self.inner.lock();
        if let Some(limit) = self.max_live {
            if inner.live >= limit {
                self.stats.record_failure();
                warn!(live = inner.live, limit, "chunk budget exhausted");
                return Err(AllocError::Exhausted {
                    live: inner.live,
                    limit,
                });
            }
        }
        inner.live += 1;
        if let Some(chunk) = inner.idle.pop() {
            self.stats.record_hit();
            Ok(chunk)
        } else {
            self.stats.record_miss();
            Ok(Chunk::new())
        }
    }

    fn release(&self, mut chunk: Chunk) {
        let mut inner = self.inner.lock();
        inner.live = inner.live.saturating_sub(1);
        if inner.idle.len() < self.max_pooled {
            chunk.clear();
            inner.idle.push(chunk);
        } else {
            self.stats.record_eviction();
        }
    }
}

impl Default for ChunkPool {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_POOLED)
    }
}

impl std::fmt::Debug for ChunkPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("ChunkPool")
            .field("idle", &inner.idle.len())
            .field("live", &inner.live)
            .field("max_pooled", &self.max_pooled)
            .field("max_live", &self.max_live)
            .finish()
    }
}
