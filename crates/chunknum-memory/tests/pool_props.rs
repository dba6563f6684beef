//! Property-based tests for chunk pool accounting.

use chunknum_memory::{ChunkAllocator, ChunkPool};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Live count always equals chunks handed out and not yet released,
    /// and the budget is never exceeded.
    #[test]
    fn live_count_tracks_outstanding(
        budget in 1usize..16,
        ops in prop::collection::vec(any::<bool>(), 0..64),
    ) {
        let pool = ChunkPool::with_budget(8, budget);
        let mut held = Vec::new();
        for acquire in ops {
            if acquire {
                match pool.make_chunk() {
                    Ok(chunk) => held.push(chunk),
                    Err(_) => prop_assert_eq!(held.len(), budget),
                }
            } else if let Some(chunk) = held.pop() {
                pool.release(chunk);
            }
            prop_assert_eq!(pool.live(), held.len());
            prop_assert!(pool.live() <= budget);
        }
    }

    /// Batch requests either deliver every chunk or leave the pool as it was.
    #[test]
    fn batch_is_all_or_nothing(budget in 0usize..8, count in 0usize..12) {
        let pool = ChunkPool::with_budget(16, budget);
        match pool.make_chunks(count) {
            Ok(chunks) => {
                prop_assert_eq!(chunks.len(), count);
                prop_assert_eq!(pool.live(), count);
            }
            Err(_) => {
                prop_assert!(count > budget);
                prop_assert_eq!(pool.live(), 0);
            }
        }
    }
}
