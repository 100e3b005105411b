//! Bounded cache of per-row ranked results.
//!
//! Memoizes the full ranked hit list for a query row so repeated requests
//! for the same movie skip the catalogue scan. The cache is bounded by
//! entry count and evicts in insertion order; it never grows into anything
//! resembling a full pairwise matrix.

use std::collections::VecDeque;
use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::Mutex;

use crate::similarity::ScoredHit;

/// Default number of cached rankings.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

struct CacheInner {
    map: AHashMap<usize, Arc<Vec<ScoredHit>>>,
    order: VecDeque<usize>,
}

/// Bounded, thread-safe memo of per-row rankings.
///
/// A capacity of zero disables caching entirely.
pub struct RankingCache {
    capacity: usize,
    inner: Mutex<CacheInner>,
}

impl RankingCache {
    /// Create a cache holding at most `capacity` rankings.
    pub fn new(capacity: usize) -> Self {
        RankingCache {
            capacity,
            inner: Mutex::new(CacheInner {
                map: AHashMap::new(),
                order: VecDeque::new(),
            }),
        }
    }

    /// Fetch the cached ranking for a row, if present.
    pub fn get(&self, row: usize) -> Option<Arc<Vec<ScoredHit>>> {
        self.inner.lock().map.get(&row).cloned()
    }

    /// Insert a ranking, evicting the oldest entry when full.
    pub fn insert(&self, row: usize, hits: Arc<Vec<ScoredHit>>) {
        if self.capacity == 0 {
            return;
        }

        let mut inner = self.inner.lock();
        if inner.map.contains_key(&row) {
            inner.map.insert(row, hits);
            return;
        }
        while inner.map.len() >= self.capacity {
            match inner.order.pop_front() {
                Some(evicted) => {
                    inner.map.remove(&evicted);
                }
                None => break,
            }
        }
        inner.map.insert(row, hits);
        inner.order.push_back(row);
    }

    /// Number of cached rankings.
    pub fn len(&self) -> usize {
        self.inner.lock().map.len()
    }

    /// Check whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().map.is_empty()
    }

    /// Drop every cached ranking.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.map.clear();
        inner.order.clear();
    }
}

impl std::fmt::Debug for RankingCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RankingCache")
            .field("capacity", &self.capacity)
            .field("entries", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hits(score: f32) -> Arc<Vec<ScoredHit>> {
        Arc::new(vec![ScoredHit { row: 0, score }])
    }

    #[test]
    fn test_get_after_insert() {
        let cache = RankingCache::new(4);
        cache.insert(7, hits(0.5));

        let cached = cache.get(7).unwrap();
        assert_eq!(cached[0].score, 0.5);
        assert!(cache.get(8).is_none());
    }

    #[test]
    fn test_eviction_in_insertion_order() {
        let cache = RankingCache::new(2);
        cache.insert(1, hits(0.1));
        cache.insert(2, hits(0.2));
        cache.insert(3, hits(0.3));

        assert!(cache.get(1).is_none());
        assert!(cache.get(2).is_some());
        assert!(cache.get(3).is_some());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_reinsert_replaces_without_growth() {
        let cache = RankingCache::new(2);
        cache.insert(1, hits(0.1));
        cache.insert(1, hits(0.9));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(1).unwrap()[0].score, 0.9);
    }

    #[test]
    fn test_zero_capacity_disables_caching() {
        let cache = RankingCache::new(0);
        cache.insert(1, hits(0.1));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let cache = RankingCache::new(4);
        cache.insert(1, hits(0.1));
        cache.clear();
        assert!(cache.is_empty());
    }
}
