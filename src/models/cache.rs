use crate::models::stats::ProtocolStatistics;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// How long a fetched entry is served without asking the provider again.
pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(300); // 5 minutes

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheEntry {
    pub statistics: ProtocolStatistics,
    pub fetched_at_millis: u64,
}

impl CacheEntry {
    pub fn is_fresh(&self, now_millis: u64, window: Duration) -> bool {
        now_millis.saturating_sub(self.fetched_at_millis) < window.as_millis() as u64
    }
}

/// Outcome of looking a slug up without touching the network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CacheLookup {
    Fresh(ProtocolStatistics),
    /// An entry exists but its window has elapsed; callers refetch.
    Stale(ProtocolStatistics),
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub total: usize,
    pub fresh: usize,
}

/// Per-slug statistics store shared by every consumer of one service.
///
/// Holds at most one entry per slug. Entries are only ever overwritten by a
/// later successful fetch; nothing is evicted.
#[derive(Debug)]
pub struct StatsCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    window: Duration,
}

impl StatsCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            window: FRESHNESS_WINDOW,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn resolve(&self, slug: &str, now_millis: u64) -> CacheLookup {
        match self.lock().get(slug) {
            Some(entry) if entry.is_fresh(now_millis, self.window) => {
                CacheLookup::Fresh(entry.statistics)
            }
            Some(entry) => CacheLookup::Stale(entry.statistics),
            None => CacheLookup::Missing,
        }
    }

    pub fn store(&self, slug: &str, statistics: ProtocolStatistics, now_millis: u64) {
        self.lock().insert(
            slug.to_string(),
            CacheEntry {
                statistics,
                fetched_at_millis: now_millis,
            },
        );
    }

    pub fn get(&self, slug: &str) -> Option<CacheEntry> {
        self.lock().get(slug).copied()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn stats(&self, now_millis: u64) -> CacheStats {
        let entries = self.lock();
        CacheStats {
            total: entries.len(),
            fresh: entries
                .values()
                .filter(|e| e.is_fresh(now_millis, self.window))
                .count(),
        }
    }

    // Writers never panic while holding the lock, so a poisoned map is
    // still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for StatsCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW_MS: u64 = 300_000;

    fn stats(tvl: f64) -> ProtocolStatistics {
        ProtocolStatistics {
            total_value_locked: tvl,
            change_one_day: 0.0,
            change_seven_day: 0.0,
            volume_24h: None,
        }
    }

    #[test]
    fn missing_slug() {
        let cache = StatsCache::new();
        assert_eq!(cache.resolve("aave", 1_000), CacheLookup::Missing);
        assert!(cache.is_empty());
    }

    #[test]
    fn fresh_until_window_elapses() {
        let cache = StatsCache::new();
        cache.store("aave", stats(1.0), 1_000);

        assert_eq!(cache.resolve("aave", 1_000), CacheLookup::Fresh(stats(1.0)));
        assert_eq!(
            cache.resolve("aave", 1_000 + WINDOW_MS - 1),
            CacheLookup::Fresh(stats(1.0))
        );
        assert_eq!(
            cache.resolve("aave", 1_000 + WINDOW_MS),
            CacheLookup::Stale(stats(1.0))
        );
    }

    #[test]
    fn store_overwrites_instead_of_merging() {
        let cache = StatsCache::new();
        cache.store("aave", stats(1.0), 1_000);
        cache.store("aave", stats(3.0), 2_000);

        assert_eq!(cache.len(), 1);
        let entry = cache.get("aave").unwrap();
        assert_eq!(entry.statistics, stats(3.0));
        assert_eq!(entry.fetched_at_millis, 2_000);
    }

    #[test]
    fn clock_going_backwards_counts_as_fresh() {
        let cache = StatsCache::new();
        cache.store("lido", stats(2.0), 10_000);
        assert_eq!(cache.resolve("lido", 5_000), CacheLookup::Fresh(stats(2.0)));
    }

    #[test]
    fn stats_counts_fresh_entries() {
        let cache = StatsCache::new();
        cache.store("aave", stats(1.0), 0);
        cache.store("lido", stats(2.0), WINDOW_MS);

        assert_eq!(
            cache.stats(WINDOW_MS + 10),
            CacheStats { total: 2, fresh: 1 }
        );
        // Reporting stats never drops stale entries.
        assert_eq!(cache.len(), 2);
    }
}
