//! Hit/miss/eviction counters and frequency-distribution statistics.
//!
//! This is the crate's observability surface: no `log`/`tracing`
//! dependency is pulled in (the teacher this is descended from never
//! reaches for one either), so structured counters reported through a
//! `BTreeMap` for deterministic ordering are the idiom carried forward
//! instead.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// Counters common to any cache: requests, hits, misses, evictions.
#[derive(Debug, Clone, Default)]
pub struct CoreCacheMetrics {
    /// Total `get` calls, hit or miss.
    pub requests: u64,
    /// `get` calls that found the key.
    pub cache_hits: u64,
    /// `get` calls that did not find the key.
    pub cache_misses: u64,
    /// Entries evicted to make room for an insert.
    pub evictions: u64,
    /// `put` calls that inserted or updated an entry.
    pub insertions: u64,
}

impl CoreCacheMetrics {
    /// Zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful `get`.
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a `get` that found no entry.
    pub fn record_miss(&mut self) {
        self.requests += 1;
        self.cache_misses += 1;
    }

    /// Records one entry being evicted.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Records one `put` call.
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Fraction of requests that were hits, or 0.0 if there were none.
    pub fn hit_rate(&self) -> f64 {
        if self.requests == 0 {
            0.0
        } else {
            self.cache_hits as f64 / self.requests as f64
        }
    }

    /// Reports these counters as a deterministically-ordered map.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert("cache_misses".to_string(), self.cache_misses as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics
    }
}

/// LFU-specific metrics, extending [`CoreCacheMetrics`] with
/// frequency-distribution counters.
#[derive(Debug, Clone, Default)]
pub struct LfuCacheMetrics {
    /// Request/hit/miss/eviction/insertion counters.
    pub core: CoreCacheMetrics,
    /// Lowest frequency any entry has reached since construction.
    pub min_frequency: u64,
    /// Highest frequency any entry has reached since construction.
    pub max_frequency: u64,
    /// Total number of frequency-advance steps performed.
    pub total_frequency_increments: u64,
    /// Number of distinct frequency buckets currently populated.
    pub active_frequency_levels: u64,
}

impl LfuCacheMetrics {
    /// Zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that an entry's frequency rose from `old` to `new`,
    /// widening the tracked min/max as needed.
    pub fn record_frequency_increment(&mut self, old: usize, new: usize) {
        let _ = old;
        self.total_frequency_increments += 1;
        let new = new as u64;
        if self.min_frequency == 0 || new < self.min_frequency {
            self.min_frequency = new;
        }
        if new > self.max_frequency {
            self.max_frequency = new;
        }
    }

    /// Records a successful `get`.
    pub fn record_hit(&mut self) {
        self.core.record_hit();
    }

    /// Records a `get` that found no entry.
    pub fn record_miss(&mut self) {
        self.core.record_miss();
    }

    /// Records one entry being evicted.
    pub fn record_eviction(&mut self) {
        self.core.record_eviction();
    }

    /// Records one `put` call.
    pub fn record_insertion(&mut self) {
        self.core.record_insertion();
    }

    /// Updates the number of distinct frequency levels currently
    /// populated. Called after an eviction or frequency advance may
    /// have destroyed or created a bucket.
    pub fn set_active_frequency_levels(&mut self, levels: u64) {
        self.active_frequency_levels = levels;
    }

    /// Average number of frequency increments per hit, or 0.0 if there
    /// have been no hits.
    pub fn average_frequency(&self) -> f64 {
        if self.core.cache_hits > 0 {
            self.total_frequency_increments as f64 / self.core.cache_hits as f64
        } else {
            0.0
        }
    }

    /// Span between the lowest and highest frequency seen.
    pub fn frequency_range(&self) -> u64 {
        self.max_frequency.saturating_sub(self.min_frequency)
    }

    /// Reports these counters as a deterministically-ordered map.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();
        metrics.insert("min_frequency".to_string(), self.min_frequency as f64);
        metrics.insert("max_frequency".to_string(), self.max_frequency as f64);
        metrics.insert("frequency_range".to_string(), self.frequency_range() as f64);
        metrics.insert(
            "total_frequency_increments".to_string(),
            self.total_frequency_increments as f64,
        );
        metrics.insert(
            "active_frequency_levels".to_string(),
            self.active_frequency_levels as f64,
        );
        metrics.insert("average_frequency".to_string(), self.average_frequency());
        metrics
    }
}

/// Common reporting surface for cache metrics.
pub trait CacheMetrics {
    /// Reports the current counters as a deterministically-ordered map.
    fn metrics(&self) -> BTreeMap<String, f64>;
    /// Name of the eviction algorithm these metrics describe.
    fn algorithm_name(&self) -> &'static str;
}

impl CacheMetrics for LfuCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LFU"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_rate_with_no_requests_is_zero() {
        let metrics = CoreCacheMetrics::new();
        assert_eq!(metrics.hit_rate(), 0.0);
    }

    #[test]
    fn hit_rate_reflects_recorded_events() {
        let mut metrics = CoreCacheMetrics::new();
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_miss();
        assert!((metrics.hit_rate() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn frequency_bounds_track_increments() {
        let mut metrics = LfuCacheMetrics::new();
        metrics.record_frequency_increment(1, 2);
        metrics.record_frequency_increment(2, 3);
        assert_eq!(metrics.min_frequency, 2);
        assert_eq!(metrics.max_frequency, 3);
        assert_eq!(metrics.frequency_range(), 1);
    }

    #[test]
    fn algorithm_name_is_lfu() {
        let metrics = LfuCacheMetrics::new();
        assert_eq!(metrics.algorithm_name(), "LFU");
    }
}
