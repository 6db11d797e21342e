//! Least Frequently Used (LFU) Cache
//!
//! An LFU cache evicts, on overflow, the entry with the lowest access
//! frequency; ties are broken by recency (the least-recently-touched entry
//! among those at the minimum frequency goes first).
//!
//! # Data structure
//!
//! ```text
//! Index                     Bucket List (ascending by frequency)
//! ┌──────────────┐          ┌─────────┐    ┌─────────┐    ┌─────────┐
//! │ "hot"  ──────┼─────────▶│ freq: 3 │───▶│ freq: 5 │───▶│ freq: 9 │
//! │ "warm" ──────┼───┐      │ [hot]   │    │ [warm]  │    │ [old]   │
//! │ "old"  ──────┼───┼──────┼─────────┘    └─────────┘    └─────────┘
//! └──────────────┘   └─────────────────────────────────────────▲
//!                                                               │
//!                                        each bucket's own entry list is
//!                                        ordered most-recent-first; the
//!                                        tail is the eviction candidate
//! ```
//!
//! Every key lives in exactly one bucket (the bucket matching its current
//! frequency); advancing a key's frequency splices its entry out of its
//! current bucket and into the head of the next one, creating that bucket
//! if it doesn't exist and destroying the old one if it's now empty. No
//! step scans the bucket list or an entry list: every pointer involved is
//! already in hand, which is what keeps `get`/`put` worst-case O(1) instead
//! of the O(log u) a frequency-to-list `BTreeMap` would cost (u = number of
//! distinct frequencies present).
//!
//! # Thread safety
//!
//! `LfuCache` is single-writer: no method blocks, yields, or synchronizes.
//! Callers needing concurrent access must wrap it in their own `Mutex` (see
//! the `Send` impl below — the cache owns all of its storage outright, so
//! moving it across threads is sound even though sharing it isn't).

extern crate alloc;

use crate::bucket::BucketList;
use crate::config::LfuCacheConfig;
use crate::entry::EntrySlot;
use crate::error::CacheError;
use crate::index::Index;
use crate::list;
use crate::metrics::{CacheMetrics, LfuCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};

use hashbrown::hash_map::DefaultHashBuilder;

/// An in-memory Least Frequently Used cache with O(1) `get`/`put` and a
/// deterministic frequency-then-recency iteration order (see [`LfuCache::all`]).
///
/// `K` must be [`Hash`] + [`Eq`]; cloned once per newly inserted key (the
/// index and the entry each keep their own owned copy). `V` has no bounds
/// beyond what individual methods need.
pub struct LfuCache<K, V, S = DefaultHashBuilder> {
    config: LfuCacheConfig,
    index: Index<K, V, S>,
    buckets: BucketList<K, V>,
    metrics: LfuCacheMetrics,
}

// SAFETY: an LfuCache owns every node it points into (the bucket list owns
// the buckets, each bucket owns its entries; the index holds only
// non-owning lookup pointers into that same storage). Moving the whole
// aggregate to another thread is sound; nothing outside the struct aliases
// its internals. No `Sync` impl: the cache has no internal synchronization,
// so sharing `&LfuCache` across threads is not sound (contract: single
// writer, external mutual exclusion for concurrent callers).
unsafe impl<K: Send, V: Send, S: Send> Send for LfuCache<K, V, S> {}

impl<K: Hash + Eq, V> LfuCache<K, V, DefaultHashBuilder> {
    /// Creates a cache with an optional capacity.
    ///
    /// `None` uses [`crate::config::DEFAULT_CAPACITY`]. A negative capacity
    /// is rejected with [`CacheError::InvalidCapacity`]; `Some(0)` is legal
    /// and produces a cache where every `put` is a no-op.
    pub fn new(capacity: Option<i64>) -> Result<Self, CacheError> {
        let config = LfuCacheConfig::new(capacity)?;
        Ok(Self::from_config(config, DefaultHashBuilder::default()))
    }

    /// Creates a cache with an explicit, already-validated capacity.
    ///
    /// Infallible convenience for the common case; equivalent to
    /// `LfuCache::new(Some(capacity as i64)).unwrap()` for any capacity that
    /// fits in a `usize`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_config(LfuCacheConfig::with_capacity(capacity), DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher + Default> LfuCache<K, V, S> {
    /// Creates a cache with an explicit capacity and hash builder.
    pub fn with_hasher(capacity: usize, hasher: S) -> Self {
        Self::from_config(LfuCacheConfig::with_capacity(capacity), hasher)
    }

    fn from_config(config: LfuCacheConfig, hasher: S) -> Self {
        LfuCache {
            config,
            index: Index::with_hasher(hasher),
            buckets: BucketList::new(),
            metrics: LfuCacheMetrics::new(),
        }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LfuCache<K, V, S> {
    /// Number of entries currently stored. O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// `true` if the cache holds no entries. O(1).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The configured capacity. O(1).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.config.capacity()
    }

    /// Looks up `key` without changing its frequency. O(1).
    pub fn frequency_of<Q>(&self, key: &Q) -> Result<usize, CacheError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let node = self.index.get(key).ok_or(CacheError::KeyNotFound)?;
        // SAFETY: `node` came from `self.index`, a live entry this
        // cache's buckets own.
        Ok(unsafe { bucket_frequency(node) })
    }

    /// Returns the value for `key`, advancing its frequency by one. O(1).
    pub fn get<Q>(&mut self, key: &Q) -> Result<&V, CacheError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let node = match self.index.get(key) {
            Some(node) => node,
            None => {
                self.metrics.record_miss();
                return Err(CacheError::KeyNotFound);
            }
        };
        self.metrics.record_hit();
        // SAFETY: `node` came from `self.index`, which only ever holds
        // handles to entries this cache's buckets own and have not yet
        // removed.
        let old_frequency = unsafe { bucket_frequency(node) };
        self.metrics
            .record_frequency_increment(old_frequency, old_frequency + 1);
        // SAFETY: see above; `node` is a live entry owned by this cache.
        let new_node = unsafe { self.advance(node) };
        self.metrics
            .set_active_frequency_levels(self.buckets.bucket_count() as u64);
        // SAFETY: `advance` returns the live node the entry was spliced into.
        Ok(unsafe { &(*new_node).value().value })
    }

    /// Inserts or updates `key`. Never fails. O(1).
    ///
    /// If `key` is already present, its value is replaced and its frequency
    /// advances by one (identical to a successful [`LfuCache::get`]). If
    /// `key` is absent and the cache is at capacity, the lowest-frequency,
    /// least-recently-touched entry is evicted first; the new entry starts
    /// at frequency 1. With capacity 0 this is always a silent no-op.
    pub fn put(&mut self, key: K, value: V)
    where
        K: Clone,
    {
        if self.capacity() == 0 {
            return;
        }

        if let Some(node) = self.index.get(&key) {
            // SAFETY: `node` came from `self.index`, a live entry this
            // cache's buckets own.
            unsafe {
                (*node).value_mut().value = value;
            }
            // SAFETY: see above.
            let old_frequency = unsafe { bucket_frequency(node) };
            self.metrics
                .record_frequency_increment(old_frequency, old_frequency + 1);
            // SAFETY: see above.
            unsafe {
                self.advance(node);
            }
            self.metrics
                .set_active_frequency_levels(self.buckets.bucket_count() as u64);
            return;
        }

        if self.len() == self.capacity() {
            self.evict();
        }

        let bucket = self.buckets.bucket_for_new_entry();
        let index_key = key.clone();
        let slot = EntrySlot::new(key, value, bucket);
        // SAFETY: `bucket_for_new_entry` always returns a live,
        // non-sentinel bucket node.
        let node = unsafe { (*bucket).value_mut() }.entries.push_front(slot);
        self.index.insert(index_key, node);

        self.metrics.record_insertion();
        self.metrics
            .set_active_frequency_levels(self.buckets.bucket_count() as u64);
    }

    /// Removes `key`, returning its value if present. O(1).
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let node = self.index.remove(key)?;
        // SAFETY: `node` was a live entry handle held by the index.
        let bucket = unsafe { (*node).value().bucket };
        // SAFETY: `bucket` is the live bucket that owns `node`.
        let slot = unsafe { (*bucket).value_mut() }.entries.unlink(node);
        // SAFETY: `bucket` is live and non-sentinel.
        unsafe {
            self.buckets.remove_if_empty(bucket);
        }
        self.metrics
            .set_active_frequency_levels(self.buckets.bucket_count() as u64);
        Some(slot.value)
    }

    /// Removes every entry. O(size).
    pub fn clear(&mut self) {
        self.index.clear();
        self.buckets = BucketList::new();
        self.metrics.set_active_frequency_levels(0);
    }

    /// Visits every `(key, value)` pair, highest frequency first and, within
    /// a frequency, most-recently-touched first, until either every pair has
    /// been visited or `f` returns `false`. No per-element allocation.
    ///
    /// The cache must not be mutated while this call is in progress; doing
    /// so from within `f` is a contract violation with unspecified results.
    pub fn all<F>(&self, f: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.buckets.for_each_entry_while(f);
    }

    /// Evicts the tail entry of the lowest-frequency bucket. Caller
    /// guarantees `len() >= 1`.
    fn evict(&mut self) {
        let bucket = self
            .buckets
            .lowest()
            .expect("invariant I2: size <= capacity and capacity > 0 here, so size >= 1 implies a bucket exists");
        // SAFETY: `bucket` is the live, lowest-frequency bucket.
        let slot = unsafe { (*bucket).value_mut() }
            .entries
            .pop_back()
            .expect("invariant I4: no empty bucket persists between calls");
        self.index.remove(&slot.key);
        // SAFETY: `bucket` is live and non-sentinel.
        unsafe {
            self.buckets.remove_if_empty(bucket);
        }
        self.metrics.record_eviction();
    }

    /// Moves the entry at `node` from its current bucket to the bucket one
    /// frequency higher (creating it if needed), at the head (most-recent
    /// position). Updates the index to the entry's new location and
    /// destroys the old bucket if it's now empty. Returns the entry's new
    /// node handle.
    ///
    /// # Safety
    /// `node` must be a live entry node currently owned by one of this
    /// cache's buckets.
    unsafe fn advance(
        &mut self,
        node: *mut list::Node<EntrySlot<K, V>>,
    ) -> *mut list::Node<EntrySlot<K, V>> {
        unsafe {
            let old_bucket = (*node).value().bucket;
            let target_bucket = self.buckets.bucket_for_advance(old_bucket);
            let mut slot = (*old_bucket).value_mut().entries.unlink(node);
            slot.bucket = target_bucket;
            let new_node = (*target_bucket).value_mut().entries.push_front(slot);
            self.index.update(&(*new_node).value().key, new_node);
            self.buckets.remove_if_empty(old_bucket);
            new_node
        }
    }
}

/// Reads the frequency of the bucket owning `node`, without mutating it.
///
/// # Safety
/// `node` must be a live entry node.
unsafe fn bucket_frequency<K, V>(node: *mut list::Node<EntrySlot<K, V>>) -> usize {
    unsafe { (*(*node).value().bucket).value().frequency }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LfuCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K, V, S> fmt::Debug for LfuCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCache")
            .field("capacity", &self.config.capacity())
            .field("len", &self.index.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn basic_insert_and_frequency_tracking() {
        let mut cache = LfuCache::with_capacity(3);
        cache.put(1, 1);
        cache.put(2, 4);
        cache.put(3, 9);

        assert_eq!(cache.get(&1), Ok(&1));
        assert_eq!(cache.get(&2), Ok(&4));
        assert_eq!(cache.get(&3), Ok(&9));
        assert_eq!(cache.get(&1), Ok(&1));
        assert_eq!(cache.frequency_of(&1), Ok(3));

        let mut seen = Vec::new();
        cache.all(|k, v| {
            seen.push((*k, *v));
            true
        });
        assert_eq!(seen, alloc::vec![(1, 1), (3, 9), (2, 4)]);
    }

    #[test]
    fn eviction_picks_lowest_frequency() {
        let mut cache = LfuCache::with_capacity(2);
        cache.put(1, "one");
        cache.put(2, "two");
        assert_eq!(cache.get(&1), Ok(&"one"));

        // "2" is the sole frequency-1 entry; "1" is now at frequency 2.
        cache.put(3, "three");
        assert_eq!(cache.get(&2), Err(CacheError::KeyNotFound));
        assert_eq!(cache.get(&3), Ok(&"three"));
    }

    #[test]
    fn eviction_ties_break_by_recency() {
        let mut cache = LfuCache::with_capacity(2);
        cache.put(1, "one");
        cache.put(2, "two");
        // Both at frequency 1; "1" is the older (least-recent) of the two.
        cache.put(3, "three");

        assert_eq!(cache.get(&1), Err(CacheError::KeyNotFound));
        assert_eq!(cache.get(&2), Ok(&"two"));
        assert_eq!(cache.get(&3), Ok(&"three"));
    }

    #[test]
    fn update_existing_key_advances_frequency_and_replaces_value() {
        let mut cache = LfuCache::with_capacity(3);
        cache.put(1, 10);
        cache.get(&1).unwrap();
        cache.put(1, 20);
        assert_eq!(cache.get(&1), Ok(&20));
        assert_eq!(cache.frequency_of(&1), Ok(3));
    }

    #[test]
    fn zero_capacity_cache_never_stores_anything() {
        let mut cache: LfuCache<i32, i32> = LfuCache::with_capacity(0);
        cache.put(1, 1);
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.get(&1), Err(CacheError::KeyNotFound));
        let mut seen = 0;
        cache.all(|_, _| {
            seen += 1;
            true
        });
        assert_eq!(seen, 0);
    }

    #[test]
    fn negative_capacity_is_rejected() {
        assert!(matches!(
            LfuCache::<i32, i32>::new(Some(-1)),
            Err(CacheError::InvalidCapacity)
        ));
    }

    #[test]
    fn default_capacity_is_five() {
        let cache: LfuCache<i32, i32> = LfuCache::new(None).unwrap();
        assert_eq!(cache.capacity(), 5);
    }

    #[test]
    fn remove_detaches_key_and_may_empty_a_bucket() {
        let mut cache = LfuCache::with_capacity(3);
        cache.put(1, "one");
        cache.put(2, "two");
        assert_eq!(cache.remove(&1), Some("one"));
        assert_eq!(cache.remove(&1), None);
        assert_eq!(cache.get(&2), Ok(&"two"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clear_empties_the_cache_and_allows_reuse() {
        let mut cache = LfuCache::with_capacity(3);
        cache.put(1, 1);
        cache.put(2, 2);
        cache.clear();
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        cache.put(3, 3);
        assert_eq!(cache.get(&3), Ok(&3));
    }

    #[test]
    fn early_stop_leaves_cache_state_unchanged() {
        let mut cache = LfuCache::with_capacity(4);
        for i in 0..4 {
            cache.put(i, i * i);
        }
        let mut visited = 0;
        cache.all(|_, _| {
            visited += 1;
            visited < 2
        });
        assert_eq!(visited, 2);
        assert_eq!(cache.len(), 4);
        assert_eq!(cache.frequency_of(&0), Ok(1));
    }

    #[test]
    fn metrics_report_hits_and_misses() {
        let mut cache = LfuCache::with_capacity(2);
        cache.put(1, 1);
        let _ = cache.get(&1);
        let _ = cache.get(&2);
        let report = cache.metrics();
        assert_eq!(report.get("cache_hits"), Some(&1.0));
        assert_eq!(report.get("cache_misses"), Some(&1.0));
        assert_eq!(cache.algorithm_name(), "LFU");
    }
}
