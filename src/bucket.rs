//! The Frequency Bucket and Bucket List components.
//!
//! A [`BucketSlot`] holds every entry currently at one frequency, most
//! recently touched first. [`BucketList`] keeps buckets strictly
//! ascending by frequency and exposes only the handful of operations the
//! frequency-advance and eviction algorithms in `crate::lfu` need, each
//! O(1) given a node handle: no scan of the bucket list is ever required
//! to find a neighbor, splice in a new bucket, or drop an empty one.
//!
//! The teacher crate this is descended from indexes its frequency
//! buckets with a `BTreeMap<usize, List<_>>`, which is O(log u) in the
//! number of distinct frequencies present. This type replaces that
//! indexing strategy with a second level of the same intrusive,
//! raw-pointer-linked list primitive used for entries, so that every
//! bucket a cache operation needs is already reachable through a direct
//! handle.

use crate::entry::EntrySlot;
use crate::list::{List, Node};

pub(crate) struct BucketSlot<K, V> {
    pub(crate) frequency: usize,
    pub(crate) entries: List<EntrySlot<K, V>>,
}

impl<K, V> BucketSlot<K, V> {
    fn new(frequency: usize) -> Self {
        BucketSlot {
            frequency,
            entries: List::new(),
        }
    }
}

pub(crate) struct BucketList<K, V> {
    buckets: List<BucketSlot<K, V>>,
}

impl<K, V> BucketList<K, V> {
    pub(crate) fn new() -> Self {
        BucketList {
            buckets: List::new(),
        }
    }

    /// The lowest-frequency bucket, if the cache holds any entries.
    pub(crate) fn lowest(&self) -> Option<*mut Node<BucketSlot<K, V>>> {
        self.buckets.front()
    }

    /// Number of distinct frequency levels currently populated.
    pub(crate) fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the bucket at frequency 1, creating it at the front of
    /// the bucket list if it does not already exist. Used when a brand
    /// new key is inserted.
    pub(crate) fn bucket_for_new_entry(&mut self) -> *mut Node<BucketSlot<K, V>> {
        let head = self.buckets.head_sentinel();
        // SAFETY: `head` is a permanent sentinel of `self.buckets`.
        let first = unsafe { (*head).next() };
        // SAFETY: `first` is checked against the tail sentinel before
        // being dereferenced, so the `value()` call only runs on a live,
        // non-sentinel node.
        let is_freq_one =
            first != self.buckets.tail_sentinel() && unsafe { (*first).value().frequency == 1 };
        if is_freq_one {
            first
        } else {
            // SAFETY: `head` is a permanent sentinel, always live.
            unsafe { self.buckets.insert_after(head, BucketSlot::new(1)) }
        }
    }

    /// Returns the bucket that should hold entries one frequency above
    /// `bucket`, creating and splicing it in immediately after `bucket`
    /// if no such bucket exists yet.
    ///
    /// # Safety
    /// `bucket` must be a live, non-sentinel node belonging to this
    /// bucket list.
    pub(crate) unsafe fn bucket_for_advance(
        &mut self,
        bucket: *mut Node<BucketSlot<K, V>>,
    ) -> *mut Node<BucketSlot<K, V>> {
        // SAFETY: caller guarantees `bucket` is live and non-sentinel.
        let frequency = unsafe { (*bucket).value().frequency };
        // SAFETY: `bucket` is live, so its successor pointer is valid.
        let next = unsafe { (*bucket).next() };
        // SAFETY: `next` is checked against the tail sentinel before
        // being dereferenced.
        let reuse_next = next != self.buckets.tail_sentinel()
            && unsafe { (*next).value().frequency == frequency + 1 };
        if reuse_next {
            next
        } else {
            // SAFETY: `bucket` is live and linked into `self.buckets`.
            unsafe { self.buckets.insert_after(bucket, BucketSlot::new(frequency + 1)) }
        }
    }

    /// Removes an empty bucket from the list and deallocates it.
    ///
    /// # Safety
    /// `bucket` must be a live, non-sentinel, empty node belonging to
    /// this bucket list.
    pub(crate) unsafe fn remove_if_empty(&mut self, bucket: *mut Node<BucketSlot<K, V>>) {
        // SAFETY: caller guarantees `bucket` is live and non-sentinel.
        if unsafe { (*bucket).value().entries.is_empty() } {
            // SAFETY: `bucket` is live, linked, and just confirmed empty.
            unsafe {
                self.buckets.unlink(bucket);
            }
        }
    }

    /// Walks buckets from highest frequency to lowest, and within each
    /// bucket from most to least recently touched, calling `f(key,
    /// value)` and stopping as soon as it returns `false`.
    pub(crate) fn for_each_entry_while<F>(&self, mut f: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        let head = self.buckets.head_sentinel();
        let tail = self.buckets.tail_sentinel();
        // SAFETY: `tail` is a permanent sentinel of `self.buckets`.
        let mut bucket = unsafe { (*tail).prev() };
        while bucket != head {
            // SAFETY: `bucket` is checked against the head sentinel by
            // the loop condition before being dereferenced.
            let keep_going = unsafe { (*bucket).value() }
                .entries
                .for_each_while(|slot| f(&slot.key, &slot.value));
            if !keep_going {
                return;
            }
            // SAFETY: `bucket` is live, so its predecessor pointer is valid.
            bucket = unsafe { (*bucket).prev() };
        }
    }
}
