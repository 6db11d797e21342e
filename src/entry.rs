//! The Entry Node component: the key/value pair stored at each
//! position of a [`crate::bucket::BucketSlot`]'s entry list.
//!
//! An entry carries no frequency of its own; frequency is a property of
//! the bucket that owns it (see `crate::bucket`), and is reached through
//! the `bucket` back-pointer in O(1).

use crate::bucket::BucketSlot;
use crate::list;
use core::fmt;

pub(crate) struct EntrySlot<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) bucket: *mut list::Node<BucketSlot<K, V>>,
}

impl<K, V> EntrySlot<K, V> {
    pub(crate) fn new(key: K, value: V, bucket: *mut list::Node<BucketSlot<K, V>>) -> Self {
        EntrySlot { key, value, bucket }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for EntrySlot<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntrySlot")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}
