//! The Index component: key to entry-handle lookup.
//!
//! Owns no entries, only their addresses; the bucket list in
//! `crate::bucket` owns the actual storage. Backed by `hashbrown` for
//! `no_std` compatibility, matching the teacher crate's default hash map.

use crate::entry::EntrySlot;
use crate::list::Node;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use hashbrown::HashMap;

pub(crate) struct Index<K, V, S> {
    map: HashMap<K, *mut Node<EntrySlot<K, V>>, S>,
}

impl<K: Hash + Eq, V, S: BuildHasher + Default> Index<K, V, S> {
    pub(crate) fn with_hasher(hasher: S) -> Self {
        Index {
            map: HashMap::with_hasher(hasher),
        }
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> Index<K, V, S> {
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<*mut Node<EntrySlot<K, V>>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key).copied()
    }

    pub(crate) fn insert(&mut self, key: K, node: *mut Node<EntrySlot<K, V>>) {
        self.map.insert(key, node);
    }

    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<*mut Node<EntrySlot<K, V>>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.remove(key)
    }

    pub(crate) fn update(&mut self, key: &K, node: *mut Node<EntrySlot<K, V>>) {
        if let Some(slot) = self.map.get_mut(key) {
            *slot = node;
        }
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }
}
