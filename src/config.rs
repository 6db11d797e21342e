//! Cache configuration.
//!
//! This deliberately departs from the teacher's `NonZeroUsize` capacity
//! field: the contract here allows a capacity of zero (always-evicts,
//! always-empty cache) and rejects only a negative capacity, matching
//! the signed, optional capacity the cache façade accepts.

use crate::error::CacheError;
use core::fmt;

/// Capacity used when [`LfuCacheConfig::new`] receives `None`.
pub const DEFAULT_CAPACITY: usize = 5;

/// Configuration for an LFU cache.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LfuCacheConfig {
    capacity: usize,
}

impl LfuCacheConfig {
    /// Builds a configuration from an optional signed capacity.
    ///
    /// `None` defaults to [`DEFAULT_CAPACITY`]. Negative values are
    /// rejected; zero is a legal, permanently empty cache.
    pub fn new(capacity: Option<i64>) -> Result<Self, CacheError> {
        let capacity = match capacity {
            None => DEFAULT_CAPACITY,
            Some(c) if c < 0 => return Err(CacheError::InvalidCapacity),
            Some(c) => c as usize,
        };
        Ok(Self { capacity })
    }

    /// Builds a configuration directly from a non-negative capacity,
    /// skipping the `Option<i64>` validation in [`LfuCacheConfig::new`].
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Returns the configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl fmt::Debug for LfuCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_used_when_none() {
        let config = LfuCacheConfig::new(None).unwrap();
        assert_eq!(config.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn zero_capacity_is_legal() {
        let config = LfuCacheConfig::new(Some(0)).unwrap();
        assert_eq!(config.capacity(), 0);
    }

    #[test]
    fn negative_capacity_is_rejected() {
        assert_eq!(
            LfuCacheConfig::new(Some(-1)),
            Err(CacheError::InvalidCapacity)
        );
    }

    #[test]
    fn positive_capacity_roundtrips() {
        let config = LfuCacheConfig::new(Some(42)).unwrap();
        assert_eq!(config.capacity(), 42);
    }
}
