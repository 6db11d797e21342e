//! Errors returned by the cache's fallible operations.

use core::fmt;

/// Errors produced by [`crate::LfuCache`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheError {
    /// The requested key is not present in the cache.
    KeyNotFound,
    /// A negative capacity was supplied at construction time.
    InvalidCapacity,
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::KeyNotFound => write!(f, "key not found in cache"),
            CacheError::InvalidCapacity => write!(f, "capacity must not be negative"),
        }
    }
}

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
impl std::error::Error for CacheError {}
