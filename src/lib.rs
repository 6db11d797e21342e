#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! ## Modules
//!
//! - [`lfu`]: the cache façade
//! - [`config`]: capacity configuration
//! - [`metrics`]: hit/miss/eviction and frequency-distribution counters
//! - [`error`]: the error type returned by fallible operations
//!
//! ## Example
//!
//! ```rust
//! use cache_rs::LfuCache;
//!
//! let mut cache = LfuCache::new(Some(2)).unwrap();
//! cache.put("rare", 1);
//! cache.put("popular", 2);
//!
//! for _ in 0..10 {
//!     cache.get(&"popular").unwrap();
//! }
//!
//! cache.put("new", 3); // "rare" evicted: lowest frequency
//! assert!(cache.get(&"popular").is_ok());
//! assert!(cache.get(&"rare").is_err());
//! ```

#![no_std]

extern crate alloc;

/// The Entry Node component: key/value storage at a bucket position.
pub(crate) mod entry;

/// The Frequency Bucket and Bucket List components.
pub(crate) mod bucket;

/// Generic intrusive doubly linked list primitive shared by both levels
/// of the bucket/entry structure.
///
/// Internal infrastructure: exposes unsafe raw pointer operations and is
/// not meant for use outside this crate.
pub(crate) mod list;

/// The Index component: key to entry-handle lookup.
pub(crate) mod index;

/// Cache configuration.
pub mod config;

/// The Least Frequently Used cache implementation.
pub mod lfu;

/// Errors returned by fallible cache operations.
pub mod error;

/// Hit/miss/eviction counters and frequency-distribution statistics.
pub mod metrics;

pub use config::LfuCacheConfig;
pub use error::CacheError;
pub use lfu::LfuCache;
pub use metrics::{CacheMetrics, LfuCacheMetrics};
