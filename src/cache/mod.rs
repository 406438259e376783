//! Cache Module
//!
//! In-memory response cache with per-entry TTL and periodic sweeping.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::ResponseCache;

// == Public Constants ==
/// Interval between background sweeps of expired entries
pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 5 * 60;
