//! Balance sheet caching using Moka.
//!
//! Balances are recomputed on demand; collaborators that refresh summary
//! views often can put this cache in front of the aggregator. Entries are
//! keyed by a caller-supplied snapshot key (e.g. group id plus revision
//! counter) and must be invalidated on any underlying record change -
//! staleness is tolerated only until the next explicit invalidation.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use splitra_shared::CurrencyFormat;

use super::aggregate::{BalanceAggregator, BalanceSheet};
use super::error::LedgerError;
use super::record::ExpenseRecord;

/// Default cache capacity (number of entries).
const DEFAULT_CACHE_CAPACITY: u64 = 100;

/// Default time-to-live for cache entries (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

/// Cache of aggregated balance sheets.
///
/// Thread-safe and suitable for concurrent readers; moka provides the
/// single-writer discipline internally. Failed aggregations are never
/// cached.
#[derive(Clone)]
pub struct BalanceCache {
    cache: Cache<String, Arc<BalanceSheet>>,
}

impl BalanceCache {
    /// Creates a cache with default settings (100 entries, 5 minute TTL).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a cache with custom capacity and TTL.
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Aggregates a record set, returning the cached sheet if the snapshot
    /// key is known.
    ///
    /// # Errors
    ///
    /// Propagates aggregation failures; nothing is cached on failure.
    pub fn aggregate_cached(
        &self,
        snapshot_key: &str,
        records: &[ExpenseRecord],
        format: &CurrencyFormat,
    ) -> Result<Arc<BalanceSheet>, LedgerError> {
        if let Some(cached) = self.cache.get(snapshot_key) {
            return Ok(cached);
        }

        let sheet = Arc::new(BalanceAggregator::aggregate(records, format)?);
        self.cache.insert(snapshot_key.to_string(), Arc::clone(&sheet));
        Ok(sheet)
    }

    /// Invalidates the entry for one snapshot key.
    pub fn invalidate(&self, snapshot_key: &str) {
        tracing::debug!(snapshot_key, "invalidating cached balance sheet");
        self.cache.invalidate(snapshot_key);
    }

    /// Invalidates every cached entry.
    pub fn invalidate_all(&self) {
        tracing::debug!("invalidating all cached balance sheets");
        self.cache.invalidate_all();
    }

    /// Returns the number of entries currently in the cache.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs cache maintenance tasks.
    ///
    /// Moka handles expiry in the background, but calling this explicitly
    /// reclaims memory sooner and makes `entry_count` precise.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }
}

impl Default for BalanceCache {
    fn default() -> Self {
        Self::new()
    }
}
