//! Cache Sweep Task
//!
//! Background task that periodically removes expired response-cache entries.

use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ResponseCache;

/// Spawns a background task that sweeps expired entries out of `cache`.
///
/// The task holds only a weak reference and exits on its own once the cache
/// has been dropped, so it lives exactly as long as the cache does. The
/// returned handle can also be aborted during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(ResponseCache::<serde_json::Value>::new());
/// let sweep_handle = spawn_sweep_task(&cache, Duration::from_secs(300));
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweep_task<V>(cache: &Arc<ResponseCache<V>>, interval: Duration) -> JoinHandle<()>
where
    V: Clone + Send + Sync + 'static,
{
    let cache: Weak<ResponseCache<V>> = Arc::downgrade(cache);

    tokio::spawn(async move {
        info!(?interval, "Starting cache sweep task");

        let mut ticker = tokio::time::interval(interval);
        // The first tick of an interval completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let Some(cache) = cache.upgrade() else {
                debug!("Cache dropped, stopping sweep task");
                break;
            };

            let removed = cache.sweep_expired().await;
            if removed > 0 {
                info!("Cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Cache sweep: no expired entries found");
            }
        }
    })
}
