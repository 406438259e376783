//! Property-Based Tests for Cache Module
//!
//! Uses proptest against a paused tokio clock so TTL boundaries are exact.

use proptest::prelude::*;
use std::time::Duration;

use crate::cache::ResponseCache;

// == Strategies ==
/// Generates URL-like cache keys
fn key_strategy() -> impl Strategy<Value = String> {
    "https://[a-z0-9]{2,6}\\.api\\.example/lol/[a-z/]{1,24}"
}

/// Generates payload values
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,64}"
}

/// TTLs in whole seconds, from one second to two hours
fn ttl_strategy() -> impl Strategy<Value = u64> {
    1u64..7200
}

/// Runs `body` on a current-thread runtime with the clock paused.
fn run_paused<F: std::future::Future<Output = ()>>(body: F) {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap()
        .block_on(body);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Get right after Set returns the value until the TTL elapses, then nothing.
    #[test]
    fn prop_value_served_exactly_for_ttl(
        key in key_strategy(),
        value in value_strategy(),
        ttl in ttl_strategy()
    ) {
        run_paused(async move {
            let cache = ResponseCache::new();
            cache.set(key.clone(), value.clone(), Duration::from_secs(ttl)).await;

            assert_eq!(cache.get(&key).await, Some(value.clone()));

            tokio::time::advance(Duration::from_secs(ttl) - Duration::from_millis(1)).await;
            assert_eq!(cache.get(&key).await, Some(value));

            tokio::time::advance(Duration::from_millis(1)).await;
            assert_eq!(cache.get(&key).await, None);
        });
    }

    // Delete removes the entry regardless of its remaining TTL.
    #[test]
    fn prop_delete_removes_entry(
        key in key_strategy(),
        value in value_strategy(),
        ttl in ttl_strategy()
    ) {
        run_paused(async move {
            let cache = ResponseCache::new();
            cache.set(key.clone(), value, Duration::from_secs(ttl)).await;
            assert!(cache.delete(&key).await);
            assert_eq!(cache.get(&key).await, None);
        });
    }

    // The sweep removes exactly the entries whose TTL has passed.
    #[test]
    fn prop_sweep_never_removes_live_entries(
        ttls in prop::collection::vec(ttl_strategy(), 1..40),
        elapsed in 0u64..7200
    ) {
        run_paused(async move {
            let cache = ResponseCache::new();
            for (i, ttl) in ttls.iter().enumerate() {
                cache.set(format!("key{}", i), i, Duration::from_secs(*ttl)).await;
            }

            tokio::time::advance(Duration::from_secs(elapsed)).await;
            let removed = cache.sweep_expired().await;

            let expected_removed = ttls.iter().filter(|ttl| **ttl <= elapsed).count();
            assert_eq!(removed, expected_removed);

            for (i, ttl) in ttls.iter().enumerate() {
                let got = cache.get(&format!("key{}", i)).await;
                if *ttl > elapsed {
                    assert_eq!(got, Some(i), "live entry key{} was swept", i);
                } else {
                    assert_eq!(got, None);
                }
            }
        });
    }
}
