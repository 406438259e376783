//! Dual-Window Rate Limiter
//!
//! Blocks callers until both the per-second and the per-two-minute budget
//! have room, then records the admission in both.

use serde::Serialize;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::info;

use super::window::{AdmissionWindow, WindowConfig};

// == Rate Limit Stats ==
/// Remaining budget in each window, computed without consuming a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitStats {
    pub short_remaining: usize,
    pub short_total: usize,
    pub long_remaining: usize,
    pub long_total: usize,
}

#[derive(Debug)]
struct Windows {
    short: AdmissionWindow,
    long: AdmissionWindow,
}

impl Windows {
    fn prune(&mut self, now: Instant) {
        self.short.prune(now);
        self.long.prune(now);
    }
}

// == Rate Limiter ==
/// Admission controller shared by every outbound call made with one credential.
///
/// The lock is held for the whole of [`wait`](Self::wait), sleeps included, so
/// admissions are granted strictly one at a time.
#[derive(Debug)]
pub struct RateLimiter {
    windows: Mutex<Windows>,
}

impl RateLimiter {
    // == Constructor ==
    pub fn new(short: WindowConfig, long: WindowConfig) -> Self {
        Self {
            windows: Mutex::new(Windows {
                short: AdmissionWindow::new(short),
                long: AdmissionWindow::new(long),
            }),
        }
    }

    // == Wait ==
    /// Waits for a free slot in both windows and claims it.
    pub async fn wait(&self) {
        let mut windows = self.windows.lock().await;
        windows.prune(Instant::now());

        while windows.short.is_full() {
            let delay = windows.short.wait_for_slot(Instant::now());
            info!(?delay, "Rate limit reached (short window), waiting");
            tokio::time::sleep(delay).await;
            windows.prune(Instant::now());
        }

        while windows.long.is_full() {
            let delay = windows.long.wait_for_slot(Instant::now());
            info!(?delay, "Rate limit reached (long window), waiting");
            tokio::time::sleep(delay).await;
            windows.prune(Instant::now());
        }

        let now = Instant::now();
        windows.short.record(now);
        windows.long.record(now);
    }

    // == Stats ==
    /// Returns the remaining budget after pruning, without admitting anything.
    pub async fn stats(&self) -> RateLimitStats {
        let mut windows = self.windows.lock().await;
        windows.prune(Instant::now());

        RateLimitStats {
            short_remaining: windows.short.remaining(),
            short_total: windows.short.config().limit,
            long_remaining: windows.long.remaining(),
            long_total: windows.long.config().limit,
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(WindowConfig::SHORT, WindowConfig::LONG)
    }
}
