//! Admission Window Module
//!
//! One sliding window of admission timestamps with a fixed capacity.

use std::collections::VecDeque;
use std::time::Duration;

use tokio::time::Instant;

// == Window Config ==
/// Capacity `limit` admissions per trailing `window`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    pub limit: usize,
    pub window: Duration,
}

impl WindowConfig {
    /// 20 requests per second.
    pub const SHORT: WindowConfig = WindowConfig {
        limit: 20,
        window: Duration::from_secs(1),
    };

    /// 100 requests per two minutes.
    pub const LONG: WindowConfig = WindowConfig {
        limit: 100,
        window: Duration::from_secs(120),
    };
}

// == Admission Window ==
/// Ordered admission timestamps, oldest first.
#[derive(Debug)]
pub struct AdmissionWindow {
    config: WindowConfig,
    admissions: VecDeque<Instant>,
}

impl AdmissionWindow {
    pub fn new(config: WindowConfig) -> Self {
        Self {
            config,
            admissions: VecDeque::with_capacity(config.limit),
        }
    }

    pub fn config(&self) -> WindowConfig {
        self.config
    }

    /// Drops admissions that are a full window or more behind `now`.
    pub fn prune(&mut self, now: Instant) {
        while let Some(oldest) = self.admissions.front() {
            if now.saturating_duration_since(*oldest) >= self.config.window {
                self.admissions.pop_front();
            } else {
                break;
            }
        }
    }

    pub fn is_full(&self) -> bool {
        self.admissions.len() >= self.config.limit
    }

    /// How long until the oldest admission leaves the window.
    pub fn wait_for_slot(&self, now: Instant) -> Duration {
        match self.admissions.front() {
            Some(oldest) => (*oldest + self.config.window).saturating_duration_since(now),
            None => Duration::ZERO,
        }
    }

    pub fn record(&mut self, at: Instant) {
        self.admissions.push_back(at);
    }

    pub fn len(&self) -> usize {
        self.admissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.admissions.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.config.limit.saturating_sub(self.admissions.len())
    }
}
