//! Rate Limiter Module
//!
//! Sliding-window admission control for the upstream credential budget.

#[allow(clippy::module_inception)]
mod limiter;
mod window;

pub use limiter::{RateLimitStats, RateLimiter};
pub use window::{AdmissionWindow, WindowConfig};
