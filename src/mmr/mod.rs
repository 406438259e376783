//! Role MMR Module
//!
//! Derives a per-role skill estimate from recent match history.

mod aggregator;
pub mod calculator;
mod stats;


pub use aggregator::RoleStatsAggregator;
pub use calculator::{calculate, clamp_sample_size, RoleMmrResult, MMR_CEILING, MMR_FLOOR};
pub use stats::RoleStats;
