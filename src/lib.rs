//! Rank Gateway - A rate-limited, cached gateway in front of the Riot API
//!
//! Provides rank lookups across platforms and per-role MMR estimates built
//! from recent match history.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod limiter;
pub mod lookup;
pub mod mmr;
pub mod models;
pub mod riot;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use error::ApiError;
pub use lookup::PlayerLookup;
pub use riot::RiotClient;
pub use tasks::spawn_sweep_task;
