//! Response DTOs for the gateway API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for the rank lookup (POST /api/rank)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankResponse {
    /// Tier name, or `UNRANKED` when the player has no league entries
    pub tier: String,
    /// Division (`I`..`IV`), empty for apex tiers and unranked players
    pub rank: String,
    /// League points
    pub lp: i32,
    /// Scalar rating derived from tier, division and LP
    pub rating: i32,
    pub profile_icon: i64,
}

impl RankResponse {
    /// Placeholder for a player found on a platform but without ranked entries.
    pub fn unranked(profile_icon: i64) -> Self {
        Self {
            tier: "UNRANKED".to_string(),
            rank: String::new(),
            lp: 0,
            rating: 0,
            profile_icon,
        }
    }
}

/// Response body for the cache stats endpoint (GET /api/cache-stats)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for CacheStatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
