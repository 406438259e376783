//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::info;

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::limiter::RateLimitStats;
use crate::lookup::PlayerLookup;
use crate::mmr::RoleMmrResult;
use crate::models::{CacheStatsResponse, HealthResponse, RankRequest, RankResponse, RoleMmrRequest};
use crate::riot::{HostTemplate, RiotClient};

/// Application state shared across all handlers.
///
/// Holds the one upstream client, and with it the shared cache and rate limiter.
#[derive(Clone)]
pub struct AppState {
    pub lookup: PlayerLookup,
}

impl AppState {
    /// Creates a new AppState around an existing client.
    pub fn new(client: Arc<RiotClient>) -> Self {
        Self {
            lookup: PlayerLookup::new(client),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let hosts = HostTemplate::new(config.upstream_host_template.clone())?;
        let client = RiotClient::new(config.api_key.clone(), hosts, config.timeout())?;
        Ok(Self::new(Arc::new(client)))
    }

    pub fn client(&self) -> &Arc<RiotClient> {
        self.lookup.client()
    }
}

/// Handler for POST /api/rank
///
/// Looks a player up across platforms and returns their current rank.
pub async fn rank_handler(
    State(state): State<AppState>,
    Json(req): Json<RankRequest>,
) -> Result<Json<RankResponse>> {
    let identity = req.identity().map_err(ApiError::InvalidRequest)?;
    info!(%identity, "Received rank request");

    let rank = state.lookup.lookup_rank(&identity).await?;
    Ok(Json(rank))
}

/// Handler for POST /api/role-mmr
///
/// Estimates a player's MMR in one role from recent matches.
pub async fn role_mmr_handler(
    State(state): State<AppState>,
    Json(req): Json<RoleMmrRequest>,
) -> Result<Json<RoleMmrResult>> {
    let (identity, role) = req.validate().map_err(ApiError::InvalidRequest)?;
    info!(%identity, %role, match_count = req.match_count, "Received role MMR request");

    let result = state.lookup.role_mmr(&identity, role, req.match_count).await?;
    Ok(Json(result))
}

/// Handler for GET /api/rate-limit-stats
pub async fn rate_limit_stats_handler(State(state): State<AppState>) -> Json<RateLimitStats> {
    Json(state.client().limiter().stats().await)
}

/// Handler for GET /api/cache-stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    Json(state.client().cache().stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn offline_state() -> AppState {
        let hosts = HostTemplate::new("http://127.0.0.1:9/{host}").unwrap();
        let client = RiotClient::new("test-key", hosts, Duration::from_secs(1)).unwrap();
        AppState::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_rate_limit_stats_handler() {
        let response = rate_limit_stats_handler(State(offline_state())).await;
        assert_eq!(response.short_total, 20);
        assert_eq!(response.short_remaining, 20);
        assert_eq!(response.long_total, 100);
        assert_eq!(response.long_remaining, 100);
    }

    #[tokio::test]
    async fn test_cache_stats_handler() {
        let response = cache_stats_handler(State(offline_state())).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.total_entries, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[tokio::test]
    async fn test_role_mmr_rejects_invalid_role() {
        let req = RoleMmrRequest {
            puuid: Some("p-1".to_string()),
            role: "CARRY".to_string(),
            ..Default::default()
        };
        let result = role_mmr_handler(State(offline_state()), Json(req)).await;
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_rank_rejects_missing_identity() {
        let result = rank_handler(State(offline_state()), Json(RankRequest::default())).await;
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
    }

    #[test]
    fn test_from_config_rejects_bad_template() {
        let config = Config {
            api_key: "k".to_string(),
            upstream_host_template: "::nonsense::".to_string(),
            ..Default::default()
        };
        assert!(AppState::from_config(&config).is_err());
    }
}
