//! API Routes
//!
//! Configures the Axum router with all gateway endpoints.

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use super::handlers::{
    cache_stats_handler, health_handler, rank_handler, rate_limit_stats_handler,
    role_mmr_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /api/rank` - Rank lookup by Riot ID or puuid
/// - `POST /api/role-mmr` - Role MMR estimate
/// - `GET /api/rate-limit-stats` - Remaining upstream budget
/// - `GET /api/cache-stats` - Response cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: only `allowed_origins`, with credentials
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .route("/api/rank", post(rank_handler))
        .route("/api/role-mmr", post(role_mmr_handler))
        .route("/api/rate-limit-stats", get(rate_limit_stats_handler))
        .route("/api/cache-stats", get(cache_stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
