//! API Module
//!
//! HTTP handlers and routing for the gateway REST API.
//!
//! # Endpoints
//! - `POST /api/rank` - Rank lookup
//! - `POST /api/role-mmr` - Role MMR estimate
//! - `GET /api/rate-limit-stats` - Upstream budget
//! - `GET /api/cache-stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
