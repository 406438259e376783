//! Data model shared by the pipeline, the MMR engine and the API
//!
//! Ladder coordinates, roles, player identities, and the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod identity;
pub mod rank;
pub mod requests;
pub mod responses;
pub mod role;

// Re-export commonly used types
pub use identity::PlayerIdentity;
pub use rank::{tier_rating, Division, Tier, SOLO_QUEUE, UNRANKED_BASE_RATING};
pub use requests::{RankRequest, RoleMmrRequest};
pub use responses::{CacheStatsResponse, HealthResponse, RankResponse};
pub use role::{normalize_position, position_matches, Role};
